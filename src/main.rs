use std::{env, path::Path, process, time::Instant};

use anyhow::bail;
use minipas::driver::driver::{run, OutputPaths, Outcome};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 && args.len() != 3 {
        bail!("Usage: {} <source-file> [output-dir]", args[0]);
    }

    let paths = OutputPaths::new(&args[1], args.get(2).map(Path::new));

    let start = Instant::now();
    let outcome = run(&paths)?;

    match outcome {
        Outcome::LexerAborted => println!(
            "Compiler aborted due to lexer error. A complete log of this run can be found in: {}",
            paths.errors.display()
        ),
        Outcome::ParserFailed => println!(
            "Compiler aborted due to parser error. A complete log of this run can be found in: {}",
            paths.errors.display()
        ),
        Outcome::Succeeded => println!("Analyzed {} in {:?}", paths.source.display(), start.elapsed()),
    }

    if outcome.exit_code() != 0 {
        process::exit(outcome.exit_code());
    }

    Ok(())
}
