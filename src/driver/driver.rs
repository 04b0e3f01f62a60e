use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

use anyhow::Context;
use tracing::info;

use crate::{
    errors::errors::Error,
    format_diagnostics,
    lexer::lexer::{tokenize, Lexer},
    parser::parser::{parse, Parser},
    read_words,
    report::report::{format_procedures, format_tokens, format_variables},
};

/// Files written by one run, all named after the source file's stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub source: PathBuf,
    /// Tokenizer log
    pub tokens: PathBuf,
    /// Analyzer log of consumed tokens
    pub analyzed: PathBuf,
    pub variables: PathBuf,
    pub procedures: PathBuf,
    pub errors: PathBuf,
}

impl OutputPaths {
    /// Outputs go next to the source unless `out_dir` is given.
    pub fn new(source: impl Into<PathBuf>, out_dir: Option<&Path>) -> Self {
        let source = source.into();
        let stem = source
            .file_stem()
            .map(|stem| stem.to_os_string())
            .unwrap_or_else(|| "out".into());
        let dir = match out_dir {
            Some(dir) => dir.to_path_buf(),
            None => source.parent().map(Path::to_path_buf).unwrap_or_default(),
        };
        let with_extension = |extension: &str| {
            let mut name = stem.clone();
            name.push(".");
            name.push(extension);
            dir.join(name)
        };

        OutputPaths {
            tokens: with_extension("dyd"),
            analyzed: with_extension("dys"),
            variables: with_extension("var"),
            procedures: with_extension("pro"),
            errors: with_extension("err"),
            source,
        }
    }
}

pub enum Compilation {
    /// The tokenizer failed; the analyzer never ran.
    LexerFailed(Lexer),
    Analyzed {
        lexer: Lexer,
        parser: Parser,
        /// The fatal error, if the analysis was aborted.
        aborted: Option<Error>,
    },
}

impl Compilation {
    pub fn good(&self) -> bool {
        match self {
            Compilation::LexerFailed(_) => false,
            Compilation::Analyzed { parser, .. } => parser.good(),
        }
    }

    /// Lexical diagnostics followed by the analyzer's.
    pub fn diagnostics(&self) -> Vec<&Error> {
        match self {
            Compilation::LexerFailed(lexer) => lexer.errors().iter().collect(),
            Compilation::Analyzed { lexer, parser, .. } => {
                lexer.errors().iter().chain(parser.diagnostics()).collect()
            }
        }
    }

    pub fn outcome(&self) -> Outcome {
        match self {
            Compilation::LexerFailed(_) => Outcome::LexerAborted,
            Compilation::Analyzed { parser, .. } if !parser.good() => Outcome::ParserFailed,
            Compilation::Analyzed { .. } => Outcome::Succeeded,
        }
    }
}

/// Overall result of a run. Only a lexical failure is reported through the
/// exit code; analyzer failures still produce every table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    LexerAborted,
    ParserFailed,
    Succeeded,
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::LexerAborted => 1,
            Outcome::ParserFailed | Outcome::Succeeded => 0,
        }
    }
}

pub fn compile_source(source: &str) -> Compilation {
    let start = Instant::now();
    let lexer = tokenize(&read_words(source));
    info!("Tokenized in {:?}", start.elapsed());

    if !lexer.good() {
        return Compilation::LexerFailed(lexer);
    }

    let parse_start = Instant::now();
    let (parser, result) = parse(lexer.tokens().to_vec());
    info!("Parsed in {:?}", parse_start.elapsed());

    Compilation::Analyzed {
        lexer,
        parser,
        aborted: result.err(),
    }
}

fn write_file(path: &Path, contents: String) -> anyhow::Result<()> {
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}

/// Reads the source, analyzes it and writes every output file.
pub fn run(paths: &OutputPaths) -> anyhow::Result<Outcome> {
    let source = fs::read_to_string(&paths.source)
        .with_context(|| format!("failed to read {}", paths.source.display()))?;

    let compilation = compile_source(&source);
    write_file(&paths.errors, format_diagnostics(compilation.diagnostics()))?;

    if let Compilation::Analyzed { lexer, parser, .. } = &compilation {
        write_file(&paths.tokens, format_tokens(lexer.tokens()))?;
        write_file(&paths.analyzed, format_tokens(parser.results()))?;
        write_file(&paths.variables, format_variables(parser.symbols()))?;
        write_file(&paths.procedures, format_procedures(parser.symbols()))?;
    }

    Ok(compilation.outcome())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_paths_next_to_source() {
        let paths = OutputPaths::new("Test/source.pas", None);

        assert_eq!(paths.tokens, PathBuf::from("Test/source.dyd"));
        assert_eq!(paths.analyzed, PathBuf::from("Test/source.dys"));
        assert_eq!(paths.variables, PathBuf::from("Test/source.var"));
        assert_eq!(paths.procedures, PathBuf::from("Test/source.pro"));
        assert_eq!(paths.errors, PathBuf::from("Test/source.err"));
    }

    #[test]
    fn test_output_paths_in_out_dir() {
        let paths = OutputPaths::new("src/prog.pas", Some(Path::new("build")));

        assert_eq!(paths.source, PathBuf::from("src/prog.pas"));
        assert_eq!(paths.errors, PathBuf::from("build/prog.err"));
    }

    #[test]
    fn test_outcome_exit_codes() {
        assert_eq!(Outcome::LexerAborted.exit_code(), 1);
        assert_eq!(Outcome::ParserFailed.exit_code(), 0);
        assert_eq!(Outcome::Succeeded.exit_code(), 0);
    }
}
