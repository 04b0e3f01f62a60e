//! End-to-end runs: reader, tokenizer, analyzer and report files.
//!
//! `compile_source` works purely in memory; `run` adds the output files
//! derived from the source path.

pub mod driver;
