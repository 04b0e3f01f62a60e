//! Lexical analysis module for the front end.
//!
//! This module contains the tokenizer that converts whitespace-delimited
//! words into a stream of classified tokens. It handles:
//!
//! - Recognition of reserved words, identifiers and numbers
//! - One- and two-character operators and punctuation
//! - End-of-line markers and line counting for diagnostics
//! - Lexical errors, which are recorded without stopping the scan

pub mod lexer;
pub mod tokens;
