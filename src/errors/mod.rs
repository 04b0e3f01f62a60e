//! Error types and error handling for the front end.
//!
//! This module defines the diagnostics raised by both stages:
//!
//! - Lexical errors from the tokenizer (line only)
//! - Recoverable syntax/semantic errors from the analyzer
//! - Fatal errors that abort the remaining analysis
//!
//! Every error carries a `Position` and renders as a single diagnostic line.

pub mod errors;

#[cfg(test)]
mod tests;
