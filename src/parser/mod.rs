//! Analyzer module: recursive-descent syntax and static-scope analysis.
//!
//! This module recognizes the grammar with one token of lookahead and,
//! in the same pass, maintains the variable and procedure tables:
//!
//! - Declaration rules (program, procedure bodies, variables, parameters)
//! - Statement rules, dispatched through a lookup table on the first token
//! - Arithmetic and conditional expressions
//! - Scope stack and symbol tables
//!
//! Recoverable errors are recorded on the parser and parsing resumes at the
//! same token. Fatal errors are returned as `Err` and abort the whole run.

pub mod decl;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod symbols;
