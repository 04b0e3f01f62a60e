//! Fixed-width rendering of the front end's output tables.
//!
//! - Token logs (`.dyd` from the tokenizer, `.dys` from the analyzer)
//! - The variable table (`.var`)
//! - The procedure table (`.pro`)

pub mod report;
