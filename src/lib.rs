#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::Error;

pub mod driver;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod report;

extern crate regex;

/// Marker word the reader inserts at every line boundary.
pub const END_OF_LINE_MARKER: &str = "\n";

/// Where a diagnostic was raised.
///
/// The tokenizer only knows the line; the analyzer also tracks how many
/// tokens it has consumed on that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub index: Option<usize>,
}

impl Position {
    pub fn line(line: usize) -> Self {
        Position { line, index: None }
    }

    pub fn at(line: usize, index: usize) -> Self {
        Position {
            line,
            index: Some(index),
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.index {
            Some(index) => write!(f, "Line: {}, index {}", self.line, index),
            None => write!(f, "Line: {}", self.line),
        }
    }
}

/// Splits source text into whitespace-delimited words, one end-of-line
/// marker after every line (blank lines included).
pub fn read_words(source: &str) -> Vec<String> {
    let mut words = vec![];

    for line in source.lines() {
        words.extend(line.split_whitespace().map(String::from));
        words.push(String::from(END_OF_LINE_MARKER));
    }

    words
}

/// Renders every diagnostic on its own line, in the order they were raised.
pub fn format_diagnostics<'a>(errors: impl IntoIterator<Item = &'a Error>) -> String {
    let mut out = String::new();
    for error in errors {
        out.push_str(&error.to_string());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_words_inserts_line_markers() {
        let words = read_words("begin integer x;\n\n  read(x)  end\n");

        assert_eq!(
            words,
            vec!["begin", "integer", "x;", "\n", "\n", "read(x)", "end", "\n"]
        );
    }

    #[test]
    fn test_read_words_handles_crlf() {
        let words = read_words("begin\r\nend");

        assert_eq!(words, vec!["begin", "\n", "end", "\n"]);
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::line(3).to_string(), "Line: 3");
        assert_eq!(Position::at(3, 7).to_string(), "Line: 3, index 7");
    }
}
