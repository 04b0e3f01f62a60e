//! Utility macros for the front end.
//!
//! This module defines helper macros used by the tokenizer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed-text tokens
//!
//! These macros reduce boilerplate in the lexer's pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string());
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr) => {
        Token {
            kind: $kind,
            value: $value,
        }
    };
}

/// Creates a default lexer handler for fixed-text operators and punctuation.
///
/// Generates a handler that pushes a token of the given kind carrying the
/// literal text. The scanning loop advances past the match.
///
/// # Arguments
///
/// * `$kind` - The TokenKind to create
/// * `$value` - The literal string value
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^<=").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<="),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _matched: &str| {
            lexer.push(MK_TOKEN!($kind, String::from($value)));
        }
    };
}
