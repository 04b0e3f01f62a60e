use lazy_static::lazy_static;
use regex::Regex;
use tracing::warn;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, MAX_IDENTIFIER_LENGTH, RESERVED_LOOKUP};

/// Called with the text a pattern matched at the front of the remaining word.
pub type PatternHandler = fn(&mut Lexer, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: PatternHandler,
}

lazy_static! {
    // Anchored, tried in order: two-character operators must precede their prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[a-zA-Z][a-zA-Z0-9]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^\n").unwrap(), handler: end_of_line_handler },
        RegexPattern { regex: Regex::new("^<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=") },
        RegexPattern { regex: Regex::new("^<>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "<>") },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
        RegexPattern { regex: Regex::new("^>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=") },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
        RegexPattern { regex: Regex::new("^:=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, ":=") },
        RegexPattern { regex: Regex::new("^:").unwrap(), handler: lone_colon_handler },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "=") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
    ];
}

/// Tokenizer state and result.
///
/// Scanning never stops on an error: the offending text becomes an
/// `Unknown` token and the error is recorded. Callers must check `good()`
/// before handing the tokens to the analyzer.
#[derive(Debug, Clone)]
pub struct Lexer {
    tokens: Vec<Token>,
    errors: Vec<Error>,
    line: usize,
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexer {
    pub fn new() -> Lexer {
        Lexer {
            tokens: vec![],
            errors: vec![],
            line: 1,
        }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn error(&mut self, error: ErrorImpl) {
        let error = Error::new(error, Position::line(self.line));
        warn!("{}", error);
        self.errors.push(error);
    }

    pub fn good(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    fn scan_word(&mut self, word: &str) {
        let mut pos = 0;

        while pos < word.len() {
            let remainder = &word[pos..];
            let matched = PATTERNS
                .iter()
                .find_map(|pattern| pattern.regex.find(remainder).map(|m| (pattern.handler, m.end())));

            match matched {
                Some((handler, end)) => {
                    handler(self, &remainder[..end]);
                    pos += end;
                }
                None => {
                    let Some(character) = remainder.chars().next() else {
                        break;
                    };
                    self.error(ErrorImpl::InvalidCharacter { character });
                    self.push(MK_TOKEN!(TokenKind::Unknown, character.to_string()));
                    pos += character.len_utf8();
                }
            }
        }
    }
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) {
    if let Some(kind) = RESERVED_LOOKUP.get(matched) {
        lexer.push(MK_TOKEN!(*kind, String::from(matched)));
        return;
    }

    if matched.len() > MAX_IDENTIFIER_LENGTH {
        lexer.error(ErrorImpl::IdentifierTooLong {
            ident: String::from(matched),
        });
    }
    lexer.push(MK_TOKEN!(TokenKind::Identifier, String::from(matched)));
}

fn number_handler(lexer: &mut Lexer, matched: &str) {
    lexer.push(MK_TOKEN!(TokenKind::Number, String::from(matched)));
}

fn end_of_line_handler(lexer: &mut Lexer, _matched: &str) {
    lexer.line += 1;
    lexer.push(Token::end_of_line());
}

fn lone_colon_handler(lexer: &mut Lexer, matched: &str) {
    lexer.error(ErrorImpl::ExpectedAssignAfterColon);
    lexer.push(MK_TOKEN!(TokenKind::Unknown, String::from(matched)));
}

/// Scans every word in order and terminates the stream with an end-of-file
/// token.
pub fn tokenize<S: AsRef<str>>(words: &[S]) -> Lexer {
    let mut lex = Lexer::new();

    for word in words {
        lex.scan_word(word.as_ref());
    }

    lex.push(Token::end_of_file());
    lex
}
