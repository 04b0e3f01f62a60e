use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("begin", TokenKind::Begin);
        map.insert("end", TokenKind::End);
        map.insert("integer", TokenKind::Integer);
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("function", TokenKind::Function);
        map.insert("read", TokenKind::Read);
        map.insert("write", TokenKind::Write);
        map
    };
}

/// Longest identifier the tokenizer accepts without complaint.
pub const MAX_IDENTIFIER_LENGTH: usize = 16;

/// Token kinds, in the order that fixes their numeric ids in the token logs.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Unknown,

    // Reserved
    Begin,
    End,
    Integer,
    If,
    Then,
    Else,
    Function,
    Read,
    Write,

    Identifier,
    Number,

    Equals,        // =
    NotEquals,     // <>
    LessEquals,    // <=
    Less,          // <
    GreaterEquals, // >=
    Greater,       // >
    Dash,          // -
    Star,          // *
    Assignment,    // :=

    OpenParen,
    CloseParen,
    Semicolon,

    EndOfLine,
    EndOfFile,
}

impl TokenKind {
    pub fn id(&self) -> u8 {
        *self as u8
    }

    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Unknown => "UNKNOWN",
            TokenKind::Begin => "BEGIN",
            TokenKind::End => "END",
            TokenKind::Integer => "INTEGER",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Else => "ELSE",
            TokenKind::Function => "FUNCTION",
            TokenKind::Read => "READ",
            TokenKind::Write => "WRITE",
            TokenKind::Identifier => "IDENT",
            TokenKind::Number => "NUMBER",
            TokenKind::Equals => "EQ",
            TokenKind::NotEquals => "NEQ",
            TokenKind::LessEquals => "LE",
            TokenKind::Less => "LT",
            TokenKind::GreaterEquals => "GE",
            TokenKind::Greater => "GT",
            TokenKind::Dash => "MINUS",
            TokenKind::Star => "MUL",
            TokenKind::Assignment => "ASSIGN",
            TokenKind::OpenParen => "L_PAREN",
            TokenKind::CloseParen => "R_PAREN",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::EndOfLine => "END_OF_LINE",
            TokenKind::EndOfFile => "END_OF_FILE",
        }
    }

    pub fn is_relational(&self) -> bool {
        matches!(
            self,
            TokenKind::Equals
                | TokenKind::NotEquals
                | TokenKind::Less
                | TokenKind::LessEquals
                | TokenKind::Greater
                | TokenKind::GreaterEquals
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:>16}  {:>2} {}", self.value, self.kind.id(), self.kind)
    }
}

impl Token {
    pub fn end_of_line() -> Self {
        Token {
            kind: TokenKind::EndOfLine,
            value: String::from("EOLN"),
        }
    }

    pub fn end_of_file() -> Self {
        Token {
            kind: TokenKind::EndOfFile,
            value: String::from("EOF"),
        }
    }

    pub fn is_end_of_line(&self) -> bool {
        self.kind == TokenKind::EndOfLine
    }
}
