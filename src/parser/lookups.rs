use std::collections::HashMap;

use crate::{errors::errors::Error, lexer::tokens::TokenKind};

use super::{parser::Parser, stmt::*};

pub type StmtHandler = fn(&mut Parser) -> Result<(), Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Executions, keyed by their first token
    parser.stmt(TokenKind::Read, parse_read_stmt);
    parser.stmt(TokenKind::Write, parse_write_stmt);
    parser.stmt(TokenKind::Identifier, parse_assign_stmt);
    parser.stmt(TokenKind::If, parse_condition_stmt);
}

// Lookup table inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
