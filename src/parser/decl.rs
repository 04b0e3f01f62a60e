use crate::{errors::errors::{Error, ErrorImpl}, lexer::tokens::TokenKind};

use super::{parser::Parser, stmt::parse_executions, symbols::MAIN_PROCEDURE};

/// `Program := SubProgram EOF`
pub fn parse_program(parser: &mut Parser) -> Result<(), Error> {
    parse_sub_program(parser)?;
    parser.expect(TokenKind::EndOfFile);

    Ok(())
}

/// `SubProgram := 'begin' Declarations Executions 'end'`, inside the
/// synthetic main procedure.
pub fn parse_sub_program(parser: &mut Parser) -> Result<(), Error> {
    parser.declare_procedure(MAIN_PROCEDURE);
    parse_body(parser)
}

/// Shared by the program and every procedure. Closes the scope opened by
/// the caller once `end` has been matched.
fn parse_body(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenKind::Begin);
    parse_declarations(parser)?;
    parse_executions(parser)?;
    parser.expect(TokenKind::End);
    parser.close_scope();

    Ok(())
}

pub fn parse_declarations(parser: &mut Parser) -> Result<(), Error> {
    loop {
        parse_declaration(parser)?;

        if parser.current_token_kind() != TokenKind::Integer {
            return Ok(());
        }
    }
}

/// `Declaration := 'integer' (VarDecl | ProcDecl) ';'`
pub fn parse_declaration(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenKind::Integer);

    match parser.current_token_kind() {
        TokenKind::Identifier => parse_var_decl(parser)?,
        TokenKind::Function => parse_proc_decl(parser)?,
        _ => {
            let token = parser.current_token_text();
            parser.add_error(ErrorImpl::InvalidDeclaration { token });
        }
    }

    parser.expect(TokenKind::Semicolon);

    Ok(())
}

pub fn parse_var_decl(parser: &mut Parser) -> Result<(), Error> {
    if let Some(identifier) = parser.expect(TokenKind::Identifier) {
        parser.declare_variable(&identifier.value)?;
    }

    Ok(())
}

/// `ProcDecl := 'function' IDENT '(' IDENT ')' ';' ProcBody`
pub fn parse_proc_decl(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenKind::Function);

    // The scope is opened even without a name so the body's `end` stays balanced.
    let name = match parser.expect(TokenKind::Identifier) {
        Some(identifier) => identifier.value,
        None => parser.current_token_text(),
    };
    parser.declare_procedure(&name);

    parser.expect(TokenKind::OpenParen);
    if let Some(parameter) = parser.expect(TokenKind::Identifier) {
        parser.declare_parameter(&parameter.value)?;
    }
    parser.expect_error(TokenKind::CloseParen, Some(ErrorImpl::UnmatchedParen));
    parser.expect(TokenKind::Semicolon);

    parse_body(parser)
}
