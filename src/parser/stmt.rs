use crate::{errors::errors::{Error, ErrorImpl}, lexer::tokens::TokenKind};

use super::{
    expr::{parse_arith_expr, parse_cond_expr},
    parser::{Parser, Reference},
};

/// `Executions := Execution { ';' Execution }`
pub fn parse_executions(parser: &mut Parser) -> Result<(), Error> {
    parse_execution(parser)?;

    while parser.current_token_kind() == TokenKind::Semicolon {
        parser.expect(TokenKind::Semicolon);
        parse_execution(parser)?;
    }

    Ok(())
}

pub fn parse_execution(parser: &mut Parser) -> Result<(), Error> {
    let kind = parser.current_token_kind();

    match parser.get_stmt_lookup().get(&kind).copied() {
        Some(handler) => handler(parser),
        None => {
            let token = parser.current_token_text();
            Err(parser.fatal(ErrorImpl::InvalidExecution { token }))
        }
    }
}

pub fn parse_read_stmt(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenKind::Read);
    parse_io_operand(parser)
}

pub fn parse_write_stmt(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenKind::Write);
    parse_io_operand(parser)
}

/// `'(' Variable ')'`
fn parse_io_operand(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenKind::OpenParen);
    parse_variable(parser)?;
    parser.expect_error(TokenKind::CloseParen, Some(ErrorImpl::UnmatchedParen));

    Ok(())
}

/// A variable reference. Procedures are not accepted here.
pub fn parse_variable(parser: &mut Parser) -> Result<(), Error> {
    if parser.current_token_kind() != TokenKind::Identifier {
        parser.expect(TokenKind::Identifier);
        return Ok(());
    }

    let name = parser.current_token_text();
    match parser.resolve(&name) {
        Reference::Variable(_) => {
            parser.expect(TokenKind::Identifier);
            Ok(())
        }
        Reference::Procedure(_) | Reference::Undefined => {
            Err(parser.fatal(ErrorImpl::UndefinedVariable { name }))
        }
    }
}

/// `Assign := (Variable | ProcedureRef) ':=' ArithExpr`
pub fn parse_assign_stmt(parser: &mut Parser) -> Result<(), Error> {
    let name = parser.current_token_text();

    match parser.resolve(&name) {
        Reference::Variable(_) | Reference::Procedure(_) => {
            parser.expect(TokenKind::Identifier);
        }
        Reference::Undefined => {
            return Err(parser.fatal(ErrorImpl::UndefinedReference { name }));
        }
    }

    parser.expect(TokenKind::Assignment);
    parse_arith_expr(parser)
}

/// `Condition := 'if' CondExpr 'then' Execution 'else' Execution`
pub fn parse_condition_stmt(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenKind::If);
    parse_cond_expr(parser)?;

    parser.expect(TokenKind::Then);
    parse_execution(parser)?;

    parser.expect(TokenKind::Else);
    parse_execution(parser)
}
