use crate::{errors::errors::{Error, ErrorImpl}, lexer::tokens::TokenKind};

use super::parser::{Parser, Reference};

/// `ArithExpr := Term { '-' Term }`
pub fn parse_arith_expr(parser: &mut Parser) -> Result<(), Error> {
    parse_term(parser)?;

    while parser.current_token_kind() == TokenKind::Dash {
        parser.expect(TokenKind::Dash);
        parse_term(parser)?;
    }

    Ok(())
}

/// `Term := Factor { '*' Factor }`
pub fn parse_term(parser: &mut Parser) -> Result<(), Error> {
    parse_factor(parser)?;

    while parser.current_token_kind() == TokenKind::Star {
        parser.expect(TokenKind::Star);
        parse_factor(parser)?;
    }

    Ok(())
}

/// `Factor := NUMBER | Variable | ProcedureCall`
pub fn parse_factor(parser: &mut Parser) -> Result<(), Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            parser.expect(TokenKind::Number);
            Ok(())
        }
        TokenKind::Identifier => {
            let name = parser.current_token_text();
            match parser.resolve(&name) {
                Reference::Variable(_) => {
                    parser.expect(TokenKind::Identifier);
                    Ok(())
                }
                Reference::Procedure(_) => parse_call_expr(parser),
                Reference::Undefined => Err(parser.fatal(ErrorImpl::UndefinedReference { name })),
            }
        }
        _ => {
            let token = parser.current_token_text();
            Err(parser.fatal(ErrorImpl::ExpectedFactor { token }))
        }
    }
}

/// `ProcedureCall := ProcedureRef '(' ArithExpr ')'`, exactly one argument.
pub fn parse_call_expr(parser: &mut Parser) -> Result<(), Error> {
    let name = parser.current_token_text();
    if parser.symbols().find_procedure(&name).is_none() {
        return Err(parser.fatal(ErrorImpl::UndefinedProcedure { name }));
    }

    parser.expect(TokenKind::Identifier);
    parser.expect(TokenKind::OpenParen);
    parse_arith_expr(parser)?;
    parser.expect_error(TokenKind::CloseParen, Some(ErrorImpl::UnmatchedParen));

    Ok(())
}

/// `CondExpr := ArithExpr Operator ArithExpr`
pub fn parse_cond_expr(parser: &mut Parser) -> Result<(), Error> {
    parse_arith_expr(parser)?;
    parse_operator(parser);
    parse_arith_expr(parser)
}

pub fn parse_operator(parser: &mut Parser) {
    let kind = parser.current_token_kind();

    if kind.is_relational() {
        parser.expect(kind);
    } else {
        let token = parser.current_token_text();
        parser.add_error(ErrorImpl::NotAnOperator { token });
    }
}
