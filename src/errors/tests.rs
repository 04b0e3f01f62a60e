//! Unit tests for error handling.
//!
//! This module contains tests for error names, severities and the
//! diagnostic line format.

use crate::errors::errors::{Error, ErrorImpl, Severity};
use crate::lexer::tokens::TokenKind;
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::InvalidCharacter { character: '@' },
        Position::line(10),
    );

    assert_eq!(error.get_error_name(), "InvalidCharacter");
    assert_eq!(error.get_position().line, 10);
}

#[test]
fn test_lexical_error_format() {
    let error = Error::new(
        ErrorImpl::IdentifierTooLong {
            ident: "abcdefghijklmnopq".to_string(),
        },
        Position::line(2),
    );

    assert_eq!(
        error.to_string(),
        "Line: 2, Ident out of length: 'abcdefghijklmnopq'"
    );
    assert_eq!(error.severity(), Severity::Lexical);
}

#[test]
fn test_parse_error_format() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::Semicolon,
            found: "end".to_string(),
        },
        Position::at(4, 3),
    );

    assert_eq!(
        error.to_string(),
        "Line: 4, index 3: Expected SEMICOLON, but got end"
    );
}

#[test]
fn test_colon_error_format() {
    let error = Error::new(ErrorImpl::ExpectedAssignAfterColon, Position::line(1));

    assert_eq!(error.to_string(), "Line: 1, Expected '=' after ':'");
}

#[test]
fn test_recoverable_severities() {
    let recoverable = [
        ErrorImpl::UnmatchedParen,
        ErrorImpl::MissingToken {
            expected: TokenKind::EndOfFile,
        },
        ErrorImpl::VariableAlreadyDeclared {
            variable: "x".to_string(),
        },
        ErrorImpl::ParameterAlreadyDeclared {
            parameter: "p".to_string(),
        },
        ErrorImpl::ProcedureAlreadyDeclared {
            procedure: "f".to_string(),
        },
        ErrorImpl::VariableNotDeclared {
            variable: "p".to_string(),
        },
        ErrorImpl::NotAnOperator {
            token: "-".to_string(),
        },
    ];

    for error_impl in recoverable {
        let error = Error::new(error_impl, Position::at(1, 0));
        assert_eq!(error.severity(), Severity::Recoverable, "{}", error);
        assert!(!error.is_fatal());
    }
}

#[test]
fn test_fatal_severities() {
    let fatal = [
        ErrorImpl::UndefinedReference {
            name: "y".to_string(),
        },
        ErrorImpl::UndefinedVariable {
            name: "y".to_string(),
        },
        ErrorImpl::UndefinedProcedure {
            name: "g".to_string(),
        },
        ErrorImpl::InvalidExecution {
            token: "end".to_string(),
        },
        ErrorImpl::ExpectedFactor {
            token: ";".to_string(),
        },
    ];

    for error_impl in fatal {
        let error = Error::new(error_impl, Position::at(1, 0));
        assert!(error.is_fatal(), "{}", error);
    }
}

#[test]
fn test_undefined_reference_message() {
    let error = Error::new(
        ErrorImpl::UndefinedReference {
            name: "y".to_string(),
        },
        Position::at(1, 5),
    );

    assert_eq!(error.get_error_name(), "UndefinedReference");
    assert_eq!(
        error.to_string(),
        "Line: 1, index 5: Undefined variable or procedure 'y'"
    );
}
