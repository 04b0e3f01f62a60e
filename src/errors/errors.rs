use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

/// How far an error reaches.
///
/// Lexical errors only clear the tokenizer's flag. Recoverable errors are
/// logged and parsing resumes at the same token. Fatal errors stop the whole
/// analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Lexical,
    Recoverable,
    Fatal,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IdentifierTooLong { .. } => "IdentifierTooLong",
            ErrorImpl::ExpectedAssignAfterColon => "ExpectedAssignAfterColon",
            ErrorImpl::InvalidCharacter { .. } => "InvalidCharacter",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::MissingToken { .. } => "MissingToken",
            ErrorImpl::UnmatchedParen => "UnmatchedParen",
            ErrorImpl::InvalidDeclaration { .. } => "InvalidDeclaration",
            ErrorImpl::NotAnOperator { .. } => "NotAnOperator",
            ErrorImpl::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
            ErrorImpl::ParameterAlreadyDeclared { .. } => "ParameterAlreadyDeclared",
            ErrorImpl::ProcedureAlreadyDeclared { .. } => "ProcedureAlreadyDeclared",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::UndefinedReference { .. } => "UndefinedReference",
            ErrorImpl::UndefinedVariable { .. } => "UndefinedVariable",
            ErrorImpl::UndefinedProcedure { .. } => "UndefinedProcedure",
            ErrorImpl::InvalidExecution { .. } => "InvalidExecution",
            ErrorImpl::ExpectedFactor { .. } => "ExpectedFactor",
            ErrorImpl::NoEnclosingScope { .. } => "NoEnclosingScope",
        }
    }

    pub fn severity(&self) -> Severity {
        match &self.internal_error {
            ErrorImpl::IdentifierTooLong { .. }
            | ErrorImpl::ExpectedAssignAfterColon
            | ErrorImpl::InvalidCharacter { .. } => Severity::Lexical,
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::MissingToken { .. }
            | ErrorImpl::UnmatchedParen
            | ErrorImpl::InvalidDeclaration { .. }
            | ErrorImpl::NotAnOperator { .. }
            | ErrorImpl::VariableAlreadyDeclared { .. }
            | ErrorImpl::ParameterAlreadyDeclared { .. }
            | ErrorImpl::ProcedureAlreadyDeclared { .. }
            | ErrorImpl::VariableNotDeclared { .. } => Severity::Recoverable,
            ErrorImpl::UndefinedReference { .. }
            | ErrorImpl::UndefinedVariable { .. }
            | ErrorImpl::UndefinedProcedure { .. }
            | ErrorImpl::InvalidExecution { .. }
            | ErrorImpl::ExpectedFactor { .. }
            | ErrorImpl::NoEnclosingScope { .. } => Severity::Fatal,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position.index {
            Some(_) => write!(f, "{}: {}", self.position, self.internal_error),
            None => write!(f, "{}, {}", self.position, self.internal_error),
        }
    }
}

impl std::error::Error for Error {}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    // Lexical
    #[error("Ident out of length: '{ident}'")]
    IdentifierTooLong { ident: String },
    #[error("Expected '=' after ':'")]
    ExpectedAssignAfterColon,
    #[error("Invalid character: '{character}'")]
    InvalidCharacter { character: char },

    // Recoverable
    #[error("Expected {expected}, but got {found}")]
    UnexpectedToken { expected: TokenKind, found: String },
    #[error("Missing symbol {expected}")]
    MissingToken { expected: TokenKind },
    #[error("Unmatched '(', expected ')'")]
    UnmatchedParen,
    #[error("Invalid variable name {token}")]
    InvalidDeclaration { token: String },
    #[error("'{token}' is not an operator")]
    NotAnOperator { token: String },
    #[error("Variable '{variable}' has already been declared")]
    VariableAlreadyDeclared { variable: String },
    #[error("Parameter '{parameter}' has already been declared")]
    ParameterAlreadyDeclared { parameter: String },
    #[error("Procedure '{procedure}' has already been declared")]
    ProcedureAlreadyDeclared { procedure: String },
    #[error("Variable '{variable}' has not been declared")]
    VariableNotDeclared { variable: String },

    // Fatal
    #[error("Undefined variable or procedure '{name}'")]
    UndefinedReference { name: String },
    #[error("Undefined variable '{name}'")]
    UndefinedVariable { name: String },
    #[error("Undefined procedure '{name}'")]
    UndefinedProcedure { name: String },
    #[error("Execution cannot begin with {token}")]
    InvalidExecution { token: String },
    #[error("Expect variable, procedure or constant, but got {token}")]
    ExpectedFactor { token: String },
    #[error("'{name}' declared outside of any procedure")]
    NoEnclosingScope { name: String },
}
