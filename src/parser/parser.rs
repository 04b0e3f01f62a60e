//! Parser state and terminal matching for the analyzer.
//!
//! This module contains the main Parser struct. It owns the token stream,
//! the log of consumed tokens, the symbol tables and the diagnostics.
//! Grammar rules live in `decl`, `stmt` and `expr`; they return
//! `Err` only for fatal errors and record everything else here.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

use super::{
    decl::parse_program,
    lookups::{create_token_lookups, StmtHandler, StmtLookup},
    symbols::{Declared, Resolution, SymbolTable},
};

/// What an identifier in a statement or expression refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    Variable(usize),
    Procedure(usize),
    Undefined,
}

/// The analyzer state.
///
/// One parser handles exactly one token stream; everything it builds is
/// kept for reporting after the run, including on a fatal abort.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Current source line, advanced by every end-of-line token skipped
    line: usize,
    /// Tokens consumed on the current line
    index: usize,
    /// Every token consumed, in order, end-of-line markers included
    results: Vec<Token>,
    symbols: SymbolTable,
    diagnostics: Vec<Error>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            pos: 0,
            line: 1,
            index: 0,
            results: vec![],
            symbols: SymbolTable::new(),
            diagnostics: vec![],
            stmt_lookup: HashMap::new(),
        }
    }

    /// Consumes and logs any run of end-of-line tokens.
    pub fn skip_end_of_line(&mut self) {
        while let Some(token) = self.tokens.get(self.pos) {
            if !token.is_end_of_line() {
                break;
            }
            self.results.push(token.clone());
            self.pos += 1;
            self.index = 0;
            self.line += 1;
        }
    }

    /// Returns the next significant token, or `None` past the end of input.
    pub fn current_token(&mut self) -> Option<&Token> {
        self.skip_end_of_line();
        self.tokens.get(self.pos)
    }

    /// Kind of the next significant token; `EndOfFile` past the end.
    pub fn current_token_kind(&mut self) -> TokenKind {
        self.current_token()
            .map(|token| token.kind)
            .unwrap_or(TokenKind::EndOfFile)
    }

    pub fn current_token_text(&mut self) -> String {
        self.current_token()
            .map(|token| token.value.clone())
            .unwrap_or_else(|| String::from("EOF"))
    }

    /// Consumes the next token if it has the expected kind.
    ///
    /// On a mismatch the given error (or a default one) is recorded and
    /// nothing is consumed.
    pub fn expect_error(&mut self, expected_kind: TokenKind, error: Option<ErrorImpl>) -> Option<Token> {
        let Some(token) = self.current_token().cloned() else {
            self.add_error(error.unwrap_or(ErrorImpl::MissingToken {
                expected: expected_kind,
            }));
            return None;
        };

        if token.kind != expected_kind {
            self.add_error(error.unwrap_or(ErrorImpl::UnexpectedToken {
                expected: expected_kind,
                found: token.value,
            }));
            return None;
        }

        self.results.push(token.clone());
        self.pos += 1;
        self.index += 1;
        self.skip_end_of_line();
        Some(token)
    }

    pub fn expect(&mut self, expected_kind: TokenKind) -> Option<Token> {
        self.expect_error(expected_kind, None)
    }

    pub fn get_position(&self) -> Position {
        Position::at(self.line, self.index)
    }

    /// Records a recoverable error at the current position.
    pub fn add_error(&mut self, error: ErrorImpl) {
        let error = Error::new(error, self.get_position());
        self.record(error);
    }

    /// Builds a fatal error at the current position for the caller to return.
    pub fn fatal(&self, error: ErrorImpl) -> Error {
        Error::new(error, self.get_position())
    }

    fn record(&mut self, error: Error) {
        warn!("{}", error);
        self.diagnostics.push(error);
    }

    pub fn good(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn results(&self) -> &[Token] {
        &self.results
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn diagnostics(&self) -> &[Error] {
        &self.diagnostics
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Registers a statement handler for the token that starts it.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    pub fn declare_variable(&mut self, name: &str) -> Result<(), Error> {
        let declared = self.symbols.register_variable(name).map_err(|e| self.fatal(e))?;
        debug!(symbol = name, ?declared, depth = self.symbols.depth(), "variable");

        if let Declared::Duplicate(_) = declared {
            self.add_error(ErrorImpl::VariableAlreadyDeclared {
                variable: String::from(name),
            });
        }
        Ok(())
    }

    pub fn declare_parameter(&mut self, name: &str) -> Result<(), Error> {
        let declared = self.symbols.register_parameter(name).map_err(|e| self.fatal(e))?;
        debug!(symbol = name, ?declared, depth = self.symbols.depth(), "parameter");

        if let Declared::Duplicate(_) = declared {
            self.add_error(ErrorImpl::ParameterAlreadyDeclared {
                parameter: String::from(name),
            });
        }
        Ok(())
    }

    /// Registers a procedure and opens its scope.
    pub fn declare_procedure(&mut self, name: &str) {
        let declared = self.symbols.register_procedure(name);
        debug!(procedure = name, ?declared, depth = self.symbols.depth(), "open scope");

        if let Declared::Duplicate(_) = declared {
            self.add_error(ErrorImpl::ProcedureAlreadyDeclared {
                procedure: String::from(name),
            });
        }
    }

    pub fn close_scope(&mut self) {
        let closed = self.symbols.close_scope();
        debug!(?closed, depth = self.symbols.depth(), "close scope");
    }

    /// Resolves an identifier: variable first, then procedure. A visible
    /// parameter that was never re-declared in its body records
    /// `VariableNotDeclared` and counts as not found.
    pub fn resolve(&mut self, name: &str) -> Reference {
        match self.symbols.find_variable(name) {
            Resolution::Found(index) => return Reference::Variable(index),
            Resolution::Unconfirmed(_) => self.add_error(ErrorImpl::VariableNotDeclared {
                variable: String::from(name),
            }),
            Resolution::Missing => {}
        }

        match self.symbols.find_procedure(name) {
            Some(index) => Reference::Procedure(index),
            None => Reference::Undefined,
        }
    }
}

/// Runs the analyzer over a token stream.
///
/// This is the main entry point for analysis. It creates a parser instance,
/// initializes the statement lookup table and recognizes `Program`.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance, holding the token log, tables and diagnostics
/// - `Err` with the fatal error if the parse was aborted
pub fn parse(tokens: Vec<Token>) -> (Parser, Result<(), Error>) {
    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);

    let result = parse_program(&mut parser);
    if let Err(error) = &result {
        parser.record(error.clone());
    }

    (parser, result)
}
