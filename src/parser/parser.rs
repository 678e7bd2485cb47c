//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser pulls tokens from a [`Scanner`] one at a time and keeps exactly
//! one token of lookahead. Grammar productions live in `stmt` and `expr` and
//! receive the parser by mutable reference.
//!
//! It maintains:
//! - The current lookahead token
//! - A lookup table of statement handlers keyed by their first token
//! - The declaration table filled in by `declare`

use std::{collections::HashMap, mem, rc::Rc, str::Chars};

use log::{debug, trace};

use crate::{
    ast::statements::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Scanner,
        tokens::{Token, TokenKind},
    },
    Position, Span, MK_SPAN, MK_TOKEN,
};

use super::{
    lookups::{create_token_lookups, StmtHandler, StmtLookup},
    stmt::parse_program,
    symbols::DeclarationTable,
};

/// Deepest `if` nesting accepted before the parse fails with `NestingTooDeep`.
pub const MAX_IF_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser<I: Iterator<Item = char>> {
    /// Source of tokens
    scanner: Scanner<I>,
    /// The next unconsumed token
    lookahead: Token,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup<I>,
    /// Names declared so far
    declarations: DeclarationTable,
    /// Number of `if` bodies currently open
    if_depth: usize,
}

impl<I: Iterator<Item = char>> Parser<I> {
    /// Creates a new Parser reading from `scanner`.
    ///
    /// No token is read until [`Parser::run`] primes the lookahead. Until then
    /// the lookahead is a placeholder `EOF`, so callers driving productions
    /// directly must call [`Parser::advance`] once first.
    pub fn new(scanner: Scanner<I>) -> Self {
        let file = scanner.file();
        let mut parser = Parser {
            scanner,
            lookahead: MK_TOKEN!(TokenKind::EOF, String::new(), MK_SPAN!(0, 0, file)),
            stmt_lookup: HashMap::new(),
            declarations: DeclarationTable::new(),
            if_depth: 0,
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.lookahead
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.lookahead.kind
    }

    /// The scanner's lexeme buffer, which always belongs to the current token.
    pub fn lexeme(&self) -> &str {
        self.scanner.lexeme()
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Result<Token, Error> {
        let next = self.scanner.next_token()?;
        Ok(mem::replace(&mut self.lookahead, next))
    }

    /// Advances past the current token if it is of kind `expected`.
    ///
    /// Returns `Ok(false)` without advancing on a mismatch; the caller decides
    /// whether that is an error. `Err` only comes from scanning the next token.
    pub fn match_token(&mut self, expected: TokenKind) -> Result<bool, Error> {
        if self.lookahead.kind == expected {
            trace!("matched {}", self.lookahead);
            self.advance()?;
            Ok(true)
        } else {
            trace!("expected {}, received {}", expected, self.lookahead);
            Ok(false)
        }
    }

    /// Matches a token of kind `expected` and returns it, or fails the parse.
    pub fn expect(&mut self, expected: TokenKind) -> Result<Token, Error> {
        let token = self.lookahead.clone();
        if self.match_token(expected)? {
            Ok(token)
        } else {
            Err(self.error(vec![expected]))
        }
    }

    /// Builds the error for a lookahead that is none of `expected`.
    pub fn error(&self, expected: Vec<TokenKind>) -> Error {
        let error = Error::new(
            ErrorImpl::UnexpectedToken {
                expected,
                received: self.lookahead.kind,
                lexeme: self.lookahead.value.clone(),
            },
            self.lookahead.span.start.clone(),
        );
        debug!("parse error: {}", error);
        error
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup<I> {
        &self.stmt_lookup
    }

    /// Registers a statement handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind that starts the statement
    /// * `stmt_fn` - The handler function for this statement type
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler<I>) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    pub fn declarations(&self) -> &DeclarationTable {
        &self.declarations
    }

    pub(crate) fn declarations_mut(&mut self) -> &mut DeclarationTable {
        &mut self.declarations
    }

    /// Opens an `if` body, failing once more than [`MAX_IF_DEPTH`] are open.
    pub(crate) fn enter_if(&mut self, position: Position) -> Result<(), Error> {
        if self.if_depth >= MAX_IF_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: MAX_IF_DEPTH,
                },
                position,
            ));
        }

        self.if_depth += 1;
        Ok(())
    }

    pub(crate) fn exit_if(&mut self) {
        self.if_depth = self.if_depth.saturating_sub(1);
    }

    /// Returns the start of the current token.
    pub fn get_position(&self) -> Position {
        self.lookahead.span.start.clone()
    }

    /// Primes the lookahead and parses a whole program.
    ///
    /// Succeeds only if the input is exhausted afterwards.
    pub fn run(&mut self) -> Result<Program, Error> {
        debug!("parsing {}", self.scanner.file());
        self.advance()?;

        let program = parse_program(self)?;

        if self.current_token_kind() != TokenKind::EOF {
            return Err(Error::new(
                ErrorImpl::TrailingInput {
                    received: self.lookahead.kind,
                    lexeme: self.lookahead.value.clone(),
                },
                self.get_position(),
            ));
        }

        debug!(
            "parsed {} declarations and {} statements",
            program.declarations.len(),
            program.body.len()
        );
        Ok(program)
    }
}

/// Parses `source` into a [`Program`].
///
/// This is the main entry point for parsing. Every call builds its own
/// scanner, declaration table and tree.
///
/// # Arguments
///
/// * `source` - The program text
/// * `file` - Name used in positions, `"shell"` if absent
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (with state after parsing)
/// - Result containing either the Program or the first Error
pub fn parse(source: &str, file: Option<String>) -> (Parser<Chars<'_>>, Result<Program, Error>) {
    let mut parser = Parser::new(Scanner::new(source.chars(), file));
    let result = parser.run();

    (parser, result)
}
