use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// The two failure classes of a parse. Both are fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Lexical,
    Grammar,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
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

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_class(&self) -> ErrorClass {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorClass::Lexical,
            _ => ErrorClass::Grammar,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::InvalidStatement { .. } => "InvalidStatement",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::TrailingInput { .. } => "TrailingInput",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken {
                expected,
                received,
                lexeme,
            } => ErrorTip::Suggestion(format!(
                "Expected {}, received {} `{}`",
                join_kinds(expected),
                received,
                lexeme
            )),
            ErrorImpl::InvalidStatement { received, lexeme } => ErrorTip::Suggestion(format!(
                "Unexpected {} `{}`, expected a statement, `endif` or end of input",
                received, lexeme
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::TrailingInput { received, lexeme } => ErrorTip::Suggestion(format!(
                "Unexpected {} `{}` after the end of the program",
                received, lexeme
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "`if` statements may be nested at most {} deep",
                limit
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}:{}", self.internal_error, self.position.1, self.position.0)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("expected {}, received {received} ({lexeme:?})", join_kinds(.expected))]
    UnexpectedToken {
        expected: Vec<TokenKind>,
        received: TokenKind,
        lexeme: String,
    },
    #[error("invalid statement: received {received} ({lexeme:?})")]
    InvalidStatement { received: TokenKind, lexeme: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("expected end of input, received {received} ({lexeme:?})")]
    TrailingInput { received: TokenKind, lexeme: String },
    #[error("if statements nested deeper than {limit}")]
    NestingTooDeep { limit: usize },
}

fn join_kinds(kinds: &[TokenKind]) -> String {
    kinds
        .iter()
        .map(|kind| kind.to_string())
        .collect::<Vec<String>>()
        .join(" or ")
}
