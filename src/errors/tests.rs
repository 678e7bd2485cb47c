//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorClass, ErrorImpl, ErrorTip};
use crate::lexer::tokens::TokenKind;
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '@' },
        Position(10, Rc::new("test.mini".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
    assert_eq!(error.get_class(), ErrorClass::Lexical);
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.mini".to_string()));
    let error = Error::new(
        ErrorImpl::InvalidStatement {
            received: TokenKind::Declare,
            lexeme: "declare".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position(), &pos);
}

#[test]
fn test_grammar_errors_are_grammar_class() {
    let position = Position(0, Rc::new("test.mini".to_string()));
    let errors = vec![
        ErrorImpl::UnexpectedToken {
            expected: vec![TokenKind::EndIf],
            received: TokenKind::EOF,
            lexeme: String::new(),
        },
        ErrorImpl::InvalidStatement {
            received: TokenKind::Then,
            lexeme: "then".to_string(),
        },
        ErrorImpl::NumberParseError {
            token: "99999999999".to_string(),
        },
        ErrorImpl::TrailingInput {
            received: TokenKind::Identifier,
            lexeme: "x".to_string(),
        },
    ];

    for error_impl in errors {
        let error = Error::new(error_impl, position.clone());
        assert_eq!(error.get_class(), ErrorClass::Grammar);
    }
}

#[test]
fn test_unexpected_token_message() {
    let error = ErrorImpl::UnexpectedToken {
        expected: vec![TokenKind::Identifier, TokenKind::IntLiteral],
        received: TokenKind::Plus,
        lexeme: String::new(),
    };

    assert_eq!(
        error.to_string(),
        "expected Identifier or IntLiteral, received Plus (\"\")"
    );
}

#[test]
fn test_error_display_includes_source() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '?' },
        Position(7, Rc::new("demo.mini".to_string())),
    );

    assert_eq!(error.to_string(), "unrecognised character: '?' at demo.mini:7");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '@' },
        Position(0, Rc::new("test.mini".to_string())),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: vec![TokenKind::EndIf],
            received: TokenKind::EOF,
            lexeme: String::new(),
        },
        Position(0, Rc::new("test.mini".to_string())),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Expected EndIf, received EOF ``"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_nesting_too_deep() {
    let error = Error::new(
        ErrorImpl::NestingTooDeep { limit: 256 },
        Position(3, Rc::new("test.mini".to_string())),
    );

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.get_class(), ErrorClass::Grammar);
    assert_eq!(error.to_string(), "if statements nested deeper than 256 at test.mini:3");

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "`if` statements may be nested at most 256 deep"),
        _ => panic!("Expected suggestion tip"),
    }
}
