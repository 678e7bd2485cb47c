//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Integer literals and where they stop
//! - Punctuation
//! - End-of-input behaviour
//! - Error cases

use crate::errors::errors::{ErrorClass, ErrorImpl};

use super::{
    lexer::{tokenize, Scanner},
    tokens::TokenKind,
};

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("declare int print set if then endif calc", Some("test.mini".to_string())).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Declare);
    assert_eq!(tokens[1].kind, TokenKind::Int);
    assert_eq!(tokens[2].kind, TokenKind::Print);
    assert_eq!(tokens[3].kind, TokenKind::Set);
    assert_eq!(tokens[4].kind, TokenKind::If);
    assert_eq!(tokens[5].kind, TokenKind::Then);
    assert_eq!(tokens[6].kind, TokenKind::EndIf);
    assert_eq!(tokens[7].kind, TokenKind::Calc);
    assert_eq!(tokens[8].kind, TokenKind::EOF);
    assert_eq!(tokens.len(), 9);
}

#[test]
fn test_keyword_takes_precedence() {
    let tokens = tokenize("if", None).unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::If);
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_keywords_need_exact_match() {
    let tokens = tokenize("iff endifx If DECLARE dec", None).unwrap();

    for token in &tokens[..5] {
        assert_eq!(token.kind, TokenKind::Identifier);
    }
    assert_eq!(tokens[0].value, "iff");
    assert_eq!(tokens[1].value, "endifx");
    assert_eq!(tokens[2].value, "If");
    assert_eq!(tokens[3].value, "DECLARE");
    assert_eq!(tokens[4].value, "dec");
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar CamelCase", None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "bar");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "CamelCase");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_identifier_stops_at_digit() {
    let tokens = tokenize("ab12", None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "ab");
    assert_eq!(tokens[1].kind, TokenKind::IntLiteral);
    assert_eq!(tokens[1].value, "12");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_number() {
    let tokens = tokenize("42", None).unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::IntLiteral);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_number_stops_at_letter() {
    let tokens = tokenize("4a", None).unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::IntLiteral);
    assert_eq!(tokens[0].value, "4");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "a");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_punctuation() {
    let tokens = tokenize("x=y+4", None).unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::IntLiteral,
            TokenKind::EOF,
        ]
    );
    assert_eq!(tokens[1].value, "");
    assert_eq!(tokens[3].value, "");
}

#[test]
fn test_whitespace_is_skipped() {
    let tokens = tokenize(" \t\r\n print \n\n w \r\n", None).unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Print);
    assert_eq!(tokens[1].value, "w");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = tokenize("", None).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
    assert_eq!(tokens[0].value, "");
}

#[test]
fn test_eof_is_repeatable() {
    let mut scanner = Scanner::new("x".chars(), None);

    assert_eq!(scanner.next_token().unwrap().kind, TokenKind::Identifier);
    for _ in 0..3 {
        assert_eq!(scanner.next_token().unwrap().kind, TokenKind::EOF);
    }
}

#[test]
fn test_lexeme_follows_latest_token() {
    let mut scanner = Scanner::new("set count = 12".chars(), None);

    scanner.next_token().unwrap();
    assert_eq!(scanner.lexeme(), "set");
    scanner.next_token().unwrap();
    assert_eq!(scanner.lexeme(), "count");
    scanner.next_token().unwrap();
    assert_eq!(scanner.lexeme(), "");
    scanner.next_token().unwrap();
    assert_eq!(scanner.lexeme(), "12");
    scanner.next_token().unwrap();
    assert_eq!(scanner.lexeme(), "");
}

#[test]
fn test_unread_is_stacked() {
    let mut scanner = Scanner::new("".chars(), None);

    scanner.unread('b');
    scanner.unread('a');
    let token = scanner.next_token().unwrap();

    assert_eq!(token.kind, TokenKind::Identifier);
    assert_eq!(token.value, "ab");
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("set  x = 10", Some("spans.mini".to_string())).unwrap();

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 3);
    assert_eq!(tokens[1].span.start.0, 5);
    assert_eq!(tokens[1].span.end.0, 6);
    assert_eq!(tokens[3].span.start.0, 9);
    assert_eq!(tokens[3].span.end.0, 11);
    assert_eq!(*tokens[3].span.start.1, "spans.mini");
}

#[test]
fn test_unrecognised_character() {
    let error = tokenize("set x = 5;", None).unwrap_err();

    assert_eq!(error.get_class(), ErrorClass::Lexical);
    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnrecognisedCharacter { character: ';' }
    );
    assert_eq!(error.get_position().0, 9);
}

#[test]
fn test_underscore_is_not_a_letter() {
    let error = tokenize("my_var", None).unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnrecognisedCharacter { character: '_' }
    );
}

#[test]
fn test_default_file_name() {
    let tokens = tokenize("x", None).unwrap();

    assert_eq!(*tokens[0].span.start.1, "shell");
}
