use crate::{
    ast::{
        ast::Expr,
        expressions::{Identifier, IntLiteral, SumExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// `sum := value sumEnd`
pub fn parse_sum<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Result<Expr, Error> {
    let left = parse_value(parser)?;
    parse_sum_end(parser, left)
}

/// `sumEnd := (PLUS value sumEnd)?`
///
/// The rest of the chain becomes the right operand, so `a + b + c` nests as
/// `a + (b + c)`. Values are collected first and folded from the right, so long
/// chains do not grow the call stack.
pub fn parse_sum_end<I: Iterator<Item = char>>(parser: &mut Parser<I>, left: Expr) -> Result<Expr, Error> {
    let mut values = vec![];

    while parser.match_token(TokenKind::Plus)? {
        values.push(parse_value(parser)?);
    }

    let mut right = match values.pop() {
        Some(last) => last,
        None => return Ok(left),
    };
    while let Some(value) = values.pop() {
        right = Expr::Sum(SumExpr::new(value, right));
    }

    Ok(Expr::Sum(SumExpr::new(left, right)))
}

/// `value := ID | INTLITERAL`
pub fn parse_value<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Identifier => {
            let name = parser.expect(TokenKind::Identifier)?.value;
            Ok(Expr::Identifier(Identifier::new(name)))
        }
        TokenKind::IntLiteral => Ok(Expr::IntLiteral(parse_int_literal(parser)?)),
        _ => Err(parser.error(vec![TokenKind::Identifier, TokenKind::IntLiteral])),
    }
}

pub fn parse_int_literal<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Result<IntLiteral, Error> {
    let token = parser.expect(TokenKind::IntLiteral)?;

    match token.value.parse() {
        Ok(value) => Ok(IntLiteral { value }),
        Err(_) => Err(Error::new(
            ErrorImpl::NumberParseError { token: token.value },
            token.span.start,
        )),
    }
}
