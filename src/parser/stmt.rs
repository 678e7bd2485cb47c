use crate::{
    ast::{
        ast::Stmt,
        expressions::Identifier,
        statements::{CalcStmt, DeclList, IfStmt, PrintStmt, Program, SetStmt, StmtList},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_int_literal, parse_sum},
    parser::Parser,
};

/// `program := declarations statements EOF`
pub fn parse_program<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Result<Program, Error> {
    let declarations = parse_declarations(parser)?;
    let body = parse_statements(parser)?;

    if !parser.match_token(TokenKind::EOF)? {
        return Err(parser.error(vec![TokenKind::EOF]));
    }

    Ok(Program { declarations, body })
}

pub fn parse_declarations<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Result<DeclList, Error> {
    let mut items = vec![];

    while parser.current_token_kind() == TokenKind::Declare {
        items.push(parse_declare(parser)?);
    }

    Ok(DeclList { items })
}

/// `declare := DECLARE ID`
///
/// Re-declaring a name is accepted and still produces a node.
pub fn parse_declare<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Result<Identifier, Error> {
    parser.expect(TokenKind::Declare)?;
    let name = parser.expect(TokenKind::Identifier)?.value;

    parser.declarations_mut().declare(&name);

    Ok(Identifier::new(name))
}

/// Parses statements until the lookahead no longer starts one.
///
/// The terminator (`endif` or end of input) is left for the caller.
pub fn parse_statements<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Result<StmtList, Error> {
    let mut items = vec![];

    while parser.get_stmt_lookup().contains_key(&parser.current_token_kind()) {
        items.push(parse_stmt(parser)?);
    }

    match parser.current_token_kind() {
        TokenKind::EndIf | TokenKind::EOF => Ok(StmtList { items }),
        _ => Err(invalid_statement(parser)),
    }
}

pub fn parse_stmt<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Result<Stmt, Error> {
    let handler = parser.get_stmt_lookup().get(&parser.current_token_kind()).copied();

    match handler {
        Some(handler) => handler(parser),
        None => Err(invalid_statement(parser)),
    }
}

fn invalid_statement<I: Iterator<Item = char>>(parser: &Parser<I>) -> Error {
    let token = parser.current_token();
    Error::new(
        ErrorImpl::InvalidStatement {
            received: token.kind,
            lexeme: token.value.clone(),
        },
        token.span.start.clone(),
    )
}

/// `print := PRINT ID`
pub fn parse_print_stmt<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Print)?;
    let target = Identifier::new(parser.expect(TokenKind::Identifier)?.value);

    Ok(Stmt::Print(PrintStmt { target }))
}

/// `set := SET ID EQUALS INTLITERAL`
pub fn parse_set_stmt<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Set)?;
    let target = Identifier::new(parser.expect(TokenKind::Identifier)?.value);
    parser.expect(TokenKind::Equals)?;
    let value = parse_int_literal(parser)?;

    Ok(Stmt::Set(SetStmt { target, value }))
}

/// `if := IF ID EQUALS ID THEN statements ENDIF`
pub fn parse_if_stmt<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Result<Stmt, Error> {
    let start = parser.expect(TokenKind::If)?.span.start;
    parser.enter_if(start)?;

    let left = Identifier::new(parser.expect(TokenKind::Identifier)?.value);
    parser.expect(TokenKind::Equals)?;
    let right = Identifier::new(parser.expect(TokenKind::Identifier)?.value);
    parser.expect(TokenKind::Then)?;

    let body = parse_statements(parser)?;

    parser.expect(TokenKind::EndIf)?;
    parser.exit_if();

    Ok(Stmt::If(IfStmt { left, right, body }))
}

/// `calc := CALC ID EQUALS sum`
pub fn parse_calc_stmt<I: Iterator<Item = char>>(parser: &mut Parser<I>) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Calc)?;
    let target = Identifier::new(parser.expect(TokenKind::Identifier)?.value);
    parser.expect(TokenKind::Equals)?;
    let expr = parse_sum(parser)?;

    Ok(Stmt::Calc(CalcStmt { target, expr }))
}
