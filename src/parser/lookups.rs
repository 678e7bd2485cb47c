use std::collections::HashMap;

use crate::{ast::ast::Stmt, errors::errors::Error, lexer::tokens::TokenKind};

use super::{parser::Parser, stmt::*};

pub type StmtHandler<I> = fn(&mut Parser<I>) -> Result<Stmt, Error>;

pub fn create_token_lookups<I: Iterator<Item = char>>(parser: &mut Parser<I>) {
    // Statements
    parser.stmt(TokenKind::Print, parse_print_stmt);
    parser.stmt(TokenKind::Set, parse_set_stmt);
    parser.stmt(TokenKind::If, parse_if_stmt);
    parser.stmt(TokenKind::Calc, parse_calc_stmt);
}

// Lookup table inside parser struct, so it's easier
pub type StmtLookup<I> = HashMap<TokenKind, StmtHandler<I>>;
