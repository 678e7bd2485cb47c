use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("declare", TokenKind::Declare);
        map.insert("int", TokenKind::Int);
        map.insert("print", TokenKind::Print);
        map.insert("set", TokenKind::Set);
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("endif", TokenKind::EndIf);
        map.insert("calc", TokenKind::Calc);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Identifier,
    IntLiteral,

    Equals, // =
    Plus,   // +

    // Reserved
    Int, // recognised, never consumed by the grammar
    Declare,
    Print,
    Set,
    If,
    Then,
    EndIf,
    Calc,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.value.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} ({})", self.kind, self.value)
        }
    }
}

