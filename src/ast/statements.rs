use std::{fmt::Display, slice::Iter};

use super::{
    ast::{render, Expr, Node, NodeType, Stmt},
    expressions::{Identifier, IntLiteral},
};

#[derive(Debug, Clone, PartialEq)]
pub struct PrintStmt {
    pub target: Identifier,
}

impl Node for PrintStmt {
    fn get_node_type(&self) -> NodeType {
        NodeType::PrintStmt
    }
    fn summary(&self) -> String {
        String::from("print")
    }
    fn children(&self) -> Vec<&dyn Node> {
        vec![&self.target as &dyn Node]
    }
}

/// `set target = value`, where the value is always a literal.
#[derive(Debug, Clone, PartialEq)]
pub struct SetStmt {
    pub target: Identifier,
    pub value: IntLiteral,
}

impl Node for SetStmt {
    fn get_node_type(&self) -> NodeType {
        NodeType::SetStmt
    }
    fn summary(&self) -> String {
        String::from("set")
    }
    fn children(&self) -> Vec<&dyn Node> {
        vec![&self.target as &dyn Node, &self.value]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalcStmt {
    pub target: Identifier,
    pub expr: Expr,
}

impl Node for CalcStmt {
    fn get_node_type(&self) -> NodeType {
        NodeType::CalcStmt
    }
    fn summary(&self) -> String {
        String::from("calc")
    }
    fn children(&self) -> Vec<&dyn Node> {
        vec![&self.target as &dyn Node, &self.expr]
    }
}

/// `if left = right then body endif`
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub left: Identifier,
    pub right: Identifier,
    pub body: StmtList,
}

impl Node for IfStmt {
    fn get_node_type(&self) -> NodeType {
        NodeType::IfStmt
    }
    fn summary(&self) -> String {
        String::from("if")
    }
    fn children(&self) -> Vec<&dyn Node> {
        vec![&self.left as &dyn Node, &self.right, &self.body]
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StmtList {
    pub items: Vec<Stmt>,
}

impl StmtList {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.items.iter()
    }
    pub fn len(&self) -> usize {
        self.items.len()
    }
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Node for StmtList {
    fn get_node_type(&self) -> NodeType {
        NodeType::StmtList
    }
    fn summary(&self) -> String {
        String::from("statements")
    }
    fn children(&self) -> Vec<&dyn Node> {
        self.items.iter().map(|stmt| stmt as &dyn Node).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeclList {
    pub items: Vec<Identifier>,
}

impl DeclList {
    pub fn iter(&self) -> Iter<'_, Identifier> {
        self.items.iter()
    }
    pub fn len(&self) -> usize {
        self.items.len()
    }
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Node for DeclList {
    fn get_node_type(&self) -> NodeType {
        NodeType::DeclList
    }
    fn summary(&self) -> String {
        String::from("declarations")
    }
    fn children(&self) -> Vec<&dyn Node> {
        self.items.iter().map(|id| id as &dyn Node).collect()
    }
}

/// Program
///
/// The root of every successfully parsed source.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub declarations: DeclList,
    pub body: StmtList,
}

impl Node for Program {
    fn get_node_type(&self) -> NodeType {
        NodeType::Program
    }
    fn summary(&self) -> String {
        String::from("program")
    }
    fn children(&self) -> Vec<&dyn Node> {
        vec![&self.declarations as &dyn Node, &self.body]
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", render(self))
    }
}
