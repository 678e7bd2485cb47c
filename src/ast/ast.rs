use std::fmt::Debug;

use super::{
    expressions::{Identifier, IntLiteral, SumExpr},
    statements::{CalcStmt, IfStmt, PrintStmt, SetStmt},
};

/// Node Types
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum NodeType {
    Identifier,
    IntLiteral,
    Sum,
    PrintStmt,
    SetStmt,
    CalcStmt,
    IfStmt,
    StmtList,
    DeclList,
    Program,
}

/// Node Trait
///
/// Read-only access shared by every node in the tree.
pub trait Node: Debug {
    /// Returns the type of the node.
    fn get_node_type(&self) -> NodeType;
    /// One-line description of the node itself, without its children.
    fn summary(&self) -> String;
    /// Owned children, in source order.
    fn children(&self) -> Vec<&dyn Node>;
}

/// Visits `node` and everything below it, depth first, each node before its
/// children. The visitor also receives the depth below `node`.
pub fn walk(node: &dyn Node, visit: &mut dyn FnMut(&dyn Node, usize)) {
    walk_at(node, 0, visit);
}

fn walk_at(node: &dyn Node, depth: usize, visit: &mut dyn FnMut(&dyn Node, usize)) {
    visit(node, depth);
    for child in node.children() {
        walk_at(child, depth + 1, visit);
    }
}

/// Renders the tree below `node`, one summary per line, indented by depth.
pub fn render(node: &dyn Node) -> String {
    let mut result = String::new();
    walk(node, &mut |node: &dyn Node, depth: usize| {
        result.push_str(&"  ".repeat(depth));
        result.push_str(&node.summary());
        result.push('\n');
    });
    result
}

/// Expression
///
/// Anything that can stand on the right of a `calc`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(Identifier),
    IntLiteral(IntLiteral),
    Sum(SumExpr),
}

impl Expr {
    fn inner(&self) -> &dyn Node {
        match self {
            Expr::Identifier(identifier) => identifier,
            Expr::IntLiteral(literal) => literal,
            Expr::Sum(sum) => sum,
        }
    }
}

impl Node for Expr {
    fn get_node_type(&self) -> NodeType {
        self.inner().get_node_type()
    }
    fn summary(&self) -> String {
        self.inner().summary()
    }
    fn children(&self) -> Vec<&dyn Node> {
        self.inner().children()
    }
}

/// Statement
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Print(PrintStmt),
    Set(SetStmt),
    Calc(CalcStmt),
    If(IfStmt),
}

impl Stmt {
    fn inner(&self) -> &dyn Node {
        match self {
            Stmt::Print(stmt) => stmt,
            Stmt::Set(stmt) => stmt,
            Stmt::Calc(stmt) => stmt,
            Stmt::If(stmt) => stmt,
        }
    }
}

impl Node for Stmt {
    fn get_node_type(&self) -> NodeType {
        self.inner().get_node_type()
    }
    fn summary(&self) -> String {
        self.inner().summary()
    }
    fn children(&self) -> Vec<&dyn Node> {
        self.inner().children()
    }
}
