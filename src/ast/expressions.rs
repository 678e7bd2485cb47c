use std::mem;

use super::ast::{Expr, Node, NodeType};

// LITERALS

/// Identifier
/// A variable name, wherever it appears.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Identifier { name: name.into() }
    }
}

impl Node for Identifier {
    fn get_node_type(&self) -> NodeType {
        NodeType::Identifier
    }
    fn summary(&self) -> String {
        format!("id {}", self.name)
    }
    fn children(&self) -> Vec<&dyn Node> {
        vec![]
    }
}

/// Integer Literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntLiteral {
    pub value: i32,
}

impl Node for IntLiteral {
    fn get_node_type(&self) -> NodeType {
        NodeType::IntLiteral
    }
    fn summary(&self) -> String {
        format!("int literal {}", self.value)
    }
    fn children(&self) -> Vec<&dyn Node> {
        vec![]
    }
}

// COMPLEX

/// Sum Expression
/// `left + right`. Chains nest to the right: `a + b + c` is `a + (b + c)`.
#[derive(Debug, Clone, PartialEq)]
pub struct SumExpr {
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

impl SumExpr {
    pub fn new(left: Expr, right: Expr) -> Self {
        SumExpr {
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

impl Node for SumExpr {
    fn get_node_type(&self) -> NodeType {
        NodeType::Sum
    }
    fn summary(&self) -> String {
        String::from("sum")
    }
    fn children(&self) -> Vec<&dyn Node> {
        vec![self.left.as_ref() as &dyn Node, self.right.as_ref()]
    }
}

// Long chains are released iteratively; the default drop recurses once per level.
impl Drop for SumExpr {
    fn drop(&mut self) {
        let mut pending = vec![take_expr(&mut self.left), take_expr(&mut self.right)];

        while let Some(expr) = pending.pop() {
            if let Expr::Sum(mut sum) = expr {
                pending.push(take_expr(&mut sum.left));
                pending.push(take_expr(&mut sum.right));
            }
        }
    }
}

fn take_expr(expr: &mut Box<Expr>) -> Expr {
    mem::replace(expr.as_mut(), Expr::IntLiteral(IntLiteral { value: 0 }))
}
