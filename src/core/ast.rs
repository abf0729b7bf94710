// src/core/ast.rs
//! Parse tree for one side of an equation.

use crate::core::token::TokenKind;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Variable(char),
    UnaryExpr {
        op: TokenKind,
        expr: Box<Expr>,
    },
    BinaryExpr {
        op: TokenKind,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn new_unary_expr(op: TokenKind, expr: Expr) -> Self {
        Expr::UnaryExpr { op, expr: Box::new(expr) }
    }
    pub fn new_binary_expr(op: TokenKind, left: Expr, right: Expr) -> Self {
        Expr::BinaryExpr { op, left: Box::new(left), right: Box::new(right) }
    }

    /// Whether `name` occurs anywhere in the tree.
    pub fn mentions(&self, name: char) -> bool {
        match self {
            Expr::Number(_) => false,
            Expr::Variable(v) => *v == name,
            Expr::UnaryExpr { expr, .. } => expr.mentions(name),
            Expr::BinaryExpr { left, right, .. } => left.mentions(name) || right.mentions(name),
        }
    }
}
