//! Expression AST node definitions
//!
//! The expression grammar is closed under two variants: literals (identifier
//! references and numeric lexemes) and binary arithmetic.

use super::{AstError, Lexeme};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

/// Deepest expression tree that can be constructed
///
/// A single literal has depth 1. Bounding depth at construction keeps every
/// recursive pass (and the recursive drop of `Box<Expr>`) within a fixed
/// amount of stack.
pub const MAX_EXPR_DEPTH: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    Literal(Literal),
    Binary(BinaryExpr),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiteralKind {
    Identifier,
    Number,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Literal {
    kind: LiteralKind,
    text: Lexeme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BinaryExpr {
    op: BinaryOp,
    left: Box<Expr>,
    right: Box<Expr>,
    #[serde(skip_serializing)]
    depth: usize,
}

impl Literal {
    pub fn new(kind: LiteralKind, text: Lexeme) -> Self {
        Self { kind, text }
    }

    pub fn identifier(name: &str) -> Result<Self, AstError> {
        Ok(Self::new(LiteralKind::Identifier, Lexeme::new(name)?))
    }

    pub fn number(digits: &str) -> Result<Self, AstError> {
        Ok(Self::new(LiteralKind::Number, Lexeme::new(digits)?))
    }

    pub fn kind(&self) -> LiteralKind {
        self.kind
    }

    pub fn text(&self) -> &Lexeme {
        &self.text
    }

    pub fn is_identifier(&self) -> bool {
        self.kind == LiteralKind::Identifier
    }

    pub fn is_number(&self) -> bool {
        self.kind == LiteralKind::Number
    }
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
        }
    }

    /// Binding strength; higher binds tighter
    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Subtract => 1,
            BinaryOp::Multiply | BinaryOp::Divide => 2,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl BinaryExpr {
    /// Build a binary node that takes ownership of both operands
    ///
    /// Fails if the resulting tree would be deeper than `MAX_EXPR_DEPTH`.
    pub fn new(op: BinaryOp, left: Expr, right: Expr) -> Result<Self, AstError> {
        let depth = 1 + left.depth().max(right.depth());
        if depth > MAX_EXPR_DEPTH {
            return Err(AstError::DepthLimitExceeded {
                limit: MAX_EXPR_DEPTH,
            });
        }
        Ok(Self {
            op,
            left: Box::new(left),
            right: Box::new(right),
            depth,
        })
    }

    pub fn op(&self) -> BinaryOp {
        self.op
    }

    pub fn left(&self) -> &Expr {
        &self.left
    }

    pub fn right(&self) -> &Expr {
        &self.right
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// Decoding goes through `BinaryExpr::new`, recomputing the cached depth
impl<'de> Deserialize<'de> for BinaryExpr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Wire {
            op: BinaryOp,
            left: Box<Expr>,
            right: Box<Expr>,
        }

        let wire = Wire::deserialize(deserializer)?;
        BinaryExpr::new(wire.op, *wire.left, *wire.right).map_err(de::Error::custom)
    }
}

impl Expr {
    pub fn identifier(name: &str) -> Result<Self, AstError> {
        Literal::identifier(name).map(Expr::Literal)
    }

    pub fn number(digits: &str) -> Result<Self, AstError> {
        Literal::number(digits).map(Expr::Literal)
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Result<Self, AstError> {
        BinaryExpr::new(op, left, right).map(Expr::Binary)
    }

    pub fn depth(&self) -> usize {
        match self {
            Expr::Literal(_) => 1,
            Expr::Binary(binary) => binary.depth,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Expr::Literal(literal) => Some(literal),
            Expr::Binary(_) => None,
        }
    }
}

impl From<Literal> for Expr {
    fn from(literal: Literal) -> Self {
        Expr::Literal(literal)
    }
}

impl From<BinaryExpr> for Expr {
    fn from(binary: BinaryExpr) -> Self {
        Expr::Binary(binary)
    }
}

/// Fully parenthesised rendering, handy in test output and debug logs
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(literal) => write!(f, "{}", literal.text),
            Expr::Binary(binary) => {
                write!(f, "({} {} {})", binary.left, binary.op, binary.right)
            }
        }
    }
}
