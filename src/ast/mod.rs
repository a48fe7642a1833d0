//! Abstract Syntax Tree (AST) type definitions for calc
//!
//! The node set is closed: expressions are literals or binary operations,
//! statements are declarations or assignments. Every node is immutable once
//! built and can only be obtained through a validating constructor, so passes
//! may assume the structural invariants hold without re-checking them.

mod expr;
mod lexeme;
mod program;
mod stmt;

pub mod query;
pub mod traversal;

pub use expr::{BinaryExpr, BinaryOp, Expr, Literal, LiteralKind, MAX_EXPR_DEPTH};
pub use lexeme::{Lexeme, Names};
pub use program::Program;
pub use stmt::{AssignStmt, DeclStmt, Stmt};
pub use traversal::{ExprExt, StmtExt};

use std::fmt;

/// Construction failures; no partially built node is ever returned
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstError {
    /// An identifier or number lexeme was empty
    EmptyLexeme,
    /// A declaration or assignment was given no names
    EmptyNames,
    /// Building the node would exceed `MAX_EXPR_DEPTH`
    DepthLimitExceeded { limit: usize },
}

impl fmt::Display for AstError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AstError::EmptyLexeme => write!(f, "lexeme text must not be empty"),
            AstError::EmptyNames => write!(f, "at least one name is required"),
            AstError::DepthLimitExceeded { limit } => {
                write!(f, "expression nesting exceeds the limit of {}", limit)
            }
        }
    }
}

impl std::error::Error for AstError {}
