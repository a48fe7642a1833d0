//! Double-dispatch visitor protocol
//!
//! A pass implements [`Visitor`] with one handler per concrete node variant.
//! The trait has no default methods, so a pass that forgets a variant does
//! not compile. Callers holding an [`Expr`] or [`Stmt`] call
//! [`Accept::accept`], and the node routes to the matching handler.
//!
//! Handlers are never invoked for children implicitly. A pass that wants to
//! descend calls `accept` on the child references itself, so traversal order
//! belongs to the pass.
//!
//! ```
//! use calc::ast::{AssignStmt, BinaryExpr, BinaryOp, DeclStmt, Expr, Literal};
//! use calc::visitor::{Accept, Visitor};
//!
//! struct LeafCounter;
//!
//! impl Visitor for LeafCounter {
//!     type ExprOutput = usize;
//!     type StmtOutput = usize;
//!
//!     fn visit_literal(&mut self, _: &Literal) -> usize {
//!         1
//!     }
//!     fn visit_binary(&mut self, binary: &BinaryExpr) -> usize {
//!         binary.left().accept(self) + binary.right().accept(self)
//!     }
//!     fn visit_declaration(&mut self, _: &DeclStmt) -> usize {
//!         0
//!     }
//!     fn visit_assignment(&mut self, assign: &AssignStmt) -> usize {
//!         assign.value().accept(self)
//!     }
//! }
//!
//! let one = || Expr::number("1").unwrap();
//! let expr = Expr::binary(BinaryOp::Add, one(), one()).unwrap();
//! assert_eq!(expr.accept(&mut LeafCounter), 2);
//! ```

use crate::ast::{AssignStmt, BinaryExpr, DeclStmt, Expr, Literal, Program, Stmt};

/// A pass over the AST
///
/// Expression and statement handlers may produce different output types,
/// e.g. an evaluator yields values for expressions and nothing for
/// statements.
pub trait Visitor {
    type ExprOutput;
    type StmtOutput;

    fn visit_literal(&mut self, literal: &Literal) -> Self::ExprOutput;
    fn visit_binary(&mut self, binary: &BinaryExpr) -> Self::ExprOutput;
    fn visit_declaration(&mut self, decl: &DeclStmt) -> Self::StmtOutput;
    fn visit_assignment(&mut self, assign: &AssignStmt) -> Self::StmtOutput;
}

/// Entry point of the dispatch: a node selects its handler on the pass
pub trait Accept {
    type Output<V: Visitor + ?Sized>;

    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Self::Output<V>;
}

impl Accept for Expr {
    type Output<V: Visitor + ?Sized> = V::ExprOutput;

    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::ExprOutput {
        match self {
            Expr::Literal(literal) => visitor.visit_literal(literal),
            Expr::Binary(binary) => visitor.visit_binary(binary),
        }
    }
}

impl Accept for Stmt {
    type Output<V: Visitor + ?Sized> = V::StmtOutput;

    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::StmtOutput {
        match self {
            Stmt::Declaration(decl) => visitor.visit_declaration(decl),
            Stmt::Assignment(assign) => visitor.visit_assignment(assign),
        }
    }
}

impl Accept for Literal {
    type Output<V: Visitor + ?Sized> = V::ExprOutput;

    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::ExprOutput {
        visitor.visit_literal(self)
    }
}

impl Accept for BinaryExpr {
    type Output<V: Visitor + ?Sized> = V::ExprOutput;

    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::ExprOutput {
        visitor.visit_binary(self)
    }
}

impl Accept for DeclStmt {
    type Output<V: Visitor + ?Sized> = V::StmtOutput;

    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::StmtOutput {
        visitor.visit_declaration(self)
    }
}

impl Accept for AssignStmt {
    type Output<V: Visitor + ?Sized> = V::StmtOutput;

    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::StmtOutput {
        visitor.visit_assignment(self)
    }
}

/// Dispatch every statement of `program` in order, collecting the outputs
pub fn walk_program<V: Visitor + ?Sized>(visitor: &mut V, program: &Program) -> Vec<V::StmtOutput> {
    program
        .statements()
        .iter()
        .map(|stmt| stmt.accept(visitor))
        .collect()
}

/// Like [`walk_program`], stopping at the first failing statement
pub fn try_walk_program<V, E>(visitor: &mut V, program: &Program) -> Result<(), E>
where
    V: Visitor<StmtOutput = Result<(), E>> + ?Sized,
{
    for stmt in program.statements() {
        stmt.accept(visitor)?;
    }
    Ok(())
}
