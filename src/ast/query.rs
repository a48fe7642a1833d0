// Use types re-exported in the parent module (ast/mod.rs)
use super::traversal::{ExprExt, StmtExt};
use super::{Expr, Lexeme, Program, Stmt};
use std::collections::HashSet;

/// Query API for common AST traversal patterns
pub struct AstQuery;

impl AstQuery {
    /// Get all identifiers referenced in an expression
    pub fn collect_identifiers(expr: &Expr) -> HashSet<String> {
        expr.leaves()
            .into_iter()
            .filter(|literal| literal.is_identifier())
            .map(|literal| literal.text().to_string())
            .collect()
    }

    /// Count literal leaves (identifiers and numbers)
    pub fn count_literals(expr: &Expr) -> usize {
        expr.leaves().len()
    }

    /// Count binary operator nodes
    pub fn count_operations(expr: &Expr) -> usize {
        expr.find_subexpressions(|e| matches!(e, Expr::Binary(_)))
            .len()
    }

    /// True if the expression reads no variables
    pub fn is_constant(expr: &Expr) -> bool {
        expr.all_subexprs(|e| match e {
            Expr::Literal(literal) => literal.is_number(),
            Expr::Binary(_) => true,
        })
    }

    /// Every name introduced by a `define`, in program order
    ///
    /// Repeated declarations appear once per occurrence.
    pub fn declared_names(program: &Program) -> Vec<&Lexeme> {
        program
            .statements()
            .iter()
            .filter(|stmt| stmt.is_declaration())
            .flat_map(|stmt| stmt.bound_names().iter())
            .collect()
    }

    /// Every assignment target, in program order
    pub fn assigned_names(program: &Program) -> Vec<&Lexeme> {
        program
            .statements()
            .iter()
            .filter(|stmt| !stmt.is_declaration())
            .flat_map(|stmt| stmt.bound_names().iter())
            .collect()
    }

    /// Identifiers read anywhere in the program, in program order
    pub fn read_names(program: &Program) -> Vec<&Lexeme> {
        program
            .statements()
            .iter()
            .flat_map(Stmt::identifier_reads)
            .collect()
    }
}
