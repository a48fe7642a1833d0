//! Statement AST node definitions

use super::{AstError, Expr, Names};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stmt {
    Declaration(DeclStmt),
    Assignment(AssignStmt),
}

/// `define a, b, c`: introduces names without initialisers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclStmt {
    names: Names,
}

/// `a, b = expr`: every target receives the same value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignStmt {
    targets: Names,
    value: Expr,
}

impl DeclStmt {
    pub fn new(names: Names) -> Self {
        Self { names }
    }

    pub fn names(&self) -> &Names {
        &self.names
    }
}

impl AssignStmt {
    pub fn new(targets: Names, value: Expr) -> Self {
        Self { targets, value }
    }

    pub fn targets(&self) -> &Names {
        &self.targets
    }

    pub fn value(&self) -> &Expr {
        &self.value
    }
}

impl Stmt {
    pub fn declaration(names: &[&str]) -> Result<Self, AstError> {
        Ok(Stmt::Declaration(DeclStmt::new(Names::from_strs(names)?)))
    }

    pub fn assignment(targets: &[&str], value: Expr) -> Result<Self, AstError> {
        Ok(Stmt::Assignment(AssignStmt::new(
            Names::from_strs(targets)?,
            value,
        )))
    }

    /// Names this statement introduces or writes, in source order
    pub fn bound_names(&self) -> &Names {
        match self {
            Stmt::Declaration(decl) => &decl.names,
            Stmt::Assignment(assign) => &assign.targets,
        }
    }

    pub fn is_declaration(&self) -> bool {
        matches!(self, Stmt::Declaration(_))
    }
}

impl From<DeclStmt> for Stmt {
    fn from(decl: DeclStmt) -> Self {
        Stmt::Declaration(decl)
    }
}

impl From<AssignStmt> for Stmt {
    fn from(assign: AssignStmt) -> Self {
        Stmt::Assignment(assign)
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Declaration(decl) => write!(f, "define {}", decl.names),
            Stmt::Assignment(assign) => write!(f, "{} = {}", assign.targets, assign.value),
        }
    }
}
