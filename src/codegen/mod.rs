//! Rust code generation from calc AST.
//!
//! Emits a Rust program in which every calc variable is an `i64` local.
//! The generated text is parsed back with `syn` before it is returned, so a
//! successful `generate` always yields syntactically valid Rust.

mod expressions;
mod statements;
mod utils;

use crate::ast::*;
use crate::config::Config;
use crate::visitor::{Accept, Visitor};
use std::fmt;

/// Errors that can occur during code generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodegenError {
    /// Name that cannot be spelled as a Rust identifier, even raw
    InvalidIdentifier { name: String },
    /// Number lexeme the evaluator would also reject
    InvalidNumber { lexeme: String },
    /// Generated text failed to parse as Rust
    InvalidOutput { reason: String },
}

impl fmt::Display for CodegenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodegenError::InvalidIdentifier { name } => {
                write!(f, "'{}' cannot be used as a Rust identifier", name)
            }
            CodegenError::InvalidNumber { lexeme } => {
                write!(f, "'{}' is not a valid i64 literal", lexeme)
            }
            CodegenError::InvalidOutput { reason } => {
                write!(f, "generated code does not parse: {}", reason)
            }
        }
    }
}

impl std::error::Error for CodegenError {}

pub struct CodeGenerator {
    output: String,
    indent_level: usize,
    config: Config,
}

impl CodeGenerator {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            config,
        }
    }

    pub fn generate(&mut self, program: &Program) -> Result<String, CodegenError> {
        self.output.clear();
        self.indent_level = 0;

        if self.config.emit_main {
            self.output.push_str("fn main() {\n");
            self.indent_level += 1;
        }

        for stmt in program.statements() {
            stmt.accept(self)?;
        }

        if self.config.emit_main {
            self.indent_level -= 1;
            self.output.push_str("}\n");
        }

        self.validate_output()?;
        crate::debug_println!(
            "DEBUG: generated {} byte(s) of Rust for {} statement(s)",
            self.output.len(),
            program.len()
        );
        Ok(std::mem::take(&mut self.output))
    }

    /// Generate a single expression without any surrounding statement
    pub fn generate_expression(&mut self, expr: &Expr) -> Result<String, CodegenError> {
        self.output.clear();
        expr.accept(self)?;
        Ok(std::mem::take(&mut self.output))
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Visitor for CodeGenerator {
    type ExprOutput = Result<(), CodegenError>;
    type StmtOutput = Result<(), CodegenError>;

    fn visit_literal(&mut self, literal: &Literal) -> Result<(), CodegenError> {
        self.generate_literal(literal)
    }

    fn visit_binary(&mut self, binary: &BinaryExpr) -> Result<(), CodegenError> {
        self.generate_binary(binary)
    }

    fn visit_declaration(&mut self, decl: &DeclStmt) -> Result<(), CodegenError> {
        self.generate_declaration(decl)
    }

    fn visit_assignment(&mut self, assign: &AssignStmt) -> Result<(), CodegenError> {
        self.generate_assignment(assign)
    }
}
