//! Define-before-use checking
//!
//! Every identifier read and every assignment target must name an identifier
//! declared by an earlier `define` in the same program. Findings are
//! collected for the whole program rather than stopping at the first one.

pub mod error;
mod scope;

use crate::ast::*;
use crate::config::Config;
use crate::visitor::{Accept, Visitor};
use std::collections::HashSet;

pub use error::{ErrorAnalyzer, ResolveError};
pub use scope::Scope;

/// Name resolution pass
pub struct NameResolver {
    scope: Scope,
    config: Config,
    statement: usize,
    errors: Vec<ResolveError>,
}

impl NameResolver {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            scope: Scope::new(),
            config,
            statement: 0,
            errors: Vec::new(),
        }
    }

    /// Main entry point for checking a program
    ///
    /// Resets any state from a previous run, so checking the same program
    /// twice yields the same findings.
    pub fn check_program(&mut self, program: &Program) -> Result<(), Vec<ResolveError>> {
        self.scope.clear();
        self.errors.clear();

        for (index, statement) in program.statements().iter().enumerate() {
            self.statement = index;
            statement.accept(self);
        }

        crate::debug_println!(
            "DEBUG: resolved {} statement(s), {} finding(s)",
            program.len(),
            self.errors.len()
        );

        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(std::mem::take(&mut self.errors))
        }
    }

    /// Names declared by the last checked program
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    fn report_undefined(&mut self, name: &Lexeme) {
        crate::debug_println!(
            "DEBUG: statement {} uses undeclared '{}'",
            self.statement,
            name
        );
        let error = ResolveError::UndefinedVariable {
            name: name.to_string(),
            statement: self.statement,
        };
        self.errors
            .push(ErrorAnalyzer::enhance_error(error, &self.scope));
    }
}

impl Default for NameResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Visitor for NameResolver {
    type ExprOutput = ();
    type StmtOutput = ();

    fn visit_literal(&mut self, literal: &Literal) {
        if literal.is_identifier() && !self.scope.is_declared(literal.text().as_str()) {
            self.report_undefined(literal.text());
        }
    }

    fn visit_binary(&mut self, binary: &BinaryExpr) {
        binary.left().accept(self);
        binary.right().accept(self);
    }

    fn visit_declaration(&mut self, decl: &DeclStmt) {
        for name in decl.names().iter() {
            if let Some(first_declared) = self.scope.declare(name.as_str(), self.statement) {
                if !self.config.allow_redeclaration {
                    self.errors.push(ResolveError::Redeclaration {
                        name: name.to_string(),
                        statement: self.statement,
                        first_declared,
                    });
                }
            }
        }
    }

    fn visit_assignment(&mut self, assign: &AssignStmt) {
        // The value is read before any target is written
        assign.value().accept(self);

        let mut seen = HashSet::new();
        for target in assign.targets().iter() {
            if !seen.insert(target.as_str()) {
                if !self.config.allow_duplicate_targets {
                    self.errors.push(ResolveError::DuplicateTarget {
                        name: target.to_string(),
                        statement: self.statement,
                    });
                }
                continue;
            }
            if !self.scope.is_declared(target.as_str()) {
                self.report_undefined(target);
            }
        }
    }
}
