//! Code generation utilities.
//!
//! Indentation plus `syn`-backed validation of identifiers, integer literals
//! and the finished output.

use super::{CodeGenerator, CodegenError};
use crate::config::{STACK_RED_ZONE_BYTES, STACK_SEGMENT_BYTES};
use crate::evaluator::parse_number;

impl CodeGenerator {
    /// Adds the current indentation level to the output
    pub(super) fn indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str("    ");
        }
    }

    /// Spell `name` as a Rust identifier, escaping keywords as raw identifiers
    pub(super) fn rust_identifier(name: &str) -> Result<String, CodegenError> {
        if syn::parse_str::<syn::Ident>(name).is_ok() {
            return Ok(name.to_string());
        }

        // `self`, `super`, `crate` and `Self` cannot be raw, so this can still fail
        let raw = format!("r#{}", name);
        syn::parse_str::<syn::Ident>(&raw)
            .map(|_| raw)
            .map_err(|_| CodegenError::InvalidIdentifier {
                name: name.to_string(),
            })
    }

    /// Accept the number lexemes the evaluator accepts, checked as Rust tokens
    pub(super) fn rust_integer(lexeme: &str) -> Result<String, CodegenError> {
        let invalid = || CodegenError::InvalidNumber {
            lexeme: lexeme.to_string(),
        };

        parse_number(lexeme).ok_or_else(invalid)?;
        syn::parse_str::<syn::LitInt>(lexeme).map_err(|_| invalid())?;
        Ok(lexeme.to_string())
    }

    /// Parse the finished output as a Rust file
    ///
    /// `syn` recurses once per parenthesised level, so the parse (and the
    /// drop of the parsed file) runs with guaranteed stack headroom.
    pub(super) fn validate_output(&self) -> Result<(), CodegenError> {
        let wrapped;
        let source = if self.config.emit_main {
            self.output.as_str()
        } else {
            wrapped = format!("fn main() {{\n{}}}\n", self.output);
            wrapped.as_str()
        };

        stacker::maybe_grow(STACK_RED_ZONE_BYTES, STACK_SEGMENT_BYTES, || {
            syn::parse_file(source)
                .map(|_| ())
                .map_err(|e| CodegenError::InvalidOutput {
                    reason: e.to_string(),
                })
        })
    }
}
