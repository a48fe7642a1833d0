//! Expression code generation
//!
//! Parentheses are emitted only where Rust's own precedence would otherwise
//! reshape the tree: around a child that binds more loosely than its parent,
//! and around a right child of equal precedence (`a - (b - c)`).

use super::{CodeGenerator, CodegenError};
use crate::ast::*;
use crate::visitor::Accept;

impl CodeGenerator {
    pub(super) fn generate_literal(&mut self, literal: &Literal) -> Result<(), CodegenError> {
        let text = match literal.kind() {
            LiteralKind::Identifier => Self::rust_identifier(literal.text().as_str())?,
            LiteralKind::Number => Self::rust_integer(literal.text().as_str())?,
        };
        self.output.push_str(&text);
        Ok(())
    }

    pub(super) fn generate_binary(&mut self, binary: &BinaryExpr) -> Result<(), CodegenError> {
        let precedence = binary.op().precedence();

        let left_needs_parens = Self::binds_looser(binary.left(), precedence, false);
        self.generate_operand(binary.left(), left_needs_parens)?;

        self.output.push(' ');
        self.output.push_str(binary.op().symbol());
        self.output.push(' ');

        let right_needs_parens = Self::binds_looser(binary.right(), precedence, true);
        self.generate_operand(binary.right(), right_needs_parens)
    }

    fn generate_operand(&mut self, operand: &Expr, parenthesize: bool) -> Result<(), CodegenError> {
        if parenthesize {
            self.output.push('(');
            operand.accept(self)?;
            self.output.push(')');
            Ok(())
        } else {
            operand.accept(self)
        }
    }

    fn binds_looser(operand: &Expr, parent_precedence: u8, is_right: bool) -> bool {
        match operand {
            Expr::Literal(_) => false,
            Expr::Binary(child) => {
                let precedence = child.op().precedence();
                precedence < parent_precedence || (is_right && precedence == parent_precedence)
            }
        }
    }
}
