//! Statement code generation
//!
//! - `define a, b` declares one zero-initialised `i64` local per name
//! - `a, b = e` evaluates `e` once into `a`, then copies `a` into the rest

use super::{CodeGenerator, CodegenError};
use crate::ast::*;
use crate::visitor::Accept;

impl CodeGenerator {
    pub(super) fn generate_declaration(&mut self, decl: &DeclStmt) -> Result<(), CodegenError> {
        for name in decl.names().iter() {
            let ident = Self::rust_identifier(name.as_str())?;
            self.indent();
            self.output.push_str(&format!("let mut {}: i64 = 0;\n", ident));
        }
        Ok(())
    }

    pub(super) fn generate_assignment(&mut self, assign: &AssignStmt) -> Result<(), CodegenError> {
        let first = Self::rust_identifier(assign.targets().first().as_str())?;

        self.indent();
        self.output.push_str(&first);
        self.output.push_str(" = ");
        assign.value().accept(self)?;
        self.output.push_str(";\n");

        for target in assign.targets().iter().skip(1) {
            let ident = Self::rust_identifier(target.as_str())?;
            self.indent();
            self.output.push_str(&format!("{} = {};\n", ident, first));
        }
        Ok(())
    }
}
