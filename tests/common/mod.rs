#![allow(dead_code)]

pub mod snapshot_utils;

use calc::error::{CalcError, IntoCalcError};
use calc::{BinaryOp, CodeGenerator, Config, Expr, NameResolver, Program, Stmt};

/// Number literal
pub fn num(digits: &str) -> Expr {
    Expr::number(digits).expect("valid number lexeme")
}

/// Identifier literal
pub fn ident(name: &str) -> Expr {
    Expr::identifier(name).expect("valid identifier lexeme")
}

pub fn bin(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    Expr::binary(op, left, right).expect("expression within depth limit")
}

pub fn add(left: Expr, right: Expr) -> Expr {
    bin(BinaryOp::Add, left, right)
}

pub fn mul(left: Expr, right: Expr) -> Expr {
    bin(BinaryOp::Multiply, left, right)
}

/// `define a, b, ...`
pub fn define(names: &[&str]) -> Stmt {
    Stmt::declaration(names).expect("non-empty declaration")
}

/// `a, b, ... = value`
pub fn assign(targets: &[&str], value: Expr) -> Stmt {
    Stmt::assignment(targets, value).expect("non-empty target list")
}

/// Right-leaning chain `1 + (2 + (3 + ...))` with `leaves` literals
pub fn right_chain(leaves: usize) -> Expr {
    let mut expr = num(&leaves.to_string());
    for n in (1..leaves).rev() {
        expr = add(num(&n.to_string()), expr);
    }
    expr
}

/// Shared pipeline: resolve names, then emit Rust
pub fn check_and_generate(program: &Program, config: Config) -> Result<String, Vec<CalcError>> {
    NameResolver::with_config(config.clone())
        .check_program(program)
        .map_err(IntoCalcError::into_calc_errors)?;

    CodeGenerator::with_config(config)
        .generate(program)
        .map_err(|e| vec![e.into()])
}
