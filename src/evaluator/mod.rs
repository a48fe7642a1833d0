//! Evaluation pass
//!
//! Interprets number lexemes as decimal `i64` and computes expression values
//! with checked arithmetic. `run` walks a whole program, binding each
//! assignment's value to all of its targets.
//!
//! A number lexeme is one or more ASCII digits whose value fits in `i64`.
//! Signs, digit separators and radix prefixes are rejected. The Rust emitter
//! applies the same rule through [`parse_number`].

use crate::ast::*;
use crate::visitor::{Accept, Visitor};
use std::collections::HashMap;
use std::fmt;

/// Errors that can occur during evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A number lexeme that is not a decimal `i64`
    InvalidNumber { lexeme: String },
    /// Name read or written without a prior `define`
    UndefinedVariable { name: String },
    /// Name declared but never assigned or supplied as input
    UninitializedVariable { name: String },
    DivisionByZero { dividend: i64 },
    Overflow {
        op: BinaryOp,
        left: i64,
        right: i64,
    },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::InvalidNumber { lexeme } => {
                write!(f, "'{}' is not a valid 64-bit integer", lexeme)
            }
            EvalError::UndefinedVariable { name } => write!(f, "'{}' is not defined", name),
            EvalError::UninitializedVariable { name } => {
                write!(f, "'{}' is read before it has a value", name)
            }
            EvalError::DivisionByZero { dividend } => {
                write!(f, "cannot divide {} by zero", dividend)
            }
            EvalError::Overflow { op, left, right } => {
                write!(f, "{} {} {} overflows a 64-bit integer", left, op, right)
            }
        }
    }
}

impl std::error::Error for EvalError {}

/// Value of a number lexeme, or `None` if it is not plain decimal digits
/// fitting in `i64`
pub fn parse_number(lexeme: &str) -> Option<i64> {
    if lexeme.is_empty() || !lexeme.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    lexeme.parse().ok()
}

/// Expression evaluator and program runner
#[derive(Debug, Default)]
pub struct Evaluator {
    /// Declared names; `None` until assigned
    variables: HashMap<String, Option<i64>>,
    /// Values supplied from outside, picked up when a name is declared
    inputs: HashMap<String, i64>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply a value for a name; it becomes visible once the name is declared
    pub fn with_input(mut self, name: impl Into<String>, value: i64) -> Self {
        self.inputs.insert(name.into(), value);
        self
    }

    /// Declare `name` and bind it immediately
    ///
    /// Lets callers evaluate standalone expressions over known variables.
    pub fn with_binding(mut self, name: impl Into<String>, value: i64) -> Self {
        self.variables.insert(name.into(), Some(value));
        self
    }

    pub fn evaluate(&mut self, expr: &Expr) -> Result<i64, EvalError> {
        expr.accept(self)
    }

    /// Execute every statement in order, stopping at the first error
    pub fn run(&mut self, program: &Program) -> Result<(), EvalError> {
        for (index, statement) in program.statements().iter().enumerate() {
            crate::debug_println!("DEBUG: executing statement {}: {}", index, statement);
            statement.accept(self)?;
        }
        Ok(())
    }

    /// Current value of a variable, if declared and assigned
    pub fn value_of(&self, name: &str) -> Option<i64> {
        self.variables.get(name).copied().flatten()
    }

    /// Assigned variables sorted by name
    pub fn snapshot(&self) -> Vec<(&str, i64)> {
        let mut values: Vec<(&str, i64)> = self
            .variables
            .iter()
            .filter_map(|(name, value)| value.map(|v| (name.as_str(), v)))
            .collect();
        values.sort_unstable();
        values
    }

    fn apply(op: BinaryOp, left: i64, right: i64) -> Result<i64, EvalError> {
        let result = match op {
            BinaryOp::Add => left.checked_add(right),
            BinaryOp::Subtract => left.checked_sub(right),
            BinaryOp::Multiply => left.checked_mul(right),
            BinaryOp::Divide => {
                if right == 0 {
                    return Err(EvalError::DivisionByZero { dividend: left });
                }
                left.checked_div(right)
            }
        };
        result.ok_or(EvalError::Overflow { op, left, right })
    }
}

impl Visitor for Evaluator {
    type ExprOutput = Result<i64, EvalError>;
    type StmtOutput = Result<(), EvalError>;

    fn visit_literal(&mut self, literal: &Literal) -> Result<i64, EvalError> {
        let text = literal.text().as_str();
        match literal.kind() {
            LiteralKind::Number => {
                parse_number(text).ok_or_else(|| EvalError::InvalidNumber {
                    lexeme: text.to_string(),
                })
            }
            LiteralKind::Identifier => match self.variables.get(text) {
                Some(Some(value)) => Ok(*value),
                Some(None) => Err(EvalError::UninitializedVariable {
                    name: text.to_string(),
                }),
                None => Err(EvalError::UndefinedVariable {
                    name: text.to_string(),
                }),
            },
        }
    }

    fn visit_binary(&mut self, binary: &BinaryExpr) -> Result<i64, EvalError> {
        let left = binary.left().accept(self)?;
        let right = binary.right().accept(self)?;
        Self::apply(binary.op(), left, right)
    }

    fn visit_declaration(&mut self, decl: &DeclStmt) -> Result<(), EvalError> {
        for name in decl.names().iter() {
            let input = self.inputs.get(name.as_str()).copied();
            // Redeclaring keeps the current value
            let slot = self.variables.entry(name.to_string()).or_insert(None);
            if slot.is_none() {
                *slot = input;
            }
        }
        Ok(())
    }

    fn visit_assignment(&mut self, assign: &AssignStmt) -> Result<(), EvalError> {
        let value = assign.value().accept(self)?;
        for target in assign.targets().iter() {
            match self.variables.get_mut(target.as_str()) {
                Some(slot) => *slot = Some(value),
                None => {
                    return Err(EvalError::UndefinedVariable {
                        name: target.to_string(),
                    })
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: &str) -> Expr {
        Expr::number(n).unwrap()
    }

    fn bin(op: BinaryOp, left: Expr, right: Expr) -> Expr {
        Expr::binary(op, left, right).unwrap()
    }

    #[test]
    fn test_arithmetic() {
        let mut evaluator = Evaluator::new();
        let expr = bin(
            BinaryOp::Subtract,
            bin(BinaryOp::Divide, num("17"), num("5")),
            bin(BinaryOp::Multiply, num("2"), num("4")),
        );
        assert_eq!(evaluator.evaluate(&expr), Ok(3 - 8));
    }

    #[test]
    fn test_division_by_zero() {
        let expr = bin(BinaryOp::Divide, num("4"), bin(BinaryOp::Subtract, num("2"), num("2")));
        assert_eq!(
            Evaluator::new().evaluate(&expr),
            Err(EvalError::DivisionByZero { dividend: 4 })
        );
    }

    #[test]
    fn test_overflow() {
        let expr = bin(BinaryOp::Add, num("9223372036854775807"), num("1"));
        assert_eq!(
            Evaluator::new().evaluate(&expr),
            Err(EvalError::Overflow {
                op: BinaryOp::Add,
                left: i64::MAX,
                right: 1,
            })
        );
    }

    #[test]
    fn test_invalid_number_lexeme() {
        assert_eq!(
            Evaluator::new().evaluate(&num("12abc")),
            Err(EvalError::InvalidNumber {
                lexeme: "12abc".to_string()
            })
        );
    }

    #[test]
    fn test_number_lexeme_policy() {
        assert_eq!(parse_number("0"), Some(0));
        assert_eq!(parse_number("007"), Some(7));
        assert_eq!(parse_number("9223372036854775807"), Some(i64::MAX));
        assert_eq!(parse_number("9223372036854775808"), None);
        for lexeme in ["+5", "-5", "1_000", "0x10", "1e3", " 1"] {
            assert_eq!(parse_number(lexeme), None, "accepted {}", lexeme);
            assert!(Evaluator::new().evaluate(&num(lexeme)).is_err());
        }
    }

    #[test]
    fn test_variables() {
        let mut evaluator = Evaluator::new().with_binding("a", 6);
        let expr = bin(BinaryOp::Multiply, Expr::identifier("a").unwrap(), num("7"));
        assert_eq!(evaluator.evaluate(&expr), Ok(42));

        let missing = Expr::identifier("b").unwrap();
        assert_eq!(
            evaluator.evaluate(&missing),
            Err(EvalError::UndefinedVariable {
                name: "b".to_string()
            })
        );
    }

    #[test]
    fn test_run_with_inputs_and_uninitialized_reads() {
        let program = Program::new(vec![
            Stmt::declaration(&["a", "b"]).unwrap(),
            Stmt::assignment(&["b"], bin(BinaryOp::Add, Expr::identifier("a").unwrap(), num("1")))
                .unwrap(),
        ]);

        let mut evaluator = Evaluator::new().with_input("a", 9);
        evaluator.run(&program).unwrap();
        assert_eq!(evaluator.snapshot(), vec![("a", 9), ("b", 10)]);

        let mut evaluator = Evaluator::new();
        assert_eq!(
            evaluator.run(&program),
            Err(EvalError::UninitializedVariable {
                name: "a".to_string()
            })
        );
    }

    #[test]
    fn test_assignment_to_undeclared_target() {
        let program = Program::new(vec![Stmt::assignment(&["z"], num("3")).unwrap()]);
        assert_eq!(
            Evaluator::new().run(&program),
            Err(EvalError::UndefinedVariable {
                name: "z".to_string()
            })
        );
    }
}
