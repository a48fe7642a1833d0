//! Conversions from module error types to CalcError

use super::{CalcError, ErrorKind};
use crate::ast::AstError;
use crate::codegen::CodegenError;
use crate::evaluator::EvalError;
use crate::resolver::ResolveError;

impl From<AstError> for CalcError {
    fn from(err: AstError) -> Self {
        let kind = match err {
            AstError::EmptyLexeme => ErrorKind::EmptyLexeme,
            AstError::EmptyNames => ErrorKind::EmptyNames,
            AstError::DepthLimitExceeded { .. } => ErrorKind::DepthLimitExceeded,
        };
        CalcError::new(kind, err.to_string())
    }
}

impl From<ResolveError> for CalcError {
    fn from(err: ResolveError) -> Self {
        let message = err.to_string();
        let statement = err.statement();
        match err {
            ResolveError::UndefinedVariable { name, .. } => {
                CalcError::new(ErrorKind::UndefinedVariable, message)
                    .with_statement(statement)
                    .with_help(format!("add `define {}` before this statement", name))
            }
            ResolveError::UndefinedVariableWithSuggestion { suggestion, .. } => {
                CalcError::new(ErrorKind::UndefinedVariable, message)
                    .with_statement(statement)
                    .with_help(format!("a variable named '{}' is defined", suggestion))
            }
            ResolveError::Redeclaration { .. } => {
                CalcError::new(ErrorKind::Redeclaration, message).with_statement(statement)
            }
            ResolveError::DuplicateTarget { .. } => {
                CalcError::new(ErrorKind::DuplicateTarget, message).with_statement(statement)
            }
        }
    }
}

impl From<EvalError> for CalcError {
    fn from(err: EvalError) -> Self {
        let kind = match err {
            EvalError::InvalidNumber { .. } => ErrorKind::InvalidNumber,
            EvalError::UndefinedVariable { .. } => ErrorKind::UndefinedVariable,
            EvalError::UninitializedVariable { .. } => ErrorKind::UninitializedVariable,
            EvalError::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            EvalError::Overflow { .. } => ErrorKind::Overflow,
        };
        CalcError::new(kind, err.to_string())
    }
}

impl From<CodegenError> for CalcError {
    fn from(err: CodegenError) -> Self {
        let kind = match err {
            CodegenError::InvalidIdentifier { .. } => ErrorKind::InvalidIdentifier,
            CodegenError::InvalidNumber { .. } => ErrorKind::InvalidNumber,
            CodegenError::InvalidOutput { .. } => ErrorKind::CodegenError,
        };
        CalcError::new(kind, err.to_string())
    }
}

/// Helper for lifting a list of module errors into CalcErrors
pub trait IntoCalcError {
    fn into_calc_errors(self) -> Vec<CalcError>;
}

impl<E: Into<CalcError>> IntoCalcError for Vec<E> {
    fn into_calc_errors(self) -> Vec<CalcError> {
        self.into_iter().map(Into::into).collect()
    }
}
