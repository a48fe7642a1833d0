//! Unified error type for calc
//!
//! Each module reports through its own error enum (`AstError`,
//! `ResolveError`, `EvalError`, `CodegenError`); this module lifts them into a
//! single `CalcError` carrying a category, a message and optional context,
//! and provides terminal formatting and multi-error collection.

mod conversions;

pub use conversions::IntoCalcError;

use colored::*;
use std::fmt;

/// Error context providing additional information
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Zero-based index of the offending statement, when known
    pub statement: Option<usize>,
    pub note: Option<String>,
    pub help: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_statement(mut self, statement: usize) -> Self {
        self.statement = Some(statement);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Main error type for calc
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalcError {
    pub kind: ErrorKind,
    pub message: String,
    pub context: ErrorContext,
}

impl CalcError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: ErrorContext::new(),
        }
    }

    pub fn with_statement(mut self, statement: usize) -> Self {
        self.context.statement = Some(statement);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.context.note = Some(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.context.help = Some(help.into());
        self
    }
}

/// Categories of errors that can occur
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    // Construction errors
    EmptyLexeme,
    EmptyNames,
    DepthLimitExceeded,

    // Name resolution findings
    UndefinedVariable,
    Redeclaration,
    DuplicateTarget,

    // Evaluation errors
    InvalidNumber,
    DivisionByZero,
    Overflow,
    UninitializedVariable,

    // Code generation errors
    CodegenError,
    InvalidIdentifier,

    SerializationError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::EmptyLexeme => "empty lexeme",
            ErrorKind::EmptyNames => "empty name list",
            ErrorKind::DepthLimitExceeded => "expression too deep",
            ErrorKind::UndefinedVariable => "undefined variable",
            ErrorKind::Redeclaration => "redeclared variable",
            ErrorKind::DuplicateTarget => "duplicate assignment target",
            ErrorKind::InvalidNumber => "invalid number",
            ErrorKind::DivisionByZero => "division by zero",
            ErrorKind::Overflow => "arithmetic overflow",
            ErrorKind::UninitializedVariable => "uninitialized variable",
            ErrorKind::CodegenError => "code generation error",
            ErrorKind::InvalidIdentifier => "invalid identifier",
            ErrorKind::SerializationError => "serialization error",
        }
    }

    /// Whether the category comes from a pass rather than from construction
    pub fn is_semantic(&self) -> bool {
        !matches!(
            self,
            ErrorKind::EmptyLexeme
                | ErrorKind::EmptyNames
                | ErrorKind::DepthLimitExceeded
                | ErrorKind::SerializationError
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.context.statement {
            Some(index) => write!(f, "statement {}: {}: {}", index + 1, self.kind, self.message)?,
            None => write!(f, "{}: {}", self.kind, self.message)?,
        }

        if let Some(note) = &self.context.note {
            write!(f, "\nnote: {}", note)?;
        }

        if let Some(help) = &self.context.help {
            write!(f, "\nhelp: {}", help)?;
        }

        Ok(())
    }
}

impl std::error::Error for CalcError {}

/// Format an error for a terminal, optionally in colour
pub struct ErrorFormatter<'a> {
    error: &'a CalcError,
    use_color: bool,
}

impl<'a> ErrorFormatter<'a> {
    pub fn new(error: &'a CalcError) -> Self {
        Self {
            error,
            use_color: true,
        }
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn format(&self) -> String {
        let mut output = String::new();

        if let Some(index) = self.error.context.statement {
            let location = format!("statement {}", index + 1);
            output.push_str(&if self.use_color {
                location.bold().to_string()
            } else {
                location
            });
            output.push_str(": ");
        }

        let error_kind = self.error.kind.to_string();
        let error_label = if self.use_color {
            error_kind.red().bold().to_string()
        } else {
            error_kind
        };

        output.push_str(&format!("{}: {}", error_label, self.error.message));

        if let Some(note) = &self.error.context.note {
            let note_label = if self.use_color {
                "note".blue().bold()
            } else {
                "note".into()
            };
            output.push_str(&format!("\n{}: {}", note_label, note));
        }

        if let Some(help) = &self.error.context.help {
            let help_label = if self.use_color {
                "help".green().bold()
            } else {
                "help".into()
            };
            output.push_str(&format!("\n{}: {}", help_label, help));
        }

        output
    }
}

/// Result type for calc operations
pub type Result<T> = std::result::Result<T, CalcError>;

/// Collection of errors for reporting multiple issues
#[derive(Debug, Default)]
pub struct ErrorCollection {
    errors: Vec<CalcError>,
    warnings: Vec<CalcError>,
}

impl ErrorCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, error: CalcError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: CalcError) {
        self.warnings.push(warning);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn errors(&self) -> &[CalcError] {
        &self.errors
    }

    pub fn warnings(&self) -> &[CalcError] {
        &self.warnings
    }
}

impl<E: Into<CalcError>> Extend<E> for ErrorCollection {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.errors.extend(iter.into_iter().map(Into::into));
    }
}

impl fmt::Display for ErrorCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "error: {}", error)?;
        }

        for warning in &self.warnings {
            writeln!(f, "warning: {}", warning)?;
        }

        if !self.is_empty() {
            write!(
                f,
                "\n{} error(s), {} warning(s)",
                self.error_count(),
                self.warning_count()
            )?;
        }

        Ok(())
    }
}
