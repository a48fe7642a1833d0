//! Program structure definition
//!
//! A `Program` is the ordered statement sequence produced by a parser.
//! Statement order is the only ordering signal later passes get, so it is
//! preserved exactly.

use super::Stmt;
use crate::config::{MAX_JSON_DEPTH, STACK_RED_ZONE_BYTES, STACK_SEGMENT_BYTES};
use crate::error::{CalcError, ErrorKind};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Program {
    statements: Vec<Stmt>,
}

impl Program {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Self { statements }
    }

    pub fn statements(&self) -> &[Stmt] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn to_json(&self) -> Result<String, CalcError> {
        stacker::maybe_grow(STACK_RED_ZONE_BYTES, STACK_SEGMENT_BYTES, || {
            serde_json::to_string_pretty(self)
        })
        .map_err(|e| CalcError::new(ErrorKind::SerializationError, e.to_string()))
    }

    /// Decode a program, running every node through its validating constructor
    ///
    /// serde_json's own nesting limit is lifted, since trees at
    /// `MAX_EXPR_DEPTH` need far more than 128 levels. Documents nested
    /// deeper than any valid program are rejected before decoding starts.
    pub fn from_json(json: &str) -> Result<Self, CalcError> {
        let invalid = |message: String| {
            CalcError::new(ErrorKind::SerializationError, message)
                .with_note("the document does not describe a valid calc program")
        };

        let depth = json_nesting_depth(json);
        if depth > MAX_JSON_DEPTH {
            return Err(invalid(format!(
                "document nests {} levels deep, more than the {} a program can need",
                depth, MAX_JSON_DEPTH
            )));
        }

        let decode = || -> serde_json::Result<Self> {
            let mut deserializer = serde_json::Deserializer::from_str(json);
            deserializer.disable_recursion_limit();
            let program = Self::deserialize(&mut deserializer)?;
            deserializer.end()?;
            Ok(program)
        };
        stacker::maybe_grow(STACK_RED_ZONE_BYTES, STACK_SEGMENT_BYTES, decode)
            .map_err(|e| invalid(e.to_string()))
    }
}

/// Deepest bracket nesting outside string literals
fn json_nesting_depth(json: &str) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0;
    let mut in_string = false;
    let mut escaped = false;

    for byte in json.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    deepest
}

impl FromIterator<Stmt> for Program {
    fn from_iter<I: IntoIterator<Item = Stmt>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// One statement per line, expressions fully parenthesised
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            writeln!(f, "{}", statement)?;
        }
        Ok(())
    }
}
