//! Text handles carried by AST nodes
//!
//! A `Lexeme` is the verbatim text of an identifier or number as it appeared
//! in the source. Nodes own their lexemes; nothing in the tree borrows from a
//! source buffer.

use super::AstError;
use nonempty::NonEmpty;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-empty, immutable lexeme text
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Lexeme(String);

impl Lexeme {
    pub fn new(text: impl Into<String>) -> Result<Self, AstError> {
        let text = text.into();
        if text.is_empty() {
            return Err(AstError::EmptyLexeme);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Lexeme {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Lexeme {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Lexeme {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Lexeme {
    type Error = AstError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

impl TryFrom<&str> for Lexeme {
    type Error = AstError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

impl From<Lexeme> for String {
    fn from(lexeme: Lexeme) -> Self {
        lexeme.0
    }
}

/// Ordered, non-empty sequence of names
///
/// Used both for the identifiers of a `define` and for assignment targets.
/// Order is kept exactly as constructed and duplicates are allowed; rejecting
/// them is left to whichever pass cares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Lexeme>", into = "Vec<Lexeme>")]
pub struct Names(NonEmpty<Lexeme>);

impl Names {
    pub fn new(names: Vec<Lexeme>) -> Result<Self, AstError> {
        NonEmpty::from_vec(names)
            .map(Self)
            .ok_or(AstError::EmptyNames)
    }

    /// Build from raw strings, validating every entry
    pub fn from_strs(names: &[&str]) -> Result<Self, AstError> {
        let lexemes = names
            .iter()
            .map(|name| Lexeme::new(*name))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(lexemes)
    }

    pub fn single(name: Lexeme) -> Self {
        Self(NonEmpty::new(name))
    }

    pub fn first(&self) -> &Lexeme {
        self.0.first()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &Lexeme> + '_ {
        self.0.iter()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|lexeme| lexeme == name)
    }
}

impl TryFrom<Vec<Lexeme>> for Names {
    type Error = AstError;

    fn try_from(names: Vec<Lexeme>) -> Result<Self, Self::Error> {
        Self::new(names)
    }
}

impl From<Names> for Vec<Lexeme> {
    fn from(names: Names) -> Self {
        let NonEmpty { head, tail } = names.0;
        let mut all = Vec::with_capacity(tail.len() + 1);
        all.push(head);
        all.extend(tail);
        all
    }
}

impl fmt::Display for Names {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_lexeme_rejected() {
        assert!(matches!(Lexeme::new(""), Err(AstError::EmptyLexeme)));
        assert_eq!(Lexeme::new("x").unwrap().as_str(), "x");
    }

    #[test]
    fn test_names_keep_order_and_duplicates() {
        let names = Names::from_strs(&["b", "a", "b"]).unwrap();
        let collected: Vec<&str> = names.iter().map(Lexeme::as_str).collect();
        assert_eq!(collected, vec!["b", "a", "b"]);
        assert_eq!(names.len(), 3);
        assert_eq!(names.first(), "b");
        assert_eq!(names.to_string(), "b, a, b");
    }

    #[test]
    fn test_single_name() {
        let names = Names::single(Lexeme::new("total").unwrap());
        assert_eq!(names.len(), 1);
        assert!(names.contains("total"));
        assert!(!names.contains("tota"));
        assert_eq!(Vec::from(names), vec![Lexeme::new("total").unwrap()]);
    }

    #[test]
    fn test_empty_names_rejected() {
        assert!(matches!(Names::new(vec![]), Err(AstError::EmptyNames)));
        assert!(matches!(
            Names::from_strs(&["x", ""]),
            Err(AstError::EmptyLexeme)
        ));
    }
}
