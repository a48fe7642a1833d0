//! Name resolution findings and suggestion generation

use super::scope::Scope;
use std::fmt;

/// Findings reported by the resolver
///
/// `statement` is the zero-based index of the statement in its program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    UndefinedVariable {
        name: String,
        statement: usize,
    },
    UndefinedVariableWithSuggestion {
        name: String,
        statement: usize,
        suggestion: String,
    },
    Redeclaration {
        name: String,
        statement: usize,
        first_declared: usize,
    },
    DuplicateTarget {
        name: String,
        statement: usize,
    },
}

impl ResolveError {
    pub fn name(&self) -> &str {
        match self {
            ResolveError::UndefinedVariable { name, .. }
            | ResolveError::UndefinedVariableWithSuggestion { name, .. }
            | ResolveError::Redeclaration { name, .. }
            | ResolveError::DuplicateTarget { name, .. } => name,
        }
    }

    pub fn statement(&self) -> usize {
        match self {
            ResolveError::UndefinedVariable { statement, .. }
            | ResolveError::UndefinedVariableWithSuggestion { statement, .. }
            | ResolveError::Redeclaration { statement, .. }
            | ResolveError::DuplicateTarget { statement, .. } => *statement,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(
            self,
            ResolveError::UndefinedVariable { .. }
                | ResolveError::UndefinedVariableWithSuggestion { .. }
        )
    }
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::UndefinedVariable { name, .. } => {
                write!(f, "'{}' is used before any `define` of it", name)
            }
            ResolveError::UndefinedVariableWithSuggestion {
                name, suggestion, ..
            } => {
                write!(
                    f,
                    "'{}' is used before any `define` of it (did you mean '{}'?)",
                    name, suggestion
                )
            }
            ResolveError::Redeclaration {
                name,
                first_declared,
                ..
            } => {
                write!(
                    f,
                    "'{}' was already defined by statement {}",
                    name,
                    first_declared + 1
                )
            }
            ResolveError::DuplicateTarget { name, .. } => {
                write!(f, "'{}' appears more than once as an assignment target", name)
            }
        }
    }
}

impl std::error::Error for ResolveError {}

/// Error analysis and suggestion generation
pub struct ErrorAnalyzer;

impl ErrorAnalyzer {
    /// Attach a "did you mean" suggestion when a declared name is close enough
    pub fn enhance_error(error: ResolveError, scope: &Scope) -> ResolveError {
        match error {
            ResolveError::UndefinedVariable { name, statement } => {
                match Self::suggest_similar_name(&name, &scope.names()) {
                    Some(suggestion) => ResolveError::UndefinedVariableWithSuggestion {
                        name,
                        statement,
                        suggestion,
                    },
                    None => ResolveError::UndefinedVariable { name, statement },
                }
            }
            other => other,
        }
    }

    /// Closest candidate within an edit distance of a third of the name's
    /// length (at least one edit); ties go to the alphabetically first
    pub fn suggest_similar_name(name: &str, candidates: &[&str]) -> Option<String> {
        let threshold = (name.chars().count() / 3).max(1);
        candidates
            .iter()
            .map(|candidate| (Self::edit_distance(name, candidate), *candidate))
            .filter(|(distance, _)| *distance <= threshold)
            .min()
            .map(|(_, candidate)| candidate.to_string())
    }

    /// Levenshtein distance over chars
    pub fn edit_distance(a: &str, b: &str) -> usize {
        let b_chars: Vec<char> = b.chars().collect();
        let mut previous: Vec<usize> = (0..=b_chars.len()).collect();
        let mut current = vec![0; b_chars.len() + 1];

        for (i, a_char) in a.chars().enumerate() {
            current[0] = i + 1;
            for (j, b_char) in b_chars.iter().enumerate() {
                let substitution = previous[j] + usize::from(a_char != *b_char);
                current[j + 1] = substitution
                    .min(previous[j + 1] + 1)
                    .min(current[j] + 1);
            }
            std::mem::swap(&mut previous, &mut current);
        }

        previous[b_chars.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance() {
        assert_eq!(ErrorAnalyzer::edit_distance("", ""), 0);
        assert_eq!(ErrorAnalyzer::edit_distance("abc", "abc"), 0);
        assert_eq!(ErrorAnalyzer::edit_distance("kitten", "sitting"), 3);
        assert_eq!(ErrorAnalyzer::edit_distance("x", ""), 1);
    }

    #[test]
    fn test_suggestions() {
        let candidates = ["count", "total", "x"];
        assert_eq!(
            ErrorAnalyzer::suggest_similar_name("cuont", &candidates),
            None
        );
        assert_eq!(
            ErrorAnalyzer::suggest_similar_name("totl", &candidates),
            Some("total".to_string())
        );
        assert_eq!(
            ErrorAnalyzer::suggest_similar_name("y", &candidates),
            Some("x".to_string())
        );
        assert_eq!(ErrorAnalyzer::suggest_similar_name("zzzz", &candidates), None);
    }

    #[test]
    fn test_enhance_leaves_other_findings_alone() {
        let mut scope = Scope::new();
        scope.declare("alpha", 0);

        let enhanced = ErrorAnalyzer::enhance_error(
            ResolveError::UndefinedVariable {
                name: "alpa".to_string(),
                statement: 1,
            },
            &scope,
        );
        assert_eq!(
            enhanced,
            ResolveError::UndefinedVariableWithSuggestion {
                name: "alpa".to_string(),
                statement: 1,
                suggestion: "alpha".to_string(),
            }
        );

        let duplicate = ResolveError::DuplicateTarget {
            name: "alpha".to_string(),
            statement: 2,
        };
        assert_eq!(
            ErrorAnalyzer::enhance_error(duplicate.clone(), &scope),
            duplicate
        );
    }
}
