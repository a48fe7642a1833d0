//! Declared-name tracking for the resolver

use std::collections::HashMap;

/// Names declared so far, with the statement that first declared each
#[derive(Debug, Default)]
pub struct Scope {
    declared: HashMap<String, usize>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a declaration, returning the first declaring statement if the
    /// name was already in scope
    pub fn declare(&mut self, name: &str, statement: usize) -> Option<usize> {
        match self.declared.get(name) {
            Some(first) => Some(*first),
            None => {
                self.declared.insert(name.to_string(), statement);
                None
            }
        }
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.declared.contains_key(name)
    }

    pub fn first_declaration(&self, name: &str) -> Option<usize> {
        self.declared.get(name).copied()
    }

    /// Declared names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.declared.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn clear(&mut self) {
        self.declared.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_declaration_wins() {
        let mut scope = Scope::new();
        assert_eq!(scope.declare("b", 0), None);
        assert_eq!(scope.declare("a", 2), None);
        assert_eq!(scope.declare("b", 3), Some(0));

        assert_eq!(scope.first_declaration("b"), Some(0));
        assert_eq!(scope.first_declaration("a"), Some(2));
        assert_eq!(scope.first_declaration("c"), None);
        assert_eq!(scope.names(), vec!["a", "b"]);

        scope.clear();
        assert!(!scope.is_declared("a"));
    }
}
