//! AST traversal traits for walking expression and statement trees.
//!
//! Walks here are iterative with an explicit stack, so they never recurse
//! regardless of tree depth. Passes that need per-variant dispatch use the
//! visitor protocol instead; these helpers cover closure-style analyses.

use super::*;

pub trait ExprExt {
    /// Walk the expression tree in pre-order
    ///
    /// Calls visitor on current node before its children, left before right.
    /// Return Err to stop early.
    fn walk<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&Expr) -> Result<(), E>;

    /// Walk the expression tree in post-order
    ///
    /// Calls visitor on children before current node. Useful for bottom-up analysis.
    fn walk_post<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&Expr) -> Result<(), E>;

    /// Find all sub-expressions matching a predicate, in pre-order
    fn find_subexpressions<F>(&self, predicate: F) -> Vec<&Expr>
    where
        F: Fn(&Expr) -> bool;

    /// Check if any sub-expression matches a predicate
    ///
    /// Short-circuits on first match.
    fn any_subexpr<F>(&self, predicate: F) -> bool
    where
        F: Fn(&Expr) -> bool;

    /// Check if all sub-expressions match a predicate
    ///
    /// Short-circuits on first non-match.
    fn all_subexprs<F>(&self, predicate: F) -> bool
    where
        F: Fn(&Expr) -> bool;

    /// Literal leaves from left to right
    fn leaves(&self) -> Vec<&Literal>;
}

impl ExprExt for Expr {
    fn walk<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&Expr) -> Result<(), E>,
    {
        let mut stack = vec![self];
        while let Some(expr) = stack.pop() {
            visitor(expr)?;
            if let Expr::Binary(binary) = expr {
                // Right first so the left subtree pops first
                stack.push(binary.right());
                stack.push(binary.left());
            }
        }
        Ok(())
    }

    fn walk_post<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&Expr) -> Result<(), E>,
    {
        // The flag marks nodes whose children are already on the stack
        let mut stack = vec![(self, false)];
        while let Some((expr, expanded)) = stack.pop() {
            match expr {
                Expr::Binary(binary) if !expanded => {
                    stack.push((expr, true));
                    stack.push((binary.right(), false));
                    stack.push((binary.left(), false));
                }
                _ => visitor(expr)?,
            }
        }
        Ok(())
    }

    fn find_subexpressions<F>(&self, predicate: F) -> Vec<&Expr>
    where
        F: Fn(&Expr) -> bool,
    {
        let mut results = Vec::new();
        let mut stack = vec![self];
        while let Some(expr) = stack.pop() {
            if predicate(expr) {
                results.push(expr);
            }
            if let Expr::Binary(binary) = expr {
                stack.push(binary.right());
                stack.push(binary.left());
            }
        }
        results
    }

    fn any_subexpr<F>(&self, predicate: F) -> bool
    where
        F: Fn(&Expr) -> bool,
    {
        let mut found = false;
        let _ = self.walk(&mut |expr| {
            if predicate(expr) {
                found = true;
                Err(()) // Early exit
            } else {
                Ok(())
            }
        });
        found
    }

    fn all_subexprs<F>(&self, predicate: F) -> bool
    where
        F: Fn(&Expr) -> bool,
    {
        !self.any_subexpr(|expr| !predicate(expr))
    }

    fn leaves(&self) -> Vec<&Literal> {
        self.find_subexpressions(|expr| matches!(expr, Expr::Literal(_)))
            .into_iter()
            .filter_map(Expr::as_literal)
            .collect()
    }
}

/// Extension trait for statement traversal
pub trait StmtExt {
    /// Walk every expression owned by this statement, in pre-order
    fn walk_expressions<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&Expr) -> Result<(), E>;

    /// Identifier literals read by this statement, left to right
    fn identifier_reads(&self) -> Vec<&Lexeme>;
}

impl StmtExt for Stmt {
    fn walk_expressions<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&Expr) -> Result<(), E>,
    {
        match self {
            Stmt::Declaration(_) => Ok(()),
            Stmt::Assignment(assign) => assign.value().walk(visitor),
        }
    }

    fn identifier_reads(&self) -> Vec<&Lexeme> {
        match self {
            Stmt::Declaration(_) => Vec::new(),
            Stmt::Assignment(assign) => assign
                .value()
                .leaves()
                .into_iter()
                .filter(|literal| literal.is_identifier())
                .map(Literal::text)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: &str) -> Expr {
        Expr::number(n).unwrap()
    }

    // 1 - (2 * 3)
    fn sample() -> Expr {
        let product = Expr::binary(BinaryOp::Multiply, num("2"), num("3")).unwrap();
        Expr::binary(BinaryOp::Subtract, num("1"), product).unwrap()
    }

    fn label(expr: &Expr) -> String {
        match expr {
            Expr::Literal(literal) => literal.text().to_string(),
            Expr::Binary(binary) => binary.op().symbol().to_string(),
        }
    }

    #[test]
    fn test_walk_pre_order() {
        let mut seen = Vec::new();
        sample()
            .walk(&mut |expr| {
                seen.push(label(expr));
                Ok::<(), ()>(())
            })
            .unwrap();
        assert_eq!(seen, vec!["-", "1", "*", "2", "3"]);
    }

    #[test]
    fn test_walk_post_order() {
        let mut seen = Vec::new();
        sample()
            .walk_post(&mut |expr| {
                seen.push(label(expr));
                Ok::<(), ()>(())
            })
            .unwrap();
        assert_eq!(seen, vec!["1", "2", "3", "*", "-"]);
    }

    #[test]
    fn test_walk_stops_on_error() {
        let mut visited = 0;
        let result = sample().walk(&mut |expr| {
            visited += 1;
            if matches!(expr, Expr::Binary(b) if b.op() == BinaryOp::Multiply) {
                Err("stop")
            } else {
                Ok(())
            }
        });
        assert_eq!(result, Err("stop"));
        assert_eq!(visited, 3);
    }

    #[test]
    fn test_predicates_and_leaves() {
        let expr = sample();
        assert!(expr.any_subexpr(|e| matches!(e, Expr::Binary(_))));
        assert!(!expr.all_subexprs(|e| matches!(e, Expr::Literal(_))));
        assert!(num("7").all_subexprs(|e| matches!(e, Expr::Literal(_))));

        let leaves: Vec<&str> = expr.leaves().iter().map(|l| l.text().as_str()).collect();
        assert_eq!(leaves, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_identifier_reads() {
        let value = Expr::binary(
            BinaryOp::Add,
            Expr::identifier("a").unwrap(),
            Expr::binary(BinaryOp::Divide, num("4"), Expr::identifier("b").unwrap()).unwrap(),
        )
        .unwrap();
        let stmt = Stmt::assignment(&["c"], value).unwrap();
        let reads: Vec<&str> = stmt.identifier_reads().iter().map(|l| l.as_str()).collect();
        assert_eq!(reads, vec!["a", "b"]);

        let mut nodes = 0;
        stmt.walk_expressions(&mut |_| {
            nodes += 1;
            Ok::<(), ()>(())
        })
        .unwrap();
        assert_eq!(nodes, 5);
        assert!(Stmt::declaration(&["a"]).unwrap().identifier_reads().is_empty());
    }
}
