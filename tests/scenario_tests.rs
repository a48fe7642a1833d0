//! End-to-end behaviour of the node model and the reference passes

mod common;

use calc::ast::{AstError, ExprExt};
use calc::{
    AssignStmt, BinaryExpr, BinaryOp, DeclStmt, Evaluator, Expr, Literal, NameResolver, Program,
    ResolveError, Stmt, Visitor,
};
use calc::visitor::Accept;
use common::*;

#[test]
fn test_declared_multi_assignment_resolves() {
    // define x, y
    // x, y = 3 + 4
    let program = Program::new(vec![
        define(&["x", "y"]),
        assign(&["x", "y"], add(num("3"), num("4"))),
    ]);

    assert_eq!(NameResolver::new().check_program(&program), Ok(()));
}

#[test]
fn test_assignment_without_define_reports_one_finding() {
    // z = 1 + 2
    let program = Program::new(vec![assign(&["z"], add(num("1"), num("2")))]);

    let errors = NameResolver::new().check_program(&program).unwrap_err();
    assert_eq!(
        errors,
        vec![ResolveError::UndefinedVariable {
            name: "z".to_string(),
            statement: 0,
        }]
    );
}

#[test]
fn test_evaluate_nested_product() {
    // define a
    // a = 2 * (3 + 4)
    let value = bin(BinaryOp::Multiply, num("2"), add(num("3"), num("4")));
    let program = Program::new(vec![define(&["a"]), assign(&["a"], value)]);

    let Stmt::Assignment(assignment) = &program.statements()[1] else {
        panic!("second statement should be the assignment");
    };
    assert_eq!(Evaluator::new().evaluate(assignment.value()), Ok(14));

    let mut evaluator = Evaluator::new();
    evaluator.run(&program).unwrap();
    assert_eq!(evaluator.value_of("a"), Some(14));
}

#[test]
fn test_empty_target_list_constructs_nothing() {
    let result = Stmt::assignment(&[], num("1"));
    assert_eq!(result, Err(AstError::EmptyNames));
}

#[test]
fn test_deep_right_child_leaves_visited_once() {
    let expr = right_chain(4);
    let Expr::Binary(root) = &expr else {
        panic!("chain root should be binary");
    };
    assert_eq!(root.right().depth(), 3);

    // Iterative walk
    let mut leaves = Vec::new();
    expr.walk(&mut |e| {
        if let Expr::Literal(literal) = e {
            leaves.push(literal.text().to_string());
        }
        Ok::<(), ()>(())
    })
    .unwrap();
    assert_eq!(leaves, vec!["1", "2", "3", "4"]);

    // Recursive visitor
    let mut collector = LeafCollector::default();
    expr.accept(&mut collector);
    assert_eq!(collector.leaves, vec!["1", "2", "3", "4"]);
}

#[test]
fn test_every_literal_leaf_has_text() {
    let expr = mul(add(ident("a"), num("1")), right_chain(5));
    assert!(expr.leaves().iter().all(|leaf| !leaf.text().as_str().is_empty()));
    assert_eq!(expr.leaves().len(), 7);
}

#[test]
fn test_statement_name_lists_are_never_empty() {
    let program = Program::new(vec![
        define(&["a"]),
        define(&["b", "c", "b"]),
        assign(&["a"], num("1")),
        assign(&["b", "c"], ident("a")),
    ]);
    assert!(program
        .statements()
        .iter()
        .all(|stmt| stmt.bound_names().len() >= 1));
}

#[test]
fn test_invalid_nodes_cannot_be_built() {
    assert_eq!(Expr::identifier(""), Err(AstError::EmptyLexeme));
    assert_eq!(Expr::number(""), Err(AstError::EmptyLexeme));
    assert_eq!(Stmt::declaration(&[]), Err(AstError::EmptyNames));
    assert_eq!(Stmt::assignment(&["ok", ""], num("1")), Err(AstError::EmptyLexeme));
}

#[test]
fn test_statement_order_is_preserved() {
    let statements = vec![
        assign(&["x"], num("1")),
        define(&["x"]),
        assign(&["x"], num("2")),
    ];
    let program = Program::new(statements.clone());
    assert_eq!(program.statements(), statements.as_slice());

    // Same names, different order, different verdict
    let errors = NameResolver::new().check_program(&program).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].statement(), 0);
}

#[derive(Default)]
struct LeafCollector {
    leaves: Vec<String>,
}

impl Visitor for LeafCollector {
    type ExprOutput = ();
    type StmtOutput = ();

    fn visit_literal(&mut self, literal: &Literal) {
        self.leaves.push(literal.text().to_string());
    }

    fn visit_binary(&mut self, binary: &BinaryExpr) {
        binary.left().accept(self);
        binary.right().accept(self);
    }

    fn visit_declaration(&mut self, _decl: &DeclStmt) {}

    fn visit_assignment(&mut self, assign: &AssignStmt) {
        assign.value().accept(self);
    }
}
