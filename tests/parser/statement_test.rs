//! 文のパーサーテスト

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_local_declarations() {
    let statements = parse_body("final long a; int b = 2; String c; List<X> d; int[] e = f;");

    let declared: Vec<(bool, String, String, bool)> = statements
        .iter()
        .map(|s| match s {
            StatementNode::VariableDeclaration(decl) => (
                decl.is_final(),
                decl.variable_type().to_string(),
                decl.name().to_string(),
                decl.initializer().is_some(),
            ),
            other => panic!("expected a declaration, got {:?}", other),
        })
        .collect();

    assert_eq!(
        declared,
        vec![
            (true, "long".to_string(), "a".to_string(), false),
            (false, "int".to_string(), "b".to_string(), true),
            (false, "String".to_string(), "c".to_string(), false),
            (false, "List<X>".to_string(), "d".to_string(), false),
            (false, "int[]".to_string(), "e".to_string(), true),
        ]
    );
}

#[test]
fn test_return_and_empty() {
    assert_eq!(
        parse_body("return 1 + x; ; ;"),
        vec![
            StatementNode::Return(ExpressionNode::plus(int(1), var("x"))),
            StatementNode::Empty,
            StatementNode::Empty,
        ]
    );
}

#[test]
fn test_field_assignment() {
    assert_eq!(
        parse_body("a.b.c = 4;"),
        vec![StatementNode::FieldAssignment {
            target: FieldAccessExpression::new(
                ExpressionNode::field_access(var("a"), "b"),
                "c"
            ),
            value: int(4),
        }]
    );
}

#[test]
fn test_field_assignment_through_call() {
    assert_eq!(
        parse_body("a.get().value = 1;"),
        vec![StatementNode::FieldAssignment {
            target: FieldAccessExpression::new(
                ExpressionNode::invocation(var("a"), "get", vec![]),
                "value"
            ),
            value: int(1),
        }]
    );
}

#[test]
fn test_method_invocation() {
    assert_eq!(
        parse_body("System.out.println(1, (2));"),
        vec![StatementNode::MethodInvocation(MethodInvocationExpression::new(
            ExpressionNode::field_access(var("System"), "out"),
            "println",
            vec![int(1), ExpressionNode::bracket(int(2))],
        ))]
    );
}

#[test]
fn test_chained_invocations() {
    let statements = parse_body("builder.add(1).add(2).build();");
    assert_eq!(statements.len(), 1);
    assert_eq!(statements[0].to_string(), "builder.add(1).add(2).build();");
}
