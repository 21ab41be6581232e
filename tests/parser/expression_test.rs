//! 式のパーサーテスト
//!
//! 四則演算は1つの優先順位で右結合に解析されることを確認する。

use super::*;
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test]
fn test_bracketed_arithmetic() {
    assert_eq!(
        parse_initializer("(3*5)+(7/(9-11))"),
        ExpressionNode::plus(
            ExpressionNode::bracket(ExpressionNode::multiply(int(3), int(5))),
            ExpressionNode::bracket(ExpressionNode::divide(
                int(7),
                ExpressionNode::bracket(ExpressionNode::minus(int(9), int(11)))
            ))
        )
    );
}

#[test]
fn test_multiplication_does_not_bind_tighter() {
    assert_eq!(
        parse_initializer("2*3+4"),
        ExpressionNode::multiply(int(2), ExpressionNode::plus(int(3), int(4)))
    );
    assert_eq!(
        parse_initializer("2+3*4"),
        ExpressionNode::plus(int(2), ExpressionNode::multiply(int(3), int(4)))
    );
}

#[test]
fn test_right_associative() {
    assert_eq!(
        parse_initializer("8/4/2"),
        ExpressionNode::divide(int(8), ExpressionNode::divide(int(4), int(2)))
    );
    assert_eq!(
        parse_initializer("a-b+c"),
        ExpressionNode::minus(var("a"), ExpressionNode::plus(var("b"), var("c")))
    );
}

#[test_case("0", "0" ; "zero")]
#[test_case("0xff", "255" ; "hexadecimal")]
#[test_case("0b101L", "5L" ; "binary long")]
#[test_case("1_000_000", "1000000" ; "separators")]
#[test_case("((x))", "((x))" ; "nested brackets")]
#[test_case("a.b + c.d(e)", "a.b+c.d(e)" ; "chains as operands")]
#[test_case("f.g()*h", "f.g()*h" ; "call without arguments")]
fn test_render_expression(source: &str, rendered: &str) {
    assert_eq!(parse_initializer(source).to_string(), rendered);
}

#[test]
fn test_large_constant() {
    let expr = parse_initializer("99999999999999999999999999");
    assert_eq!(
        expr,
        ExpressionNode::Constant {
            value: "99999999999999999999999999".parse().unwrap(),
            is_long: false,
        }
    );
}
