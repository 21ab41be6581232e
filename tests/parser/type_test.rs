//! 型のパーサーテスト

use super::*;
use pretty_assertions::assert_eq;
use test_case::test_case;

fn field_type(type_source: &str) -> TypeNode {
    let class = assert_parse_success(&format!("class A{{{} x;}}", type_source));
    class.fields()[0].field_type().clone()
}

#[test]
fn test_primitive_types() {
    for primitive in PrimitiveType::ALL {
        assert_eq!(field_type(&primitive.to_string()), TypeNode::Primitive(primitive));
    }
}

#[test]
fn test_nested_generics() {
    assert_eq!(
        field_type("Map<String, List<Integer>>"),
        TypeNode::generic(
            "Map",
            vec![
                TypeNode::reference("String"),
                TypeNode::generic("List", vec![TypeNode::reference("Integer")]),
            ]
        )
    );
}

#[test_case("int[]" ; "primitive array")]
#[test_case("String[][]" ; "reference matrix")]
#[test_case("List<A<B<C>>>" ; "triple nesting")]
#[test_case("Map<K,V[]>[]" ; "arrays inside generics")]
fn test_type_renders_as_written(source: &str) {
    assert_eq!(field_type(source).to_string(), source);
}

#[test]
fn test_boolean_is_not_a_type() {
    assert!(matches!(
        assert_parse_error("class A{boolean b;}"),
        ParserError::UnexpectedToken { .. }
    ));
}
