//! 宣言のパーサーテスト

use super::*;
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test]
fn test_package_and_imports() {
    let class = assert_parse_success("package a; import b.c.D; import e; class A{}");

    assert_eq!(class.package(), Some(&PackageDeclaration::new(["a"])));
    assert_eq!(
        class.imports(),
        [
            ImportDeclaration::new(["b", "c", "D"]),
            ImportDeclaration::new(["e"]),
        ]
    );
}

#[test]
fn test_imports_without_package() {
    let class = assert_parse_success("import java.util.List; class A{}");
    assert!(class.is_default_package());
    assert_eq!(class.imports().len(), 1);
}

#[test]
fn test_every_class_modifier() {
    let class = assert_parse_success(
        "public private protected final abstract volatile synchronized strictfp transient static native class A{}",
    );
    assert_eq!(class.modifiers(), AccessModifier::ALL);
}

#[test]
fn test_extends_and_implements() {
    let class = assert_parse_success("class A extends B{}");
    assert_eq!(class.superclass(), Some("B"));
    assert!(class.interfaces().is_empty());

    let class = assert_parse_success("class A implements I{}");
    assert_eq!(class.superclass(), None);
    assert_eq!(class.interfaces(), ["I".to_string()]);

    let class = assert_parse_success("class A extends B implements I, J, K{}");
    assert_eq!(class.interfaces(), ["I", "J", "K"]);
}

#[test_case("int x;", false ; "field without initializer")]
#[test_case("int x = 1;", false ; "field with initializer")]
#[test_case("List<String> names;", false ; "generic field")]
#[test_case("void f();", true ; "method without body")]
#[test_case("void f(){}", true ; "method with empty body")]
#[test_case("int f(int a, final B b){ return a; }", true ; "method with parameters")]
fn test_member_dispatch(member: &str, is_method: bool) {
    let class = assert_parse_success(&format!("class A{{{}}}", member));
    assert_eq!(class.methods().len(), usize::from(is_method));
    assert_eq!(class.fields().len(), usize::from(!is_method));
}

#[test]
fn test_members_keep_order() {
    let class = assert_parse_success("class A{ int a; void f(); int b; void g(); int c; }");
    let fields: Vec<_> = class.fields().iter().map(|f| f.name()).collect();
    let methods: Vec<_> = class.methods().iter().map(|m| m.name()).collect();
    assert_eq!(fields, ["a", "b", "c"]);
    assert_eq!(methods, ["f", "g"]);
}

#[test]
fn test_method_signature() {
    let class = assert_parse_success("class A{ public static List<String>[] find(final Map<K, V> m, int n); }");
    let method = &class.methods()[0];

    assert_eq!(method.modifiers(), [AccessModifier::Public, AccessModifier::Static]);
    assert_eq!(
        method.return_type(),
        &TypeNode::array(TypeNode::generic("List", vec![TypeNode::reference("String")]))
    );
    assert_eq!(
        method.parameters(),
        [
            MethodParameterDeclaration::new(
                true,
                TypeNode::generic("Map", vec![TypeNode::reference("K"), TypeNode::reference("V")]),
                "m"
            ),
            MethodParameterDeclaration::new(false, PrimitiveType::Int.into(), "n"),
        ]
    );
    assert_eq!(method.body(), None);
}

#[test]
fn test_method_with_statements() {
    let statements = parse_body("final int x = 1; return x;");
    assert_eq!(
        statements,
        vec![
            StatementNode::VariableDeclaration(VariableDeclaration::new(
                true,
                PrimitiveType::Int.into(),
                "x",
                Some(int(1))
            )),
            StatementNode::Return(var("x")),
        ]
    );
}
