//! エラーケースのパーサーテスト

use super::*;
use jformat::error::{Expected, TooFewTokensContext};
use jformat::lexer::{Keyword, Symbol, Token};
use test_case::test_case;

#[test_case("pack" ; "misspelled package")]
#[test_case("package;" ; "package without name")]
#[test_case("package 1;" ; "package with number")]
#[test_case("impo" ; "misspelled import")]
#[test_case("import;" ; "import without name")]
#[test_case("import 1;" ; "import with number")]
#[test_case("clazz" ; "misspelled class")]
#[test_case("class A}{" ; "braces swapped")]
#[test_case("class 1{}" ; "numeric class name")]
#[test_case("class A extends{}" ; "extends without name")]
#[test_case("class A{ int 1; }" ; "numeric field name")]
#[test_case("class A{ int x = ; }" ; "missing initializer")]
#[test_case("class A{ void f() return; }" ; "body without braces")]
fn test_unexpected_token(source: &str) {
    assert!(matches!(
        assert_parse_error(source),
        ParserError::UnexpectedToken { .. }
    ));
}

#[test_case("" ; "empty input")]
#[test_case("   // nothing but a comment" ; "only comments")]
#[test_case("package a" ; "package without semicolon")]
#[test_case("class" ; "class without name")]
#[test_case("class A" ; "class without body")]
#[test_case("class A{" ; "unclosed class")]
#[test_case("class A{ int x" ; "unfinished field")]
#[test_case("class A{ void f(" ; "unfinished parameters")]
#[test_case("class A{ void f()" ; "missing method body")]
#[test_case("class A{ void f(){ x.y =" ; "unfinished assignment")]
fn test_too_few_tokens(source: &str) {
    assert!(matches!(
        assert_parse_error(source),
        ParserError::TooFewTokens { .. }
    ));
}

#[test]
fn test_unexpected_token_details() {
    match assert_parse_error("class A}{") {
        ParserError::UnexpectedToken {
            expected,
            found,
            position,
            ..
        } => {
            assert_eq!(expected, Expected::Token(Token::Symbol(Symbol::LeftBrace)));
            assert_eq!(found, Token::Symbol(Symbol::RightBrace));
            assert_eq!((position.line, position.column), (1, 8));
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_empty_input_lists_possible_starts() {
    match assert_parse_error("") {
        ParserError::TooFewTokens {
            context: TooFewTokensContext::Expected(expected),
            ..
        } => {
            assert_eq!(
                expected,
                vec![
                    Expected::Token(Token::Keyword(Keyword::Package)),
                    Expected::Token(Token::Keyword(Keyword::Import)),
                    Expected::Token(Token::Keyword(Keyword::Class)),
                ]
            );
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_unfinished_field_lists_alternatives() {
    match assert_parse_error("class A{ int x") {
        ParserError::TooFewTokens {
            context: TooFewTokensContext::Expected(expected),
            ..
        } => assert_eq!(expected.len(), 2),
        other => panic!("unexpected error {:?}", other),
    }
}

#[test_case("class A{ void f(){ x; } }" ; "bare variable")]
#[test_case("class A{ void f(){ run(); } }" ; "call without receiver")]
fn test_ambiguous_statement(source: &str) {
    assert!(matches!(
        assert_parse_error(source),
        ParserError::AmbiguousStatement { .. }
    ));
}

#[test_case("class A{ void f(){ a.b; } }" ; "field access without assignment")]
#[test_case("class A{ void f(){ a.b() = 1; } }" ; "assignment to call")]
#[test_case("class A{ void f(){ if; } }" ; "unsupported keyword")]
#[test_case("class A{ void f(){ 1; } }" ; "bare literal")]
fn test_invalid_statement(source: &str) {
    assert!(matches!(
        assert_parse_error(source),
        ParserError::UnexpectedToken { .. }
    ));
}

#[test]
fn test_lexer_errors_are_not_syntax_errors() {
    assert!(matches!(
        parse_source("class A{ char c = 'x; }"),
        Err(jformat::error::JformatError::Lexer(_))
    ));
}
