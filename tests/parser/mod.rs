//! パーサーテストの共通モジュール
//!
//! パーサーテストで使用する共通のヘルパー関数と型を定義する。

use jformat::ast::*;
use jformat::error::{JformatError, ParserError};
use jformat::parser::parse;

/// ソースコードを解析してASTを取得するヘルパー関数
pub fn parse_source(source: &str) -> Result<ClassDeclaration, JformatError> {
    parse(source)
}

/// 解析に成功することを確認するヘルパー関数
pub fn assert_parse_success(source: &str) -> ClassDeclaration {
    parse_source(source).expect("Parsing should succeed")
}

/// 構文エラーになることを確認するヘルパー関数
pub fn assert_parse_error(source: &str) -> ParserError {
    match parse_source(source) {
        Err(JformatError::Parser(e)) => e,
        other => panic!("expected a syntax error for {:?}, got {:?}", source, other),
    }
}

/// メソッド本体の文を解析するヘルパー関数
pub fn parse_body(statements: &str) -> Vec<StatementNode> {
    let class = assert_parse_success(&format!("class A{{void f(){{{}}}}}", statements));
    class.methods()[0]
        .body()
        .expect("method should have a body")
        .to_vec()
}

/// フィールドの初期化式を解析するヘルパー関数
pub fn parse_initializer(expression: &str) -> ExpressionNode {
    let class = assert_parse_success(&format!("class A{{int x={};}}", expression));
    class.fields()[0]
        .initializer()
        .expect("field should have an initializer")
        .clone()
}

pub fn int(value: u32) -> ExpressionNode {
    ExpressionNode::constant(value, false)
}

pub fn var(name: &str) -> ExpressionNode {
    ExpressionNode::variable(name)
}

// サブモジュールの宣言
#[cfg(test)]
mod declaration_test;
#[cfg(test)]
mod error_test;
#[cfg(test)]
mod expression_test;
#[cfg(test)]
mod statement_test;
#[cfg(test)]
mod type_test;
