//! パーサーモジュール
//!
//! このモジュールはトークン列を抽象構文木（AST）に解析する責任を持ちます。
//! 先読みが固定長の再帰下降構文解析で、トークン列を前方に一度だけ走査します。
//!
//! ## 対応する構文
//!
//! ```java
//! package com.example;
//! import java.util.List;
//!
//! public class Main extends Base implements Runnable {
//!     private List<String> names;
//!     int count = 1 + 2;
//!
//!     void run(final int n) {
//!         final int x = (n * 2) / 3;
//!         counter.count = x;
//!         System.out.println(x);
//!         return x;
//!     }
//! }
//! ```
//!
//! 四則演算の4つの演算子はすべて同じ優先順位を持ち、右結合で解析されます。
//! 例えば `a*b+c` は `a*(b+c)` として解析されます。

mod cursor;
mod decl_parser;
mod expr_parser;
mod parser_impl;
mod stmt_parser;
mod type_parser;

// 公開API
pub use cursor::TokenCursor;
pub use parser_impl::Parser;

use crate::ast::{ClassDeclaration, Span};
use crate::error::{Expected, JformatResult, ParserError, TooFewTokensContext};
use crate::lexer::{tokenize, Keyword, Token};

pub type ParseError = ParserError;
pub type ParseResult<T> = Result<T, ParseError>;

/// ソース文字列から最初のトップレベル宣言を解析する
pub fn parse(source: &str) -> JformatResult<ClassDeclaration> {
    let mut parser = Parser::new(tokenize(source)?);
    match parser.next_declaration()? {
        Some(declaration) => Ok(declaration),
        None => Err(ParserError::TooFewTokens {
            context: TooFewTokensContext::Expected(
                [Keyword::Package, Keyword::Import, Keyword::Class]
                    .into_iter()
                    .map(|k| Expected::Token(Token::Keyword(k)))
                    .collect(),
            ),
            span: Span::new(source.len(), source.len()),
        }
        .into()),
    }
}
