//! メインパーサー構造とユーティリティ

use log::debug;

use crate::ast::*;
use crate::error::{Expected, LexerError, ParserError, TooFewTokensContext};
use crate::lexer::{tokenize, Symbol, Token, TokenWithPosition};

use super::cursor::TokenCursor;
use super::{ParseError, ParseResult};

/// 診断用に保持する消費済みトークンの数
const CONSUMED_CONTEXT: usize = 3;

/// Javaサブセットのパーサー
///
/// 1回の呼び出しでトップレベル宣言を1つ解析する。最初のエラーで以降の解析は止まる。
pub struct Parser {
    pub(super) cursor: TokenCursor,
    failed: bool,
}

impl Parser {
    pub fn new(tokens: Vec<TokenWithPosition>) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
            failed: false,
        }
    }

    /// ソース文字列を字句解析してパーサーを作る
    pub fn from_source(source: &str) -> Result<Self, LexerError> {
        Ok(Self::new(tokenize(source)?))
    }

    /// 次のトップレベル宣言を解析（トークンが残っていなければNone）
    pub fn next_declaration(&mut self) -> ParseResult<Option<ClassDeclaration>> {
        if self.is_at_end() {
            return Ok(None);
        }
        let declaration = self.parse_class_declaration()?;
        debug!(
            "parsed class '{}' ({} fields, {} methods)",
            declaration.name(),
            declaration.fields().len(),
            declaration.methods().len()
        );
        Ok(Some(declaration))
    }

    // ==================== ユーティリティメソッド ====================

    /// 現在のトークンを取得
    pub(super) fn current_token(&self) -> Option<&Token> {
        self.cursor.has_next().then(|| self.cursor.current())
    }

    /// 特定のオフセット先のトークンを取得
    pub(super) fn peek(&self, offset: usize) -> Option<&Token> {
        self.cursor
            .has_next_at(offset + 1)
            .then(|| self.cursor.current_at(offset))
    }

    /// 次のトークンに進む
    pub(super) fn advance(&mut self) {
        if !self.is_at_end() {
            self.cursor.advance();
        }
    }

    /// 終端に到達したかチェック
    pub(super) fn is_at_end(&self) -> bool {
        !self.cursor.has_next()
    }

    /// 現在のトークンが完全に一致するかチェック（進まない）
    pub(super) fn check(&self, expected: impl Into<Token>) -> bool {
        let expected = expected.into();
        self.current_token() == Some(&expected)
    }

    /// 一致したら進む
    pub(super) fn match_token(&mut self, expected: impl Into<Token>) -> bool {
        if self.check(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// 特定のトークンを期待
    pub(super) fn expect(&mut self, expected: impl Into<Token>) -> ParseResult<()> {
        let expected = expected.into();
        match self.current_token() {
            None => Err(self.too_few_tokens(vec![Expected::Token(expected)])),
            Some(token) if *token == expected => {
                self.advance();
                Ok(())
            }
            Some(_) => Err(self.unexpected(Expected::Token(expected))),
        }
    }

    /// 識別子を期待（`role` はエラーメッセージ用の役割名）
    pub(super) fn expect_identifier(&mut self, role: &'static str) -> ParseResult<String> {
        match self.current_token() {
            Some(Token::Identifier(name)) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(self.unexpected(Expected::Identifier(role))),
        }
    }

    /// ジェネリクスの閉じ括弧 `>` を期待
    ///
    /// `>>` などの複合記号は先頭の `>` だけを消費し、残りを現在のトークンとして残す。
    pub(super) fn expect_closing_angle(&mut self) -> ParseResult<()> {
        let rest = match self.current_token() {
            Some(Token::Symbol(symbol)) => symbol.split_leading_gt(),
            _ => None,
        };
        match rest {
            Some(rest) => {
                self.cursor.split_current(Token::Symbol(rest));
                Ok(())
            }
            None => self.expect(Symbol::Gt),
        }
    }

    /// 予期しないトークンエラーを作成（トークンが尽きていればトークン不足エラー）
    pub(super) fn unexpected(&self, expected: Expected) -> ParseError {
        match self.cursor.get(0) {
            Some(current) => ParserError::UnexpectedToken {
                expected,
                found: current.token.clone(),
                position: current.position,
                span: current.span,
            },
            None => self.too_few_tokens(vec![expected]),
        }
    }

    /// 次に来ることができたトークンを添えたトークン不足エラー
    pub(super) fn too_few_tokens(&self, expected: Vec<Expected>) -> ParseError {
        ParserError::TooFewTokens {
            context: TooFewTokensContext::Expected(expected),
            span: self.cursor.end_span(),
        }
    }

    /// 直前に消費したトークンを添えたトークン不足エラー
    pub(super) fn too_few_tokens_after_consumed(&self) -> ParseError {
        ParserError::TooFewTokens {
            context: TooFewTokensContext::Consumed(self.cursor.consumed(CONSUMED_CONTEXT)),
            span: self.cursor.end_span(),
        }
    }

    /// 開始位置から最後に消費したトークンまでのスパン
    pub(super) fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.cursor.consumed_end().max(start))
    }
}

impl Iterator for Parser {
    type Item = ParseResult<ClassDeclaration>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        match self.next_declaration() {
            Ok(Some(declaration)) => Some(Ok(declaration)),
            Ok(None) => None,
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
