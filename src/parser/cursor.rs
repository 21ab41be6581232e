//! トークンカーソル
//!
//! 文字カーソルと同じ位置の規約をトークン列に対して提供する。前方にのみ進み、巻き戻しはしない。

use crate::ast::Span;
use crate::lexer::{Token, TokenWithPosition};

/// 固定先読みのトークンカーソル
#[derive(Debug, Clone)]
pub struct TokenCursor {
    tokens: Vec<TokenWithPosition>,
    index: usize,
}

impl TokenCursor {
    pub fn new(tokens: Vec<TokenWithPosition>) -> Self {
        Self { tokens, index: 0 }
    }

    /// 残りトークン数が `step` 以上あるかチェック
    pub fn has_next_at(&self, step: usize) -> bool {
        assert!(step >= 1, "lookahead step must be at least 1");
        self.index + step <= self.tokens.len()
    }

    pub fn has_next(&self) -> bool {
        self.has_next_at(1)
    }

    /// `step`個先のトークン。呼び出し側が `has_next_at(step + 1)` を保証すること。
    pub fn current_at(&self, step: usize) -> &Token {
        &self.tokens[self.index + step].token
    }

    pub fn current(&self) -> &Token {
        self.current_at(0)
    }

    /// `step`個先のトークンを位置情報付きで取得（範囲外はNone）
    pub fn get(&self, step: usize) -> Option<&TokenWithPosition> {
        self.tokens.get(self.index + step)
    }

    pub fn advance(&mut self) {
        self.index += 1;
    }

    /// 現在のトークンを置き換える
    ///
    /// 複合記号の先頭1文字を消費した後の残りを表すため、位置は1文字分進める。
    pub fn split_current(&mut self, rest: Token) {
        let current = &mut self.tokens[self.index];
        current.token = rest;
        current.position.column += 1;
        current.position.offset += 1;
        current.span.start += 1;
    }

    /// 直前に消費した最大 `count` 個のトークン
    pub fn consumed(&self, count: usize) -> Vec<Token> {
        let end = self.index.min(self.tokens.len());
        let start = end.saturating_sub(count);
        self.tokens[start..end].iter().map(|t| t.token.clone()).collect()
    }

    /// 最後に消費したトークンの終端（何も消費していなければ0）
    pub fn consumed_end(&self) -> usize {
        let end = self.index.min(self.tokens.len());
        if end == 0 {
            0
        } else {
            self.tokens[end - 1].span.end
        }
    }

    /// 入力全体の終端位置
    pub fn end_span(&self) -> Span {
        let end = self.tokens.last().map(|t| t.span.end).unwrap_or(0);
        Span::new(end, end)
    }
}
