//! 式のパース
//!
//! 加算・減算・乗算・除算は同じ優先順位で右結合になる。`a*b+c` は `a*(b+c)` と読む。
//! オペランドと演算子を先に並べてから右端から畳み込むので、演算子の数だけ再帰はしない。

use super::{ParseResult, Parser};
use crate::ast::*;
use crate::error::Expected;
use crate::lexer::{Symbol, Token};

/// 左右のオペランドから二項演算ノードを組み立てる関数
type Combine = fn(ExpressionNode, ExpressionNode) -> ExpressionNode;

impl Parser {
    /// 式を解析
    pub fn parse_expression(&mut self) -> ParseResult<ExpressionNode> {
        if self.is_at_end() {
            return Err(self.too_few_tokens(vec![Expected::Expression]));
        }

        let mut pending: Vec<(ExpressionNode, Combine)> = Vec::new();
        let mut expr = self.parse_simple()?;
        while let Some(combine) = self.match_arithmetic_operator() {
            let rhs = self.parse_simple()?;
            pending.push((std::mem::replace(&mut expr, rhs), combine));
        }

        while let Some((lhs, combine)) = pending.pop() {
            expr = combine(lhs, expr);
        }
        Ok(expr)
    }

    /// 四則演算子なら消費して対応するノードの組み立て関数を返す
    fn match_arithmetic_operator(&mut self) -> Option<Combine> {
        let combine: Combine = match self.current_token() {
            Some(Token::Symbol(Symbol::Plus)) => ExpressionNode::plus,
            Some(Token::Symbol(Symbol::Minus)) => ExpressionNode::minus,
            Some(Token::Symbol(Symbol::Star)) => ExpressionNode::multiply,
            Some(Token::Symbol(Symbol::Slash)) => ExpressionNode::divide,
            _ => return None,
        };
        self.advance();
        Some(combine)
    }

    /// 整数リテラル、識別子の連鎖、括弧式
    fn parse_simple(&mut self) -> ParseResult<ExpressionNode> {
        match self.current_token() {
            None => Err(self.too_few_tokens(vec![Expected::Expression])),
            Some(Token::IntegerLiteral { value, is_long }) => {
                let expr = ExpressionNode::constant(value.clone(), *is_long);
                self.advance();
                Ok(expr)
            }
            Some(Token::Identifier(_)) => self.parse_chain(),
            Some(Token::Symbol(Symbol::LeftParen)) => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect(Symbol::RightParen)?;
                Ok(ExpressionNode::bracket(inner))
            }
            Some(_) => Err(self.unexpected(Expected::Expression)),
        }
    }

    /// 変数参照から始まり `.名前` で伸びる連鎖
    ///
    /// 名前の直後が `(` ならメソッド呼び出し、それ以外はフィールドアクセス。
    pub(super) fn parse_chain(&mut self) -> ParseResult<ExpressionNode> {
        let mut expr = ExpressionNode::variable(self.expect_identifier("variable name")?);

        while self.check(Symbol::Dot) && matches!(self.peek(1), Some(Token::Identifier(_))) {
            self.advance();
            let member = self.expect_identifier("member name")?;
            expr = if self.match_token(Symbol::LeftParen) {
                let arguments = self.parse_arguments()?;
                ExpressionNode::invocation(expr, member, arguments)
            } else {
                ExpressionNode::field_access(expr, member)
            };
        }

        Ok(expr)
    }

    /// `(` の後の引数リストと閉じ括弧
    fn parse_arguments(&mut self) -> ParseResult<Vec<ExpressionNode>> {
        let mut arguments = Vec::new();
        if !self.check(Symbol::RightParen) {
            arguments.push(self.parse_expression()?);
            while self.match_token(Symbol::Comma) {
                arguments.push(self.parse_expression()?);
            }
        }
        self.expect(Symbol::RightParen)?;
        Ok(arguments)
    }
}
