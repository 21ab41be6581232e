//! 文のパース

use log::debug;

use super::{ParseResult, Parser};
use crate::ast::*;
use crate::error::{Expected, ParserError};
use crate::lexer::{Keyword, Symbol, Token};

impl Parser {
    /// 文を解析
    pub fn parse_statement(&mut self) -> ParseResult<StatementNode> {
        let statement = match self.current_token() {
            None => return Err(self.too_few_tokens(vec![Expected::Statement])),
            Some(Token::Keyword(Keyword::Final)) => {
                self.advance();
                self.parse_variable_declaration(true)?
            }
            Some(Token::Keyword(Keyword::Return)) => {
                self.advance();
                let value = self.parse_expression()?;
                self.expect(Symbol::Semicolon)?;
                StatementNode::Return(value)
            }
            Some(Token::Symbol(Symbol::Semicolon)) => {
                self.advance();
                StatementNode::Empty
            }
            Some(Token::Keyword(keyword)) if PrimitiveType::from_keyword(*keyword).is_some() => {
                self.parse_variable_declaration(false)?
            }
            Some(Token::Identifier(_)) if self.starts_local_declaration() => {
                self.parse_variable_declaration(false)?
            }
            Some(Token::Identifier(_)) => self.parse_chain_statement()?,
            Some(_) => return Err(self.unexpected(Expected::Statement)),
        };

        debug!("statement: {}", statement);
        Ok(statement)
    }

    /// `型 名前` の並びで始まるかチェック
    fn starts_local_declaration(&self) -> bool {
        matches!(
            self.peek(1),
            Some(Token::Identifier(_))
                | Some(Token::Symbol(Symbol::Lt))
                | Some(Token::Symbol(Symbol::LeftBracket))
        )
    }

    /// `型 名前 [= 式] ;`（`final` は呼び出し側で消費済み）
    fn parse_variable_declaration(&mut self, is_final: bool) -> ParseResult<StatementNode> {
        let variable_type = self.parse_type()?;
        let name = self.expect_identifier("variable name")?;

        if self.is_at_end() {
            return Err(self.too_few_tokens(vec![
                Expected::Token(Token::Symbol(Symbol::Assign)),
                Expected::Token(Token::Symbol(Symbol::Semicolon)),
            ]));
        }

        let initializer = if self.match_token(Symbol::Assign) {
            Some(self.parse_expression()?)
        } else {
            None
        };
        self.expect(Symbol::Semicolon)?;

        Ok(StatementNode::VariableDeclaration(VariableDeclaration::new(
            is_final,
            variable_type,
            name,
            initializer,
        )))
    }

    /// フィールド代入またはメソッド呼び出し文
    fn parse_chain_statement(&mut self) -> ParseResult<StatementNode> {
        let (position, start) = match self.cursor.get(0) {
            Some(first) => (first.position, first.span.start),
            None => return Err(self.too_few_tokens(vec![Expected::Statement])),
        };

        match self.parse_chain()? {
            ExpressionNode::FieldAccess(target) => {
                self.expect(Symbol::Assign)?;
                let value = self.parse_expression()?;
                self.expect(Symbol::Semicolon)?;
                Ok(StatementNode::FieldAssignment { target, value })
            }
            ExpressionNode::MethodInvocation(call) => {
                self.expect(Symbol::Semicolon)?;
                Ok(StatementNode::MethodInvocation(call))
            }
            _ => Err(ParserError::AmbiguousStatement {
                position,
                span: self.span_from(start),
            }),
        }
    }
}
