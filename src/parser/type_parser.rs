//! 型のパース

use super::{ParseResult, Parser};
use crate::ast::*;
use crate::error::Expected;
use crate::lexer::{Symbol, Token};

impl Parser {
    /// 型を解析（`[]` の後置はいくつでも可）
    pub fn parse_type(&mut self) -> ParseResult<TypeNode> {
        let mut ty = match self.current_token() {
            None => return Err(self.too_few_tokens(vec![Expected::Type])),
            Some(Token::Identifier(_)) => self.parse_reference_type()?,
            Some(Token::Keyword(keyword)) => match PrimitiveType::from_keyword(*keyword) {
                Some(primitive) => {
                    self.advance();
                    TypeNode::Primitive(primitive)
                }
                None => return Err(self.unexpected(Expected::Type)),
            },
            Some(_) => return Err(self.unexpected(Expected::Type)),
        };

        while self.match_token(Symbol::LeftBracket) {
            self.expect(Symbol::RightBracket)?;
            ty = TypeNode::array(ty);
        }

        Ok(ty)
    }

    /// 参照型とジェネリクス型の解析
    fn parse_reference_type(&mut self) -> ParseResult<TypeNode> {
        let name = self.expect_identifier("type name")?;

        if !self.match_token(Symbol::Lt) {
            return Ok(TypeNode::reference(name));
        }

        let mut arguments = vec![self.parse_type()?];
        while self.match_token(Symbol::Comma) {
            arguments.push(self.parse_type()?);
        }
        self.expect_closing_angle()?;

        Ok(TypeNode::generic(name, arguments))
    }
}
