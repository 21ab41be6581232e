//! 宣言のパース

use log::debug;

use super::{ParseResult, Parser};
use crate::ast::*;
use crate::error::Expected;
use crate::lexer::{Keyword, Symbol, Token};

impl Parser {
    /// パッケージ・インポート・クラス本体までのトップレベル宣言を解析
    pub(super) fn parse_class_declaration(&mut self) -> ParseResult<ClassDeclaration> {
        let package = if self.match_token(Keyword::Package) {
            Some(PackageDeclaration::new(
                self.parse_qualified_name("package name")?,
            ))
        } else {
            None
        };

        let mut imports = Vec::new();
        while self.match_token(Keyword::Import) {
            imports.push(ImportDeclaration::new(
                self.parse_qualified_name("import name")?,
            ));
        }

        let modifiers = self.parse_access_modifiers();
        self.expect(Keyword::Class)?;
        let name = self.expect_identifier("class name")?;

        let superclass = if self.match_token(Keyword::Extends) {
            Some(self.expect_identifier("superclass name")?)
        } else {
            None
        };

        let mut interfaces = Vec::new();
        if self.match_token(Keyword::Implements) {
            interfaces.push(self.expect_identifier("interface name")?);
            while self.match_token(Symbol::Comma) {
                interfaces.push(self.expect_identifier("interface name")?);
            }
        }

        self.expect(Symbol::LeftBrace)?;

        let mut fields = Vec::new();
        let mut methods = Vec::new();
        loop {
            if self.is_at_end() {
                return Err(self.too_few_tokens(vec![
                    Expected::Token(Token::Symbol(Symbol::RightBrace)),
                    Expected::Type,
                ]));
            }
            if self.match_token(Symbol::RightBrace) {
                break;
            }
            self.parse_member(&mut fields, &mut methods)?;
        }

        Ok(ClassDeclaration::new(name)
            .with_package(package)
            .with_imports(imports)
            .with_modifiers(modifiers)
            .with_superclass(superclass)
            .with_interfaces(interfaces)
            .with_fields(fields)
            .with_methods(methods))
    }

    /// ドット区切りの名前と終端の `;`
    fn parse_qualified_name(&mut self, role: &'static str) -> ParseResult<Vec<String>> {
        let mut segments = vec![self.expect_identifier(role)?];
        while self.match_token(Symbol::Dot) {
            segments.push(self.expect_identifier(role)?);
        }
        self.expect(Symbol::Semicolon)?;
        Ok(segments)
    }

    /// 修飾子を記述順に集める（0個でもよい）
    pub(super) fn parse_access_modifiers(&mut self) -> Vec<AccessModifier> {
        let mut modifiers = Vec::new();
        while let Some(Token::Keyword(keyword)) = self.current_token() {
            match AccessModifier::from_keyword(*keyword) {
                Some(modifier) => {
                    modifiers.push(modifier);
                    self.advance();
                }
                None => break,
            }
        }
        modifiers
    }

    /// メンバーを1つ解析
    ///
    /// 名前の直後が `(` ならメソッド、それ以外はフィールド。
    fn parse_member(
        &mut self,
        fields: &mut Vec<FieldDeclaration>,
        methods: &mut Vec<MethodDeclaration>,
    ) -> ParseResult<()> {
        let modifiers = self.parse_access_modifiers();
        let member_type = self.parse_type()?;
        let name = self.expect_identifier("member name")?;

        if self.check(Symbol::LeftParen) {
            let method = self.parse_method_declaration(modifiers, member_type, name)?;
            debug!("method: {}", method.name());
            methods.push(method);
        } else {
            let field = self.parse_field_declaration(modifiers, member_type, name)?;
            debug!("field: {}", field.name());
            fields.push(field);
        }
        Ok(())
    }

    fn parse_field_declaration(
        &mut self,
        modifiers: Vec<AccessModifier>,
        field_type: TypeNode,
        name: String,
    ) -> ParseResult<FieldDeclaration> {
        if self.is_at_end() {
            return Err(self.too_few_tokens(vec![
                Expected::Token(Token::Symbol(Symbol::Assign)),
                Expected::Token(Token::Symbol(Symbol::Semicolon)),
            ]));
        }

        if self.match_token(Symbol::Semicolon) {
            return Ok(FieldDeclaration::new(modifiers, field_type, name, None));
        }

        self.expect(Symbol::Assign)?;
        let initializer = self.parse_expression()?;
        self.expect(Symbol::Semicolon)?;

        Ok(FieldDeclaration::new(
            modifiers,
            field_type,
            name,
            Some(initializer),
        ))
    }

    fn parse_method_declaration(
        &mut self,
        modifiers: Vec<AccessModifier>,
        return_type: TypeNode,
        name: String,
    ) -> ParseResult<MethodDeclaration> {
        self.expect(Symbol::LeftParen)?;

        let mut parameters = Vec::new();
        if !self.check(Symbol::RightParen) {
            parameters.push(self.parse_method_parameter()?);
            while self.match_token(Symbol::Comma) {
                parameters.push(self.parse_method_parameter()?);
            }
        }
        self.expect(Symbol::RightParen)?;

        if self.is_at_end() {
            return Err(self.too_few_tokens(vec![
                Expected::Token(Token::Symbol(Symbol::Semicolon)),
                Expected::Token(Token::Symbol(Symbol::LeftBrace)),
            ]));
        }

        // 本体なしの宣言
        if self.match_token(Symbol::Semicolon) {
            return Ok(MethodDeclaration::new(
                modifiers,
                return_type,
                name,
                parameters,
                None,
            ));
        }

        self.expect(Symbol::LeftBrace)?;
        let mut body = Vec::new();
        loop {
            if self.is_at_end() {
                return Err(self.too_few_tokens_after_consumed());
            }
            if self.match_token(Symbol::RightBrace) {
                break;
            }
            body.push(self.parse_statement()?);
        }

        Ok(MethodDeclaration::new(
            modifiers,
            return_type,
            name,
            parameters,
            Some(body),
        ))
    }

    fn parse_method_parameter(&mut self) -> ParseResult<MethodParameterDeclaration> {
        let is_final = self.match_token(Keyword::Final);
        let parameter_type = self.parse_type()?;
        let name = self.expect_identifier("parameter name")?;
        Ok(MethodParameterDeclaration::new(is_final, parameter_type, name))
    }
}
