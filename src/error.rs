//! 統一的なエラーハンドリングモジュール
//!
//! このモジュールは、字句解析・構文解析・ファイル走査で使用される統一的なエラー型と
//! エラー報告システムを提供します。どのエラーも致命的で、発生した時点で
//! そのコンパイル単位の解析は中断されます。

use crate::ast::Span;
use crate::lexer::{Position, Token};
use codespan_reporting::diagnostic::{Diagnostic, Label};
use std::fmt;
use thiserror::Error;

/// jformatの統一エラー型
#[derive(Error, Debug, Clone)]
pub enum JformatError {
    /// レキサーエラー
    #[error("lexical error: {0}")]
    Lexer(#[from] LexerError),

    /// パーサーエラー
    #[error("syntax error: {0}")]
    Parser(#[from] ParserError),

    /// ファイルI/Oエラー
    #[error("I/O error: {0}")]
    Io(String),
}

/// レキサーエラーの詳細
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexerError {
    #[error("unknown token '{ch}' at {position}")]
    UnknownToken {
        ch: char,
        position: Position,
        span: Span,
    },

    #[error("'{literal}' is an invalid literal (at {position})")]
    InvalidLiteral {
        literal: String,
        position: Position,
        span: Span,
    },

    #[error("unterminated block comment starting at {position}")]
    UnterminatedComment { position: Position, span: Span },
}

impl LexerError {
    pub fn span(&self) -> Span {
        match self {
            LexerError::UnknownToken { span, .. }
            | LexerError::InvalidLiteral { span, .. }
            | LexerError::UnterminatedComment { span, .. } => *span,
        }
    }
}

/// 文法が要求していたもの
#[derive(Debug, Clone, PartialEq)]
pub enum Expected {
    /// 完全に一致すべきトークン
    Token(Token),
    /// 指定された役割の識別子（例: "package name"）
    Identifier(&'static str),
    Type,
    Expression,
    Statement,
}

impl From<Token> for Expected {
    fn from(token: Token) -> Self {
        Expected::Token(token)
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Token(token) => write!(f, "'{}'", token),
            Expected::Identifier(role) => write!(f, "<{}>", role),
            Expected::Type => write!(f, "a type"),
            Expected::Expression => write!(f, "an expression"),
            Expected::Statement => write!(f, "a statement"),
        }
    }
}

/// トークン不足エラーに添える診断情報
#[derive(Debug, Clone, PartialEq)]
pub enum TooFewTokensContext {
    /// 次に来ることができたトークン
    Expected(Vec<Expected>),
    /// 直前に消費したトークン
    Consumed(Vec<Token>),
}

impl fmt::Display for TooFewTokensContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TooFewTokensContext::Expected(expected) => {
                let list = expected
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                if expected.len() == 1 {
                    write!(f, "expected token {}", list)
                } else {
                    write!(f, "expected any of {}", list)
                }
            }
            TooFewTokensContext::Consumed(tokens) => {
                let list = tokens
                    .iter()
                    .map(|t| format!("'{}'", t))
                    .collect::<Vec<_>>()
                    .join(" ");
                write!(f, "last tokens were {}", list)
            }
        }
    }
}

/// パーサーエラーの詳細
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParserError {
    #[error("expected {expected} but '{found}' was found at {position}")]
    UnexpectedToken {
        expected: Expected,
        found: Token,
        position: Position,
        span: Span,
    },

    #[error("stream of tokens finished too early: {context}")]
    TooFewTokens {
        context: TooFewTokensContext,
        span: Span,
    },

    #[error("statement at {position} is neither a field assignment nor a method invocation")]
    AmbiguousStatement { position: Position, span: Span },
}

impl ParserError {
    pub fn span(&self) -> Span {
        match self {
            ParserError::UnexpectedToken { span, .. }
            | ParserError::TooFewTokens { span, .. }
            | ParserError::AmbiguousStatement { span, .. } => *span,
        }
    }
}

/// エラー情報とソースコードの位置情報を含むエラー
#[derive(Debug, Clone)]
pub struct DiagnosticError {
    pub error: JformatError,
    pub file_id: usize,
}

impl DiagnosticError {
    pub fn new(error: JformatError, file_id: usize) -> Self {
        Self { error, file_id }
    }

    /// codespan-reportingのDiagnosticに変換
    pub fn to_diagnostic(&self) -> Diagnostic<usize> {
        let (message, labels) = match &self.error {
            JformatError::Lexer(e) => {
                let note = match e {
                    LexerError::UnknownToken { .. } => "this character starts no token",
                    LexerError::InvalidLiteral { .. } => "literal is not closed",
                    LexerError::UnterminatedComment { .. } => "comment is not closed",
                };
                (e.to_string(), vec![self.label(e.span()).with_message(note)])
            }
            JformatError::Parser(e) => {
                let label = match e {
                    ParserError::UnexpectedToken { expected, .. } => {
                        self.label(e.span()).with_message(format!("expected {}", expected))
                    }
                    ParserError::TooFewTokens { .. } => {
                        self.label(e.span()).with_message("input ends here")
                    }
                    ParserError::AmbiguousStatement { .. } => self.label(e.span()),
                };
                (e.to_string(), vec![label])
            }
            JformatError::Io(message) => (format!("I/O error: {}", message), vec![]),
        };

        Diagnostic::error().with_message(message).with_labels(labels)
    }

    fn label(&self, span: Span) -> Label<usize> {
        Label::primary(self.file_id, span.start..span.end)
    }
}

/// 複数のエラーを蓄積するためのコレクター
#[derive(Debug, Default)]
pub struct ErrorCollector {
    errors: Vec<DiagnosticError>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// エラーを追加
    pub fn add_error(&mut self, error: JformatError, file_id: usize) {
        self.errors.push(DiagnosticError::new(error, file_id));
    }

    /// エラーがあるかどうか
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// エラーの数
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// すべてのエラーを取得
    pub fn errors(&self) -> &[DiagnosticError] {
        &self.errors
    }
}

/// Result型のエイリアス
pub type JformatResult<T> = Result<T, JformatError>;

impl From<std::io::Error> for JformatError {
    fn from(e: std::io::Error) -> Self {
        JformatError::Io(e.to_string())
    }
}
