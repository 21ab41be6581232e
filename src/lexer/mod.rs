//! Lexical analysis module for the supported Java subset.
//!
//! This module walks the raw source text with a [`CharCursor`] and turns it into a
//! lazy stream of tokens. Whitespace and comments are skipped, operators are resolved
//! by longest match, and integer literals are accumulated into arbitrary-precision
//! values. Character and string literal contents are kept verbatim.

mod cursor;
mod literal_parser;
mod token;

pub use cursor::CharCursor;
pub use token::{Keyword, Symbol, Token};

use crate::ast::Span;
use crate::error::LexerError;
use literal_parser::{lex_integer_literal, lex_quoted};
use serde::Serialize;
use std::fmt;

/// Position tracking for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    /// Byte offset into the source text
    pub offset: usize,
}

impl Position {
    pub fn new() -> Self {
        Position {
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    pub fn advance(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.offset += ch.len_utf8();
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A token with its position information
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenWithPosition {
    pub token: Token,
    pub position: Position,
    pub span: Span,
}

/// Operator extension tables: characters following the leading one, longest first
type Extensions = &'static [(&'static str, Symbol)];

const LT_EXTENSIONS: Extensions = &[
    ("<=", Symbol::ShlAssign),
    ("=", Symbol::LtEq),
    ("<", Symbol::Shl),
];
const GT_EXTENSIONS: Extensions = &[
    (">>=", Symbol::UShrAssign),
    (">=", Symbol::ShrAssign),
    (">>", Symbol::UShr),
    ("=", Symbol::GtEq),
    (">", Symbol::Shr),
];
const PLUS_EXTENSIONS: Extensions = &[("=", Symbol::PlusAssign), ("+", Symbol::PlusPlus)];
const MINUS_EXTENSIONS: Extensions = &[
    ("=", Symbol::MinusAssign),
    ("-", Symbol::MinusMinus),
    (">", Symbol::Arrow),
];
const STAR_EXTENSIONS: Extensions = &[("=", Symbol::StarAssign)];
const SLASH_EXTENSIONS: Extensions = &[("=", Symbol::SlashAssign)];
const PERCENT_EXTENSIONS: Extensions = &[("=", Symbol::PercentAssign)];
const CARET_EXTENSIONS: Extensions = &[("=", Symbol::CaretAssign)];
const PIPE_EXTENSIONS: Extensions = &[("=", Symbol::PipeAssign), ("|", Symbol::OrOr)];
const AMPERSAND_EXTENSIONS: Extensions = &[("=", Symbol::AmpersandAssign), ("&", Symbol::AndAnd)];
const ASSIGN_EXTENSIONS: Extensions = &[("=", Symbol::EqEq)];

/// Lexer for the supported Java subset
///
/// Yields tokens one at a time. The first error ends the stream.
pub struct Lexer {
    cursor: CharCursor,
    finished: bool,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            cursor: CharCursor::new(input),
            finished: false,
        }
    }

    /// Collect every token, stopping at the first lexical error
    pub fn collect_tokens(self) -> Result<Vec<TokenWithPosition>, LexerError> {
        self.collect()
    }

    fn next_token(&mut self) -> Result<Option<TokenWithPosition>, LexerError> {
        self.skip_blanks_and_comments()?;

        if !self.cursor.has_next() {
            return Ok(None);
        }

        let position = self.cursor.position();
        let token = self.lex_token()?;
        let span = Span::new(position.offset, self.cursor.position().offset);
        log::trace!("{} {:?}", position, token);

        Ok(Some(TokenWithPosition {
            token,
            position,
            span,
        }))
    }

    /// Skip any interleaving of whitespace, line comments and block comments
    fn skip_blanks_and_comments(&mut self) -> Result<(), LexerError> {
        loop {
            let mut skipped = false;

            while self.cursor.current_is(char::is_whitespace) {
                self.cursor.advance();
                skipped = true;
            }

            if self.at_comment_start('/') {
                self.skip_line_comment();
                skipped = true;
            }

            if self.at_comment_start('*') {
                self.skip_block_comment()?;
                skipped = true;
            }

            if !skipped {
                return Ok(());
            }
        }
    }

    fn at_comment_start(&self, second: char) -> bool {
        self.cursor.has_next_at(2) && self.cursor.current() == '/' && self.cursor.next_char() == second
    }

    /// Consume a `//` comment up to and including the terminating newline
    fn skip_line_comment(&mut self) {
        self.cursor.advance_by(2);
        while self.cursor.has_next() {
            let ch = self.cursor.current();
            self.cursor.advance();
            if ch == '\n' {
                break;
            }
        }
    }

    /// Consume a `/* */` comment up to and including the closing `*/`
    fn skip_block_comment(&mut self) -> Result<(), LexerError> {
        let position = self.cursor.position();
        self.cursor.advance_by(2);
        loop {
            if !self.cursor.has_next_at(2) {
                return Err(LexerError::UnterminatedComment {
                    span: Span::new(position.offset, position.offset + 2),
                    position,
                });
            }
            if self.cursor.current() == '*' && self.cursor.next_char() == '/' {
                self.cursor.advance_by(2);
                return Ok(());
            }
            self.cursor.advance();
        }
    }

    fn lex_token(&mut self) -> Result<Token, LexerError> {
        let ch = self.cursor.current();
        let symbol = match ch {
            '{' => Symbol::LeftBrace,
            '}' => Symbol::RightBrace,
            '[' => Symbol::LeftBracket,
            ']' => Symbol::RightBracket,
            '(' => Symbol::LeftParen,
            ')' => Symbol::RightParen,
            '.' => Symbol::Dot,
            ',' => Symbol::Comma,
            ':' => Symbol::Colon,
            ';' => Symbol::Semicolon,
            '~' => Symbol::Tilde,
            '!' => Symbol::Not,
            '?' => Symbol::Question,
            '@' => Symbol::At,
            '<' | '>' | '+' | '-' | '*' | '/' | '%' | '^' | '|' | '&' | '=' => {
                return Ok(Token::Symbol(self.lex_operator(ch)));
            }
            '\'' => return self.lex_quoted_literal('\'').map(Token::CharLiteral),
            '"' => return self.lex_quoted_literal('"').map(Token::StringLiteral),
            c if c.is_ascii_digit() => return Ok(lex_integer_literal(&mut self.cursor)),
            c if is_identifier_char(c) => return Ok(self.lex_word()),
            c => {
                let position = self.cursor.position();
                return Err(LexerError::UnknownToken {
                    ch: c,
                    span: Span::new(position.offset, position.offset + c.len_utf8()),
                    position,
                });
            }
        };

        self.cursor.advance();
        Ok(Token::Symbol(symbol))
    }

    /// Resolve a multi-character operator by longest match on its leading character
    fn lex_operator(&mut self, lead: char) -> Symbol {
        let (fallback, extensions) = match lead {
            '<' => (Symbol::Lt, LT_EXTENSIONS),
            '>' => (Symbol::Gt, GT_EXTENSIONS),
            '+' => (Symbol::Plus, PLUS_EXTENSIONS),
            '-' => (Symbol::Minus, MINUS_EXTENSIONS),
            '*' => (Symbol::Star, STAR_EXTENSIONS),
            '/' => (Symbol::Slash, SLASH_EXTENSIONS),
            '%' => (Symbol::Percent, PERCENT_EXTENSIONS),
            '^' => (Symbol::Caret, CARET_EXTENSIONS),
            '|' => (Symbol::Pipe, PIPE_EXTENSIONS),
            '&' => (Symbol::Ampersand, AMPERSAND_EXTENSIONS),
            '=' => (Symbol::Assign, ASSIGN_EXTENSIONS),
            _ => unreachable!("'{}' does not start an operator", lead),
        };

        for (suffix, symbol) in extensions {
            if self.followed_by(suffix) {
                self.cursor.advance_by(1 + suffix.chars().count());
                return *symbol;
            }
        }

        self.cursor.advance();
        fallback
    }

    /// Whether the characters right after the current one spell `suffix`
    fn followed_by(&self, suffix: &str) -> bool {
        let len = suffix.chars().count();
        self.cursor.has_next_at(len + 1)
            && suffix
                .chars()
                .enumerate()
                .all(|(i, c)| self.cursor.current_at(i + 1) == c)
    }

    fn lex_quoted_literal(&mut self, quote: char) -> Result<String, LexerError> {
        let position = self.cursor.position();
        lex_quoted(&mut self.cursor, quote).map_err(|literal| LexerError::InvalidLiteral {
            literal,
            span: Span::new(position.offset, self.cursor.position().offset),
            position,
        })
    }

    /// Lex a maximal identifier-shaped run and look it up in the keyword table
    fn lex_word(&mut self) -> Token {
        let mut word = String::new();
        while self.cursor.current_is(is_identifier_char) {
            word.push(self.cursor.current());
            self.cursor.advance();
        }

        match Keyword::from_spelling(&word) {
            Some(keyword) => Token::Keyword(keyword),
            None => Token::Identifier(word),
        }
    }
}

impl Iterator for Lexer {
    type Item = Result<TokenWithPosition, LexerError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Tokenize a complete source unit
pub fn tokenize(input: &str) -> Result<Vec<TokenWithPosition>, LexerError> {
    Lexer::new(input).collect_tokens()
}
