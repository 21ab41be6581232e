//! jformat: a front-end for a subset of Java
//!
//! This library tokenizes Java source text, parses one top-level class declaration
//! into an AST and renders the AST back to canonical source text.

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod sources;

// Re-export commonly used types
pub use ast::{ClassDeclaration, ExpressionNode, StatementNode, TypeNode};
pub use error::{ErrorCollector, JformatError, JformatResult};
pub use lexer::{tokenize, Lexer, Token, TokenWithPosition};
pub use parser::{parse, ParseError, ParseResult, Parser};
pub use sources::{collect_sources, parse_source_file, SourceFile};
