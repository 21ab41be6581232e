//! Abstract Syntax Tree (AST) definitions for the supported Java subset.
//!
//! Every node is immutable once built and renders back to canonical source text
//! through its `Display` implementation. Names carried by nodes are checked at
//! construction time; a blank name is a programming error and panics.

mod declarations;
mod expressions;
mod statements;
mod types;

pub use declarations::{
    AccessModifier, ClassDeclaration, FieldDeclaration, ImportDeclaration, MethodDeclaration,
    MethodParameterDeclaration, PackageDeclaration,
};
pub use expressions::{
    ExpressionNode, FieldAccessExpression, MethodInvocationExpression, VariableReferenceExpression,
};
pub use statements::{StatementNode, VariableDeclaration};
pub use types::{GenericReferenceType, PrimitiveType, ReferenceType, TypeNode};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Span information for source location tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

/// Panics when `name` is empty or whitespace only
pub(crate) fn assert_name(kind: &str, name: &str) {
    assert!(!name.trim().is_empty(), "{} must not be blank", kind);
}

/// Write `items` separated by `sep`
pub(crate) fn write_joined<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    sep: &str,
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}
