//! 型の定義

use serde::Serialize;
use std::fmt;

use super::{assert_name, write_joined};
use crate::lexer::Keyword;

/// プリミティブ型（`boolean` は含まない）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PrimitiveType {
    Void,
    Byte,
    Char,
    Short,
    Int,
    Float,
    Long,
    Double,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 8] = [
        PrimitiveType::Void,
        PrimitiveType::Byte,
        PrimitiveType::Char,
        PrimitiveType::Short,
        PrimitiveType::Int,
        PrimitiveType::Float,
        PrimitiveType::Long,
        PrimitiveType::Double,
    ];

    pub fn keyword(self) -> Keyword {
        match self {
            PrimitiveType::Void => Keyword::Void,
            PrimitiveType::Byte => Keyword::Byte,
            PrimitiveType::Char => Keyword::Char,
            PrimitiveType::Short => Keyword::Short,
            PrimitiveType::Int => Keyword::Int,
            PrimitiveType::Float => Keyword::Float,
            PrimitiveType::Long => Keyword::Long,
            PrimitiveType::Double => Keyword::Double,
        }
    }

    pub fn from_keyword(keyword: Keyword) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.keyword() == keyword)
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// 参照型（クラス名のみ）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceType {
    name: String,
}

impl ReferenceType {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        assert_name("type name", &name);
        Self { name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// 型引数付きの参照型
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenericReferenceType {
    name: String,
    arguments: Vec<TypeNode>,
}

impl GenericReferenceType {
    /// 型引数は記述順に保持する。空の型引数リストはパニックする。
    pub fn new(name: impl Into<String>, arguments: Vec<TypeNode>) -> Self {
        let name = name.into();
        assert_name("type name", &name);
        assert!(!arguments.is_empty(), "generic type '{}' needs at least one argument", name);
        Self { name, arguments }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arguments(&self) -> &[TypeNode] {
        &self.arguments
    }
}

/// 型ノード
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TypeNode {
    Primitive(PrimitiveType),
    Reference(ReferenceType),
    GenericReference(GenericReferenceType),
    Array(Box<TypeNode>),
}

impl TypeNode {
    pub fn reference(name: impl Into<String>) -> Self {
        TypeNode::Reference(ReferenceType::new(name))
    }

    pub fn generic(name: impl Into<String>, arguments: Vec<TypeNode>) -> Self {
        TypeNode::GenericReference(GenericReferenceType::new(name, arguments))
    }

    pub fn array(base: TypeNode) -> Self {
        TypeNode::Array(Box::new(base))
    }
}

impl From<PrimitiveType> for TypeNode {
    fn from(primitive: PrimitiveType) -> Self {
        TypeNode::Primitive(primitive)
    }
}

impl fmt::Display for TypeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeNode::Primitive(p) => write!(f, "{}", p),
            TypeNode::Reference(r) => write!(f, "{}", r.name),
            TypeNode::GenericReference(g) => {
                write!(f, "{}<", g.name)?;
                write_joined(f, &g.arguments, ",")?;
                write!(f, ">")
            }
            TypeNode::Array(base) => write!(f, "{}[]", base),
        }
    }
}
