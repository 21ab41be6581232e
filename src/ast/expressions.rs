//! 式の定義

use num_bigint::BigUint;
use serde::Serialize;
use std::fmt;

use super::{assert_name, write_joined};

/// 変数参照
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableReferenceExpression {
    name: String,
}

impl VariableReferenceExpression {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        assert_name("variable name", &name);
        Self { name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// フィールドアクセス `base.field`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldAccessExpression {
    base: Box<ExpressionNode>,
    field_name: String,
}

impl FieldAccessExpression {
    pub fn new(base: ExpressionNode, field_name: impl Into<String>) -> Self {
        let field_name = field_name.into();
        assert_name("field name", &field_name);
        Self {
            base: Box::new(base),
            field_name,
        }
    }

    pub fn base(&self) -> &ExpressionNode {
        &self.base
    }

    pub fn field_name(&self) -> &str {
        &self.field_name
    }
}

impl fmt::Display for FieldAccessExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.base, self.field_name)
    }
}

/// メソッド呼び出し `base.method(args)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodInvocationExpression {
    base: Box<ExpressionNode>,
    method_name: String,
    arguments: Vec<ExpressionNode>,
}

impl MethodInvocationExpression {
    pub fn new(
        base: ExpressionNode,
        method_name: impl Into<String>,
        arguments: Vec<ExpressionNode>,
    ) -> Self {
        let method_name = method_name.into();
        assert_name("method name", &method_name);
        Self {
            base: Box::new(base),
            method_name,
            arguments,
        }
    }

    pub fn base(&self) -> &ExpressionNode {
        &self.base
    }

    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    pub fn arguments(&self) -> &[ExpressionNode] {
        &self.arguments
    }
}

impl fmt::Display for MethodInvocationExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}(", self.base, self.method_name)?;
        write_joined(f, &self.arguments, ",")?;
        write!(f, ")")
    }
}

/// 式ノード
///
/// 四則演算はすべて同じ優先順位で右結合に解析される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ExpressionNode {
    Constant { value: BigUint, is_long: bool },
    VariableReference(VariableReferenceExpression),
    FieldAccess(FieldAccessExpression),
    MethodInvocation(MethodInvocationExpression),
    Plus(Box<ExpressionNode>, Box<ExpressionNode>),
    Minus(Box<ExpressionNode>, Box<ExpressionNode>),
    Multiply(Box<ExpressionNode>, Box<ExpressionNode>),
    Divide(Box<ExpressionNode>, Box<ExpressionNode>),
    Bracket(Box<ExpressionNode>),
}

impl ExpressionNode {
    pub fn constant(value: impl Into<BigUint>, is_long: bool) -> Self {
        ExpressionNode::Constant {
            value: value.into(),
            is_long,
        }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        ExpressionNode::VariableReference(VariableReferenceExpression::new(name))
    }

    pub fn field_access(base: ExpressionNode, field_name: impl Into<String>) -> Self {
        ExpressionNode::FieldAccess(FieldAccessExpression::new(base, field_name))
    }

    pub fn invocation(
        base: ExpressionNode,
        method_name: impl Into<String>,
        arguments: Vec<ExpressionNode>,
    ) -> Self {
        ExpressionNode::MethodInvocation(MethodInvocationExpression::new(
            base,
            method_name,
            arguments,
        ))
    }

    pub fn plus(left: ExpressionNode, right: ExpressionNode) -> Self {
        ExpressionNode::Plus(Box::new(left), Box::new(right))
    }

    pub fn minus(left: ExpressionNode, right: ExpressionNode) -> Self {
        ExpressionNode::Minus(Box::new(left), Box::new(right))
    }

    pub fn multiply(left: ExpressionNode, right: ExpressionNode) -> Self {
        ExpressionNode::Multiply(Box::new(left), Box::new(right))
    }

    pub fn divide(left: ExpressionNode, right: ExpressionNode) -> Self {
        ExpressionNode::Divide(Box::new(left), Box::new(right))
    }

    pub fn bracket(inner: ExpressionNode) -> Self {
        ExpressionNode::Bracket(Box::new(inner))
    }
}

impl fmt::Display for ExpressionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionNode::Constant { value, is_long } => {
                write!(f, "{}{}", value, if *is_long { "L" } else { "" })
            }
            ExpressionNode::VariableReference(v) => write!(f, "{}", v.name),
            ExpressionNode::FieldAccess(access) => write!(f, "{}", access),
            ExpressionNode::MethodInvocation(call) => write!(f, "{}", call),
            ExpressionNode::Plus(l, r) => write!(f, "{}+{}", l, r),
            ExpressionNode::Minus(l, r) => write!(f, "{}-{}", l, r),
            ExpressionNode::Multiply(l, r) => write!(f, "{}*{}", l, r),
            ExpressionNode::Divide(l, r) => write!(f, "{}/{}", l, r),
            ExpressionNode::Bracket(inner) => write!(f, "({})", inner),
        }
    }
}
