//! 文の定義

use serde::Serialize;
use std::fmt;

use super::{
    assert_name, ExpressionNode, FieldAccessExpression, MethodInvocationExpression, TypeNode,
};

/// ローカル変数宣言
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableDeclaration {
    is_final: bool,
    variable_type: TypeNode,
    name: String,
    initializer: Option<ExpressionNode>,
}

impl VariableDeclaration {
    pub fn new(
        is_final: bool,
        variable_type: TypeNode,
        name: impl Into<String>,
        initializer: Option<ExpressionNode>,
    ) -> Self {
        let name = name.into();
        assert_name("variable name", &name);
        Self {
            is_final,
            variable_type,
            name,
            initializer,
        }
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub fn variable_type(&self) -> &TypeNode {
        &self.variable_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn initializer(&self) -> Option<&ExpressionNode> {
        self.initializer.as_ref()
    }
}

/// 文ノード
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum StatementNode {
    VariableDeclaration(VariableDeclaration),
    Return(ExpressionNode),
    Empty,
    FieldAssignment {
        target: FieldAccessExpression,
        value: ExpressionNode,
    },
    MethodInvocation(MethodInvocationExpression),
}

impl fmt::Display for StatementNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatementNode::VariableDeclaration(decl) => {
                if decl.is_final {
                    write!(f, "final ")?;
                }
                write!(f, "{} {}", decl.variable_type, decl.name)?;
                if let Some(init) = &decl.initializer {
                    write!(f, "={}", init)?;
                }
                write!(f, ";")
            }
            StatementNode::Return(value) => write!(f, "return {};", value),
            StatementNode::Empty => write!(f, ";"),
            StatementNode::FieldAssignment { target, value } => write!(f, "{}={};", target, value),
            StatementNode::MethodInvocation(call) => write!(f, "{};", call),
        }
    }
}
