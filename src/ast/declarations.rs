//! 宣言の定義

use serde::Serialize;
use std::fmt;

use super::{assert_name, write_joined, ExpressionNode, StatementNode, TypeNode};
use crate::lexer::Keyword;

/// アクセス修飾子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AccessModifier {
    Public,
    Private,
    Protected,
    Final,
    Abstract,
    Volatile,
    Synchronized,
    Strictfp,
    Transient,
    Static,
    Native,
}

impl AccessModifier {
    pub const ALL: [AccessModifier; 11] = [
        AccessModifier::Public,
        AccessModifier::Private,
        AccessModifier::Protected,
        AccessModifier::Final,
        AccessModifier::Abstract,
        AccessModifier::Volatile,
        AccessModifier::Synchronized,
        AccessModifier::Strictfp,
        AccessModifier::Transient,
        AccessModifier::Static,
        AccessModifier::Native,
    ];

    pub fn keyword(self) -> Keyword {
        match self {
            AccessModifier::Public => Keyword::Public,
            AccessModifier::Private => Keyword::Private,
            AccessModifier::Protected => Keyword::Protected,
            AccessModifier::Final => Keyword::Final,
            AccessModifier::Abstract => Keyword::Abstract,
            AccessModifier::Volatile => Keyword::Volatile,
            AccessModifier::Synchronized => Keyword::Synchronized,
            AccessModifier::Strictfp => Keyword::Strictfp,
            AccessModifier::Transient => Keyword::Transient,
            AccessModifier::Static => Keyword::Static,
            AccessModifier::Native => Keyword::Native,
        }
    }

    pub fn from_keyword(keyword: Keyword) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.keyword() == keyword)
    }
}

impl fmt::Display for AccessModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

fn write_modifiers(f: &mut fmt::Formatter<'_>, modifiers: &[AccessModifier]) -> fmt::Result {
    for modifier in modifiers {
        write!(f, "{} ", modifier)?;
    }
    Ok(())
}

fn checked_segments(kind: &str, segments: Vec<String>) -> Vec<String> {
    assert!(!segments.is_empty(), "{} needs at least one segment", kind);
    for segment in &segments {
        assert_name(kind, segment);
    }
    segments
}

/// パッケージ宣言 `package a.b.c;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageDeclaration {
    segments: Vec<String>,
}

impl PackageDeclaration {
    pub fn new<S: Into<String>>(segments: impl IntoIterator<Item = S>) -> Self {
        let segments = segments.into_iter().map(Into::into).collect();
        Self {
            segments: checked_segments("package name", segments),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for PackageDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "package {};", self.segments.join("."))
    }
}

/// インポート宣言 `import a.b.C;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportDeclaration {
    segments: Vec<String>,
}

impl ImportDeclaration {
    pub fn new<S: Into<String>>(segments: impl IntoIterator<Item = S>) -> Self {
        let segments = segments.into_iter().map(Into::into).collect();
        Self {
            segments: checked_segments("import name", segments),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for ImportDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "import {};", self.segments.join("."))
    }
}

/// フィールド宣言
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDeclaration {
    modifiers: Vec<AccessModifier>,
    field_type: TypeNode,
    name: String,
    initializer: Option<ExpressionNode>,
}

impl FieldDeclaration {
    pub fn new(
        modifiers: Vec<AccessModifier>,
        field_type: TypeNode,
        name: impl Into<String>,
        initializer: Option<ExpressionNode>,
    ) -> Self {
        let name = name.into();
        assert_name("field name", &name);
        Self {
            modifiers,
            field_type,
            name,
            initializer,
        }
    }

    pub fn modifiers(&self) -> &[AccessModifier] {
        &self.modifiers
    }

    pub fn field_type(&self) -> &TypeNode {
        &self.field_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn initializer(&self) -> Option<&ExpressionNode> {
        self.initializer.as_ref()
    }
}

impl fmt::Display for FieldDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_modifiers(f, &self.modifiers)?;
        write!(f, "{} {}", self.field_type, self.name)?;
        if let Some(init) = &self.initializer {
            write!(f, "={}", init)?;
        }
        write!(f, ";")
    }
}

/// メソッド引数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodParameterDeclaration {
    is_final: bool,
    parameter_type: TypeNode,
    name: String,
}

impl MethodParameterDeclaration {
    pub fn new(is_final: bool, parameter_type: TypeNode, name: impl Into<String>) -> Self {
        let name = name.into();
        assert_name("parameter name", &name);
        Self {
            is_final,
            parameter_type,
            name,
        }
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub fn parameter_type(&self) -> &TypeNode {
        &self.parameter_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for MethodParameterDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_final {
            write!(f, "final ")?;
        }
        write!(f, "{} {}", self.parameter_type, self.name)
    }
}

/// メソッド宣言
///
/// 本体が `None` の場合は `;` で終わる本体なしの宣言。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodDeclaration {
    modifiers: Vec<AccessModifier>,
    return_type: TypeNode,
    name: String,
    parameters: Vec<MethodParameterDeclaration>,
    body: Option<Vec<StatementNode>>,
}

impl MethodDeclaration {
    pub fn new(
        modifiers: Vec<AccessModifier>,
        return_type: TypeNode,
        name: impl Into<String>,
        parameters: Vec<MethodParameterDeclaration>,
        body: Option<Vec<StatementNode>>,
    ) -> Self {
        let name = name.into();
        assert_name("method name", &name);
        Self {
            modifiers,
            return_type,
            name,
            parameters,
            body,
        }
    }

    pub fn modifiers(&self) -> &[AccessModifier] {
        &self.modifiers
    }

    pub fn return_type(&self) -> &TypeNode {
        &self.return_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[MethodParameterDeclaration] {
        &self.parameters
    }

    pub fn body(&self) -> Option<&[StatementNode]> {
        self.body.as_deref()
    }
}

impl fmt::Display for MethodDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_modifiers(f, &self.modifiers)?;
        write!(f, "{} {}(", self.return_type, self.name)?;
        write_joined(f, &self.parameters, ",")?;
        write!(f, ")")?;
        match &self.body {
            None => write!(f, ";"),
            Some(statements) => {
                write!(f, "{{")?;
                write_joined(f, statements, "")?;
                write!(f, "}}")
            }
        }
    }
}

/// トップレベルのクラス宣言
///
/// `package` が `None` の場合はデフォルトパッケージ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassDeclaration {
    package: Option<PackageDeclaration>,
    imports: Vec<ImportDeclaration>,
    modifiers: Vec<AccessModifier>,
    name: String,
    superclass: Option<String>,
    interfaces: Vec<String>,
    fields: Vec<FieldDeclaration>,
    methods: Vec<MethodDeclaration>,
}

impl ClassDeclaration {
    /// デフォルトパッケージに属する空のクラス
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        assert_name("class name", &name);
        Self {
            package: None,
            imports: Vec::new(),
            modifiers: Vec::new(),
            name,
            superclass: None,
            interfaces: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn with_package(mut self, package: Option<PackageDeclaration>) -> Self {
        self.package = package;
        self
    }

    pub fn with_imports(mut self, imports: Vec<ImportDeclaration>) -> Self {
        self.imports = imports;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Vec<AccessModifier>) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_superclass(mut self, superclass: Option<String>) -> Self {
        if let Some(name) = &superclass {
            assert_name("superclass name", name);
        }
        self.superclass = superclass;
        self
    }

    pub fn with_interfaces(mut self, interfaces: Vec<String>) -> Self {
        for name in &interfaces {
            assert_name("interface name", name);
        }
        self.interfaces = interfaces;
        self
    }

    pub fn with_fields(mut self, fields: Vec<FieldDeclaration>) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_methods(mut self, methods: Vec<MethodDeclaration>) -> Self {
        self.methods = methods;
        self
    }

    pub fn package(&self) -> Option<&PackageDeclaration> {
        self.package.as_ref()
    }

    pub fn is_default_package(&self) -> bool {
        self.package.is_none()
    }

    pub fn imports(&self) -> &[ImportDeclaration] {
        &self.imports
    }

    pub fn modifiers(&self) -> &[AccessModifier] {
        &self.modifiers
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn superclass(&self) -> Option<&str> {
        self.superclass.as_deref()
    }

    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    pub fn fields(&self) -> &[FieldDeclaration] {
        &self.fields
    }

    pub fn methods(&self) -> &[MethodDeclaration] {
        &self.methods
    }
}

impl fmt::Display for ClassDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(package) = &self.package {
            writeln!(f, "{}", package)?;
        }
        for import in &self.imports {
            writeln!(f, "{}", import)?;
        }

        write_modifiers(f, &self.modifiers)?;
        write!(f, "class {}", self.name)?;
        if let Some(superclass) = &self.superclass {
            write!(f, " extends {}", superclass)?;
        }
        if !self.interfaces.is_empty() {
            write!(f, " implements {}", self.interfaces.join(","))?;
        }
        writeln!(f, "{{")?;

        for field in &self.fields {
            writeln!(f, "{}", field)?;
        }
        for method in &self.methods {
            writeln!(f, "{}", method)?;
        }
        write!(f, "}}")
    }
}
