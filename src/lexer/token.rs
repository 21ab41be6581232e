//! トークン定義
//!
//! キーワードと記号は固定の綴りを持つ閉じた集合。それ以外のトークンは値を持つ。

use num_bigint::BigUint;
use serde::Serialize;
use std::fmt;

/// 綴りと1対1に対応する列挙型を定義する
macro_rules! spelled_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $spelling:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum $name {
            $($variant,)*
        }

        impl $name {
            /// すべてのバリアント（宣言順）
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            /// ソース上の綴り
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $spelling,)*
                }
            }

            /// 綴りから検索
            pub fn from_spelling(s: &str) -> Option<Self> {
                match s {
                    $($spelling => Some($name::$variant),)*
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

spelled_enum! {
    /// Javaの予約語
    pub enum Keyword {
        // 修飾子
        Public => "public",
        Private => "private",
        Protected => "protected",
        Static => "static",
        Final => "final",
        Volatile => "volatile",
        Synchronized => "synchronized",
        Strictfp => "strictfp",
        Transient => "transient",
        Abstract => "abstract",
        Native => "native",
        Sealed => "sealed",

        // 型宣言
        Class => "class",
        Enum => "enum",
        Interface => "interface",
        Record => "record",
        Permits => "permits",
        Extends => "extends",
        Implements => "implements",
        Package => "package",
        Import => "import",
        Throws => "throws",

        // 型と定数
        Boolean => "boolean",
        Byte => "byte",
        Char => "char",
        Short => "short",
        Int => "int",
        Float => "float",
        Long => "long",
        Double => "double",
        Void => "void",
        Null => "null",
        True => "true",
        False => "false",

        // 制御構文
        If => "if",
        Else => "else",
        Do => "do",
        While => "while",
        For => "for",
        Try => "try",
        Catch => "catch",
        Finally => "finally",
        Throw => "throw",
        Goto => "goto",
        Return => "return",
        Switch => "switch",
        Case => "case",
        Break => "break",
        Default => "default",
        Continue => "continue",
        Assert => "assert",
        New => "new",
        Instanceof => "instanceof",
        This => "this",
        Super => "super",
        Const => "const",
    }
}

spelled_enum! {
    /// 区切り記号と演算子
    pub enum Symbol {
        // 区切り記号
        LeftBrace => "{",
        RightBrace => "}",
        LeftBracket => "[",
        RightBracket => "]",
        LeftParen => "(",
        RightParen => ")",
        Dot => ".",
        Comma => ",",
        Colon => ":",
        Semicolon => ";",
        Tilde => "~",
        Not => "!",
        Question => "?",
        At => "@",

        // 比較とシフト
        Lt => "<",
        LtEq => "<=",
        Shl => "<<",
        ShlAssign => "<<=",
        Gt => ">",
        GtEq => ">=",
        Shr => ">>",
        ShrAssign => ">>=",
        UShr => ">>>",
        UShrAssign => ">>>=",

        // 算術
        Plus => "+",
        PlusPlus => "++",
        PlusAssign => "+=",
        Minus => "-",
        MinusMinus => "--",
        MinusAssign => "-=",
        Arrow => "->",
        Star => "*",
        StarAssign => "*=",
        Slash => "/",
        SlashAssign => "/=",
        Percent => "%",
        PercentAssign => "%=",

        // ビット演算・論理演算
        Caret => "^",
        CaretAssign => "^=",
        Pipe => "|",
        OrOr => "||",
        PipeAssign => "|=",
        Ampersand => "&",
        AndAnd => "&&",
        AmpersandAssign => "&=",

        // 代入と等価
        Assign => "=",
        EqEq => "==",
    }
}

impl Symbol {
    /// 先頭の `>` を取り除いた残りの記号
    ///
    /// ジェネリクスの閉じ括弧が `>>` などと結合して字句解析された場合に使う。
    pub fn split_leading_gt(self) -> Option<Symbol> {
        match self {
            Symbol::Shr => Some(Symbol::Gt),
            Symbol::UShr => Some(Symbol::Shr),
            Symbol::GtEq => Some(Symbol::Assign),
            Symbol::ShrAssign => Some(Symbol::GtEq),
            Symbol::UShrAssign => Some(Symbol::ShrAssign),
            _ => None,
        }
    }
}

/// Javaのトークン
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Token {
    Keyword(Keyword),
    Symbol(Symbol),
    Identifier(String),
    IntegerLiteral { value: BigUint, is_long: bool },
    /// 引用符の内側をそのまま保持する（エスケープは解釈しない）
    CharLiteral(String),
    StringLiteral(String),
}

impl Token {
    pub fn identifier(name: impl Into<String>) -> Self {
        Token::Identifier(name.into())
    }

    pub fn integer(value: impl Into<BigUint>, is_long: bool) -> Self {
        Token::IntegerLiteral {
            value: value.into(),
            is_long,
        }
    }
}

impl From<Keyword> for Token {
    fn from(keyword: Keyword) -> Self {
        Token::Keyword(keyword)
    }
}

impl From<Symbol> for Token {
    fn from(symbol: Symbol) -> Self {
        Token::Symbol(symbol)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Keyword(k) => write!(f, "{}", k),
            Token::Symbol(s) => write!(f, "{}", s),
            Token::Identifier(name) => write!(f, "{}", name),
            Token::IntegerLiteral { value, is_long } => {
                write!(f, "{}{}", value, if *is_long { "L" } else { "" })
            }
            Token::CharLiteral(raw) => write!(f, "'{}'", raw),
            Token::StringLiteral(raw) => write!(f, "\"{}\"", raw),
        }
    }
}
