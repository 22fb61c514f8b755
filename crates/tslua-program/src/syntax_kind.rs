//! Node kinds of the typed input tree.
//!
//! Only the kinds the lowering passes distinguish are listed; anything else a
//! frontend produces maps to `Unknown` and is treated as an opaque container.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[repr(u16)]
pub enum SyntaxKind {
    Unknown,

    // Tokens
    Identifier,
    UndefinedKeyword,
    NumericLiteral,
    StringLiteral,

    // Containers
    SourceFile,
    Block,
    ModuleBlock,

    // Declarations
    VariableStatement,
    VariableDeclaration,
    Parameter,
    FunctionDeclaration,
    ModuleDeclaration,
    EnumDeclaration,
    EnumMember,

    // Statements
    ExpressionStatement,
    ReturnStatement,
    ForOfStatement,
    ForInStatement,
    ForStatement,

    // Expressions
    CallExpression,
    NewExpression,
    PropertyAccessExpression,
    ElementAccessExpression,
    ParenthesizedExpression,
    BinaryExpression,
    ArrowFunction,
    FunctionExpression,
}

impl SyntaxKind {
    /// Kinds whose `name` child binds a new symbol.
    #[must_use]
    pub const fn is_declaration(self) -> bool {
        matches!(
            self,
            Self::VariableDeclaration
                | Self::Parameter
                | Self::FunctionDeclaration
                | Self::ModuleDeclaration
                | Self::EnumDeclaration
                | Self::EnumMember
        )
    }

    /// Kinds that introduce a new function scope.
    #[must_use]
    pub const fn is_function_like(self) -> bool {
        matches!(
            self,
            Self::FunctionDeclaration | Self::FunctionExpression | Self::ArrowFunction
        )
    }

    /// `foo(...)` and `new Foo(...)`.
    #[must_use]
    pub const fn is_call_like(self) -> bool {
        matches!(self, Self::CallExpression | Self::NewExpression)
    }
}
