//! Program tree nodes.

use crate::base::{NodeIndex, TextRange};
use crate::syntax_kind::SyntaxKind;
use serde::Serialize;

/// Identifier payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IdentifierData {
    pub escaped_text: String,
    /// Set when the identifier spells a contextual keyword, e.g. `undefined`.
    pub original_keyword: Option<SyntaxKind>,
}

/// `callee(arguments)` or `new callee(arguments)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CallData {
    pub expression: NodeIndex,
    pub arguments: Vec<NodeIndex>,
}

/// `expression.name`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PropertyAccessData {
    pub expression: NodeIndex,
    pub name: NodeIndex,
}

/// `for (initializer of expression) statement`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ForOfData {
    pub initializer: NodeIndex,
    pub expression: NodeIndex,
    pub statement: NodeIndex,
}

/// Variables, parameters, functions, namespaces, enums and enum members.
///
/// `children` holds everything after the name in source order
/// (initializer, parameters, body, members).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeclarationData {
    pub name: NodeIndex,
    pub children: Vec<NodeIndex>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum NodeData {
    Identifier(IdentifierData),
    Call(CallData),
    PropertyAccess(PropertyAccessData),
    ForOf(ForOfData),
    Declaration(DeclarationData),
    /// Any other node: its children in source order.
    Children(Vec<NodeIndex>),
    /// Literal or token without children.
    Token,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Node {
    pub kind: SyntaxKind,
    pub pos: u32,
    pub end: u32,
    pub parent: NodeIndex,
    pub data: NodeData,
}

impl Node {
    #[must_use]
    pub const fn new(kind: SyntaxKind, range: TextRange, data: NodeData) -> Self {
        Self {
            kind,
            pos: range.pos,
            end: range.end,
            parent: NodeIndex::NONE,
            data,
        }
    }

    #[must_use]
    pub const fn range(&self) -> TextRange {
        TextRange::new(self.pos, self.end)
    }

    #[must_use]
    pub const fn as_identifier(&self) -> Option<&IdentifierData> {
        match &self.data {
            NodeData::Identifier(ident) => Some(ident),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_call(&self) -> Option<&CallData> {
        match &self.data {
            NodeData::Call(call) => Some(call),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_for_of(&self) -> Option<&ForOfData> {
        match &self.data {
            NodeData::ForOf(for_of) => Some(for_of),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_property_access(&self) -> Option<&PropertyAccessData> {
        match &self.data {
            NodeData::PropertyAccess(access) => Some(access),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_declaration(&self) -> Option<&DeclarationData> {
        match &self.data {
            NodeData::Declaration(decl) => Some(decl),
            _ => None,
        }
    }

    /// Direct children in source order.
    #[must_use]
    pub fn children(&self) -> Vec<NodeIndex> {
        let mut children = Vec::new();
        let mut add_opt = |idx: NodeIndex| {
            if idx.is_some() {
                children.push(idx);
            }
        };
        match &self.data {
            NodeData::Identifier(_) | NodeData::Token => {}
            NodeData::Call(call) => {
                add_opt(call.expression);
                call.arguments.iter().copied().for_each(&mut add_opt);
            }
            NodeData::PropertyAccess(access) => {
                add_opt(access.expression);
                add_opt(access.name);
            }
            NodeData::ForOf(for_of) => {
                add_opt(for_of.initializer);
                add_opt(for_of.expression);
                add_opt(for_of.statement);
            }
            NodeData::Declaration(decl) => {
                add_opt(decl.name);
                decl.children.iter().copied().for_each(&mut add_opt);
            }
            NodeData::Children(list) => list.iter().copied().for_each(&mut add_opt),
        }
        children
    }
}
