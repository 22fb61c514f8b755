//! Lua output nodes produced by the identifier lowering.
//!
//! Only the node shapes identifier lowering can produce are modeled here.
//! Every node keeps an optional link to the program node it was lowered from.

use crate::symbols::SymbolId;
use serde::Serialize;
use std::fmt;
use tslua_common::lua::{ANONYMOUS_IDENTIFIER_TEXT, NIL_LITERAL, is_lua_keyword};
use tslua_program::NodeIndex;

/// Identifier in the Lua output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LuaIdentifier {
    /// Emitted (possibly mangled) name.
    pub text: String,
    /// Unmangled source name.
    pub original_name: Option<String>,
    /// Absent for synthesized identifiers.
    pub symbol_id: Option<SymbolId>,
    pub source: Option<NodeIndex>,
    /// Anonymous placeholders can never be exported.
    pub exportable: bool,
}

impl LuaIdentifier {
    pub fn is_anonymous(&self) -> bool {
        !self.exportable && self.text == ANONYMOUS_IDENTIFIER_TEXT
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum LuaExpression {
    Identifier(LuaIdentifier),

    /// `table[index]`, printed as `table.name` when the index is a valid name.
    TableIndex {
        table: Box<Self>,
        index: Box<Self>,
        source: Option<NodeIndex>,
    },

    StringLiteral(String),

    /// Numeric literal kept in its source spelling.
    NumericLiteral(String),

    NilLiteral,

    /// `left op right`, always printed parenthesized.
    Binary {
        left: Box<Self>,
        operator: String,
        right: Box<Self>,
    },
}

impl LuaExpression {
    pub fn as_identifier(&self) -> Option<&LuaIdentifier> {
        match self {
            Self::Identifier(ident) => Some(ident),
            _ => None,
        }
    }

    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::NilLiteral)
    }
}

impl From<LuaIdentifier> for LuaExpression {
    fn from(ident: LuaIdentifier) -> Self {
        Self::Identifier(ident)
    }
}

// =============================================================================
// Constructors
// =============================================================================

pub fn create_identifier(
    text: impl Into<String>,
    source: Option<NodeIndex>,
    symbol_id: Option<SymbolId>,
    original_name: Option<String>,
) -> LuaIdentifier {
    LuaIdentifier {
        text: text.into(),
        original_name,
        symbol_id,
        source,
        exportable: true,
    }
}

/// Placeholder that stands in for a reference which cannot be lowered.
pub fn create_anonymous_identifier(source: Option<NodeIndex>) -> LuaIdentifier {
    LuaIdentifier {
        text: ANONYMOUS_IDENTIFIER_TEXT.to_string(),
        original_name: None,
        symbol_id: None,
        source,
        exportable: false,
    }
}

pub fn create_table_index_expression(
    table: LuaExpression,
    index: LuaExpression,
    source: Option<NodeIndex>,
) -> LuaExpression {
    LuaExpression::TableIndex {
        table: Box::new(table),
        index: Box::new(index),
        source,
    }
}

pub fn create_string_literal(value: impl Into<String>) -> LuaExpression {
    LuaExpression::StringLiteral(value.into())
}

pub fn create_numeric_literal(value: impl Into<String>) -> LuaExpression {
    LuaExpression::NumericLiteral(value.into())
}

pub const fn create_nil_literal() -> LuaExpression {
    LuaExpression::NilLiteral
}

pub fn create_binary_expression(
    left: LuaExpression,
    operator: impl Into<String>,
    right: LuaExpression,
) -> LuaExpression {
    LuaExpression::Binary {
        left: Box::new(left),
        operator: operator.into(),
        right: Box::new(right),
    }
}

// =============================================================================
// Printing
// =============================================================================

/// Whether `text` can be printed after a `.` in a table index.
fn is_printable_field_name(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !is_lua_keyword(text)
}

fn write_string_literal(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in value.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\0' => f.write_str("\\0")?,
            _ => write!(f, "{c}")?,
        }
    }
    f.write_str("\"")
}

impl fmt::Display for LuaIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl fmt::Display for LuaExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(ident) => write!(f, "{ident}"),
            Self::TableIndex { table, index, .. } => {
                match table.as_ref() {
                    Self::Identifier(_) | Self::TableIndex { .. } | Self::Binary { .. } => {
                        write!(f, "{table}")?;
                    }
                    _ => write!(f, "({table})")?,
                }
                match index.as_ref() {
                    Self::StringLiteral(name) if is_printable_field_name(name) => {
                        write!(f, ".{name}")
                    }
                    _ => write!(f, "[{index}]"),
                }
            }
            Self::StringLiteral(value) => write_string_literal(f, value),
            Self::NumericLiteral(value) => f.write_str(value),
            Self::NilLiteral => f.write_str(NIL_LITERAL),
            Self::Binary {
                left,
                operator,
                right,
            } => write!(f, "({left} {operator} {right})"),
        }
    }
}
