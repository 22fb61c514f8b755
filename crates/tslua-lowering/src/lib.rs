//! Identifier and language-extension lowering for tslua.
//!
//! Decides what every name reference of a checked program becomes in the Lua
//! output: a plain local, a safe (mangled) name, a field of an export table,
//! `nil`, a builtin replacement, or a placeholder for a misused language
//! extension.
//!
//! - `language_extensions` - structural recognition of extension brand types
//! - `safe_names` - Lua-safe names with collision handling
//! - `symbols` / `scope` - symbol ids and per-scope reference tracking
//! - `export` - export container resolution and table access rewriting
//! - `identifier` - the per-reference lowering entry points
//! - `pass` - file-level identifier pass

pub mod builtins;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod export;
pub mod identifier;
pub mod language_extensions;
pub mod lua_ast;
pub mod pass;
pub mod safe_names;
pub mod scope;
pub mod symbols;

pub use context::TransformationContext;
pub use error::{LoweringError, LoweringResult};
pub use export::{
    ExportScope, ExportScopeKind, create_exported_identifier, get_symbol_export_scope,
};
pub use identifier::{
    transform_declaration_name, transform_identifier, transform_identifier_expression,
};
pub use language_extensions::{
    ExtensionKind, OperatorKind, get_extension_kind_for_node, get_extension_kind_for_type,
};
pub use lua_ast::{LuaExpression, LuaIdentifier};
pub use pass::{IdentifierLoweringPass, Lowered, LoweredFile, LoweredNode, lower_identifiers};
pub use safe_names::SafeNameRegistry;
pub use scope::{Scope, ScopeStack, ScopeType};
pub use symbols::{SymbolId, SymbolInfo, SymbolTracker};

#[cfg(test)]
#[path = "../tests/test_fixtures.rs"]
mod test_fixtures;

#[cfg(test)]
#[path = "../tests/language_extensions_tests.rs"]
mod language_extensions_tests;

#[cfg(test)]
#[path = "../tests/safe_names_tests.rs"]
mod safe_names_tests;

#[cfg(test)]
#[path = "../tests/symbols_tests.rs"]
mod symbols_tests;

#[cfg(test)]
#[path = "../tests/export_tests.rs"]
mod export_tests;

#[cfg(test)]
#[path = "../tests/identifier_tests.rs"]
mod identifier_tests;

#[cfg(test)]
#[path = "../tests/pass_tests.rs"]
mod pass_tests;

#[cfg(test)]
#[path = "../tests/lua_ast_tests.rs"]
mod lua_ast_tests;
