//! Typed program representation consumed by the tslua lowering passes.
//!
//! The parser and type checker live outside this workspace. This crate defines
//! the minimal contract the lowering passes need from them:
//! - `base` / `syntax_kind` / `node` / `arena` - the program tree
//! - `types` - structural type table (objects, intersections, aliases, ...)
//! - `symbols` - symbol table with declaring-container links
//! - `frontend` - the `Frontend` query trait
//! - `program` - `Program`, an arena-backed `Frontend` with a bottom-up builder

pub mod arena;
pub mod base;
pub mod frontend;
pub mod node;
pub mod program;
pub mod symbols;
pub mod syntax_kind;
pub mod types;

pub use arena::NodeArena;
pub use base::{NodeIndex, TextRange};
pub use frontend::Frontend;
pub use node::{CallData, DeclarationData, ForOfData, IdentifierData, Node, NodeData, PropertyAccessData};
pub use program::Program;
pub use symbols::{Symbol, SymbolFlags, SymbolRef, SymbolTable};
pub use syntax_kind::SyntaxKind;
pub use types::{IntrinsicKind, PropertyInfo, TypeAnnotation, TypeData, TypeId, TypeTable};

#[cfg(test)]
#[path = "../tests/arena_tests.rs"]
mod arena_tests;

#[cfg(test)]
#[path = "../tests/frontend_tests.rs"]
mod frontend_tests;
