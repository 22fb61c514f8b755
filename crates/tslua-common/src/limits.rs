//! Centralized limits and thresholds for the lowering passes.
//!
//! These prevent runaway loops when a malformed tree (for example a parent
//! cycle produced by a buggy frontend) is handed to the lowering passes.

/// Maximum number of parent links followed when walking up the tree.
///
/// Used when searching for the call expression enclosing a `@forRange`
/// reference and when checking whether an identifier is a callee.
pub const MAX_TREE_WALK_ITERATIONS: u32 = 10_000;

/// Maximum number of containers followed when resolving a symbol's scope chain.
pub const MAX_SCOPE_CHAIN_DEPTH: usize = 256;

/// Maximum depth for the recursive identifier pass over a source file.
pub const MAX_AST_DEPTH: u32 = 500;

/// Maximum depth when following type aliases and intersections during
/// structural property lookup.
pub const MAX_TYPE_RESOLUTION_DEPTH: u32 = 64;
