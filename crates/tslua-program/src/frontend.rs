//! The query surface the lowering passes use to inspect a checked program.
//!
//! A frontend implements the six required methods; the structural helpers
//! (`property_of_type`, `type_annotations`, `declaring_scope_chain`, ...) are
//! provided on top of them so every frontend answers them the same way.

use crate::base::NodeIndex;
use crate::node::{IdentifierData, Node};
use crate::symbols::{Symbol, SymbolRef};
use crate::syntax_kind::SyntaxKind;
use crate::types::{TypeAnnotation, TypeData, TypeId};
use smallvec::SmallVec;
use tslua_common::limits::{
    MAX_SCOPE_CHAIN_DEPTH, MAX_TREE_WALK_ITERATIONS, MAX_TYPE_RESOLUTION_DEPTH,
};

pub trait Frontend {
    /// Name of the file being lowered, used for diagnostics.
    fn file_name(&self) -> &str;

    fn node(&self, idx: NodeIndex) -> Option<&Node>;

    /// Resolved type of an expression or declaration name.
    fn type_at_location(&self, idx: NodeIndex) -> Option<TypeId>;

    fn type_data(&self, id: TypeId) -> Option<&TypeData>;

    /// Symbol a name resolves to, if any.
    fn symbol_at_location(&self, idx: NodeIndex) -> Option<SymbolRef>;

    fn symbol(&self, id: SymbolRef) -> Option<&Symbol>;

    // =========================================================================
    // Provided helpers
    // =========================================================================

    fn kind(&self, idx: NodeIndex) -> Option<SyntaxKind> {
        self.node(idx).map(|node| node.kind)
    }

    fn parent(&self, idx: NodeIndex) -> NodeIndex {
        self.node(idx).map_or(NodeIndex::NONE, |node| node.parent)
    }

    fn identifier_data(&self, idx: NodeIndex) -> Option<&IdentifierData> {
        self.node(idx).and_then(Node::as_identifier)
    }

    fn identifier_text(&self, idx: NodeIndex) -> Option<&str> {
        self.identifier_data(idx).map(|ident| ident.escaped_text.as_str())
    }

    /// First strict ancestor of `idx` matching `predicate`.
    fn find_ancestor(&self, idx: NodeIndex, predicate: &dyn Fn(&Node) -> bool) -> Option<NodeIndex> {
        let mut current = self.parent(idx);
        let mut iterations = 0;
        while current.is_some() {
            iterations += 1;
            if iterations > MAX_TREE_WALK_ITERATIONS {
                tracing::warn!(start = idx.0, "parent chain exceeds walk limit");
                return None;
            }
            let node = self.node(current)?;
            if predicate(node) {
                return Some(current);
            }
            current = node.parent;
        }
        None
    }

    /// Type of property `name` on `type_id`, looked up structurally.
    ///
    /// Aliases are transparent; an intersection has a property if any member
    /// has it; a union has it only if every member has it.
    fn property_of_type(&self, type_id: TypeId, name: &str) -> Option<TypeId> {
        property_of_type_at_depth(self, type_id, name, 0)
    }

    /// Annotations attached to `type_id` or any of its intersection members.
    fn type_annotations(&self, type_id: TypeId) -> SmallVec<[TypeAnnotation; 2]> {
        let mut out = SmallVec::new();
        collect_annotations(self, type_id, &mut out, 0);
        out
    }

    /// Whether `type_id` resolves (through aliases) to a `unique symbol` type.
    fn is_unique_symbol_type(&self, type_id: TypeId) -> bool {
        let mut current = type_id;
        for _ in 0..MAX_TYPE_RESOLUTION_DEPTH {
            match self.type_data(current) {
                Some(TypeData::UniqueSymbol { .. }) => return true,
                Some(TypeData::Alias { target, .. }) => current = *target,
                _ => return false,
            }
        }
        false
    }

    /// Containers declaring `symbol`, innermost first.
    fn declaring_scope_chain(&self, symbol: SymbolRef) -> SmallVec<[SymbolRef; 4]> {
        let mut chain = SmallVec::new();
        let mut current = self.symbol(symbol).and_then(|sym| sym.parent);
        while let Some(container) = current {
            if chain.len() >= MAX_SCOPE_CHAIN_DEPTH || chain.contains(&container) {
                tracing::warn!(symbol = symbol.0, "malformed declaring scope chain");
                break;
            }
            chain.push(container);
            current = self.symbol(container).and_then(|sym| sym.parent);
        }
        chain
    }
}

fn property_of_type_at_depth<F: Frontend + ?Sized>(
    frontend: &F,
    type_id: TypeId,
    name: &str,
    depth: u32,
) -> Option<TypeId> {
    if depth > MAX_TYPE_RESOLUTION_DEPTH {
        return None;
    }
    match frontend.type_data(type_id)? {
        TypeData::Object { properties, .. } => properties
            .iter()
            .find(|prop| prop.name == name)
            .map(|prop| prop.type_id),
        TypeData::Alias { target, .. } => {
            property_of_type_at_depth(frontend, *target, name, depth + 1)
        }
        TypeData::Intersection(members) => members
            .iter()
            .find_map(|&member| property_of_type_at_depth(frontend, member, name, depth + 1)),
        TypeData::Union(members) => {
            let mut found = None;
            for &member in members {
                let prop = property_of_type_at_depth(frontend, member, name, depth + 1)?;
                found.get_or_insert(prop);
            }
            found
        }
        TypeData::Intrinsic(_) | TypeData::UniqueSymbol { .. } | TypeData::Function { .. } => None,
    }
}

fn collect_annotations<F: Frontend + ?Sized>(
    frontend: &F,
    type_id: TypeId,
    out: &mut SmallVec<[TypeAnnotation; 2]>,
    depth: u32,
) {
    if depth > MAX_TYPE_RESOLUTION_DEPTH {
        return;
    }
    let Some(data) = frontend.type_data(type_id) else {
        return;
    };
    match data {
        TypeData::Object { annotations, .. } | TypeData::Function { annotations, .. } => {
            for annotation in annotations {
                if !out.contains(annotation) {
                    out.push(*annotation);
                }
            }
        }
        TypeData::Alias { target, .. } => collect_annotations(frontend, *target, out, depth + 1),
        TypeData::Intersection(members) => {
            for &member in members {
                collect_annotations(frontend, member, out, depth + 1);
            }
        }
        TypeData::Intrinsic(_) | TypeData::UniqueSymbol { .. } | TypeData::Union(_) => {}
    }
}
