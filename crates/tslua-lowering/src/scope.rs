//! Lexical scope stack maintained while lowering.
//!
//! Each open scope records which symbols are referenced inside it and where,
//! so later passes can decide where declarations must be hoisted.

use crate::symbols::SymbolId;
use bitflags::bitflags;
use indexmap::IndexMap;
use serde::Serialize;
use tslua_program::NodeIndex;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ScopeType: u16 {
        const FILE = 1 << 0;
        const FUNCTION = 1 << 1;
        const BLOCK = 1 << 2;
        const LOOP = 1 << 3;
        const NAMESPACE = 1 << 4;
    }
}

impl Serialize for ScopeType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.bits())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Scope {
    pub kind: ScopeType,
    pub id: u32,
    /// Node that opened the scope.
    pub node: NodeIndex,
    /// Symbol -> referencing identifiers, in reference order.
    pub referenced_symbols: IndexMap<SymbolId, Vec<NodeIndex>>,
}

#[derive(Debug, Default)]
pub struct ScopeStack {
    scopes: Vec<Scope>,
    next_id: u32,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a scope and return its id.
    pub fn push(&mut self, kind: ScopeType, node: NodeIndex) -> u32 {
        self.next_id += 1;
        let id = self.next_id;
        self.scopes.push(Scope {
            kind,
            id,
            node,
            referenced_symbols: IndexMap::new(),
        });
        id
    }

    pub fn pop(&mut self) -> Option<Scope> {
        self.scopes.pop()
    }

    /// Record a reference to `symbol` in every open scope.
    pub fn record_reference(&mut self, symbol: SymbolId, identifier: NodeIndex) {
        for scope in &mut self.scopes {
            scope
                .referenced_symbols
                .entry(symbol)
                .or_default()
                .push(identifier);
        }
    }
}
