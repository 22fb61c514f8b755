//! Symbol identity tracking.
//!
//! Every binder symbol referenced during lowering gets a small integer id,
//! unique for the lifetime of one `TransformationContext`. Ids are allocated
//! lazily in reference order, starting at 1.

use crate::context::TransformationContext;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fmt;
use tracing::trace;
use tslua_program::{NodeIndex, SymbolRef};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SymbolId(pub u32);

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SymbolInfo {
    pub symbol: SymbolRef,
    /// Reference that caused the id to be allocated.
    pub first_seen_at: NodeIndex,
}

/// Per-compilation-unit cache of symbol ids.
#[derive(Debug, Default)]
pub struct SymbolTracker {
    ids: FxHashMap<SymbolRef, SymbolId>,
    /// Indexed by `SymbolId.0 - 1`.
    info: Vec<SymbolInfo>,
}

impl SymbolTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of `symbol`, allocating one on first sight.
    pub fn id_for(&mut self, symbol: SymbolRef, seen_at: NodeIndex) -> SymbolId {
        if let Some(&id) = self.ids.get(&symbol) {
            return id;
        }
        self.info.push(SymbolInfo {
            symbol,
            first_seen_at: seen_at,
        });
        let id = SymbolId(self.info.len() as u32);
        self.ids.insert(symbol, id);
        trace!(symbol = symbol.0, id = id.0, "allocated symbol id");
        id
    }

    /// Id of `symbol` if one was already allocated.
    pub fn get(&self, symbol: SymbolRef) -> Option<SymbolId> {
        self.ids.get(&symbol).copied()
    }

    pub fn info(&self, id: SymbolId) -> Option<&SymbolInfo> {
        let slot = id.0.checked_sub(1)?;
        self.info.get(slot as usize)
    }

    pub fn len(&self) -> usize {
        self.info.len()
    }

    pub fn is_empty(&self) -> bool {
        self.info.is_empty()
    }
}

/// Id of `symbol`, also recording the reference in every open scope.
pub fn track_symbol_reference(
    ctx: &mut TransformationContext<'_>,
    symbol: SymbolRef,
    identifier: NodeIndex,
) -> SymbolId {
    let id = ctx.symbols.id_for(symbol, identifier);
    ctx.scopes.record_reference(id, identifier);
    id
}

/// Id of the symbol `identifier` resolves to, if it resolves to one.
pub fn get_identifier_symbol_id(
    ctx: &mut TransformationContext<'_>,
    identifier: NodeIndex,
) -> Option<SymbolId> {
    let symbol = ctx.frontend.symbol_at_location(identifier)?;
    Some(track_symbol_reference(ctx, symbol, identifier))
}
