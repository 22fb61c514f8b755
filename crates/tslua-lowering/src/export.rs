//! Export scope resolution.
//!
//! An exported symbol is not a Lua local: it lives in a field of its
//! container's table. Module files keep their exports in `____exports`,
//! namespaces and enums in the local holding the namespace or enum table.

use crate::context::TransformationContext;
use crate::lua_ast::{
    LuaExpression, LuaIdentifier, create_identifier, create_string_literal,
    create_table_index_expression,
};
use crate::symbols::track_symbol_reference;
use serde::Serialize;
use tracing::trace;
use tslua_common::lua::EXPORTS_TABLE_NAME;
use tslua_program::{Frontend, NodeIndex, SymbolFlags, SymbolRef};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ExportScopeKind {
    SourceFile,
    Namespace,
    Enum,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ExportScope {
    pub kind: ExportScopeKind,
    pub container: SymbolRef,
}

/// Container table `symbol` is exported into, if it is exported at all.
///
/// Only the innermost declaring container counts.
pub fn get_symbol_export_scope(frontend: &dyn Frontend, symbol: SymbolRef) -> Option<ExportScope> {
    let sym = frontend.symbol(symbol)?;
    if !sym.is_exported() {
        return None;
    }
    let container = *frontend.declaring_scope_chain(symbol).first()?;
    let flags = frontend.symbol(container)?.flags;
    let kind = if flags.contains(SymbolFlags::SOURCE_FILE) {
        ExportScopeKind::SourceFile
    } else if flags.contains(SymbolFlags::NAMESPACE) {
        ExportScopeKind::Namespace
    } else if flags.contains(SymbolFlags::ENUM) {
        ExportScopeKind::Enum
    } else {
        return None;
    };
    Some(ExportScope { kind, container })
}

/// Local identifier holding the table of a namespace or enum.
fn create_container_local_identifier(
    ctx: &mut TransformationContext<'_>,
    container: SymbolRef,
    reference: NodeIndex,
) -> Option<LuaIdentifier> {
    let frontend = ctx.frontend;
    let name = frontend.symbol(container)?.name.clone();
    let text = ctx.safe_names.mangle(&name, &ctx.options);
    let symbol_id = track_symbol_reference(ctx, container, reference);
    Some(create_identifier(text, None, Some(symbol_id), Some(name)))
}

/// `identifier` rewritten into a field access on its export container.
///
/// The field key is the original, unmangled name.
pub fn create_exported_identifier(
    ctx: &mut TransformationContext<'_>,
    identifier: LuaIdentifier,
    scope: ExportScope,
) -> LuaExpression {
    if !identifier.exportable {
        return identifier.into();
    }

    let table = match scope.kind {
        ExportScopeKind::SourceFile => create_identifier(EXPORTS_TABLE_NAME, None, None, None),
        ExportScopeKind::Namespace | ExportScopeKind::Enum => {
            let reference = identifier.source.unwrap_or(NodeIndex::NONE);
            match create_container_local_identifier(ctx, scope.container, reference) {
                Some(local) => local,
                None => return identifier.into(),
            }
        }
    };

    let key = identifier
        .original_name
        .clone()
        .unwrap_or_else(|| identifier.text.clone());
    trace!(table = %table.text, key = %key, "exported identifier");
    create_table_index_expression(table.into(), create_string_literal(key), identifier.source)
}
