//! Identifier lowering.
//!
//! `transform_identifier` lowers a referenced name to a Lua identifier.
//! `transform_identifier_expression` lowers a name used as a value and may
//! instead produce an export table access, `nil` or a builtin replacement.
//! `transform_declaration_name` lowers the name a declaration binds; it is
//! not a use of the declared value, so no extension checks apply.
//!
//! References are checked for extension misuse first, in this order:
//! 1. `$multi` or `$range` used as a value: diagnostic, placeholder, done.
//! 2. operator mapping or table extension used as a value: diagnostic only.
//! 3. `@forRange` function outside a `for...of` header: diagnostic only.

use crate::builtins::transform_builtin_identifier_expression;
use crate::context::TransformationContext;
use crate::diagnostics::{
    invalid_for_range_call, invalid_multi_function_use, invalid_operator_mapping_use,
    invalid_range_use, invalid_table_extension_use,
};
use crate::error::{LoweringError, LoweringResult};
use crate::export::{create_exported_identifier, get_symbol_export_scope};
use crate::language_extensions::{
    ExtensionKind, get_extension_kind_for_node, is_bare_value, is_for_range_type,
};
use crate::lua_ast::{
    LuaExpression, LuaIdentifier, create_anonymous_identifier, create_identifier,
    create_nil_literal,
};
use crate::safe_names::has_unsafe_identifier_name;
use crate::symbols::get_identifier_symbol_id;
use tracing::debug;
use tslua_program::{Frontend, IdentifierData, Node, NodeIndex, SyntaxKind};

const FOR_RANGE_MISUSE_REASON: &str = "can be used only as an iterable in a for...of loop";

fn expect_identifier(
    frontend: &dyn Frontend,
    identifier: NodeIndex,
) -> LoweringResult<&IdentifierData> {
    let node = frontend
        .node(identifier)
        .ok_or(LoweringError::MissingNode(identifier))?;
    node.as_identifier().ok_or(LoweringError::NotAnIdentifier {
        node: identifier,
        kind: node.kind,
    })
}

/// Whether the call enclosing `identifier` is the iterated expression of a `for...of`.
fn is_in_for_of_header_call(frontend: &dyn Frontend, identifier: NodeIndex) -> bool {
    let Some(call) =
        frontend.find_ancestor(identifier, &|node: &Node| node.kind == SyntaxKind::CallExpression)
    else {
        return false;
    };
    frontend
        .node(frontend.parent(call))
        .and_then(Node::as_for_of)
        .is_some_and(|for_of| for_of.expression == call)
}

/// Report extension misuse at `identifier`.
///
/// Returns `false` when the reference cannot be lowered at all.
fn check_extension_use(ctx: &mut TransformationContext<'_>, identifier: NodeIndex) -> bool {
    let frontend = ctx.frontend;

    if let Some(kind) = get_extension_kind_for_node(frontend, identifier)
        && is_bare_value(frontend, identifier)
    {
        debug!(node = identifier.0, ?kind, "extension used as a value");
        match kind {
            ExtensionKind::MultiFunction => {
                ctx.push_diagnostic(invalid_multi_function_use(frontend, identifier));
                return false;
            }
            ExtensionKind::RangeFunction => {
                ctx.push_diagnostic(invalid_range_use(frontend, identifier));
                return false;
            }
            ExtensionKind::Operator { .. } => {
                ctx.push_diagnostic(invalid_operator_mapping_use(frontend, identifier));
            }
            ExtensionKind::TableGet { .. } | ExtensionKind::TableSet { .. } | ExtensionKind::TableNew => {
                ctx.push_diagnostic(invalid_table_extension_use(frontend, identifier));
            }
            ExtensionKind::MultiType | ExtensionKind::IterableType => {}
        }
    }

    if is_for_range_type(frontend, identifier) && !is_in_for_of_header_call(frontend, identifier) {
        ctx.push_diagnostic(invalid_for_range_call(
            frontend,
            identifier,
            FOR_RANGE_MISUSE_REASON,
        ));
    }

    true
}

/// Lower a name to a Lua identifier.
pub fn transform_identifier(
    ctx: &mut TransformationContext<'_>,
    identifier: NodeIndex,
) -> LoweringResult<LuaIdentifier> {
    let frontend = ctx.frontend;
    let text = expect_identifier(frontend, identifier)?.escaped_text.as_str();

    if !check_extension_use(ctx, identifier) {
        return Ok(create_anonymous_identifier(Some(identifier)));
    }

    Ok(lower_name(ctx, identifier, text))
}

/// Lower the name bound by a declaration.
pub fn transform_declaration_name(
    ctx: &mut TransformationContext<'_>,
    name: NodeIndex,
) -> LoweringResult<LuaIdentifier> {
    let text = expect_identifier(ctx.frontend, name)?.escaped_text.as_str();
    Ok(lower_name(ctx, name, text))
}

fn lower_name(
    ctx: &mut TransformationContext<'_>,
    identifier: NodeIndex,
    text: &str,
) -> LuaIdentifier {
    let name = if has_unsafe_identifier_name(ctx, identifier) {
        ctx.safe_names.safe_name(text, &ctx.options)
    } else {
        ctx.safe_names.reserve(text);
        text.to_string()
    };

    let symbol_id = get_identifier_symbol_id(ctx, identifier);
    create_identifier(name, Some(identifier), symbol_id, Some(text.to_string()))
}

/// Lower a name used as a value.
pub fn transform_identifier_expression(
    ctx: &mut TransformationContext<'_>,
    identifier: NodeIndex,
) -> LoweringResult<LuaExpression> {
    let frontend = ctx.frontend;
    let data = expect_identifier(frontend, identifier)?;

    if let Some(symbol) = frontend.symbol_at_location(identifier)
        && let Some(scope) = get_symbol_export_scope(frontend, symbol)
    {
        let mut lowered = transform_identifier(ctx, identifier)?;
        if lowered.exportable
            && let Some(sym) = frontend.symbol(symbol)
        {
            lowered.original_name = Some(sym.name.clone());
        }
        return Ok(create_exported_identifier(ctx, lowered, scope));
    }

    if data.original_keyword == Some(SyntaxKind::UndefinedKeyword) {
        return Ok(create_nil_literal());
    }

    if let Some(builtin) = transform_builtin_identifier_expression(ctx, identifier) {
        return Ok(builtin);
    }

    transform_identifier(ctx, identifier).map(LuaExpression::from)
}
