//! Standard-library globals without a same-named Lua counterpart.

use crate::context::TransformationContext;
use crate::lua_ast::{
    LuaExpression, create_binary_expression, create_identifier, create_numeric_literal,
    create_string_literal, create_table_index_expression,
};
use tslua_program::{NodeIndex, SymbolFlags};

/// Lua replacement for a reference to a standard-library global, if it needs one.
///
/// Only references that resolve to the standard library declaration are
/// rewritten; a user binding named `NaN` is left alone.
pub fn transform_builtin_identifier_expression(
    ctx: &TransformationContext<'_>,
    identifier: NodeIndex,
) -> Option<LuaExpression> {
    let frontend = ctx.frontend;
    let symbol = frontend.symbol_at_location(identifier)?;
    if !frontend
        .symbol(symbol)?
        .flags
        .contains(SymbolFlags::STANDARD_LIBRARY)
    {
        return None;
    }
    let source = Some(identifier);
    match frontend.identifier_text(identifier)? {
        "NaN" => Some(create_binary_expression(
            create_numeric_literal("0"),
            "/",
            create_numeric_literal("0"),
        )),
        "Infinity" => Some(create_table_index_expression(
            create_identifier("math", None, None, None).into(),
            create_string_literal("huge"),
            source,
        )),
        "globalThis" => Some(create_identifier("_G", source, None, Some("globalThis".to_string())).into()),
        _ => None,
    }
}
