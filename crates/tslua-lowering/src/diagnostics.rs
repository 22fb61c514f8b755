//! Diagnostic constructors for identifier lowering.
//!
//! Each constructor reports at the full range of the offending node.

use tslua_common::Diagnostic;
use tslua_common::diagnostics::{diagnostic_codes, get_diagnostic_message};
use tslua_program::{Frontend, NodeIndex};

fn create_diagnostic_for_node(
    frontend: &dyn Frontend,
    node: NodeIndex,
    code: u32,
    args: &[&str],
) -> Diagnostic {
    let (start, length) = frontend
        .node(node)
        .map_or((0, 0), |n| (n.pos, n.range().len()));
    let file = frontend.file_name().to_string();
    match get_diagnostic_message(code) {
        Some(message) => Diagnostic::from_message(message, file, start, length, args),
        None => Diagnostic::error(file, start, length, format!("Unknown diagnostic {code}"), code),
    }
}

pub fn invalid_ambient_identifier_name(
    frontend: &dyn Frontend,
    node: NodeIndex,
    name: &str,
) -> Diagnostic {
    create_diagnostic_for_node(
        frontend,
        node,
        diagnostic_codes::INVALID_AMBIENT_IDENTIFIER_NAME,
        &[name],
    )
}

pub fn invalid_multi_function_use(frontend: &dyn Frontend, node: NodeIndex) -> Diagnostic {
    create_diagnostic_for_node(frontend, node, diagnostic_codes::INVALID_MULTI_FUNCTION_USE, &[])
}

pub fn invalid_range_use(frontend: &dyn Frontend, node: NodeIndex) -> Diagnostic {
    create_diagnostic_for_node(frontend, node, diagnostic_codes::INVALID_RANGE_USE, &[])
}

pub fn invalid_for_range_call(frontend: &dyn Frontend, node: NodeIndex, reason: &str) -> Diagnostic {
    create_diagnostic_for_node(
        frontend,
        node,
        diagnostic_codes::INVALID_FOR_RANGE_CALL,
        &[reason],
    )
}

pub fn invalid_operator_mapping_use(frontend: &dyn Frontend, node: NodeIndex) -> Diagnostic {
    create_diagnostic_for_node(
        frontend,
        node,
        diagnostic_codes::INVALID_OPERATOR_MAPPING_USE,
        &[],
    )
}

pub fn invalid_table_extension_use(frontend: &dyn Frontend, node: NodeIndex) -> Diagnostic {
    create_diagnostic_for_node(
        frontend,
        node,
        diagnostic_codes::INVALID_TABLE_EXTENSION_USE,
        &[],
    )
}
