use super::diagnostics::{diagnostic_codes, get_diagnostic_message, get_message_template};
use super::*;

#[test]
fn test_format_message_fills_placeholders() {
    assert_eq!(
        format_message("Invalid @forRange call: {0}.", &["nope"]),
        "Invalid @forRange call: nope."
    );
    assert_eq!(format_message("{0} and {1}", &["a", "b"]), "a and b");
    assert_eq!(format_message("no placeholders", &["unused"]), "no placeholders");
}

#[test]
fn test_every_code_has_a_message() {
    for code in [
        diagnostic_codes::INVALID_AMBIENT_IDENTIFIER_NAME,
        diagnostic_codes::INVALID_MULTI_FUNCTION_USE,
        diagnostic_codes::INVALID_RANGE_USE,
        diagnostic_codes::INVALID_FOR_RANGE_CALL,
        diagnostic_codes::INVALID_OPERATOR_MAPPING_USE,
        diagnostic_codes::INVALID_TABLE_EXTENSION_USE,
    ] {
        let message = get_diagnostic_message(code).expect("registered code");
        assert_eq!(message.category, DiagnosticCategory::Error);
        assert!(!message.message.is_empty());
    }
    assert!(get_message_template(1).is_none());
}

#[test]
fn test_diagnostic_from_message() {
    let message =
        get_diagnostic_message(diagnostic_codes::INVALID_AMBIENT_IDENTIFIER_NAME).expect("code");
    let diag = Diagnostic::from_message(message, "main.ts".to_string(), 10, 4, &["$foo"]);

    assert_eq!(diag.code, diagnostic_codes::INVALID_AMBIENT_IDENTIFIER_NAME);
    assert_eq!(diag.start, 10);
    assert_eq!(diag.end(), 14);
    assert_eq!(
        diag.message_text,
        "Invalid ambient identifier name '$foo'. Ambient identifiers must be valid lua identifiers."
    );
}

#[test]
fn test_diagnostic_serializes_for_snapshots() {
    let diag = Diagnostic::error("a.ts".to_string(), 0, 3, "boom".to_string(), 7);
    let value = serde_json::to_value(&diag).expect("serializable");
    assert_eq!(
        value,
        serde_json::json!({
            "file": "a.ts",
            "start": 0,
            "length": 3,
            "message_text": "boom",
            "category": "Error",
            "code": 7
        })
    );
}

#[test]
fn test_lua_tables() {
    assert!(lua::is_lua_keyword("end"));
    assert!(lua::is_lua_keyword("bit32"));
    assert!(!lua::is_lua_keyword("foo"));
    assert!(lua::is_lua_builtin("print"));
    assert!(!lua::is_lua_builtin("end"));
}
