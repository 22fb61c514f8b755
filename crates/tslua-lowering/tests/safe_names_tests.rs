//! Tests for safe Lua names.

use super::safe_names::*;
use crate::test_fixtures::Fixture;
use tslua_common::diagnostics::diagnostic_codes;
use tslua_common::{CompilerOptions, LuaTarget};
use tslua_program::SymbolFlags;

fn options() -> CompilerOptions {
    CompilerOptions::default()
}

#[test]
fn test_safe_names_are_unchanged() {
    let mut registry = SafeNameRegistry::new();
    for name in ["foo", "_bar", "x1", "camelCase", "__index"] {
        assert!(!is_unsafe_name(name, &options()), "{name} should be safe");
        assert_eq!(registry.mangle(name, &options()), name);
    }
}

#[test]
fn test_unsafe_names_are_rewritten() {
    let mut registry = SafeNameRegistry::new();
    let cases = [
        ("end", "____end"),
        ("local", "____local"),
        ("bit32", "____bit32"),
        ("print", "____print"),
        ("type", "____type"),
        ("$", "_____24"),
        ("a-b", "____a_2Db"),
        ("my var", "____my_20var"),
        ("1st", "____1st"),
    ];
    for (raw, expected) in cases {
        let mangled = registry.mangle(raw, &options());
        assert_eq!(mangled, expected, "mangling {raw}");
        assert_ne!(mangled, raw);
        assert!(is_valid_lua_identifier(&mangled, &options()), "{mangled} is not valid");
    }
}

#[test]
fn test_mangling_is_stable() {
    let mut registry = SafeNameRegistry::new();
    let first = registry.mangle("$x", &options());
    let second = registry.mangle("$x", &options());
    assert_eq!(first, second);
}

#[test]
fn test_escaping_collisions_get_suffixes() {
    // Both spell `____a_24_24` once escaped.
    assert_eq!(create_safe_name("a$_24", &options()), "____a_24_24");
    assert_eq!(create_safe_name("a_24$", &options()), "____a_24_24");

    let mut registry = SafeNameRegistry::new();
    let first = registry.mangle("a$_24", &options());
    let second = registry.mangle("a_24$", &options());
    assert_eq!(first, "____a_24_24");
    assert_eq!(second, "____a_24_24_1");

    // Stable after the collision too.
    assert_eq!(registry.mangle("a_24$", &options()), second);
    assert_eq!(registry.mangle("a$_24", &options()), first);
}

#[test]
fn test_escaped_name_avoids_names_already_emitted() {
    let mut registry = SafeNameRegistry::new();
    assert_eq!(registry.mangle("____end", &options()), "________end");
    assert_eq!(registry.mangle("end", &options()), "____end");
    assert_eq!(registry.mangle("________end", &options()), "____________end");
}

#[test]
fn test_prefixed_source_name_never_reuses_escaped_name() {
    let mut registry = SafeNameRegistry::new();
    let escaped = registry.mangle("end", &options());
    let prefixed = registry.mangle("____end", &options());
    assert_eq!(escaped, "____end");
    assert_ne!(prefixed, escaped);
    assert_eq!(prefixed, "________end");
    assert!(is_unsafe_name("____end", &options()));
    assert!(is_unsafe_name("____", &options()));
}

#[test]
fn test_unicode_identifiers_depend_on_target() {
    let universal = CompilerOptions::default();
    let jit = CompilerOptions::for_target(LuaTarget::LuaJit);

    assert!(!is_valid_lua_identifier("café", &universal));
    assert!(is_valid_lua_identifier("café", &jit));
    assert_eq!(fix_invalid_lua_identifier("café", &universal), "caf_E9");
    assert_eq!(fix_invalid_lua_identifier("café", &jit), "café");
}

#[test]
fn test_keywords_are_not_valid_identifiers() {
    assert!(!is_valid_lua_identifier("nil", &options()));
    assert!(!is_valid_lua_identifier("", &options()));
    // Builtins are valid identifiers, just unsafe to shadow.
    assert!(is_valid_lua_identifier("print", &options()));
    assert!(is_unsafe_name("print", &options()));
}

#[test]
fn test_ambient_invalid_name_is_reported_and_mangled() {
    let mut fixture = Fixture::new();
    let symbol = fixture.symbol("$foo", SymbolFlags::VARIABLE | SymbolFlags::AMBIENT);
    let reference = fixture.reference(symbol);

    let mut ctx = fixture.context();
    assert!(has_unsafe_identifier_name(&mut ctx, reference));
    assert_eq!(ctx.diagnostics.len(), 1);
    let diagnostic = &ctx.diagnostics[0];
    assert_eq!(diagnostic.code, diagnostic_codes::INVALID_AMBIENT_IDENTIFIER_NAME);
    assert_eq!(
        diagnostic.message_text,
        "Invalid ambient identifier name '$foo'. Ambient identifiers must be valid lua identifiers."
    );
    assert_eq!((diagnostic.start, diagnostic.length), (0, 4));
}

#[test]
fn test_ambient_valid_name_is_kept() {
    let mut fixture = Fixture::new();
    let symbol = fixture.symbol("print", SymbolFlags::FUNCTION | SymbolFlags::AMBIENT);
    let reference = fixture.reference(symbol);

    let mut ctx = fixture.context();
    assert!(!has_unsafe_identifier_name(&mut ctx, reference));
    assert!(ctx.diagnostics.is_empty());
}

#[test]
fn test_exported_unsafe_name_is_kept() {
    let mut fixture = Fixture::new();
    let exported = fixture.symbol("end", SymbolFlags::VARIABLE | SymbolFlags::EXPORTED);
    let local = fixture.symbol("end", SymbolFlags::VARIABLE);
    let exported_ref = fixture.reference(exported);
    let local_ref = fixture.reference(local);

    let mut ctx = fixture.context();
    assert!(!has_unsafe_identifier_name(&mut ctx, exported_ref));
    assert!(has_unsafe_identifier_name(&mut ctx, local_ref));
    assert!(ctx.diagnostics.is_empty());
}

#[test]
fn test_unresolved_identifier_checked_by_text() {
    let mut fixture = Fixture::new();
    let unsafe_ref = fixture.ident("type");
    let safe_ref = fixture.ident("value");

    let mut ctx = fixture.context();
    assert!(has_unsafe_identifier_name(&mut ctx, unsafe_ref));
    assert!(!has_unsafe_identifier_name(&mut ctx, safe_ref));
    assert!(ctx.diagnostics.is_empty());
}

#[test]
fn test_ambient_unicode_name_depends_on_target() {
    let mut fixture = Fixture::new();
    let symbol = fixture.symbol("π", SymbolFlags::VARIABLE | SymbolFlags::AMBIENT);
    let reference = fixture.reference(symbol);

    let mut jit = fixture.context_for(LuaTarget::LuaJit);
    assert!(!has_unsafe_identifier_name(&mut jit, reference));
    assert!(jit.diagnostics.is_empty());

    let mut universal = fixture.context_for(LuaTarget::Universal);
    assert!(has_unsafe_identifier_name(&mut universal, reference));
    assert_eq!(universal.diagnostics.len(), 1);
}
