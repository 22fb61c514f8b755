use super::*;
use std::io::Write;

#[test]
fn test_default_options_target_universal() {
    let options = CompilerOptions::default();
    assert_eq!(options.lua_target, LuaTarget::Universal);
    assert!(!options.lua_target.allows_unicode_identifiers());
}

#[test]
fn test_options_from_json_reads_lua_target() {
    let options = CompilerOptions::from_json(r#"{ "luaTarget": "5.3" }"#).expect("valid options");
    assert_eq!(options.lua_target, LuaTarget::Lua53);

    let jit = CompilerOptions::from_json(r#"{ "luaTarget": "JIT" }"#).expect("valid options");
    assert_eq!(jit.lua_target, LuaTarget::LuaJit);
    assert!(jit.lua_target.allows_unicode_identifiers());
}

#[test]
fn test_options_from_json_missing_target_defaults() {
    let options = CompilerOptions::from_json("{}").expect("valid options");
    assert_eq!(options, CompilerOptions::default());
}

#[test]
fn test_options_from_json_rejects_unknown_target() {
    let err = CompilerOptions::from_json(r#"{ "luaTarget": "6.0" }"#)
        .expect_err("6.0 is not a Lua target");
    assert!(matches!(err, OptionsError::Json(_)));
}

#[test]
fn test_options_from_tsconfig_section() {
    let text = r#"{
        "compilerOptions": { "strict": true },
        "tstl": { "luaTarget": "5.1" }
    }"#;
    let options = CompilerOptions::from_tsconfig(text).expect("valid tsconfig");
    assert_eq!(options.lua_target, LuaTarget::Lua51);

    let without = CompilerOptions::from_tsconfig(r#"{ "compilerOptions": {} }"#)
        .expect("valid tsconfig");
    assert_eq!(without.lua_target, LuaTarget::Universal);
}

#[test]
fn test_options_from_tsconfig_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, r#"{{ "tstl": {{ "luaTarget": "5.4" }} }}"#).expect("write tsconfig");

    let options = CompilerOptions::from_tsconfig_file(file.path()).expect("readable tsconfig");
    assert_eq!(options.lua_target, LuaTarget::Lua54);
}

#[test]
fn test_options_from_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("tsconfig.json");
    let err = CompilerOptions::from_tsconfig_file(&missing).expect_err("file does not exist");
    assert!(matches!(err, OptionsError::Io { .. }));
    assert!(err.to_string().contains("tsconfig.json"));
}

#[test]
fn test_lua_target_spelling_round_trips() {
    for target in [
        LuaTarget::Universal,
        LuaTarget::Lua50,
        LuaTarget::Lua51,
        LuaTarget::Lua52,
        LuaTarget::Lua53,
        LuaTarget::Lua54,
        LuaTarget::LuaJit,
        LuaTarget::Luau,
    ] {
        let json = format!(r#"{{ "luaTarget": "{}" }}"#, target.as_str());
        let options = CompilerOptions::from_json(&json).expect("spelling is accepted");
        assert_eq!(options.lua_target, target);
    }
}
