//! Fixed tables describing the Lua target language.
//!
//! These tables are configuration, not computed data: the lowering passes only
//! read them.

use rustc_hash::FxHashSet;
use std::sync::LazyLock;

/// Literal spelling of the null-equivalent value.
pub const NIL_LITERAL: &str = "nil";

/// Name of the table holding a module file's exports.
pub const EXPORTS_TABLE_NAME: &str = "____exports";

/// Prefix prepended to identifiers that cannot be emitted as-is.
pub const SAFE_NAME_PREFIX: &str = "____";

/// Text of a synthesized identifier that nothing can refer to.
pub const ANONYMOUS_IDENTIFIER_TEXT: &str = "____";

/// Lua reserved words, plus the bit libraries that several runtimes inject as globals.
pub const LUA_KEYWORDS: &[&str] = &[
    "and", "bit", "bit32", "break", "do", "else", "elseif", "end", "false", "for", "function",
    "goto", "if", "in", "local", "nil", "not", "or", "repeat", "return", "then", "true", "until",
    "while",
];

/// Globals of the Lua standard library that user code must not shadow.
pub const LUA_BUILTINS: &[&str] = &[
    "_G", "assert", "coroutine", "debug", "error", "ipairs", "math", "pairs", "pcall", "print",
    "rawget", "rawequal", "rawlen", "rawset", "require", "select", "string", "table", "type",
    "unpack", "xpcall",
];

static KEYWORD_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| LUA_KEYWORDS.iter().copied().collect());

static BUILTIN_SET: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| LUA_BUILTINS.iter().copied().collect());

/// Whether `name` is a Lua reserved word.
#[must_use]
pub fn is_lua_keyword(name: &str) -> bool {
    KEYWORD_SET.contains(name)
}

/// Whether `name` is a Lua standard-library global.
#[must_use]
pub fn is_lua_builtin(name: &str) -> bool {
    BUILTIN_SET.contains(name)
}
