//! Safe Lua names for source identifiers.
//!
//! A name is unsafe when it is not a valid Lua identifier for the configured
//! target, is a Lua reserved word, or shadows a Lua standard-library global.
//! Unsafe names are emitted as `____` followed by the name with every invalid
//! character replaced by `_` and its uppercase hex code point.
//!
//! Source names that already start with `____` are escaped as well, which
//! keeps them apart from every escaped name.
//!
//! That escaping is not injective (`a$_24` and `a_24$` both become
//! `____a_24_24`), so the `SafeNameRegistry` hands out numeric suffixes to keep
//! every raw name distinct within a compilation unit.

use crate::context::TransformationContext;
use crate::diagnostics::invalid_ambient_identifier_name;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt::Write as _;
use tracing::trace;
use tslua_common::lua::{SAFE_NAME_PREFIX, is_lua_builtin, is_lua_keyword};
use tslua_common::{CompilerOptions, LuaTarget};
use tslua_program::{NodeIndex, SymbolRef};

fn is_valid_start_char(c: char, target: LuaTarget) -> bool {
    c.is_ascii_alphabetic() || c == '_' || (!c.is_ascii() && target.allows_unicode_identifiers())
}

fn is_valid_char(c: char, target: LuaTarget) -> bool {
    is_valid_start_char(c, target) || c.is_ascii_digit()
}

/// Whether `name` matches the Lua identifier grammar for the configured target.
///
/// LuaJIT accepts any non-ASCII character in identifiers.
pub fn is_valid_lua_identifier(name: &str, options: &CompilerOptions) -> bool {
    let target = options.lua_target;
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_valid_start_char(first, target) => {
            chars.all(|c| is_valid_char(c, target)) && !is_lua_keyword(name)
        }
        _ => false,
    }
}

/// Whether `name` must be rewritten before it can be emitted.
///
/// Names carrying `SAFE_NAME_PREFIX` are reserved for escaped output, so a
/// source name like `____end` cannot clash with the escaped form of `end`.
pub fn is_unsafe_name(name: &str, options: &CompilerOptions) -> bool {
    !is_valid_lua_identifier(name, options)
        || is_lua_keyword(name)
        || is_lua_builtin(name)
        || name.starts_with(SAFE_NAME_PREFIX)
}

/// Replace every character that cannot appear in a Lua identifier with `_XX`.
pub fn fix_invalid_lua_identifier(name: &str, options: &CompilerOptions) -> String {
    let target = options.lua_target;
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if is_valid_char(c, target) {
            out.push(c);
        } else {
            let _ = write!(out, "_{:X}", u32::from(c));
        }
    }
    out
}

/// Escaped form of `name`, without collision handling.
pub fn create_safe_name(name: &str, options: &CompilerOptions) -> String {
    format!("{SAFE_NAME_PREFIX}{}", fix_invalid_lua_identifier(name, options))
}

/// Collision-free safe names for one compilation unit.
#[derive(Debug, Default)]
pub struct SafeNameRegistry {
    /// Raw unsafe name -> assigned output name.
    assigned: FxHashMap<String, String>,
    /// Every output name handed out so far, escaped or not.
    used: FxHashSet<String>,
}

impl SafeNameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a name emitted unchanged.
    pub fn reserve(&mut self, name: &str) {
        if !self.used.contains(name) {
            self.used.insert(name.to_string());
        }
    }

    /// Output name for an unsafe `raw` name.
    ///
    /// The same raw name always gets the same output name; different raw
    /// names never share one.
    pub fn safe_name(&mut self, raw: &str, options: &CompilerOptions) -> String {
        if let Some(assigned) = self.assigned.get(raw) {
            return assigned.clone();
        }
        let base = create_safe_name(raw, options);
        let mut candidate = base.clone();
        let mut suffix = 1u32;
        while self.used.contains(&candidate) {
            candidate = format!("{base}_{suffix}");
            suffix += 1;
        }
        trace!(raw, safe = %candidate, "assigned safe name");
        self.used.insert(candidate.clone());
        self.assigned.insert(raw.to_string(), candidate.clone());
        candidate
    }

    /// `raw` unchanged when safe, otherwise its registered safe name.
    pub fn mangle(&mut self, raw: &str, options: &CompilerOptions) -> String {
        if is_unsafe_name(raw, options) {
            self.safe_name(raw, options)
        } else {
            self.reserve(raw);
            raw.to_string()
        }
    }
}

/// Whether references to `symbol` must be emitted under a safe name.
///
/// Ambient declarations are emitted as written, so an ambient name that is
/// not a valid Lua identifier is reported at `reference`. Exported symbols
/// live in their container's table and keep their name.
pub fn has_unsafe_symbol_name(
    ctx: &mut TransformationContext<'_>,
    symbol: SymbolRef,
    reference: NodeIndex,
) -> bool {
    let frontend = ctx.frontend;
    let Some(sym) = frontend.symbol(symbol) else {
        return false;
    };

    if sym.is_ambient() {
        if is_valid_lua_identifier(&sym.name, &ctx.options) {
            return false;
        }
        let diagnostic = invalid_ambient_identifier_name(frontend, reference, &sym.name);
        ctx.push_diagnostic(diagnostic);
        return true;
    }

    is_unsafe_name(&sym.name, &ctx.options) && !sym.is_exported()
}

/// Whether `identifier` must be emitted under a safe name.
///
/// Resolves through the identifier's symbol when it has one; otherwise the
/// text alone decides.
pub fn has_unsafe_identifier_name(ctx: &mut TransformationContext<'_>, identifier: NodeIndex) -> bool {
    if let Some(symbol) = ctx.frontend.symbol_at_location(identifier) {
        return has_unsafe_symbol_name(ctx, symbol, identifier);
    }
    ctx.frontend
        .identifier_text(identifier)
        .is_some_and(|text| is_unsafe_name(text, &ctx.options))
}
