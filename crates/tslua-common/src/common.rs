//! Common enums shared between the option loader and the lowering passes.

use serde::{Deserialize, Serialize};

/// Lua dialect the output is generated for.
///
/// Serialized with the spelling used in `tsconfig.json` (`"5.1"`, `"JIT"`, ...).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LuaTarget {
    #[default]
    #[serde(rename = "universal", alias = "Universal")]
    Universal,
    #[serde(rename = "5.0")]
    Lua50,
    #[serde(rename = "5.1")]
    Lua51,
    #[serde(rename = "5.2")]
    Lua52,
    #[serde(rename = "5.3")]
    Lua53,
    #[serde(rename = "5.4")]
    Lua54,
    #[serde(rename = "JIT", alias = "jit")]
    LuaJit,
    #[serde(rename = "Luau", alias = "luau")]
    Luau,
}

impl LuaTarget {
    /// LuaJIT accepts any byte >= 0x80 inside identifiers.
    #[must_use]
    pub const fn allows_unicode_identifiers(self) -> bool {
        matches!(self, Self::LuaJit)
    }

    /// Spelling used in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Universal => "universal",
            Self::Lua50 => "5.0",
            Self::Lua51 => "5.1",
            Self::Lua52 => "5.2",
            Self::Lua53 => "5.3",
            Self::Lua54 => "5.4",
            Self::LuaJit => "JIT",
            Self::Luau => "Luau",
        }
    }
}
