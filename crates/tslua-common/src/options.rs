//! Compiler options consumed by the lowering passes.
//!
//! Options are read from the `tstl` section of a `tsconfig.json`, or from a
//! standalone JSON object carrying the same keys.

use crate::common::LuaTarget;
use serde::Deserialize;
use std::path::Path;

/// Options that influence identifier lowering.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    /// Lua dialect to generate code for.
    #[serde(default)]
    pub lua_target: LuaTarget,
}

#[derive(Debug, Default, Deserialize)]
struct TsConfig {
    #[serde(default)]
    tstl: Option<CompilerOptions>,
}

/// Failure while loading compiler options.
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid compiler options: {0}")]
    Json(#[from] serde_json::Error),
}

impl CompilerOptions {
    /// Options for a specific target with every other setting at its default.
    #[must_use]
    pub fn for_target(lua_target: LuaTarget) -> Self {
        Self { lua_target }
    }

    /// Parse a bare options object, e.g. `{ "luaTarget": "5.3" }`.
    pub fn from_json(text: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parse a `tsconfig.json` document and return its `tstl` section.
    ///
    /// A missing `tstl` section yields the defaults.
    pub fn from_tsconfig(text: &str) -> Result<Self, OptionsError> {
        let config: TsConfig = serde_json::from_str(text)?;
        Ok(config.tstl.unwrap_or_default())
    }

    /// Read and parse a `tsconfig.json` file.
    pub fn from_tsconfig_file(path: &Path) -> Result<Self, OptionsError> {
        let text = std::fs::read_to_string(path).map_err(|source| OptionsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_tsconfig(&text)
    }
}
