//! Tracing configuration for debugging lowering decisions.
//!
//! Supports two output formats controlled by `TSLUA_LOG_FORMAT`:
//!
//! - `text` (default): Standard `tracing-subscriber` flat output
//! - `json`: One JSON object per span/event, machine-readable
//!
//! ## Quick start
//!
//! ```bash
//! # Every symbol id, safe name and export rewrite
//! TSLUA_LOG=tslua_lowering=trace cargo test -p tslua
//!
//! # JSON for tooling
//! TSLUA_LOG=debug TSLUA_LOG_FORMAT=json cargo test -p tslua
//! ```
//!
//! The subscriber is only initialised when `TSLUA_LOG` (or `RUST_LOG`) is set,
//! so there is zero overhead in normal builds.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a `TSLUA_LOG_FORMAT` value.
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("TSLUA_LOG_FORMAT").unwrap_or_default())
    }
}

/// Build an `EnvFilter` from `TSLUA_LOG`, falling back to `RUST_LOG`.
fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("TSLUA_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `TSLUA_LOG` nor `RUST_LOG` is set. Output goes
/// to stderr. Calling it again after a subscriber is installed is a no-op.
pub fn init_tracing() {
    let has_tslua_log = std::env::var("TSLUA_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_tslua_log && !has_rust_log {
        return;
    }

    let filter = build_filter();
    let result = match LogFormat::from_env() {
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(json_layer).try_init()
        }
        LogFormat::Text => {
            let text_layer = fmt::layer().with_writer(std::io::stderr);
            Registry::default().with(filter).with(text_layer).try_init()
        }
    };
    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
