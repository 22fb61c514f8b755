//! Common types and utilities for the tslua compiler.
//!
//! This crate provides foundational types used across all tslua crates:
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`, codes and message templates)
//! - Target selection (`LuaTarget`)
//! - Compiler options (`CompilerOptions`)
//! - Fixed Lua configuration tables (reserved words, builtin globals)
//! - Compiler limits and thresholds

// Diagnostic records and the message table
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory, DiagnosticMessage, format_message};

// Lua target versions
pub mod common;
pub use common::LuaTarget;

// Compiler options
pub mod options;
pub use options::{CompilerOptions, OptionsError};

// Fixed tables describing the target language
pub mod lua;

// Centralized limits and thresholds
pub mod limits;

#[cfg(test)]
#[path = "../tests/options_tests.rs"]
mod options_tests;

#[cfg(test)]
#[path = "../tests/diagnostics_tests.rs"]
mod diagnostics_tests;
