//! Per-compilation-unit state shared by the lowering functions.

use crate::safe_names::SafeNameRegistry;
use crate::scope::ScopeStack;
use crate::symbols::SymbolTracker;
use tslua_common::{CompilerOptions, Diagnostic};
use tslua_program::Frontend;

/// State of one compilation unit.
///
/// Owns every cache that must be consistent across a file: symbol ids, the
/// safe-name collision set and the scope stack. Diagnostics accumulate in
/// reporting order and are never cleared by the lowering itself.
pub struct TransformationContext<'a> {
    pub frontend: &'a dyn Frontend,
    pub options: CompilerOptions,
    pub diagnostics: Vec<Diagnostic>,
    pub symbols: SymbolTracker,
    pub safe_names: SafeNameRegistry,
    pub scopes: ScopeStack,
}

impl<'a> TransformationContext<'a> {
    pub fn new(frontend: &'a dyn Frontend, options: CompilerOptions) -> Self {
        Self {
            frontend,
            options,
            diagnostics: Vec::new(),
            symbols: SymbolTracker::new(),
            safe_names: SafeNameRegistry::new(),
            scopes: ScopeStack::new(),
        }
    }

    pub fn push_diagnostic(&mut self, diagnostic: Diagnostic) {
        tracing::debug!(
            code = diagnostic.code,
            start = diagnostic.start,
            "{}",
            diagnostic.message_text
        );
        self.diagnostics.push(diagnostic);
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}
