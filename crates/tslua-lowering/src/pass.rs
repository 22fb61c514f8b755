//! Identifier lowering pass over a whole source file.
//!
//! Walks the tree in source order and lowers every identifier reference:
//! declaration names through `transform_declaration_name`, use sites through
//! `transform_identifier_expression`. The name after a `.` in a property
//! access is a table key, not a reference, and is skipped. Ambient
//! declarations emit nothing and are skipped whole.
//!
//! The pass keeps the context's scope stack in sync with the tree so every
//! symbol reference is recorded in the scopes enclosing it.

use crate::context::TransformationContext;
use crate::error::{LoweringError, LoweringResult};
use crate::identifier::{transform_declaration_name, transform_identifier_expression};
use crate::lua_ast::{LuaExpression, LuaIdentifier};
use crate::scope::{Scope, ScopeType};
use serde::Serialize;
use std::fmt;
use tracing::{debug, trace, warn};
use tslua_common::limits::MAX_AST_DEPTH;
use tslua_common::{CompilerOptions, Diagnostic};
use tslua_program::{Frontend, NodeData, NodeIndex, Symbol, SyntaxKind};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Lowered {
    Declaration(LuaIdentifier),
    Expression(LuaExpression),
}

impl fmt::Display for Lowered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declaration(ident) => write!(f, "{ident}"),
            Self::Expression(expr) => write!(f, "{expr}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoweredNode {
    pub source: NodeIndex,
    pub lowered: Lowered,
}

/// Result of lowering one file.
#[derive(Debug, Serialize)]
pub struct LoweredFile {
    /// Lowered references in source order.
    pub nodes: Vec<LoweredNode>,
    pub diagnostics: Vec<Diagnostic>,
    /// Closed scopes in the order they were closed; the file scope is last.
    pub scopes: Vec<Scope>,
}

impl LoweredFile {
    /// Lowered form of the reference at `source`.
    pub fn get(&self, source: NodeIndex) -> Option<&Lowered> {
        self.nodes
            .iter()
            .find(|node| node.source == source)
            .map(|node| &node.lowered)
    }
}

pub struct IdentifierLoweringPass<'a> {
    ctx: TransformationContext<'a>,
    nodes: Vec<LoweredNode>,
    closed_scopes: Vec<Scope>,
    /// Current recursion depth for stack overflow protection
    visit_depth: u32,
}

impl<'a> IdentifierLoweringPass<'a> {
    pub fn new(frontend: &'a dyn Frontend, options: CompilerOptions) -> Self {
        Self {
            ctx: TransformationContext::new(frontend, options),
            nodes: Vec::new(),
            closed_scopes: Vec::new(),
            visit_depth: 0,
        }
    }

    /// Lower every identifier reference under `source_file`.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn run(mut self, source_file: NodeIndex) -> LoweringResult<LoweredFile> {
        let frontend = self.ctx.frontend;
        let kind = frontend
            .kind(source_file)
            .ok_or(LoweringError::MissingNode(source_file))?;
        if kind != SyntaxKind::SourceFile {
            return Err(LoweringError::NotASourceFile {
                node: source_file,
                kind,
            });
        }
        debug!(file = frontend.file_name(), "lowering identifiers");

        self.visit(source_file)?;

        debug!(
            references = self.nodes.len(),
            symbols = self.ctx.symbols.len(),
            diagnostics = self.ctx.diagnostics.len(),
            "identifier lowering done"
        );
        Ok(LoweredFile {
            nodes: self.nodes,
            diagnostics: self.ctx.take_diagnostics(),
            scopes: self.closed_scopes,
        })
    }

    fn scope_type_for(kind: SyntaxKind) -> Option<ScopeType> {
        match kind {
            SyntaxKind::SourceFile => Some(ScopeType::FILE),
            SyntaxKind::FunctionDeclaration
            | SyntaxKind::FunctionExpression
            | SyntaxKind::ArrowFunction => Some(ScopeType::FUNCTION),
            SyntaxKind::ModuleDeclaration => Some(ScopeType::NAMESPACE),
            SyntaxKind::Block | SyntaxKind::ModuleBlock => Some(ScopeType::BLOCK),
            SyntaxKind::ForOfStatement | SyntaxKind::ForInStatement | SyntaxKind::ForStatement => {
                Some(ScopeType::LOOP)
            }
            _ => None,
        }
    }

    fn visit(&mut self, idx: NodeIndex) -> LoweringResult<()> {
        // Stack overflow protection: limit recursion depth
        if self.visit_depth >= MAX_AST_DEPTH {
            warn!(node = idx.0, "identifier pass exceeded maximum tree depth");
            return Ok(());
        }
        let frontend = self.ctx.frontend;
        let Some(node) = frontend.node(idx) else {
            return Err(LoweringError::MissingNode(idx));
        };

        self.visit_depth += 1;
        let scope = Self::scope_type_for(node.kind);

        let result = match &node.data {
            NodeData::Identifier(_) => self.lower_expression(idx),
            NodeData::Declaration(decl) if self.is_ambient_declaration(decl.name) => {
                trace!(node = idx.0, "skipping ambient declaration");
                Ok(())
            }
            NodeData::Declaration(decl) => {
                // Function and namespace names belong to the enclosing scope.
                if frontend.kind(decl.name) == Some(SyntaxKind::Identifier) {
                    self.lower_declaration_name(decl.name)?;
                } else if decl.name.is_some() {
                    self.visit(decl.name)?;
                }
                self.visit_children_in_scope(idx, scope, &decl.children)
            }
            NodeData::PropertyAccess(access) => self.visit(access.expression),
            _ => self.visit_children_in_scope(idx, scope, &node.children()),
        };

        self.visit_depth -= 1;
        result
    }

    fn visit_children_in_scope(
        &mut self,
        idx: NodeIndex,
        scope: Option<ScopeType>,
        children: &[NodeIndex],
    ) -> LoweringResult<()> {
        if let Some(kind) = scope {
            self.ctx.scopes.push(kind, idx);
        }
        let result = children.iter().try_for_each(|&child| self.visit(child));
        if scope.is_some()
            && let Some(closed) = self.ctx.scopes.pop()
        {
            self.closed_scopes.push(closed);
        }
        result
    }

    fn is_ambient_declaration(&self, name: NodeIndex) -> bool {
        let frontend = self.ctx.frontend;
        frontend
            .symbol_at_location(name)
            .and_then(|symbol| frontend.symbol(symbol))
            .is_some_and(Symbol::is_ambient)
    }

    fn lower_declaration_name(&mut self, name: NodeIndex) -> LoweringResult<()> {
        let lowered = transform_declaration_name(&mut self.ctx, name)?;
        self.nodes.push(LoweredNode {
            source: name,
            lowered: Lowered::Declaration(lowered),
        });
        Ok(())
    }

    fn lower_expression(&mut self, idx: NodeIndex) -> LoweringResult<()> {
        let lowered = transform_identifier_expression(&mut self.ctx, idx)?;
        self.nodes.push(LoweredNode {
            source: idx,
            lowered: Lowered::Expression(lowered),
        });
        Ok(())
    }
}

/// Lower every identifier reference in `frontend`'s source file rooted at `source_file`.
pub fn lower_identifiers(
    frontend: &dyn Frontend,
    options: CompilerOptions,
    source_file: NodeIndex,
) -> LoweringResult<LoweredFile> {
    IdentifierLoweringPass::new(frontend, options).run(source_file)
}
