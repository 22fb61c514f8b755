//! Arena-backed `Frontend` implementation.
//!
//! `Program` owns the tree, the type table and the symbol table of one source
//! file, plus the checker's answers (node -> type, node -> symbol). Trees are
//! built bottom-up with the node constructors below; a composite node's range
//! covers its children.

use crate::arena::NodeArena;
use crate::base::{NodeIndex, TextRange};
use crate::frontend::Frontend;
use crate::node::{
    CallData, DeclarationData, ForOfData, IdentifierData, Node, NodeData, PropertyAccessData,
};
use crate::symbols::{Symbol, SymbolRef, SymbolTable};
use crate::syntax_kind::SyntaxKind;
use crate::types::{TypeData, TypeId, TypeTable};
use rustc_hash::FxHashMap;

#[derive(Debug, Default)]
pub struct Program {
    file_name: String,
    pub arena: NodeArena,
    pub types: TypeTable,
    pub symbols: SymbolTable,
    node_types: FxHashMap<NodeIndex, TypeId>,
    node_symbols: FxHashMap<NodeIndex, SymbolRef>,
    root: NodeIndex,
}

impl Program {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            root: NodeIndex::NONE,
            ..Self::default()
        }
    }

    /// The source file node, once `source_file` has been called.
    pub fn root(&self) -> NodeIndex {
        self.root
    }

    // =========================================================================
    // Checker answers
    // =========================================================================

    pub fn set_type(&mut self, idx: NodeIndex, type_id: TypeId) {
        self.node_types.insert(idx, type_id);
    }

    /// Resolve the name at `idx` to `symbol`.
    pub fn bind(&mut self, idx: NodeIndex, symbol: SymbolRef) {
        self.node_symbols.insert(idx, symbol);
    }

    pub fn add_symbol(&mut self, symbol: Symbol) -> SymbolRef {
        self.symbols.add(symbol)
    }

    /// Record `declaration` on `symbol`.
    pub fn add_declaration(&mut self, symbol: SymbolRef, declaration: NodeIndex) {
        if let Some(sym) = self.symbols.get_mut(symbol) {
            sym.declarations.push(declaration);
        }
    }

    // =========================================================================
    // Node constructors
    // =========================================================================

    fn range_of(&self, children: &[NodeIndex]) -> TextRange {
        children
            .iter()
            .filter_map(|&idx| self.arena.get(idx))
            .map(Node::range)
            .reduce(TextRange::cover)
            .unwrap_or_default()
    }

    fn add(&mut self, kind: SyntaxKind, data: NodeData) -> NodeIndex {
        let node = Node::new(kind, TextRange::default(), data);
        let range = self.range_of(&node.children());
        self.arena.add(Node::new(kind, range, node.data))
    }

    /// Identifier spanning `text` starting at `pos`.
    pub fn identifier(&mut self, text: &str, pos: u32) -> NodeIndex {
        let range = TextRange::new(pos, pos + text.chars().count() as u32);
        self.arena.add(Node::new(
            SyntaxKind::Identifier,
            range,
            NodeData::Identifier(IdentifierData {
                escaped_text: text.to_string(),
                original_keyword: None,
            }),
        ))
    }

    /// The `undefined` identifier.
    pub fn undefined_keyword(&mut self, pos: u32) -> NodeIndex {
        self.arena.add(Node::new(
            SyntaxKind::Identifier,
            TextRange::new(pos, pos + "undefined".len() as u32),
            NodeData::Identifier(IdentifierData {
                escaped_text: "undefined".to_string(),
                original_keyword: Some(SyntaxKind::UndefinedKeyword),
            }),
        ))
    }

    pub fn numeric_literal(&mut self, pos: u32, end: u32) -> NodeIndex {
        self.arena.add(Node::new(
            SyntaxKind::NumericLiteral,
            TextRange::new(pos, end),
            NodeData::Token,
        ))
    }

    pub fn call(&mut self, expression: NodeIndex, arguments: Vec<NodeIndex>) -> NodeIndex {
        self.add(
            SyntaxKind::CallExpression,
            NodeData::Call(CallData {
                expression,
                arguments,
            }),
        )
    }

    pub fn new_expression(&mut self, expression: NodeIndex, arguments: Vec<NodeIndex>) -> NodeIndex {
        self.add(
            SyntaxKind::NewExpression,
            NodeData::Call(CallData {
                expression,
                arguments,
            }),
        )
    }

    pub fn property_access(&mut self, expression: NodeIndex, name: NodeIndex) -> NodeIndex {
        self.add(
            SyntaxKind::PropertyAccessExpression,
            NodeData::PropertyAccess(PropertyAccessData { expression, name }),
        )
    }

    pub fn for_of(
        &mut self,
        initializer: NodeIndex,
        expression: NodeIndex,
        statement: NodeIndex,
    ) -> NodeIndex {
        self.add(
            SyntaxKind::ForOfStatement,
            NodeData::ForOf(ForOfData {
                initializer,
                expression,
                statement,
            }),
        )
    }

    /// Declaration of `kind` binding `name`; `children` follow the name in source order.
    pub fn declaration(
        &mut self,
        kind: SyntaxKind,
        name: NodeIndex,
        children: Vec<NodeIndex>,
    ) -> NodeIndex {
        debug_assert!(kind.is_declaration(), "{kind:?} does not bind a name");
        self.add(
            kind,
            NodeData::Declaration(DeclarationData { name, children }),
        )
    }

    /// Any other node kind, given its children in source order.
    pub fn add_node(&mut self, kind: SyntaxKind, children: Vec<NodeIndex>) -> NodeIndex {
        self.add(kind, NodeData::Children(children))
    }

    /// Source file node; becomes the program root.
    pub fn source_file(&mut self, statements: Vec<NodeIndex>) -> NodeIndex {
        let idx = self.add(SyntaxKind::SourceFile, NodeData::Children(statements));
        self.root = idx;
        idx
    }
}

impl Frontend for Program {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn node(&self, idx: NodeIndex) -> Option<&Node> {
        self.arena.get(idx)
    }

    fn type_at_location(&self, idx: NodeIndex) -> Option<TypeId> {
        self.node_types.get(&idx).copied()
    }

    fn type_data(&self, id: TypeId) -> Option<&TypeData> {
        self.types.get(id)
    }

    fn symbol_at_location(&self, idx: NodeIndex) -> Option<SymbolRef> {
        self.node_symbols.get(&idx).copied()
    }

    fn symbol(&self, id: SymbolRef) -> Option<&Symbol> {
        self.symbols.get(id)
    }
}
