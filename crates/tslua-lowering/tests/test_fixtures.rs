//! Shared test fixtures for building small checked programs.
//!
//! `Fixture` wraps a `Program` and hands out source positions so every
//! identifier gets a distinct, realistic range.

use crate::context::TransformationContext;
use crate::language_extensions::{ExtensionKind, create_extension_type};
use tslua_common::{CompilerOptions, LuaTarget};
use tslua_program::{
    IntrinsicKind, NodeIndex, Program, Symbol, SymbolFlags, SymbolRef, TypeAnnotation, TypeId,
};

pub const TEST_FILE_NAME: &str = "test.ts";

pub struct Fixture {
    pub program: Program,
    /// Symbol of the module source file.
    pub file_symbol: SymbolRef,
    cursor: u32,
}

impl Fixture {
    pub fn new() -> Self {
        let mut program = Program::new(TEST_FILE_NAME);
        let file_symbol = program.add_symbol(Symbol::new("\"test\"", SymbolFlags::SOURCE_FILE));
        Self {
            program,
            file_symbol,
            cursor: 0,
        }
    }

    /// Identifier at the next free position.
    pub fn ident(&mut self, text: &str) -> NodeIndex {
        let pos = self.cursor;
        self.cursor += text.chars().count() as u32 + 1;
        self.program.identifier(text, pos)
    }

    pub fn undefined(&mut self) -> NodeIndex {
        let pos = self.cursor;
        self.cursor += "undefined".len() as u32 + 1;
        self.program.undefined_keyword(pos)
    }

    /// Symbol declared directly in the source file.
    pub fn symbol(&mut self, name: &str, flags: SymbolFlags) -> SymbolRef {
        let parent = self.file_symbol;
        self.symbol_in(name, flags, parent)
    }

    pub fn symbol_in(&mut self, name: &str, flags: SymbolFlags, parent: SymbolRef) -> SymbolRef {
        self.program
            .add_symbol(Symbol::new(name, flags).with_parent(parent))
    }

    /// Identifier named after `symbol` and resolved to it.
    pub fn reference(&mut self, symbol: SymbolRef) -> NodeIndex {
        let name = self
            .program
            .symbols
            .get(symbol)
            .map(|sym| sym.name.clone())
            .unwrap_or_default();
        let idx = self.ident(&name);
        self.program.bind(idx, symbol);
        idx
    }

    /// Resolved reference whose type is `type_id`.
    pub fn typed_reference(&mut self, symbol: SymbolRef, type_id: TypeId) -> NodeIndex {
        let idx = self.reference(symbol);
        self.program.set_type(idx, type_id);
        idx
    }

    pub fn function_type(&mut self) -> TypeId {
        let number = self.program.types.intrinsic(IntrinsicKind::Number);
        self.program.types.function(vec![number], number)
    }

    /// Function type branded as `kind`.
    pub fn extension_type(&mut self, kind: ExtensionKind) -> TypeId {
        let base = self.function_type();
        create_extension_type(&mut self.program.types, kind, base)
    }

    /// Function type annotated `@forRange`.
    pub fn for_range_type(&mut self) -> TypeId {
        let func = self.function_type();
        self.program.types.annotate(func, TypeAnnotation::ForRange);
        func
    }

    /// Variable of an extension type, referenced once.
    pub fn extension_reference(&mut self, name: &str, kind: ExtensionKind) -> NodeIndex {
        let symbol = self.symbol(name, SymbolFlags::VARIABLE | SymbolFlags::AMBIENT);
        let type_id = self.extension_type(kind);
        self.typed_reference(symbol, type_id)
    }

    pub fn context(&self) -> TransformationContext<'_> {
        TransformationContext::new(&self.program, CompilerOptions::default())
    }

    pub fn context_for(&self, target: LuaTarget) -> TransformationContext<'_> {
        TransformationContext::new(&self.program, CompilerOptions::for_target(target))
    }
}
