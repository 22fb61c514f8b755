//! Symbol table produced by the binder.

use crate::base::NodeIndex;
use bitflags::bitflags;
use serde::Serialize;

/// Opaque handle to a binder symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SymbolRef(pub u32);

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SymbolFlags: u32 {
        const VARIABLE = 1 << 0;
        const PARAMETER = 1 << 1;
        const FUNCTION = 1 << 2;
        const ENUM_MEMBER = 1 << 3;
        /// Module source file (has top-level imports or exports).
        const SOURCE_FILE = 1 << 4;
        const NAMESPACE = 1 << 5;
        const ENUM = 1 << 6;
        /// Reachable from outside its declaring container.
        const EXPORTED = 1 << 7;
        /// Declared with `declare` or inside a `.d.ts` file.
        const AMBIENT = 1 << 8;
        /// Declared by the standard library declarations.
        const STANDARD_LIBRARY = 1 << 9;

        const CONTAINER = Self::SOURCE_FILE.bits() | Self::NAMESPACE.bits() | Self::ENUM.bits();
        const VALUE = Self::VARIABLE.bits()
            | Self::PARAMETER.bits()
            | Self::FUNCTION.bits()
            | Self::ENUM_MEMBER.bits()
            | Self::NAMESPACE.bits()
            | Self::ENUM.bits();
    }
}

impl Serialize for SymbolFlags {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.bits())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Symbol {
    pub name: String,
    pub flags: SymbolFlags,
    pub declarations: Vec<NodeIndex>,
    /// Container symbol (source file, namespace or enum) whose scope declares this symbol.
    pub parent: Option<SymbolRef>,
}

impl Symbol {
    pub fn new(name: impl Into<String>, flags: SymbolFlags) -> Self {
        Self {
            name: name.into(),
            flags,
            declarations: Vec::new(),
            parent: None,
        }
    }

    #[must_use]
    pub fn with_parent(mut self, parent: SymbolRef) -> Self {
        self.parent = Some(parent);
        self
    }

    #[must_use]
    pub fn with_declaration(mut self, declaration: NodeIndex) -> Self {
        self.declarations.push(declaration);
        self
    }

    pub fn is_exported(&self) -> bool {
        self.flags.contains(SymbolFlags::EXPORTED)
    }

    pub fn is_ambient(&self) -> bool {
        self.flags.contains(SymbolFlags::AMBIENT)
    }

    pub fn is_container(&self) -> bool {
        self.flags.intersects(SymbolFlags::CONTAINER)
    }
}

/// Arena of symbols.
#[derive(Debug, Default, Serialize)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            symbols: Vec::new(),
        }
    }

    pub fn add(&mut self, symbol: Symbol) -> SymbolRef {
        let id = SymbolRef(self.symbols.len() as u32);
        self.symbols.push(symbol);
        id
    }

    pub fn get(&self, id: SymbolRef) -> Option<&Symbol> {
        self.symbols.get(id.0 as usize)
    }

    pub fn get_mut(&mut self, id: SymbolRef) -> Option<&mut Symbol> {
        self.symbols.get_mut(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
