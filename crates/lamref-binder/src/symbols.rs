//! Symbols, the symbol arena, and per-scope symbol tables.

use lamref_parser::parser::NodeIndex;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Symbol flags.
pub mod symbol_flags {
    pub const NONE: u32 = 0;
    pub const PARAMETER: u32 = 1 << 0;
    pub const LOCAL_VARIABLE: u32 = 1 << 1;
    /// Parameter declared by a lambda (as opposed to a method)
    pub const LAMBDA_PARAMETER: u32 = 1 << 2;
}

/// Index of a symbol in its `SymbolArena`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(pub u32);

impl SymbolId {
    pub const NONE: SymbolId = SymbolId(u32::MAX);

    #[inline]
    pub const fn is_none(&self) -> bool {
        self.0 == u32::MAX
    }
}

/// A declared name and every identifier that refers to it.
#[derive(Clone, Debug)]
pub struct Symbol {
    pub id: SymbolId,
    pub flags: u32,
    pub escaped_name: String,
    /// Declaring node (a `Parameter` or `VariableDeclaration`)
    pub declaration: NodeIndex,
    /// Referencing identifiers in source order. Each node appears at most once.
    pub usages: SmallVec<[NodeIndex; 4]>,
}

impl Symbol {
    pub fn new(id: SymbolId, flags: u32, escaped_name: String) -> Symbol {
        Symbol {
            id,
            flags,
            escaped_name,
            declaration: NodeIndex::NONE,
            usages: SmallVec::new(),
        }
    }

    #[inline]
    pub fn has_any_flags(&self, flags: u32) -> bool {
        self.flags & flags != 0
    }

    /// Record a referencing identifier. Recording the same node twice is a
    /// binder bug, not a second usage.
    pub fn add_usage(&mut self, identifier: NodeIndex) {
        debug_assert!(
            !self.usages.contains(&identifier),
            "usage {identifier:?} recorded twice for '{}'",
            self.escaped_name
        );
        self.usages.push(identifier);
    }
}

/// Arena-based storage for symbols of one file.
#[derive(Clone, Debug, Default)]
pub struct SymbolArena {
    symbols: Vec<Symbol>,
}

impl SymbolArena {
    pub fn new() -> SymbolArena {
        SymbolArena::default()
    }

    pub fn alloc(&mut self, flags: u32, escaped_name: String) -> SymbolId {
        let id = SymbolId(self.symbols.len() as u32);
        self.symbols.push(Symbol::new(id, flags, escaped_name));
        id
    }

    #[inline]
    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        if id.is_none() {
            None
        } else {
            self.symbols.get(id.0 as usize)
        }
    }

    #[inline]
    pub fn get_mut(&mut self, id: SymbolId) -> Option<&mut Symbol> {
        if id.is_none() {
            None
        } else {
            self.symbols.get_mut(id.0 as usize)
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    pub fn clear(&mut self) {
        self.symbols.clear();
    }
}

/// Name → symbol map of one scope.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    symbols: FxHashMap<String, SymbolId>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable::default()
    }

    pub fn get(&self, name: &str) -> Option<SymbolId> {
        self.symbols.get(name).copied()
    }

    pub fn set(&mut self, name: String, symbol: SymbolId) {
        self.symbols.insert(name, symbol);
    }

    pub fn has(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
