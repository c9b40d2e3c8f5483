//! Persistent lexical scopes.

use crate::symbols::SymbolTable;
use lamref_parser::parser::NodeIndex;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScopeId(pub u32);

impl ScopeId {
    pub const NONE: ScopeId = ScopeId(u32::MAX);

    #[inline]
    pub const fn is_none(&self) -> bool {
        self.0 == u32::MAX
    }
}

impl Default for ScopeId {
    fn default() -> ScopeId {
        ScopeId::NONE
    }
}

/// What kind of construct opened a scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerKind {
    SourceFile,
    Class,
    Method,
    Lambda,
    Block,
}

#[derive(Clone, Debug)]
pub struct Scope {
    pub parent: ScopeId,
    pub kind: ContainerKind,
    /// Node that opened the scope
    pub container: NodeIndex,
    pub table: SymbolTable,
}

impl Scope {
    pub fn new(parent: ScopeId, kind: ContainerKind, container: NodeIndex) -> Scope {
        Scope {
            parent,
            kind,
            container,
            table: SymbolTable::new(),
        }
    }
}
