//! Name binder for the lamref checker.
//!
//! Binding declares a symbol for every lambda/method parameter and local
//! variable, and records each identifier that refers to it. The resulting
//! symbol/usage index is frozen once `bind_source_file` returns; the checker
//! only reads it.

pub mod scopes;
pub mod state;
pub mod symbols;

pub use scopes::{ContainerKind, Scope, ScopeId};
pub use state::BinderState;
pub use symbols::{Symbol, SymbolArena, SymbolId, SymbolTable, symbol_flags};
