//! Node arena and typed node data.
//!
//! Nodes are created bottom-up through the `add_*` methods (children before
//! parents) and are immutable once the producer hands the arena over.

pub mod base;
pub mod node;
mod node_access;
mod node_arena;

pub use base::{NodeIndex, NodeList};
pub use node::*;

#[cfg(test)]
#[path = "../../tests/tests.rs"]
mod tests;
