//! Syntax traversal and construction utilities.

pub mod tree_builder;
pub mod visitor;

pub use tree_builder::{LambdaHead, TreeBuilder};
pub use visitor::{SyntaxVisitor, walk_children};
