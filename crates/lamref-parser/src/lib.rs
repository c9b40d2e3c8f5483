//! Syntax tree model for the lamref checker.
//!
//! The tree is produced by an external parser and handed over as a finished
//! [`parser::NodeArena`]. This crate provides:
//! - `parser` - thin nodes, typed data pools, node creation and access
//! - `syntax` - the depth-first [`syntax::SyntaxVisitor`]

pub mod parser;
pub mod syntax;
