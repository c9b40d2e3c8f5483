//! Errors raised when a tree or its symbol index breaks the checker's
//! structural assumptions.

use lamref_parser::parser::{NodeIndex, SyntaxKind};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckError {
    /// The node carries a kind whose payload is missing from the arena
    /// (or a required child is absent).
    MalformedNode { node: NodeIndex, expected: SyntaxKind },
    /// A lambda parameter has no symbol although a symbol index is present.
    UnboundParameter {
        lambda: NodeIndex,
        parameter: NodeIndex,
    },
}

impl CheckError {
    /// Node the violation is attached to.
    pub fn node(&self) -> NodeIndex {
        match self {
            CheckError::MalformedNode { node, .. } => *node,
            CheckError::UnboundParameter { lambda, .. } => *lambda,
        }
    }
}

impl std::fmt::Display for CheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckError::MalformedNode { node, expected } => {
                write!(
                    f,
                    "malformed node {}: expected {:?} data",
                    node.0, expected
                )
            }
            CheckError::UnboundParameter { lambda, parameter } => {
                write!(
                    f,
                    "parameter {} of lambda {} has no bound symbol",
                    parameter.0, lambda.0
                )
            }
        }
    }
}

impl std::error::Error for CheckError {}
