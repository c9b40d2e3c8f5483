//! Thin Node Architecture
//!
//! Each node is a small fixed-size header (`Node`) holding its kind, source
//! range and an index into the typed storage pool for that kind:
//!
//! 1. `Node` - header containing kind, flags, position, and a data index
//! 2. Typed storage pools - separate `Vec<T>` for each node category
//!
//! The `data_index` field points into the pool selected by `kind`. Kinds that
//! share a payload shape share a pool (`MethodInvocation` and `NewClass` both
//! use `CallExprData`, `ClassDeclaration` and `ClassBody` both use `ClassData`).

use super::base::{NodeIndex, NodeList};
use lamref_common::Span;
use serde::{Deserialize, Serialize};

/// Node kinds of the Java subset the checker understands.
#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SyntaxKind {
    Unknown = 0,

    // Names and literals
    Identifier,
    StringLiteral,
    NumericLiteral,

    // Expressions
    MemberSelect,
    MethodInvocation,
    NewClass,
    Lambda,
    BinaryExpression,

    // Statements
    Block,
    ExpressionStatement,
    ReturnStatement,
    VariableDeclaration,

    // Declarations
    Parameter,
    MethodDeclaration,
    ClassDeclaration,
    ClassBody,
    SourceFile,
}

impl SyntaxKind {
    /// Kinds whose node evaluates to a value.
    pub fn is_expression(self) -> bool {
        matches!(
            self,
            SyntaxKind::Identifier
                | SyntaxKind::StringLiteral
                | SyntaxKind::NumericLiteral
                | SyntaxKind::MemberSelect
                | SyntaxKind::MethodInvocation
                | SyntaxKind::NewClass
                | SyntaxKind::Lambda
                | SyntaxKind::BinaryExpression
        )
    }

    pub fn is_statement(self) -> bool {
        matches!(
            self,
            SyntaxKind::Block
                | SyntaxKind::ExpressionStatement
                | SyntaxKind::ReturnStatement
                | SyntaxKind::VariableDeclaration
        )
    }

    /// Method or constructor invocation.
    pub fn is_call(self) -> bool {
        matches!(self, SyntaxKind::MethodInvocation | SyntaxKind::NewClass)
    }
}

/// Packed node flags.
pub mod node_flags {
    pub const NONE: u16 = 0;
    /// The lambda parameters carry explicit types: `(String s) -> ...`
    pub const EXPLICIT_PARAMETER_TYPES: u16 = 1 << 0;
    /// The lambda parameter list is parenthesized: `(s) -> ...`
    pub const PARENTHESIZED_PARAMETERS: u16 = 1 << 1;
}

/// A thin node header.
///
/// - `kind`: node discriminant
/// - `flags`: packed `node_flags`
/// - `pos`/`end`: source range (byte offsets)
/// - `data_index`: index into the pool selected by `kind` (`u32::MAX` = no data)
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Node {
    pub kind: SyntaxKind,
    pub flags: u16,
    pub pos: u32,
    pub end: u32,
    pub data_index: u32,
}

impl Node {
    pub const NO_DATA: u32 = u32::MAX;

    /// Create a new thin node with no associated data
    #[inline]
    pub fn new(kind: SyntaxKind, pos: u32, end: u32) -> Node {
        Node {
            kind,
            flags: 0,
            pos,
            end,
            data_index: Self::NO_DATA,
        }
    }

    /// Create a new thin node with data index
    #[inline]
    pub fn with_data(kind: SyntaxKind, pos: u32, end: u32, data_index: u32) -> Node {
        Node {
            kind,
            flags: 0,
            pos,
            end,
            data_index,
        }
    }

    /// Check if this node has associated data
    #[inline]
    pub fn has_data(&self) -> bool {
        self.data_index != Self::NO_DATA
    }

    #[inline]
    pub fn is(&self, kind: SyntaxKind) -> bool {
        self.kind == kind
    }

    #[inline]
    pub fn has_flag(&self, flag: u16) -> bool {
        self.flags & flag != 0
    }

    /// Source range covered by the node.
    #[inline]
    pub fn span(&self) -> Span {
        Span::new(self.pos, self.end)
    }
}

// =============================================================================
// Typed Data Pools
// =============================================================================

/// Data for identifier nodes
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IdentifierData {
    pub escaped_text: String,
}

/// Data for string and numeric literals
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LiteralData {
    pub text: String,
}

/// Binary operators
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOperator {
    Plus,
    Minus,
    Star,
    Slash,
    EqualsEquals,
    ExclamationEquals,
    LessThan,
    GreaterThan,
    AmpersandAmpersand,
    BarBar,
    Equals,
}

/// Data for binary expressions (including assignment)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BinaryExprData {
    pub left: NodeIndex,
    pub operator: BinaryOperator,
    pub right: NodeIndex,
}

/// Data for member selection: `expression.name`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MemberSelectData {
    pub expression: NodeIndex,
    pub name: NodeIndex,
}

/// Data for method invocations and `new` expressions
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CallExprData {
    /// Callee: an identifier or member select for invocations, the type name for `new`
    pub expression: NodeIndex,
    pub arguments: NodeList,
    /// Anonymous class body of a `new` expression (NONE when absent)
    pub class_body: NodeIndex,
}

/// Data for lambda expressions
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LambdaData {
    pub parameters: NodeList,
    /// A single expression or a `Block`
    pub body: NodeIndex,
    /// Source position of the `->` token
    pub arrow_pos: u32,
}

/// Data for lambda and method parameters
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ParameterData {
    /// Declared type name (NONE for implicitly typed lambda parameters)
    pub type_name: NodeIndex,
    pub name: NodeIndex,
}

/// Data for blocks
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BlockData {
    pub statements: NodeList,
}

/// Data for expression statements
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExprStatementData {
    pub expression: NodeIndex,
}

/// Data for return statements
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReturnData {
    /// Returned expression (NONE for a bare `return;`)
    pub expression: NodeIndex,
}

/// Data for local variable declarations
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VariableData {
    pub type_name: NodeIndex,
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

/// Data for method declarations
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MethodDeclData {
    pub name: NodeIndex,
    pub parameters: NodeList,
    /// NONE for abstract and interface methods
    pub body: NodeIndex,
}

/// Data for class declarations and anonymous class bodies
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClassData {
    /// NONE for anonymous class bodies
    pub name: NodeIndex,
    pub members: NodeList,
}

/// Data for the source file root
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SourceFileData {
    pub file_name: String,
    pub statements: NodeList,
}

// =============================================================================
// Node Arena
// =============================================================================

/// Arena holding every node of one file plus the typed data pools.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NodeArena {
    pub nodes: Vec<Node>,

    // Names and literals
    pub identifiers: Vec<IdentifierData>,
    pub literals: Vec<LiteralData>,

    // Expressions
    pub binary_exprs: Vec<BinaryExprData>,
    pub member_selects: Vec<MemberSelectData>,
    pub call_exprs: Vec<CallExprData>,
    pub lambdas: Vec<LambdaData>,

    // Statements
    pub blocks: Vec<BlockData>,
    pub expr_statements: Vec<ExprStatementData>,
    pub return_data: Vec<ReturnData>,
    pub variables: Vec<VariableData>,

    // Declarations
    pub parameters: Vec<ParameterData>,
    pub method_decls: Vec<MethodDeclData>,
    pub classes: Vec<ClassData>,
    pub source_files: Vec<SourceFileData>,

    // Extended node info (parent links)
    pub extended_info: Vec<ExtendedNodeInfo>,
}

/// Extended node info for nodes that need more than what fits in Node
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExtendedNodeInfo {
    pub parent: NodeIndex,
}

impl Default for ExtendedNodeInfo {
    fn default() -> Self {
        ExtendedNodeInfo {
            parent: NodeIndex::NONE,
        }
    }
}
