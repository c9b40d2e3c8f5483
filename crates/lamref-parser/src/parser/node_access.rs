//! NodeArena access methods.
//!
//! Typed accessors narrow a `Node` to its payload. Each returns `None` when
//! the node has a different kind, so narrowing to the wrong kind can never
//! hand back another kind's data.

use super::base::{NodeIndex, NodeList};
use super::node::*;

impl NodeArena {
    /// Get a thin node by index
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.0 as usize)
        }
    }

    /// Get extended info for a node
    #[inline]
    pub fn get_extended(&self, index: NodeIndex) -> Option<&ExtendedNodeInfo> {
        if index.is_none() {
            None
        } else {
            self.extended_info.get(index.0 as usize)
        }
    }

    /// Kind of the node at `index`.
    #[inline]
    pub fn kind(&self, index: NodeIndex) -> Option<SyntaxKind> {
        self.get(index).map(|n| n.kind)
    }

    /// Parent of a node (NONE for the root and for unknown indices).
    #[inline]
    pub fn get_parent(&self, index: NodeIndex) -> NodeIndex {
        self.get_extended(index)
            .map(|info| info.parent)
            .unwrap_or(NodeIndex::NONE)
    }

    /// Iterate the ancestors of a node, nearest first.
    pub fn ancestors(&self, index: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        let mut current = self.get_parent(index);
        std::iter::from_fn(move || {
            if current.is_none() {
                return None;
            }
            let result = current;
            current = self.get_parent(current);
            Some(result)
        })
    }

    /// Nearest ancestor of the given kind.
    pub fn find_ancestor_of_kind(&self, index: NodeIndex, kind: SyntaxKind) -> Option<NodeIndex> {
        self.ancestors(index)
            .find(|&ancestor| self.kind(ancestor) == Some(kind))
    }

    // ============================================================================
    // Typed Accessors
    // ============================================================================

    #[inline]
    fn pool_entry<'a, T>(pool: &'a [T], node: &Node, matches: bool) -> Option<&'a T> {
        if matches && node.has_data() {
            pool.get(node.data_index as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn get_identifier(&self, node: &Node) -> Option<&IdentifierData> {
        Self::pool_entry(&self.identifiers, node, node.is(SyntaxKind::Identifier))
    }

    #[inline]
    pub fn get_literal(&self, node: &Node) -> Option<&LiteralData> {
        let is_literal = matches!(
            node.kind,
            SyntaxKind::StringLiteral | SyntaxKind::NumericLiteral
        );
        Self::pool_entry(&self.literals, node, is_literal)
    }

    #[inline]
    pub fn get_binary_expr(&self, node: &Node) -> Option<&BinaryExprData> {
        Self::pool_entry(
            &self.binary_exprs,
            node,
            node.is(SyntaxKind::BinaryExpression),
        )
    }

    #[inline]
    pub fn get_member_select(&self, node: &Node) -> Option<&MemberSelectData> {
        Self::pool_entry(&self.member_selects, node, node.is(SyntaxKind::MemberSelect))
    }

    /// Get call data for a method invocation or `new` expression.
    #[inline]
    pub fn get_call_expr(&self, node: &Node) -> Option<&CallExprData> {
        Self::pool_entry(&self.call_exprs, node, node.kind.is_call())
    }

    #[inline]
    pub fn get_lambda(&self, node: &Node) -> Option<&LambdaData> {
        Self::pool_entry(&self.lambdas, node, node.is(SyntaxKind::Lambda))
    }

    #[inline]
    pub fn get_parameter(&self, node: &Node) -> Option<&ParameterData> {
        Self::pool_entry(&self.parameters, node, node.is(SyntaxKind::Parameter))
    }

    #[inline]
    pub fn get_block(&self, node: &Node) -> Option<&BlockData> {
        Self::pool_entry(&self.blocks, node, node.is(SyntaxKind::Block))
    }

    #[inline]
    pub fn get_expr_statement(&self, node: &Node) -> Option<&ExprStatementData> {
        Self::pool_entry(
            &self.expr_statements,
            node,
            node.is(SyntaxKind::ExpressionStatement),
        )
    }

    #[inline]
    pub fn get_return_statement(&self, node: &Node) -> Option<&ReturnData> {
        Self::pool_entry(&self.return_data, node, node.is(SyntaxKind::ReturnStatement))
    }

    #[inline]
    pub fn get_variable(&self, node: &Node) -> Option<&VariableData> {
        Self::pool_entry(
            &self.variables,
            node,
            node.is(SyntaxKind::VariableDeclaration),
        )
    }

    #[inline]
    pub fn get_method_decl(&self, node: &Node) -> Option<&MethodDeclData> {
        Self::pool_entry(
            &self.method_decls,
            node,
            node.is(SyntaxKind::MethodDeclaration),
        )
    }

    /// Get class data for a class declaration or an anonymous class body.
    #[inline]
    pub fn get_class(&self, node: &Node) -> Option<&ClassData> {
        let is_class = matches!(
            node.kind,
            SyntaxKind::ClassDeclaration | SyntaxKind::ClassBody
        );
        Self::pool_entry(&self.classes, node, is_class)
    }

    #[inline]
    pub fn get_source_file(&self, node: &Node) -> Option<&SourceFileData> {
        Self::pool_entry(&self.source_files, node, node.is(SyntaxKind::SourceFile))
    }

    /// Identifier text of the node at `index`, if it is an identifier.
    pub fn get_identifier_text(&self, index: NodeIndex) -> Option<&str> {
        let node = self.get(index)?;
        let data = self.get_identifier(node)?;
        Some(&data.escaped_text)
    }

    // ============================================================================
    // Children
    // ============================================================================

    /// Get children of a node in source order (for traversal).
    pub fn get_children(&self, index: NodeIndex) -> Vec<NodeIndex> {
        let Some(node) = self.get(index) else {
            return Vec::new();
        };

        // Helper to add optional NodeIndex (ignoring NONE)
        let add_opt = |children: &mut Vec<NodeIndex>, idx: NodeIndex| {
            if idx.is_some() {
                children.push(idx);
            }
        };

        // Helper to add NodeList (expanding to individual nodes)
        let add_list = |children: &mut Vec<NodeIndex>, list: &NodeList| {
            children.extend(list.nodes.iter().copied());
        };

        let mut children = Vec::new();

        match node.kind {
            SyntaxKind::Unknown
            | SyntaxKind::Identifier
            | SyntaxKind::StringLiteral
            | SyntaxKind::NumericLiteral => {}
            SyntaxKind::MemberSelect => {
                if let Some(data) = self.get_member_select(node) {
                    add_opt(&mut children, data.expression);
                    add_opt(&mut children, data.name);
                }
            }
            SyntaxKind::MethodInvocation | SyntaxKind::NewClass => {
                if let Some(data) = self.get_call_expr(node) {
                    add_opt(&mut children, data.expression);
                    add_list(&mut children, &data.arguments);
                    add_opt(&mut children, data.class_body);
                }
            }
            SyntaxKind::Lambda => {
                if let Some(data) = self.get_lambda(node) {
                    add_list(&mut children, &data.parameters);
                    add_opt(&mut children, data.body);
                }
            }
            SyntaxKind::BinaryExpression => {
                if let Some(data) = self.get_binary_expr(node) {
                    add_opt(&mut children, data.left);
                    add_opt(&mut children, data.right);
                }
            }
            SyntaxKind::Block => {
                if let Some(data) = self.get_block(node) {
                    add_list(&mut children, &data.statements);
                }
            }
            SyntaxKind::ExpressionStatement => {
                if let Some(data) = self.get_expr_statement(node) {
                    add_opt(&mut children, data.expression);
                }
            }
            SyntaxKind::ReturnStatement => {
                if let Some(data) = self.get_return_statement(node) {
                    add_opt(&mut children, data.expression);
                }
            }
            SyntaxKind::VariableDeclaration => {
                if let Some(data) = self.get_variable(node) {
                    add_opt(&mut children, data.type_name);
                    add_opt(&mut children, data.name);
                    add_opt(&mut children, data.initializer);
                }
            }
            SyntaxKind::Parameter => {
                if let Some(data) = self.get_parameter(node) {
                    add_opt(&mut children, data.type_name);
                    add_opt(&mut children, data.name);
                }
            }
            SyntaxKind::MethodDeclaration => {
                if let Some(data) = self.get_method_decl(node) {
                    add_opt(&mut children, data.name);
                    add_list(&mut children, &data.parameters);
                    add_opt(&mut children, data.body);
                }
            }
            SyntaxKind::ClassDeclaration | SyntaxKind::ClassBody => {
                if let Some(data) = self.get_class(node) {
                    add_opt(&mut children, data.name);
                    add_list(&mut children, &data.members);
                }
            }
            SyntaxKind::SourceFile => {
                if let Some(data) = self.get_source_file(node) {
                    add_list(&mut children, &data.statements);
                }
            }
        }

        children
    }
}
