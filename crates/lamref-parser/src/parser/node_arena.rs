//! NodeArena creation methods (add_* methods).
//!
//! Nodes are built bottom-up: every child passed to an `add_*` method must
//! already exist in the arena, and the new node becomes its parent.

use super::base::{NodeIndex, NodeList};
use super::node::*;

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    /// Create an arena with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> NodeArena {
        let mut arena = NodeArena::default();
        arena.nodes = Vec::with_capacity(capacity);
        arena.extended_info = Vec::with_capacity(capacity);
        arena.identifiers = Vec::with_capacity(capacity / 3);
        arena.call_exprs = Vec::with_capacity(capacity / 8);
        arena
    }

    pub fn clear(&mut self) {
        macro_rules! clear_vecs {
            ($($field:ident),+ $(,)?) => {
                $(self.$field.clear();)+
            };
        }

        clear_vecs!(
            nodes,
            identifiers,
            literals,
            binary_exprs,
            member_selects,
            call_exprs,
            lambdas,
            blocks,
            expr_statements,
            return_data,
            variables,
            parameters,
            method_decls,
            classes,
            source_files,
            extended_info,
        );
    }

    /// Number of nodes in the arena.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ============================================================================
    // Parent Mapping Helpers
    // ============================================================================

    #[inline]
    fn set_parent(&mut self, child: NodeIndex, parent: NodeIndex) {
        if child.is_some() {
            if let Some(info) = self.extended_info.get_mut(child.0 as usize) {
                info.parent = parent;
            }
        }
    }

    #[inline]
    fn set_parent_list(&mut self, list: &NodeList, parent: NodeIndex) {
        for &child in &list.nodes {
            self.set_parent(child, parent);
        }
    }

    #[inline]
    fn push_node(&mut self, node: Node) -> NodeIndex {
        let index = self.nodes.len() as u32;
        self.nodes.push(node);
        self.extended_info.push(ExtendedNodeInfo::default());
        NodeIndex(index)
    }

    // ============================================================================
    // Node Creation Methods
    // ============================================================================

    /// Add an identifier node
    pub fn add_identifier(&mut self, pos: u32, end: u32, data: IdentifierData) -> NodeIndex {
        let data_index = self.identifiers.len() as u32;
        self.identifiers.push(data);
        self.push_node(Node::with_data(SyntaxKind::Identifier, pos, end, data_index))
    }

    /// Add a string or numeric literal node
    pub fn add_literal(
        &mut self,
        kind: SyntaxKind,
        pos: u32,
        end: u32,
        data: LiteralData,
    ) -> NodeIndex {
        debug_assert!(matches!(
            kind,
            SyntaxKind::StringLiteral | SyntaxKind::NumericLiteral
        ));
        let data_index = self.literals.len() as u32;
        self.literals.push(data);
        self.push_node(Node::with_data(kind, pos, end, data_index))
    }

    /// Add a binary expression
    pub fn add_binary_expr(&mut self, pos: u32, end: u32, data: BinaryExprData) -> NodeIndex {
        let left = data.left;
        let right = data.right;

        let data_index = self.binary_exprs.len() as u32;
        self.binary_exprs.push(data);
        let parent = self.push_node(Node::with_data(
            SyntaxKind::BinaryExpression,
            pos,
            end,
            data_index,
        ));

        self.set_parent(left, parent);
        self.set_parent(right, parent);
        parent
    }

    /// Add a member select (`a.b`)
    pub fn add_member_select(&mut self, pos: u32, end: u32, data: MemberSelectData) -> NodeIndex {
        let expression = data.expression;
        let name = data.name;

        let data_index = self.member_selects.len() as u32;
        self.member_selects.push(data);
        let parent = self.push_node(Node::with_data(
            SyntaxKind::MemberSelect,
            pos,
            end,
            data_index,
        ));

        self.set_parent(expression, parent);
        self.set_parent(name, parent);
        parent
    }

    /// Add a method invocation or `new` expression
    pub fn add_call_expr(
        &mut self,
        kind: SyntaxKind,
        pos: u32,
        end: u32,
        data: CallExprData,
    ) -> NodeIndex {
        debug_assert!(kind.is_call());
        let expression = data.expression;
        let arguments = data.arguments.clone();
        let class_body = data.class_body;

        let data_index = self.call_exprs.len() as u32;
        self.call_exprs.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));

        self.set_parent(expression, parent);
        self.set_parent_list(&arguments, parent);
        self.set_parent(class_body, parent);
        parent
    }

    /// Add a lambda expression
    pub fn add_lambda(&mut self, pos: u32, end: u32, flags: u16, data: LambdaData) -> NodeIndex {
        let parameters = data.parameters.clone();
        let body = data.body;

        let data_index = self.lambdas.len() as u32;
        self.lambdas.push(data);
        let mut node = Node::with_data(SyntaxKind::Lambda, pos, end, data_index);
        node.flags = flags;
        let parent = self.push_node(node);

        self.set_parent_list(&parameters, parent);
        self.set_parent(body, parent);
        parent
    }

    /// Add a lambda or method parameter
    pub fn add_parameter(&mut self, pos: u32, end: u32, data: ParameterData) -> NodeIndex {
        let type_name = data.type_name;
        let name = data.name;

        let data_index = self.parameters.len() as u32;
        self.parameters.push(data);
        let parent = self.push_node(Node::with_data(
            SyntaxKind::Parameter,
            pos,
            end,
            data_index,
        ));

        self.set_parent(type_name, parent);
        self.set_parent(name, parent);
        parent
    }

    /// Add a block node
    pub fn add_block(&mut self, pos: u32, end: u32, data: BlockData) -> NodeIndex {
        let statements = data.statements.clone();

        let data_index = self.blocks.len() as u32;
        self.blocks.push(data);
        let parent = self.push_node(Node::with_data(SyntaxKind::Block, pos, end, data_index));

        self.set_parent_list(&statements, parent);
        parent
    }

    /// Add an expression statement
    pub fn add_expression_statement(
        &mut self,
        pos: u32,
        end: u32,
        data: ExprStatementData,
    ) -> NodeIndex {
        let expression = data.expression;

        let data_index = self.expr_statements.len() as u32;
        self.expr_statements.push(data);
        let parent = self.push_node(Node::with_data(
            SyntaxKind::ExpressionStatement,
            pos,
            end,
            data_index,
        ));

        self.set_parent(expression, parent);
        parent
    }

    /// Add a return statement
    pub fn add_return_statement(&mut self, pos: u32, end: u32, data: ReturnData) -> NodeIndex {
        let expression = data.expression;

        let data_index = self.return_data.len() as u32;
        self.return_data.push(data);
        let parent = self.push_node(Node::with_data(
            SyntaxKind::ReturnStatement,
            pos,
            end,
            data_index,
        ));

        self.set_parent(expression, parent);
        parent
    }

    /// Add a local variable declaration
    pub fn add_variable_declaration(
        &mut self,
        pos: u32,
        end: u32,
        data: VariableData,
    ) -> NodeIndex {
        let type_name = data.type_name;
        let name = data.name;
        let initializer = data.initializer;

        let data_index = self.variables.len() as u32;
        self.variables.push(data);
        let parent = self.push_node(Node::with_data(
            SyntaxKind::VariableDeclaration,
            pos,
            end,
            data_index,
        ));

        self.set_parent(type_name, parent);
        self.set_parent(name, parent);
        self.set_parent(initializer, parent);
        parent
    }

    /// Add a method declaration
    pub fn add_method_declaration(
        &mut self,
        pos: u32,
        end: u32,
        data: MethodDeclData,
    ) -> NodeIndex {
        let name = data.name;
        let parameters = data.parameters.clone();
        let body = data.body;

        let data_index = self.method_decls.len() as u32;
        self.method_decls.push(data);
        let parent = self.push_node(Node::with_data(
            SyntaxKind::MethodDeclaration,
            pos,
            end,
            data_index,
        ));

        self.set_parent(name, parent);
        self.set_parent_list(&parameters, parent);
        self.set_parent(body, parent);
        parent
    }

    /// Add a class declaration or an anonymous class body
    pub fn add_class(&mut self, kind: SyntaxKind, pos: u32, end: u32, data: ClassData) -> NodeIndex {
        debug_assert!(matches!(
            kind,
            SyntaxKind::ClassDeclaration | SyntaxKind::ClassBody
        ));
        let name = data.name;
        let members = data.members.clone();

        let data_index = self.classes.len() as u32;
        self.classes.push(data);
        let parent = self.push_node(Node::with_data(kind, pos, end, data_index));

        self.set_parent(name, parent);
        self.set_parent_list(&members, parent);
        parent
    }

    /// Add a source file node
    pub fn add_source_file(&mut self, pos: u32, end: u32, data: SourceFileData) -> NodeIndex {
        let statements = data.statements.clone();

        let data_index = self.source_files.len() as u32;
        self.source_files.push(data);
        let parent = self.push_node(Node::with_data(
            SyntaxKind::SourceFile,
            pos,
            end,
            data_index,
        ));

        self.set_parent_list(&statements, parent);
        parent
    }
}
