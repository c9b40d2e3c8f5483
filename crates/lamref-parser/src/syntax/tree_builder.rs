//! Convenience front-end over the `NodeArena::add_*` methods.
//!
//! Producers that already have a parse (and tests) use `TreeBuilder` to
//! assemble a linked tree without computing every source range by hand.
//! Positions are synthetic: a cursor advances by the text length of each
//! leaf, so ranges are monotonic within a leaf sequence and every lambda gets
//! a distinct arrow position.

use crate::parser::{
    BinaryExprData, BinaryOperator, BlockData, CallExprData, ClassData, ExprStatementData,
    IdentifierData, LambdaData, LiteralData, MemberSelectData, MethodDeclData, NodeArena,
    NodeIndex, NodeList, ParameterData, ReturnData, SourceFileData, SyntaxKind, VariableData,
    node_flags,
};

/// Parameters and arrow position of a lambda whose body is not built yet.
#[derive(Clone, Debug)]
pub struct LambdaHead {
    pub parameters: NodeList,
    pub arrow_pos: u32,
    pub pos: u32,
    pub flags: u16,
}

pub struct TreeBuilder {
    arena: NodeArena,
    file_name: String,
    cursor: u32,
}

impl TreeBuilder {
    pub fn new(file_name: impl Into<String>) -> TreeBuilder {
        TreeBuilder {
            arena: NodeArena::new(),
            file_name: file_name.into(),
            cursor: 0,
        }
    }

    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    pub fn into_arena(self) -> NodeArena {
        self.arena
    }

    /// Reserve `len` bytes of synthetic source and return their start.
    fn advance(&mut self, len: usize) -> u32 {
        let start = self.cursor;
        self.cursor += len as u32 + 1;
        start
    }

    fn pos_of(&self, idx: NodeIndex) -> u32 {
        self.arena.get(idx).map(|n| n.pos).unwrap_or(self.cursor)
    }

    fn start_of(&self, first: Option<NodeIndex>) -> u32 {
        first.map(|idx| self.pos_of(idx)).unwrap_or(self.cursor)
    }

    fn list(&self, nodes: Vec<NodeIndex>) -> NodeList {
        let pos = self.start_of(nodes.first().copied());
        NodeList::with_range(nodes, pos, self.cursor)
    }

    // ========================================================================
    // Names and literals
    // ========================================================================

    pub fn ident(&mut self, name: &str) -> NodeIndex {
        let pos = self.advance(name.len());
        self.arena.add_identifier(
            pos,
            pos + name.len() as u32,
            IdentifierData {
                escaped_text: name.to_string(),
            },
        )
    }

    pub fn string_literal(&mut self, text: &str) -> NodeIndex {
        let pos = self.advance(text.len() + 2);
        self.arena.add_literal(
            SyntaxKind::StringLiteral,
            pos,
            pos + text.len() as u32 + 2,
            LiteralData {
                text: text.to_string(),
            },
        )
    }

    pub fn number_literal(&mut self, text: &str) -> NodeIndex {
        let pos = self.advance(text.len());
        self.arena.add_literal(
            SyntaxKind::NumericLiteral,
            pos,
            pos + text.len() as u32,
            LiteralData {
                text: text.to_string(),
            },
        )
    }

    /// Dotted name such as `System.out`, built as nested member selects.
    pub fn qualified(&mut self, path: &str) -> NodeIndex {
        let mut segments = path.split('.');
        let first = segments.next().unwrap_or_default();
        let mut expr = self.ident(first);
        for segment in segments {
            expr = self.select(expr, segment);
        }
        expr
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    pub fn select(&mut self, expression: NodeIndex, name: &str) -> NodeIndex {
        let pos = self.pos_of(expression);
        let name = self.ident(name);
        self.arena.add_member_select(
            pos,
            self.cursor,
            MemberSelectData { expression, name },
        )
    }

    /// Invocation of a simple (`f`) or dotted (`System.out.println`) callee.
    pub fn invoke(&mut self, callee: &str, arguments: Vec<NodeIndex>) -> NodeIndex {
        let expression = self.qualified(callee);
        self.call(SyntaxKind::MethodInvocation, expression, arguments, NodeIndex::NONE)
    }

    /// Invocation of `method` on an already built receiver expression.
    pub fn invoke_on(
        &mut self,
        receiver: NodeIndex,
        method: &str,
        arguments: Vec<NodeIndex>,
    ) -> NodeIndex {
        let expression = self.select(receiver, method);
        self.call(SyntaxKind::MethodInvocation, expression, arguments, NodeIndex::NONE)
    }

    pub fn new_class(&mut self, type_name: &str, arguments: Vec<NodeIndex>) -> NodeIndex {
        self.advance("new".len());
        let expression = self.qualified(type_name);
        self.call(SyntaxKind::NewClass, expression, arguments, NodeIndex::NONE)
    }

    /// `new T(args) { members }`
    pub fn new_anonymous_class(
        &mut self,
        type_name: &str,
        arguments: Vec<NodeIndex>,
        members: Vec<NodeIndex>,
    ) -> NodeIndex {
        self.advance("new".len());
        let expression = self.qualified(type_name);
        let body_pos = self.advance(1);
        let members = self.list(members);
        let body = self.arena.add_class(
            SyntaxKind::ClassBody,
            body_pos,
            self.cursor,
            ClassData {
                name: NodeIndex::NONE,
                members,
            },
        );
        self.call(SyntaxKind::NewClass, expression, arguments, body)
    }

    fn call(
        &mut self,
        kind: SyntaxKind,
        expression: NodeIndex,
        arguments: Vec<NodeIndex>,
        class_body: NodeIndex,
    ) -> NodeIndex {
        let pos = self.pos_of(expression).min(self.start_of(arguments.first().copied()));
        let arguments = self.list(arguments);
        self.arena.add_call_expr(
            kind,
            pos,
            self.cursor,
            CallExprData {
                expression,
                arguments,
                class_body,
            },
        )
    }

    pub fn binary(
        &mut self,
        left: NodeIndex,
        operator: BinaryOperator,
        right: NodeIndex,
    ) -> NodeIndex {
        let pos = self.pos_of(left);
        self.arena.add_binary_expr(
            pos,
            self.cursor,
            BinaryExprData {
                left,
                operator,
                right,
            },
        )
    }

    // ========================================================================
    // Lambdas
    // ========================================================================

    /// Implicitly typed parameter.
    pub fn parameter(&mut self, name: &str) -> NodeIndex {
        let name = self.ident(name);
        let pos = self.pos_of(name);
        self.arena.add_parameter(
            pos,
            self.cursor,
            ParameterData {
                type_name: NodeIndex::NONE,
                name,
            },
        )
    }

    /// Explicitly typed parameter: `String s`.
    pub fn typed_parameter(&mut self, type_name: &str, name: &str) -> NodeIndex {
        let type_name = self.qualified(type_name);
        let pos = self.pos_of(type_name);
        let name = self.ident(name);
        self.arena.add_parameter(
            pos,
            self.cursor,
            ParameterData { type_name, name },
        )
    }

    /// Build implicitly typed lambda parameters and reserve the `->` token.
    pub fn lambda_params(&mut self, names: &[&str]) -> LambdaHead {
        let pos = self.cursor;
        let parameters: Vec<NodeIndex> = names.iter().map(|name| self.parameter(name)).collect();
        let flags = if names.len() == 1 {
            node_flags::NONE
        } else {
            node_flags::PARENTHESIZED_PARAMETERS
        };
        self.lambda_head(pos, parameters, flags)
    }

    /// Reserve the `->` token after already built parameter nodes.
    pub fn lambda_head_with(&mut self, parameters: Vec<NodeIndex>) -> LambdaHead {
        let pos = self.start_of(parameters.first().copied());
        let explicit = parameters.iter().any(|&p| {
            self.arena
                .get(p)
                .and_then(|node| self.arena.get_parameter(node))
                .is_some_and(|data| data.type_name.is_some())
        });
        let mut flags = node_flags::PARENTHESIZED_PARAMETERS;
        if explicit {
            flags |= node_flags::EXPLICIT_PARAMETER_TYPES;
        }
        self.lambda_head(pos, parameters, flags)
    }

    fn lambda_head(&mut self, pos: u32, parameters: Vec<NodeIndex>, flags: u16) -> LambdaHead {
        let parameters = self.list(parameters);
        let arrow_pos = self.advance("->".len());
        LambdaHead {
            parameters,
            arrow_pos,
            pos,
            flags,
        }
    }

    pub fn lambda(&mut self, head: LambdaHead, body: NodeIndex) -> NodeIndex {
        self.arena.add_lambda(
            head.pos,
            self.cursor,
            head.flags,
            LambdaData {
                parameters: head.parameters,
                body,
                arrow_pos: head.arrow_pos,
            },
        )
    }

    // ========================================================================
    // Statements
    // ========================================================================

    pub fn block(&mut self, statements: Vec<NodeIndex>) -> NodeIndex {
        let pos = self.start_of(statements.first().copied()).saturating_sub(2);
        let statements = self.list(statements);
        self.advance(1);
        self.arena
            .add_block(pos, self.cursor, BlockData { statements })
    }

    pub fn expr_statement(&mut self, expression: NodeIndex) -> NodeIndex {
        let pos = self.pos_of(expression);
        self.advance(1);
        self.arena
            .add_expression_statement(pos, self.cursor, ExprStatementData { expression })
    }

    /// `return expr;` or, with `NodeIndex::NONE`, a bare `return;`.
    pub fn return_statement(&mut self, expression: NodeIndex) -> NodeIndex {
        let pos = if expression.is_some() {
            self.pos_of(expression).saturating_sub("return ".len() as u32)
        } else {
            self.advance("return".len())
        };
        self.advance(1);
        self.arena
            .add_return_statement(pos, self.cursor, ReturnData { expression })
    }

    /// `Type name = initializer;` (`initializer` may be NONE).
    pub fn variable(&mut self, type_name: &str, name: &str, initializer: NodeIndex) -> NodeIndex {
        let type_name = self.qualified(type_name);
        let pos = self.pos_of(type_name);
        let name = self.ident(name);
        self.advance(1);
        self.arena.add_variable_declaration(
            pos,
            self.cursor,
            VariableData {
                type_name,
                name,
                initializer,
            },
        )
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    /// Method declaration; `name` is built before `parameters` were, so it is
    /// passed as an already created identifier.
    pub fn method(&mut self, name: NodeIndex, parameters: Vec<NodeIndex>, body: NodeIndex) -> NodeIndex {
        let pos = self.pos_of(name);
        let parameters = self.list(parameters);
        self.arena.add_method_declaration(
            pos,
            self.cursor,
            MethodDeclData {
                name,
                parameters,
                body,
            },
        )
    }

    pub fn class(&mut self, name: NodeIndex, members: Vec<NodeIndex>) -> NodeIndex {
        let pos = self.pos_of(name);
        let members = self.list(members);
        self.arena.add_class(
            SyntaxKind::ClassDeclaration,
            pos,
            self.cursor,
            ClassData { name, members },
        )
    }

    /// Close the file: wrap the top-level statements in a `SourceFile` root.
    pub fn source_file(&mut self, statements: Vec<NodeIndex>) -> NodeIndex {
        let statements = self.list(statements);
        let file_name = self.file_name.clone();
        self.arena.add_source_file(
            0,
            self.cursor,
            SourceFileData {
                file_name,
                statements,
            },
        )
    }
}

#[cfg(test)]
#[path = "../../tests/tree_builder_tests.rs"]
mod tests;
