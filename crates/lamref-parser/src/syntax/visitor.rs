//! Depth-first pre-order visitor over a `NodeArena`.
//!
//! `visit_node` dispatches on the node kind to a per-kind hook. Every hook
//! defaults to [`walk_children`], which visits the children in source order,
//! so an implementor overrides only the kinds it cares about and decides per
//! hook whether to keep descending.
//!
//! ```ignore
//! struct LambdaCounter<'a> { arena: &'a NodeArena, count: usize }
//!
//! impl<'a> SyntaxVisitor<'a> for LambdaCounter<'a> {
//!     fn arena(&self) -> &'a NodeArena { self.arena }
//!
//!     fn visit_lambda(&mut self, idx: NodeIndex) {
//!         self.count += 1;
//!         walk_children(self, idx);
//!     }
//! }
//! ```

use crate::parser::{NodeArena, NodeIndex, SyntaxKind};

pub trait SyntaxVisitor<'a> {
    /// Arena being traversed.
    fn arena(&self) -> &'a NodeArena;

    /// Dispatch a node to the hook for its kind. Unknown indices are ignored.
    fn visit_node(&mut self, idx: NodeIndex) {
        let Some(node) = self.arena().get(idx) else {
            return;
        };

        match node.kind {
            SyntaxKind::SourceFile => self.visit_source_file(idx),
            SyntaxKind::ClassDeclaration => self.visit_class_declaration(idx),
            SyntaxKind::ClassBody => self.visit_class_body(idx),
            SyntaxKind::MethodDeclaration => self.visit_method_declaration(idx),
            SyntaxKind::Parameter => self.visit_parameter(idx),
            SyntaxKind::Block => self.visit_block(idx),
            SyntaxKind::ExpressionStatement => self.visit_expression_statement(idx),
            SyntaxKind::ReturnStatement => self.visit_return_statement(idx),
            SyntaxKind::VariableDeclaration => self.visit_variable_declaration(idx),
            SyntaxKind::Lambda => self.visit_lambda(idx),
            SyntaxKind::MethodInvocation => self.visit_method_invocation(idx),
            SyntaxKind::NewClass => self.visit_new_class(idx),
            SyntaxKind::MemberSelect => self.visit_member_select(idx),
            SyntaxKind::BinaryExpression => self.visit_binary_expression(idx),
            SyntaxKind::Identifier => self.visit_identifier(idx),
            SyntaxKind::StringLiteral | SyntaxKind::NumericLiteral => self.visit_literal(idx),
            SyntaxKind::Unknown => {}
        }
    }

    fn visit_source_file(&mut self, idx: NodeIndex) {
        walk_children(self, idx);
    }

    fn visit_class_declaration(&mut self, idx: NodeIndex) {
        walk_children(self, idx);
    }

    fn visit_class_body(&mut self, idx: NodeIndex) {
        walk_children(self, idx);
    }

    fn visit_method_declaration(&mut self, idx: NodeIndex) {
        walk_children(self, idx);
    }

    fn visit_parameter(&mut self, idx: NodeIndex) {
        walk_children(self, idx);
    }

    fn visit_block(&mut self, idx: NodeIndex) {
        walk_children(self, idx);
    }

    fn visit_expression_statement(&mut self, idx: NodeIndex) {
        walk_children(self, idx);
    }

    fn visit_return_statement(&mut self, idx: NodeIndex) {
        walk_children(self, idx);
    }

    fn visit_variable_declaration(&mut self, idx: NodeIndex) {
        walk_children(self, idx);
    }

    fn visit_lambda(&mut self, idx: NodeIndex) {
        walk_children(self, idx);
    }

    fn visit_method_invocation(&mut self, idx: NodeIndex) {
        walk_children(self, idx);
    }

    fn visit_new_class(&mut self, idx: NodeIndex) {
        walk_children(self, idx);
    }

    fn visit_member_select(&mut self, idx: NodeIndex) {
        walk_children(self, idx);
    }

    fn visit_binary_expression(&mut self, idx: NodeIndex) {
        walk_children(self, idx);
    }

    fn visit_identifier(&mut self, _idx: NodeIndex) {}

    fn visit_literal(&mut self, _idx: NodeIndex) {}
}

/// Visit all children of a node in source order.
pub fn walk_children<'a, V>(visitor: &mut V, idx: NodeIndex)
where
    V: SyntaxVisitor<'a> + ?Sized,
{
    let arena = visitor.arena();
    for child in arena.get_children(idx) {
        visitor.visit_node(child);
    }
}

#[cfg(test)]
#[path = "../../tests/visitor_tests.rs"]
mod tests;
