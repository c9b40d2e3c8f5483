//! Binder state and the binding pass.
//!
//! `bind_source_file` walks the tree once, opening a persistent scope for
//! every scope container and declaring a symbol for every parameter and
//! local variable. Identifiers in value-reference position are resolved
//! through the scope chain as they are met and appended to the usages of the
//! symbol they resolve to, so usages come out in source order.

use crate::scopes::{ContainerKind, Scope, ScopeId};
use crate::symbols::{Symbol, SymbolArena, SymbolId, symbol_flags};
use lamref_parser::parser::{NodeArena, NodeIndex, NodeList, SyntaxKind};
use rustc_hash::FxHashMap;
use tracing::{Level, debug, span, trace};

/// Symbol/usage index of one file.
#[derive(Debug, Default)]
pub struct BinderState {
    pub symbols: SymbolArena,
    /// Persistent scopes, indexed by `ScopeId`
    pub scopes: Vec<Scope>,
    /// Container node → scope it opened
    pub node_scope_ids: FxHashMap<u32, ScopeId>,
    current_scope_id: ScopeId,
    /// Declaring node (and its name identifier) → symbol
    pub node_symbols: FxHashMap<u32, SymbolId>,
    /// Value-reference identifier → symbol it resolved to
    pub identifier_symbols: FxHashMap<u32, SymbolId>,
    /// Value-reference identifiers with no visible declaration (fields,
    /// types and other names the binder does not model).
    pub unresolved_references: Vec<NodeIndex>,
}

impl BinderState {
    pub fn new() -> BinderState {
        BinderState::default()
    }

    /// Drop everything bound so far.
    pub fn reset(&mut self) {
        self.symbols.clear();
        self.scopes.clear();
        self.node_scope_ids.clear();
        self.current_scope_id = ScopeId::NONE;
        self.node_symbols.clear();
        self.identifier_symbols.clear();
        self.unresolved_references.clear();
    }

    /// Bind a whole file. Any previous binding is discarded first.
    pub fn bind_source_file(&mut self, arena: &NodeArena, root: NodeIndex) {
        let file_name = arena
            .get(root)
            .and_then(|node| arena.get_source_file(node))
            .map(|sf| sf.file_name.as_str())
            .unwrap_or("<unknown>");
        let _span = span!(Level::DEBUG, "bind_source_file", file = file_name).entered();

        self.reset();
        self.bind_node(arena, root);

        debug!(
            symbols = self.symbols.len(),
            scopes = self.scopes.len(),
            unresolved = self.unresolved_references.len(),
            "binding complete"
        );
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Symbol declared by a `Parameter`/`VariableDeclaration` node or its
    /// name identifier.
    pub fn get_node_symbol(&self, node: NodeIndex) -> Option<SymbolId> {
        self.node_symbols.get(&node.0).copied()
    }

    pub fn get_symbol(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id)
    }

    /// Usage identifiers of the symbol declared by `declaration`, in source
    /// order. `None` when the node declares nothing.
    pub fn usages(&self, declaration: NodeIndex) -> Option<&[NodeIndex]> {
        let id = self.get_node_symbol(declaration)?;
        self.get_symbol(id).map(|symbol| symbol.usages.as_slice())
    }

    /// Symbol a value-reference identifier resolved to during binding.
    pub fn resolve_identifier(&self, identifier: NodeIndex) -> Option<SymbolId> {
        self.identifier_symbols.get(&identifier.0).copied()
    }

    /// Scope opened by a container node.
    pub fn get_node_scope(&self, container: NodeIndex) -> Option<&Scope> {
        let id = self.node_scope_ids.get(&container.0)?;
        self.scopes.get(id.0 as usize)
    }

    // ========================================================================
    // Scopes
    // ========================================================================

    fn enter_scope(&mut self, kind: ContainerKind, container: NodeIndex) {
        let id = ScopeId(self.scopes.len() as u32);
        self.scopes
            .push(Scope::new(self.current_scope_id, kind, container));
        self.node_scope_ids.insert(container.0, id);
        self.current_scope_id = id;
    }

    fn exit_scope(&mut self) {
        if let Some(scope) = self.scopes.get(self.current_scope_id.0 as usize) {
            self.current_scope_id = scope.parent;
        }
    }

    fn with_scope(
        &mut self,
        kind: ContainerKind,
        container: NodeIndex,
        f: impl FnOnce(&mut BinderState),
    ) {
        self.enter_scope(kind, container);
        f(self);
        self.exit_scope();
    }

    fn declare_symbol(
        &mut self,
        name: &str,
        flags: u32,
        declaration: NodeIndex,
        name_node: NodeIndex,
    ) -> SymbolId {
        let sym_id = self.symbols.alloc(flags, name.to_string());
        if let Some(symbol) = self.symbols.get_mut(sym_id) {
            symbol.declaration = declaration;
        }
        if let Some(scope) = self.scopes.get_mut(self.current_scope_id.0 as usize) {
            // Later declarations shadow earlier ones in the same table.
            scope.table.set(name.to_string(), sym_id);
        }
        self.node_symbols.insert(declaration.0, sym_id);
        if name_node.is_some() {
            self.node_symbols.insert(name_node.0, sym_id);
        }
        debug!(name, sym_id = sym_id.0, decl = declaration.0, "declared symbol");
        sym_id
    }

    fn lookup(&self, name: &str) -> Option<SymbolId> {
        let mut scope_id = self.current_scope_id;
        while let Some(scope) = self.scopes.get(scope_id.0 as usize) {
            if let Some(sym_id) = scope.table.get(name) {
                return Some(sym_id);
            }
            scope_id = scope.parent;
        }
        None
    }

    // ========================================================================
    // Binding pass
    // ========================================================================

    fn bind_list(&mut self, arena: &NodeArena, list: &NodeList) {
        for &idx in &list.nodes {
            self.bind_node(arena, idx);
        }
    }

    fn bind_node(&mut self, arena: &NodeArena, idx: NodeIndex) {
        let Some(node) = arena.get(idx) else {
            return;
        };

        match node.kind {
            SyntaxKind::SourceFile => {
                if let Some(sf) = arena.get_source_file(node) {
                    self.with_scope(ContainerKind::SourceFile, idx, |binder| {
                        binder.bind_list(arena, &sf.statements);
                    });
                }
            }
            SyntaxKind::ClassDeclaration | SyntaxKind::ClassBody => {
                if let Some(class) = arena.get_class(node) {
                    self.with_scope(ContainerKind::Class, idx, |binder| {
                        binder.bind_list(arena, &class.members);
                    });
                }
            }
            SyntaxKind::MethodDeclaration => {
                if let Some(method) = arena.get_method_decl(node) {
                    self.with_scope(ContainerKind::Method, idx, |binder| {
                        binder.bind_parameters(arena, &method.parameters, symbol_flags::PARAMETER);
                        binder.bind_node(arena, method.body);
                    });
                }
            }
            SyntaxKind::Lambda => {
                if let Some(lambda) = arena.get_lambda(node) {
                    trace!(
                        lambda = idx.0,
                        params = lambda.parameters.len(),
                        "entering lambda"
                    );
                    self.with_scope(ContainerKind::Lambda, idx, |binder| {
                        binder.bind_parameters(
                            arena,
                            &lambda.parameters,
                            symbol_flags::PARAMETER | symbol_flags::LAMBDA_PARAMETER,
                        );
                        binder.bind_node(arena, lambda.body);
                    });
                }
            }
            SyntaxKind::Block => {
                if let Some(block) = arena.get_block(node) {
                    self.with_scope(ContainerKind::Block, idx, |binder| {
                        binder.bind_list(arena, &block.statements);
                    });
                }
            }
            SyntaxKind::VariableDeclaration => {
                if let Some(var) = arena.get_variable(node) {
                    // The initializer cannot see the variable it initializes.
                    self.bind_node(arena, var.initializer);
                    if let Some(name) = arena.get_identifier_text(var.name) {
                        self.declare_symbol(name, symbol_flags::LOCAL_VARIABLE, idx, var.name);
                    }
                }
            }
            SyntaxKind::Parameter => {
                // Parameters outside a parameter list are not declarations.
            }
            SyntaxKind::MemberSelect => {
                if let Some(select) = arena.get_member_select(node) {
                    self.bind_node(arena, select.expression);
                }
            }
            SyntaxKind::MethodInvocation => {
                if let Some(call) = arena.get_call_expr(node) {
                    // A bare callee name is a method name, not a value.
                    if arena.kind(call.expression) != Some(SyntaxKind::Identifier) {
                        self.bind_node(arena, call.expression);
                    }
                    self.bind_list(arena, &call.arguments);
                }
            }
            SyntaxKind::NewClass => {
                if let Some(call) = arena.get_call_expr(node) {
                    self.bind_list(arena, &call.arguments);
                    self.bind_node(arena, call.class_body);
                }
            }
            SyntaxKind::Identifier => self.bind_reference(arena, idx),
            _ => {
                for child in arena.get_children(idx) {
                    self.bind_node(arena, child);
                }
            }
        }
    }

    fn bind_parameters(&mut self, arena: &NodeArena, parameters: &NodeList, flags: u32) {
        for &param_idx in &parameters.nodes {
            let Some(param) = arena.get(param_idx).and_then(|n| arena.get_parameter(n)) else {
                continue;
            };
            if let Some(name) = arena.get_identifier_text(param.name) {
                self.declare_symbol(name, flags, param_idx, param.name);
            }
        }
    }

    fn bind_reference(&mut self, arena: &NodeArena, idx: NodeIndex) {
        let Some(name) = arena.get_identifier_text(idx) else {
            return;
        };
        match self.lookup(name) {
            Some(sym_id) => {
                self.identifier_symbols.insert(idx.0, sym_id);
                if let Some(symbol) = self.symbols.get_mut(sym_id) {
                    symbol.add_usage(idx);
                }
                trace!(name, ident = idx.0, sym_id = sym_id.0, "resolved usage");
            }
            None => {
                trace!(name, ident = idx.0, "unresolved reference");
                self.unresolved_references.push(idx);
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/state_tests.rs"]
mod tests;
