//! Lambdas that only forward their parameters to a call (rule S1612).
//!
//! A lambda `(p0, .., pn) -> callee(p0, .., pn)` can be written as a method
//! or constructor reference. The body may be the call itself, or a block
//! holding nothing but that call as an expression statement or a returned
//! expression. Every parameter must be used exactly once in the whole
//! lambda, and that one use must be the argument at the parameter's own
//! position:
//!
//! ```text
//! x -> f(x)                  replaceable (f's reference)
//! () -> new Foo()            replaceable (Foo::new)
//! x -> { return f(x); }      replaceable
//! (a, b) -> f(b, a)          arguments swapped
//! x -> f(x, x)               arity differs, x used twice
//! x -> f(g(x))               argument is not the parameter itself
//! s -> s.length()            receiver form, not detected
//! (x, y) -> new P(x, y) { }  anonymous class body
//! ```

use lamref_binder::BinderState;
use lamref_common::diagnostics::REPLACE_LAMBDA_WITH_METHOD_REFERENCE;
use lamref_common::{Diagnostic, JavaVersion, Span, format_message};
use lamref_parser::parser::{NodeArena, NodeIndex, SyntaxKind};
use lamref_parser::syntax::{SyntaxVisitor, walk_children};
use tracing::{debug, error, trace};

use crate::context::DiagnosticSink;
use crate::error::CheckError;
use crate::version_gate::JavaVersionAware;

/// Length of the `->` token the finding is anchored on.
const ARROW_TOKEN_LEN: u32 = 2;

pub struct ReplaceLambdaByMethodRefCheck<'a, 's> {
    arena: &'a NodeArena,
    binder: &'a BinderState,
    version: JavaVersion,
    file_name: String,
    sink: &'s mut dyn DiagnosticSink,
    violations: Vec<CheckError>,
    findings: usize,
}

impl<'a, 's> ReplaceLambdaByMethodRefCheck<'a, 's> {
    pub const KEY: &'static str = "S1612";

    pub fn new(
        arena: &'a NodeArena,
        binder: &'a BinderState,
        version: JavaVersion,
        file_name: impl Into<String>,
        sink: &'s mut dyn DiagnosticSink,
    ) -> Self {
        ReplaceLambdaByMethodRefCheck {
            arena,
            binder,
            version,
            file_name: file_name.into(),
            sink,
            violations: Vec::new(),
            findings: 0,
        }
    }

    /// Scan the tree under `root`, reporting every replaceable lambda.
    pub fn scan(&mut self, root: NodeIndex) {
        self.visit_node(root);
    }

    /// Number of findings reported so far.
    pub fn findings(&self) -> usize {
        self.findings
    }

    /// Consume the check and return the contract violations it met.
    pub fn into_violations(self) -> Vec<CheckError> {
        self.violations
    }

    fn report(&mut self, lambda: NodeIndex, arrow_pos: u32) {
        let text = format_message(
            REPLACE_LAMBDA_WITH_METHOD_REFERENCE.message,
            &[self.version.java8_compatibility_message()],
        );
        debug!(
            lambda = lambda.0,
            start = arrow_pos,
            file = %self.file_name,
            "lambda replaceable by method reference"
        );
        self.findings += 1;
        self.sink.report(Diagnostic::from_message(
            self.file_name.as_str(),
            Span::at(arrow_pos, ARROW_TOKEN_LEN),
            &REPLACE_LAMBDA_WITH_METHOD_REFERENCE,
            text,
        ));
    }
}

impl JavaVersionAware for ReplaceLambdaByMethodRefCheck<'_, '_> {
    /// Method references exist from Java 8 on.
    fn is_compatible_with_java_version(&self, version: JavaVersion) -> bool {
        version.is_java8_compatible()
    }
}

impl<'a> SyntaxVisitor<'a> for ReplaceLambdaByMethodRefCheck<'a, '_> {
    fn arena(&self) -> &'a NodeArena {
        self.arena
    }

    fn visit_lambda(&mut self, idx: NodeIndex) {
        trace!(lambda = idx.0, "inspecting lambda");
        match is_replaceable_by_method_ref(self.arena, self.binder, idx) {
            Ok(true) => {
                if let Some(lambda) = self.arena.get(idx).and_then(|n| self.arena.get_lambda(n)) {
                    self.report(idx, lambda.arrow_pos);
                }
            }
            Ok(false) => {}
            Err(err) => {
                error!(lambda = idx.0, file = %self.file_name, %err, "contract violation");
                self.violations.push(err);
            }
        }
        // Nested lambdas are inspected on their own.
        walk_children(self, idx);
    }
}

// =============================================================================
// Detection
// =============================================================================

/// Whether the lambda at `lambda_idx` only forwards its parameters, in
/// order, to a single method or constructor call.
pub fn is_replaceable_by_method_ref(
    arena: &NodeArena,
    binder: &BinderState,
    lambda_idx: NodeIndex,
) -> Result<bool, CheckError> {
    let lambda = arena
        .get(lambda_idx)
        .and_then(|node| arena.get_lambda(node))
        .ok_or(CheckError::MalformedNode {
            node: lambda_idx,
            expected: SyntaxKind::Lambda,
        })?;

    let Some(call_idx) = forwarded_call(arena, lambda.body, lambda_idx)? else {
        return Ok(false);
    };
    let call_node = arena.get(call_idx).ok_or(CheckError::MalformedNode {
        node: call_idx,
        expected: SyntaxKind::MethodInvocation,
    })?;
    let call = arena
        .get_call_expr(call_node)
        .ok_or(CheckError::MalformedNode {
            node: call_idx,
            expected: call_node.kind,
        })?;

    if call_node.kind == SyntaxKind::NewClass && call.class_body.is_some() {
        return Ok(false);
    }
    if call.arguments.len() != lambda.parameters.len() {
        return Ok(false);
    }

    for (&parameter, &argument) in lambda.parameters.nodes.iter().zip(&call.arguments.nodes) {
        let usages = binder
            .usages(parameter)
            .ok_or(CheckError::UnboundParameter {
                lambda: lambda_idx,
                parameter,
            })?;
        match usages {
            [only] if *only == argument => {}
            _ => return Ok(false),
        }
    }
    Ok(true)
}

/// The call a lambda body reduces to, if it has one of the forwarding shapes:
/// a bare call, or a block whose only statement is `call;` or `return call;`.
pub fn forwarded_call(
    arena: &NodeArena,
    body: NodeIndex,
    lambda_idx: NodeIndex,
) -> Result<Option<NodeIndex>, CheckError> {
    // A dangling body is charged to the lambda that owns it.
    let body_node = arena.get(body).ok_or(CheckError::MalformedNode {
        node: lambda_idx,
        expected: SyntaxKind::Lambda,
    })?;

    if body_node.kind.is_call() {
        return Ok(Some(body));
    }
    if body_node.kind != SyntaxKind::Block {
        return Ok(None);
    }

    let block = arena.get_block(body_node).ok_or(CheckError::MalformedNode {
        node: body,
        expected: SyntaxKind::Block,
    })?;
    let [statement] = block.statements.nodes.as_slice() else {
        return Ok(None);
    };
    let statement = *statement;
    let Some(stmt_node) = arena.get(statement) else {
        return Err(CheckError::MalformedNode {
            node: body,
            expected: SyntaxKind::Block,
        });
    };

    let expression = match stmt_node.kind {
        SyntaxKind::ExpressionStatement => {
            let expression = arena
                .get_expr_statement(stmt_node)
                .ok_or(CheckError::MalformedNode {
                    node: statement,
                    expected: SyntaxKind::ExpressionStatement,
                })?
                .expression;
            if arena.get(expression).is_none() {
                return Err(CheckError::MalformedNode {
                    node: statement,
                    expected: SyntaxKind::ExpressionStatement,
                });
            }
            expression
        }
        SyntaxKind::ReturnStatement => {
            let expression = arena
                .get_return_statement(stmt_node)
                .ok_or(CheckError::MalformedNode {
                    node: statement,
                    expected: SyntaxKind::ReturnStatement,
                })?
                .expression;
            // `return;`
            if expression.is_none() {
                return Ok(None);
            }
            if arena.get(expression).is_none() {
                return Err(CheckError::MalformedNode {
                    node: statement,
                    expected: SyntaxKind::ReturnStatement,
                });
            }
            expression
        }
        _ => return Ok(None),
    };

    Ok(arena
        .kind(expression)
        .filter(|kind| kind.is_call())
        .map(|_| expression))
}

#[cfg(test)]
#[path = "../../tests/replace_lambda_by_method_ref_tests.rs"]
mod tests;
