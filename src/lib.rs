//! lamref: finds Java lambdas that can be written as method references.
//!
//! A host hands over a finished syntax tree (built through
//! [`parser::NodeArena`]'s `add_*` methods or [`syntax::TreeBuilder`]), binds
//! it, and runs the checker:
//!
//! ```ignore
//! let mut b = TreeBuilder::new("Foo.java");
//! let head = b.lambda_params(&["s"]);
//! let s = b.ident("s");
//! let call = b.invoke("System.out.println", vec![s]);
//! let lambda = b.lambda(head, call);
//! let root = b.source_file(vec![lambda]);
//! let arena = b.into_arena();
//!
//! let result = lamref::check_source(&arena, root, CheckerOptions::default());
//! assert_eq!(result.diagnostics.len(), 1);
//! ```

pub mod config;
pub mod tracing_config;

pub use lamref_binder as binder;
pub use lamref_checker as checker;
pub use lamref_common as common;
pub use lamref_parser::{parser, syntax};

pub use lamref_binder::BinderState;
pub use lamref_checker::{
    CheckError, CheckerContext, CheckerOptions, CheckerState, DiagnosticSink, JavaVersionAware,
    ReplaceLambdaByMethodRefCheck, RuleOptions,
};
pub use lamref_common::{Diagnostic, DiagnosticCategory, JavaVersion, Span};

use lamref_parser::parser::{NodeArena, NodeIndex};

/// Findings and contract violations of one file.
#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    pub diagnostics: Vec<Diagnostic>,
    pub contract_violations: Vec<CheckError>,
}

/// Bind a finished tree and run every enabled check over it.
pub fn check_source(arena: &NodeArena, root: NodeIndex, options: CheckerOptions) -> CheckResult {
    let file_name = arena
        .get(root)
        .and_then(|node| arena.get_source_file(node))
        .map(|sf| sf.file_name.clone())
        .unwrap_or_default();

    let mut binder = BinderState::new();
    binder.bind_source_file(arena, root);

    let mut checker = CheckerState::new(arena, Some(&binder), file_name, options);
    checker.check_source_file(root);

    let ctx = checker.ctx;
    CheckResult {
        diagnostics: ctx.diagnostics,
        contract_violations: ctx.contract_violations,
    }
}
