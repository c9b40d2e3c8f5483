//! Checker State
//!
//! `CheckerState` runs the enabled checks over one file. Usage:
//!
//! ```ignore
//! let mut binder = BinderState::new();
//! binder.bind_source_file(&arena, root);
//!
//! let mut checker = CheckerState::new(&arena, Some(&binder), "Foo.java", CheckerOptions::default());
//! checker.check_source_file(root);
//! for diag in &checker.ctx.diagnostics {
//!     println!("{}", diag.format_simple());
//! }
//! ```

use lamref_binder::BinderState;
use lamref_parser::parser::{NodeArena, NodeIndex};
use tracing::{Level, info, span, trace};

use crate::context::{CheckerContext, CheckerOptions};
use crate::rules::ReplaceLambdaByMethodRefCheck;
use crate::version_gate::JavaVersionAware;

pub struct CheckerState<'a> {
    /// Shared checker context containing all state.
    pub ctx: CheckerContext<'a>,
}

impl<'a> CheckerState<'a> {
    pub fn new(
        arena: &'a NodeArena,
        binder: Option<&'a BinderState>,
        file_name: impl Into<String>,
        options: CheckerOptions,
    ) -> Self {
        CheckerState {
            ctx: CheckerContext::new(arena, binder, file_name.into(), options),
        }
    }

    /// Check a whole file. Results of a previous run are replaced, so running
    /// twice over the same tree gives the same findings in the same order.
    pub fn check_source_file(&mut self, root: NodeIndex) {
        let _span = span!(Level::INFO, "check_source_file", file = %self.ctx.file_name).entered();
        self.ctx.clear_results();

        let Some(binder) = self.ctx.binder else {
            info!("no symbol index available, skipping file");
            return;
        };

        if self.ctx.options.rules.replace_lambda_with_method_ref {
            self.run_replace_lambda_check(binder, root);
        } else {
            trace!(rule = ReplaceLambdaByMethodRefCheck::KEY, "rule disabled");
        }
    }

    fn run_replace_lambda_check(&mut self, binder: &'a BinderState, root: NodeIndex) {
        let arena = self.ctx.arena;
        let version = self.ctx.options.source_version;
        let file_name = self.ctx.file_name.clone();

        let mut check =
            ReplaceLambdaByMethodRefCheck::new(arena, binder, version, file_name, &mut self.ctx);
        if !check.is_compatible_with_java_version(version) {
            info!(
                rule = ReplaceLambdaByMethodRefCheck::KEY,
                %version,
                "rule not applicable to source version"
            );
            return;
        }

        check.scan(root);
        let findings = check.findings();
        let violations = check.into_violations();
        trace!(
            rule = ReplaceLambdaByMethodRefCheck::KEY,
            findings,
            violations = violations.len(),
            "rule finished"
        );
        self.ctx.contract_violations.extend(violations);
    }

    /// Whether the last run met structural problems in the tree or index.
    pub fn has_contract_violations(&self) -> bool {
        !self.ctx.contract_violations.is_empty()
    }
}

#[cfg(test)]
#[path = "../tests/state_tests.rs"]
mod tests;
