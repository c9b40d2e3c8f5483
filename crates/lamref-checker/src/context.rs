//! Checker Context
//!
//! Holds the per-file state of a check run: the borrowed tree and symbol
//! index, the options, and everything the run produced.

use lamref_binder::BinderState;
use lamref_common::{Diagnostic, JavaVersion};
use lamref_parser::parser::NodeArena;
use serde::Deserialize;

use crate::error::CheckError;

/// Receiver of findings. Findings are handed over as soon as they are made.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Per-rule switches.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RuleOptions {
    pub replace_lambda_with_method_ref: bool,
}

impl Default for RuleOptions {
    fn default() -> Self {
        RuleOptions {
            replace_lambda_with_method_ref: true,
        }
    }
}

/// Options for a check run.
///
/// ```json
/// { "sourceVersion": "1.8", "rules": { "replaceLambdaWithMethodRef": true } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckerOptions {
    /// Java level of the checked sources; missing means not set.
    pub source_version: JavaVersion,
    pub rules: RuleOptions,
}

impl CheckerOptions {
    pub fn with_source_version(mut self, version: JavaVersion) -> Self {
        self.source_version = version;
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

pub struct CheckerContext<'a> {
    /// The NodeArena containing the tree.
    pub arena: &'a NodeArena,

    /// Symbol/usage index. Without it the file is not scanned.
    pub binder: Option<&'a BinderState>,

    pub file_name: String,

    pub options: CheckerOptions,

    /// Findings, in visit order.
    pub diagnostics: Vec<Diagnostic>,

    /// Structural problems met while scanning. Each one stopped the
    /// inspection of a single lambda, never the whole file.
    pub contract_violations: Vec<CheckError>,
}

impl<'a> CheckerContext<'a> {
    pub fn new(
        arena: &'a NodeArena,
        binder: Option<&'a BinderState>,
        file_name: String,
        options: CheckerOptions,
    ) -> Self {
        CheckerContext {
            arena,
            binder,
            file_name,
            options,
            diagnostics: Vec::new(),
            contract_violations: Vec::new(),
        }
    }

    pub fn clear_results(&mut self) {
        self.diagnostics.clear();
        self.contract_violations.clear();
    }
}

impl DiagnosticSink for CheckerContext<'_> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

#[cfg(test)]
#[path = "../tests/context_tests.rs"]
mod tests;
