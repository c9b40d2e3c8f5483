//! Lambda checker for lamref.
//!
//! This crate is organized into several modules:
//! - `context` - `CheckerOptions`, `CheckerContext` and the `DiagnosticSink` seam
//! - `error` - contract violations raised while inspecting a tree
//! - `version_gate` - language-level applicability of checks
//! - `rules` - the checks themselves
//! - `state` - `CheckerState`, the per-file driver

pub mod context;
pub mod error;
pub mod rules;
pub mod state;
pub mod version_gate;

pub use context::{CheckerContext, CheckerOptions, DiagnosticSink, RuleOptions};
pub use error::CheckError;
pub use rules::ReplaceLambdaByMethodRefCheck;
pub use state::CheckerState;
pub use version_gate::JavaVersionAware;
