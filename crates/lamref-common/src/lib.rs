//! Common types and utilities for the lamref lambda checker.
//!
//! This crate provides foundational types used across all lamref crates:
//! - Source spans (`Span`)
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`, message table)
//! - The source dialect descriptor (`JavaVersion`)

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Diagnostic types and the static message table
pub mod diagnostics;
pub use diagnostics::{
    Diagnostic, DiagnosticCategory, DiagnosticMessage, diagnostic_codes, diagnostic_messages,
    format_message,
};

// Language level of the file being checked
pub mod java_version;
pub use java_version::{InvalidJavaVersion, JavaVersion};
