//! Diagnostic types and message lookup for the checker.
//!
//! Message definitions live in `data.rs`. Templates use `{0}`, `{1}`, ...
//! placeholders filled by [`format_message`].

use serde::Serialize;

mod data;
pub use data::{
    DIAGNOSTIC_MESSAGES, REPLACE_LAMBDA_WITH_METHOD_REFERENCE, diagnostic_codes, diagnostic_messages,
};

use crate::span::Span;

// =============================================================================
// Diagnostic Types
// =============================================================================

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
    Suggestion = 2,
    Message = 3,
}

/// A finding produced by a check, anchored at a byte range of one file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: u32,
}

impl Diagnostic {
    /// Create a diagnostic from a message definition and an already formatted text.
    #[must_use]
    pub fn from_message(
        file: impl Into<String>,
        span: Span,
        message: &DiagnosticMessage,
        text: String,
    ) -> Self {
        Self {
            file: file.into(),
            start: span.start,
            length: span.len(),
            message_text: text,
            category: message.category,
            code: message.code,
        }
    }

    #[must_use]
    pub const fn span(&self) -> Span {
        Span::at(self.start, self.length)
    }

    /// Format the diagnostic in a simple format.
    ///
    /// Returns a string like: "suggestion[S1612]: Replace this lambda with a method reference."
    pub fn format_simple(&self) -> String {
        let category = match self.category {
            DiagnosticCategory::Warning => "warning",
            DiagnosticCategory::Error => "error",
            DiagnosticCategory::Suggestion => "suggestion",
            DiagnosticCategory::Message => "message",
        };
        format!("{category}[S{}]: {}", self.code, self.message_text)
    }
}

/// Format a diagnostic message by replacing {0}, {1}, etc. with arguments.
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

/// A diagnostic message definition with code, category, and message template.
#[derive(Clone, Copy, Debug)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

/// Look up a diagnostic message definition by code.
#[must_use]
pub fn get_diagnostic_message(code: u32) -> Option<&'static DiagnosticMessage> {
    DIAGNOSTIC_MESSAGES.iter().find(|m| m.code == code)
}

/// Get the message template for a diagnostic code.
#[must_use]
pub fn get_message_template(code: u32) -> Option<&'static str> {
    get_diagnostic_message(code).map(|m| m.message)
}

#[cfg(test)]
#[path = "../../tests/diagnostics_tests.rs"]
mod tests;
