//! Static diagnostic message table.

use super::{DiagnosticCategory, DiagnosticMessage};

pub mod diagnostic_codes {
    pub const REPLACE_LAMBDA_WITH_METHOD_REFERENCE: u32 = 1612;
}

pub mod diagnostic_messages {
    pub const REPLACE_LAMBDA_WITH_METHOD_REFERENCE: &str =
        "Replace this lambda with a method reference.{0}";
}

pub const REPLACE_LAMBDA_WITH_METHOD_REFERENCE: DiagnosticMessage = DiagnosticMessage {
    code: diagnostic_codes::REPLACE_LAMBDA_WITH_METHOD_REFERENCE,
    category: DiagnosticCategory::Suggestion,
    message: diagnostic_messages::REPLACE_LAMBDA_WITH_METHOD_REFERENCE,
};

pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[REPLACE_LAMBDA_WITH_METHOD_REFERENCE];
