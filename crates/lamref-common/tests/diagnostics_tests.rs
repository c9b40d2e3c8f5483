use super::*;

#[test]
fn test_format_message_fills_placeholders() {
    assert_eq!(format_message("a {0} b {1}", &["x", "y"]), "a x b y");
    assert_eq!(
        format_message(diagnostic_messages::REPLACE_LAMBDA_WITH_METHOD_REFERENCE, &[""]),
        "Replace this lambda with a method reference."
    );
}

#[test]
fn test_message_lookup() {
    let message = get_diagnostic_message(diagnostic_codes::REPLACE_LAMBDA_WITH_METHOD_REFERENCE)
        .expect("message registered");
    assert_eq!(message.category, DiagnosticCategory::Suggestion);
    assert_eq!(
        get_message_template(1612),
        Some("Replace this lambda with a method reference.{0}")
    );
    assert!(get_diagnostic_message(9999).is_none());
}

#[test]
fn test_diagnostic_from_message() {
    let message = &DIAGNOSTIC_MESSAGES[0];
    let diag = Diagnostic::from_message(
        "Foo.java",
        Span::at(12, 2),
        message,
        format_message(message.message, &[""]),
    );
    assert_eq!(diag.start, 12);
    assert_eq!(diag.length, 2);
    assert_eq!(diag.span(), Span::new(12, 14));
    assert_eq!(
        diag.format_simple(),
        "suggestion[S1612]: Replace this lambda with a method reference."
    );
}
