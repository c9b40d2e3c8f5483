use super::*;

#[test]
fn test_at_covers_len_bytes() {
    let span = Span::at(7, 2);
    assert_eq!(span, Span::new(7, 9));
    assert_eq!(span.len(), 2);
    assert!(Span::new(0, 20).contains(span));
}

#[test]
fn test_at_saturates_at_end_of_range() {
    let span = Span::at(u32::MAX - 1, 2);
    assert_eq!(span.start, u32::MAX - 1);
    assert_eq!(span.end, u32::MAX);
    assert_eq!(span.len(), 1);
    assert!(!span.is_empty());
}
