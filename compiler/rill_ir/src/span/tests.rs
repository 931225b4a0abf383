use super::*;
use pretty_assertions::assert_eq;

#[test]
fn span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
}

#[test]
fn span_point() {
    let point = Span::point(42);
    assert_eq!(point.start, 42);
    assert_eq!(point.end, 42);
    assert!(point.is_empty());
    assert_eq!(point.len(), 0);
}

#[test]
fn span_to_range() {
    assert_eq!(Span::new(3, 7).to_range(), 3..7);
}

#[test]
fn span_display_and_debug_match() {
    let span = Span::new(4, 9);
    assert_eq!(span.to_string(), "4..9");
    assert_eq!(format!("{span:?}"), "4..9");
}
