use pretty_assertions::assert_eq;

use ssml_tree::StructuralError::*;
use ssml_tree::{ErrorPos, StructuralError, TagTreeBuilder};

fn build_err(markup: &str) -> StructuralError {
    TagTreeBuilder::default().build(markup).unwrap_err()
}

#[test]
pub fn test_mismatched_tags() {
    let err = build_err("<a></b>");
    assert!(err.is_mismatch());
    assert!(!err.is_malformed());
    assert_eq!(
        MismatchedTag {
            expected: "a".to_string(),
            found: "b".to_string(),
            pos: ErrorPos { row: 1, col: 4 },
        },
        err
    );
    let message = err.to_string();
    assert!(message.contains("</b>"), "{}", message);
    assert!(message.contains("<a>"), "{}", message);
}

#[test]
pub fn test_non_matching_nested_tags() {
    // Opening tag "a" does not match closing tag "aa"
    let err = build_err("<root><a></aa></root>");
    assert!(matches!(err, MismatchedTag { .. }));
    assert_eq!(Some("aa"), err.target());
}

#[test]
pub fn test_close_is_case_sensitive() {
    assert!(build_err("<Speak></speak>").is_mismatch());
}

/// Scenario D
#[test]
pub fn test_unclosed_element() {
    let err = build_err("<a></a><b>");
    assert!(err.is_malformed());
    assert_eq!(
        UnclosedElement { name: "b".to_string(), pos: ErrorPos { row: 1, col: 8 } },
        err
    );
}

#[test]
pub fn test_unclosed_after_text() {
    let err = build_err("<speak>\n  hello <p>world");
    assert_eq!(Some("p"), err.target());
    assert_eq!(ErrorPos { row: 2, col: 9 }, err.pos());
}

#[test]
pub fn test_unterminated_tag() {
    for markup in &["<a", "<speak>text</speak", "<s>x<break time=\"1s\"/", "text <"] {
        let err = build_err(markup);
        assert!(matches!(err, UnterminatedTag { .. }), "{}: {:?}", markup, err);
        assert!(err.is_malformed());
        assert_eq!(None, err.target());
    }
}

#[test]
pub fn test_unterminated_tag_position() {
    let err = build_err("<s>\nabc <break");
    assert_eq!(UnterminatedTag { pos: ErrorPos { row: 2, col: 5 } }, err);
}

#[test]
pub fn test_closing_tag_at_root() {
    let err = build_err("</speak>");
    assert_eq!(
        UnexpectedClosingTag { name: "speak".to_string(), pos: ErrorPos { row: 1, col: 1 } },
        err
    );

    let err = build_err("<a></a></a>");
    assert!(matches!(err, UnexpectedClosingTag { .. }));
    assert!(err.is_malformed());
}

#[test]
pub fn test_empty_tag_name() {
    for markup in &["<>", "<s></>", "< s></s>", "<s>< /s>"] {
        let err = build_err(markup);
        assert!(matches!(err, EmptyTagName { .. }), "{}: {:?}", markup, err);
    }
}

#[test]
pub fn test_first_error_wins() {
    let err = build_err("<a></b><c");
    assert!(err.is_mismatch());
}
