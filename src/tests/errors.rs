use crate::{RecoverErrorKind, to_string};

#[test]
fn unterminated_string_is_unexpected_end() {
    let err = to_string(r#"{"}"#).unwrap_err();
    assert_eq!(err.kind, RecoverErrorKind::UnexpectedEnd);
}

#[test]
fn bare_key_without_colon_is_expected_colon() {
    let err = to_string("{ toString }").unwrap_err();
    assert_eq!(err.kind, RecoverErrorKind::ExpectedColon);
}

#[test]
fn mismatched_closer_is_unbalanced_container() {
    let err = to_string("{ a: 1 ]").unwrap_err();
    assert_eq!(err.kind, RecoverErrorKind::UnbalancedContainer);
}

#[test]
fn mismatched_closer_in_array_is_unbalanced_container() {
    let err = to_string("[1, 2}").unwrap_err();
    assert_eq!(err.kind, RecoverErrorKind::UnbalancedContainer);
}

#[test]
fn truncated_object_is_unexpected_end() {
    let err = to_string("{ a: 1,").unwrap_err();
    assert_eq!(err.kind, RecoverErrorKind::UnexpectedEnd);
}

#[test]
fn truncated_array_is_unexpected_end() {
    let err = to_string("[1, 2").unwrap_err();
    assert_eq!(err.kind, RecoverErrorKind::UnexpectedEnd);
}

#[test]
fn bare_identifier_keyword_alone_is_not_an_error() {
    // `spec.md` §4.D.3: a bare identifier not followed by `:` is only an
    // error unless it is the sole token and represents true/false/null.
    // As a standalone top-level value (not an object key) it's just a
    // keyword scalar.
    assert_eq!(to_string("true").unwrap(), "true");
    assert_eq!(to_string("null").unwrap(), "null");
}

#[test]
fn error_display_includes_position() {
    let err = to_string("{ toString }").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("position"));
}
