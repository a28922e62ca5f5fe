use crate::to_string;

#[test]
fn missing_comma_between_newline_separated_object_pairs() {
    let out = to_string("{\n\"abc\": \"def\"\n\"ghi\": \"jkl\"\n}").unwrap();
    assert_eq!(out, r#"{ "abc": "def", "ghi": "jkl" }"#);
}

#[test]
fn missing_comma_between_space_separated_array_elements() {
    let out = to_string("[1 2 3]").unwrap();
    assert_eq!(out, "[1, 2, 3]");
}

#[test]
fn missing_comma_before_nested_object() {
    let out = to_string("{ a: 1\nb: { c: 2 } }").unwrap();
    assert_eq!(out, r#"{ "a": 1, "b": { "c": 2 } }"#);
}

#[test]
fn line_comment_tolerated_between_tokens() {
    let out = to_string("{ // leading comment\n a: 1 }").unwrap();
    assert_eq!(out, r#"{ "a": 1 }"#);
}

#[test]
fn block_comment_tolerated_between_tokens() {
    let out = to_string("{ a: /* inline */ 1, b: 2 }").unwrap();
    assert_eq!(out, r#"{ "a": 1, "b": 2 }"#);
}

#[test]
fn comments_disabled_treats_slash_as_structural_error() {
    let mut opts = crate::Options::default();
    opts.tolerate_comments = false;
    let err = crate::normalize("{ // comment\n a: 1 }", &opts).unwrap_err();
    assert_eq!(err.kind, crate::RecoverErrorKind::UnexpectedChar('/'));
}

#[test]
fn trailing_comma_swallowed_even_with_whitespace_before_closer() {
    let out = to_string("{ a: 1,   }").unwrap();
    assert_eq!(out, r#"{ "a": 1 }"#);
}
