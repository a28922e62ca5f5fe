use crate::{
    first_json, json_matching, largest_json, last_json, to_array_of_plain_strings_or_json,
};

#[test]
fn split_interleaves_plain_and_json_in_order() {
    let parts = to_array_of_plain_strings_or_json("before { a: 1 } middle { b: 2 } after");
    assert_eq!(
        parts,
        vec![
            "before ",
            r#"{ "a": 1 }"#,
            " middle ",
            r#"{ "b": 2 }"#,
            " after",
        ]
    );
}

#[test]
fn unbalanced_brace_stays_in_plain_text() {
    let parts = to_array_of_plain_strings_or_json("a { b: 1 c");
    // `{ b: 1 c` never closes, so the whole thing stays one plain run.
    assert_eq!(parts, vec!["a { b: 1 c"]);
}

#[test]
fn no_braces_is_a_single_plain_run() {
    let parts = to_array_of_plain_strings_or_json("just some log text, no json here");
    assert_eq!(parts, vec!["just some log text, no json here"]);
}

#[test]
fn adjacent_json_spans_do_not_merge_plain_runs() {
    let parts = to_array_of_plain_strings_or_json("{a: 1}{b: 2}");
    assert_eq!(parts, vec![r#"{ "a": 1 }"#, r#"{ "b": 2 }"#]);
}

#[test]
fn first_json_picks_the_first_valid_span() {
    let text = "junk { a: 1 } more { b: 2 }";
    assert_eq!(first_json(text), r#"{ "a": 1 }"#);
}

#[test]
fn last_json_picks_the_last_valid_span() {
    let text = "text before { test: 'test' } text { hey: 1 } after";
    assert_eq!(last_json(text), r#"{ "hey": 1 }"#);
}

#[test]
fn last_json_is_empty_when_nothing_matches() {
    assert_eq!(last_json("no braces at all"), "");
}

#[test]
fn largest_json_prefers_longer_span_and_ties_keep_first() {
    let text = "{a: 1} and { a: 1, b: 2, c: 3 } and {x: 9}";
    assert_eq!(largest_json(text), r#"{ "a": 1, "b": 2, "c": 3 }"#);
    assert_eq!(largest_json("{a: 1} {b: 2}"), r#"{ "a": 1 }"#);
}

#[test]
fn json_matching_finds_first_segment_satisfying_pattern() {
    let text = "{ kind: 'a', n: 1 } { kind: 'b', n: 2 }";
    assert_eq!(
        json_matching(text, r#""kind": "b""#),
        r#"{ "kind": "b", "n": 2 }"#
    );
}

#[test]
fn json_matching_returns_empty_on_invalid_regex() {
    assert_eq!(json_matching("{ a: 1 }", "(unclosed"), "");
}

#[test]
fn json_matching_returns_empty_when_nothing_matches() {
    assert_eq!(json_matching("{ a: 1 }", "nope"), "");
}
