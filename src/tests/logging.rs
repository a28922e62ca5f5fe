#![cfg(feature = "logging")]

use crate::{Options, normalize_with_log};

fn messages(input: &str) -> Vec<&'static str> {
    let (_, entries) = normalize_with_log(
        input,
        &Options {
            logging: true,
            ..Options::default()
        },
    )
    .unwrap();
    entries.into_iter().map(|e| e.message).collect()
}

#[test]
fn logging_disabled_by_default_even_with_feature_on() {
    let (_, entries) = normalize_with_log("{ a: 1, }", &Options::default()).unwrap();
    assert!(entries.is_empty());
}

#[test]
fn logs_missing_comma_synthesis_in_object() {
    let msgs = messages("{ a: 1\nb: 2 }");
    assert!(msgs.contains(&"synthesized a missing comma between object entries"));
}

#[test]
fn logs_missing_comma_synthesis_in_array() {
    let msgs = messages("[1 2 3]");
    assert!(msgs.contains(&"synthesized a missing comma between array elements"));
}

#[test]
fn logs_trailing_comma_removal() {
    let msgs = messages("{ a: 1, }");
    assert!(msgs.contains(&"swallowed a trailing comma before '}'"));

    let msgs = messages("[1, 2,]");
    assert!(msgs.contains(&"swallowed a trailing comma before ']'"));
}

#[test]
fn logs_keyword_normalization() {
    let msgs = messages("{ a: True, b: noNe }");
    let count = msgs
        .iter()
        .filter(|m| **m == "normalized a keyword to its canonical spelling")
        .count();
    assert_eq!(count, 2);
}

#[test]
fn does_not_log_already_canonical_keywords() {
    let msgs = messages("{ a: true, b: null }");
    assert!(
        !msgs.contains(&"normalized a keyword to its canonical spelling"),
        "no recovery decision was made for already-canonical keywords"
    );
}

#[test]
fn logs_circular_reference_substitution() {
    let msgs = messages("{ self: [Circular *1] }");
    assert!(msgs.contains(&"substituted a circular-reference marker with a sentinel string"));
}

#[test]
fn logs_non_standard_quote_convention_choice() {
    let msgs = messages("{ a: 'x', b: `y` }");
    let count = msgs
        .iter()
        .filter(|m| **m == "chose a non-standard quote convention for a string literal")
        .count();
    assert_eq!(count, 2);
}

#[test]
fn does_not_log_standard_double_quotes() {
    let msgs = messages(r#"{ "a": "x" }"#);
    assert!(!msgs.contains(&"chose a non-standard quote convention for a string literal"));
}

#[test]
fn logs_leading_zero_quoting() {
    let msgs = messages("{ a: 007 }");
    assert!(msgs.contains(&"quoted a leading-zero numeral as a string"));
}
