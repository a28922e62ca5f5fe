//! Selectors (`spec.md` §4.G): pick one `Json` segment out of the Text
//! Splitter's output. Grounded on the teacher's CLI case-selection helpers
//! (`src/bin/print_case.rs`, since deleted as out of scope here) for the
//! first/last/largest shape; `matching` is new, grounded on `regex` usage
//! elsewhere in the example pack (no engine in the teacher's own stack
//! covers pattern matching over text).

use crate::segment::Segment;

/// The first `Json` segment, or `""` if none.
pub fn first_json(segments: &[Segment]) -> String {
    segments
        .iter()
        .find(|s| s.is_json())
        .map(|s| s.as_str().to_string())
        .unwrap_or_default()
}

/// The last `Json` segment, or `""` if none.
pub fn last_json(segments: &[Segment]) -> String {
    segments
        .iter()
        .rev()
        .find(|s| s.is_json())
        .map(|s| s.as_str().to_string())
        .unwrap_or_default()
}

/// The `Json` segment with the most characters; ties keep the first.
pub fn largest_json(segments: &[Segment]) -> String {
    let mut best: Option<&str> = None;
    for s in segments.iter().filter(|s| s.is_json()) {
        let candidate = s.as_str();
        match best {
            Some(current) if current.chars().count() >= candidate.chars().count() => {}
            _ => best = Some(candidate),
        }
    }
    best.map(|s| s.to_string()).unwrap_or_default()
}

/// The first `Json` segment whose text matches `pattern`. An invalid
/// pattern is treated the same as "no match" — this selector never throws.
pub fn json_matching(segments: &[Segment], pattern: &str) -> String {
    let re = match regex::Regex::new(pattern) {
        Ok(re) => re,
        Err(_) => return String::new(),
    };
    segments
        .iter()
        .filter(|s| s.is_json())
        .find(|s| re.is_match(s.as_str()))
        .map(|s| s.as_str().to_string())
        .unwrap_or_default()
}

/// Flatten segments into the plain list of strings §6 specifies for
/// `to_array_of_plain_strings_or_json`: plain runs and canonical JSON
/// strings, interleaved in input order.
pub fn to_array_of_plain_strings_or_json(segments: Vec<Segment>) -> Vec<String> {
    segments.into_iter().map(Segment::into_string).collect()
}
