mod classify;
mod cursor;
pub mod error;
mod log;
pub mod options;
mod scanner;
mod segment;
mod select;
mod splitter;

pub use error::{RecoverError, RecoverErrorKind};
pub use options::Options;
pub use segment::Segment;

#[cfg(feature = "logging")]
pub use log::RecoverLogEntry;

use cursor::Cursor;
use log::Logger;

// ============================================================================
// Core API - normalize a single candidate
// ============================================================================

/// Normalize a single JSON-like candidate into strict, parser-valid JSON.
///
/// Handles the common sources of "JSON-like but not JSON" text: single- and
/// backtick-quoted strings, unquoted object keys, missing/trailing/leading
/// commas, `+`-concatenated strings, Python-style keywords, and debug-printer
/// artifacts like `<ref *1>` / `[Circular *1]`.
///
/// # Examples
///
/// ```
/// use jsonrecover::to_string;
///
/// let messy = "{ test: 'test', array: ['test', { test: 'test' }] }";
/// let fixed = to_string(messy)?;
/// assert_eq!(fixed, r#"{ "test": "test", "array": ["test", { "test": "test" }] }"#);
/// # Ok::<(), jsonrecover::RecoverError>(())
/// ```
pub fn to_string(input: &str) -> Result<String, RecoverError> {
    normalize(input, &Options::default())
}

/// Like [`to_string`], with explicit [`Options`].
///
/// # Examples
///
/// ```
/// use jsonrecover::{normalize, Options};
///
/// let messy = "{ abc: True, d: None, e: noNe }";
/// let fixed = normalize(messy, &Options::default())?;
/// assert_eq!(fixed, r#"{ "abc": true, "d": null, "e": null }"#);
/// # Ok::<(), jsonrecover::RecoverError>(())
/// ```
pub fn normalize(input: &str, opts: &Options) -> Result<String, RecoverError> {
    let mut logger = Logger::new(false);
    normalize_impl(input, opts, &mut logger)
}

/// Like [`normalize`], but also returns a log of the recovery decisions
/// made along the way. Only populated when built with the `logging`
/// feature and `opts.logging` is set; otherwise the log is empty.
#[cfg(feature = "logging")]
pub fn normalize_with_log(
    input: &str,
    opts: &Options,
) -> Result<(String, Vec<RecoverLogEntry>), RecoverError> {
    let mut logger = Logger::new(opts.logging);
    let out = normalize_impl(input, opts, &mut logger)?;
    Ok((out, logger.into_entries()))
}

fn normalize_impl(input: &str, opts: &Options, logger: &mut Logger) -> Result<String, RecoverError> {
    let unwrapped = unwrap_stringified(input, opts, logger);
    let mut cur = Cursor::new(&unwrapped);
    let out = scanner::parse_value(&mut cur, opts, logger)?;
    scanner::lex::skip_ws_and_comments(&mut cur, opts);
    if !cur.eof() {
        return Err(RecoverError::unexpected_char(
            cur.peek(0).unwrap_or('\0'),
            cur.pos(),
        ));
    }
    Ok(out)
}

/// Stringified-string unwrapping (`spec.md` §4.E): if the whole trimmed
/// input is a single balanced JSON string whose decoded content itself
/// looks like an object or array, recurse into the decoded payload. Bounded
/// by `opts.unwrap_depth` (at least 4) so a pathologically re-encoded
/// payload can't recurse forever.
fn unwrap_stringified(input: &str, opts: &Options, logger: &mut Logger) -> String {
    let mut current = input.trim().to_string();
    let max_depth = opts.unwrap_depth.max(4);
    for _ in 0..max_depth {
        let trimmed = current.trim();
        if !(trimmed.starts_with('"') || trimmed.starts_with("\\\"")) {
            break;
        }
        let mut cur = Cursor::new(trimmed);
        let decoded = match scanner::strings::scan_raw_string_literal(&mut cur, opts) {
            Ok(decoded) => decoded,
            Err(_) => break,
        };
        scanner::lex::skip_ws_and_comments(&mut cur, opts);
        if !cur.eof() {
            // Trailing content after the literal: not a lone stringified
            // payload, leave it for the structural scanner to report.
            break;
        }
        let inner = decoded.trim();
        let looks_like_container = inner.starts_with('{') || inner.starts_with('[');
        let looks_like_further_string = inner.starts_with('"') || inner.starts_with("\\\"");
        if looks_like_container || looks_like_further_string {
            logger.log(0, "unwrapped a stringified JSON payload");
            current = decoded;
            continue;
        }
        break;
    }
    current
}

// ============================================================================
// Text Splitter and Selectors
// ============================================================================

/// Split `input` into an ordered list of plain-text runs and normalized
/// JSON strings, interleaved in source order. Never fails: a `{` that
/// doesn't lead to valid structure is left inside the surrounding plain
/// text.
///
/// # Examples
///
/// ```
/// use jsonrecover::to_array_of_plain_strings_or_json;
///
/// let parts = to_array_of_plain_strings_or_json("before { a: 1 } after");
/// assert_eq!(parts, vec!["before ", r#"{ "a": 1 }"#, " after"]);
/// ```
pub fn to_array_of_plain_strings_or_json(input: &str) -> Vec<String> {
    select::to_array_of_plain_strings_or_json(splitter::split(input, &Options::default()))
}

/// The first recognized JSON span in `input`, or an empty string if none.
pub fn first_json(input: &str) -> String {
    select::first_json(&splitter::split(input, &Options::default()))
}

/// The last recognized JSON span in `input`, or an empty string if none.
///
/// # Examples
///
/// ```
/// use jsonrecover::last_json;
///
/// let text = "text before { test: 'test' } text { hey: 1 } after";
/// assert_eq!(last_json(text), r#"{ "hey": 1 }"#);
/// ```
pub fn last_json(input: &str) -> String {
    select::last_json(&splitter::split(input, &Options::default()))
}

/// The longest recognized JSON span in `input`; ties keep the first.
pub fn largest_json(input: &str) -> String {
    select::largest_json(&splitter::split(input, &Options::default()))
}

/// The first recognized JSON span whose normalized text matches `pattern`.
/// An invalid regex is treated as "no match" — this never throws.
pub fn json_matching(input: &str, pattern: &str) -> String {
    select::json_matching(&splitter::split(input, &Options::default()), pattern)
}

#[cfg(test)]
mod tests;
