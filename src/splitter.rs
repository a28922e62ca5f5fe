//! Text Splitter (`spec.md` §4.F). Walks the input left to right, attempts
//! the Structural Scanner at every `{`, and falls back to plain text on
//! failure. Grounded on the teacher's top-level aggregation loop in
//! `src/parser/mod.rs` (`parse_root_many`), which already walks a mixed
//! buffer looking for JSON-shaped spans; here the "found a span, else plain
//! text" decision is made per-`{`, not once for the whole input.

use crate::cursor::Cursor;
use crate::log::Logger;
use crate::options::Options;
use crate::scanner;
use crate::segment::Segment;

/// Split `input` into an ordered sequence of [`Segment`]s. Never fails: a
/// `{` that doesn't lead to a valid structural parse is left inside the
/// surrounding plain-text run.
pub fn split(input: &str, opts: &Options) -> Vec<Segment> {
    let mut cur = Cursor::new(input);
    let mut segments = Vec::new();
    let mut plain = String::new();

    while !cur.eof() {
        if cur.peek(0) == Some('{') {
            let mark = cur.save();
            let mut logger = Logger::new(false);
            match scanner::parse_value(&mut cur, opts, &mut logger) {
                Ok(json_text) => {
                    if !plain.is_empty() {
                        segments.push(Segment::Plain(std::mem::take(&mut plain)));
                    }
                    segments.push(Segment::Json(json_text));
                }
                Err(_) => {
                    cur.restore(mark);
                    plain.push(cur.advance().expect("cursor was at '{' before restore"));
                }
            }
        } else {
            plain.push(cur.advance().expect("cursor checked non-eof above"));
        }
    }

    if !plain.is_empty() {
        segments.push(Segment::Plain(plain));
    }
    segments
}
