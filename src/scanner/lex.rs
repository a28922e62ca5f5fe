//! Shared lexical helpers used by the Structural and Scalar Scanners.
//! Grounded on the teacher's `src/parser/lex.rs` (`skip_ws_and_comments`),
//! narrowed to the whitespace set §4.E names explicitly (space, tab, CR, LF,
//! form-feed) and generalized to also skip `//` / `/* */` comments when
//! `Options::tolerate_comments` is set.

use crate::cursor::Cursor;
use crate::options::Options;

#[inline]
pub fn is_json_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\u{000C}')
}

/// Skip whitespace and, if tolerated, comments. Idempotent: call again and
/// it's a no-op once the cursor sits on a non-whitespace, non-comment char.
pub fn skip_ws_and_comments(cur: &mut Cursor, opts: &Options) {
    loop {
        match cur.peek(0) {
            Some(c) if is_json_whitespace(c) => {
                cur.advance();
            }
            Some('/') if opts.tolerate_comments && cur.peek(1) == Some('/') => {
                cur.advance();
                cur.advance();
                while !matches!(cur.peek(0), None | Some('\n')) {
                    cur.advance();
                }
            }
            Some('/') if opts.tolerate_comments && cur.peek(1) == Some('*') => {
                cur.advance();
                cur.advance();
                loop {
                    match cur.peek(0) {
                        None => break,
                        Some('*') if cur.peek(1) == Some('/') => {
                            cur.advance();
                            cur.advance();
                            break;
                        }
                        _ => {
                            cur.advance();
                        }
                    }
                }
            }
            _ => break,
        }
    }
}

#[inline]
pub fn is_bare_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

#[inline]
pub fn is_structural_char(c: char) -> bool {
    matches!(c, '{' | '}' | '[' | ']' | ':' | ',')
}
