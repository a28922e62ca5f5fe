//! Scalar Scanner (`spec.md` §4.D, items 1–2: keywords and numbers). Bare
//! and bracketed keys (items 3–4) live in `scanner::mod` since they need to
//! call back into value scanning. Grounded on the teacher's
//! `src/parser/number.rs` (tolerant number grammar) and
//! `parse_symbol_or_unquoted_string` in `src/parser/mod.rs` (keyword
//! normalization), narrowed to the grammar §4.D actually specifies.

use crate::cursor::Cursor;
use crate::error::RecoverError;
use crate::log::Logger;
use crate::options::Options;

/// JSON number grammar, plus: a leading `+` is tolerated and dropped, and a
/// trailing `.` is tolerated (emits `X.0`). Returns the bare token text;
/// callers decide whether it's safe to emit unquoted (see
/// [`scan_number_value`]).
fn scan_number_token(cur: &mut Cursor) -> Result<String, RecoverError> {
    let start = cur.pos();
    let mut out = String::new();
    if cur.peek(0) == Some('+') {
        cur.advance();
    }
    if cur.peek(0) == Some('-') {
        out.push('-');
        cur.advance();
    }
    let mut saw_digit = false;
    while let Some(c) = cur.peek(0) {
        if c.is_ascii_digit() {
            out.push(c);
            cur.advance();
            saw_digit = true;
        } else {
            break;
        }
    }
    if !saw_digit {
        return Err(RecoverError::unexpected_char(
            cur.peek(0).unwrap_or('\0'),
            start,
        ));
    }
    if cur.peek(0) == Some('.') {
        out.push('.');
        cur.advance();
        let mut saw_frac_digit = false;
        while let Some(c) = cur.peek(0) {
            if c.is_ascii_digit() {
                out.push(c);
                cur.advance();
                saw_frac_digit = true;
            } else {
                break;
            }
        }
        if !saw_frac_digit {
            out.push('0');
        }
    }
    if matches!(cur.peek(0), Some('e') | Some('E')) {
        let mark = cur.save();
        let mut exp = String::new();
        exp.push(cur.advance().unwrap());
        if matches!(cur.peek(0), Some('+') | Some('-')) {
            exp.push(cur.advance().unwrap());
        }
        let mut saw_exp_digit = false;
        while let Some(c) = cur.peek(0) {
            if c.is_ascii_digit() {
                exp.push(c);
                cur.advance();
                saw_exp_digit = true;
            } else {
                break;
            }
        }
        if saw_exp_digit {
            out.push_str(&exp);
        } else {
            cur.restore(mark);
        }
    }
    Ok(out)
}

/// A numeric token in object-key position: always re-quoted by the caller
/// (`spec.md` §4.D.3), so a leading zero can never produce invalid JSON
/// here — the raw token is fine as-is.
pub fn scan_number(cur: &mut Cursor) -> Result<String, RecoverError> {
    scan_number_token(cur)
}

/// True if `tok` (after an optional leading `-`) starts with `0` followed
/// by another digit — the one numeral shape JSON's grammar forbids
/// (`spec.md` §3 Invariant 1: every emitted `Json` segment must parse under
/// a strict parser).
fn has_invalid_leading_zero(tok: &str) -> bool {
    let digits = tok.strip_prefix('-').unwrap_or(tok);
    let bytes = digits.as_bytes();
    bytes.len() > 1 && bytes[0] == b'0' && bytes[1].is_ascii_digit()
}

/// A numeric token in value position. A bare leading-zero numeral (`007`)
/// is not strict JSON, so instead of emitting it verbatim it is quoted as a
/// JSON string — the teacher's `LeadingZeroPolicy::QuoteAsString`
/// (`src/parser/number.rs`), not its `KeepAsNumber` default.
fn scan_number_value(cur: &mut Cursor, logger: &mut Logger) -> Result<String, RecoverError> {
    let pos = cur.pos();
    let tok = scan_number_token(cur)?;
    if has_invalid_leading_zero(&tok) {
        logger.log(pos, "quoted a leading-zero numeral as a string");
        Ok(format!("\"{tok}\""))
    } else {
        Ok(tok)
    }
}

/// A maximal run of ASCII letters, matched case-insensitively against
/// `true`/`false`/`null`/`none` (and Python-style `True`/`False`/`None`,
/// already covered by the case-insensitive match) and, if tolerated,
/// `undefined`.
pub fn scan_keyword(cur: &mut Cursor, opts: &Options, logger: &mut Logger) -> Result<String, RecoverError> {
    let start = cur.pos();
    let mut word = String::new();
    while let Some(c) = cur.peek(0) {
        if c.is_ascii_alphabetic() {
            word.push(c);
            cur.advance();
        } else {
            break;
        }
    }
    let canonical = match word.to_ascii_lowercase().as_str() {
        "true" => "true",
        "false" => "false",
        "null" | "none" => "null",
        "undefined" if opts.repair_undefined => "null",
        _ => {
            return Err(RecoverError::unexpected_char(
                word.chars().next().unwrap_or('\0'),
                start,
            ));
        }
    };
    if word != canonical {
        logger.log(start, "normalized a keyword to its canonical spelling");
    }
    Ok(canonical.to_string())
}

/// Dispatch a scalar value: number first if the lookahead is digit/sign/dot,
/// otherwise a keyword run.
pub fn scan_scalar_value(cur: &mut Cursor, opts: &Options, logger: &mut Logger) -> Result<String, RecoverError> {
    match cur.peek(0) {
        Some(c) if c.is_ascii_digit() || c == '-' || c == '+' || c == '.' => {
            scan_number_value(cur, logger)
        }
        Some(c) if c.is_ascii_alphabetic() => scan_keyword(cur, opts, logger),
        Some(c) => Err(RecoverError::unexpected_char(c, cur.pos())),
        None => Err(RecoverError::unexpected_end(cur.pos())),
    }
}
