//! Quote Classifier (`spec.md` §4.B). Grounded on the teacher's
//! `classify.rs`, which already recognizes that a "quote" in this grammar
//! isn't just `"`/`'` — `is_double_quote_like`/`is_single_quote_like` hint at
//! sloped and backtick variants but were never wired past a simple char
//! class. Here each convention gets its own opener/closer pair and escape
//! rules per the table in §4.B, and selection picks the longest opener that
//! matches (`\\"` beats `\"` beats `"`).

use crate::cursor::Cursor;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum QuoteKind {
    /// `"..."`, the standard JSON string.
    Dq,
    /// `'...'`.
    Sq,
    /// `` `...` ``.
    Bt,
    /// `"..."` — Word/typographer's curly quotes.
    SlopeDq,
    /// `\"..\"` — a JSON payload that was itself double-quote-escaped once
    /// (typical of log pipelines that re-quote their payloads).
    EscDq,
    /// `\\"..\\"` — escaped twice.
    EscEscDq,
}

impl QuoteKind {
    /// Length in chars of this convention's opener (and closer, they match).
    pub fn token_len(self) -> usize {
        match self {
            QuoteKind::Dq | QuoteKind::Sq | QuoteKind::Bt | QuoteKind::SlopeDq => 1,
            QuoteKind::EscDq => 2,
            QuoteKind::EscEscDq => 3,
        }
    }
}

const CURLY_OPEN_DQ: char = '\u{201C}'; // "
const CURLY_CLOSE_DQ: char = '\u{201D}'; // "

/// Classify the string convention starting at the cursor, without consuming
/// anything. Returns `None` if no opener matches.
pub fn classify(cur: &Cursor) -> Option<QuoteKind> {
    // Longest opener first: `\\"` (3) beats `\"` (2) beats `"` (1).
    if cur.peek(0) == Some('\\') && cur.peek(1) == Some('\\') && cur.peek(2) == Some('"') {
        return Some(QuoteKind::EscEscDq);
    }
    if cur.peek(0) == Some('\\') && cur.peek(1) == Some('"') {
        return Some(QuoteKind::EscDq);
    }
    match cur.peek(0) {
        Some('"') => Some(QuoteKind::Dq),
        Some('\'') => Some(QuoteKind::Sq),
        Some('`') => Some(QuoteKind::Bt),
        Some(CURLY_OPEN_DQ) => Some(QuoteKind::SlopeDq),
        _ => None,
    }
}

pub fn closer(kind: QuoteKind) -> char {
    match kind {
        QuoteKind::Dq | QuoteKind::EscDq | QuoteKind::EscEscDq => '"',
        QuoteKind::Sq => '\'',
        QuoteKind::Bt => '`',
        QuoteKind::SlopeDq => CURLY_CLOSE_DQ,
    }
}
