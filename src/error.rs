use thiserror::Error;

/// The four non-local exits the structural scanner can take.
///
/// `UnbalancedContainer` covers both a closer that doesn't match the open
/// container kind (`{ ... ]`) and a closer with nothing open to match.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecoverErrorKind {
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("expected ':' after object key")]
    ExpectedColon,
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),
    #[error("unbalanced container")]
    UnbalancedContainer,
}

/// An error produced by the structural scanner, with the char position it was
/// raised at. Positions are best-effort diagnostics, not guaranteed offsets
/// into the original byte stream (`spec.md` excludes byte-offset
/// preservation as a feature).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at position {position}")]
pub struct RecoverError {
    pub kind: RecoverErrorKind,
    pub position: usize,
}

impl RecoverError {
    pub fn new(kind: RecoverErrorKind, position: usize) -> Self {
        Self { kind, position }
    }

    pub fn unexpected_end(position: usize) -> Self {
        Self::new(RecoverErrorKind::UnexpectedEnd, position)
    }

    pub fn expected_colon(position: usize) -> Self {
        Self::new(RecoverErrorKind::ExpectedColon, position)
    }

    pub fn unexpected_char(c: char, position: usize) -> Self {
        Self::new(RecoverErrorKind::UnexpectedChar(c), position)
    }

    pub fn unbalanced_container(position: usize) -> Self {
        Self::new(RecoverErrorKind::UnbalancedContainer, position)
    }
}
