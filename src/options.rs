/// Tuning knobs the grammar in `spec.md` §4 leaves as policy rather than hard
/// rule. Defaults match the scenarios in §8.
#[derive(Clone, Debug)]
pub struct Options {
    /// Bound on stringified-string unwrapping recursion (§4.E). Must be at
    /// least 4 per the spec; defaults to 8 per §5.
    pub unwrap_depth: usize,
    /// Escape non-ASCII scalars in emitted strings as `\uXXXX` instead of
    /// copying them verbatim.
    pub ensure_ascii: bool,
    /// Convert the bare keyword `undefined` to `null`, alongside
    /// `none`/`None`/`noNe`/`True`/`False` already required by §4.D.
    pub repair_undefined: bool,
    /// Tolerate `//` and `/* */` comments between tokens, treated like
    /// insignificant whitespace.
    pub tolerate_comments: bool,
    /// Record a `RecoverLogEntry` for every recovery decision made while
    /// normalizing. Only takes effect when built with the `logging` feature.
    pub logging: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            unwrap_depth: 8,
            ensure_ascii: false,
            repair_undefined: true,
            tolerate_comments: true,
            logging: false,
        }
    }
}
