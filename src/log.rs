//! A structured log of recovery decisions, in the same spirit as the
//! teacher's `RepairLogEntry`/`Logger` (`src/parser/mod.rs`). No
//! `log`/`tracing` dependency appears anywhere in the teacher's stack for
//! this kind of thing — its answer to "what did the repair do" is an
//! in-process, structured record, not an external logging facade, and this
//! crate keeps that answer rather than bolting one on.

/// One recovery decision made while normalizing. Gated by the `logging`
/// feature and `Options::logging`; otherwise normalization never allocates
/// for this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoverLogEntry {
    /// Char position in the (possibly unwrapped) input the decision was made at.
    pub position: usize,
    /// A short, static description of what was recovered.
    pub message: &'static str,
}

#[derive(Default)]
pub(crate) struct Logger {
    enabled: bool,
    entries: Vec<RecoverLogEntry>,
}

impl Logger {
    pub(crate) fn new(enabled: bool) -> Self {
        Self {
            enabled,
            entries: Vec::new(),
        }
    }

    pub(crate) fn log(&mut self, position: usize, message: &'static str) {
        if !self.enabled {
            return;
        }
        self.entries.push(RecoverLogEntry { position, message });
    }

    pub(crate) fn into_entries(self) -> Vec<RecoverLogEntry> {
        self.entries
    }
}
