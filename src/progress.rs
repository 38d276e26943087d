// src/progress.rs
/// Lightweight progress reporting used by long-running operations
/// (season download, team stat fan-out). Frontends (GUI/CLI) implement this
/// to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One logical unit completed (a season, a team).
    fn item_done(&mut self, _label: &str) {}

    /// One logical unit was given up on; the run goes on without it.
    fn item_failed(&mut self, _label: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Records every call. Exists for the unit and integration tests, which
/// check what a run reported; not meant for frontends.
#[doc(hidden)]
#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub total: Option<usize>,
    pub lines: Vec<String>,
    pub done: Vec<String>,
    pub failed: Vec<String>,
    pub finished: bool,
}

impl Progress for RecordingProgress {
    fn begin(&mut self, total: usize) { self.total = Some(total); }
    fn log(&mut self, msg: &str) { self.lines.push(s!(msg)); }
    fn item_done(&mut self, label: &str) { self.done.push(s!(label)); }
    fn item_failed(&mut self, label: &str) { self.failed.push(s!(label)); }
    fn finish(&mut self) { self.finished = true; }
}
