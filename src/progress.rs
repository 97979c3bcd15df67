//! Progress reporting as an injected observer.
//!
//! The pipeline reports one unit of completed work per provider fetch
//! (one for the competition index, one per competition, one per window date).
//! Sinks are purely observational and must not influence pipeline behavior.

use std::io::Write;

/// Observer for pipeline fetch progress.
pub trait ProgressSink {
    /// Extends the expected amount of work by `units`.
    fn add_work(&mut self, units: u64);

    /// Marks `units` of work as complete.
    fn advance(&mut self, units: u64);
}

/// Sink that discards all progress signals. Used in tests and library callers
/// that do not surface progress.
#[derive(Debug, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn add_work(&mut self, _units: u64) {}
    fn advance(&mut self, _units: u64) {}
}

/// Sink that renders a `[done/total]` counter on stderr, rewriting the same
/// line as work completes.
#[derive(Debug, Default)]
pub struct ConsoleProgress {
    done: u64,
    total: u64,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Terminates the counter line once the run is complete.
    pub fn finish(&self) {
        eprintln!();
    }
}

impl ProgressSink for ConsoleProgress {
    fn add_work(&mut self, units: u64) {
        self.total += units;
    }

    fn advance(&mut self, units: u64) {
        self.done += units;
        eprint!("\r[{}/{}] fetches complete", self.done, self.total);
        let _ = std::io::stderr().flush();
    }
}
