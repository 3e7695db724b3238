// src/progress.rs
use std::path::Path;

use crate::titles::Title;

/// Lightweight progress reporting for the long-running scrape loop.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of titles to process.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one title's catalog has been written.
    fn item_done(&mut self, _title: Title, _path: &Path) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
