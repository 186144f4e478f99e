// src/progress.rs
/// Lightweight progress reporting for a multi-season rebuild.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of seasons to read.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one season has been fully read into the league.
    fn year_done(&mut self, _year: i32) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
