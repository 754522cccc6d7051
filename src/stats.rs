//! Batch run counters.
//!
//! `RunStats` tracks how many lines a run consumed and answered, plus
//! wall time. It only counts; reporting goes to stderr so stdout stays
//! a clean answer stream.

use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Default, Serialize)]
pub struct RunStats {
    /// Lines read from the input file, blank ones included.
    pub lines_read: u64,
    /// Blank lines skipped without an answer.
    pub lines_skipped: u64,
    /// Puzzle instances solved.
    pub answers: u64,
    #[serde(rename = "elapsed_ms", serialize_with = "as_millis")]
    pub elapsed: Duration,
}

fn as_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u128(d.as_millis())
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick_line(&mut self) {
        self.lines_read += 1;
    }

    pub fn tick_skipped(&mut self) {
        self.lines_skipped += 1;
    }

    pub fn tick_answer(&mut self) {
        self.answers += 1;
    }

    pub fn report(&self) {
        eprintln!(
            "Solved {} of {} lines ({} blank) in {:.2?}",
            self.answers, self.lines_read, self.lines_skipped, self.elapsed
        );
    }
}
