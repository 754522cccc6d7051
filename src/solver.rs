//! Gap-filling solver.
//!
//! One puzzle instance runs in two phases. The generate phase seeds
//! the sequence with k pseudo-random values and mirrors them into the
//! blocked window. The advance phase then runs n - k steps, each
//! appending the smallest integer the window does not currently hold
//! and aging the oldest windowed value out. The answer for the line is
//! the last value appended.

use crate::{CountedSet, LacunaError, Lcg, Params};

/// Per-line solver state. Built fresh for every input line; nothing is
/// shared across instances.
pub struct GapSolver {
    /// Sequence length to stop at.
    target: u64,
    /// Trailing window size.
    window: u64,
    /// Every value produced so far, in order.
    sequence: Vec<u64>,
    /// Multiset of the last `window` elements of `sequence`.
    blocked: CountedSet,
}

impl GapSolver {
    /// Generate phase: run the generator for k values and block each
    /// one. After this the sequence holds exactly k entries and the
    /// window covers all of them.
    pub fn new(params: &Params) -> Self {
        let mut sequence = Vec::with_capacity(params.n as usize);
        let mut blocked = CountedSet::new();
        let generator = Lcg::new(params.a, params.b, params.c, params.r);
        for value in generator.take(params.k as usize) {
            sequence.push(value);
            blocked.insert(value);
        }
        Self {
            target: params.n,
            window: params.k,
            sequence,
            blocked,
        }
    }

    /// One advance step: find the smallest free integer, append and
    /// block it, then evict the value that just left the window.
    /// Returns the appended value.
    pub fn step(&mut self) -> Result<u64, LacunaError> {
        let index = self.sequence.len();
        let found = self.blocked.smallest_absent();
        self.sequence.push(found);
        self.blocked.insert(found);
        let evicted = self.sequence[index - self.window as usize];
        self.blocked.remove_one(evicted)?;
        Ok(found)
    }

    /// Advance phase: step until the sequence reaches its target
    /// length and return the final element.
    pub fn advance(&mut self) -> Result<u64, LacunaError> {
        while (self.sequence.len() as u64) < self.target {
            self.step()?;
        }
        self.sequence
            .last()
            .copied()
            .ok_or_else(|| LacunaError::Solver("advance on an empty sequence".into()))
    }

    /// Every value produced so far, generation order.
    pub fn sequence(&self) -> &[u64] {
        &self.sequence
    }

    /// The blocked window contents.
    pub fn blocked(&self) -> &CountedSet {
        &self.blocked
    }
}

/// Solve one puzzle line end to end.
pub fn solve(params: &Params) -> Result<u64, LacunaError> {
    GapSolver::new(params).advance()
}
