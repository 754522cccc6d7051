//! Ordered counted set backing the trailing window.
//!
//! Tracks how many of each value sit inside the last-k slice of the
//! produced sequence. Duplicates are legal and carried as counts, so
//! a value only becomes free again once every copy of it has aged out.

use std::collections::BTreeMap;

use crate::LacunaError;

/// Multiset over `u64` with an ordered key walk for gap queries.
#[derive(Debug, Clone, Default)]
pub struct CountedSet {
    counts: BTreeMap<u64, u32>,
}

impl CountedSet {
    pub fn new() -> Self {
        Self { counts: BTreeMap::new() }
    }

    /// Add one occurrence of `value`.
    pub fn insert(&mut self, value: u64) {
        *self.counts.entry(value).or_insert(0) += 1;
    }

    /// Remove one occurrence of `value`, dropping the key when the last
    /// occurrence goes. A miss means the window and the sequence have
    /// drifted apart, which callers treat as fatal.
    pub fn remove_one(&mut self, value: u64) -> Result<(), LacunaError> {
        match self.counts.get_mut(&value) {
            Some(count) if *count > 1 => {
                *count -= 1;
                Ok(())
            }
            Some(_) => {
                self.counts.remove(&value);
                Ok(())
            }
            None => Err(LacunaError::Solver(format!(
                "evicting {value} which is not in the window"
            ))),
        }
    }

    /// Smallest non-negative integer with no occurrence in the set.
    ///
    /// Walks the sorted keys from the bottom and returns the first gap:
    /// before the first key, between two keys, or past the last one.
    /// Each query starts from zero; nothing is cached across calls
    /// because an eviction can free a value below any earlier answer.
    pub fn smallest_absent(&self) -> u64 {
        let mut candidate = 0u64;
        for &key in self.counts.keys() {
            if key > candidate {
                break;
            }
            candidate = key + 1;
        }
        candidate
    }

    /// Occurrences of `value` currently in the window.
    pub fn count(&self, value: u64) -> u32 {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// Total occurrences across all keys.
    pub fn len(&self) -> u64 {
        self.counts.values().map(|&c| c as u64).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
