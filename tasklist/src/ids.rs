//! Id assignment schemes.
//!
//! `Length` numbers a new task `len + 1`. After a delete this can hand out an
//! id that is still in the list (seed, delete 1, add: the new task gets id 2
//! next to the existing id 2). It is the default. `Monotonic` never hands out
//! an id twice in a session and must be chosen explicitly.

use clap::ValueEnum;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tasklist_core::environment::IdGenerator;

/// Which id policy a session uses
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum IdScheme {
    /// `len + 1`; may duplicate an existing id after deletions
    #[default]
    Length,
    /// Strictly increasing; never reuses an id within the session
    Monotonic,
}

impl IdScheme {
    /// Builds the generator for this scheme
    #[must_use]
    pub fn generator(self) -> Arc<dyn IdGenerator> {
        match self {
            Self::Length => Arc::new(LengthIds),
            Self::Monotonic => Arc::new(MonotonicIds::new()),
        }
    }
}

/// `len + 1`
#[derive(Clone, Copy, Debug, Default)]
pub struct LengthIds;

impl IdGenerator for LengthIds {
    fn next_id(&self, len: usize, _max_existing: Option<u64>) -> u64 {
        len as u64 + 1
    }
}

/// High-water-mark ids
#[derive(Debug)]
pub struct MonotonicIds {
    next: AtomicU64,
}

impl MonotonicIds {
    /// Starts at 1
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }
}

impl Default for MonotonicIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for MonotonicIds {
    fn next_id(&self, _len: usize, max_existing: Option<u64>) -> u64 {
        let floor = max_existing.map_or(1, |max| max + 1);
        let id = self.next.load(Ordering::Relaxed).max(floor);
        self.next.store(id + 1, Ordering::Relaxed);
        id
    }

    fn reserve(&self, id: u64) {
        self.next.fetch_max(id + 1, Ordering::Relaxed);
    }
}
