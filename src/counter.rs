//! Process-wide request tally.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A cloneable handle to a shared request tally.
///
/// Every clone points at the same underlying counter, so the handle can be
/// passed into each connection task while all of them update one tally.
/// The counter starts at zero and only ever grows.
#[derive(Debug, Clone, Default)]
pub struct RequestCounter {
    count: Arc<AtomicUsize>,
}

impl RequestCounter {
    /// Create a fresh counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the tally by one and return the value it held *before* the
    /// increment.
    ///
    /// A single atomic fetch-and-add, so concurrent callers always observe
    /// pairwise-distinct values with no lost updates.
    pub fn increment_and_get(&self) -> usize {
        self.count.fetch_add(1, Ordering::SeqCst)
    }

    /// Read the current value without incrementing.
    pub fn get(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}
