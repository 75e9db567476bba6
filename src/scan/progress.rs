//! Scan progress counter
//!
//! A GUI or long-running caller can poll this from another thread while
//! the scan runs. The pipeline bumps it once per file accepted into the
//! result set, so `visited() / expected_total` is exact at every point.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct ScanProgress {
    visited: AtomicU64,
}

impl ScanProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files accepted into the result set so far. Monotonically
    /// increasing within one scan.
    pub fn visited(&self) -> u64 {
        self.visited.load(Ordering::Relaxed)
    }

    pub(crate) fn record_file(&self) {
        self.visited.fetch_add(1, Ordering::Relaxed);
    }
}
