use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Live progress counters of a crawl
///
/// Cloning yields another handle to the same counters, so a caller can keep
/// one while the engine runs. The visited count only ever grows.
#[derive(Debug, Clone, Default)]
pub struct CrawlProgress {
    inner: Arc<Counters>,
}

#[derive(Debug, Default)]
struct Counters {
    visited: AtomicUsize,
    queued: AtomicUsize,
}

impl CrawlProgress {
    /// Creates zeroed counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pages dispatched so far
    pub fn pages_visited(&self) -> usize {
        self.inner.visited.load(Ordering::Relaxed)
    }

    /// Frontier length at the last update
    pub fn pages_queued(&self) -> usize {
        self.inner.queued.load(Ordering::Relaxed)
    }

    pub(crate) fn add_visited(&self, count: usize) {
        self.inner.visited.fetch_add(count, Ordering::Relaxed);
    }

    pub(crate) fn set_queued(&self, count: usize) {
        self.inner.queued.store(count, Ordering::Relaxed);
    }
}
