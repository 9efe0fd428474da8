//! Frontier: the FIFO work queue of a crawl and its visited set
//!
//! Pushing is unconditional. Filtering happens when entries are popped: an
//! entry deeper than the depth limit, or whose URL was already selected for
//! dispatch, is dropped at that point. A URL enters the visited set the
//! moment it is popped for dispatch, so the same URL is never fetched twice,
//! not even by two units of the same batch.

use std::collections::{HashSet, VecDeque};

/// A URL waiting to be visited, tagged with its discovery depth
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrontierEntry {
    /// The URL to fetch
    pub url: String,

    /// Number of link hops from the seed
    pub depth: u32,
}

impl FrontierEntry {
    /// Creates a new entry
    pub fn new(url: impl Into<String>, depth: u32) -> Self {
        Self {
            url: url.into(),
            depth,
        }
    }
}

/// Frontier manages the queue of pending entries and the visited set
pub struct Frontier {
    /// Pending entries, oldest first
    queue: VecDeque<FrontierEntry>,

    /// URLs already selected for dispatch
    visited: HashSet<String>,

    /// Entries deeper than this are dropped on pop
    max_depth: u32,
}

impl Frontier {
    /// Creates an empty frontier with the given depth limit
    pub fn new(max_depth: u32) -> Self {
        Self {
            queue: VecDeque::new(),
            visited: HashSet::new(),
            max_depth,
        }
    }

    /// Creates a frontier holding the seed URL at depth 0
    pub fn with_seed(seed: impl Into<String>, max_depth: u32) -> Self {
        let mut frontier = Self::new(max_depth);
        frontier.push(FrontierEntry::new(seed, 0));
        frontier
    }

    /// Appends an entry to the back of the queue
    pub fn push(&mut self, entry: FrontierEntry) {
        self.queue.push_back(entry);
    }

    /// Appends several entries, preserving their order
    pub fn extend<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = FrontierEntry>,
    {
        self.queue.extend(entries);
    }

    /// Pops up to `n` entries from the front of the queue
    ///
    /// Entries that are too deep or already visited are discarded and still
    /// count towards `n`, so the batch may be shorter than `n` (even empty)
    /// while work remains. Every returned URL is marked visited.
    pub fn pop_batch(&mut self, n: usize) -> Vec<FrontierEntry> {
        let take = n.min(self.queue.len());
        let mut batch = Vec::with_capacity(take);

        for entry in self.queue.drain(..take) {
            if entry.depth > self.max_depth {
                tracing::trace!(
                    "Dropping {} (depth {} > {})",
                    entry.url,
                    entry.depth,
                    self.max_depth
                );
                continue;
            }
            if !self.visited.insert(entry.url.clone()) {
                tracing::trace!("Dropping already visited {}", entry.url);
                continue;
            }
            batch.push(entry);
        }

        batch
    }

    /// Returns true if the URL has been selected for dispatch
    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Number of URLs selected for dispatch so far
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Number of pending entries (including ones that will be dropped)
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns true if no entries are pending
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
