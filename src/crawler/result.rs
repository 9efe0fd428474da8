use serde::{Deserialize, Serialize};

/// What the crawl recorded for one dispatched URL
///
/// Exactly one result exists per dispatched URL, including URLs whose fetch
/// failed (those carry an empty title).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    /// The URL as it was dispatched
    pub url: String,

    /// Trimmed page title, empty if missing or the fetch failed
    pub title: String,

    /// Number of link hops from the seed
    pub depth: u32,
}

impl PageResult {
    /// Creates a new result
    pub fn new(url: impl Into<String>, title: impl Into<String>, depth: u32) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            depth,
        }
    }

    /// Returns true if the page had a non-empty title
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }
}
