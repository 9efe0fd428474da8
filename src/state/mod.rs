//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `EngineState`: lifecycle of a crawl engine (idle, running, done)
//! - `CrawlProgress`: shareable counters for pages visited and frontier size

mod engine_state;
mod progress;

pub use engine_state::EngineState;
pub use progress::CrawlProgress;
