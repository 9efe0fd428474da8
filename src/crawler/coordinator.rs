//! Crawler coordinator - main crawl orchestration logic
//!
//! A single coordinating task owns the frontier and the visited set. Each
//! round it pops a batch of at most `max_concurrency` entries, spawns one
//! task per entry (fetch, extract, then pause for the configured delay), and
//! waits for the whole batch to settle before touching the frontier again.
//!
//! Results of one batch are appended in the order the tasks complete, so only
//! the batch boundaries follow frontier order. With `max_concurrency = 1` the
//! result order is exactly the pop order.

use crate::config::{validate_for_run, CrawlConfig};
use crate::crawler::fetcher::{build_http_client, fetch_text};
use crate::crawler::frontier::{Frontier, FrontierEntry};
use crate::crawler::parser::{extract_page, ExtractedPage};
use crate::crawler::result::PageResult;
use crate::state::{CrawlProgress, EngineState};
use crate::CrawlError;
use reqwest::Client;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinSet;

/// Outcome of one unit of work
#[derive(Debug)]
struct PageVisit {
    entry: FrontierEntry,
    page: ExtractedPage,
}

impl PageVisit {
    fn into_parts(self) -> (PageResult, Vec<FrontierEntry>) {
        let depth = self.entry.depth;
        let next = self
            .page
            .links
            .into_iter()
            .map(|link| FrontierEntry::new(link, depth + 1))
            .collect();
        let result = PageResult::new(self.entry.url, self.page.title, depth);
        (result, next)
    }
}

/// Breadth-first crawl engine
///
/// An engine runs once: `Idle → Running → Done`. A rejected start (missing or
/// invalid seed URL) leaves it `Idle`.
pub struct Crawler {
    config: Arc<CrawlConfig>,
    state: EngineState,
    progress: CrawlProgress,
}

impl Crawler {
    /// Creates an idle crawler that owns `config` for its single run
    ///
    /// # Arguments
    ///
    /// * `config` - Settings of the run; the seed URL is checked by [`Crawler::run`]
    pub fn new(config: CrawlConfig) -> Self {
        Self {
            config: Arc::new(config),
            state: EngineState::Idle,
            progress: CrawlProgress::new(),
        }
    }

    /// Returns the current lifecycle state
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Returns a handle to the live progress counters
    pub fn progress(&self) -> CrawlProgress {
        self.progress.clone()
    }

    /// Returns the configuration of this run
    pub fn config(&self) -> &CrawlConfig {
        &self.config
    }

    fn transition(&mut self, to: EngineState) -> Result<(), CrawlError> {
        if !self.state.can_transition_to(to) {
            return Err(CrawlError::InvalidState {
                from: self.state,
                to,
            });
        }
        tracing::debug!("Crawler state {} -> {}", self.state, to);
        self.state = to;
        Ok(())
    }

    /// Runs the crawl to completion and returns every page result
    ///
    /// Terminates when the frontier is empty; there is no page or time limit.
    /// Fetch and parse failures never abort the run.
    ///
    /// The seed is taken in its parsed form (lowercase scheme and host,
    /// default port dropped), which is also the form of every resolved link,
    /// so the prefix scope check compares like with like.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<PageResult>)` - One result per dispatched page, seed first
    /// * `Err(CrawlError)` - The engine already ran, the configuration was
    ///   rejected, or the HTTP client could not be built
    pub async fn run(&mut self) -> Result<Vec<PageResult>, CrawlError> {
        if self.state != EngineState::Idle {
            return Err(CrawlError::InvalidState {
                from: self.state,
                to: EngineState::Running,
            });
        }

        let seed = validate_for_run(&self.config)?;
        let client = build_http_client(&self.config)?;
        let start_url: Arc<str> = Arc::from(seed.as_str());

        self.transition(EngineState::Running)?;
        tracing::info!(
            "Starting crawl of {} (max depth {}, {} concurrent, {:?} delay)",
            start_url,
            self.config.max_depth,
            self.config.max_concurrency,
            self.config.delay()
        );

        let started = Instant::now();
        let mut frontier = Frontier::with_seed(start_url.as_ref(), self.config.max_depth);
        let mut results = Vec::new();
        let mut batches = 0usize;

        while !frontier.is_empty() {
            let batch = frontier.pop_batch(self.config.max_concurrency);
            self.progress.set_queued(frontier.len());
            if batch.is_empty() {
                continue;
            }

            self.progress.add_visited(batch.len());
            batches += 1;

            let delay = self.config.delay();
            let visits = dispatch_batch(batch, |entry| {
                visit(client.clone(), entry, Arc::clone(&start_url), delay)
            })
            .await;
            for page_visit in visits {
                let (result, next) = page_visit.into_parts();
                results.push(result);
                frontier.extend(next);
            }

            self.progress.set_queued(frontier.len());
            tracing::info!(
                "Progress: batch {}, {} pages visited, {} in frontier",
                batches,
                frontier.visited_count(),
                frontier.len()
            );
        }

        self.transition(EngineState::Done)?;
        tracing::info!(
            "Crawl completed: {} pages in {} batches, {:?}",
            results.len(),
            batches,
            started.elapsed()
        );

        Ok(results)
    }
}

/// Dispatches one batch and waits for every unit to settle
///
/// A unit that panics still produces an empty result for its entry.
async fn dispatch_batch<F, Fut>(batch: Vec<FrontierEntry>, unit: F) -> Vec<PageVisit>
where
    F: Fn(FrontierEntry) -> Fut,
    Fut: Future<Output = PageVisit> + Send + 'static,
{
    let mut tasks = JoinSet::new();
    let mut in_flight = HashMap::with_capacity(batch.len());

    for entry in batch {
        tracing::debug!("Visiting [depth {}]: {}", entry.depth, entry.url);
        let handle = tasks.spawn(unit(entry.clone()));
        in_flight.insert(handle.id(), entry);
    }

    let mut visits = Vec::with_capacity(in_flight.len());
    while let Some(joined) = tasks.join_next_with_id().await {
        match joined {
            Ok((id, visit)) => {
                in_flight.remove(&id);
                visits.push(visit);
            }
            Err(e) => {
                if let Some(entry) = in_flight.remove(&e.id()) {
                    tracing::warn!("Worker for {} failed: {}", entry.url, e);
                    visits.push(PageVisit {
                        entry,
                        page: ExtractedPage::default(),
                    });
                }
            }
        }
    }

    visits
}

/// One unit of work: fetch, extract, then pause
async fn visit(
    client: Client,
    entry: FrontierEntry,
    start_url: Arc<str>,
    delay: Duration,
) -> PageVisit {
    let body = fetch_text(&client, &entry.url).await;
    let page = extract_page(&body, &entry.url, &start_url);

    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    PageVisit { entry, page }
}

/// Runs a crawl with a fresh engine and returns its results
///
/// # Example
///
/// ```no_run
/// use crawl_scraper::config::CrawlConfig;
/// use crawl_scraper::crawler::run_crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let results = run_crawl(CrawlConfig::with_start_url("https://example.com/")).await?;
/// println!("{} pages", results.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: CrawlConfig) -> Result<Vec<PageResult>, CrawlError> {
    Crawler::new(config).run().await
}
