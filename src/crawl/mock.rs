// src/crawl/mock.rs
// =============================================================================
// Test-only fetcher with scripted pages and per-URL call counting.
//
// The frontier tests need three things from a fetcher:
// - serve a known HTML body for a known URL
// - fail on demand for specific URLs
// - tell us afterwards exactly how many times each URL was fetched,
//   which is how the at-most-once guarantee is asserted (especially for
//   the worker pool, where a double fetch would be a race, not a bug you
//   could see in the final visited set alone)
//
// Shared with the frontier via Arc (see the Arc<F> impl in fetch.rs), so a
// test keeps one handle for assertions after the crawl finishes.
// =============================================================================

use super::fetch::{Fetch, FetchError};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

pub struct MockFetcher {
    pages: HashMap<String, String>,
    failures: HashSet<String>,
    calls: Mutex<HashMap<String, usize>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            failures: HashSet::new(),
            calls: Mutex::new(HashMap::new()),
        }
    }

    /// Serves `html` for `url`. Builder-style so tests read declaratively.
    pub fn page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    /// Makes every fetch of `url` fail with a 500.
    pub fn failing(mut self, url: &str) -> Self {
        self.failures.insert(url.to_string());
        self
    }

    /// How many times `url` was fetched during the crawl.
    pub fn call_count(&self, url: &str) -> usize {
        self.calls
            .lock()
            .expect("call counter lock poisoned")
            .get(url)
            .copied()
            .unwrap_or(0)
    }

    /// Total fetches across all URLs.
    pub fn total_calls(&self) -> usize {
        self.calls
            .lock()
            .expect("call counter lock poisoned")
            .values()
            .sum()
    }
}

#[async_trait]
impl Fetch for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        {
            let mut calls = self.calls.lock().expect("call counter lock poisoned");
            *calls.entry(url.to_string()).or_insert(0) += 1;
        }

        if self.failures.contains(url) {
            return Err(FetchError::Status(500));
        }

        self.pages
            .get(url)
            .cloned()
            .ok_or(FetchError::Status(404))
    }
}
