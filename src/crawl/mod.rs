// src/crawl/mod.rs
// =============================================================================
// This module is the crawl engine.
//
// Submodules:
// - fetch: the Fetch trait, FetchError, and the reqwest-backed HttpFetcher
// - extract: HTML parsing + the internal-link extraction rules
// - sequential: the single-task breadth-first frontier
// - worker_pool: the concurrent frontier (N workers, one shared queue)
// - mock: test-only fetcher with per-URL call counters
//
// The two frontiers share everything except their frontier discipline:
// the sequential crawler marks a URL visited after a successful fetch
// (failed URLs can be retried), the pool marks it before fetching (the
// at-most-once guarantee under concurrency). The module docs in each file
// spell out why.
//
// This file (mod.rs) is the module root - it re-exports the public API so
// callers can write `crawl::Crawler` instead of `crawl::sequential::Crawler`.
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod extract;
mod fetch;
mod sequential;
mod worker_pool;

#[cfg(test)]
mod mock;

// Re-export the items main drives the engine with
pub use fetch::HttpFetcher;
pub use sequential::Crawler;
pub use worker_pool::{WorkerPool, DEFAULT_WORKERS};
