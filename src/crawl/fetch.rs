// src/crawl/fetch.rs
// =============================================================================
// This module fetches pages over HTTP.
//
// The frontier never talks to reqwest directly - it goes through the Fetch
// trait. That seam is what lets the frontier tests swap in a scripted
// fetcher (see mock.rs) and count exactly how many times each URL was
// fetched, without any network access.
//
// Key functionality:
// - Fetch trait: "give me the body of this URL, or a FetchError"
// - HttpFetcher: the real implementation (reqwest GET with a 10s timeout)
// - FetchError: distinguishes HTTP error status / timeout / network failure
//
// Rust concepts:
// - Traits: An interface the real and test fetchers both implement
// - async-trait: Async functions in traits need this macro (for now)
// - From impls: Convert reqwest's error into our own error type
// =============================================================================

use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// How long a single GET request may take before we give up on it.
/// This bounds each fetch; the crawl as a whole has no deadline.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

// What can go wrong when fetching one page
//
// The frontier treats all three the same way (report and move on), but
// keeping them distinct makes the warning lines actually useful.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-2xx status code
    #[error("HTTP status {0}")]
    Status(u16),

    /// The request did not complete within FETCH_TIMEOUT
    #[error("request timed out")]
    Timeout,

    /// DNS failure, connection refused, TLS problems, ...
    #[error("network error: {0}")]
    Network(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Network(error.to_string())
        }
    }
}

// The fetch capability the frontier depends on
//
// Send + Sync because the worker pool shares one fetcher across tasks.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Fetches `url` and returns the response body on a 2xx status.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

// Sharing a fetcher behind an Arc still satisfies the trait.
// The worker pool and the tests both rely on this.
#[async_trait]
impl<F: Fetch + ?Sized> Fetch for Arc<F> {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch(url).await
    }
}

// The real fetcher: a reqwest Client wrapper
//
// We build the client once and reuse it for every request, so connections
// to the crawled host are pooled instead of re-opened per page.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds the fetcher with the crawl's per-request timeout.
    pub fn new() -> anyhow::Result<Self> {
        let client = Client::builder().timeout(FETCH_TIMEOUT).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a trait instead of calling reqwest directly?
//    - The frontier's job is scheduling, not HTTP
//    - With the trait seam, tests drive the frontier with scripted pages
//      and failures, and can assert "this URL was fetched exactly once"
//
// 2. Why impl Fetch for Arc<F>?
//    - The frontier takes ownership of its fetcher
//    - A test that wants to inspect fetch counts AFTER the crawl keeps one
//      Arc clone and hands the other to the frontier
//
// 3. What does the ? on send().await? do here?
//    - reqwest::Error converts into FetchError via our From impl
//    - ? applies that conversion automatically
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_body_on_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .with_status(200)
            .with_body("<html><body>hello</body></html>")
            .create_async()
            .await;

        let fetcher = HttpFetcher::new().unwrap();
        let body = fetcher.fetch(&server.url()).await.unwrap();

        assert!(body.contains("hello"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/missing")
            .with_status(404)
            .create_async()
            .await;

        let fetcher = HttpFetcher::new().unwrap();
        let err = fetcher
            .fetch(&format!("{}/missing", server.url()))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Status(404)));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_network_error() {
        let fetcher = HttpFetcher::new().unwrap();
        // Port 1 on localhost: nothing listens there, connection is refused
        let err = fetcher.fetch("http://127.0.0.1:1/").await.unwrap_err();
        assert!(matches!(err, FetchError::Network(_) | FetchError::Timeout));
    }
}
