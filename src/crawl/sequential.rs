// src/crawl/sequential.rs
// =============================================================================
// The sequential crawl frontier: single-task breadth-first traversal.
//
// How it works:
// 1. Start with the normalized seed URL in a queue
// 2. Pop the front URL; skip it if already visited
// 3. Fetch the page, parse it, extract its internal links
// 4. Mark the URL visited and enqueue every new, valid link
// 5. Repeat until the queue is empty
//
// Two invariants worth stating because everything rests on them:
// - A URL is fetched at most once per crawl: the visited check at pop time
//   plus the dedup check at enqueue time guarantee it
// - A URL is marked visited only AFTER a successful fetch. A failed fetch
//   leaves it unvisited, so if it gets enqueued again later (linked from a
//   page we have not processed yet) it is retried. The worker pool makes
//   the opposite choice - see worker_pool.rs
//
// Rust concepts:
// - HashSet: To track visited URLs (O(1) lookup)
// - VecDeque: Double-ended queue for breadth-first crawling
// - Generics: The frontier works with any Fetch implementation
// =============================================================================

use super::extract::{extract_hrefs, extract_internal_links};
use super::fetch::Fetch;
use crate::urls::{is_valid_url, normalize_url, InvalidUrlError};
use std::collections::{HashSet, VecDeque};

// The sequential crawler
//
// Owns its queue and visited set as instance state, so independent crawls
// can run in the same process (which the tests do).
pub struct Crawler<F: Fetch> {
    fetcher: F,
    visited: HashSet<String>,
    to_visit: VecDeque<String>,
}

impl<F: Fetch> Crawler<F> {
    // Creates a crawler whose queue holds exactly the normalized seed
    //
    // Fails only when the seed itself cannot be normalized; everything
    // after this point is recovered inside the crawl loop.
    pub fn new(seed_url: &str, fetcher: F) -> Result<Self, InvalidUrlError> {
        let seed = normalize_url(seed_url)?;

        let mut to_visit = VecDeque::new();
        to_visit.push_back(seed);

        Ok(Self {
            fetcher,
            visited: HashSet::new(),
            to_visit,
        })
    }

    // Runs the crawl to completion
    //
    // One-shot: when this returns, the queue is empty, so calling it again
    // is a no-op. Per-URL errors never escape this loop - a fetch failure
    // is reported on stderr and the loop moves to the next queue entry.
    pub async fn crawl(&mut self) {
        while let Some(current) = self.to_visit.pop_front() {
            // Duplicates can be enqueued before their first occurrence is
            // visited (two pages linking to the same third page), so the
            // check at pop time must exist even single-threaded
            if self.visited.contains(&current) {
                continue;
            }

            println!("🕷️  Crawling: {}", current);

            let body = match self.fetcher.fetch(&current).await {
                Ok(body) => body,
                Err(e) => {
                    // Not marked visited: a later occurrence in the queue
                    // gets a fresh attempt
                    eprintln!("  Warning: failed to fetch {}: {}", current, e);
                    continue;
                }
            };

            let hrefs = extract_hrefs(&body);
            let links = extract_internal_links(&current, &hrefs);
            self.visited.insert(current.clone());

            println!("  Links found on page ({}):", links.len());
            if links.is_empty() {
                println!("   - None");
            }
            for link in &links {
                println!("   - {}", link);
            }

            for link in links {
                // Enqueue only what is valid, unseen, and not already
                // pending - the frontier never holds duplicate entries
                // of a known URL
                if link != current
                    && is_valid_url(&link)
                    && !self.visited.contains(&link)
                    && !self.to_visit.contains(&link)
                {
                    self.to_visit.push_back(link);
                }
            }
        }
    }

    /// The set of successfully crawled pages so far.
    pub fn visited(&self) -> &HashSet<String> {
        &self.visited
    }

    /// Consumes the crawler, handing back the visited set.
    pub fn into_visited(self) -> HashSet<String> {
        self.visited
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is crawl() async when there is only one task?
//    - The fetch is network I/O; awaiting it keeps the runtime free
//    - It also means the sequential and concurrent frontiers share the
//      same Fetch trait and the same tests style
//
// 2. Why to_visit.contains()?
//    - VecDeque::contains is a linear scan, which is fine at this scale
//      and keeps the queue free of duplicate PENDING entries
//    - The worker pool drops this check (a scan under a lock is not worth
//      it there) and relies on its visited check instead
//
// 3. Why link != current?
//    - A page linking to itself would otherwise re-enter the queue for one
//      wasted pop-and-skip cycle; `current` is only inserted into visited
//      a few lines up, so the visited check covers it too - this is just
//      the cheaper first test in the && chain
// -----------------------------------------------------------------------------
