// src/crawl/worker_pool.rs
// =============================================================================
// The concurrent crawl frontier: a fixed-size pool of workers draining one
// shared queue.
//
// How it works:
// - N tokio tasks share the queue, the visited set and an in-flight
//   counter, all behind a single std::sync::Mutex
// - A worker pops a URL, checks-and-marks it visited INSIDE that one
//   critical section, then fetches and parses with the lock released
// - Extracted links are enqueued under the lock; idle workers are woken
//   through a tokio::sync::Notify
//
// The two places this deliberately differs from the sequential crawler:
//
// 1. A URL is marked visited BEFORE fetching, not after. Two workers
//    racing on the same URL both reach the critical section, but only the
//    first one passes the check-then-mark; the second discards. Marking
//    after the fetch would leave a window where both fetch. The cost: a
//    failed fetch stays marked and is never retried.
//
// 2. Termination is an explicit barrier, not a timeout. A worker may only
//    exit when the queue is empty AND in_flight == 0 - an empty queue
//    alone proves nothing, because a worker still fetching may enqueue
//    more links. The in-flight counter closes the race a bounded
//    dequeue-wait would leave open.
//
// Rust concepts:
// - Arc<Mutex<...>>: Shared mutable state across tasks
// - tokio::sync::Notify: Park idle workers without spinning or polling
// - tokio::spawn + join_all: The pool's lifecycle
// =============================================================================

use super::extract::{extract_hrefs, extract_internal_links};
use super::fetch::Fetch;
use crate::urls::{is_valid_url, normalize_url, InvalidUrlError};
use futures::future::join_all;
use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Default number of crawl workers.
pub const DEFAULT_WORKERS: usize = 5;

// Everything the workers share. One mutex covers the whole state: the
// visited-check + mark must be atomic with the dequeue, and the critical
// sections are a handful of hash/queue operations, so a single lock is
// both correct and cheap.
struct CrawlState {
    to_visit: VecDeque<String>,
    visited: HashSet<String>,
    /// URLs popped and marked visited whose fetch has not finished yet.
    in_flight: usize,
}

struct Shared<F> {
    fetcher: F,
    state: Mutex<CrawlState>,
    /// Woken on every enqueue and when the last in-flight fetch finishes.
    idle: Notify,
}

// The concurrent crawler
//
// Owns its frontier state; crawl() consumes the pool and returns the
// visited set once every worker has exited.
pub struct WorkerPool<F: Fetch> {
    shared: Arc<Shared<F>>,
    workers: usize,
}

impl<F: Fetch + 'static> WorkerPool<F> {
    // Creates a pool whose queue holds exactly the normalized seed
    pub fn new(seed_url: &str, fetcher: F, workers: usize) -> Result<Self, InvalidUrlError> {
        let seed = normalize_url(seed_url)?;

        let mut to_visit = VecDeque::new();
        to_visit.push_back(seed);

        Ok(Self {
            shared: Arc::new(Shared {
                fetcher,
                state: Mutex::new(CrawlState {
                    to_visit,
                    visited: HashSet::new(),
                    in_flight: 0,
                }),
                idle: Notify::new(),
            }),
            // A pool with zero workers would never drain the queue
            workers: workers.max(1),
        })
    }

    // Runs the crawl to completion and returns the visited set
    //
    // Blocks (asynchronously) until the queue is empty, no fetch is in
    // flight, and every worker task has been joined.
    pub async fn crawl(self) -> HashSet<String> {
        let handles: Vec<_> = (0..self.workers)
            .map(|_| {
                let shared = Arc::clone(&self.shared);
                tokio::spawn(worker_loop(shared))
            })
            .collect();

        for joined in join_all(handles).await {
            if let Err(e) = joined {
                eprintln!("  Warning: crawl worker panicked: {}", e);
            }
        }

        let mut state = self.shared.state.lock().expect("crawl state lock poisoned");
        std::mem::take(&mut state.visited)
    }
}

// What a worker decided to do after one look at the shared state
enum Step {
    Fetch(String),
    Wait,
    Done,
}

// One worker's life: pop-mark-fetch-enqueue until the barrier says done
async fn worker_loop<F: Fetch>(shared: Arc<Shared<F>>) {
    loop {
        // Create the Notified future BEFORE checking the queue. Notify
        // guarantees a notify_waiters() call after this point wakes us
        // even if we have not polled yet, so a wakeup between our check
        // and our await cannot be lost.
        let notified = shared.idle.notified();

        let step = {
            let mut state = shared.state.lock().expect("crawl state lock poisoned");
            match state.to_visit.pop_front() {
                Some(url) => {
                    if state.visited.contains(&url) {
                        // Enqueued twice before the first copy was popped;
                        // the visited check resolves it here
                        continue;
                    }
                    // The critical section: check-then-mark as one atomic
                    // unit, so no other worker can fetch this URL
                    state.visited.insert(url.clone());
                    state.in_flight += 1;
                    Step::Fetch(url)
                }
                None if state.in_flight == 0 => Step::Done,
                None => Step::Wait,
            }
        };

        match step {
            Step::Fetch(url) => {
                // Lock released: the fetch and parse are the slow part and
                // must not serialize the other workers
                crawl_one(&shared, &url).await;

                let finished = {
                    let mut state = shared.state.lock().expect("crawl state lock poisoned");
                    state.in_flight -= 1;
                    state.in_flight == 0 && state.to_visit.is_empty()
                };
                if finished {
                    // Release the workers parked on the Notify so they can
                    // observe the barrier and exit
                    shared.idle.notify_waiters();
                }
            }
            Step::Wait => notified.await,
            Step::Done => {
                // Wake any sibling that parked between our check and now
                shared.idle.notify_waiters();
                return;
            }
        }
    }
}

// Fetches one page and feeds its internal links back into the queue
async fn crawl_one<F: Fetch>(shared: &Shared<F>, url: &str) {
    println!("🕷️  Crawling: {}", url);

    let body = match shared.fetcher.fetch(url).await {
        Ok(body) => body,
        Err(e) => {
            // Already marked visited, so this URL is NOT retried - the
            // price of the pre-fetch marking that makes the pool race-free
            eprintln!("  Warning: failed to fetch {}: {}", url, e);
            return;
        }
    };

    let hrefs = extract_hrefs(&body);
    let links = extract_internal_links(url, &hrefs);

    println!("  Links found on page ({}):", links.len());
    if links.is_empty() {
        println!("   - None");
    }
    for link in &links {
        println!("   - {}", link);
    }

    let mut enqueued = false;
    {
        let mut state = shared.state.lock().expect("crawl state lock poisoned");
        for link in links {
            // No pending-duplicate check here: scanning the queue under
            // the lock costs more than letting the visited check in the
            // worker loop discard the occasional duplicate pop
            if is_valid_url(&link) && !state.visited.contains(&link) {
                state.to_visit.push_back(link);
                enqueued = true;
            }
        }
    }
    if enqueued {
        shared.idle.notify_waiters();
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why std::sync::Mutex and not tokio::sync::Mutex?
//    - The lock is never held across an .await (the fetch happens after
//      the guard is dropped), and the critical sections are tiny
//    - For that pattern the std mutex is the recommended choice; the
//      tokio mutex is only needed when a guard must live across an await
//
// 2. Why does the Notified future get created before the check?
//    - notify_waiters() only wakes futures that already exist
//    - Created after the check, a notification arriving in between would
//      be missed and the worker could sleep forever with work queued
//
// 3. Why does Done notify before returning?
//    - The exiting worker is the one that observed "queue empty, nothing
//      in flight" - its siblings may still be parked
//    - Waking them lets each re-check, observe the same barrier, and exit,
//      so crawl()'s join_all completes
//
// 4. What happens to a panicking worker?
//    - tokio::spawn isolates the panic into the JoinError we log
//    - The mutex would be poisoned, which the .expect turns into a crash
//      of the remaining workers rather than a silently wrong crawl
// -----------------------------------------------------------------------------
