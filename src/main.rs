// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Get the seed URL (argument, or a prompt on standard input)
// 3. Validate and normalize the seed; an invalid seed exits without crawling
// 4. Run the sequential crawler (the default) or the worker pool
//    (--concurrent / --workers N), then print the summary
//
// Exit codes:
//   0 = crawl completed
//   1 = seed URL was invalid (we exit silently, nothing to crawl)
//   2 = unexpected setup error (HTTP client, stdin, ...)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod crawl; // src/crawl/ - fetchers, extraction and the two frontiers
mod urls; // src/urls/ - normalization and validation rules

// Import items we need from our modules
use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;
use crawl::{Crawler, HttpFetcher, WorkerPool, DEFAULT_WORKERS};
use urls::{is_valid_url, normalize_url};

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;
use serde::Serialize;
use std::collections::HashSet;
use std::io::Write;

// What --json prints after the crawl
//
// #[derive(Serialize)] lets serde_json turn this struct into JSON
#[derive(Serialize)]
struct CrawlSummary<'a> {
    total_pages: usize,
    pages: Vec<&'a str>,
}

// The #[tokio::main] attribute transforms our async main into a real main
// function. It creates a tokio runtime and runs our async code inside it.
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // An unexpected setup error: print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// The main application logic
// Returns:
//   Ok(0) = crawl ran to completion
//   Ok(1) = invalid seed, nothing crawled
//   Err = unexpected error (becomes exit code 2)
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    // Seed from the command line, or prompt for it
    let seed = match cli.seed_url {
        Some(seed) => seed,
        None => prompt_for_seed()?,
    };
    let seed = seed.trim().to_string();

    // Validate before doing anything: an ineligible seed means there is
    // nothing to crawl, and we exit silently per the tool's contract
    if !is_valid_url(&seed) {
        return Ok(1);
    }
    let seed = normalize_url(&seed)?;

    // --workers N implies the pool; bare --concurrent uses the default size
    let workers = match (cli.concurrent, cli.workers) {
        (_, Some(n)) => Some(n),
        (true, None) => Some(DEFAULT_WORKERS),
        (false, None) => None,
    };

    println!("🔍 Crawling site: {}", seed);
    if let Some(n) = workers {
        println!("👷 Workers: {}", n);
    }
    println!();

    let fetcher = HttpFetcher::new()?;

    let visited = if let Some(n) = workers {
        let pool = WorkerPool::new(&seed, fetcher, n)?;
        pool.crawl().await
    } else {
        let mut crawler = Crawler::new(&seed, fetcher)?;
        crawler.crawl().await;
        crawler.into_visited()
    };

    print_summary(&visited, cli.json)?;

    Ok(0)
}

// Reads the seed URL from standard input, the way the tool has always
// been driven when no argument is given
fn prompt_for_seed() -> Result<String> {
    print!("Enter initial url: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line)
}

// Prints the crawl result: a count, and optionally the full visited set
// as JSON (sorted, so the output is stable run to run)
fn print_summary(visited: &HashSet<String>, json: bool) -> Result<()> {
    println!();
    println!("✅ Crawling complete.");
    println!("📊 Total pages visited: {}", visited.len());

    if json {
        let mut pages: Vec<&str> = visited.iter().map(String::as_str).collect();
        pages.sort_unstable();
        let summary = CrawlSummary {
            total_pages: pages.len(),
            pages,
        };
        let json_output = serde_json::to_string_pretty(&summary)?;
        println!("{}", json_output);
    }

    Ok(())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why normalize the seed here AND inside the frontier constructors?
//    - main normalizes so the progress header shows the canonical URL
//    - the constructors normalize their own input because they are the
//      API boundary - nothing forces callers to go through main
//    - normalization is idempotent, so doing it twice is harmless
//
// 2. Why is the invalid-seed exit silent?
//    - The validator is a pure yes/no answer; there is nothing useful to
//      add beyond "nothing was crawled", and keeping stdout clean matters
//      when the output is piped
//
// 3. Why sort before the JSON dump?
//    - HashSet iteration order changes between runs
//    - Sorted output diffs cleanly and is script-friendly
// -----------------------------------------------------------------------------
