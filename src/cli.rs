// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// The interface is deliberately small: an optional seed URL (we prompt on
// stdin when it is missing, which is the classic way this tool is driven),
// a worker count to pick the sequential or concurrent crawler, and a JSON
// output switch.
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "sitecrawl",
    version = "0.1.0",
    about = "Crawl every page on a single website, starting from a seed URL",
    long_about = "sitecrawl visits every page reachable from the seed URL on the same host, \
                  following links breadth-first until there is nothing left to visit. \
                  It never leaves the seed's host and fetches each page at most once."
)]
pub struct Cli {
    /// Seed URL to start crawling from (e.g. https://example.com)
    ///
    /// When omitted, sitecrawl prompts for it on standard input.
    pub seed_url: Option<String>,

    /// Crawl with the concurrent worker pool instead of the
    /// sequential crawler
    ///
    /// Uses the default pool size unless --workers says otherwise.
    #[arg(long)]
    pub concurrent: bool,

    /// Number of parallel crawl workers (implies --concurrent)
    #[arg(long)]
    pub workers: Option<usize>,

    /// Print the visited URLs as a JSON array after the crawl
    #[arg(long)]
    pub json: bool,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Option<String> for the seed?
//    - A positional argument wrapped in Option becomes optional to clap
//    - None means "not given on the command line", and main falls back
//      to prompting on stdin
//
// 2. Why Option<usize> for --workers instead of a default value?
//    - main needs to tell "user asked for N workers" apart from "user
//      said nothing" - the first implies the concurrent crawler, the
//      second means sequential unless --concurrent was passed
// -----------------------------------------------------------------------------
