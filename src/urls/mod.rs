// src/urls/mod.rs
// =============================================================================
// This module contains the pure URL rules the crawler is built on.
//
// Submodules:
// - normalize: turns a raw URL into the canonical string used for dedup
// - validate: decides whether a URL is eligible for the crawl frontier
//
// Both are pure functions with no I/O, which is what makes the frontier
// easy to test: identity and eligibility never depend on the network.
//
// This file (mod.rs) is the module root - it re-exports the public API so
// callers can write `urls::normalize_url` instead of
// `urls::normalize::normalize_url`.
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod normalize;
mod validate;

// Re-export public items from submodules
pub use normalize::{normalize_url, InvalidUrlError};
pub use validate::is_valid_url;
