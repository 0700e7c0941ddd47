// src/crawl/extract.rs
// =============================================================================
// This module turns a fetched page into the set of internal links to crawl.
//
// Two steps, kept separate on purpose:
// 1. extract_hrefs: parse HTML, collect every <a href="..."> value, raw
// 2. extract_internal_links: resolve, normalize and filter those raw hrefs
//    down to the canonical same-host link set
//
// Step 2 is where the crawler's "stay on this site" rule lives:
// - relative links ("/about", "../jobs") resolve against the page URL
// - fragments, mailto: and javascript: links are skipped
// - links whose host differs from the page's host are dropped
//   (exact match: blog.example.com is NOT example.com)
// - everything that survives is normalized, so duplicates collapse
//
// Rust concepts:
// - HashSet: The output set collapses duplicate hrefs automatically
// - Iterators + continue: Per-href filtering in a single pass
// =============================================================================

use crate::urls::normalize_url;
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

// Collects every anchor href attribute from an HTML document
//
// This is the "parse" half of the pipeline: it returns the raw strings
// exactly as they appear in the markup. Resolution and filtering happen
// in extract_internal_links.
pub fn extract_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    // Selector::parse returns Result, so we use .unwrap() which panics on
    // error. This is OK here because our selector is a constant and known
    // to be valid.
    let selector = Selector::parse("a[href]").unwrap();

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(|href| href.to_string())
        .collect()
}

// Resolves and filters raw hrefs into the canonical same-host link set
//
// Parameters:
//   page_url: the URL of the page the hrefs came from (used for resolving
//             relative links and for the same-host check)
//   hrefs: raw href values, straight from extract_hrefs
//
// Returns: a HashSet of canonical URLs on the same host as page_url.
// Order is not significant; duplicate hrefs collapse to one entry.
//
// Example:
//   page: https://a.com/
//   hrefs: ["/about", "https://a.com/about", "https://external.com",
//           "#frag", "mailto:x@a.com"]
//   result: {"https://a.com/about"}
pub fn extract_internal_links(page_url: &str, hrefs: &[String]) -> HashSet<String> {
    let mut links = HashSet::new();

    // Parse the page URL once; it doubles as the join base and the host
    // we compare against. An unparsable page URL means no links.
    let base = match Url::parse(page_url) {
        Ok(base) => base,
        Err(_) => return links,
    };
    let page_host = match base.host_str() {
        Some(host) => host.to_ascii_lowercase(),
        None => return links,
    };

    for href in hrefs {
        let href = href.trim();

        // Skip empty hrefs and links that never leave the page / the browser
        if href.is_empty()
            || href.starts_with('#')
            || href.starts_with("mailto:")
            || href.starts_with("javascript:")
        {
            continue;
        }

        // Absolute links pass through; everything else resolves against
        // the page URL (Url::join implements the RFC 3986 merge rules,
        // so "../x" and "/x" and "x" all work)
        let absolute = if href.starts_with("http://") || href.starts_with("https://") {
            match Url::parse(href) {
                Ok(absolute) => absolute,
                Err(_) => continue,
            }
        } else {
            match base.join(href) {
                Ok(absolute) => absolute,
                Err(_) => continue,
            }
        };

        // Normalize BEFORE the host check, so the comparison runs on the
        // canonical form. A failed normalization just drops the link.
        let canonical = match normalize_url(absolute.as_str()) {
            Ok(canonical) => canonical,
            Err(_) => continue,
        };

        // Same-host rule: exact host equality, no subdomain generalization
        let host_matches = Url::parse(&canonical)
            .ok()
            .and_then(|parsed| parsed.host_str().map(|host| host.to_ascii_lowercase()))
            .is_some_and(|host| host == page_host);
        if !host_matches {
            continue;
        }

        links.insert(canonical);
    }

    links
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why check for "http://" / "https://" prefixes before joining?
//    - Url::join treats an absolute href correctly anyway, but hrefs with
//      OTHER schemes (ftp://...) would also "resolve" fine and then waste
//      a parse+normalize round before being dropped
//    - The explicit branch keeps the absolute/relative split readable
//
// 2. Why normalize before the host comparison?
//    - Normalization lowercases the host, so "https://A.com" and the page
//      host compare equal without special cases here
//    - It also means the set only ever holds canonical strings - the same
//      identity the frontier's visited set uses
//
// 3. What is is_some_and?
//    - Option::is_some_and(f) is "is Some AND the value satisfies f"
//    - Saves a map + unwrap_or(false) chain
// -----------------------------------------------------------------------------
