// src/urls/validate.rs
// =============================================================================
// This module decides whether a URL is worth fetching at all.
//
// A URL is eligible for the crawl frontier when:
// 1. It is a non-empty string
// 2. Its scheme is http or https (no ftp:, file:, mailto:, ...)
// 3. It has a host (no scheme-relative or path-only URLs)
// 4. Its path does not end in a known non-HTML resource extension
//    (a PDF or an image cannot contain links, so fetching it is wasted work)
//
// This function never panics and never returns an error: any parse failure
// simply means "not valid". The frontier calls it right before enqueueing,
// so an invalid URL is silently excluded rather than crashing the crawl.
//
// Rust concepts:
// - bool-returning predicates instead of Result: failure IS the answer here
// - matches!: Concise pattern-match that returns a bool
// =============================================================================

use url::Url;

// File extensions that point at non-HTML resources.
// These never contain links for further crawling (images, videos,
// documents, stylesheets, scripts, data files).
const RESOURCE_EXTENSIONS: &[&str] = &[
    "pdf", "jpg", "jpeg", "png", "gif", "svg", "zip", "mp4", "mp3", "doc", "docx", "xls", "xlsx",
    "json", "csv", "ico", "css", "js",
];

// Returns true if `candidate` is an http(s) URL with a host and a
// crawlable path
//
// The rules short-circuit in order: the first failing rule decides.
//
// Examples:
//   is_valid_url("https://example.com")        -> true
//   is_valid_url("ftp://example.com")          -> false (scheme)
//   is_valid_url("https:///path")              -> false (no host)
//   is_valid_url("https://example.com/x.pdf")  -> false (resource)
pub fn is_valid_url(candidate: &str) -> bool {
    // Rule 1: non-empty
    if candidate.trim().is_empty() {
        return false;
    }

    // Any parse failure means not valid - never an error
    let parsed = match Url::parse(candidate) {
        Ok(parsed) => parsed,
        Err(_) => return false,
    };

    // Rule 2: http or https only
    // (Url::parse lowercases the scheme, so "HTTPS://..." matches too)
    if !matches!(parsed.scheme(), "http" | "https") {
        return false;
    }

    // Rule 3: must have a host. Two checks, because the WHATWG parser
    // behind Url::parse REPAIRS a missing or empty authority instead of
    // rejecting it: "https:///path" (and "https:/path") come back with
    // host "path" - the first path segment gets promoted. The raw text
    // is the only place the missing host is still visible, so require a
    // real "://host" shape there first.
    match candidate.split_once("://") {
        Some((_, rest)) if !rest.is_empty() && !rest.starts_with('/') => {}
        _ => return false,
    }
    match parsed.host_str() {
        Some(host) if !host.is_empty() => {}
        _ => return false,
    }

    // Rule 4: the path must not point at a binary/non-HTML resource.
    // Note this checks parsed.path() - the query string is never part of
    // the path, so "/x.pdf?v=2" is rejected just like "/x.pdf"
    !has_resource_extension(parsed.path())
}

// Checks the final path segment for a known resource extension
// (case-insensitive). Extensionless paths and unlisted extensions pass.
fn has_resource_extension(path: &str) -> bool {
    let segment = path.rsplit('/').next().unwrap_or(path);
    match segment.rsplit_once('.') {
        Some((_, ext)) => RESOURCE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()),
        None => false,
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a bool instead of Result?
//    - "Is this URL eligible?" is a yes/no question
//    - The caller never needs to know WHY a URL was rejected
//    - Compare with normalize_url, where the caller might want the reason
//
// 2. What does rsplit_once('.') do?
//    - Splits the string at the LAST '.' into (before, after)
//    - "report.v2.pdf" -> ("report.v2", "pdf") - exactly the extension
//    - Returns None when there is no '.', i.e. no extension at all
//
// 3. Why check parsed.path() and not the raw string?
//    - The raw string may contain a query ("/x.pdf?v=2")
//    - path() is just "/x.pdf", so the extension check cannot be fooled
//      by whatever comes after the '?'
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        assert!(is_valid_url("http://example.com"));
        assert!(is_valid_url("https://example.com/page"));
    }

    #[test]
    fn rejects_other_schemes() {
        assert!(!is_valid_url("ftp://a.com"));
        assert!(!is_valid_url("mailto:test@example.com"));
        assert!(!is_valid_url("javascript:void(0)"));
        assert!(!is_valid_url("file:///etc/hosts"));
    }

    #[test]
    fn rejects_empty_and_malformed() {
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("   "));
        assert!(!is_valid_url("htp:/invalid"));
        assert!(!is_valid_url("not a url"));
    }

    #[test]
    fn rejects_missing_host() {
        // The url crate parses "https:///path" to host Some("path") -
        // the raw-text authority check must catch it anyway
        assert!(!is_valid_url("https:///path"));
        assert!(!is_valid_url("https:/path"));
        assert!(!is_valid_url("http:///"));
        assert!(!is_valid_url("https://"));
        assert!(!is_valid_url("/relative/path"));
        assert!(!is_valid_url("//scheme-relative.com/path"));
    }

    #[test]
    fn rejects_resource_extensions() {
        assert!(!is_valid_url("https://a.com/x.pdf"));
        assert!(!is_valid_url("https://a.com/image.PNG")); // case-insensitive
        assert!(!is_valid_url("https://a.com/assets/app.js"));
        assert!(!is_valid_url("https://a.com/deep/path/style.css"));
    }

    #[test]
    fn extension_check_ignores_query_string() {
        // The query never shields a resource: the path is still /x.pdf
        assert!(!is_valid_url("https://a.com/x.pdf?v=2"));
        // ...and a query on an HTML page does not hurt it
        assert!(is_valid_url("https://a.com/page?format=pdf"));
    }

    #[test]
    fn accepts_extensionless_and_unlisted_extensions() {
        assert!(is_valid_url("https://a.com/about"));
        assert!(is_valid_url("https://a.com/page.html"));
        assert!(is_valid_url("https://a.com/feed.xml"));
    }
}
