// src/urls/normalize.rs
// =============================================================================
// This module turns a raw URL string into its canonical form.
//
// Why normalize?
// - The same page can be written many ways:
//     https://Example.com/about#team
//     https://example.com/about/
//     https://example.com/about
// - If we don't normalize, the crawler fetches the same page several times
// - The canonical string is the identity we store in the visited set and
//   the crawl queue, so "fetched at most once" depends on this function
//
// Normalization rules (in order):
// 1. Strip the fragment (#...) - fragments never change the page content
// 2. Lowercase the host - DNS is case-insensitive (the url crate does this
//    for us when parsing)
// 3. Strip trailing '/'s from the path; an empty path becomes '/'
// 4. Path and query casing is preserved - those ARE case-sensitive
//
// Rust concepts:
// - Result<T, E>: For operations that can fail
// - thiserror: Derive macro that generates Display/Error impls for our enum
// =============================================================================

use thiserror::Error;
use url::Url;

// The error returned when a raw string cannot become a canonical URL
//
// #[derive(Error)] comes from thiserror and writes the std::error::Error
// boilerplate for us. The #[error(...)] attributes become the Display text.
#[derive(Debug, Error)]
pub enum InvalidUrlError {
    /// The input was empty (or only whitespace)
    #[error("URL must not be empty")]
    Empty,

    /// The input could not be parsed as a URL at all
    #[error("failed to parse URL '{url}': {source}")]
    Unparsable {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

// Normalizes a raw URL into the canonical string used for deduplication
//
// Parameters:
//   raw: the URL as written by a page author or the user (untrusted)
//
// Returns: the canonical URL string, or InvalidUrlError if the input is
// empty or unparsable
//
// Examples:
//   "https://Example.com/about#team" -> "https://example.com/about"
//   "https://example.com/about/"     -> "https://example.com/about"
//   "https://example.com"            -> "https://example.com/"
//
// This function is idempotent: normalizing an already-canonical URL
// returns it unchanged. The tests below pin that property.
pub fn normalize_url(raw: &str) -> Result<String, InvalidUrlError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InvalidUrlError::Empty);
    }

    // Url::parse rejects anything without a scheme, lowercases the scheme
    // and host, and percent-decodes consistently
    let mut parsed = Url::parse(trimmed).map_err(|source| InvalidUrlError::Unparsable {
        url: trimmed.to_string(),
        source,
    })?;

    // Rule 1: drop the fragment entirely
    parsed.set_fragment(None);

    // Rule 3: strip trailing slashes, but keep the root path "/"
    // (Url::parse already gave us "/" for an empty path). ALL of them,
    // not just one: stripping a single slash would make "/p//" normalize
    // to "/p/" and then to "/p" on a second pass, breaking idempotence -
    // and with it the visited-set identity
    let path = parsed.path().to_string();
    let stripped = path.trim_end_matches('/');
    if stripped.len() < path.len() {
        if stripped.is_empty() {
            parsed.set_path("/");
        } else {
            parsed.set_path(stripped);
        }
    }

    Ok(parsed.as_str().to_string())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does the url crate lowercase the host for us?
//    - Url::parse canonicalizes "special" schemes (http, https, ftp, ...)
//    - Host lowercasing is part of the WHATWG URL standard it implements
//    - We still test it explicitly, because the visited set depends on it
//
// 2. Why .to_string() before set_path?
//    - parsed.path() borrows from `parsed`
//    - set_path needs to mutate `parsed`, so the borrow must end first
//    - Cloning the path into a String ends the borrow
//
// 3. What is #[source] in the error enum?
//    - It marks the underlying cause of our error
//    - Error-reporting tools (like anyhow) can then print the whole chain
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_fragment() {
        let normalized = normalize_url("https://a.com/p#x").unwrap();
        assert_eq!(normalized, normalize_url("https://a.com/p").unwrap());
        assert!(!normalized.contains('#'));
    }

    #[test]
    fn lowercases_host() {
        assert_eq!(
            normalize_url("https://A.com/p").unwrap(),
            normalize_url("https://a.com/p").unwrap()
        );
        assert_eq!(
            normalize_url("https://EXAMPLE.com/Test").unwrap(),
            "https://example.com/Test"
        );
    }

    #[test]
    fn preserves_path_case() {
        // Only the host is case-insensitive; /About and /about are
        // different pages on a case-sensitive server
        assert_ne!(
            normalize_url("https://a.com/About").unwrap(),
            normalize_url("https://a.com/about").unwrap()
        );
    }

    #[test]
    fn strips_trailing_slashes() {
        assert_eq!(
            normalize_url("https://a.com/p/").unwrap(),
            normalize_url("https://a.com/p").unwrap()
        );
        // Repeated slashes collapse in ONE pass - anything less and the
        // same page would get two distinct canonical identities
        assert_eq!(
            normalize_url("https://a.com/p//").unwrap(),
            "https://a.com/p"
        );
        assert_eq!(normalize_url("https://a.com///").unwrap(), "https://a.com/");
    }

    #[test]
    fn empty_path_becomes_root() {
        assert_eq!(
            normalize_url("https://a.com").unwrap(),
            "https://a.com/"
        );
    }

    #[test]
    fn preserves_query() {
        assert_eq!(
            normalize_url("https://a.com/p?page=2#frag").unwrap(),
            "https://a.com/p?page=2"
        );
    }

    #[test]
    fn is_idempotent() {
        let inputs = [
            "https://A.com/p/",
            "https://a.com/p//",
            "https://a.com/p///",
            "https://example.com/about#team",
            "http://example.com",
            "https://a.com/p?q=1&r=2",
        ];
        for input in inputs {
            let once = normalize_url(input).unwrap();
            let twice = normalize_url(&once).unwrap();
            assert_eq!(once, twice, "normalize is not idempotent for {input}");
        }
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(normalize_url(""), Err(InvalidUrlError::Empty)));
        assert!(matches!(normalize_url("   "), Err(InvalidUrlError::Empty)));
    }

    #[test]
    fn rejects_unparsable_input() {
        assert!(matches!(
            normalize_url("not a url at all"),
            Err(InvalidUrlError::Unparsable { .. })
        ));
    }
}
