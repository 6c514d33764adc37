use std::sync::OnceLock;

use regex::Regex;

static URL_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Structural check only: `http` or `https`, `://`, then at least one
/// non-whitespace character to the end of the string. No DNS lookup,
/// no host validation.
pub fn is_valid_url(candidate: &str) -> bool {
    let pattern = URL_PATTERN.get_or_init(|| {
        Regex::new(r"^(http|https)://\S+$").expect("URL pattern is valid")
    });
    pattern.is_match(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        assert!(is_valid_url("https://a.b/c"));
        assert!(is_valid_url("http://example.com"));
        assert!(is_valid_url("https://vnexpress.net/bai-bao-123.html"));
    }

    #[test]
    fn rejects_other_schemes() {
        assert!(!is_valid_url("ftp://x.com"));
        assert!(!is_valid_url("file:///etc/passwd"));
        assert!(!is_valid_url("HTTP://example.com"));
    }

    #[test]
    fn rejects_missing_or_bare_scheme() {
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("https://"));
        assert!(!is_valid_url(""));
    }

    #[test]
    fn rejects_embedded_whitespace() {
        assert!(!is_valid_url("https://exa mple.com"));
        assert!(!is_valid_url("https://example.com/path "));
    }

    #[test]
    fn accepts_structurally_odd_but_matching_urls() {
        // Malformed hosts with a valid-looking scheme still pass.
        assert!(is_valid_url("http://..."));
    }
}
