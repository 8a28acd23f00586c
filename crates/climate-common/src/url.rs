//! URL helpers for logging.

/// Strip the query string and fragment from a URL.
///
/// Signed asset URLs carry their access token in the query, which must not reach the logs.
pub fn redact_url(url: &str) -> &str {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    &url[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_strips_token() {
        assert_eq!(
            redact_url("https://acct.blob.core.windows.net/c/tavg.tif?st=1&sig=abc"),
            "https://acct.blob.core.windows.net/c/tavg.tif"
        );
        assert_eq!(redact_url("https://x/y#frag"), "https://x/y");
        assert_eq!(redact_url("https://x/y"), "https://x/y");
    }
}
