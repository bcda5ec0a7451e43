use hopper_core::ShortenerError;
use url::Url;

/// Checks that `raw` is an absolute `http`/`https` URL with a host.
///
/// The input is not trimmed or normalized; what passes is stored verbatim.
pub fn validate_url(raw: &str) -> Result<(), ShortenerError> {
    if raw.is_empty() {
        return Err(ShortenerError::InvalidUrl(
            "URL cannot be empty".to_string(),
        ));
    }

    if raw.trim() != raw {
        return Err(ShortenerError::InvalidUrl(
            "URL must not have leading or trailing whitespace".to_string(),
        ));
    }

    // the parser drops tabs and newlines, so they would survive into the
    // stored value and break the Location header
    if raw.chars().any(char::is_control) {
        return Err(ShortenerError::InvalidUrl(format!(
            "URL must not contain control characters: {raw:?}"
        )));
    }

    let url = Url::parse(raw)
        .map_err(|e| ShortenerError::InvalidUrl(format!("{raw:?} is not an absolute URL: {e}")))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ShortenerError::InvalidUrl(format!(
                "URL scheme must be http or https: {other}"
            )))
        }
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(ShortenerError::InvalidUrl(format!(
            "URL must have a host: {raw}"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected(raw: &str) -> bool {
        matches!(validate_url(raw), Err(ShortenerError::InvalidUrl(_)))
    }

    #[test]
    fn accepts_http_and_https() {
        assert!(validate_url("http://example.com").is_ok());
        assert!(validate_url("https://example.com/path?q=1#frag").is_ok());
        assert!(validate_url("https://sub.example.com:8443/a/b").is_ok());
        assert!(validate_url("HTTPS://EXAMPLE.COM").is_ok());
        assert!(validate_url("http://127.0.0.1:8080/").is_ok());
    }

    #[test]
    fn rejects_empty_and_garbage() {
        assert!(rejected(""));
        assert!(rejected("not a url"));
        assert!(rejected("example.com"));
        assert!(rejected("/relative/path"));
    }

    #[test]
    fn rejects_missing_host() {
        assert!(rejected("http://"));
        assert!(rejected("http://:8080/"));
    }

    #[test]
    fn rejects_other_schemes() {
        assert!(rejected("ftp://example.com/file"));
        assert!(rejected("javascript:alert(1)"));
        assert!(rejected("mailto:someone@example.com"));
        assert!(rejected("file:///etc/passwd"));
    }

    #[test]
    fn rejects_surrounding_whitespace() {
        assert!(rejected(" https://example.com"));
        assert!(rejected("https://example.com\n"));
    }

    #[test]
    fn rejects_embedded_control_characters() {
        assert!(rejected("https://example.com/a\nb"));
        assert!(rejected("https://example.com/\r\nSet-Cookie: x=1"));
        assert!(rejected("https://exa\tmple.com/"));
        assert!(rejected("https://example.com/\u{7f}"));
    }
}
