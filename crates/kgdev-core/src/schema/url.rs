//! Absolute URL checks for URL-typed fields.
//!
//! A value passes when it parses as a URL and carries a non-empty host.
//! The scheme is not restricted: `ftp://x` is accepted, while `mailto:` and
//! `file:///` URLs are rejected because they have no authority.

use url::Url;

/// Check that `value` is an absolute URL with a host.
///
/// Returns the reason on failure.
pub fn check_absolute_url(value: &str) -> Result<Url, String> {
    let parsed = Url::parse(value).map_err(|e| e.to_string())?;

    if parsed.cannot_be_a_base() {
        return Err(format!("scheme '{}' has no authority", parsed.scheme()));
    }

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(parsed),
        _ => Err("URL must have a host".to_string()),
    }
}
