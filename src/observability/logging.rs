//! Tracing subscriber setup and credential redaction.

use tracing::Span;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use url::Url;
use uuid::Uuid;

use crate::auth::KEY_QUERY_PARAM;

/// Replacement text for redacted values.
pub const REDACTED: &str = "***REDACTED***";

/// Install the global subscriber: fmt output filtered by `RUST_LOG`.
///
/// Falls back to `info` when `RUST_LOG` is unset or invalid. Calling it twice
/// is harmless; the second install is ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init();
}

/// Copy of `url` with the `key` query value masked, for logging.
pub fn redact_url(url: &Url) -> String {
    if !url.query_pairs().any(|(name, _)| name == KEY_QUERY_PARAM) {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(name, value)| {
            if name == KEY_QUERY_PARAM {
                (name.into_owned(), REDACTED.to_string())
            } else {
                (name.into_owned(), value.into_owned())
            }
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

/// Span for one inbound request, tagged with a fresh request id.
pub fn request_span(method: &str, path: &str) -> Span {
    tracing::info_span!(
        "embedding_request",
        request_id = %Uuid::new_v4(),
        method = %method,
        path = %path,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_key_param() {
        let url = Url::parse(
            "https://generativelanguage.googleapis.com/v1beta/models/m:embedContent?key=secret-123",
        )
        .unwrap();

        let logged = redact_url(&url);
        assert!(!logged.contains("secret-123"));
        assert!(logged.contains("key=***REDACTED***") || logged.contains("key=%2A%2A%2AREDACTED%2A%2A%2A"));
        assert!(logged.contains(":embedContent"));
    }

    #[test]
    fn test_url_without_key_untouched() {
        let url = Url::parse("http://localhost:4000/v1beta/models/m:embedContent").unwrap();
        assert_eq!(redact_url(&url), url.to_string());
    }

    #[test]
    fn test_other_params_kept() {
        let url = Url::parse("http://localhost/x?alt=json&key=abc").unwrap();
        let logged = redact_url(&url);
        assert!(logged.contains("alt=json"));
        assert!(!logged.contains("abc"));
    }
}
