//! Webhook URL validation.
//!
//! Two deliberately separate capabilities:
//!
//! - [`WebhookUrlSchema`] is the strict, declarative constraint meant to be
//!   composed into a request-validation pipeline: the input must parse as a
//!   URL and must use HTTPS.
//! - [`validate_webhook_url`] is the lax imperative check: any parseable
//!   URL passes, scheme unchecked.
//!
//! The divergence (the schema rejects `http://example.com`, the function
//! accepts it) is inherited behavior and is kept as-is rather than
//! unified. Callers wanting transport security must go through the schema.

use url::Url;

/// Violation of the webhook URL schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WebhookUrlError {
    /// The input is not a syntactically valid URL.
    #[error("Invalid webhook URL")]
    InvalidFormat,

    /// The URL parsed but does not use the `https://` scheme.
    #[error("Webhook URL must use HTTPS")]
    HttpsRequired,
}

/// Declarative constraint on webhook registration URLs.
///
/// Structural contract: syntactically valid URL whose scheme is exactly
/// `https://`. Violations carry a fixed message per case.
pub struct WebhookUrlSchema;

impl WebhookUrlSchema {
    /// Checks `url` against the schema.
    pub fn check(url: &str) -> Result<(), WebhookUrlError> {
        if Url::parse(url).is_err() {
            return Err(WebhookUrlError::InvalidFormat);
        }
        if !url.starts_with("https://") {
            return Err(WebhookUrlError::HttpsRequired);
        }
        Ok(())
    }
}

/// Returns true when `url` parses as a URL.
///
/// No scheme restriction - `http://` (or `ftp://`, `mailto:`, ...) passes.
/// Parse failures are suppressed to `false`, never surfaced as errors.
pub fn validate_webhook_url(url: &str) -> bool {
    Url::parse(url).is_ok()
}
