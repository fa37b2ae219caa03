use std::error::Error as StdError;
use std::time::Duration;
use thiserror::Error;

/// Ways a call to the external analysis service can fail.
///
/// These never leave the proxy; they are folded into
/// [`ProxyOutcome::Failure`](crate::enums::proxy_outcome::ProxyOutcome) and
/// the `Display` text becomes the failure reason.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProxyError {
    #[error("network error: {0}")]
    Network(String),

    #[error("network error: timeout after {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("invalid response: {0}")]
    Decode(String),

    #[error("cancelled")]
    Cancelled,
}

impl ProxyError {
    /// Anything reqwest reports, while sending or while reading the body, is
    /// a transport failure. reqwest's own timeouts use the same wording as
    /// the call deadline `budget`.
    pub fn transport(error: &reqwest::Error, budget: Duration) -> Self {
        if error.is_timeout() {
            ProxyError::Timeout(budget)
        } else {
            ProxyError::Network(error_chain(error))
        }
    }
}

/// Joins an error and its sources, so "error sending request" also says
/// *why* (connection refused, dns failure, ...).
pub fn error_chain(error: &dyn StdError) -> String {
    let mut detail = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !detail.contains(&cause_text) {
            detail.push_str(": ");
            detail.push_str(&cause_text);
        }
        source = cause.source();
    }
    detail
}

impl From<serde_json::Error> for ProxyError {
    fn from(error: serde_json::Error) -> Self {
        ProxyError::Decode(error.to_string())
    }
}
