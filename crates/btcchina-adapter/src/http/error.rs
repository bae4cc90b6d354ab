/*
[INPUT]:  Error sources (HTTP transport, exchange responses, serialization)
[OUTPUT]: Structured error types with classification helpers
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the BTCChina adapter.
///
/// One call produces at most one of these; there is no ambient error state
/// and no retry at this layer.
#[derive(Error, Debug)]
pub enum BtcChinaError {
    /// Request failed before a response arrived (connect, timeout, TLS)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-200 status from the endpoint
    #[error("transport error (status {status}): {message}")]
    Transport { status: u16, message: String },

    /// Well-formed error response from the exchange
    #[error("exchange error (code {code}): {message}")]
    Exchange { code: i64, message: String },

    /// 200 body carrying none of the keys the protocol defines
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Serialization/deserialization failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl BtcChinaError {
    /// True when the access/secret pair is the likely culprit.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, BtcChinaError::Transport { status: 401, .. })
    }

    /// True for errors the exchange itself reported (as opposed to
    /// transport-level failures).
    pub fn is_exchange_error(&self) -> bool {
        matches!(self, BtcChinaError::Exchange { .. })
    }
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, BtcChinaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_classification() {
        let unauthorized = BtcChinaError::Transport {
            status: 401,
            message: "Unauthorized".to_string(),
        };
        assert!(unauthorized.is_auth_error());

        let server_error = BtcChinaError::Transport {
            status: 500,
            message: "Internal Server Error".to_string(),
        };
        assert!(!server_error.is_auth_error());
    }

    #[test]
    fn test_exchange_error_display() {
        let err = BtcChinaError::Exchange {
            code: -32003,
            message: "Insufficient CNY balance".to_string(),
        };
        assert!(err.is_exchange_error());
        assert_eq!(
            err.to_string(),
            "exchange error (code -32003): Insufficient CNY balance"
        );
    }
}
