//! Error types for the generation pipeline.

use thiserror::Error;

/// Errors surfaced by the completion gateway.
///
/// Every round is a single attempt; none of these are recovered locally.
/// A failed round leaves session state untouched and the caller may retry
/// by invoking the round again.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GatewayError {
    /// No API credential was configured. User-correctable; checked before
    /// any network I/O happens.
    #[error("no completion service credential configured")]
    MissingCredential,

    /// The completion service answered but carried no text. Likely
    /// transient; retryable.
    #[error("completion service returned an empty response")]
    EmptyCompletion,

    /// Network-level fault: connection, TLS, timeout, non-success status,
    /// or an undecodable response body.
    #[error("transport failure: {0}")]
    TransportFailure(String),
}

impl GatewayError {
    /// Creates a transport failure with the given message.
    pub fn transport(message: impl Into<String>) -> Self {
        GatewayError::TransportFailure(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_human_readable() {
        assert_eq!(
            GatewayError::MissingCredential.to_string(),
            "no completion service credential configured"
        );
        assert_eq!(
            GatewayError::transport("connection refused").to_string(),
            "transport failure: connection refused"
        );
    }
}
