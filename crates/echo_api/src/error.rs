//! Errors that can occur when calling the backend.

use thiserror::Error;

/// Errors produced by the typed API client.
///
/// All three variants are surfaced to the UI the same way: the submission
/// hook stringifies them into its error state. Nothing is retried or
/// escalated.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a status other than the declared 200.
    #[error("unexpected status {status}: {body}")]
    Status {
        /// HTTP status code the backend returned.
        status: u16,
        /// Response body text, included for display.
        body: String,
    },

    /// The response body was not valid JSON for the declared response type.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = ApiError::Status {
            status: 503,
            body: "service unavailable".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "unexpected status 503: service unavailable"
        );
    }

    #[test]
    fn test_decode_error_display_names_the_cause() {
        let cause = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = ApiError::from(cause);

        assert!(err.to_string().starts_with("failed to decode response:"));
    }
}
