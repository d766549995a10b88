/// Error types shared by every API client in this crate
use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single API operation.
///
/// Errors are logged at the failing call site with the operation name and
/// then propagated unchanged; no recovery or fallback happens in this layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The provider answered with a non-2xx status.
    #[error("request failed with HTTP {status}")]
    Request { status: StatusCode },

    /// The request never completed (DNS, refused connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body is not valid JSON.
    #[error("invalid JSON in response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status of the failed request, when the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Request { status } => Some(*status),
            ApiError::Transport(err) => err.status(),
            ApiError::Decode(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accessor() {
        let err = ApiError::Request {
            status: StatusCode::NOT_FOUND,
        };
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));

        let err: ApiError = serde_json::from_str::<serde_json::Value>("not json")
            .unwrap_err()
            .into();
        assert_eq!(err.status(), None);
    }
}
