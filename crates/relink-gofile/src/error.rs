//! Internal error types for GoFile operations.

use relink_core::ConvertError;
use thiserror::Error;

/// Result type alias for GoFile operations.
pub type GofileResult<T> = Result<T, GofileError>;

/// Errors related to the GoFile upload flow.
#[derive(Debug, Error)]
pub enum GofileError {
    /// The host explicitly refused the upload.
    #[error("upload rejected: {message}")]
    Rejected {
        /// The host's own message, or "unknown error".
        message: String,
    },

    /// A request failed with an HTTP error status.
    #[error("request failed with status {status}: {url}")]
    RequestFailed {
        /// HTTP status code.
        status: u16,
        /// The URL that was requested.
        url: String,
    },

    /// A reply body did not have the documented shape.
    #[error("unexpected response: {message}")]
    UnexpectedResponse {
        /// Description of what was unexpected.
        message: String,
    },

    /// Could not read the local file to upload.
    #[error("failed to read upload source: {0}")]
    Io(#[from] std::io::Error),

    /// Network or HTTP client error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl From<GofileError> for ConvertError {
    /// Everything that goes wrong on the destination side is an upload
    /// failure from the attempt's point of view; the message keeps the
    /// detail.
    fn from(err: GofileError) -> Self {
        match err {
            GofileError::Rejected { message } => Self::upload(message),
            other => Self::upload(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relink_core::ErrorKind;

    #[test]
    fn test_everything_maps_to_upload_kind() {
        let rejected: ConvertError = GofileError::Rejected {
            message: "quota exceeded".to_string(),
        }
        .into();
        assert_eq!(rejected.kind(), ErrorKind::Upload);
        assert!(rejected.user_message().contains("quota exceeded"));

        let shape: ConvertError = GofileError::UnexpectedResponse {
            message: "no servers listed".to_string(),
        }
        .into();
        assert_eq!(shape.kind(), ErrorKind::Upload);
    }
}
