//! Internal error types for Mega operations.
//!
//! These errors are internal to `relink-mega` and are mapped to the core
//! conversion taxonomy at the port boundary.

use relink_core::ConvertError;
use thiserror::Error;

/// Result type alias for Mega operations.
pub type MegaResult<T> = Result<T, MegaError>;

/// Errors related to Mega link handling and the control API.
#[derive(Debug, Error)]
pub enum MegaError {
    /// The share URL does not match the host's file-share shape.
    #[error("invalid share link: {message}")]
    InvalidLink {
        /// What part of the URL failed validation.
        message: String,
    },

    /// The encoded key segment failed decode or length checks.
    #[error("malformed key material: {message}")]
    MalformedKey {
        /// Description of what was malformed.
        message: String,
    },

    /// Attribute ciphertext failed block decryption or unpadding.
    #[error("attribute decryption failed: {message}")]
    AttributeDecrypt {
        /// Description of the failure.
        message: String,
    },

    /// The host answered with a negative sentinel code.
    #[error("host rejected the request with code {code}")]
    HostRejected {
        /// The host's error code.
        code: i64,
    },

    /// Control API request failed with an HTTP error status.
    #[error("control API request failed with status {status}: {url}")]
    RequestFailed {
        /// HTTP status code.
        status: u16,
        /// The URL that was requested.
        url: String,
    },

    /// The control API answered with a body we cannot interpret.
    #[error("unexpected control API response: {message}")]
    UnexpectedResponse {
        /// Description of what was unexpected.
        message: String,
    },

    /// Network or HTTP client error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl MegaError {
    /// Create an invalid-link error.
    pub fn invalid_link(message: impl Into<String>) -> Self {
        Self::InvalidLink {
            message: message.into(),
        }
    }

    /// Create a malformed-key error.
    pub fn malformed_key(message: impl Into<String>) -> Self {
        Self::MalformedKey {
            message: message.into(),
        }
    }
}

impl From<MegaError> for ConvertError {
    /// Map an internal Mega error into the core conversion taxonomy.
    ///
    /// Sentinel rejections become `Api`; malformed reply bodies are a
    /// transport-contract violation and become `Network`, never `Api`.
    fn from(err: MegaError) -> Self {
        match err {
            MegaError::InvalidLink { message } => Self::format(message),
            MegaError::MalformedKey { message } | MegaError::AttributeDecrypt { message } => {
                Self::malformed_key(message)
            }
            MegaError::HostRejected { code } => Self::api(code),
            MegaError::RequestFailed { status, url } => {
                Self::network_with_status(format!("control API request failed: {url}"), status)
            }
            MegaError::Network(e) => {
                if e.is_timeout() {
                    Self::network(format!("request timed out: {e}"))
                } else {
                    Self::network(e.to_string())
                }
            }
            MegaError::UnexpectedResponse { message } => {
                Self::network(format!("unexpected control API response: {message}"))
            }
            MegaError::InvalidUrl(e) => Self::network(format!("invalid URL: {e}")),
            MegaError::JsonParse(e) => Self::network(format!("unparseable response body: {e}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relink_core::ErrorKind;

    #[test]
    fn test_sentinel_maps_to_api() {
        let err: ConvertError = MegaError::HostRejected { code: -2 }.into();
        assert_eq!(err, ConvertError::api(-2));
        assert_eq!(err.kind(), ErrorKind::Api);
    }

    #[test]
    fn test_link_and_key_errors_map_to_their_kinds() {
        let err: ConvertError = MegaError::invalid_link("wrong host").into();
        assert_eq!(err.kind(), ErrorKind::Format);

        let err: ConvertError = MegaError::malformed_key("too short").into();
        assert_eq!(err.kind(), ErrorKind::MalformedKey);
    }

    #[test]
    fn test_malformed_body_is_network_not_api() {
        let err: ConvertError = MegaError::UnexpectedResponse {
            message: "reply was not an array".to_string(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::Network);
    }

    #[test]
    fn test_http_status_is_preserved() {
        let err: ConvertError = MegaError::RequestFailed {
            status: 503,
            url: "https://g.api.mega.co.nz/cs".to_string(),
        }
        .into();
        match err {
            ConvertError::Network { status_code, .. } => assert_eq!(status_code, Some(503)),
            _ => panic!("Expected Network variant"),
        }
    }
}
