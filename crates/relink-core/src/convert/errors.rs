//! Conversion error taxonomy.
//!
//! These errors are designed to be serializable and not depend on external
//! error types like `std::io::Error`. For I/O errors, we capture the kind
//! and message as strings.
//!
//! Every variant is terminal for the attempt that produced it: nothing in
//! the pipeline retries, and the decision to re-run belongs to the caller.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse classification of a conversion failure.
///
/// Mirrors the variants of [`ConvertError`] without their payloads, so that
/// outcomes and events can carry the category alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Share URL failed structural validation.
    Format,
    /// Key blob failed decode or length checks.
    MalformedKey,
    /// Source host rejected the file id with a sentinel code.
    Api,
    /// Transport failure (connect, status, timeout, mid-stream drop).
    Network,
    /// Local storage failure.
    Io,
    /// Destination host refused the finished file.
    Upload,
}

impl ErrorKind {
    /// String form used in logs and serialized events.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Format => "format",
            Self::MalformedKey => "malformed_key",
            Self::Api => "api",
            Self::Network => "network",
            Self::Io => "io",
            Self::Upload => "upload",
        }
    }
}

/// Error type for conversion attempts.
///
/// Serializable across process boundaries (panel API, event sinks) without
/// depending on non-serializable types like `std::io::Error`.
#[derive(Clone, Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConvertError {
    /// The share URL does not match the host's file-share shape.
    #[error("invalid share link: {message}")]
    Format {
        /// What part of the URL failed validation.
        message: String,
    },

    /// The encoded key segment failed base64 decode or the length floor.
    #[error("malformed key material: {message}")]
    MalformedKey {
        /// Detailed error message.
        message: String,
    },

    /// The source host answered with a negative sentinel code.
    #[error("host rejected the file (code {code})")]
    Api {
        /// The host's error code (always negative on the wire).
        code: i64,
    },

    /// Network/HTTP error at the resolve call or the byte stream.
    #[error("network error: {message}")]
    Network {
        /// Detailed error message.
        message: String,
        /// HTTP status code if one was received.
        #[serde(skip_serializing_if = "Option::is_none")]
        status_code: Option<u16>,
    },

    /// I/O error writing to local storage.
    #[error("I/O error ({kind}): {message}")]
    Io {
        /// The kind of I/O error (e.g. "NotFound", "PermissionDenied").
        kind: String,
        /// Detailed error message.
        message: String,
    },

    /// The destination host refused the upload.
    #[error("upload failed: {message}")]
    Upload {
        /// Detailed error message, usually the host's own text.
        message: String,
    },
}

impl ConvertError {
    /// Create a format error.
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }

    /// Create a malformed-key error.
    pub fn malformed_key(message: impl Into<String>) -> Self {
        Self::MalformedKey {
            message: message.into(),
        }
    }

    /// Create an API rejection error from the host's sentinel code.
    #[must_use]
    pub const fn api(code: i64) -> Self {
        Self::Api { code }
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            status_code: None,
        }
    }

    /// Create a network error with the HTTP status that was received.
    pub fn network_with_status(message: impl Into<String>, status_code: u16) -> Self {
        Self::Network {
            message: message.into(),
            status_code: Some(status_code),
        }
    }

    /// Create an I/O error from kind and message strings.
    pub fn io(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Io {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Create an I/O error from a `std::io::Error`.
    ///
    /// Captures the error kind name and message for serialization.
    #[must_use]
    pub fn from_io_error(err: &std::io::Error) -> Self {
        let kind = err.kind();
        Self::Io {
            kind: format!("{kind:?}"),
            message: err.to_string(),
        }
    }

    /// Create an upload error.
    pub fn upload(message: impl Into<String>) -> Self {
        Self::Upload {
            message: message.into(),
        }
    }

    /// The coarse category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Format { .. } => ErrorKind::Format,
            Self::MalformedKey { .. } => ErrorKind::MalformedKey,
            Self::Api { .. } => ErrorKind::Api,
            Self::Network { .. } => ErrorKind::Network,
            Self::Io { .. } => ErrorKind::Io,
            Self::Upload { .. } => ErrorKind::Upload,
        }
    }

    /// Convert to the message shown to the operator.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Format { message } => {
                format!("Invalid share link ({message}). Expected https://mega.nz/file/<id>#<key>!<key>.")
            }
            Self::MalformedKey { message } => {
                format!("The link's key material could not be decoded: {message}")
            }
            Self::Api { code } => {
                format!("The host rejected the file (code {code}). It may be expired or removed.")
            }
            Self::Network {
                message,
                status_code: Some(code),
            } => format!("Network error (HTTP {code}): {message}"),
            Self::Network { message, .. } => format!("Network error: {message}"),
            Self::Io { message, .. } => format!("Local storage failed: {message}"),
            Self::Upload { message } => format!("Upload was refused: {message}"),
        }
    }
}

/// Convenience result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;
