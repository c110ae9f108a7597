//! Terminal record of one conversion attempt.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::{ConvertError, ErrorKind};

/// Tagged result of a finished attempt.
///
/// `Success` carries the path of the downloaded file at the moment of
/// hand-off; the path lives only as long as the attempt's scoped storage,
/// so nothing persists this type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ConversionOutcome {
    /// The download completed and the file was handed to the uploader.
    Success {
        /// Where the payload landed inside the attempt's scoped storage.
        local_path: PathBuf,
    },
    /// The attempt ended at some stage with a terminal error.
    Failure {
        /// Error category.
        kind: ErrorKind,
        /// Operator-facing message.
        message: String,
    },
}

impl ConversionOutcome {
    /// Create a success outcome.
    pub fn success(local_path: impl Into<PathBuf>) -> Self {
        Self::Success {
            local_path: local_path.into(),
        }
    }

    /// Create a failure outcome from a terminal error.
    #[must_use]
    pub fn failure(error: &ConvertError) -> Self {
        Self::Failure {
            kind: error.kind(),
            message: error.user_message(),
        }
    }

    /// Whether the attempt completed.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The local file path, if the attempt completed.
    #[must_use]
    pub fn local_path(&self) -> Option<&Path> {
        match self {
            Self::Success { local_path } => Some(local_path),
            Self::Failure { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_exposes_path() {
        let outcome = ConversionOutcome::success("/tmp/work/file_1700000000");
        assert!(outcome.is_success());
        assert_eq!(
            outcome.local_path(),
            Some(Path::new("/tmp/work/file_1700000000"))
        );
    }

    #[test]
    fn test_failure_from_error() {
        let outcome = ConversionOutcome::failure(&ConvertError::network("connection reset"));
        assert!(!outcome.is_success());
        assert_eq!(outcome.local_path(), None);
        match outcome {
            ConversionOutcome::Failure { kind, message } => {
                assert_eq!(kind, ErrorKind::Network);
                assert!(message.contains("connection reset"));
            }
            ConversionOutcome::Success { .. } => panic!("Expected Failure variant"),
        }
    }
}
