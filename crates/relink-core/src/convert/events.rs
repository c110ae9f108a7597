//! Conversion stage and progress events.
//!
//! One event is emitted per state-machine transition; sinks decide how to
//! surface them (progress bar, chat status edits, logs).

use serde::{Deserialize, Serialize};

use super::errors::{ConvertError, ErrorKind};

/// States of one conversion attempt.
///
/// An attempt moves strictly forward; `Failed` is reachable from every
/// other state and no state is ever re-entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConvertStage {
    /// Nothing has run yet.
    Idle,
    /// Share URL parsed into a reference.
    Parsed,
    /// Key material derived from the shared-key segment.
    KeyDerived,
    /// File id resolved into an ephemeral URL.
    Resolved,
    /// Bytes are streaming to local storage.
    Downloading,
    /// Terminal: local file complete and handed off.
    Completed,
    /// Terminal: attempt ended with an error.
    Failed,
}

impl ConvertStage {
    /// String form used in logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Parsed => "parsed",
            Self::KeyDerived => "key_derived",
            Self::Resolved => "resolved",
            Self::Downloading => "downloading",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    /// Whether this stage ends the attempt.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// Events emitted while a conversion attempt runs.
///
/// Tagged serialization so adapters can forward them as JSON verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConvertEvent {
    /// The share URL parsed cleanly.
    Parsed {
        /// File id recovered from the URL path.
        file_id: String,
    },

    /// Key material was derived from the shared-key segment.
    KeyDerived {
        /// Total decoded key bytes (never the bytes themselves).
        key_len: usize,
    },

    /// The host resolved the file id.
    Resolved {
        /// Size the host claims the payload has.
        declared_size: u64,
    },

    /// Bytes are flowing to disk.
    Downloading {
        /// Bytes written so far.
        bytes_written: u64,
        /// Size the host claimed at resolve time.
        declared_size: u64,
    },

    /// The download finished and the file is ready for hand-off.
    Completed {
        /// Final byte count on disk.
        bytes_written: u64,
    },

    /// The attempt ended in failure.
    Failed {
        /// Error category.
        kind: ErrorKind,
        /// Operator-facing message.
        message: String,
    },
}

impl ConvertEvent {
    /// Create a parsed event.
    pub fn parsed(file_id: impl Into<String>) -> Self {
        Self::Parsed {
            file_id: file_id.into(),
        }
    }

    /// Create a key-derived event.
    #[must_use]
    pub const fn key_derived(key_len: usize) -> Self {
        Self::KeyDerived { key_len }
    }

    /// Create a resolved event.
    #[must_use]
    pub const fn resolved(declared_size: u64) -> Self {
        Self::Resolved { declared_size }
    }

    /// Create a downloading progress event.
    #[must_use]
    pub const fn downloading(bytes_written: u64, declared_size: u64) -> Self {
        Self::Downloading {
            bytes_written,
            declared_size,
        }
    }

    /// Create a completed event.
    #[must_use]
    pub const fn completed(bytes_written: u64) -> Self {
        Self::Completed { bytes_written }
    }

    /// Create a failed event from a terminal error.
    #[must_use]
    pub fn failed(error: &ConvertError) -> Self {
        Self::Failed {
            kind: error.kind(),
            message: error.user_message(),
        }
    }

    /// The stage this event moves the attempt into.
    #[must_use]
    pub const fn stage(&self) -> ConvertStage {
        match self {
            Self::Parsed { .. } => ConvertStage::Parsed,
            Self::KeyDerived { .. } => ConvertStage::KeyDerived,
            Self::Resolved { .. } => ConvertStage::Resolved,
            Self::Downloading { .. } => ConvertStage::Downloading,
            Self::Completed { .. } => ConvertStage::Completed,
            Self::Failed { .. } => ConvertStage::Failed,
        }
    }

    /// Name of this event as it appears on the wire.
    #[must_use]
    pub const fn event_name(&self) -> &'static str {
        match self {
            Self::Parsed { .. } => "parsed",
            Self::KeyDerived { .. } => "key_derived",
            Self::Resolved { .. } => "resolved",
            Self::Downloading { .. } => "downloading",
            Self::Completed { .. } => "completed",
            Self::Failed { .. } => "failed",
        }
    }
}
