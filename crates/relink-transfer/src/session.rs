//! Scoped download storage.
//!
//! One session per attempt. The temporary directory is owned by the
//! session value, so removal happens on every exit path - success,
//! failure, or the caller dropping the attempt future - without any
//! caller bookkeeping.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tempfile::TempDir;

use relink_core::{ConvertError, ConvertResult};

/// An attempt's scoped local storage.
///
/// Exclusively owned by one conversion attempt. Dropping the session
/// removes the directory and its contents.
#[derive(Debug)]
pub struct DownloadSession {
    // Held for its Drop impl; the path accessors below are the API.
    _temp_dir: TempDir,
    local_path: PathBuf,
    bytes_written: u64,
}

impl DownloadSession {
    /// Open a fresh session with a file named `file_name` inside it.
    ///
    /// `work_root` overrides where the scoped directory is created;
    /// `None` uses the system temp directory.
    pub(crate) fn create(work_root: Option<&Path>, file_name: &str) -> ConvertResult<Self> {
        let temp_dir = match work_root {
            Some(root) => TempDir::new_in(root),
            None => TempDir::new(),
        }
        .map_err(|e| ConvertError::from_io_error(&e))?;

        let local_path = temp_dir.path().join(file_name);
        Ok(Self {
            _temp_dir: temp_dir,
            local_path,
            bytes_written: 0,
        })
    }

    /// Record bytes appended to the local file.
    pub(crate) fn add_bytes(&mut self, count: u64) {
        self.bytes_written += count;
    }

    /// Path of the downloaded file inside the scoped directory.
    #[must_use]
    pub fn local_path(&self) -> &Path {
        &self.local_path
    }

    /// Total bytes written so far. Monotonic within an attempt.
    #[must_use]
    pub const fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}

/// Default file name for a downloaded payload: `file_<unix-ts>`.
///
/// The true filename lives in the encrypted attributes, which the
/// pipeline does not decrypt, so a timestamp stands in.
#[must_use]
pub fn timestamped_file_name() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("file_{secs}")
}
