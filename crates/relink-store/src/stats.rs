//! Usage-statistics repository.
//!
//! Counters live in a small JSON file. A corrupt or missing file starts
//! a fresh record rather than failing the caller; the incident is only
//! worth a warning. Same mutex-plus-atomic-rewrite discipline as the
//! admin store.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::error::StoreResult;
use crate::fs::write_atomic;

/// Persisted shape of the statistics file.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StatsRecord {
    total_conversions: u64,
    successful_conversions: u64,
    failed_conversions: u64,
    last_conversion: Option<DateTime<Utc>>,
    started_at: DateTime<Utc>,
}

impl StatsRecord {
    fn fresh() -> Self {
        Self {
            total_conversions: 0,
            successful_conversions: 0,
            failed_conversions: 0,
            last_conversion: None,
            started_at: Utc::now(),
        }
    }
}

/// A point-in-time view of the counters, with computed uptime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Attempts recorded, success or failure.
    pub total_conversions: u64,
    /// Attempts that completed and uploaded.
    pub successful_conversions: u64,
    /// Attempts that ended in a terminal error.
    pub failed_conversions: u64,
    /// When the most recent attempt was recorded.
    pub last_conversion: Option<DateTime<Utc>>,
    /// When this record began.
    pub started_at: DateTime<Utc>,
    /// Seconds since the record began.
    pub uptime_secs: u64,
}

/// Flat-file store for conversion counters.
pub struct StatsStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl StatsStore {
    /// Open a store backed by `path`. The file is created lazily on the
    /// first recorded outcome.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    async fn load(&self) -> StatsRecord {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!(
                    target: "relink.store",
                    path = %self.path.display(),
                    error = %e,
                    "statistics file is corrupt, starting fresh"
                );
                StatsRecord::fresh()
            }),
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(
                        target: "relink.store",
                        path = %self.path.display(),
                        error = %e,
                        "statistics file is unreadable, starting fresh"
                    );
                }
                StatsRecord::fresh()
            }
        }
    }

    /// Record one attempt outcome.
    pub async fn record(&self, success: bool) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut record = self.load().await;

        record.total_conversions += 1;
        if success {
            record.successful_conversions += 1;
        } else {
            record.failed_conversions += 1;
        }
        record.last_conversion = Some(Utc::now());

        let contents = serde_json::to_string_pretty(&record)?;
        write_atomic(&self.path, contents).await
    }

    /// Current counters plus computed uptime.
    pub async fn snapshot(&self) -> StatsSnapshot {
        let record = self.load().await;
        let uptime_secs = (Utc::now() - record.started_at)
            .num_seconds()
            .try_into()
            .unwrap_or(0);
        StatsSnapshot {
            total_conversions: record.total_conversions,
            successful_conversions: record.successful_conversions,
            failed_conversions: record.failed_conversions,
            last_conversion: record.last_conversion,
            started_at: record.started_at,
            uptime_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> StatsStore {
        StatsStore::new(dir.path().join("relink_stats.json"))
    }

    #[tokio::test]
    async fn test_fresh_store_is_zeroed() {
        let dir = tempfile::TempDir::new().unwrap();
        let snapshot = store_in(&dir).snapshot().await;
        assert_eq!(snapshot.total_conversions, 0);
        assert_eq!(snapshot.last_conversion, None);
    }

    #[tokio::test]
    async fn test_record_increments_the_right_branch() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = store_in(&dir);

        store.record(true).await.unwrap();
        store.record(true).await.unwrap();
        store.record(false).await.unwrap();

        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.total_conversions, 3);
        assert_eq!(snapshot.successful_conversions, 2);
        assert_eq!(snapshot.failed_conversions, 1);
        assert!(snapshot.last_conversion.is_some());
    }

    #[tokio::test]
    async fn test_counters_survive_reopening() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("relink_stats.json");

        StatsStore::new(&path).record(true).await.unwrap();
        let snapshot = StatsStore::new(&path).snapshot().await;
        assert_eq!(snapshot.total_conversions, 1);
    }

    #[tokio::test]
    async fn test_corrupt_file_starts_fresh() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("relink_stats.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = StatsStore::new(&path);
        assert_eq!(store.snapshot().await.total_conversions, 0);

        // Recording over a corrupt file heals it.
        store.record(false).await.unwrap();
        assert_eq!(store.snapshot().await.failed_conversions, 1);
    }
}
