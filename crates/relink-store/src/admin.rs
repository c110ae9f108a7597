//! Admin-list repository.
//!
//! The list lives in a newline-delimited flat file of numeric operator
//! ids. A missing file reads as an empty list; lines that are not
//! numeric are skipped on load. Mutations are read-modify-write under a
//! mutex with an atomic rewrite, so concurrent commands and the panel
//! never race each other into a corrupt file.

use std::path::PathBuf;

use tokio::sync::Mutex;

use crate::error::{StoreError, StoreResult};
use crate::fs::write_atomic;

/// Flat-file store for the operator allow-list.
pub struct AdminStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl AdminStore {
    /// Open a store backed by `path`. The file is created lazily on the
    /// first mutation.
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

    /// Read the current list from disk.
    async fn load(&self) -> StoreResult<Vec<u64>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(contents
                .lines()
                .filter_map(|line| line.trim().parse().ok())
                .collect()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Persist a list, one id per line.
    async fn save(&self, admins: &[u64]) -> StoreResult<()> {
        let mut contents = admins
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        if !contents.is_empty() {
            contents.push('\n');
        }
        write_atomic(&self.path, contents).await
    }

    /// Add an operator id. Errors if the id is already listed.
    pub async fn add(&self, id: u64) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut admins = self.load().await?;
        if admins.contains(&id) {
            return Err(StoreError::AlreadyAdmin { id });
        }
        admins.push(id);
        self.save(&admins).await?;
        tracing::info!(target: "relink.store", id, "admin added");
        Ok(())
    }

    /// Remove an operator id. Errors if the id is not listed.
    pub async fn remove(&self, id: u64) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut admins = self.load().await?;
        let before = admins.len();
        admins.retain(|&a| a != id);
        if admins.len() == before {
            return Err(StoreError::UnknownAdmin { id });
        }
        self.save(&admins).await?;
        tracing::info!(target: "relink.store", id, "admin removed");
        Ok(())
    }

    /// The current list, sorted.
    pub async fn list(&self) -> StoreResult<Vec<u64>> {
        let mut admins = self.load().await?;
        admins.sort_unstable();
        Ok(admins)
    }

    /// Whether `id` is on the list.
    pub async fn contains(&self, id: u64) -> StoreResult<bool> {
        Ok(self.load().await?.contains(&id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn store_in(dir: &tempfile::TempDir) -> AdminStore {
        AdminStore::new(dir.path().join("admins.txt"))
    }

    #[tokio::test]
    async fn test_missing_file_reads_as_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.list().await.unwrap(), Vec::<u64>::new());
        assert!(!store.contains(42).await.unwrap());
    }

    #[tokio::test]
    async fn test_add_list_remove_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = store_in(&dir);

        store.add(300).await.unwrap();
        store.add(100).await.unwrap();
        store.add(200).await.unwrap();

        assert_eq!(store.list().await.unwrap(), vec![100, 200, 300]);
        assert!(store.contains(200).await.unwrap());

        store.remove(200).await.unwrap();
        assert_eq!(store.list().await.unwrap(), vec![100, 300]);
    }

    #[tokio::test]
    async fn test_duplicate_add_and_missing_remove_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = store_in(&dir);
        store.add(7).await.unwrap();

        assert!(matches!(
            store.add(7).await,
            Err(StoreError::AlreadyAdmin { id: 7 })
        ));
        assert!(matches!(
            store.remove(8).await,
            Err(StoreError::UnknownAdmin { id: 8 })
        ));
    }

    #[tokio::test]
    async fn test_load_skips_non_numeric_lines() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("admins.txt");
        std::fs::write(&path, "100\nnot-a-number\n\n  200  \n").unwrap();

        let store = AdminStore::new(&path);
        assert_eq!(store.list().await.unwrap(), vec![100, 200]);
    }

    #[tokio::test]
    async fn test_concurrent_adds_all_land() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = Arc::new(store_in(&dir));

        let tasks: Vec<_> = (1..=10u64)
            .map(|id| {
                let store = store.clone();
                tokio::spawn(async move { store.add(id).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        assert_eq!(store.list().await.unwrap().len(), 10);
    }
}
