//! Shared in-memory diary backed by a storage backend

use super::{DiaryData, Storage, StorageError};
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard};

/// The loaded diary plus the backend it is written to
///
/// Cloning is cheap; all clones share the same document.
#[derive(Clone)]
pub struct DiaryStore {
    storage: Arc<dyn Storage>,
    data: Arc<RwLock<DiaryData>>,
}

impl DiaryStore {
    /// Load the diary from `storage`
    pub async fn open(storage: Arc<dyn Storage>) -> Result<Self, StorageError> {
        let data = storage.load().await?;
        Ok(Self {
            storage,
            data: Arc::new(RwLock::new(data)),
        })
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, DiaryData> {
        self.data.read().await
    }

    /// Apply `change` and persist the result
    ///
    /// The change is made on a copy; when saving fails the in-memory diary
    /// is left untouched.
    pub async fn update<T, F>(&self, change: F) -> Result<T, StorageError>
    where
        F: FnOnce(&mut DiaryData) -> T,
    {
        let mut guard = self.data.write().await;
        let mut next = guard.clone();
        let output = change(&mut next);
        self.storage.save(&next).await?;
        *guard = next;
        Ok(output)
    }

    /// Check the backend can still be read
    pub async fn ping(&self) -> Result<(), StorageError> {
        self.storage.load().await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use async_trait::async_trait;
    use chrono::{NaiveDate, Utc};
    use healthy_diary_shared::models::WaterLog;
    use uuid::Uuid;

    struct FailingStorage;

    #[async_trait]
    impl Storage for FailingStorage {
        async fn load(&self) -> Result<DiaryData, StorageError> {
            Ok(DiaryData::default())
        }

        async fn save(&self, _data: &DiaryData) -> Result<(), StorageError> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full").into())
        }
    }

    fn water(amount_ml: u32) -> WaterLog {
        WaterLog {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            amount_ml,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_update_persists() {
        let backend = Arc::new(MemoryStorage::new());
        let store = DiaryStore::open(backend.clone()).await.unwrap();

        let count = store
            .update(|data| {
                data.add_water_log(water(250));
                data.water_logs.len()
            })
            .await
            .unwrap();

        assert_eq!(count, 1);
        assert_eq!(backend.snapshot().water_logs.len(), 1);
        assert_eq!(store.read().await.water_logs.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_save_keeps_memory_unchanged() {
        let store = DiaryStore::open(Arc::new(FailingStorage)).await.unwrap();

        let result = store.update(|data| data.add_water_log(water(250)).id).await;

        assert!(result.is_err());
        assert!(store.read().await.water_logs.is_empty());
    }
}
