//! Backup service - export, import and reset of the whole diary

use crate::error::ApiError;
use crate::storage::{DiaryExport, DiaryImport, DiaryStore};
use chrono::Utc;
use tracing::{info, warn};

pub struct BackupService;

impl BackupService {
    pub async fn export(store: &DiaryStore) -> DiaryExport {
        store.read().await.export(Utc::now())
    }

    /// Restore a backup; sections missing from it are kept
    pub async fn import(store: &DiaryStore, backup: DiaryImport) -> Result<(), ApiError> {
        let (diet, exercise) = store
            .update(move |data| {
                data.import(backup);
                (data.diet_records.len(), data.exercise_logs.len())
            })
            .await?;

        info!(diet_records = diet, exercise_logs = exercise, "Diary imported");
        Ok(())
    }

    pub async fn clear(store: &DiaryStore) -> Result<(), ApiError> {
        store.update(|data| data.clear()).await?;
        warn!("Diary cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_import_then_clear() {
        let backend = Arc::new(MemoryStorage::new());
        let store = DiaryStore::open(backend.clone()).await.unwrap();

        let backup: DiaryImport = serde_json::from_value(serde_json::json!({
            "water_logs": [{
                "id": "7d5c8e2a-3b1f-4c7e-9a52-1f0e8d6b4a21",
                "user_id": "00000000-0000-0000-0000-000000000000",
                "date": "2024-06-03",
                "amount_ml": 250,
                "created_at": "2024-06-03T09:00:00Z"
            }],
            "export_date": "2024-06-04T00:00:00Z"
        }))
        .unwrap();

        BackupService::import(&store, backup).await.unwrap();
        assert_eq!(backend.snapshot().water_logs.len(), 1);

        let export = BackupService::export(&store).await;
        assert_eq!(export.data.water_logs.len(), 1);

        BackupService::clear(&store).await.unwrap();
        assert!(backend.snapshot().water_logs.is_empty());
    }
}
