//! JSON file backend

use super::{DiaryData, Storage, StorageError};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Keeps the diary in a single JSON file
///
/// Writes go to a sibling temp file which is then renamed over the target,
/// so a crash never leaves a half-written document behind.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "diary.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl Storage for JsonFileStorage {
    async fn load(&self) -> Result<DiaryData, StorageError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No diary file yet, starting empty");
                Ok(DiaryData::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, data: &DiaryData) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_vec_pretty(data)?;
        let temp = self.temp_path();
        tokio::fs::write(&temp, json).await?;
        tokio::fs::rename(&temp, &self.path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use healthy_diary_shared::models::{Gender, UserProfile};

    fn profile() -> UserProfile {
        UserProfile {
            id: uuid::Uuid::new_v4(),
            name: "지은".to_string(),
            gender: Gender::Female,
            birth_date: NaiveDate::from_ymd_opt(1995, 3, 2).unwrap(),
            height: 163.0,
            current_weight: 58.0,
            activity_level: Default::default(),
            created_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_missing_file_loads_empty_diary() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("diary.json"));

        let data = storage.load().await.unwrap();
        assert!(data.user.is_none());
        assert!(data.diet_records.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("nested").join("diary.json"));

        let mut data = DiaryData::default();
        data.set_user(profile());
        storage.save(&data).await.unwrap();

        let loaded = storage.load().await.unwrap();
        assert_eq!(loaded.user.as_ref().map(|u| u.name.as_str()), Some("지은"));
        assert!(!storage.temp_path().exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diary.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = JsonFileStorage::new(path).load().await.unwrap_err();
        assert!(matches!(err, StorageError::Serde(_)));
    }
}
