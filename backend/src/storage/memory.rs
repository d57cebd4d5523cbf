//! In-memory backend for tests and throwaway sessions

use super::{DiaryData, Storage, StorageError};
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct MemoryStorage {
    data: Mutex<DiaryData>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing diary
    pub fn with_data(data: DiaryData) -> Self {
        Self {
            data: Mutex::new(data),
        }
    }

    /// Copy of what was last saved
    pub fn snapshot(&self) -> DiaryData {
        match self.data.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn load(&self) -> Result<DiaryData, StorageError> {
        Ok(self.snapshot())
    }

    async fn save(&self, data: &DiaryData) -> Result<(), StorageError> {
        let mut guard = match self.data.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = data.clone();
        Ok(())
    }
}
