//! Diary persistence
//!
//! The whole diary is one document. Handlers mutate the in-memory copy held
//! by [`DiaryStore`] and every mutation is written back through a
//! [`Storage`] backend.

mod document;
mod file;
mod memory;
mod store;

pub use document::{DiaryData, DiaryError, DiaryExport, DiaryImport, DEFAULT_DAILY_WATER_GOAL_ML};
pub use file::JsonFileStorage;
pub use memory::MemoryStorage;
pub use store::DiaryStore;

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a storage backend
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Diary document is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Loads and saves the diary document
#[async_trait]
pub trait Storage: Send + Sync {
    /// Read the stored diary, empty when nothing was saved yet
    async fn load(&self) -> Result<DiaryData, StorageError>;

    /// Replace the stored diary
    async fn save(&self, data: &DiaryData) -> Result<(), StorageError>;
}
