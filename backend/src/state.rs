//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.

use crate::config::AppConfig;
use crate::services::weather::{WeatherError, WeatherService};
use crate::storage::{DiaryStore, Storage, StorageError};
use healthy_diary_shared::catalog::Catalog;
use healthy_diary_shared::chat::WELCOME_MESSAGE;
use healthy_diary_shared::models::ChatMessage;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Error, Debug)]
pub enum StateError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Weather(#[from] WeatherError),
}

/// Shared application state
///
/// All fields are `Arc`s or `Arc`-backed, so cloning per request is cheap.
#[derive(Clone)]
pub struct AppState {
    /// The diary document and where it is persisted
    pub diary: DiaryStore,
    /// Conversation of the running session, not persisted
    pub chat: Arc<Mutex<Vec<ChatMessage>>>,
    pub weather: Arc<WeatherService>,
    pub catalog: &'static Catalog,
    /// Present when a Prometheus recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Load the diary from `storage` and build the state
    pub async fn new(
        config: &AppConfig,
        storage: Arc<dyn Storage>,
        metrics: Option<PrometheusHandle>,
    ) -> Result<Self, StateError> {
        let diary = DiaryStore::open(storage).await?;
        let weather = WeatherService::new(&config.weather)?;

        Ok(Self {
            diary,
            chat: Arc::new(Mutex::new(vec![welcome_message()])),
            weather: Arc::new(weather),
            catalog: Catalog::builtin(),
            metrics,
        })
    }
}

/// First message of a fresh chat session
pub fn welcome_message() -> ChatMessage {
    ChatMessage::assistant(WELCOME_MESSAGE, None)
}
