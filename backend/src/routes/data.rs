//! Backup API routes: export, import and reset

use crate::error::ApiError;
use crate::services::BackupService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use crate::storage::DiaryImport;

/// Create data routes
pub fn data_routes() -> Router<AppState> {
    Router::new()
        .route("/", delete(clear_data))
        .route("/export", get(export_data))
        .route("/import", post(import_data))
}

/// GET /api/v1/data/export - The whole diary as a pretty-printed JSON file
async fn export_data(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let export = BackupService::export(&state.diary).await;
    let filename = format!(
        "attachment; filename=\"healthy-diary-backup-{}.json\"",
        export.export_date.format("%Y-%m-%d")
    );

    let json = serde_json::to_string_pretty(&export)
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("JSON serialization error: {}", e)))?;

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&filename).map_err(|e| ApiError::Internal(e.into()))?,
    );

    Ok((headers, json))
}

/// POST /api/v1/data/import - Restore a backup
async fn import_data(State(state): State<AppState>, Json(backup): Json<DiaryImport>) -> Result<StatusCode, ApiError> {
    BackupService::import(&state.diary, backup).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/data - Erase the diary
async fn clear_data(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    BackupService::clear(&state.diary).await?;
    Ok(StatusCode::NO_CONTENT)
}
