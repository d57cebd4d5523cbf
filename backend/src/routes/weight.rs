//! Weight log API routes

use crate::error::ApiError;
use crate::services::DiaryService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use healthy_diary_shared::models::WeightLog;
use healthy_diary_shared::types::AddWeightLogRequest;

/// Create weight routes
pub fn weight_routes() -> Router<AppState> {
    Router::new().route("/", get(get_weight_history).post(log_weight))
}

/// GET /api/v1/weight - All weigh-ins, oldest first
async fn get_weight_history(State(state): State<AppState>) -> Json<Vec<WeightLog>> {
    Json(DiaryService::list_weight(&state.diary).await)
}

/// POST /api/v1/weight - Log a weigh-in; also updates the profile's weight
async fn log_weight(
    State(state): State<AppState>,
    Json(req): Json<AddWeightLogRequest>,
) -> Result<(StatusCode, Json<WeightLog>), ApiError> {
    let log = DiaryService::add_weight(&state.diary, req).await?;
    Ok((StatusCode::CREATED, Json(log)))
}
