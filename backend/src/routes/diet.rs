//! Diet record API routes

use super::parse_id;
use crate::error::ApiError;
use crate::services::DiaryService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use healthy_diary_shared::models::DietRecord;
use healthy_diary_shared::types::{AddDietRecordRequest, DateQuery};

/// Create diet routes
pub fn diet_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_records).post(add_record))
        .route("/:id", delete(delete_record))
}

/// GET /api/v1/diet?date=YYYY-MM-DD
async fn list_records(State(state): State<AppState>, Query(query): Query<DateQuery>) -> Json<Vec<DietRecord>> {
    Json(DiaryService::list_diet(&state.diary, query.date).await)
}

/// POST /api/v1/diet - Add a meal
async fn add_record(
    State(state): State<AppState>,
    Json(req): Json<AddDietRecordRequest>,
) -> Result<(StatusCode, Json<DietRecord>), ApiError> {
    let record = DiaryService::add_diet(&state.diary, req).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// DELETE /api/v1/diet/:id
async fn delete_record(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    DiaryService::delete_diet(&state.diary, parse_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
