//! Exercise log API routes

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
use healthy_diary_shared::models::ExerciseLog;
use healthy_diary_shared::types::{AddExerciseLogRequest, DateQuery};

/// Create exercise routes
pub fn exercise_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_logs).post(add_log))
        .route("/:id", delete(delete_log))
}

/// GET /api/v1/exercise?date=YYYY-MM-DD
async fn list_logs(State(state): State<AppState>, Query(query): Query<DateQuery>) -> Json<Vec<ExerciseLog>> {
    Json(DiaryService::list_exercise(&state.diary, query.date).await)
}

/// POST /api/v1/exercise - Log a session, from the catalog or with manual calories
async fn add_log(
    State(state): State<AppState>,
    Json(req): Json<AddExerciseLogRequest>,
) -> Result<(StatusCode, Json<ExerciseLog>), ApiError> {
    let log = DiaryService::add_exercise(&state.diary, state.catalog, req).await?;
    Ok((StatusCode::CREATED, Json(log)))
}

/// DELETE /api/v1/exercise/:id
async fn delete_log(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    DiaryService::delete_exercise(&state.diary, parse_id(&id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
