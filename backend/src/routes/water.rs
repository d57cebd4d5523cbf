//! Water intake API routes

use super::parse_date;
use crate::error::ApiError;
use crate::services::DiaryService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use chrono::Local;
use healthy_diary_shared::models::WaterLog;
use healthy_diary_shared::types::{AddWaterLogRequest, DateQuery, WaterRemovalResponse};

/// Create water routes
pub fn water_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_logs).post(add_log))
        .route("/:date", delete(remove_last))
}

/// GET /api/v1/water?date=YYYY-MM-DD - Entries of a day, today by default
async fn list_logs(State(state): State<AppState>, Query(query): Query<DateQuery>) -> Json<Vec<WaterLog>> {
    let date = query.date.unwrap_or_else(|| Local::now().date_naive());
    Json(DiaryService::list_water(&state.diary, date).await)
}

/// POST /api/v1/water - Log water intake
async fn add_log(
    State(state): State<AppState>,
    Json(req): Json<AddWaterLogRequest>,
) -> Result<(StatusCode, Json<WaterLog>), ApiError> {
    let log = DiaryService::add_water(&state.diary, req).await?;
    Ok((StatusCode::CREATED, Json(log)))
}

/// DELETE /api/v1/water/:date - Undo the last entry of a day
async fn remove_last(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<WaterRemovalResponse>, ApiError> {
    let date = parse_date(&date)?;
    Ok(Json(DiaryService::remove_last_water(&state.diary, date).await?))
}
