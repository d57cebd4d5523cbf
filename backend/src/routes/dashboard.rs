//! Dashboard API routes

use super::parse_date;
use crate::error::ApiError;
use crate::services::DiaryService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use healthy_diary_shared::types::DailySummary;

/// Create dashboard routes
pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/:date", get(get_daily_summary))
}

/// GET /api/v1/dashboard/:date - Totals of a day against the goal
async fn get_daily_summary(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DailySummary>, ApiError> {
    let date = parse_date(&date)?;
    Ok(Json(DiaryService::daily_summary(&state.diary, date).await))
}
