//! User profile and goal API routes

use crate::error::ApiError;
use crate::services::ProfileService;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use chrono::Local;
use healthy_diary_shared::models::{Goal, UserProfile};
use healthy_diary_shared::types::{ProfileMetricsResponse, SetGoalRequest, UpsertProfileRequest};

/// Create profile routes
pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_profile).put(upsert_profile))
        .route("/metrics", get(get_metrics))
}

/// Create goal routes
pub fn goal_routes() -> Router<AppState> {
    Router::new().route("/", get(get_goal).put(set_goal))
}

/// GET /api/v1/profile
async fn get_profile(State(state): State<AppState>) -> Result<Json<UserProfile>, ApiError> {
    Ok(Json(ProfileService::get_profile(&state.diary).await?))
}

/// PUT /api/v1/profile - Create or replace the profile
async fn upsert_profile(
    State(state): State<AppState>,
    Json(req): Json<UpsertProfileRequest>,
) -> Result<Json<UserProfile>, ApiError> {
    let today = Local::now().date_naive();
    Ok(Json(ProfileService::upsert_profile(&state.diary, req, today).await?))
}

/// GET /api/v1/profile/metrics - BMR, TDEE and target calories
async fn get_metrics(State(state): State<AppState>) -> Result<Json<ProfileMetricsResponse>, ApiError> {
    let today = Local::now().date_naive();
    Ok(Json(ProfileService::get_metrics(&state.diary, today).await?))
}

/// GET /api/v1/goal
async fn get_goal(State(state): State<AppState>) -> Result<Json<Goal>, ApiError> {
    Ok(Json(ProfileService::get_goal(&state.diary).await?))
}

/// PUT /api/v1/goal - Create or replace the goal
async fn set_goal(
    State(state): State<AppState>,
    Json(req): Json<SetGoalRequest>,
) -> Result<Json<Goal>, ApiError> {
    Ok(Json(ProfileService::set_goal(&state.diary, req).await?))
}
