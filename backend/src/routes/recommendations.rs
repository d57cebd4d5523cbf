//! Recommendation API routes

use crate::services::RecommendationService;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::Local;
use healthy_diary_shared::season::Season;
use healthy_diary_shared::types::{AdviceResponse, RecommendationQuery, RecommendationsResponse, SeasonGuideResponse};

/// Create recommendation routes
pub fn recommendation_routes() -> Router<AppState> {
    Router::new()
        .route("/diet", get(get_diet))
        .route("/exercise", get(get_exercise))
        .route("/advice", get(get_advice))
        .route("/season", get(get_season_guide))
}

/// GET /api/v1/recommendations/diet?season=
async fn get_diet(
    State(state): State<AppState>,
    Query(query): Query<RecommendationQuery>,
) -> Json<RecommendationsResponse> {
    Json(RecommendationService::diet(&state.diary, state.catalog, query.season).await)
}

/// GET /api/v1/recommendations/exercise?season=&indoor=
async fn get_exercise(
    State(state): State<AppState>,
    Query(query): Query<RecommendationQuery>,
) -> Json<RecommendationsResponse> {
    Json(RecommendationService::exercise(&state.diary, state.catalog, &state.weather, query).await)
}

/// GET /api/v1/recommendations/advice?season=
async fn get_advice(
    State(state): State<AppState>,
    Query(query): Query<RecommendationQuery>,
) -> Json<AdviceResponse> {
    let today = Local::now().date_naive();
    Json(RecommendationService::advice(&state.diary, today, query.season).await)
}

/// GET /api/v1/recommendations/season?season= - Ingredients and tips, this season by default
async fn get_season_guide(Query(query): Query<RecommendationQuery>) -> Json<SeasonGuideResponse> {
    let season = query
        .season
        .unwrap_or_else(|| Season::of_date(Local::now().date_naive()));
    Json(RecommendationService::season_guide(season))
}
