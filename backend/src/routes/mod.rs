//! Route definitions for the Healthy Diary API
//!
//! This module organizes all API routes and applies middleware.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use chrono::NaiveDate;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use uuid::Uuid;

mod catalog;
mod chat;
mod dashboard;
mod data;
mod diet;
mod exercise;
mod health;
mod profile;
mod recommendations;
mod water;
mod weather;
mod weight;

pub use catalog::catalog_routes;
pub use chat::chat_routes;
pub use dashboard::dashboard_routes;
pub use data::data_routes;
pub use diet::diet_routes;
pub use exercise::exercise_routes;
pub use profile::{goal_routes, profile_routes};
pub use recommendations::recommendation_routes;
pub use water::water_routes;
pub use weather::weather_routes;
pub use weight::weight_routes;

/// Backups can be large; everything else is small JSON
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .route("/metrics", get(health::metrics))
        .nest("/api/v1", api_routes())
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { "Healthy Diary API v1" }))
        .nest("/profile", profile_routes())
        .nest("/goal", goal_routes())
        .nest("/diet", diet_routes())
        .nest("/exercise", exercise_routes())
        .nest("/water", water_routes())
        .nest("/weight", weight_routes())
        .nest("/dashboard", dashboard_routes())
        .nest("/recommendations", recommendation_routes())
        .nest("/catalog", catalog_routes())
        .nest("/weather", weather_routes())
        .nest("/chat", chat_routes())
        .nest("/data", data_routes())
}

/// Parse a `YYYY-MM-DD` path segment
pub(crate) fn parse_date(value: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ApiError::validation("Invalid date format. Use YYYY-MM-DD"))
}

pub(crate) fn parse_id(value: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(value).map_err(|_| ApiError::validation("Invalid id"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-06-03").unwrap(), NaiveDate::from_ymd_opt(2024, 6, 3).unwrap());
        assert!(parse_date("06/03/2024").is_err());
        assert!(parse_id("not-a-uuid").is_err());
    }
}
