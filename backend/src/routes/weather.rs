//! Weather API routes

use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use healthy_diary_shared::season::Season;
use healthy_diary_shared::types::WeatherResponse;
use healthy_diary_shared::weather::outdoor_advice;

/// Create weather routes
pub fn weather_routes() -> Router<AppState> {
    Router::new().route("/", get(get_weather))
}

/// GET /api/v1/weather - Current weather and outdoor exercise advice
async fn get_weather(State(state): State<AppState>) -> Json<WeatherResponse> {
    let observation = state.weather.current(Season::current()).await;
    Json(WeatherResponse {
        city: state.weather.city().to_string(),
        advice: outdoor_advice(&observation.weather),
        weather: observation.weather,
        live: observation.live,
    })
}
