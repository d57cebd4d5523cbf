//! Common test utilities for integration tests
//!
//! Every test gets its own router over an in-memory diary, so no external
//! services are needed.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{Duration, Local, NaiveDate};
use healthy_diary_backend::{config::AppConfig, routes, state::AppState, storage::MemoryStorage};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub storage: Arc<MemoryStorage>,
}

impl TestApp {
    /// Create a new test application with an empty diary
    pub async fn new() -> Self {
        let storage = Arc::new(MemoryStorage::new());
        let state = AppState::new(&test_config(), storage.clone(), None)
            .await
            .expect("Failed to build application state");
        let app = routes::create_router(state);

        Self { app, storage }
    }

    async fn send(&self, method: &str, path: &str, body: Option<&Value>) -> (StatusCode, String) {
        let builder = Request::builder().method(method).uri(path);
        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        self.send("GET", path, None).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &Value) -> (StatusCode, String) {
        self.send("POST", path, Some(body)).await
    }

    /// Make a PUT request with JSON body
    pub async fn put(&self, path: &str, body: &Value) -> (StatusCode, String) {
        self.send("PUT", path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> (StatusCode, String) {
        self.send("DELETE", path, None).await
    }

    /// GET and parse the body as JSON
    pub async fn get_json(&self, path: &str) -> Value {
        let (status, body) = self.get(path).await;
        assert_eq!(status, StatusCode::OK, "GET {} failed: {}", path, body);
        serde_json::from_str(&body).unwrap()
    }

    /// Store a 70 kg male profile and an 1800 kcal goal
    pub async fn set_up_user(&self) {
        let (status, body) = self
            .put(
                "/api/v1/profile",
                &json!({
                    "name": "민수",
                    "gender": "male",
                    "birth_date": "1990-01-01",
                    "height": 175.0,
                    "current_weight": 70.0,
                    "activity_level": "moderate"
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "profile: {}", body);

        let target_date = today() + Duration::days(90);
        let (status, body) = self
            .put(
                "/api/v1/goal",
                &json!({
                    "target_weight": 65.0,
                    "target_date": target_date,
                    "daily_calorie_goal": 1800,
                    "weekly_exercise_goal": 3,
                    "daily_water_goal": 2000
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "goal: {}", body);
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.server.port = 0;
    config.weather.api_key = None;
    config
}
