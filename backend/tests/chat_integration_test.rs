//! Integration tests for the chatbot endpoints

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_history_starts_with_welcome() {
    let app = common::TestApp::new().await;

    let history = app.get_json("/api/v1/chat/history").await;
    let history = history.as_array().unwrap();

    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["role"], "assistant");
}

#[tokio::test]
async fn test_calorie_query_uses_today_records() {
    let app = common::TestApp::new().await;
    app.set_up_user().await;

    let (status, _) = app
        .post(
            "/api/v1/diet",
            &json!({
                "date": common::today(),
                "meal_type": "breakfast",
                "foods": [{"name": "토스트", "amount": 1, "unit": "ea", "calories": 400}]
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = app
        .post("/api/v1/chat", &json!({"message": "오늘 칼로리 알려줘"}))
        .await;
    assert_eq!(status, StatusCode::OK, "{}", body);

    let reply: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(reply["intent"], "calorie_query");
    let content = reply["reply"]["content"].as_str().unwrap();
    assert!(content.contains("• 오늘 섭취: 400kcal"), "{}", content);
    assert!(content.contains("1400kcal 부족"), "{}", content);
}

#[tokio::test]
async fn test_meal_message_is_recorded() {
    let app = common::TestApp::new().await;
    app.set_up_user().await;

    let (status, body) = app
        .post("/api/v1/chat", &json!({"message": "저녁에 샐러드 350kcal 먹었어"}))
        .await;
    assert_eq!(status, StatusCode::OK, "{}", body);

    let reply: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(reply["intent"], "add_meal");
    assert_eq!(reply["applied_action"]["type"], "add_meal");

    let saved = app.storage.snapshot();
    assert_eq!(saved.diet_records.len(), 1);
    assert_eq!(saved.diet_records[0].total_calories, 350);
    assert_eq!(saved.diet_records[0].foods[0].name, "샐러드");

    let history = app.get_json("/api/v1/chat/history").await;
    assert_eq!(history.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_setup_required_without_profile() {
    let app = common::TestApp::new().await;

    let (status, body) = app
        .post("/api/v1/chat", &json!({"message": "조깅 30분 했어"}))
        .await;
    assert_eq!(status, StatusCode::OK);

    let reply: Value = serde_json::from_str(&body).unwrap();
    assert!(reply.get("applied_action").map_or(true, Value::is_null));
    assert!(app.storage.snapshot().exercise_logs.is_empty());
}

#[tokio::test]
async fn test_blank_message_rejected() {
    let app = common::TestApp::new().await;

    let (status, _) = app.post("/api/v1/chat", &json!({"message": "   "})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_clear_history() {
    let app = common::TestApp::new().await;
    app.post("/api/v1/chat", &json!({"message": "안녕"})).await;

    let (status, _) = app.delete("/api/v1/chat/history").await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let history = app.get_json("/api/v1/chat/history").await;
    assert_eq!(history.as_array().unwrap().len(), 1);
}
