//! Integration tests for diet, exercise, water, weight and dashboard endpoints

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_diet_record_lifecycle() {
    let app = common::TestApp::new().await;
    app.set_up_user().await;

    let (status, body) = app
        .post(
            "/api/v1/diet",
            &json!({
                "date": "2024-06-03",
                "meal_type": "lunch",
                "foods": [
                    {"name": "비빔밥", "amount": 1, "unit": "ea", "calories": 560},
                    {"name": "된장국", "amount": 200, "unit": "ml", "calories": 80.4}
                ]
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    let record: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(record["total_calories"], 640);

    let records = app.get_json("/api/v1/diet?date=2024-06-03").await;
    assert_eq!(records.as_array().unwrap().len(), 1);
    let other_day = app.get_json("/api/v1/diet?date=2024-06-04").await;
    assert!(other_day.as_array().unwrap().is_empty());

    let id = record["id"].as_str().unwrap();
    let (status, _) = app.delete(&format!("/api/v1/diet/{}", id)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.delete(&format!("/api/v1/diet/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_diet_record_needs_foods() {
    let app = common::TestApp::new().await;

    let (status, _) = app
        .post(
            "/api/v1/diet",
            &json!({"date": "2024-06-03", "meal_type": "snack", "foods": []}),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_exercise_from_catalog_and_manual() {
    let app = common::TestApp::new().await;
    app.set_up_user().await;

    let (status, body) = app
        .post(
            "/api/v1/exercise",
            &json!({"date": "2024-06-03", "exercise_id": "3", "duration_minutes": 30}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    let log: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(log["calories_burned"], 245);

    let (status, body) = app
        .post(
            "/api/v1/exercise",
            &json!({
                "date": "2024-06-03",
                "exercise_name": "클라이밍",
                "duration_minutes": 60,
                "calories_burned": 500
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);

    let (status, _) = app
        .post(
            "/api/v1/exercise",
            &json!({"date": "2024-06-03", "exercise_id": "999", "duration_minutes": 30}),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let logs = app.get_json("/api/v1/exercise?date=2024-06-03").await;
    assert_eq!(logs.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_water_log_and_undo() {
    let app = common::TestApp::new().await;

    for amount in [250, 500] {
        let (status, _) = app
            .post("/api/v1/water", &json!({"date": "2024-06-03", "amount_ml": amount}))
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = app.delete("/api/v1/water/2024-06-03").await;
    assert_eq!(status, StatusCode::OK);
    let removal: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(removal["removed"], true);
    assert_eq!(removal["total_ml"], 250);

    let logs = app.get_json("/api/v1/water?date=2024-06-03").await;
    assert_eq!(logs.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_water_undo_on_empty_day() {
    let app = common::TestApp::new().await;

    let (status, body) = app.delete("/api/v1/water/2024-06-03").await;

    assert_eq!(status, StatusCode::OK);
    let removal: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(removal["removed"], false);
    assert_eq!(removal["total_ml"], 0);
}

#[tokio::test]
async fn test_water_amount_out_of_range() {
    let app = common::TestApp::new().await;

    let (status, _) = app
        .post("/api/v1/water", &json!({"date": "2024-06-03", "amount_ml": 6000}))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_weight_log_updates_profile() {
    let app = common::TestApp::new().await;
    app.set_up_user().await;

    for (date, weight) in [("2024-06-05", 68.9), ("2024-06-01", 69.5)] {
        let (status, _) = app
            .post("/api/v1/weight", &json!({"date": date, "weight": weight}))
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let history = app.get_json("/api/v1/weight").await;
    let history = history.as_array().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["date"], "2024-06-01");

    let profile = app.get_json("/api/v1/profile").await;
    assert_eq!(profile["current_weight"], 69.5);
}

#[tokio::test]
async fn test_dashboard_summary() {
    let app = common::TestApp::new().await;
    app.set_up_user().await;

    app.post(
        "/api/v1/diet",
        &json!({
            "date": "2024-06-03",
            "meal_type": "breakfast",
            "foods": [{"name": "오트밀", "amount": 1, "unit": "ea", "calories": 900}]
        }),
    )
    .await;
    app.post(
        "/api/v1/exercise",
        &json!({"date": "2024-06-03", "exercise_id": "3", "duration_minutes": 30}),
    )
    .await;
    app.post("/api/v1/water", &json!({"date": "2024-06-03", "amount_ml": 500}))
        .await;

    let summary = app.get_json("/api/v1/dashboard/2024-06-03").await;

    assert_eq!(summary["consumed_calories"], 900);
    assert_eq!(summary["burned_calories"], 245);
    assert_eq!(summary["target_calories"], 1800);
    assert_eq!(summary["remaining_calories"], 1145);
    assert_eq!(summary["water_intake_ml"], 500);
    assert_eq!(summary["target_water_ml"], 2000);
    assert_eq!(summary["progress_percent"], 50);
}

#[tokio::test]
async fn test_dashboard_rejects_bad_date() {
    let app = common::TestApp::new().await;

    let (status, _) = app.get("/api/v1/dashboard/03-06-2024").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
