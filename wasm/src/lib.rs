//! Healthy Diary WASM Module
//!
//! Browser bindings for the calorie formulas and the chat intent
//! classifier, so the front end can preview numbers without a round trip.

use chrono::NaiveDate;
use healthy_diary_shared::{ActivityLevel, Gender};
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

fn parse_enum<T: DeserializeOwned>(value: &str, what: &str) -> Result<T, JsError> {
    serde_json::from_value(serde_json::Value::String(value.to_lowercase()))
        .map_err(|_| JsError::new(&format!("unknown {}: {}", what, value)))
}

fn parse_date(value: &str) -> Result<NaiveDate, JsError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| JsError::new("date must be YYYY-MM-DD"))
}

/// Mifflin-St Jeor BMR. `gender` is "male", "female" or "other".
#[wasm_bindgen]
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: i32, gender: &str) -> Result<i32, JsError> {
    let gender: Gender = parse_enum(gender, "gender")?;
    Ok(healthy_diary_shared::calculate_bmr_mifflin(weight_kg, height_cm, age_years, gender))
}

/// BMR times the multiplier of `activity_level` ("sedentary" .. "very_active")
#[wasm_bindgen]
pub fn calculate_tdee(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    gender: &str,
    activity_level: &str,
) -> Result<i32, JsError> {
    let bmr = calculate_bmr(weight_kg, height_cm, age_years, gender)?;
    let level: ActivityLevel = parse_enum(activity_level, "activity level")?;
    Ok((bmr as f64 * level.multiplier()).round() as i32)
}

/// Daily target for reaching `target_weight` by `target_date`, counted from `today`
#[wasm_bindgen]
pub fn calculate_target_calories(
    current_weight: f64,
    target_weight: f64,
    target_date: &str,
    tdee: i32,
    today: &str,
) -> Result<i32, JsError> {
    Ok(healthy_diary_shared::calculate_target_calories_on(
        current_weight,
        target_weight,
        parse_date(target_date)?,
        tdee,
        parse_date(today)?,
    ))
}

#[wasm_bindgen]
pub fn calculate_calories_by_weight(met: f64, weight_kg: f64, duration_minutes: u32) -> i32 {
    healthy_diary_shared::calculate_calories_by_weight(met, weight_kg, duration_minutes)
}

/// Intent tag of a chat message, e.g. "add_meal"
#[wasm_bindgen]
pub fn classify_intent(message: &str) -> String {
    healthy_diary_shared::classify_intent(message).as_str().to_string()
}

/// Intent, confidence and entities of a chat message as a JSON string
#[wasm_bindgen]
pub fn analyze_message(message: &str) -> Result<String, JsError> {
    let analysis = healthy_diary_shared::analyze_message(message);
    serde_json::to_string(&analysis).map_err(|e| JsError::new(&e.to_string()))
}
