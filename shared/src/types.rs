//! API request and response types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::catalog::{ExerciseCategory, FoodCategory};
use crate::chat::ChatAction;
use crate::intent::Intent;
use crate::models::{ActivityLevel, ChatMessage, ExerciseIntensity, FoodItem, Gender, MealType, Recommendation};
use crate::season::Season;
use crate::weather::{OutdoorAdvice, WeatherInfo};

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

// ============================================================================
// Profile and goal
// ============================================================================

/// Create or replace the user profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpsertProfileRequest {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    pub gender: Gender,
    pub birth_date: NaiveDate,
    /// Height in cm
    #[validate(range(min = 50.0, max = 300.0))]
    pub height: f64,
    /// Weight in kg
    #[validate(range(min = 20.0, max = 500.0))]
    pub current_weight: f64,
    #[serde(default)]
    pub activity_level: ActivityLevel,
}

/// Calorie figures derived from the profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileMetricsResponse {
    pub age: i32,
    pub bmr: i32,
    pub tdee: i32,
    /// Present once a goal is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_calories: Option<i32>,
}

/// Create or replace the goal
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SetGoalRequest {
    /// Defaults to the current weight
    #[serde(default)]
    #[validate(range(min = 20.0, max = 500.0))]
    pub initial_weight: Option<f64>,
    #[validate(range(min = 20.0, max = 500.0))]
    pub target_weight: f64,
    pub target_date: NaiveDate,
    #[validate(range(min = 800, max = 10000))]
    pub daily_calorie_goal: i32,
    #[validate(range(max = 21))]
    pub weekly_exercise_goal: u32,
    #[validate(range(min = 0, max = 10000))]
    pub daily_water_goal: i32,
}

// ============================================================================
// Diary entries
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddDietRecordRequest {
    pub date: NaiveDate,
    pub meal_type: MealType,
    #[validate(length(min = 1, max = 30))]
    pub foods: Vec<FoodItem>,
}

/// Log an exercise, from the catalog or with a manual calorie figure
///
/// With `exercise_id` the catalog entry's MET computes the calories; with
/// `exercise_name` alone `calories_burned` is required unless the name is
/// found in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddExerciseLogRequest {
    pub date: NaiveDate,
    #[serde(default)]
    pub exercise_id: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, max = 50))]
    pub exercise_name: Option<String>,
    #[validate(range(min = 1, max = 1440))]
    pub duration_minutes: u32,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 50000.0))]
    pub calories_burned: Option<f64>,
    #[serde(default)]
    pub intensity: Option<ExerciseIntensity>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddWaterLogRequest {
    pub date: NaiveDate,
    #[validate(range(min = 1, max = 5000))]
    pub amount_ml: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddWeightLogRequest {
    pub date: NaiveDate,
    #[validate(range(min = 20.0, max = 500.0))]
    pub weight: f64,
}

/// Optional `?date=` filter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DateQuery {
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Result of removing the last water log of a day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterRemovalResponse {
    pub date: NaiveDate,
    pub removed: bool,
    pub total_ml: u32,
}

/// Totals of one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub consumed_calories: i32,
    pub burned_calories: i32,
    /// `target − consumed + burned`
    pub remaining_calories: i32,
    pub water_intake_ml: u32,
    pub target_calories: i32,
    pub target_water_ml: i32,
    /// Consumed as a percentage of the target
    pub progress_percent: i32,
}

// ============================================================================
// Recommendations
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationQuery {
    /// Defaults to the current season
    #[serde(default)]
    pub season: Option<Season>,
    /// Defaults to the weather advisory
    #[serde(default)]
    pub indoor: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub season: Season,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indoor: Option<bool>,
    pub items: Vec<Recommendation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceResponse {
    pub season: Season,
    pub advice: Vec<String>,
}

/// Ingredients and tips of a season
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonGuideResponse {
    pub season: Season,
    pub name: String,
    pub ingredients: Vec<String>,
    pub diet_tips: Vec<String>,
    pub exercise_tips: Vec<String>,
}

// ============================================================================
// Catalog browsing
// ============================================================================

/// Filters for `GET /catalog/foods`; all optional and combined with AND
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodCatalogQuery {
    #[serde(default)]
    pub season: Option<Season>,
    #[serde(default)]
    pub category: Option<FoodCategory>,
    #[serde(default)]
    pub min_calories: Option<i32>,
    #[serde(default)]
    pub max_calories: Option<i32>,
    /// Free-text name, resolved to the best single match
    #[serde(default)]
    pub name: Option<String>,
}

/// Filters for `GET /catalog/exercises`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExerciseCatalogQuery {
    #[serde(default)]
    pub category: Option<ExerciseCategory>,
    /// Matched against names and descriptions
    #[serde(default)]
    pub q: Option<String>,
}

/// Current weather and what it means for exercising outside
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherResponse {
    pub city: String,
    pub weather: WeatherInfo,
    pub advice: OutdoorAdvice,
    /// False when the seasonal mock answered
    pub live: bool,
}

// ============================================================================
// Chat
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, max = 500))]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReplyResponse {
    pub intent: Intent,
    pub confidence: f64,
    pub reply: ChatMessage,
    /// The action the reply carried, already applied to the diary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_action: Option<ChatAction>,
}
