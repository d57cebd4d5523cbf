//! Data models for the Healthy Diary application

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{Difficulty, ExerciseCatalogEntry};
use crate::health_metrics::{calculate_calories_by_weight, calculate_total_calories};

// ============================================================================
// User and Goal
// ============================================================================

/// Biological sex category used by the BMR formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Activity level tiers, ordered from least to most active
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Training twice a day
    VeryActive,
}

impl ActivityLevel {
    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    /// Catalog difficulty tier suited to this activity level
    pub fn target_difficulty(&self) -> Difficulty {
        match self {
            ActivityLevel::Sedentary | ActivityLevel::Light => Difficulty::Easy,
            ActivityLevel::VeryActive => Difficulty::Hard,
            ActivityLevel::Moderate | ActivityLevel::Active => Difficulty::Medium,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "거의 운동 안함",
            ActivityLevel::Light => "가벼운 운동 (주 1-3회)",
            ActivityLevel::Moderate => "보통 운동 (주 3-5회)",
            ActivityLevel::Active => "적극적 운동 (주 6-7회)",
            ActivityLevel::VeryActive => "매우 적극적 (하루 2회 운동)",
        }
    }
}

/// The diary owner's biometrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub gender: Gender,
    pub birth_date: NaiveDate,
    /// Height in centimeters
    pub height: f64,
    /// Current weight in kilograms
    pub current_weight: f64,
    pub activity_level: ActivityLevel,
    pub created_at: DateTime<Utc>,
}

/// The single active goal of a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Weight when the goal was set (kg)
    #[serde(default)]
    pub initial_weight: Option<f64>,
    pub target_weight: f64,
    pub target_date: NaiveDate,
    pub daily_calorie_goal: i32,
    pub weekly_exercise_goal: u32,
    pub daily_water_goal: i32,
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// Snapshot the user's current weight as the starting weight if none was given
    pub fn with_default_initial_weight(mut self, user: &UserProfile) -> Self {
        if self.initial_weight.is_none() {
            self.initial_weight = Some(user.current_weight);
        }
        self
    }
}

// ============================================================================
// Diet records
// ============================================================================

/// Meal slot of a diet record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "아침",
            MealType::Lunch => "점심",
            MealType::Dinner => "저녁",
            MealType::Snack => "간식",
        }
    }

    /// Meal slot for a given hour of the day
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            4..=9 => MealType::Breakfast,
            10..=14 => MealType::Lunch,
            15..=20 => MealType::Dinner,
            _ => MealType::Snack,
        }
    }
}

/// Unit of a logged food amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FoodUnit {
    #[serde(rename = "g")]
    #[default]
    Gram,
    #[serde(rename = "ml")]
    Milliliter,
    #[serde(rename = "ea")]
    Count,
}

/// A single food within a meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub unit: FoodUnit,
    #[serde(default)]
    pub calories: Option<f64>,
}

/// A logged meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub meal_type: MealType,
    pub foods: Vec<FoodItem>,
    pub total_calories: i32,
    pub created_at: DateTime<Utc>,
}

impl DietRecord {
    /// Create a record; the total is always the rounded sum of the foods
    pub fn new(user_id: Uuid, date: NaiveDate, meal_type: MealType, foods: Vec<FoodItem>) -> Self {
        let total_calories = calculate_total_calories(&foods);
        Self {
            id: Uuid::new_v4(),
            user_id,
            date,
            meal_type,
            foods,
            total_calories,
            created_at: Utc::now(),
        }
    }
}

// ============================================================================
// Exercise, weight and water logs
// ============================================================================

/// Exercise intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseIntensity {
    Low,
    Medium,
    High,
}

impl From<Difficulty> for ExerciseIntensity {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => ExerciseIntensity::Low,
            Difficulty::Medium => ExerciseIntensity::Medium,
            Difficulty::Hard => ExerciseIntensity::High,
        }
    }
}

/// A logged exercise session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub exercise_name: String,
    pub duration_minutes: u32,
    pub calories_burned: i32,
    pub intensity: ExerciseIntensity,
    pub created_at: DateTime<Utc>,
}

impl ExerciseLog {
    /// Create a log from a catalog exercise
    ///
    /// Calories follow `round(MET × weight × hours)`; intensity follows the
    /// catalog difficulty unless `intensity` overrides it.
    pub fn from_catalog(
        user_id: Uuid,
        date: NaiveDate,
        exercise: &ExerciseCatalogEntry,
        duration_minutes: u32,
        weight_kg: f64,
        intensity: Option<ExerciseIntensity>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            date,
            exercise_name: exercise.name.clone(),
            duration_minutes,
            calories_burned: calculate_calories_by_weight(exercise.met, weight_kg, duration_minutes),
            intensity: intensity.unwrap_or_else(|| exercise.difficulty.into()),
            created_at: Utc::now(),
        }
    }

    /// Create a log with a caller-supplied calorie figure
    pub fn manual(
        user_id: Uuid,
        date: NaiveDate,
        exercise_name: impl Into<String>,
        duration_minutes: u32,
        calories_burned: f64,
        intensity: ExerciseIntensity,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            date,
            exercise_name: exercise_name.into(),
            duration_minutes,
            calories_burned: calories_burned.round() as i32,
            intensity,
            created_at: Utc::now(),
        }
    }
}

/// A body weight measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    /// Weight in kilograms
    pub weight: f64,
    pub created_at: DateTime<Utc>,
}

/// Water intake entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub amount_ml: u32,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Engine outputs
// ============================================================================

/// Kind of recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationType {
    Diet,
    Exercise,
}

/// Macro nutrient breakdown in grams
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Nutrients {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// A diet or exercise suggestion. Regenerated on every request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RecommendationType,
    pub title: String,
    pub description: String,
    pub calories: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    /// Duration in minutes (exercise only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooking_steps: Option<Vec<String>>,
    /// Cooking time in minutes (diet only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooking_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrients: Option<Nutrients>,
}

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// A message of the current chat session. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<crate::chat::ChatAction>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: ChatRole::User,
            content: content.into(),
            timestamp: Utc::now(),
            action: None,
        }
    }

    pub fn assistant(content: impl Into<String>, action: Option<crate::chat::ChatAction>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: ChatRole::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
            action,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_user() -> UserProfile {
        UserProfile {
            id: Uuid::new_v4(),
            name: "테스트".to_string(),
            gender: Gender::Male,
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 1).unwrap(),
            height: 175.0,
            current_weight: 70.0,
            activity_level: ActivityLevel::Moderate,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn sample_goal(user_id: Uuid, initial_weight: Option<f64>) -> Goal {
        Goal {
            id: Uuid::new_v4(),
            user_id,
            initial_weight,
            target_weight: 65.0,
            target_date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            daily_calorie_goal: 1800,
            weekly_exercise_goal: 3,
            daily_water_goal: 2000,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_goal_initial_weight_defaults_to_current_weight() {
        let user = sample_user();
        let goal = sample_goal(user.id, None).with_default_initial_weight(&user);
        assert_eq!(goal.initial_weight, Some(user.current_weight));
    }

    #[test]
    fn test_goal_initial_weight_is_kept_when_set() {
        let user = sample_user();
        let goal = sample_goal(user.id, Some(80.0)).with_default_initial_weight(&user);
        assert_eq!(goal.initial_weight, Some(80.0));
    }

    #[test]
    fn test_diet_record_total_is_rounded_sum() {
        let foods = vec![
            FoodItem { name: "밥".into(), amount: 210.0, unit: FoodUnit::Gram, calories: Some(300.4) },
            FoodItem { name: "김치".into(), amount: 50.0, unit: FoodUnit::Gram, calories: Some(20.3) },
            FoodItem { name: "물".into(), amount: 200.0, unit: FoodUnit::Milliliter, calories: None },
        ];
        let record = DietRecord::new(Uuid::new_v4(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), MealType::Lunch, foods);
        assert_eq!(record.total_calories, 321);
    }

    #[test]
    fn test_activity_target_difficulty() {
        assert_eq!(ActivityLevel::Sedentary.target_difficulty(), Difficulty::Easy);
        assert_eq!(ActivityLevel::Light.target_difficulty(), Difficulty::Easy);
        assert_eq!(ActivityLevel::Moderate.target_difficulty(), Difficulty::Medium);
        assert_eq!(ActivityLevel::Active.target_difficulty(), Difficulty::Medium);
        assert_eq!(ActivityLevel::VeryActive.target_difficulty(), Difficulty::Hard);
    }

    #[test]
    fn test_meal_type_from_hour() {
        assert_eq!(MealType::from_hour(8), MealType::Breakfast);
        assert_eq!(MealType::from_hour(12), MealType::Lunch);
        assert_eq!(MealType::from_hour(19), MealType::Dinner);
        assert_eq!(MealType::from_hour(23), MealType::Snack);
    }

    #[test]
    fn test_food_unit_serialization() {
        assert_eq!(serde_json::to_string(&FoodUnit::Count).unwrap(), "\"ea\"");
        assert_eq!(serde_json::from_str::<FoodUnit>("\"ml\"").unwrap(), FoodUnit::Milliliter);
    }
}
