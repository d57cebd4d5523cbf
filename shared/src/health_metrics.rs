//! Calorie calculations
//!
//! Provides BMR, TDEE, target calorie and burn calculations from the user's
//! biometrics and goal parameters.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Always Round**: Every calorie figure is `round(x)`, never truncated
//! 3. **No Validation**: Inputs are validated at the boundary, see `validation`

use chrono::{Datelike, NaiveDate, Utc};

use crate::models::{FoodItem, Gender, UserProfile};

/// Energy in one kilogram of body fat (kcal)
pub const KCAL_PER_KG_FAT: f64 = 7700.0;

/// Lowest daily target ever recommended (kcal)
pub const MIN_DAILY_CALORIES: f64 = 1200.0;

/// Daily calorie goal assumed when no goal is set
pub const DEFAULT_DAILY_CALORIE_GOAL: i32 = 2000;

/// Body weight assumed when no profile is set (kg)
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;

fn round_kcal(value: f64) -> i32 {
    value.round() as i32
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

// ============================================================================
// BMR and TDEE
// ============================================================================

/// Age as the difference of calendar years.
///
/// This ignores whether the birthday has passed yet this year. Existing
/// diaries were computed this way, so it is kept for output compatibility.
pub fn age_in_calendar_years(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    today.year() - birth_date.year()
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
/// Other: the mean of both offsets, -78
pub fn calculate_bmr_mifflin(weight_kg: f64, height_cm: f64, age_years: i32, gender: Gender) -> i32 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    let bmr = match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
        Gender::Other => base - 78.0,
    };
    round_kcal(bmr)
}

/// BMR of a profile as of `today`
pub fn calculate_bmr_on(profile: &UserProfile, today: NaiveDate) -> i32 {
    let age = age_in_calendar_years(profile.birth_date, today);
    calculate_bmr_mifflin(profile.current_weight, profile.height, age, profile.gender)
}

/// BMR of a profile as of the current date
pub fn calculate_bmr(profile: &UserProfile) -> i32 {
    calculate_bmr_on(profile, today())
}

/// TDEE = BMR × activity multiplier, as of `today`
pub fn calculate_tdee_on(profile: &UserProfile, today: NaiveDate) -> i32 {
    let bmr = calculate_bmr_on(profile, today);
    round_kcal(bmr as f64 * profile.activity_level.multiplier())
}

/// TDEE of a profile as of the current date
pub fn calculate_tdee(profile: &UserProfile) -> i32 {
    calculate_tdee_on(profile, today())
}

// ============================================================================
// Targets
// ============================================================================

/// Daily calorie target needed to reach `target_weight` by `target_date`
///
/// The whole deficit (`(current - target) × 7700`) is spread over the days
/// left, at least one. The result never goes below 1200 kcal.
pub fn calculate_target_calories_on(
    current_weight: f64,
    target_weight: f64,
    target_date: NaiveDate,
    tdee: i32,
    today: NaiveDate,
) -> i32 {
    let days_to_goal = (target_date - today).num_days().max(1);
    let total_deficit = (current_weight - target_weight) * KCAL_PER_KG_FAT;
    let daily_deficit = total_deficit / days_to_goal as f64;
    let target = tdee as f64 - daily_deficit;
    round_kcal(target.max(MIN_DAILY_CALORIES))
}

/// Daily calorie target as of the current date
pub fn calculate_target_calories(
    current_weight: f64,
    target_weight: f64,
    target_date: NaiveDate,
    tdee: i32,
) -> i32 {
    calculate_target_calories_on(current_weight, target_weight, target_date, tdee, today())
}

/// Daily progress toward a calorie target, in percent
pub fn calculate_daily_progress(consumed_calories: i32, target_calories: i32) -> i32 {
    if target_calories == 0 {
        return 0;
    }
    round_kcal(consumed_calories as f64 / target_calories as f64 * 100.0)
}

// ============================================================================
// Food and exercise
// ============================================================================

/// Calories of a single food, 0 when unknown
pub fn calculate_food_calories(food: &FoodItem) -> i32 {
    food.calories.map(round_kcal).unwrap_or(0)
}

/// Total calories of a meal: the rounded sum of the item calories
pub fn calculate_total_calories(foods: &[FoodItem]) -> i32 {
    let total: f64 = foods.iter().filter_map(|f| f.calories).sum();
    round_kcal(total)
}

/// Calories burned at a fixed rate per minute
pub fn calculate_exercise_calories(duration_minutes: u32, calories_per_minute: f64) -> i32 {
    round_kcal(duration_minutes as f64 * calories_per_minute)
}

/// Calories burned from MET, body weight and duration
///
/// Formula: MET × weight(kg) × hours
pub fn calculate_calories_by_weight(met: f64, weight_kg: f64, duration_minutes: u32) -> i32 {
    let hours = duration_minutes as f64 / 60.0;
    round_kcal(met * weight_kg * hours)
}
