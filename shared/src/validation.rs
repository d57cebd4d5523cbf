//! Input validation functions
//!
//! Range checks on single numbers live on the request DTOs as
//! `validator` attributes. The checks here cover what those cannot
//! express: per-food calories and a birth date relative to today.

use chrono::NaiveDate;

/// Validate calorie value
pub fn validate_calories(calories: f64) -> Result<(), String> {
    if calories.is_nan() || calories.is_infinite() {
        return Err("Calories must be a valid number".to_string());
    }
    if calories < 0.0 {
        return Err("Calories cannot be negative".to_string());
    }
    if calories > 50000.0 {
        return Err("Calorie value unreasonably high".to_string());
    }
    Ok(())
}

/// Validate date of birth as of `today`
/// Must not be in the future, and age must be between 1 and 150 years
pub fn validate_date_of_birth_on(dob: NaiveDate, today: NaiveDate) -> Result<(), String> {
    if dob > today {
        return Err("Date of birth cannot be in the future".to_string());
    }

    match today.years_since(dob) {
        Some(age) if age < 1 => Err("Age must be at least 1 year".to_string()),
        Some(age) if age > 150 => Err("Age cannot exceed 150 years".to_string()),
        None => Err("Invalid date of birth".to_string()),
        _ => Ok(()),
    }
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "name" => "이름",
        "current_weight" | "weight" | "target_weight" | "initial_weight" => "체중",
        "height" => "키",
        "birth_date" => "생년월일",
        "calories" | "daily_calorie_goal" => "칼로리",
        "duration_minutes" => "운동 시간",
        "amount_ml" | "daily_water_goal" => "수분량",
        "foods" => "음식",
        _ => field_name,
    }
}

/// Validation error with field context
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

/// Run a check and attach the field name to its error
pub fn check_field(field: &str, result: Result<(), String>) -> Result<(), ValidationError> {
    result.map_err(|message| ValidationError::new(field, &message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_validate_calories() {
        assert!(validate_calories(0.0).is_ok());
        assert!(validate_calories(2000.0).is_ok());
        assert!(validate_calories(-1.0).is_err());
        assert!(validate_calories(f64::INFINITY).is_err());
        assert!(validate_calories(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_date_of_birth() {
        let today = day(2024, 6, 1);
        assert!(validate_date_of_birth_on(day(1990, 1, 1), today).is_ok());
        assert!(validate_date_of_birth_on(day(2024, 6, 2), today).is_err());
        assert!(validate_date_of_birth_on(day(2024, 1, 1), today).is_err());
        assert!(validate_date_of_birth_on(day(1800, 1, 1), today).is_err());
    }

    #[test]
    fn test_validation_error() {
        let err = check_field("calories", validate_calories(-20.0)).unwrap_err();
        assert_eq!(err.display_label, "칼로리");
        assert_eq!(err.user_message(), "칼로리: Calories cannot be negative");

        let err = check_field("birth_date", validate_date_of_birth_on(day(2030, 1, 1), day(2024, 6, 1))).unwrap_err();
        assert_eq!(err.display_label, "생년월일");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_calorie_range(calories in 0.0f64..=50000.0) {
            prop_assert!(validate_calories(calories).is_ok());
        }

        #[test]
        fn prop_negative_calories_rejected(calories in -50000.0f64..-0.001) {
            prop_assert!(validate_calories(calories).is_err());
        }
    }
}
