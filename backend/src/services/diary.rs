//! Diary service - meals, exercise, water and weight entries
//!
//! Every mutation is persisted through the [`DiaryStore`] before it is
//! acknowledged.

use crate::error::ApiError;
use crate::storage::DiaryStore;
use chrono::{NaiveDate, Utc};
use healthy_diary_shared::catalog::Catalog;
use healthy_diary_shared::health_metrics::DEFAULT_WEIGHT_KG;
use healthy_diary_shared::models::{DietRecord, ExerciseIntensity, ExerciseLog, WaterLog, WeightLog};
use healthy_diary_shared::types::{
    AddDietRecordRequest, AddExerciseLogRequest, AddWaterLogRequest, AddWeightLogRequest, DailySummary,
    WaterRemovalResponse,
};
use healthy_diary_shared::validation::{check_field, validate_calories, ValidationError};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// Count a stored diary entry
pub(crate) fn record_entry(kind: &'static str) {
    metrics::counter!("diary_entries_total", "kind" => kind).increment(1);
}

pub struct DiaryService;

impl DiaryService {
    // ------------------------------------------------------------------
    // Diet
    // ------------------------------------------------------------------

    pub async fn list_diet(store: &DiaryStore, date: Option<NaiveDate>) -> Vec<DietRecord> {
        let data = store.read().await;
        data.diet_records
            .iter()
            .filter(|r| date.map_or(true, |d| r.date == d))
            .cloned()
            .collect()
    }

    pub async fn add_diet(store: &DiaryStore, req: AddDietRecordRequest) -> Result<DietRecord, ApiError> {
        req.validate()?;
        for food in &req.foods {
            if food.name.trim().is_empty() {
                return Err(ValidationError::new("foods", "음식 이름을 입력해주세요").into());
            }
            if let Some(calories) = food.calories {
                check_field("calories", validate_calories(calories))?;
            }
        }

        let record = store
            .update(move |data| {
                let record = DietRecord::new(data.user_id(), req.date, req.meal_type, req.foods);
                data.add_diet_record(record).clone()
            })
            .await?;

        record_entry("diet");
        info!(
            record_id = %record.id,
            date = %record.date,
            meal = record.meal_type.label(),
            calories = record.total_calories,
            "Diet record added"
        );
        Ok(record)
    }

    pub async fn delete_diet(store: &DiaryStore, id: Uuid) -> Result<(), ApiError> {
        if !store.update(|data| data.delete_diet_record(id)).await? {
            return Err(ApiError::NotFound("Diet record not found".to_string()));
        }
        info!(record_id = %id, "Diet record deleted");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Exercise
    // ------------------------------------------------------------------

    pub async fn list_exercise(store: &DiaryStore, date: Option<NaiveDate>) -> Vec<ExerciseLog> {
        let data = store.read().await;
        data.exercise_logs
            .iter()
            .filter(|l| date.map_or(true, |d| l.date == d))
            .cloned()
            .collect()
    }

    /// Log a session
    ///
    /// A catalog id, or a name without calories, is priced with the entry's
    /// MET and the user's weight. A name with calories is stored as given.
    pub async fn add_exercise(
        store: &DiaryStore,
        catalog: &Catalog,
        req: AddExerciseLogRequest,
    ) -> Result<ExerciseLog, ApiError> {
        req.validate()?;

        let entry = match (&req.exercise_id, &req.exercise_name, req.calories_burned) {
            (Some(id), _, _) => Some(
                catalog
                    .exercise_by_id(id)
                    .ok_or_else(|| ApiError::NotFound(format!("Exercise {} not found", id)))?,
            ),
            (None, Some(_), Some(_)) => None,
            (None, Some(name), None) => Some(catalog.find_exercise(name).ok_or_else(|| {
                ApiError::validation(format!("'{}'은(는) 운동 목록에 없습니다. 소모 칼로리를 함께 입력해주세요", name))
            })?),
            (None, None, _) => return Err(ApiError::validation("exercise_id 또는 exercise_name이 필요합니다")),
        };

        let log = store
            .update(move |data| {
                let user_id = data.user_id();
                let log = match entry {
                    Some(exercise) => {
                        let weight = data.user.as_ref().map(|u| u.current_weight).unwrap_or(DEFAULT_WEIGHT_KG);
                        ExerciseLog::from_catalog(
                            user_id,
                            req.date,
                            exercise,
                            req.duration_minutes,
                            weight,
                            req.intensity,
                        )
                    }
                    None => ExerciseLog::manual(
                        user_id,
                        req.date,
                        req.exercise_name.unwrap_or_default().trim(),
                        req.duration_minutes,
                        req.calories_burned.unwrap_or_default(),
                        req.intensity.unwrap_or(ExerciseIntensity::Medium),
                    ),
                };
                data.add_exercise_log(log).clone()
            })
            .await?;

        record_entry("exercise");
        info!(
            log_id = %log.id,
            exercise = %log.exercise_name,
            minutes = log.duration_minutes,
            calories = log.calories_burned,
            "Exercise logged"
        );
        Ok(log)
    }

    pub async fn delete_exercise(store: &DiaryStore, id: Uuid) -> Result<(), ApiError> {
        if !store.update(|data| data.delete_exercise_log(id)).await? {
            return Err(ApiError::NotFound("Exercise log not found".to_string()));
        }
        info!(log_id = %id, "Exercise log deleted");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Water
    // ------------------------------------------------------------------

    pub async fn list_water(store: &DiaryStore, date: NaiveDate) -> Vec<WaterLog> {
        store.read().await.water_logs_on(date).into_iter().cloned().collect()
    }

    pub async fn add_water(store: &DiaryStore, req: AddWaterLogRequest) -> Result<WaterLog, ApiError> {
        req.validate()?;

        let log = store
            .update(move |data| {
                let log = WaterLog {
                    id: Uuid::new_v4(),
                    user_id: data.user_id(),
                    date: req.date,
                    amount_ml: req.amount_ml,
                    created_at: Utc::now(),
                };
                data.add_water_log(log).clone()
            })
            .await?;

        record_entry("water");
        info!(date = %log.date, amount_ml = log.amount_ml, "Water logged");
        Ok(log)
    }

    /// Undo the last water entry of a day; nothing to undo is not an error
    pub async fn remove_last_water(store: &DiaryStore, date: NaiveDate) -> Result<WaterRemovalResponse, ApiError> {
        let (removed, total_ml) = store
            .update(|data| {
                let removed = data.remove_last_water_log(date).is_some();
                (removed, data.water_total(date))
            })
            .await?;

        if removed {
            info!(date = %date, total_ml, "Water log removed");
        }
        Ok(WaterRemovalResponse {
            date,
            removed,
            total_ml,
        })
    }

    // ------------------------------------------------------------------
    // Weight
    // ------------------------------------------------------------------

    pub async fn list_weight(store: &DiaryStore) -> Vec<WeightLog> {
        let mut logs = store.read().await.weight_logs.clone();
        logs.sort_by_key(|l| (l.date, l.created_at));
        logs
    }

    pub async fn add_weight(store: &DiaryStore, req: AddWeightLogRequest) -> Result<WeightLog, ApiError> {
        req.validate()?;

        let log = store
            .update(move |data| {
                let log = WeightLog {
                    id: Uuid::new_v4(),
                    user_id: data.user_id(),
                    date: req.date,
                    weight: req.weight,
                    created_at: Utc::now(),
                };
                data.add_weight_log(log).clone()
            })
            .await?;

        record_entry("weight");
        info!(date = %log.date, weight = log.weight, "Weight logged");
        Ok(log)
    }

    // ------------------------------------------------------------------
    // Dashboard
    // ------------------------------------------------------------------

    pub async fn daily_summary(store: &DiaryStore, date: NaiveDate) -> DailySummary {
        store.read().await.daily_summary(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use healthy_diary_shared::models::{FoodItem, FoodUnit, MealType};
    use std::sync::Arc;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
    }

    async fn store() -> DiaryStore {
        DiaryStore::open(Arc::new(MemoryStorage::new())).await.unwrap()
    }

    fn exercise_request() -> AddExerciseLogRequest {
        AddExerciseLogRequest {
            date: day(),
            exercise_id: None,
            exercise_name: None,
            duration_minutes: 30,
            calories_burned: None,
            intensity: None,
        }
    }

    #[tokio::test]
    async fn test_add_diet_sums_items() {
        let store = store().await;
        let req = AddDietRecordRequest {
            date: day(),
            meal_type: MealType::Breakfast,
            foods: vec![
                FoodItem {
                    name: "토스트".to_string(),
                    amount: 1.0,
                    unit: FoodUnit::Count,
                    calories: Some(250.4),
                },
                FoodItem {
                    name: "우유".to_string(),
                    amount: 200.0,
                    unit: FoodUnit::Milliliter,
                    calories: Some(130.3),
                },
            ],
        };

        let record = DiaryService::add_diet(&store, req).await.unwrap();
        assert_eq!(record.total_calories, 381);
        assert_eq!(DiaryService::list_diet(&store, Some(day())).await.len(), 1);
        assert!(DiaryService::list_diet(&store, day().succ_opt()).await.is_empty());
    }

    #[tokio::test]
    async fn test_add_diet_rejects_blank_food_name() {
        let store = store().await;
        let req = AddDietRecordRequest {
            date: day(),
            meal_type: MealType::Snack,
            foods: vec![FoodItem {
                name: "  ".to_string(),
                amount: 1.0,
                unit: FoodUnit::Count,
                calories: Some(100.0),
            }],
        };
        assert!(DiaryService::add_diet(&store, req).await.is_err());
    }

    #[tokio::test]
    async fn test_exercise_from_catalog_id() {
        let store = store().await;
        let req = AddExerciseLogRequest {
            exercise_id: Some("3".to_string()),
            ..exercise_request()
        };

        // 조깅, MET 7.0, default 70 kg: 7 × 70 × 0.5 h
        let log = DiaryService::add_exercise(&store, Catalog::builtin(), req).await.unwrap();
        assert_eq!(log.exercise_name, "조깅");
        assert_eq!(log.calories_burned, 245);
        assert_eq!(log.intensity, ExerciseIntensity::Medium);
    }

    #[tokio::test]
    async fn test_exercise_manual_calories() {
        let store = store().await;
        let req = AddExerciseLogRequest {
            exercise_name: Some("클라이밍".to_string()),
            calories_burned: Some(320.0),
            intensity: Some(ExerciseIntensity::High),
            ..exercise_request()
        };
        let log = DiaryService::add_exercise(&store, Catalog::builtin(), req).await.unwrap();
        assert_eq!(log.calories_burned, 320);
        assert_eq!(log.intensity, ExerciseIntensity::High);
    }

    #[tokio::test]
    async fn test_exercise_unknown_name_needs_calories() {
        let store = store().await;
        let req = AddExerciseLogRequest {
            exercise_name: Some("클라이밍".to_string()),
            ..exercise_request()
        };
        let err = DiaryService::add_exercise(&store, Catalog::builtin(), req).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_exercise_unknown_id() {
        let store = store().await;
        let req = AddExerciseLogRequest {
            exercise_id: Some("999".to_string()),
            ..exercise_request()
        };
        let err = DiaryService::add_exercise(&store, Catalog::builtin(), req).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_unknown_record_is_not_found() {
        let store = store().await;
        let err = DiaryService::delete_diet(&store, Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_water_add_and_undo() {
        let store = store().await;
        for amount_ml in [250, 330] {
            DiaryService::add_water(&store, AddWaterLogRequest { date: day(), amount_ml })
                .await
                .unwrap();
        }

        let removal = DiaryService::remove_last_water(&store, day()).await.unwrap();
        assert!(removal.removed);
        assert_eq!(removal.total_ml, 250);

        DiaryService::remove_last_water(&store, day()).await.unwrap();
        let removal = DiaryService::remove_last_water(&store, day()).await.unwrap();
        assert!(!removal.removed);
        assert_eq!(removal.total_ml, 0);
    }
}
