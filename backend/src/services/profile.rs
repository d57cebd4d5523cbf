//! Profile service - the user profile, the goal and the figures derived
//! from them

use crate::error::ApiError;
use crate::storage::{DiaryError, DiaryStore};
use chrono::{NaiveDate, Utc};
use healthy_diary_shared::health_metrics::{
    age_in_calendar_years, calculate_bmr_on, calculate_target_calories_on, calculate_tdee_on,
};
use healthy_diary_shared::models::{Goal, UserProfile};
use healthy_diary_shared::types::{ProfileMetricsResponse, SetGoalRequest, UpsertProfileRequest};
use healthy_diary_shared::validation::{check_field, validate_date_of_birth_on};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// Profile service for profile and goal operations
pub struct ProfileService;

impl ProfileService {
    pub async fn get_profile(store: &DiaryStore) -> Result<UserProfile, ApiError> {
        store
            .read()
            .await
            .user
            .clone()
            .ok_or_else(|| ApiError::NotFound("User profile not set".to_string()))
    }

    /// Create the profile, or replace it keeping its id
    pub async fn upsert_profile(
        store: &DiaryStore,
        req: UpsertProfileRequest,
        today: NaiveDate,
    ) -> Result<UserProfile, ApiError> {
        req.validate()?;
        check_field("birth_date", validate_date_of_birth_on(req.birth_date, today))?;

        let profile = store
            .update(move |data| {
                let (id, created_at) = data
                    .user
                    .as_ref()
                    .map(|u| (u.id, u.created_at))
                    .unwrap_or_else(|| (Uuid::new_v4(), Utc::now()));

                data.set_user(UserProfile {
                    id,
                    name: req.name.trim().to_string(),
                    gender: req.gender,
                    birth_date: req.birth_date,
                    height: req.height,
                    current_weight: req.current_weight,
                    activity_level: req.activity_level,
                    created_at,
                })
                .clone()
            })
            .await?;

        info!(user_id = %profile.id, "Profile saved");
        Ok(profile)
    }

    /// BMR, TDEE and, once a goal exists, the daily calorie target
    pub async fn get_metrics(store: &DiaryStore, today: NaiveDate) -> Result<ProfileMetricsResponse, ApiError> {
        let data = store.read().await;
        let user = data
            .user
            .as_ref()
            .ok_or_else(|| ApiError::NotFound("User profile not set".to_string()))?;

        let tdee = calculate_tdee_on(user, today);
        let target_calories = data.goal.as_ref().map(|goal| {
            calculate_target_calories_on(user.current_weight, goal.target_weight, goal.target_date, tdee, today)
        });

        Ok(ProfileMetricsResponse {
            age: age_in_calendar_years(user.birth_date, today),
            bmr: calculate_bmr_on(user, today),
            tdee,
            target_calories,
        })
    }

    pub async fn get_goal(store: &DiaryStore) -> Result<Goal, ApiError> {
        store
            .read()
            .await
            .goal
            .clone()
            .ok_or_else(|| ApiError::NotFound("Goal not set".to_string()))
    }

    /// Create or replace the goal; a profile must exist
    pub async fn set_goal(store: &DiaryStore, req: SetGoalRequest) -> Result<Goal, ApiError> {
        req.validate()?;

        let goal = store
            .update(move |data| {
                let id = data.goal.as_ref().map(|g| g.id).unwrap_or_else(Uuid::new_v4);
                let goal = Goal {
                    id,
                    user_id: data.user_id(),
                    initial_weight: req.initial_weight,
                    target_weight: req.target_weight,
                    target_date: req.target_date,
                    daily_calorie_goal: req.daily_calorie_goal,
                    weekly_exercise_goal: req.weekly_exercise_goal,
                    daily_water_goal: req.daily_water_goal,
                    created_at: Utc::now(),
                };
                data.set_goal(goal).cloned()
            })
            .await?
            .map_err(|e| match e {
                DiaryError::ProfileRequired => ApiError::validation("목표를 설정하기 전에 개인 정보를 먼저 입력해주세요"),
            })?;

        info!(goal_id = %goal.id, target_weight = goal.target_weight, "Goal saved");
        Ok(goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use healthy_diary_shared::models::{ActivityLevel, Gender};
    use std::sync::Arc;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
    }

    fn profile_request() -> UpsertProfileRequest {
        UpsertProfileRequest {
            name: " 민수 ".to_string(),
            gender: Gender::Male,
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            height: 175.0,
            current_weight: 70.0,
            activity_level: ActivityLevel::Moderate,
        }
    }

    fn goal_request() -> SetGoalRequest {
        SetGoalRequest {
            initial_weight: None,
            target_weight: 65.0,
            target_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            daily_calorie_goal: 1800,
            weekly_exercise_goal: 3,
            daily_water_goal: 2000,
        }
    }

    async fn store() -> DiaryStore {
        DiaryStore::open(Arc::new(MemoryStorage::new())).await.unwrap()
    }

    #[tokio::test]
    async fn test_upsert_keeps_id() {
        let store = store().await;
        let first = ProfileService::upsert_profile(&store, profile_request(), today()).await.unwrap();
        assert_eq!(first.name, "민수");

        let mut req = profile_request();
        req.current_weight = 68.0;
        let second = ProfileService::upsert_profile(&store, req, today()).await.unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(second.current_weight, 68.0);
    }

    #[tokio::test]
    async fn test_future_birth_date_rejected() {
        let store = store().await;
        let mut req = profile_request();
        req.birth_date = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        let err = ProfileService::upsert_profile(&store, req, today()).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_goal_without_profile_rejected() {
        let store = store().await;
        let err = ProfileService::set_goal(&store, goal_request()).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_metrics() {
        let store = store().await;
        ProfileService::upsert_profile(&store, profile_request(), today()).await.unwrap();

        let metrics = ProfileService::get_metrics(&store, today()).await.unwrap();
        assert_eq!(metrics.age, 34);
        // 10×70 + 6.25×175 − 5×34 + 5
        assert_eq!(metrics.bmr, 1629);
        assert_eq!(metrics.tdee, 2525);
        assert_eq!(metrics.target_calories, None);

        let goal = ProfileService::set_goal(&store, goal_request()).await.unwrap();
        assert_eq!(goal.initial_weight, Some(70.0));

        let metrics = ProfileService::get_metrics(&store, today()).await.unwrap();
        assert!(metrics.target_calories.unwrap() >= 1200);
    }
}
