//! The persisted diary document and its mutations

use chrono::{DateTime, Duration, NaiveDate, Utc};
use healthy_diary_shared::health_metrics::{calculate_daily_progress, DEFAULT_DAILY_CALORIE_GOAL};
use healthy_diary_shared::models::{DietRecord, ExerciseLog, Goal, UserProfile, WaterLog, WeightLog};
use healthy_diary_shared::types::DailySummary;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Daily water target used before a goal is set (ml)
pub const DEFAULT_DAILY_WATER_GOAL_ML: i32 = 2000;

/// Days covered by the "recent" figures fed to the advice generator
const RECENT_WINDOW_DAYS: i64 = 7;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiaryError {
    #[error("A user profile is required before setting a goal")]
    ProfileRequired,
}

/// Everything the diary stores
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiaryData {
    #[serde(default)]
    pub user: Option<UserProfile>,
    #[serde(default)]
    pub goal: Option<Goal>,
    #[serde(default)]
    pub diet_records: Vec<DietRecord>,
    #[serde(default)]
    pub exercise_logs: Vec<ExerciseLog>,
    #[serde(default)]
    pub weight_logs: Vec<WeightLog>,
    #[serde(default)]
    pub water_logs: Vec<WaterLog>,
}

/// Backup document: the diary plus when it was taken
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiaryExport {
    #[serde(flatten)]
    pub data: DiaryData,
    pub export_date: DateTime<Utc>,
}

/// Backup being restored; only the sections present are replaced
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiaryImport {
    #[serde(default)]
    pub user: Option<UserProfile>,
    #[serde(default)]
    pub goal: Option<Goal>,
    #[serde(default)]
    pub diet_records: Option<Vec<DietRecord>>,
    #[serde(default)]
    pub exercise_logs: Option<Vec<ExerciseLog>>,
    #[serde(default)]
    pub weight_logs: Option<Vec<WeightLog>>,
    #[serde(default)]
    pub water_logs: Option<Vec<WaterLog>>,
}

impl DiaryData {
    /// Id entries are filed under, nil until a profile exists
    pub fn user_id(&self) -> Uuid {
        self.user.as_ref().map(|u| u.id).unwrap_or_else(Uuid::nil)
    }

    // ------------------------------------------------------------------
    // Profile and goal
    // ------------------------------------------------------------------

    pub fn set_user(&mut self, profile: UserProfile) -> &UserProfile {
        self.user.insert(profile)
    }

    /// Store the goal, defaulting its initial weight to the current weight
    pub fn set_goal(&mut self, goal: Goal) -> Result<&Goal, DiaryError> {
        let user = self.user.as_ref().ok_or(DiaryError::ProfileRequired)?;
        let goal = Goal {
            user_id: user.id,
            ..goal.with_default_initial_weight(user)
        };
        Ok(self.goal.insert(goal))
    }

    // ------------------------------------------------------------------
    // Diet
    // ------------------------------------------------------------------

    pub fn add_diet_record(&mut self, record: DietRecord) -> &DietRecord {
        self.diet_records.push(record);
        &self.diet_records[self.diet_records.len() - 1]
    }

    /// Remove a record, false when the id is unknown
    pub fn delete_diet_record(&mut self, id: Uuid) -> bool {
        let before = self.diet_records.len();
        self.diet_records.retain(|r| r.id != id);
        self.diet_records.len() != before
    }

    pub fn diet_records_on(&self, date: NaiveDate) -> Vec<&DietRecord> {
        self.diet_records.iter().filter(|r| r.date == date).collect()
    }

    // ------------------------------------------------------------------
    // Exercise
    // ------------------------------------------------------------------

    pub fn add_exercise_log(&mut self, log: ExerciseLog) -> &ExerciseLog {
        self.exercise_logs.push(log);
        &self.exercise_logs[self.exercise_logs.len() - 1]
    }

    pub fn delete_exercise_log(&mut self, id: Uuid) -> bool {
        let before = self.exercise_logs.len();
        self.exercise_logs.retain(|l| l.id != id);
        self.exercise_logs.len() != before
    }

    pub fn exercise_logs_on(&self, date: NaiveDate) -> Vec<&ExerciseLog> {
        self.exercise_logs.iter().filter(|l| l.date == date).collect()
    }

    // ------------------------------------------------------------------
    // Weight
    // ------------------------------------------------------------------

    /// Record a weigh-in; the profile's current weight follows it
    pub fn add_weight_log(&mut self, log: WeightLog) -> &WeightLog {
        if let Some(user) = self.user.as_mut() {
            user.current_weight = log.weight;
        }
        self.weight_logs.push(log);
        &self.weight_logs[self.weight_logs.len() - 1]
    }

    // ------------------------------------------------------------------
    // Water
    // ------------------------------------------------------------------

    pub fn add_water_log(&mut self, log: WaterLog) -> &WaterLog {
        self.water_logs.push(log);
        &self.water_logs[self.water_logs.len() - 1]
    }

    /// Undo the most recent water entry of `date`
    pub fn remove_last_water_log(&mut self, date: NaiveDate) -> Option<WaterLog> {
        let index = self.water_logs.iter().rposition(|l| l.date == date)?;
        Some(self.water_logs.remove(index))
    }

    pub fn water_logs_on(&self, date: NaiveDate) -> Vec<&WaterLog> {
        self.water_logs.iter().filter(|l| l.date == date).collect()
    }

    pub fn water_total(&self, date: NaiveDate) -> u32 {
        self.water_logs
            .iter()
            .filter(|l| l.date == date)
            .map(|l| l.amount_ml)
            .sum()
    }

    // ------------------------------------------------------------------
    // Summaries
    // ------------------------------------------------------------------

    /// Totals of one day against the goal
    pub fn daily_summary(&self, date: NaiveDate) -> DailySummary {
        let consumed_calories: i32 = self.diet_records_on(date).iter().map(|r| r.total_calories).sum();
        let burned_calories: i32 = self.exercise_logs_on(date).iter().map(|l| l.calories_burned).sum();

        let target_calories = self
            .goal
            .as_ref()
            .map(|g| g.daily_calorie_goal)
            .filter(|c| *c > 0)
            .unwrap_or(DEFAULT_DAILY_CALORIE_GOAL);
        let target_water_ml = self
            .goal
            .as_ref()
            .map(|g| g.daily_water_goal)
            .filter(|w| *w > 0)
            .unwrap_or(DEFAULT_DAILY_WATER_GOAL_ML);

        DailySummary {
            date,
            consumed_calories,
            burned_calories,
            remaining_calories: target_calories - consumed_calories + burned_calories,
            water_intake_ml: self.water_total(date),
            target_calories,
            target_water_ml,
            progress_percent: calculate_daily_progress(consumed_calories, target_calories),
        }
    }

    /// Average intake per logged day over the week ending `today`
    pub fn recent_average_calories(&self, today: NaiveDate) -> Option<i32> {
        let start = today - Duration::days(RECENT_WINDOW_DAYS - 1);
        let recent: Vec<&DietRecord> = self
            .diet_records
            .iter()
            .filter(|r| r.date >= start && r.date <= today)
            .collect();

        let mut days: Vec<NaiveDate> = recent.iter().map(|r| r.date).collect();
        days.sort();
        days.dedup();
        if days.is_empty() {
            return None;
        }

        let total: i32 = recent.iter().map(|r| r.total_calories).sum();
        Some((total as f64 / days.len() as f64).round() as i32)
    }

    /// Exercise sessions over the week ending `today`
    pub fn recent_exercise_count(&self, today: NaiveDate) -> u32 {
        let start = today - Duration::days(RECENT_WINDOW_DAYS - 1);
        self.exercise_logs
            .iter()
            .filter(|l| l.date >= start && l.date <= today)
            .count() as u32
    }

    // ------------------------------------------------------------------
    // Backup
    // ------------------------------------------------------------------

    pub fn export(&self, now: DateTime<Utc>) -> DiaryExport {
        DiaryExport {
            data: self.clone(),
            export_date: now,
        }
    }

    /// Replace the sections present in the backup, keep the rest
    pub fn import(&mut self, backup: DiaryImport) {
        if let Some(user) = backup.user {
            self.user = Some(user);
        }
        if let Some(goal) = backup.goal {
            self.goal = Some(goal);
        }
        if let Some(records) = backup.diet_records {
            self.diet_records = records;
        }
        if let Some(logs) = backup.exercise_logs {
            self.exercise_logs = logs;
        }
        if let Some(logs) = backup.weight_logs {
            self.weight_logs = logs;
        }
        if let Some(logs) = backup.water_logs {
            self.water_logs = logs;
        }
    }

    pub fn clear(&mut self) {
        *self = DiaryData::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthy_diary_shared::models::{ActivityLevel, FoodItem, FoodUnit, Gender, MealType};
    use proptest::prelude::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn user() -> UserProfile {
        UserProfile {
            id: Uuid::new_v4(),
            name: "민수".to_string(),
            gender: Gender::Male,
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            height: 175.0,
            current_weight: 80.0,
            activity_level: ActivityLevel::Moderate,
            created_at: Utc::now(),
        }
    }

    fn goal() -> Goal {
        Goal {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            initial_weight: None,
            target_weight: 72.0,
            target_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            daily_calorie_goal: 1800,
            weekly_exercise_goal: 3,
            daily_water_goal: 2500,
            created_at: Utc::now(),
        }
    }

    fn meal(date: NaiveDate, calories: f64) -> DietRecord {
        let food = FoodItem {
            name: "비빔밥".to_string(),
            amount: 1.0,
            unit: FoodUnit::Count,
            calories: Some(calories),
        };
        DietRecord::new(Uuid::nil(), date, MealType::Lunch, vec![food])
    }

    fn water(date: NaiveDate, amount_ml: u32) -> WaterLog {
        WaterLog {
            id: Uuid::new_v4(),
            user_id: Uuid::nil(),
            date,
            amount_ml,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_goal_requires_profile() {
        let mut data = DiaryData::default();
        assert_eq!(data.set_goal(goal()).unwrap_err(), DiaryError::ProfileRequired);
    }

    #[test]
    fn test_goal_initial_weight_defaults_to_current() {
        let mut data = DiaryData::default();
        let profile = data.set_user(user()).clone();

        let stored = data.set_goal(goal()).unwrap();
        assert_eq!(stored.initial_weight, Some(80.0));
        assert_eq!(stored.user_id, profile.id);

        let explicit = Goal {
            initial_weight: Some(85.0),
            ..goal()
        };
        assert_eq!(data.set_goal(explicit).unwrap().initial_weight, Some(85.0));
    }

    #[test]
    fn test_weight_log_updates_profile() {
        let mut data = DiaryData::default();
        data.set_user(user());
        data.add_weight_log(WeightLog {
            id: Uuid::new_v4(),
            user_id: data.user_id(),
            date: day(3),
            weight: 78.4,
            created_at: Utc::now(),
        });
        assert_eq!(data.user.as_ref().unwrap().current_weight, 78.4);
        assert_eq!(data.weight_logs.len(), 1);
    }

    #[test]
    fn test_delete_diet_record() {
        let mut data = DiaryData::default();
        let id = data.add_diet_record(meal(day(3), 500.0)).id;
        assert!(data.delete_diet_record(id));
        assert!(!data.delete_diet_record(id));
        assert!(data.diet_records.is_empty());
    }

    #[test]
    fn test_remove_last_water_log_only_touches_that_date() {
        let mut data = DiaryData::default();
        data.add_water_log(water(day(3), 250));
        data.add_water_log(water(day(4), 500));
        data.add_water_log(water(day(3), 330));

        let removed = data.remove_last_water_log(day(3)).unwrap();
        assert_eq!(removed.amount_ml, 330);
        assert_eq!(data.water_total(day(3)), 250);
        assert_eq!(data.water_total(day(4)), 500);

        assert!(data.remove_last_water_log(day(3)).is_some());
        assert!(data.remove_last_water_log(day(3)).is_none());
    }

    #[test]
    fn test_daily_summary() {
        let mut data = DiaryData::default();
        data.set_user(user());
        data.set_goal(goal()).unwrap();
        data.add_diet_record(meal(day(3), 600.0));
        data.add_diet_record(meal(day(3), 300.0));
        data.add_diet_record(meal(day(4), 1000.0));
        data.add_exercise_log(ExerciseLog::manual(
            Uuid::nil(),
            day(3),
            "조깅",
            30,
            200.0,
            healthy_diary_shared::models::ExerciseIntensity::Medium,
        ));
        data.add_water_log(water(day(3), 500));

        let summary = data.daily_summary(day(3));
        assert_eq!(summary.consumed_calories, 900);
        assert_eq!(summary.burned_calories, 200);
        assert_eq!(summary.remaining_calories, 1800 - 900 + 200);
        assert_eq!(summary.water_intake_ml, 500);
        assert_eq!(summary.target_water_ml, 2500);
        assert_eq!(summary.progress_percent, 50);
    }

    #[test]
    fn test_daily_summary_without_goal_uses_defaults() {
        let summary = DiaryData::default().daily_summary(day(3));
        assert_eq!(summary.target_calories, 2000);
        assert_eq!(summary.target_water_ml, 2000);
        assert_eq!(summary.remaining_calories, 2000);
        assert_eq!(summary.progress_percent, 0);
    }

    #[test]
    fn test_recent_figures() {
        let mut data = DiaryData::default();
        assert_eq!(data.recent_average_calories(day(10)), None);

        data.add_diet_record(meal(day(10), 1500.0));
        data.add_diet_record(meal(day(10), 500.0));
        data.add_diet_record(meal(day(8), 1800.0));
        // outside the window
        data.add_diet_record(meal(day(1), 5000.0));

        assert_eq!(data.recent_average_calories(day(10)), Some(1900));
        assert_eq!(data.recent_exercise_count(day(10)), 0);
    }

    #[test]
    fn test_import_replaces_present_sections_only() {
        let mut data = DiaryData::default();
        data.set_user(user());
        data.add_water_log(water(day(3), 250));

        data.import(DiaryImport {
            diet_records: Some(vec![meal(day(5), 700.0)]),
            ..Default::default()
        });

        assert!(data.user.is_some());
        assert_eq!(data.water_logs.len(), 1);
        assert_eq!(data.diet_records.len(), 1);
    }

    #[test]
    fn test_export_round_trips_through_import() {
        let mut data = DiaryData::default();
        data.set_user(user());
        data.set_goal(goal()).unwrap();
        data.add_diet_record(meal(day(5), 700.0));

        let json = serde_json::to_string_pretty(&data.export(Utc::now())).unwrap();
        assert!(json.contains("export_date"));

        let backup: DiaryImport = serde_json::from_str(&json).unwrap();
        let mut restored = DiaryData::default();
        restored.import(backup);
        assert_eq!(restored, data);
    }

    #[test]
    fn test_clear() {
        let mut data = DiaryData::default();
        data.set_user(user());
        data.add_water_log(water(day(3), 250));
        data.clear();
        assert_eq!(data, DiaryData::default());
    }

    proptest! {
        #[test]
        fn undo_removes_only_the_days_latest_entry(
            entries in proptest::collection::vec((1u32..=3, 1u32..=5000), 1..20),
        ) {
            let mut data = DiaryData::default();
            for (d, amount) in &entries {
                data.add_water_log(water(day(*d), *amount));
            }
            let before_other: u32 = data.water_total(day(2)) + data.water_total(day(3));
            let last_on_first = entries.iter().rev().find(|(d, _)| *d == 1).map(|(_, a)| *a);
            let total_first = data.water_total(day(1));

            let removed = data.remove_last_water_log(day(1));

            prop_assert_eq!(removed.map(|l| l.amount_ml), last_on_first);
            prop_assert_eq!(data.water_total(day(1)), total_first - last_on_first.unwrap_or(0));
            prop_assert_eq!(data.water_total(day(2)) + data.water_total(day(3)), before_other);
        }
    }
}
