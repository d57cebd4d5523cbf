//! Chat response generation
//!
//! Turns a classified message plus a snapshot of the user's diary into a reply
//! and, for meal and exercise logging, a structured action. The generator
//! never writes anything; applying an action is up to the caller.

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::health_metrics::{
    calculate_bmr_on, calculate_calories_by_weight, calculate_daily_progress, calculate_tdee_on,
    DEFAULT_WEIGHT_KG,
};
use crate::intent::{analyze_message, Entities, Intent, IntentAnalysis};
use crate::models::{
    DietRecord, ExerciseIntensity, ExerciseLog, FoodItem, FoodUnit, Goal, MealType, UserProfile,
};
use crate::season::Season;

/// Shown instead of any answer until a profile and goal exist
pub const SETUP_REQUIRED_MESSAGE: &str =
    "아직 개인 정보가 설정되지 않았습니다. 먼저 \"목표\" 탭에서 개인 정보와 목표를 설정해주세요!";

/// Opening message of every chat session
pub const WELCOME_MESSAGE: &str =
    "안녕하세요! 건강 관리 AI 어시스턴트입니다. 식단, 운동, 목표 등에 대해 무엇이든 물어보세요! 🤖";

/// MET assumed for an exercise missing from the catalog
pub const DEFAULT_EXERCISE_MET: f64 = 5.0;

/// Label of an exercise logged without a name
pub const GENERIC_EXERCISE_NAME: &str = "운동";

/// Diary data the generator reads
#[derive(Debug, Clone, Copy)]
pub struct UserContext<'a> {
    pub user: Option<&'a UserProfile>,
    pub goal: Option<&'a Goal>,
    pub diet_records: &'a [DietRecord],
    pub exercise_logs: &'a [ExerciseLog],
}

/// Figures derived from the diary for one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAnalysisSnapshot {
    /// Both a profile and a goal exist
    pub has_user_data: bool,
    pub today: NaiveDate,
    /// Hour of the local time the snapshot was taken
    pub hour: u32,
    pub today_calories: i32,
    pub today_exercise_calories: i32,
    /// Intake of the last seven days divided by seven
    pub weekly_average: i32,
    pub bmr: i32,
    pub tdee: i32,
    pub target_calories: i32,
    /// `target − consumed + burned`
    pub remaining_calories: i32,
    pub current_weight: f64,
    pub target_weight: f64,
    /// Days left until the goal's target date, negative once passed
    pub days_to_target: i64,
}

impl UserAnalysisSnapshot {
    pub fn from_context(context: &UserContext<'_>, now: NaiveDateTime) -> Self {
        let today = now.date();
        let hour = now.hour();

        let (user, goal) = match (context.user, context.goal) {
            (Some(user), Some(goal)) => (user, goal),
            _ => {
                return Self {
                    has_user_data: false,
                    today,
                    hour,
                    today_calories: 0,
                    today_exercise_calories: 0,
                    weekly_average: 0,
                    bmr: 0,
                    tdee: 0,
                    target_calories: 0,
                    remaining_calories: 0,
                    current_weight: context.user.map(|u| u.current_weight).unwrap_or(DEFAULT_WEIGHT_KG),
                    target_weight: 0.0,
                    days_to_target: 0,
                }
            }
        };

        let today_calories: i32 = context
            .diet_records
            .iter()
            .filter(|r| r.date == today)
            .map(|r| r.total_calories)
            .sum();
        let today_exercise_calories: i32 = context
            .exercise_logs
            .iter()
            .filter(|l| l.date == today)
            .map(|l| l.calories_burned)
            .sum();

        let week_start = today - Duration::days(7);
        let weekly_total: i32 = context
            .diet_records
            .iter()
            .filter(|r| r.date >= week_start && r.date <= today)
            .map(|r| r.total_calories)
            .sum();

        Self {
            has_user_data: true,
            today,
            hour,
            today_calories,
            today_exercise_calories,
            weekly_average: (weekly_total as f64 / 7.0).round() as i32,
            bmr: calculate_bmr_on(user, today),
            tdee: calculate_tdee_on(user, today),
            target_calories: goal.daily_calorie_goal,
            remaining_calories: goal.daily_calorie_goal - today_calories + today_exercise_calories,
            current_weight: user.current_weight,
            target_weight: goal.target_weight,
            days_to_target: (goal.target_date - today).num_days(),
        }
    }

    pub fn season(&self) -> Season {
        Season::of_date(self.today)
    }
}

// ============================================================================
// Actions
// ============================================================================

/// A meal the user asked to log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealAction {
    pub food_name: String,
    pub meal_type: MealType,
    pub calories: i32,
}

impl MealAction {
    /// One-item diet record for this meal
    pub fn into_record(self, user_id: Uuid, date: NaiveDate) -> DietRecord {
        let food = FoodItem {
            name: self.food_name,
            amount: 1.0,
            unit: FoodUnit::Count,
            calories: Some(self.calories as f64),
        };
        DietRecord::new(user_id, date, self.meal_type, vec![food])
    }
}

/// An exercise session the user asked to log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseAction {
    pub exercise_name: String,
    pub duration_minutes: u32,
    pub calories_burned: i32,
    pub intensity: ExerciseIntensity,
}

impl ExerciseAction {
    pub fn into_log(self, user_id: Uuid, date: NaiveDate) -> ExerciseLog {
        ExerciseLog::manual(
            user_id,
            date,
            self.exercise_name,
            self.duration_minutes,
            self.calories_burned as f64,
            self.intensity,
        )
    }
}

/// Structured follow-up attached to a reply, `{"type": ..., "data": {...}}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum ChatAction {
    AddMeal(MealAction),
    AddExercise(ExerciseAction),
}

impl ChatAction {
    pub fn kind(&self) -> &'static str {
        match self {
            ChatAction::AddMeal(_) => "add_meal",
            ChatAction::AddExercise(_) => "add_exercise",
        }
    }
}

/// Reply text plus an optional action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ChatAction>,
}

impl ChatResponse {
    fn text(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            action: None,
        }
    }
}

// ============================================================================
// Generator
// ============================================================================

/// Topic of a free-form question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Topic {
    Diet,
    Exercise,
    Calories,
    Goal,
    Nutrition,
    Water,
    General,
}

fn topic_of(message: &str) -> Topic {
    let lower = message.to_lowercase();
    let has = |words: &[&str]| words.iter().any(|w| lower.contains(w));

    if has(&["식단", "음식", "먹", "점심", "저녁", "아침"]) {
        Topic::Diet
    } else if has(&["운동", "달리", "헬스", "트레이닝"]) {
        Topic::Exercise
    } else if has(&["칼로리", "섭취"]) {
        Topic::Calories
    } else if has(&["목표", "체중", "감량", "달성"]) {
        Topic::Goal
    } else if has(&["단백질", "탄수화물", "영양소"]) {
        Topic::Nutrition
    } else if has(&["물", "수분"]) {
        Topic::Water
    } else {
        Topic::General
    }
}

/// Chat response generator over a catalog
#[derive(Debug, Clone, Copy)]
pub struct ChatEngine<'a> {
    catalog: &'a Catalog,
}

impl<'a> ChatEngine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Classify `message` and answer it against `context` as of `now`
    pub fn reply(
        &self,
        message: &str,
        context: &UserContext<'_>,
        now: NaiveDateTime,
    ) -> (IntentAnalysis, ChatResponse) {
        let analysis = analyze_message(message);
        let snapshot = UserAnalysisSnapshot::from_context(context, now);
        let response = self.respond(message, &analysis, &snapshot, context);
        (analysis, response)
    }

    /// Answer an already classified message
    pub fn respond(
        &self,
        message: &str,
        analysis: &IntentAnalysis,
        snapshot: &UserAnalysisSnapshot,
        context: &UserContext<'_>,
    ) -> ChatResponse {
        let intent = analysis.intent;
        if !snapshot.has_user_data && !matches!(intent, Intent::Greeting | Intent::Help) {
            return ChatResponse::text(SETUP_REQUIRED_MESSAGE);
        }

        let entities = &analysis.entities;
        match intent {
            Intent::Greeting => ChatResponse::text(greeting(context.user)),
            Intent::Help => ChatResponse::text(help()),
            Intent::AddMeal => self.add_meal(entities, snapshot),
            Intent::AddExercise => self.add_exercise(entities, snapshot),
            Intent::RecommendMeal => ChatResponse::text(self.recommend_meal(entities, snapshot)),
            Intent::CalorieQuery => ChatResponse::text(calorie_advice(snapshot)),
            Intent::RecommendExercise => ChatResponse::text(self.exercise_advice(snapshot)),
            Intent::CheckProgress => ChatResponse::text(goal_advice(snapshot)),
            Intent::TodaySummary => ChatResponse::text(today_summary(snapshot)),
            Intent::WaterReminder => ChatResponse::text(water_advice()),
            Intent::Motivation => ChatResponse::text(motivation(snapshot)),
            Intent::GeneralQuestion => ChatResponse::text(self.general_answer(message, snapshot)),
        }
    }

    fn add_meal(&self, entities: &Entities, snapshot: &UserAnalysisSnapshot) -> ChatResponse {
        let meal_type = entities.meal_type.unwrap_or_else(|| MealType::from_hour(snapshot.hour));

        let resolved = match (&entities.food_name, entities.calories) {
            (Some(name), Some(calories)) => Some((name.clone(), calories as i32)),
            (None, Some(calories)) => Some(("음식".to_string(), calories as i32)),
            (Some(name), None) => self
                .catalog
                .find_food(name)
                .map(|food| (food.name.clone(), food.calories)),
            (None, None) => None,
        };

        let Some((food_name, calories)) = resolved else {
            let message = match &entities.food_name {
                Some(name) => format!(
                    "'{}'의 칼로리 정보를 찾지 못했어요. 칼로리를 함께 알려주세요.\n예: \"{} 350kcal 먹었어\"",
                    name, name
                ),
                None => "어떤 음식을 드셨는지 알려주세요.\n예: \"점심에 비빔밥 먹었어\"".to_string(),
            };
            return ChatResponse::text(message);
        };

        let remaining = snapshot.remaining_calories - calories;
        let message = format!(
            "🍽️ {} 식사로 {} ({}kcal)을 기록할게요.\n오늘 남은 칼로리는 약 {}kcal입니다.",
            meal_type.label(),
            food_name,
            calories,
            remaining
        );
        ChatResponse {
            message,
            action: Some(ChatAction::AddMeal(MealAction {
                food_name,
                meal_type,
                calories,
            })),
        }
    }

    fn add_exercise(&self, entities: &Entities, snapshot: &UserAnalysisSnapshot) -> ChatResponse {
        let exercise = entities
            .exercise_name
            .as_deref()
            .and_then(|name| self.catalog.find_exercise(name));

        let action = match (exercise, entities.duration_minutes) {
            (Some(exercise), Some(duration)) => ExerciseAction {
                exercise_name: exercise.name.clone(),
                duration_minutes: duration,
                calories_burned: calculate_calories_by_weight(exercise.met, snapshot.current_weight, duration),
                intensity: exercise.difficulty.into(),
            },
            (None, Some(duration)) => ExerciseAction {
                exercise_name: entities
                    .exercise_name
                    .clone()
                    .unwrap_or_else(|| GENERIC_EXERCISE_NAME.to_string()),
                duration_minutes: duration,
                calories_burned: calculate_calories_by_weight(
                    DEFAULT_EXERCISE_MET,
                    snapshot.current_weight,
                    duration,
                ),
                intensity: ExerciseIntensity::Medium,
            },
            (Some(exercise), None) => {
                return ChatResponse::text(format!(
                    "{}을(를) 몇 분 하셨나요?\n예: \"{} 30분 했어\"",
                    exercise.name, exercise.name
                ));
            }
            (None, None) => {
                return ChatResponse::text("어떤 운동을 얼마나 하셨는지 알려주세요.\n예: \"조깅 30분 했어\"");
            }
        };

        let message = format!(
            "💪 {} {}분, 약 {}kcal 소모를 기록할게요.\n오늘 남은 칼로리는 약 {}kcal입니다.",
            action.exercise_name,
            action.duration_minutes,
            action.calories_burned,
            snapshot.remaining_calories + action.calories_burned
        );
        ChatResponse {
            message,
            action: Some(ChatAction::AddExercise(action)),
        }
    }

    /// Up to three in-season menus within the calorie budget, closest to a
    /// regular meal size first
    fn recommend_meal(&self, entities: &Entities, snapshot: &UserAnalysisSnapshot) -> String {
        let meal_type = entities.meal_type.unwrap_or_else(|| MealType::from_hour(snapshot.hour));
        let season = snapshot.season();
        let budget = entities
            .max_calories
            .map(|c| c as i32)
            .unwrap_or(snapshot.remaining_calories);

        if budget <= 0 {
            return over_budget_advice(snapshot);
        }

        let meal_size = ((snapshot.target_calories as f64 / 3.0).round() as i32).min(budget);
        let mut menus: Vec<_> = self
            .catalog
            .foods()
            .iter()
            .filter(|f| f.in_season(season) && f.calories <= budget)
            .collect();
        menus.sort_by_key(|f| ((f.calories - meal_size).abs(), f.calories));
        menus.truncate(3);

        if menus.is_empty() {
            return light_snack_advice(budget);
        }

        let mut text = format!(
            "🥗 {} 추천 메뉴 ({} 제철, {}kcal 이하):\n",
            meal_type.label(),
            season.korean_name(),
            budget
        );
        let lines: Vec<String> = menus
            .iter()
            .map(|f| format!("• {} ({}kcal, {}분)", f.name, f.calories, f.cooking_time))
            .collect();
        text.push_str(&lines.join("\n"));
        text
    }

    /// Exercises from the catalog sized to burn off any excess
    fn exercise_advice(&self, snapshot: &UserAnalysisSnapshot) -> String {
        let mut advice = format!("오늘 {}kcal를 소모하셨습니다.\n\n", snapshot.today_exercise_calories);

        if snapshot.remaining_calories >= 0 {
            advice.push_str("✅ 현재 칼로리 균형이 좋습니다!\n\n");
            advice.push_str("💡 건강 유지 운동 추천:\n");
            advice.push_str("• 스트레칭 15분 (유연성 향상)\n");
            advice.push_str("• 플랭크 + 스쿼트 (근력 강화)\n");
            advice.push_str("• 요가 20분 (스트레스 해소)");
            return advice;
        }

        let need = snapshot.remaining_calories.abs();
        advice.push_str(&format!("목표 칼로리를 {}kcal 초과했습니다.\n\n", need));
        advice.push_str(&format!("💪 추천 운동 ({}kcal 소모):\n", need));

        let names: &[&str] = if need > 300 {
            &["조깅", "자전거 (빠른 속도)", "수영 (천천히)"]
        } else {
            &["걷기 (빠른 속도)", "계단 오르기", "줄넘기"]
        };
        let lines: Vec<String> = names
            .iter()
            .filter_map(|name| self.catalog.find_exercise(name))
            .map(|exercise| {
                let per_minute = exercise.met * snapshot.current_weight / 60.0;
                let minutes = (need as f64 / per_minute).ceil() as u32;
                let burned = calculate_calories_by_weight(exercise.met, snapshot.current_weight, minutes);
                format!("• {} {}분 (약 {}kcal)", exercise.name, minutes, burned)
            })
            .collect();
        advice.push_str(&lines.join("\n"));
        advice
    }

    fn general_answer(&self, message: &str, snapshot: &UserAnalysisSnapshot) -> String {
        match topic_of(message) {
            Topic::Diet => diet_advice(snapshot),
            Topic::Exercise => self.exercise_advice(snapshot),
            Topic::Calories => calorie_advice(snapshot),
            Topic::Goal => goal_advice(snapshot),
            Topic::Nutrition => nutrition_advice(),
            Topic::Water => water_advice(),
            Topic::General => general_advice(snapshot),
        }
    }
}

// ============================================================================
// Text banks
// ============================================================================

fn greeting(user: Option<&UserProfile>) -> String {
    match user {
        Some(user) => format!(
            "안녕하세요, {}님! 건강 관리 AI 어시스턴트입니다. 식단, 운동, 목표 등에 대해 무엇이든 물어보세요! 🤖",
            user.name
        ),
        None => WELCOME_MESSAGE.to_string(),
    }
}

fn help() -> String {
    [
        "💡 이렇게 말해보세요:",
        "• \"점심에 비빔밥 먹었어\" - 식사 기록",
        "• \"조깅 30분 했어\" - 운동 기록",
        "• \"저녁 메뉴 추천해줘\" - 식단 추천",
        "• \"어떤 운동 하면 좋을까\" - 운동 추천",
        "• \"칼로리 분석해줘\" - 칼로리 분석",
        "• \"목표까지 얼마나 남았어\" - 목표 진행률",
        "• \"오늘 현황 알려줘\" - 오늘 요약",
    ]
    .join("\n")
}

fn light_snack_advice(remaining: i32) -> String {
    let mut advice = format!("앞으로 약 {}kcal만 섭취하시면 됩니다.\n\n", remaining);
    advice.push_str("💡 가벼운 간식 추천:\n");
    advice.push_str("• 바나나 1개 (약 100kcal)\n");
    advice.push_str("• 아몬드 한 줌 (약 150kcal)\n");
    advice.push_str("• 저지방 우유 1컵 (약 80kcal)");
    advice
}

fn over_budget_advice(snapshot: &UserAnalysisSnapshot) -> String {
    let mut advice = format!(
        "오늘 현재까지 {}kcal를 섭취하셨네요. 이미 목표 칼로리를 초과하셨습니다.\n\n",
        snapshot.today_calories
    );
    advice.push_str("💪 추천 대응:\n");
    advice.push_str("• 가벼운 운동으로 칼로리 소모 (산책 30분)\n");
    advice.push_str("• 내일은 조금 더 조절해보세요\n");
    advice.push_str("• 물을 충분히 마시세요");
    advice
}

fn diet_advice(snapshot: &UserAnalysisSnapshot) -> String {
    let season = snapshot.season();
    let remaining = snapshot.remaining_calories;
    let mut advice = format!(
        "오늘 현재까지 {}kcal를 섭취하셨네요. 목표는 {}kcal이므로, ",
        snapshot.today_calories, snapshot.target_calories
    );

    if remaining > 500 {
        advice.push_str(&format!("앞으로 약 {}kcal를 더 섭취하실 수 있습니다.\n\n", remaining));
        advice.push_str(&format!("🥗 추천 식단 ({} 계절 메뉴):\n", season.korean_name()));
        let menus = match season {
            Season::Winter => [
                "• 따뜻한 된장찌개와 현미밥 (약 400kcal)",
                "• 닭가슴살 샐러드 (약 300kcal)",
                "• 고구마 1개 + 삶은 계란 (약 250kcal)",
            ],
            Season::Summer => [
                "• 냉국수와 채소 (약 400kcal)",
                "• 샐러드 볼 with 연어 (약 350kcal)",
                "• 수박 + 그릭요거트 (약 200kcal)",
            ],
            Season::Spring | Season::Fall => [
                "• 비빔밥 (약 500kcal)",
                "• 토마토 계란 볶음밥 (약 400kcal)",
                "• 닭가슴살 샌드위치 (약 350kcal)",
            ],
        };
        advice.push_str(&menus.join("\n"));
    } else if remaining > 0 {
        advice.push_str(&light_snack_advice(remaining));
    } else {
        advice.push_str("이미 목표 칼로리를 초과하셨습니다.\n\n");
        advice.push_str("💪 추천 대응:\n");
        advice.push_str("• 가벼운 운동으로 칼로리 소모 (산책 30분)\n");
        advice.push_str("• 내일은 조금 더 조절해보세요\n");
        advice.push_str("• 물을 충분히 마시세요");
    }
    advice
}

fn calorie_advice(snapshot: &UserAnalysisSnapshot) -> String {
    let diff = snapshot.today_calories - snapshot.target_calories;
    let percent = calculate_daily_progress(snapshot.today_calories, snapshot.target_calories);

    let mut advice = String::from("📊 칼로리 분석:\n\n");
    advice.push_str(&format!("• 오늘 섭취: {}kcal\n", snapshot.today_calories));
    advice.push_str(&format!("• 목표: {}kcal\n", snapshot.target_calories));
    advice.push_str(&format!("• 달성률: {}%\n", percent));
    advice.push_str(&format!("• 주간 평균: {}kcal\n\n", snapshot.weekly_average));
    advice.push_str("🔬 대사량 정보:\n");
    advice.push_str(&format!("• 기초대사량(BMR): {}kcal\n", snapshot.bmr));
    advice.push_str(&format!("• 일일소비량(TDEE): {}kcal\n\n", snapshot.tdee));

    if diff.abs() < 100 {
        advice.push_str("✅ 완벽합니다! 목표 칼로리를 잘 지키고 계십니다.");
    } else if diff > 0 {
        advice.push_str(&format!("⚠️ 목표보다 {}kcal 초과했습니다.\n", diff));
        advice.push_str("운동으로 추가 소모하거나 내일 조절하세요.");
    } else {
        advice.push_str(&format!("💡 목표보다 {}kcal 부족합니다.\n", diff.abs()));
        advice.push_str("건강한 간식으로 보충하는 것을 추천합니다.");
    }
    advice
}

fn goal_advice(snapshot: &UserAnalysisSnapshot) -> String {
    let weight_diff = snapshot.current_weight - snapshot.target_weight;
    let mut advice = String::from("🎯 목표 분석:\n\n");
    advice.push_str(&format!("• 현재 체중: {}kg\n", snapshot.current_weight));
    advice.push_str(&format!("• 목표 체중: {}kg\n", snapshot.target_weight));
    advice.push_str(&format!("• 감량 필요: {:.1}kg\n", weight_diff));
    advice.push_str(&format!("• 남은 기간: {}일\n\n", snapshot.days_to_target));

    if snapshot.days_to_target <= 0 {
        advice.push_str("⏰ 목표 날짜가 지났습니다. 새로운 목표를 설정해보세요!");
        return advice;
    }

    let weekly_rate = weight_diff / snapshot.days_to_target as f64 * 7.0;
    advice.push_str("📈 권장 진행 속도:\n");
    advice.push_str(&format!("• 주당 {:.2}kg 감량\n\n", weekly_rate));

    if weekly_rate > 1.0 {
        advice.push_str("⚠️ 목표가 다소 빠릅니다. 건강을 위해 주당 0.5~1kg 감량을 권장합니다.\n");
        advice.push_str("목표 날짜를 조정하거나, 운동을 병행하세요.");
    } else if weekly_rate < 0.3 {
        advice.push_str("💡 여유롭게 진행하고 계십니다. 꾸준히 실천하면 충분히 달성 가능합니다!");
    } else {
        advice.push_str("✅ 적절한 속도입니다! 이대로 꾸준히 실천하세요.");
    }
    advice
}

fn today_summary(snapshot: &UserAnalysisSnapshot) -> String {
    let percent = calculate_daily_progress(snapshot.today_calories, snapshot.target_calories);
    let mut summary = String::from("📊 오늘의 현황:\n");
    summary.push_str(&format!(
        "• 섭취 칼로리: {}/{}kcal ({}%)\n",
        snapshot.today_calories, snapshot.target_calories, percent
    ));
    summary.push_str(&format!("• 운동으로 소모: {}kcal\n", snapshot.today_exercise_calories));
    summary.push_str(&format!("• 남은 칼로리: {}kcal", snapshot.remaining_calories));
    summary
}

fn nutrition_advice() -> String {
    [
        "🥗 영양소 균형 팁:\n",
        "• 단백질: 체중 1kg당 1.2~1.6g 권장",
        "  (닭가슴살, 계란, 두부, 생선)\n",
        "• 탄수화물: 전체 칼로리의 45~60%",
        "  (현미, 고구마, 귀리, 통곡물)\n",
        "• 지방: 전체 칼로리의 20~30%",
        "  (견과류, 아보카도, 올리브유)\n",
        "💡 다양한 색깔의 채소를 섭취하면 비타민과 미네랄을 골고루 얻을 수 있습니다!",
    ]
    .join("\n")
}

fn water_advice() -> String {
    [
        "💧 수분 섭취 가이드:\n",
        "• 하루 2~2.5리터 (8잔) 권장",
        "• 운동 전후에는 추가로 1~2잔",
        "• 카페인 음료는 이뇨 작용이 있으니 물로 보충하세요",
        "• 갈증을 느끼기 전에 미리미리 마시세요\n",
        "💡 물을 자주 마시면 포만감이 생겨 과식을 방지할 수 있습니다!",
    ]
    .join("\n")
}

fn motivation(snapshot: &UserAnalysisSnapshot) -> String {
    let mut text = String::from("💪 힘든 날도 있죠. 지금까지 기록해온 것만으로도 충분히 잘하고 계세요!\n\n");
    if snapshot.today_exercise_calories > 0 {
        text.push_str(&format!(
            "오늘도 운동으로 {}kcal를 소모하셨어요. 정말 대단해요!\n",
            snapshot.today_exercise_calories
        ));
    }
    text.push_str("• 완벽하지 않아도 괜찮아요. 꾸준함이 가장 중요합니다\n");
    text.push_str("• 작은 목표부터 하나씩 달성해보세요\n");
    text.push_str("• 충분한 수면과 휴식도 건강 관리의 일부입니다");
    text
}

fn general_advice(snapshot: &UserAnalysisSnapshot) -> String {
    let mut advice = String::from("안녕하세요! 오늘 하루는 어떠셨나요?\n\n");
    advice.push_str("📊 오늘의 현황:\n");
    advice.push_str(&format!(
        "• 섭취 칼로리: {}/{}kcal\n",
        snapshot.today_calories, snapshot.target_calories
    ));
    advice.push_str(&format!("• 운동으로 소모: {}kcal\n\n", snapshot.today_exercise_calories));
    advice.push_str("💡 제가 도와드릴 수 있는 것들:\n");
    advice.push_str("• 식단 추천 및 칼로리 조언\n");
    advice.push_str("• 운동 프로그램 추천\n");
    advice.push_str("• 목표 달성 전략\n");
    advice.push_str("• 영양소 균형 관리\n\n");
    advice.push_str("무엇이든 물어보세요! 😊");
    advice
}
