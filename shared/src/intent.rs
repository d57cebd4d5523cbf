//! Intent classification and entity extraction for chat messages
//!
//! Classification is first-match-wins over an ordered rule table: the first
//! intent with any keyword contained in the lower-cased message is chosen.
//! Rule order decides ambiguous messages, so it must not be changed lightly.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::MealType;

/// Closed set of chat intents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    AddMeal,
    RecommendMeal,
    CalorieQuery,
    AddExercise,
    RecommendExercise,
    CheckProgress,
    TodaySummary,
    Help,
    WaterReminder,
    Motivation,
    GeneralQuestion,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::AddMeal => "add_meal",
            Intent::RecommendMeal => "recommend_meal",
            Intent::CalorieQuery => "calorie_query",
            Intent::AddExercise => "add_exercise",
            Intent::RecommendExercise => "recommend_exercise",
            Intent::CheckProgress => "check_progress",
            Intent::TodaySummary => "today_summary",
            Intent::Help => "help",
            Intent::WaterReminder => "water_reminder",
            Intent::Motivation => "motivation",
            Intent::GeneralQuestion => "general_question",
        }
    }

    /// Keywords that select this intent
    pub fn keywords(&self) -> &'static [&'static str] {
        RULES
            .iter()
            .find(|rule| rule.intent == *self)
            .map(|rule| rule.keywords)
            .unwrap_or(&[])
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured values pulled out of a message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entities {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<MealType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_calories: Option<u32>,
}

impl Entities {
    pub fn is_empty(&self) -> bool {
        *self == Entities::default()
    }
}

/// Classification result with extracted entities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentAnalysis {
    pub intent: Intent,
    /// Informational only, in [0, 1]
    pub confidence: f64,
    pub entities: Entities,
}

struct IntentRule {
    intent: Intent,
    keywords: &'static [&'static str],
    extract: fn(&str) -> Entities,
}

const RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::Greeting,
        keywords: &["안녕", "하이", "hi", "hello", "안녕하세요", "반가"],
        extract: no_entities,
    },
    IntentRule {
        intent: Intent::AddMeal,
        keywords: &["먹었", "먹음", "섭취", "식사", "아침먹", "점심먹", "저녁먹", "간식먹"],
        extract: meal_entities,
    },
    IntentRule {
        intent: Intent::RecommendMeal,
        keywords: &["뭐 먹", "추천", "메뉴", "식단", "먹을까", "점심으로", "저녁으로"],
        extract: meal_request_entities,
    },
    IntentRule {
        intent: Intent::CalorieQuery,
        keywords: &["칼로리", "영양", "영양소", "kcal"],
        extract: no_entities,
    },
    IntentRule {
        intent: Intent::AddExercise,
        keywords: &["운동했", "운동함", "달렸", "걸었", "했어", "했음"],
        extract: exercise_entities,
    },
    IntentRule {
        intent: Intent::RecommendExercise,
        keywords: &["운동 추천", "어떤 운동", "운동 뭐", "운동할까"],
        extract: no_entities,
    },
    IntentRule {
        intent: Intent::CheckProgress,
        keywords: &["진행률", "얼마나", "목표", "진척", "달성"],
        extract: no_entities,
    },
    IntentRule {
        intent: Intent::TodaySummary,
        keywords: &["오늘", "현황", "요약", "상태"],
        extract: no_entities,
    },
    IntentRule {
        intent: Intent::Help,
        keywords: &["도움", "help", "뭐 할", "기능", "사용법"],
        extract: no_entities,
    },
    IntentRule {
        intent: Intent::WaterReminder,
        keywords: &["물", "수분", "마시"],
        extract: no_entities,
    },
    IntentRule {
        intent: Intent::Motivation,
        keywords: &["힘들", "포기", "어려", "지쳐"],
        extract: no_entities,
    },
];

// ============================================================================
// Patterns
// ============================================================================

fn pattern(re: &str) -> Regex {
    Regex::new(re).unwrap_or_else(|e| panic!("invalid pattern {re}: {e}"))
}

static FOOD_BEFORE_VERB: Lazy<Regex> = Lazy::new(|| pattern(r"([가-힣a-zA-Z]+)\s*(먹었|먹음|섭취)"));
static FOOD_AFTER_MEAL: Lazy<Regex> = Lazy::new(|| pattern(r"(아침|점심|저녁|간식)으로\s*([가-힣a-zA-Z]+)"));
static FOOD_BEFORE_KCAL: Lazy<Regex> = Lazy::new(|| pattern(r"([가-힣a-zA-Z]+)\s*\d+\s*(?i:kcal)"));
static CALORIES: Lazy<Regex> = Lazy::new(|| pattern(r"(\d+)\s*(?i:kcal)"));

static EXERCISE_THEN_DURATION: Lazy<Regex> = Lazy::new(|| pattern(r"([가-힣a-zA-Z]+)\s*\d+\s*(?:시간|분)"));
static DURATION_THEN_EXERCISE: Lazy<Regex> = Lazy::new(|| pattern(r"\d+\s*(?:시간|분)\s*([가-힣a-zA-Z]+)"));
static EXERCISE_THEN_DONE: Lazy<Regex> = Lazy::new(|| pattern(r"([가-힣a-zA-Z]+)\s*(?:했어|했음|함)"));
static HOURS: Lazy<Regex> = Lazy::new(|| pattern(r"(\d+)\s*시간(?:\s*(\d+)\s*분)?"));
static MINUTES: Lazy<Regex> = Lazy::new(|| pattern(r"(\d+)\s*분"));

/// Verb stems that end an exercise name: "조깅했어" -> "조깅"
const EXERCISE_VERBS: &[&str] = &["운동했", "운동함", "달렸", "걸었", "했", "함"];

fn capture(re: &Regex, text: &str, group: usize) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(group))
        .map(|m| m.as_str().to_string())
}

fn capture_number(re: &Regex, text: &str, group: usize) -> Option<u32> {
    capture(re, text, group).and_then(|s| s.parse().ok())
}

/// Drop a trailing object particle: "비빔밥을" -> "비빔밥"
fn strip_particle(name: String) -> String {
    match name.strip_suffix('을').or_else(|| name.strip_suffix('를')) {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => name,
    }
}

/// First meal slot mentioned in the message
fn meal_type_in(message: &str) -> Option<MealType> {
    [MealType::Breakfast, MealType::Lunch, MealType::Dinner, MealType::Snack]
        .into_iter()
        .find(|meal| message.contains(meal.label()))
}

// ============================================================================
// Extractors
// ============================================================================

fn no_entities(_: &str) -> Entities {
    Entities::default()
}

fn meal_entities(message: &str) -> Entities {
    let food_name = [(&*FOOD_BEFORE_VERB, 1), (&*FOOD_AFTER_MEAL, 2), (&*FOOD_BEFORE_KCAL, 1)]
        .into_iter()
        .filter_map(|(re, group)| capture(re, message, group))
        .find(|name| !name.eq_ignore_ascii_case("kcal"))
        .map(strip_particle);

    Entities {
        food_name,
        meal_type: meal_type_in(message),
        calories: capture_number(&CALORIES, message, 1),
        ..Default::default()
    }
}

fn meal_request_entities(message: &str) -> Entities {
    Entities {
        meal_type: meal_type_in(message),
        max_calories: capture_number(&CALORIES, message, 1),
        ..Default::default()
    }
}

/// Exercise name without the verb; `None` for a bare verb, a time unit or
/// the generic word "운동"
fn exercise_name(capture: &str) -> Option<String> {
    let end = EXERCISE_VERBS
        .iter()
        .filter_map(|verb| capture.find(verb))
        .min()
        .unwrap_or(capture.len());
    let name = strip_particle(capture[..end].trim().to_string());

    match name.as_str() {
        "" | "시간" | "분" | "운동" => None,
        _ => Some(name),
    }
}

/// "1시간 30분" is 90 minutes, "45분" is 45
fn duration_minutes(message: &str) -> Option<u32> {
    if let Some(caps) = HOURS.captures(message) {
        let hours: u32 = caps.get(1)?.as_str().parse().ok()?;
        let minutes: u32 = caps.get(2).and_then(|m| m.as_str().parse().ok()).unwrap_or(0);
        return Some(hours * 60 + minutes);
    }
    capture_number(&MINUTES, message, 1)
}

fn exercise_entities(message: &str) -> Entities {
    let exercise_name = [&*EXERCISE_THEN_DURATION, &*DURATION_THEN_EXERCISE, &*EXERCISE_THEN_DONE]
        .into_iter()
        .flat_map(|re| re.captures_iter(message))
        .filter_map(|caps| caps.get(1).and_then(|m| exercise_name(m.as_str())))
        .next();

    Entities {
        exercise_name,
        duration_minutes: duration_minutes(message),
        ..Default::default()
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Map a message to its intent, `GeneralQuestion` when nothing matches
pub fn classify_intent(message: &str) -> Intent {
    let lower = message.trim().to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| lower.contains(k)))
        .map(|rule| rule.intent)
        .unwrap_or(Intent::GeneralQuestion)
}

/// Entities for an already classified message
///
/// Only meal logging, meal requests and exercise logging carry entities.
pub fn extract_entities(message: &str, intent: Intent) -> Entities {
    RULES
        .iter()
        .find(|rule| rule.intent == intent)
        .map(|rule| (rule.extract)(message))
        .unwrap_or_default()
}

/// Classify, extract and score a message
pub fn analyze_message(message: &str) -> IntentAnalysis {
    let intent = classify_intent(message);
    let entities = extract_entities(message, intent);

    let lower = message.to_lowercase();
    let matches = intent.keywords().iter().filter(|k| lower.contains(*k)).count();
    let mut confidence = (0.5 + matches as f64 * 0.2).min(1.0);
    if !entities.is_empty() {
        confidence += 0.2;
    }

    IntentAnalysis {
        intent,
        confidence: confidence.clamp(0.0, 1.0),
        entities,
    }
}
