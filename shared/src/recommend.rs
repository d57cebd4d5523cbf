//! Recommendation engine
//!
//! Picks diet and exercise suggestions from the catalog. Selection is random
//! within the filtered pool; the random source is passed in so callers can
//! seed it.
//!
//! Every recommender returns exactly [`RECOMMENDATION_COUNT`] items for a
//! non-empty catalog, widening its filter step by step when a tier runs dry.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{Catalog, Difficulty, ExerciseCatalogEntry, ExerciseCategory, FoodCatalogEntry};
use crate::health_metrics::{calculate_calories_by_weight, DEFAULT_DAILY_CALORIE_GOAL, DEFAULT_WEIGHT_KG};
use crate::models::{Goal, Nutrients, Recommendation, RecommendationType, UserProfile};
use crate::season::Season;

/// Number of items per recommendation request
pub const RECOMMENDATION_COUNT: usize = 3;

/// Half-width of the per-meal calorie window (kcal)
pub const MEAL_CALORIE_WINDOW: i32 = 200;

/// Gap between intake and goal tolerated before the advice comments on it (kcal)
pub const ADVICE_CALORIE_TOLERANCE: i32 = 300;

/// Aerobic exercises that count as indoor
const INDOOR_AEROBIC: &[&str] = &["줄넘기", "에어로빅"];

/// The only outdoor exercises suggested in winter
const WINTER_OUTDOOR: &[&str] = &["걷기 (느린 속도)", "걷기 (빠른 속도)", "등산", "조깅"];

/// Per-meal calorie target: a third of the daily goal, 2000 kcal a day
/// when the goal is missing or not positive
pub fn meal_calorie_target(goal: Option<&Goal>) -> i32 {
    let daily = goal
        .map(|g| g.daily_calorie_goal)
        .filter(|c| *c > 0)
        .unwrap_or(DEFAULT_DAILY_CALORIE_GOAL);
    (daily as f64 / 3.0).round() as i32
}

/// Minutes suggested for an exercise of the given difficulty
pub fn duration_for(difficulty: Difficulty) -> u32 {
    match difficulty {
        Difficulty::Easy => 40,
        Difficulty::Medium => 30,
        Difficulty::Hard => 20,
    }
}

fn sample<'a, T, R: Rng + ?Sized>(pool: &[&'a T], amount: usize, rng: &mut R) -> Vec<&'a T> {
    pool.choose_multiple(rng, amount).copied().collect()
}

/// Top up `picked` to the recommendation count from `all`
///
/// Entries not picked yet come first; repeats are only used when `all` holds
/// fewer distinct entries than needed.
fn pad<'a, T: PartialEq, R: Rng + ?Sized>(picked: &mut Vec<&'a T>, all: &'a [T], rng: &mut R) {
    if picked.len() < RECOMMENDATION_COUNT {
        let rest: Vec<&T> = all.iter().filter(|item| !picked.contains(item)).collect();
        let missing = RECOMMENDATION_COUNT - picked.len();
        picked.extend(sample(&rest, missing, rng));
    }
    while picked.len() < RECOMMENDATION_COUNT {
        match all.choose(rng) {
            Some(item) => picked.push(item),
            None => break,
        }
    }
}

// ============================================================================
// Diet
// ============================================================================

/// Three menu suggestions near a third of the daily calorie goal
///
/// Tiers, first to yield three candidates wins:
/// 1. in season and within ±200 kcal of the meal target
/// 2. any season within the window
/// 3. random catalog entries
pub fn recommend_diet<R: Rng + ?Sized>(
    catalog: &Catalog,
    goal: Option<&Goal>,
    season: Season,
    rng: &mut R,
) -> Vec<Recommendation> {
    let target = meal_calorie_target(goal);

    let seasonal: Vec<&FoodCatalogEntry> = catalog
        .foods_by_season(season)
        .into_iter()
        .filter(|f| f.within(target, MEAL_CALORIE_WINDOW))
        .collect();

    let mut picked = if seasonal.len() >= RECOMMENDATION_COUNT {
        sample(&seasonal, RECOMMENDATION_COUNT, rng)
    } else {
        let broadened =
            catalog.foods_by_calorie_range(target - MEAL_CALORIE_WINDOW, target + MEAL_CALORIE_WINDOW);
        sample(&broadened, RECOMMENDATION_COUNT, rng)
    };
    pad(&mut picked, catalog.foods(), rng);

    picked.into_iter().map(food_recommendation).collect()
}

fn food_recommendation(food: &FoodCatalogEntry) -> Recommendation {
    let description = food
        .description
        .clone()
        .unwrap_or_else(|| format!("{} 메뉴로 {}kcal", food.category.label(), food.calories));

    Recommendation {
        id: food.id.clone(),
        kind: RecommendationType::Diet,
        title: food.name.clone(),
        description,
        calories: food.calories,
        ingredients: Some(food.ingredients.clone()),
        duration: None,
        difficulty: Some(food.difficulty),
        cooking_steps: food.cooking_steps.clone(),
        cooking_time: Some(food.cooking_time),
        nutrients: Some(Nutrients {
            protein: food.protein,
            carbs: food.carbs,
            fat: food.fat,
        }),
    }
}

// ============================================================================
// Exercise
// ============================================================================

/// Exercises eligible for the indoor/outdoor setting and season
pub fn exercise_pool(catalog: &Catalog, season: Season, indoor: bool) -> Vec<&ExerciseCatalogEntry> {
    catalog
        .exercises()
        .iter()
        .filter(|e| {
            if indoor {
                matches!(e.category, ExerciseCategory::Strength | ExerciseCategory::Other)
                    || (e.category == ExerciseCategory::Aerobic && INDOOR_AEROBIC.contains(&e.name.as_str()))
            } else if season == Season::Winter {
                WINTER_OUTDOOR.contains(&e.name.as_str())
            } else {
                matches!(e.category, ExerciseCategory::Aerobic | ExerciseCategory::Sport)
            }
        })
        .collect()
}

/// Three exercise suggestions matched to the user's activity level
///
/// Candidates within one difficulty step of the user's tier are preferred;
/// with fewer than three of those the whole pool is used.
pub fn recommend_exercise<R: Rng + ?Sized>(
    catalog: &Catalog,
    user: Option<&UserProfile>,
    season: Season,
    indoor: bool,
    rng: &mut R,
) -> Vec<Recommendation> {
    let target = user
        .map(|u| u.activity_level.target_difficulty())
        .unwrap_or(Difficulty::Medium);
    let weight = user.map(|u| u.current_weight).unwrap_or(DEFAULT_WEIGHT_KG);

    let pool = exercise_pool(catalog, season, indoor);
    let suited: Vec<&ExerciseCatalogEntry> =
        pool.iter().copied().filter(|e| e.difficulty.distance(target) <= 1).collect();

    let mut picked = if suited.len() >= RECOMMENDATION_COUNT {
        sample(&suited, RECOMMENDATION_COUNT, rng)
    } else {
        sample(&pool, RECOMMENDATION_COUNT, rng)
    };
    pad(&mut picked, catalog.exercises(), rng);

    picked.into_iter().map(|e| exercise_recommendation(e, weight)).collect()
}

fn exercise_recommendation(exercise: &ExerciseCatalogEntry, weight_kg: f64) -> Recommendation {
    let duration = duration_for(exercise.difficulty);
    Recommendation {
        id: exercise.id.clone(),
        kind: RecommendationType::Exercise,
        title: exercise.name.clone(),
        description: exercise.description.clone(),
        calories: calculate_calories_by_weight(exercise.met, weight_kg, duration),
        ingredients: None,
        duration: Some(duration),
        difficulty: Some(exercise.difficulty),
        cooking_steps: None,
        cooking_time: None,
        nutrients: None,
    }
}

// ============================================================================
// Advice
// ============================================================================

/// Short personalised insights, in order: calorie comment, exercise
/// comment, season tip
///
/// The calorie and exercise comments need a goal and the matching figure;
/// the season tip is always present.
pub fn generate_advice(
    goal: Option<&Goal>,
    recent_calories: Option<i32>,
    recent_exercise_count: Option<u32>,
    season: Season,
) -> Vec<String> {
    let mut advice = Vec::new();

    if let (Some(goal), Some(calories)) = (goal, recent_calories) {
        let diff = calories - goal.daily_calorie_goal;
        if diff > ADVICE_CALORIE_TOLERANCE {
            advice.push(format!(
                "최근 목표보다 {}kcal 더 섭취했습니다. 저녁 식사량을 조금 줄여보세요.",
                diff
            ));
        } else if diff < -ADVICE_CALORIE_TOLERANCE {
            advice.push(format!(
                "목표보다 {}kcal 적게 섭취하고 있습니다. 너무 무리한 다이어트는 건강에 해로울 수 있어요.",
                diff.abs()
            ));
        } else {
            advice.push("목표 칼로리를 잘 지키고 있습니다. 계속 이 페이스를 유지하세요!".to_string());
        }
    }

    if let (Some(goal), Some(count)) = (goal, recent_exercise_count) {
        if count < goal.weekly_exercise_goal {
            advice.push(format!(
                "이번 주 운동 {}회로 목표에 조금 부족합니다. {}회 더 운동하면 목표 달성!",
                count,
                goal.weekly_exercise_goal - count
            ));
        } else {
            advice.push("주간 운동 목표를 달성했습니다! 훌륭해요! 💪".to_string());
        }
    }

    advice.push(season.advice_tip().to_string());
    advice
}
