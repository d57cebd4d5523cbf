//! Food and exercise catalog browsing

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use healthy_diary_shared::catalog::{Catalog, ExerciseCatalogEntry, FoodCatalogEntry};
use healthy_diary_shared::types::{ExerciseCatalogQuery, FoodCatalogQuery};

/// Create catalog routes
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/foods", get(list_foods))
        .route("/foods/:id", get(get_food))
        .route("/exercises", get(list_exercises))
        .route("/exercises/:id", get(get_exercise))
}

fn filter_foods<'a>(catalog: &'a Catalog, query: &FoodCatalogQuery) -> Vec<&'a FoodCatalogEntry> {
    if let Some(name) = query.name.as_deref() {
        return catalog.find_food(name).into_iter().collect();
    }

    let min = query.min_calories.unwrap_or(i32::MIN);
    let max = query.max_calories.unwrap_or(i32::MAX);
    let candidates = match query.category {
        Some(category) => catalog.foods_by_category(category),
        None => catalog.foods().iter().collect(),
    };
    candidates
        .into_iter()
        .filter(|f| query.season.map_or(true, |season| f.in_season(season)) && (min..=max).contains(&f.calories))
        .collect()
}

fn filter_exercises<'a>(catalog: &'a Catalog, query: &ExerciseCatalogQuery) -> Vec<&'a ExerciseCatalogEntry> {
    let q = query.q.as_deref().map(str::trim).filter(|q| !q.is_empty());
    match (query.category, q) {
        (Some(category), q) => catalog
            .exercises_by_category(category)
            .into_iter()
            .filter(|e| q.map_or(true, |q| e.mentions(q)))
            .collect(),
        (None, Some(q)) => catalog.search_exercises(q),
        (None, None) => catalog.exercises().iter().collect(),
    }
}

/// GET /api/v1/catalog/foods?season=&category=&min_calories=&max_calories=&name=
async fn list_foods(
    State(state): State<AppState>,
    Query(query): Query<FoodCatalogQuery>,
) -> Json<Vec<FoodCatalogEntry>> {
    Json(filter_foods(state.catalog, &query).into_iter().cloned().collect())
}

/// GET /api/v1/catalog/foods/:id
async fn get_food(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<FoodCatalogEntry>, ApiError> {
    state
        .catalog
        .food_by_id(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Food {} not found", id)))
}

/// GET /api/v1/catalog/exercises?category=&q=
async fn list_exercises(
    State(state): State<AppState>,
    Query(query): Query<ExerciseCatalogQuery>,
) -> Json<Vec<ExerciseCatalogEntry>> {
    Json(filter_exercises(state.catalog, &query).into_iter().cloned().collect())
}

/// GET /api/v1/catalog/exercises/:id
async fn get_exercise(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ExerciseCatalogEntry>, ApiError> {
    state
        .catalog
        .exercise_by_id(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Exercise {} not found", id)))
}
