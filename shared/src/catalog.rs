//! Static food and exercise catalogs
//!
//! Both tables are embedded at compile time and parsed once. They are
//! read-only for the life of the process.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::CatalogError;
use crate::season::{Season, SeasonTag};

const FOODS_JSON: &str = include_str!("../data/foods.json");
const EXERCISES_JSON: &str = include_str!("../data/exercises.json");

/// Three-step difficulty scale, ordered easy < medium < hard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn ordinal(&self) -> i32 {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        }
    }

    /// Steps between two tiers on the scale
    pub fn distance(&self, other: Difficulty) -> u32 {
        (self.ordinal() - other.ordinal()).unsigned_abs()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "쉬움",
            Difficulty::Medium => "보통",
            Difficulty::Hard => "어려움",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    Korean,
    Western,
    Chinese,
    Japanese,
    Salad,
    Smoothie,
    Snack,
    Dessert,
}

impl FoodCategory {
    pub fn label(&self) -> &'static str {
        match self {
            FoodCategory::Korean => "한식",
            FoodCategory::Western => "양식",
            FoodCategory::Chinese => "중식",
            FoodCategory::Japanese => "일식",
            FoodCategory::Salad => "샐러드",
            FoodCategory::Smoothie => "스무디",
            FoodCategory::Snack => "간식",
            FoodCategory::Dessert => "디저트",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseCategory {
    Aerobic,
    Strength,
    Sport,
    Other,
}

/// A menu item of the food catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodCatalogEntry {
    pub id: String,
    pub name: String,
    pub category: FoodCategory,
    pub calories: i32,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub ingredients: Vec<String>,
    /// Preparation time in minutes
    pub cooking_time: u32,
    pub difficulty: Difficulty,
    pub season: SeasonTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooking_steps: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FoodCatalogEntry {
    pub fn in_season(&self, season: Season) -> bool {
        self.season.matches(season)
    }

    /// Whether the calories lie within `target ± window`
    pub fn within(&self, target: i32, window: i32) -> bool {
        (self.calories - target).abs() <= window
    }
}

/// An activity of the exercise catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseCatalogEntry {
    pub id: String,
    pub name: String,
    pub met: f64,
    pub category: ExerciseCategory,
    pub difficulty: Difficulty,
    pub description: String,
}

impl ExerciseCatalogEntry {
    /// Whether the name or description contains `query`, ignoring case
    pub fn mentions(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query) || self.description.to_lowercase().contains(&query)
    }
}

/// The two read-only reference tables
#[derive(Debug, Clone)]
pub struct Catalog {
    foods: Vec<FoodCatalogEntry>,
    exercises: Vec<ExerciseCatalogEntry>,
}

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    // The embedded documents are checked by the tests below.
    Catalog::from_json(FOODS_JSON, EXERCISES_JSON).unwrap_or_else(|e| panic!("built-in catalog: {e}"))
});

impl Catalog {
    /// The catalog shipped with the crate
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Parse both tables. Either table being empty is an error.
    pub fn from_json(foods: &str, exercises: &str) -> Result<Self, CatalogError> {
        let foods: Vec<FoodCatalogEntry> =
            serde_json::from_str(foods).map_err(|source| CatalogError::Parse { table: "food", source })?;
        let exercises: Vec<ExerciseCatalogEntry> = serde_json::from_str(exercises)
            .map_err(|source| CatalogError::Parse { table: "exercise", source })?;
        Self::new(foods, exercises)
    }

    pub fn new(foods: Vec<FoodCatalogEntry>, exercises: Vec<ExerciseCatalogEntry>) -> Result<Self, CatalogError> {
        if foods.is_empty() {
            return Err(CatalogError::Empty("food"));
        }
        if exercises.is_empty() {
            return Err(CatalogError::Empty("exercise"));
        }
        Ok(Self { foods, exercises })
    }

    pub fn foods(&self) -> &[FoodCatalogEntry] {
        &self.foods
    }

    pub fn exercises(&self) -> &[ExerciseCatalogEntry] {
        &self.exercises
    }

    // ------------------------------------------------------------------------
    // Food lookups
    // ------------------------------------------------------------------------

    pub fn foods_by_season(&self, season: Season) -> Vec<&FoodCatalogEntry> {
        self.foods.iter().filter(|f| f.in_season(season)).collect()
    }

    pub fn foods_by_calorie_range(&self, min: i32, max: i32) -> Vec<&FoodCatalogEntry> {
        self.foods.iter().filter(|f| f.calories >= min && f.calories <= max).collect()
    }

    pub fn foods_by_category(&self, category: FoodCategory) -> Vec<&FoodCatalogEntry> {
        self.foods.iter().filter(|f| f.category == category).collect()
    }

    pub fn food_by_id(&self, id: &str) -> Option<&FoodCatalogEntry> {
        self.foods.iter().find(|f| f.id == id)
    }

    /// Resolve a food mentioned in free text
    ///
    /// An exact name wins; otherwise the first entry whose name contains the
    /// query (or is contained in it) is returned.
    pub fn find_food(&self, query: &str) -> Option<&FoodCatalogEntry> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        self.foods
            .iter()
            .find(|f| f.name == query)
            .or_else(|| self.foods.iter().find(|f| f.name.contains(query) || query.contains(f.name.as_str())))
    }

    // ------------------------------------------------------------------------
    // Exercise lookups
    // ------------------------------------------------------------------------

    pub fn exercise_by_id(&self, id: &str) -> Option<&ExerciseCatalogEntry> {
        self.exercises.iter().find(|e| e.id == id)
    }

    pub fn exercises_by_category(&self, category: ExerciseCategory) -> Vec<&ExerciseCatalogEntry> {
        self.exercises.iter().filter(|e| e.category == category).collect()
    }

    /// Case-insensitive search over names and descriptions
    pub fn search_exercises(&self, query: &str) -> Vec<&ExerciseCatalogEntry> {
        self.exercises.iter().filter(|e| e.mentions(query)).collect()
    }

    /// Resolve an exercise mentioned in free text, exact name first
    pub fn find_exercise(&self, query: &str) -> Option<&ExerciseCatalogEntry> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        self.exercises
            .iter()
            .find(|e| e.name == query)
            .or_else(|| self.exercises.iter().find(|e| e.name.contains(query)))
    }
}
