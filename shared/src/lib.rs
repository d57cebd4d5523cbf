//! Healthy Diary Shared Library
//!
//! The core of the diary: data models, calorie calculations, the food and
//! exercise catalogs, recommendations and the rule-based chatbot. Used by the
//! backend and the WASM module.

pub mod catalog;
pub mod chat;
pub mod errors;
pub mod health_metrics;
pub mod intent;
pub mod models;
pub mod recommend;
pub mod season;
pub mod types;
pub mod validation;
pub mod weather;

// Re-export commonly used items
pub use catalog::{Catalog, Difficulty, ExerciseCatalogEntry, ExerciseCategory, FoodCatalogEntry, FoodCategory};
pub use chat::{ChatAction, ChatEngine, ChatResponse, UserAnalysisSnapshot, UserContext};
pub use errors::*;
pub use health_metrics::*;
pub use intent::{analyze_message, classify_intent, extract_entities, Entities, Intent, IntentAnalysis};
pub use models::*;
pub use season::{Season, SeasonTag};
pub use types::*;
pub use weather::{outdoor_advice, OutdoorAdvice, WeatherCondition, WeatherInfo};
