//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! the diary store, the shared core and external systems.

pub mod backup;
pub mod chat;
pub mod diary;
pub mod profile;
pub mod recommendations;
pub mod weather;

pub use backup::BackupService;
pub use chat::ChatService;
pub use diary::DiaryService;
pub use profile::ProfileService;
pub use recommendations::RecommendationService;
pub use weather::WeatherService;
