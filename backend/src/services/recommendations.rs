//! Recommendation service - diet and exercise suggestions and advice

use crate::services::weather::WeatherService;
use crate::storage::DiaryStore;
use chrono::NaiveDate;
use healthy_diary_shared::catalog::Catalog;
use healthy_diary_shared::recommend::{generate_advice, recommend_diet, recommend_exercise};
use healthy_diary_shared::season::Season;
use healthy_diary_shared::types::{AdviceResponse, RecommendationQuery, RecommendationsResponse, SeasonGuideResponse};
use healthy_diary_shared::weather::outdoor_advice;
use tracing::debug;

pub struct RecommendationService;

impl RecommendationService {
    pub async fn diet(store: &DiaryStore, catalog: &Catalog, season: Option<Season>) -> RecommendationsResponse {
        let season = season.unwrap_or_else(Season::current);
        let data = store.read().await;
        let items = recommend_diet(catalog, data.goal.as_ref(), season, &mut rand::thread_rng());

        debug!(season = %season, count = items.len(), "Diet recommendations");
        RecommendationsResponse {
            season,
            indoor: None,
            items,
        }
    }

    /// Exercise suggestions; without an explicit `indoor` the weather decides
    pub async fn exercise(
        store: &DiaryStore,
        catalog: &Catalog,
        weather: &WeatherService,
        query: RecommendationQuery,
    ) -> RecommendationsResponse {
        let season = query.season.unwrap_or_else(Season::current);
        let indoor = match query.indoor {
            Some(indoor) => indoor,
            None => {
                let observation = weather.current(season).await;
                !outdoor_advice(&observation.weather).recommend_outdoor
            }
        };

        let data = store.read().await;
        let items = recommend_exercise(catalog, data.user.as_ref(), season, indoor, &mut rand::thread_rng());

        debug!(season = %season, indoor, count = items.len(), "Exercise recommendations");
        RecommendationsResponse {
            season,
            indoor: Some(indoor),
            items,
        }
    }

    /// Advice from the week ending `today`
    pub async fn advice(store: &DiaryStore, today: NaiveDate, season: Option<Season>) -> AdviceResponse {
        let season = season.unwrap_or_else(|| Season::of_date(today));
        let data = store.read().await;
        let advice = generate_advice(
            data.goal.as_ref(),
            data.recent_average_calories(today),
            Some(data.recent_exercise_count(today)),
            season,
        );
        AdviceResponse { season, advice }
    }

    /// Seasonal ingredients with diet and exercise tips
    pub fn season_guide(season: Season) -> SeasonGuideResponse {
        fn owned(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }
        SeasonGuideResponse {
            season,
            name: season.korean_name().to_string(),
            ingredients: owned(season.ingredients()),
            diet_tips: owned(season.diet_tips()),
            exercise_tips: owned(season.exercise_tips()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WeatherConfig;
    use crate::storage::MemoryStorage;
    use healthy_diary_shared::models::RecommendationType;
    use std::sync::Arc;

    async fn store() -> DiaryStore {
        DiaryStore::open(Arc::new(MemoryStorage::new())).await.unwrap()
    }

    #[tokio::test]
    async fn test_diet_returns_three() {
        let store = store().await;
        let response = RecommendationService::diet(&store, Catalog::builtin(), Some(Season::Summer)).await;
        assert_eq!(response.season, Season::Summer);
        assert_eq!(response.items.len(), 3);
        assert!(response.items.iter().all(|r| r.kind == RecommendationType::Diet));
    }

    #[tokio::test]
    async fn test_exercise_uses_weather_when_indoor_unset() {
        let store = store().await;
        let weather = WeatherService::new(&WeatherConfig::default()).unwrap();

        // seasonal mock weather for winter is 3 °C and cloudy, still outdoor
        let query = RecommendationQuery {
            season: Some(Season::Winter),
            indoor: None,
        };
        let response = RecommendationService::exercise(&store, Catalog::builtin(), &weather, query).await;
        assert_eq!(response.indoor, Some(false));
        assert_eq!(response.items.len(), 3);

        let query = RecommendationQuery {
            season: Some(Season::Winter),
            indoor: Some(true),
        };
        let response = RecommendationService::exercise(&store, Catalog::builtin(), &weather, query).await;
        assert_eq!(response.indoor, Some(true));
    }

    #[tokio::test]
    async fn test_advice_without_goal_is_season_tip_only() {
        let store = store().await;
        let today = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let response = RecommendationService::advice(&store, today, None).await;
        assert_eq!(response.season, Season::Summer);
        assert_eq!(response.advice, vec![Season::Summer.advice_tip().to_string()]);
    }

    #[test]
    fn test_season_guide() {
        let guide = RecommendationService::season_guide(Season::Winter);
        assert_eq!(guide.season, Season::Winter);
        assert_eq!(guide.name, "겨울");
        assert!(guide.ingredients.contains(&"굴".to_string()));
        assert_eq!(guide.diet_tips.len(), 4);
        assert_eq!(guide.exercise_tips.len(), 4);

        let spring = RecommendationService::season_guide(Season::Spring);
        assert_eq!(spring.diet_tips.len(), 3);
        assert!(spring.ingredients.contains(&"냉이".to_string()));
    }
}
