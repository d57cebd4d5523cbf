//! Weather lookup
//!
//! Talks to an OpenWeatherMap compatible `/weather` endpoint. Without an API
//! key, or when the provider fails, the typical weather of the season is
//! returned instead so the advisory always has an answer.

use crate::config::WeatherConfig;
use healthy_diary_shared::season::Season;
use healthy_diary_shared::weather::{WeatherCondition, WeatherInfo};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Weather request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Weather response carried no condition")]
    MissingCondition,
}

#[derive(Debug, Deserialize)]
struct ProviderResponse {
    main: ProviderMain,
    weather: Vec<ProviderCondition>,
}

#[derive(Debug, Deserialize)]
struct ProviderMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct ProviderCondition {
    main: String,
    description: String,
}

/// Weather observation and whether it came from the provider
#[derive(Debug, Clone)]
pub struct Observation {
    pub weather: WeatherInfo,
    pub live: bool,
}

pub struct WeatherService {
    client: reqwest::Client,
    base_url: String,
    city: String,
    api_key: Option<SecretString>,
}

impl WeatherService {
    pub fn new(config: &WeatherConfig) -> Result<Self, WeatherError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let api_key = config
            .api_key
            .as_ref()
            .filter(|key| config.enabled && !key.trim().is_empty())
            .map(|key| SecretString::new(key.clone()));

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            city: config.city.clone(),
            api_key,
        })
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    /// Current weather, falling back to the seasonal mock
    pub async fn current(&self, season: Season) -> Observation {
        let Some(key) = self.api_key.as_ref() else {
            debug!(season = %season, "No weather API key, using seasonal weather");
            return Observation {
                weather: WeatherInfo::mock(season),
                live: false,
            };
        };

        match self.fetch(key).await {
            Ok(weather) => Observation { weather, live: true },
            Err(e) => {
                warn!(city = %self.city, error = %e, "Weather fetch failed, using seasonal weather");
                Observation {
                    weather: WeatherInfo::mock(season),
                    live: false,
                }
            }
        }
    }

    async fn fetch(&self, key: &SecretString) -> Result<WeatherInfo, WeatherError> {
        let url = format!("{}/weather", self.base_url);
        let response: ProviderResponse = self
            .client
            .get(&url)
            .query(&[
                ("q", self.city.as_str()),
                ("appid", key.expose_secret().as_str()),
                ("units", "metric"),
                ("lang", "kr"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let condition = response.weather.first().ok_or(WeatherError::MissingCondition)?;
        Ok(WeatherInfo {
            temperature: response.main.temp.round() as i32,
            condition: WeatherCondition::from_provider(&condition.main),
            description: condition.description.clone(),
        })
    }
}
