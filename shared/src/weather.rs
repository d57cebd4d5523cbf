//! Weather advisory
//!
//! Decides whether outdoor exercise is advisable. The advice only biases the
//! indoor flag handed to the exercise recommender; the recommender itself
//! never looks at the weather.

use serde::{Deserialize, Serialize};

use crate::season::Season;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
}

impl WeatherCondition {
    /// Map a provider condition such as "Clear" or "Drizzle"
    pub fn from_provider(condition: &str) -> Self {
        let lower = condition.to_lowercase();
        if lower.contains("clear") {
            WeatherCondition::Sunny
        } else if lower.contains("cloud") {
            WeatherCondition::Cloudy
        } else if lower.contains("rain") || lower.contains("drizzle") {
            WeatherCondition::Rainy
        } else if lower.contains("snow") {
            WeatherCondition::Snowy
        } else {
            WeatherCondition::Cloudy
        }
    }
}

/// Current weather
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherInfo {
    /// Degrees Celsius, rounded
    pub temperature: i32,
    pub condition: WeatherCondition,
    pub description: String,
}

impl WeatherInfo {
    /// Typical weather of a season, used when no provider is configured
    pub fn mock(season: Season) -> Self {
        let (temperature, condition, description) = match season {
            Season::Spring => (15, WeatherCondition::Sunny, "맑음"),
            Season::Summer => (28, WeatherCondition::Cloudy, "흐림"),
            Season::Fall => (18, WeatherCondition::Sunny, "맑음"),
            Season::Winter => (3, WeatherCondition::Cloudy, "흐림"),
        };
        Self {
            temperature,
            condition,
            description: description.to_string(),
        }
    }
}

/// Whether to exercise outside, and why
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutdoorAdvice {
    pub recommend_outdoor: bool,
    pub reason: String,
}

/// Outdoor exercise advice for the given weather
///
/// Rain or snow, below 0 °C and above 32 °C keep the user inside.
pub fn outdoor_advice(weather: &WeatherInfo) -> OutdoorAdvice {
    let t = weather.temperature;
    let (recommend_outdoor, reason) = match weather.condition {
        WeatherCondition::Rainy => (false, "비가 오고 있습니다. 실내 운동을 추천합니다.".to_string()),
        WeatherCondition::Snowy => (false, "눈이 오고 있습니다. 실내 운동을 추천합니다.".to_string()),
        _ if t < 0 => (false, format!("날씨가 너무 춥습니다 ({}°C). 실내 운동을 추천합니다.", t)),
        _ if t > 32 => (false, format!("날씨가 너무 덥습니다 ({}°C). 실내 운동을 추천합니다.", t)),
        _ if (5..=28).contains(&t) => (
            true,
            format!("날씨가 좋습니다 ({}°C). 실외 운동하기 좋은 날씨입니다!", t),
        ),
        _ if t < 5 => (
            true,
            format!("약간 쌀쌀합니다 ({}°C). 따뜻하게 입고 가벼운 산책을 추천합니다.", t),
        ),
        _ => (true, format!("날씨가 덥습니다 ({}°C). 아침이나 저녁에 운동하세요.", t)),
    };
    OutdoorAdvice {
        recommend_outdoor,
        reason,
    }
}
