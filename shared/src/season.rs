//! Seasons and seasonal guidance
//!
//! Korean calendar seasons: 3-5 spring, 6-8 summer, 9-11 fall, 12-2 winter.

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four seasons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

/// Season tag of a catalog entry. `All` matches every season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonTag {
    Spring,
    Summer,
    Fall,
    Winter,
    All,
}

impl SeasonTag {
    pub fn matches(&self, season: Season) -> bool {
        matches!(
            (self, season),
            (SeasonTag::All, _)
                | (SeasonTag::Spring, Season::Spring)
                | (SeasonTag::Summer, Season::Summer)
                | (SeasonTag::Fall, Season::Fall)
                | (SeasonTag::Winter, Season::Winter)
        )
    }
}

impl Season {
    /// Season of a calendar month (1-12)
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Fall,
            _ => Season::Winter,
        }
    }

    pub fn of_date(date: NaiveDate) -> Self {
        Self::from_month(date.month())
    }

    pub fn current() -> Self {
        Self::of_date(Utc::now().date_naive())
    }

    /// Korean display name
    pub fn korean_name(&self) -> &'static str {
        match self {
            Season::Spring => "봄",
            Season::Summer => "여름",
            Season::Fall => "가을",
            Season::Winter => "겨울",
        }
    }

    /// Ingredients in season
    pub fn ingredients(&self) -> &'static [&'static str] {
        match self {
            Season::Spring => &["냉이", "달래", "쑥", "두릅", "죽순", "아스파라거스", "딸기", "봄동", "씀바귀", "미나리", "취나물"],
            Season::Summer => &["토마토", "오이", "가지", "호박", "옥수수", "수박", "참외", "복숭아", "자두", "열무", "상추", "깻잎"],
            Season::Fall => &["고구마", "밤", "대추", "배", "사과", "감", "버섯", "우엉", "연근", "무", "배추", "시금치"],
            Season::Winter => &["배추", "무", "시금치", "콩나물", "굴", "과메기", "귤", "한라봉", "유자", "딸기", "브로콜리", "뿌리채소"],
        }
    }

    pub fn diet_tips(&self) -> &'static [&'static str] {
        match self {
            Season::Spring => &[
                "봄나물로 비타민과 미네랄을 보충하세요",
                "따뜻한 차와 함께 가볍게 식사하세요",
                "제철 딸기로 비타민 C 섭취를 늘리세요",
            ],
            Season::Summer => &[
                "수분 섭취를 충분히 하세요",
                "시원한 샐러드와 냉국으로 더위를 이겨내세요",
                "수박, 참외 등 수분 많은 과일을 섭취하세요",
            ],
            Season::Fall => &[
                "면역력을 높이는 버섯 요리를 추천합니다",
                "고구마, 밤 등 식이섬유가 풍부한 음식을 섭취하세요",
                "환절기 건강을 위해 영양가 높은 제철 과일을 드세요",
            ],
            Season::Winter => &[
                "따뜻한 국물 요리로 체온을 유지하세요",
                "뿌리채소로 몸을 따뜻하게 하세요",
                "비타민 C가 풍부한 귤, 한라봉을 섭취하세요",
                "굴, 과메기 등 겨울 제철 음식으로 영양을 보충하세요",
            ],
        }
    }

    pub fn exercise_tips(&self) -> &'static [&'static str] {
        match self {
            Season::Spring => &[
                "날씨가 좋은 날은 야외 활동을 늘리세요",
                "황사가 심한 날은 실내 운동을 추천합니다",
                "꽃가루 알레르기가 있다면 마스크를 착용하세요",
            ],
            Season::Summer => &[
                "햇볕이 강한 시간대(11-15시)는 피하세요",
                "충분한 수분 섭취와 함께 운동하세요",
                "실내 운동을 적극 활용하세요",
            ],
            Season::Fall => &[
                "등산, 트레킹에 최적의 계절입니다",
                "일교차가 크니 준비운동을 충분히 하세요",
                "야외 활동을 즐기기 좋은 시기입니다",
            ],
            Season::Winter => &[
                "추운 날씨에는 홈트레이닝을 추천합니다",
                "외출 시 따뜻하게 옷을 입으세요",
                "준비운동을 더 길게 하여 부상을 예방하세요",
                "날씨가 좋은 날에만 야외 운동을 하세요",
            ],
        }
    }

    /// The one-line tip closing personalised advice
    pub fn advice_tip(&self) -> &'static str {
        match self {
            Season::Spring => "봄나물로 비타민을 보충하고, 야외 활동을 늘려보세요.",
            Season::Summer => "더운 여름, 수분 섭취를 충분히 하세요. 하루 2L 이상 물을 마시세요.",
            Season::Fall => "가을은 운동하기 좋은 계절입니다. 등산이나 트레킹을 추천합니다.",
            Season::Winter => "겨울철에는 따뜻한 국물 요리와 뿌리채소로 체온을 유지하세요.",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "fall" | "autumn" => Ok(Season::Fall),
            "winter" => Ok(Season::Winter),
            _ => Err(format!("Invalid season: {}", s)),
        }
    }
}
