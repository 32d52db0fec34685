/// Shared types used across the application
///
/// These mirror the JSON week document consumed by the games view. Field
/// names follow the document's camelCase keys; everything except
/// `currentWeek` is optional so that partial documents still load.
use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Games bucketed by day label ("Monday" ... "Sunday")
pub type DayMap<T> = HashMap<String, Vec<T>>;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRef {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

impl TeamRef {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    #[serde(default)]
    pub winner: String,
    /// Model-reported certainty, 0-100
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub spread: Option<f64>,
    #[serde(default)]
    pub over_under: Option<f64>,
}

impl Prediction {
    /// The scraper emits `{"winner": "TBD", "confidence": 0}` for games the model has not scored yet
    pub fn is_pending(&self) -> bool {
        self.winner.is_empty() || self.winner == "TBD"
    }

    pub fn confidence_pct(&self) -> u8 {
        self.confidence.clamp(0.0, 100.0).round() as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Scheduled,
    Live,
    Final,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GameStatus::Scheduled => "Scheduled",
            GameStatus::Live => "Live",
            GameStatus::Final => "Final",
            GameStatus::Unknown => "Unknown",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: u32,
    pub home_team: TeamRef,
    pub away_team: TeamRef,
    /// Raw start time as published, e.g. "7:30p"
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub prediction: Option<Prediction>,
    #[serde(default)]
    pub game_status: GameStatus,
}

/// A finished game together with what the model said about it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    pub id: u32,
    pub home_team: TeamRef,
    pub away_team: TeamRef,
    #[serde(default)]
    pub date: Option<String>,
    pub prediction: String,
    pub actual: String,
    pub correct: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekMetadata {
    #[serde(default)]
    pub week_start_date: Option<NaiveDate>,
    #[serde(default)]
    pub week_end_date: Option<NaiveDate>,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub total_games: Option<usize>,
    #[serde(default)]
    pub data_source: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekDocument {
    #[serde(default)]
    pub metadata: WeekMetadata,
    #[serde(default)]
    pub week_dates: Option<Vec<NaiveDate>>,
    #[serde(default)]
    pub ordered_days: Option<Vec<String>>,
    #[serde(default)]
    pub current_week: DayMap<Game>,
    #[serde(default)]
    pub last_week: DayMap<GameResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRAPED: &str = r#"{
        "currentWeek": {
            "Tuesday": [
                {
                    "id": 1,
                    "homeTeam": {"name": "Lakers", "abbreviation": "LAL", "city": "Los Angeles"},
                    "awayTeam": {"name": "Warriors", "abbreviation": "GSW", "city": "Golden State"},
                    "time": "10:00p",
                    "venue": "Crypto.com Arena",
                    "date": "2025-10-21",
                    "prediction": {"winner": "TBD", "confidence": 0, "spread": null, "overUnder": null},
                    "gameStatus": "scheduled"
                }
            ],
            "Wednesday": []
        },
        "metadata": {
            "lastUpdated": "2025-10-20T08:00:00-04:00",
            "weekStartDate": "2025-10-21",
            "weekEndDate": "2025-10-27",
            "totalGames": 1,
            "dataSource": "Basketball-Reference (parsed)",
            "version": "1.0"
        }
    }"#;

    #[test]
    fn test_deserialize_scraped_document() {
        let doc: WeekDocument = serde_json::from_str(SCRAPED).unwrap();
        assert_eq!(
            doc.metadata.week_start_date,
            NaiveDate::from_ymd_opt(2025, 10, 21)
        );
        assert_eq!(doc.metadata.total_games, Some(1));
        assert!(doc.week_dates.is_none());
        assert!(doc.last_week.is_empty());

        let game = &doc.current_week["Tuesday"][0];
        assert_eq!(game.home_team.name, "Lakers");
        assert_eq!(game.away_team.abbreviation.as_deref(), Some("GSW"));
        assert_eq!(game.time.as_deref(), Some("10:00p"));
        assert_eq!(game.game_status, GameStatus::Scheduled);
        assert!(game.prediction.as_ref().unwrap().is_pending());
        assert!(doc.current_week["Wednesday"].is_empty());
    }

    #[test]
    fn test_unknown_status_is_tolerated() {
        let json = r#"{"id": 3, "homeTeam": {"name": "Heat"}, "awayTeam": {"name": "Magic"}, "gameStatus": "postponed"}"#;
        let game: Game = serde_json::from_str(json).unwrap();
        assert_eq!(game.game_status, GameStatus::Unknown);
        assert!(game.time.is_none());
        assert!(game.prediction.is_none());
    }

    #[test]
    fn test_missing_current_week_defaults_to_empty() {
        let doc: WeekDocument = serde_json::from_str(r#"{"metadata": {}}"#).unwrap();
        assert!(doc.current_week.is_empty());
        assert!(doc.metadata.week_start_date.is_none());
    }

    #[test]
    fn test_confidence_pct_is_clamped() {
        let p = Prediction { winner: "Celtics".into(), confidence: 104.2, ..Default::default() };
        assert_eq!(p.confidence_pct(), 100);
        assert!(!p.is_pending());
        let p = Prediction { winner: "Celtics".into(), confidence: 61.6, ..Default::default() };
        assert_eq!(p.confidence_pct(), 62);
    }
}
