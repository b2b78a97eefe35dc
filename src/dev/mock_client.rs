/// Mock NHL API client for development and testing
use crate::data_provider::NHLDataProvider;
use async_trait::async_trait;
use tracing::info;

use crate::api::{ApiError, DailySchedule, GameDate, PlayByPlay};
use crate::fixtures;

/// Mock client that returns fixture data instead of making real API calls
#[derive(Debug, Default)]
pub struct MockClient;

impl MockClient {
    /// Create a new mock client
    pub fn new() -> Self {
        info!("Creating MockClient for development mode");
        Self
    }
}

#[async_trait]
impl NHLDataProvider for MockClient {
    async fn daily_schedule(&self, date: &GameDate) -> Result<DailySchedule, ApiError> {
        info!("MockClient: Returning mock schedule for date: {}", date);
        Ok(fixtures::create_mock_schedule(*date))
    }

    async fn play_by_play(&self, game_id: i64) -> Result<PlayByPlay, ApiError> {
        info!("MockClient: Returning mock play-by-play for game {}", game_id);
        Ok(fixtures::create_mock_play_by_play(game_id))
    }

    async fn play_by_play_json(&self, game_id: i64) -> Result<serde_json::Value, ApiError> {
        info!("MockClient: Returning raw mock play-by-play for game {}", game_id);
        let mut raw: serde_json::Value = serde_json::from_str(fixtures::SHOOTOUT_PLAY_BY_PLAY_JSON)
            .map_err(|source| ApiError::Parse {
                url: "mock://play-by-play".to_string(),
                source,
            })?;
        raw["id"] = serde_json::json!(game_id);
        Ok(raw)
    }

    async fn landing(&self, game_id: i64) -> Result<serde_json::Value, ApiError> {
        info!("MockClient: Returning mock landing for game {}", game_id);
        Ok(serde_json::json!({
            "id": game_id,
            "gameState": "LIVE",
            "awayTeam": { "abbrev": "TOR" },
            "homeTeam": { "abbrev": "MTL" },
        }))
    }

    async fn boxscore(&self, game_id: i64) -> Result<serde_json::Value, ApiError> {
        info!("MockClient: Returning mock boxscore for game {}", game_id);
        Ok(serde_json::json!({
            "id": game_id,
            "awayTeam": { "abbrev": "TOR", "score": 2 },
            "homeTeam": { "abbrev": "MTL", "score": 3 },
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_schedule_covers_every_state() {
        let client = MockClient::new();
        let date = GameDate::from_ymd(2024, 11, 20).unwrap();
        let schedule = client.daily_schedule(&date).await.unwrap();

        assert_eq!(schedule.current_date, "2024-11-20");
        assert!(schedule.games.iter().any(|g| g.game_state.is_live()));
        assert!(schedule.games.iter().any(|g| g.game_state.is_final()));
        assert!(schedule.games.iter().any(|g| g.game_state.is_scheduled()));
    }

    #[tokio::test]
    async fn test_game_endpoints() {
        let client = MockClient::new();
        assert_eq!(client.landing(7).await.unwrap()["id"], 7);
        assert_eq!(client.boxscore(7).await.unwrap()["homeTeam"]["score"], 3);
        assert_eq!(client.play_by_play(7).await.unwrap().id, 7);

        let raw = client.play_by_play_json(7).await.unwrap();
        assert_eq!(raw["id"], 7);
        assert_eq!(raw["homeTeam"]["abbrev"], "VGK");
    }
}
