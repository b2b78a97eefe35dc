/// Trait for providing NHL data, abstracting over the real API client and mock implementations
use async_trait::async_trait;

use crate::api::{ApiError, Client, DailySchedule, GameDate, PlayByPlay};

/// Trait for NHL data providers, implemented by both the real Client and MockClient
#[async_trait]
pub trait NHLDataProvider: Send + Sync {
    /// Get scores and schedule for a specific date
    async fn daily_schedule(&self, date: &GameDate) -> Result<DailySchedule, ApiError>;

    /// Get play-by-play events for a game
    async fn play_by_play(&self, game_id: i64) -> Result<PlayByPlay, ApiError>;

    /// Get play-by-play as raw JSON, with every field the API sent
    async fn play_by_play_json(&self, game_id: i64) -> Result<serde_json::Value, ApiError>;

    /// Get game landing data as raw JSON
    async fn landing(&self, game_id: i64) -> Result<serde_json::Value, ApiError>;

    /// Get boxscore as raw JSON
    async fn boxscore(&self, game_id: i64) -> Result<serde_json::Value, ApiError>;
}

#[async_trait]
impl NHLDataProvider for Client {
    async fn daily_schedule(&self, date: &GameDate) -> Result<DailySchedule, ApiError> {
        Client::daily_schedule(self, date).await
    }

    async fn play_by_play(&self, game_id: i64) -> Result<PlayByPlay, ApiError> {
        Client::play_by_play(self, game_id).await
    }

    async fn play_by_play_json(&self, game_id: i64) -> Result<serde_json::Value, ApiError> {
        Client::play_by_play_json(self, game_id).await
    }

    async fn landing(&self, game_id: i64) -> Result<serde_json::Value, ApiError> {
        Client::landing(self, game_id).await
    }

    async fn boxscore(&self, game_id: i64) -> Result<serde_json::Value, ApiError> {
        Client::boxscore(self, game_id).await
    }
}
