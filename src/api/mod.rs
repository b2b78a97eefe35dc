//! Client for the public NHL web API (`api-web.nhle.com`).

mod date;
mod types;

pub use date::GameDate;
pub use types::{
    DailySchedule, Game, GameClock, GameState, LocalizedString, PeriodDescriptor, Play,
    PlayByPlay, PlayByPlayTeam, Team,
};

use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument};

/// Default base URL of the NHL web API
pub const DEFAULT_BASE_URL: &str = "https://api-web.nhle.com/v1";

/// Default per-request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 10;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to parse response from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new() -> Result<Self, ApiError> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(ApiError::Build)?;
        Ok(Client {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Scores and schedule for one date
    pub async fn daily_schedule(&self, date: &GameDate) -> Result<DailySchedule, ApiError> {
        self.get_json(&format!("score/{}", date.to_api_string())).await
    }

    pub async fn play_by_play(&self, game_id: i64) -> Result<PlayByPlay, ApiError> {
        self.get_json(&format!("gamecenter/{}/play-by-play", game_id)).await
    }

    /// Play-by-play exactly as served, for dumps that must not lose fields
    pub async fn play_by_play_json(&self, game_id: i64) -> Result<serde_json::Value, ApiError> {
        self.get_json(&format!("gamecenter/{}/play-by-play", game_id)).await
    }

    pub async fn landing(&self, game_id: i64) -> Result<serde_json::Value, ApiError> {
        self.get_json(&format!("gamecenter/{}/landing", game_id)).await
    }

    pub async fn boxscore(&self, game_id: i64) -> Result<serde_json::Value, ApiError> {
        self.get_json(&format!("gamecenter/{}/boxscore", game_id)).await
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    #[instrument(level = "debug", skip(self))]
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url_for(path);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| ApiError::Request { url: url.clone(), source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { url, status: status.as_u16() });
        }

        let body = response
            .text()
            .await
            .map_err(|source| ApiError::Request { url: url.clone(), source })?;
        debug!(bytes = body.len(), "Received response body");

        parse_body(&url, &body)
    }
}

/// Parse a schedule response body without touching the network
pub fn parse_schedule(body: &str) -> Result<DailySchedule, ApiError> {
    parse_body("<inline>", body)
}

pub fn parse_play_by_play(body: &str) -> Result<PlayByPlay, ApiError> {
    parse_body("<inline>", body)
}

fn parse_body<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|source| ApiError::Parse {
        url: url.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_parse_sample_schedule() {
        let schedule = parse_schedule(fixtures::SAMPLE_SCHEDULE_JSON).unwrap();
        assert_eq!(schedule.current_date, "2024-01-16");
        assert_eq!(schedule.prev_date.as_deref(), Some("2024-01-15"));
        assert_eq!(schedule.games.len(), 4);

        let live = &schedule.games[1];
        assert_eq!(live.game_state, GameState::Live);
        assert_eq!(live.away_team.abbrev, "TOR");
        assert_eq!(live.away_team.name.default, "Maple Leafs");
        assert_eq!(live.home_team.score, Some(1));
        assert_eq!(live.clock.as_ref().unwrap().time_remaining.as_deref(), Some("08:42"));

        let future = &schedule.games[0];
        assert_eq!(future.away_team.score, None);
        assert_eq!(future.start_time_utc, "2024-01-17T00:00:00Z");
    }

    #[test]
    fn test_parse_empty_schedule() {
        let schedule = parse_schedule(fixtures::EMPTY_SCHEDULE_JSON).unwrap();
        assert_eq!(schedule.current_date, "2024-01-15");
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_parse_error_names_url() {
        let err = parse_schedule("{not json").unwrap_err();
        assert!(matches!(err, ApiError::Parse { .. }));
        assert!(err.to_string().contains("<inline>"));
    }

    #[test]
    fn test_parse_play_by_play() {
        let pbp = parse_play_by_play(fixtures::SAMPLE_PLAY_BY_PLAY_JSON).unwrap();
        assert_eq!(pbp.id, 2023020680);
        assert_eq!(pbp.plays.len(), 3);
        assert_eq!(pbp.plays[2].type_desc_key, "goal");
    }

    #[test]
    fn test_url_for_trims_trailing_slash() {
        let client = Client::with_config(ClientConfig {
            base_url: "http://localhost:8080/v1/".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(client.url_for("score/2024-01-15"), "http://localhost:8080/v1/score/2024-01-15");
    }
}
