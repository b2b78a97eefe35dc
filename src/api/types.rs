use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Localized text as the API returns it (`{"default": "..."}`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LocalizedString {
    #[serde(default)]
    pub default: String,
}

impl From<&str> for LocalizedString {
    fn from(s: &str) -> Self {
        LocalizedString { default: s.to_string() }
    }
}

/// Lifecycle stage of a game
///
/// Unrecognized codes are kept verbatim in `Unknown` so that a new state
/// introduced upstream never breaks parsing of the whole schedule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum GameState {
    PreGame,
    Future,
    Live,
    Critical,
    Final,
    Off,
    Unknown(String),
}

impl From<String> for GameState {
    fn from(code: String) -> Self {
        match code.as_str() {
            "PRE" => GameState::PreGame,
            "FUT" => GameState::Future,
            "LIVE" => GameState::Live,
            "CRIT" => GameState::Critical,
            "FINAL" => GameState::Final,
            "OFF" => GameState::Off,
            _ => GameState::Unknown(code),
        }
    }
}

impl From<GameState> for String {
    fn from(state: GameState) -> Self {
        state.code().to_string()
    }
}

impl From<&str> for GameState {
    fn from(code: &str) -> Self {
        GameState::from(code.to_string())
    }
}

impl GameState {
    /// Raw API code for this state
    pub fn code(&self) -> &str {
        match self {
            GameState::PreGame => "PRE",
            GameState::Future => "FUT",
            GameState::Live => "LIVE",
            GameState::Critical => "CRIT",
            GameState::Final => "FINAL",
            GameState::Off => "OFF",
            GameState::Unknown(code) => code,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, GameState::Live | GameState::Critical)
    }

    pub fn is_scheduled(&self) -> bool {
        matches!(self, GameState::Future | GameState::PreGame)
    }

    pub fn is_final(&self) -> bool {
        matches!(self, GameState::Final | GameState::Off)
    }

    pub fn has_started(&self) -> bool {
        self.is_live() || self.is_final()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameClock {
    #[serde(default)]
    pub time_remaining: Option<String>,
    #[serde(default)]
    pub seconds_remaining: Option<i32>,
    #[serde(default)]
    pub running: bool,
    #[serde(default)]
    pub in_intermission: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(default)]
    pub id: i64,
    pub abbrev: String,
    #[serde(default)]
    pub name: LocalizedString,
    #[serde(default)]
    pub score: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: i64,
    pub game_state: GameState,
    pub away_team: Team,
    pub home_team: Team,
    #[serde(default)]
    pub period: Option<i32>,
    #[serde(default, deserialize_with = "lenient_clock")]
    pub clock: Option<GameClock>,
    #[serde(rename = "startTimeUTC", default)]
    pub start_time_utc: String,
}

/// Games for one calendar date plus navigation metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySchedule {
    #[serde(default)]
    pub current_date: String,
    #[serde(default)]
    pub prev_date: Option<String>,
    #[serde(default)]
    pub next_date: Option<String>,
    #[serde(default)]
    pub games: Vec<Game>,
}

impl DailySchedule {
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Play {
    pub event_id: i64,
    #[serde(default)]
    pub type_desc_key: String,
    #[serde(default)]
    pub period_descriptor: Option<PeriodDescriptor>,
    #[serde(default)]
    pub time_in_period: Option<String>,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

impl Play {
    pub fn period(&self) -> Option<i32> {
        self.period_descriptor.as_ref().map(|p| p.number)
    }

    pub fn period_type(&self) -> Option<&str> {
        self.period_descriptor.as_ref()?.period_type.as_deref()
    }

    /// Integer field of `details`, if present
    pub fn detail_i64(&self, key: &str) -> Option<i64> {
        self.details.as_ref()?.get(key)?.as_i64()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodDescriptor {
    pub number: i32,
    #[serde(default)]
    pub period_type: Option<String>,
}

/// Team header of a play-by-play feed; plays refer to it by id
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayByPlayTeam {
    pub id: i64,
    #[serde(default)]
    pub abbrev: String,
}

/// Play-by-play feed for one game; plays stay mostly opaque
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayByPlay {
    pub id: i64,
    #[serde(default)]
    pub game_state: Option<GameState>,
    #[serde(default)]
    pub away_team: Option<PlayByPlayTeam>,
    #[serde(default)]
    pub home_team: Option<PlayByPlayTeam>,
    #[serde(default)]
    pub plays: Vec<Play>,
}

/// A clock object that fails to parse is treated as absent
fn lenient_clock<'de, D>(deserializer: D) -> Result<Option<GameClock>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_state_known_codes() {
        for code in ["PRE", "FUT", "LIVE", "CRIT", "FINAL", "OFF"] {
            let state = GameState::from(code);
            assert!(!matches!(state, GameState::Unknown(_)), "{} should be known", code);
            assert_eq!(state.code(), code);
        }
    }

    #[test]
    fn test_game_state_unknown_kept_verbatim() {
        let state: GameState = serde_json::from_str("\"PPD\"").unwrap();
        assert_eq!(state, GameState::Unknown("PPD".to_string()));
        assert_eq!(state.to_string(), "PPD");
        assert!(!state.has_started());
    }

    #[test]
    fn test_malformed_clock_becomes_none() {
        let json = r#"{
            "id": 1,
            "gameState": "LIVE",
            "awayTeam": {"abbrev": "BOS"},
            "homeTeam": {"abbrev": "MTL"},
            "period": 2,
            "clock": {"timeRemaining": 42, "inIntermission": "sometimes"}
        }"#;
        let game: Game = serde_json::from_str(json).unwrap();
        assert_eq!(game.clock, None);
        assert_eq!(game.period, Some(2));
    }

    #[test]
    fn test_clock_missing_fields_default() {
        let json = r#"{
            "id": 1,
            "gameState": "CRIT",
            "awayTeam": {"abbrev": "BOS"},
            "homeTeam": {"abbrev": "MTL"},
            "clock": {"timeRemaining": "04:12"}
        }"#;
        let game: Game = serde_json::from_str(json).unwrap();
        let clock = game.clock.unwrap();
        assert_eq!(clock.time_remaining.as_deref(), Some("04:12"));
        assert!(!clock.in_intermission);
    }

    #[test]
    fn test_play_period_from_descriptor() {
        let json = r#"{
            "eventId": 7,
            "typeDescKey": "goal",
            "periodDescriptor": {"number": 3, "periodType": "REG"},
            "timeInPeriod": "12:01",
            "details": {"scoringPlayerId": 8478402}
        }"#;
        let play: Play = serde_json::from_str(json).unwrap();
        assert_eq!(play.period(), Some(3));
        assert_eq!(play.type_desc_key, "goal");
        assert!(play.details.is_some());
    }
}
