use chrono::{DateTime, Local, Utc};
use chrono_tz::Tz;
use std::time::SystemTime;
use tracing::{debug, warn};

use crate::api::{Game, GameClock, GameState, Play};

/// Shown instead of the list when a date has no games
pub const NO_GAMES_MESSAGE: &str = "No games scheduled";

/// Shown instead of the list while the first fetch is in flight
pub const LOADING_MESSAGE: &str = "Loading games...";

/// Generic message for any schedule fetch failure
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load games";

/// Start time format, e.g. `7:00 PM EST`
const START_TIME_FORMAT: &str = "%-I:%M %p %Z";

const GAMECENTER_URL: &str = "https://www.nhl.com/gamecenter";

/// Time zone the viewer reads start times in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayZone {
    /// IANA zone, rendered with its abbreviation (`EST`, `CET`)
    Named(Tz),
    /// System local zone; chrono can only render it as an offset
    Local,
}

impl DisplayZone {
    pub fn named(name: &str) -> Option<Self> {
        name.trim().parse::<Tz>().ok().map(DisplayZone::Named)
    }

    /// Resolve from the CLI flag, then the config file, then `TZ`
    pub fn resolve(cli: Option<&str>, config: Option<&str>) -> Self {
        let env = std::env::var("TZ").ok();
        Self::first_valid(&[cli, config, env.as_deref()])
    }

    /// First candidate that names a known zone, else the system local zone
    pub fn first_valid(candidates: &[Option<&str>]) -> Self {
        candidates
            .iter()
            .flatten()
            .find_map(|name| {
                let zone = Self::named(name);
                if zone.is_none() {
                    debug!(zone = %name, "Ignoring unknown time zone name");
                }
                zone
            })
            .unwrap_or(DisplayZone::Local)
    }

    pub fn format(&self, time: DateTime<Utc>, fmt: &str) -> String {
        match self {
            DisplayZone::Named(tz) => time.with_timezone(tz).format(fmt).to_string(),
            DisplayZone::Local => time.with_timezone(&Local).format(fmt).to_string(),
        }
    }

    pub fn name(&self) -> String {
        match self {
            DisplayZone::Named(tz) => tz.name().to_string(),
            DisplayZone::Local => "local".to_string(),
        }
    }
}

/// Short status line for a game card
///
/// Total over `GameState`: unknown states print their raw code and log a
/// warning, missing clock data drops the time-remaining part.
pub fn format_game_status(game: &Game, zone: &DisplayZone) -> String {
    match &game.game_state {
        GameState::Live | GameState::Critical => format_live_status(game.period, game.clock.as_ref()),
        GameState::Future | GameState::PreGame => format_start_time(&game.start_time_utc, zone),
        GameState::Final | GameState::Off => "Final".to_string(),
        GameState::Unknown(code) => {
            warn!(game_id = game.id, state = %code, "Unexpected game state");
            code.clone()
        }
    }
}

fn format_live_status(period: Option<i32>, clock: Option<&GameClock>) -> String {
    let in_intermission = clock.map(|c| c.in_intermission).unwrap_or(false);
    let prefix = match (in_intermission, period) {
        (true, Some(p)) => format!("INT{}", p),
        (true, None) => "INT".to_string(),
        (false, Some(p)) => format!("Period {}", p),
        (false, None) => "Period".to_string(),
    };

    let remaining = clock
        .and_then(|c| c.time_remaining.as_deref())
        .map(str::trim)
        .filter(|t| !t.is_empty());

    match remaining {
        Some(time) => format!("{} - {}", prefix, time),
        None => prefix,
    }
}

/// Format an ISO-8601 start time in the display zone
pub fn format_start_time(start_time_utc: &str, zone: &DisplayZone) -> String {
    match DateTime::parse_from_rfc3339(start_time_utc) {
        Ok(start) => zone.format(start.with_timezone(&Utc), START_TIME_FORMAT),
        Err(e) => {
            warn!(start_time = %start_time_utc, error = %e, "Unparsable game start time");
            start_time_utc.to_string()
        }
    }
}

/// Score column text, `-` until the game has a score
pub fn format_score(score: Option<i32>) -> String {
    score.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string())
}

/// NHL.com game-center page for a game
pub fn gamecenter_url(game_id: i64) -> String {
    format!("{}/{}", GAMECENTER_URL, game_id)
}

/// Format the refresh time using the configured strftime format
pub fn format_refresh_time(time: SystemTime, time_format: &str) -> String {
    let datetime: DateTime<Local> = time.into();
    datetime.format(time_format).to_string()
}

/// One play-by-play row, e.g. `P1 07:45  goal`
pub fn format_play(play: &Play) -> String {
    let period = play
        .period()
        .map(|p| p.to_string())
        .unwrap_or_else(|| "-".to_string());
    let time = play.time_in_period.as_deref().unwrap_or("--:--");
    format!("P{} {:>5}  {}", period, time, play.type_desc_key)
}

/// Format a header with text and underline
///
/// `double_line` selects `═` instead of `─` for the separator.
pub fn format_header(text: &str, double_line: bool) -> String {
    let separator = if double_line { "═" } else { "─" };
    format!("{}\n{}\n", text, separator.repeat(text.chars().count()))
}
