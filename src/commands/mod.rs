pub mod game;
pub mod play_by_play;
pub mod scores;

use anyhow::{Context, Result};

use crate::api::GameDate;

/// Parse optional date string to GameDate, defaulting to today
///
/// Accepts dates in YYYY-MM-DD format. If no date is provided, returns today's date.
/// Returns an error if the date string is malformed.
pub fn parse_game_date(date: Option<String>) -> Result<GameDate> {
    if let Some(date_str) = date {
        GameDate::parse(&date_str)
            .with_context(|| format!("Invalid date format '{}'. Use YYYY-MM-DD", date_str))
    } else {
        Ok(GameDate::today())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_game_date() {
        let date = parse_game_date(Some("2024-01-15".to_string())).unwrap();
        assert_eq!(date, GameDate::from_ymd(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_parse_game_date_defaults_to_today() {
        assert_eq!(parse_game_date(None).unwrap(), GameDate::today());
    }

    #[test]
    fn test_parse_game_date_rejects_garbage() {
        let err = parse_game_date(Some("15/01/2024".to_string())).unwrap_err();
        assert!(format!("{:#}", err).contains("Use YYYY-MM-DD"));
    }
}
