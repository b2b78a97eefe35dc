use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::PlayByPlay;
use crate::data_provider::NHLDataProvider;
use crate::formatting::format_header;
use crate::shots::ShotSummary;
use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

/// Everything the game center shows for one game
#[derive(Debug)]
pub struct GameBundle {
    pub landing: Value,
    pub boxscore: Value,
    /// Play-by-play as served; this is what gets saved
    pub raw_play_by_play: Value,
    pub play_by_play: PlayByPlay,
}

/// Fetch landing, boxscore and play-by-play concurrently
pub async fn fetch_bundle(client: &dyn NHLDataProvider, game_id: i64) -> Result<GameBundle> {
    let (landing, boxscore, raw_play_by_play) = futures::try_join!(
        client.landing(game_id),
        client.boxscore(game_id),
        client.play_by_play_json(game_id),
    )
    .with_context(|| format!("Failed to fetch game {}", game_id))?;

    let play_by_play = PlayByPlay::deserialize(&raw_play_by_play)
        .with_context(|| format!("Failed to parse play-by-play for game {}", game_id))?;

    Ok(GameBundle {
        landing,
        boxscore,
        raw_play_by_play,
        play_by_play,
    })
}

pub async fn run(client: &dyn NHLDataProvider, game_id: i64, save_dir: Option<PathBuf>) -> Result<()> {
    let bundle = fetch_bundle(client, game_id).await?;
    print!("{}", format_summary(game_id, &bundle));

    if let Some(dir) = save_dir {
        for path in save_bundle(&dir, game_id, &bundle)? {
            println!("Saved {}", path.display());
        }
    }
    Ok(())
}

pub fn format_summary(game_id: i64, bundle: &GameBundle) -> String {
    let shots = ShotSummary::from_play_by_play(&bundle.play_by_play);
    let abbrev = |side: &str, from_feed: &str| {
        if from_feed != "?" {
            return from_feed.to_string();
        }
        bundle.landing[side]["abbrev"]
            .as_str()
            .or_else(|| bundle.boxscore[side]["abbrev"].as_str())
            .unwrap_or("?")
            .to_string()
    };
    let away = abbrev("awayTeam", &shots.away.abbrev);
    let home = abbrev("homeTeam", &shots.home.abbrev);
    let state = bundle.landing["gameState"].as_str().unwrap_or("?");

    let mut output = format_header(&format!("GAME {}: {} @ {}", game_id, away, home), true);
    output.push_str(&format!("State: {}\n", state));
    output.push_str(&format!("Plays: {}\n", bundle.play_by_play.plays.len()));
    output.push('\n');
    output.push_str(&format_shot_table(&shots, &away, &home));
    output
}

/// Per-team shot counts, away column first
pub fn format_shot_table(shots: &ShotSummary, away: &str, home: &str) -> String {
    let (a, h) = (&shots.away, &shots.home);
    let mut output = shot_row("Shots", away, home);
    output.push_str(&shot_row("Attempts", a.attempts, h.attempts));
    output.push_str(&shot_row("On goal", a.on_goal, h.on_goal));
    output.push_str(&shot_row("Goals", a.goals, h.goals));
    if shots.went_to_shootout() {
        output.push_str(&shot_row("Shootout goals", a.shootout_goals, h.shootout_goals));
        let (away_final, home_final) = shots.final_score();
        output.push_str(&shot_row("Final", away_final, home_final));
    }
    output
}

fn shot_row(label: &str, away: impl Display, home: impl Display) -> String {
    format!("{:<16}{:>5}{:>5}\n", label, away, home)
}

/// Write each part as `<id>-<kind>.json`; returns the written paths
pub fn save_bundle(dir: &Path, game_id: i64, bundle: &GameBundle) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;

    let parts = [
        ("landing", &bundle.landing),
        ("boxscore", &bundle.boxscore),
        ("play-by-play", &bundle.raw_play_by_play),
    ];

    let mut written = Vec::with_capacity(parts.len());
    for (kind, value) in parts {
        let path = dir.join(format!("{}-{}.json", game_id, kind));
        let body = serde_json::to_string_pretty(value)
            .with_context(|| format!("Failed to serialize {}", kind))?;
        fs::write(&path, body)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), "Saved game data");
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestProvider;

    #[tokio::test]
    async fn test_fetch_bundle() {
        let client = TestProvider::new();
        let bundle = fetch_bundle(&client, 2023020680).await.unwrap();

        assert_eq!(bundle.landing["id"], 2023020680);
        assert_eq!(bundle.play_by_play.id, 2023020680);
        assert_eq!(bundle.raw_play_by_play["id"], 2023020680);
        assert_eq!(bundle.play_by_play.plays.len(), 11);
        assert_eq!(client.play_by_play_calls(), 1);
    }

    #[tokio::test]
    async fn test_summary() {
        let client = TestProvider::new();
        let bundle = fetch_bundle(&client, 2023020680).await.unwrap();
        let summary = format_summary(2023020680, &bundle);
        let lines: Vec<&str> = summary.lines().collect();

        assert_eq!(lines[0], "GAME 2023020680: ANA @ VGK");
        assert!(summary.contains("State: OFF\n"));
        assert!(summary.contains("Plays: 11\n"));
        assert!(lines.contains(&"Shots             ANA  VGK"));
        assert!(lines.contains(&"Attempts            3    2"));
        assert!(lines.contains(&"On goal             2    2"));
        assert!(lines.contains(&"Goals               1    1"));
        assert!(lines.contains(&"Shootout goals      1    2"));
        assert!(lines.contains(&"Final               1    2"));
    }

    #[test]
    fn test_shot_table_without_shootout() {
        let shots = ShotSummary::from_play_by_play(&crate::fixtures::create_mock_play_by_play(1));
        let table = format_shot_table(&shots, "TOR", "MTL");

        assert_eq!(table.lines().count(), 4);
        assert!(!table.contains("Shootout"));
        assert!(table.contains("Goals               0    1"));
    }

    #[tokio::test]
    async fn test_save_bundle_writes_each_part() {
        let client = TestProvider::new();
        let bundle = fetch_bundle(&client, 2023020681).await.unwrap();
        let dir = std::env::temp_dir().join(format!("nhl-scores-test-{}", std::process::id()));

        let written = save_bundle(&dir, 2023020681, &bundle).unwrap();
        assert_eq!(written.len(), 3);
        assert!(written[2].ends_with("2023020681-play-by-play.json"));

        let saved: Value = serde_json::from_str(&fs::read_to_string(&written[2]).unwrap()).unwrap();
        assert_eq!(saved["id"], 2023020681);
        assert_eq!(saved["plays"][3]["typeDescKey"], "goal");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_saved_play_by_play_keeps_unmodelled_fields() {
        let client = TestProvider::new();
        let bundle = fetch_bundle(&client, 2023020682).await.unwrap();
        let dir = std::env::temp_dir().join(format!("nhl-scores-raw-{}", std::process::id()));

        let written = save_bundle(&dir, 2023020682, &bundle).unwrap();
        let saved: Value = serde_json::from_str(&fs::read_to_string(&written[2]).unwrap()).unwrap();

        assert_eq!(saved, bundle.raw_play_by_play);
        assert_eq!(saved["homeTeam"]["abbrev"], "VGK");
        assert_eq!(saved["rosterSpots"][0]["playerId"], 8478403);
        assert_eq!(saved["plays"][1]["sortOrder"], 20);
        assert_eq!(saved["plays"][1]["situationCode"], "1551");
        assert_eq!(saved["plays"][1]["homeTeamDefendingSide"], "right");

        fs::remove_dir_all(&dir).unwrap();
    }
}
