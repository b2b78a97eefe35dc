use crate::api::PlayByPlay;
use crate::cache::fetch_play_by_play_cached;
use crate::data_provider::NHLDataProvider;
use crate::formatting::{format_header, format_play};
use anyhow::{Context, Result};

pub async fn run(client: &dyn NHLDataProvider, game_id: i64, limit: Option<usize>) -> Result<()> {
    let pbp = fetch_play_by_play_cached(client, game_id)
        .await
        .with_context(|| format!("Failed to fetch play-by-play for game {}", game_id))?;

    print!("{}", format_play_by_play(&pbp, limit));
    Ok(())
}

/// Play list, keeping only the last `limit` plays when given
pub fn format_play_by_play(pbp: &PlayByPlay, limit: Option<usize>) -> String {
    let state = pbp
        .game_state
        .as_ref()
        .map(|s| s.code().to_string())
        .unwrap_or_else(|| "?".to_string());

    let mut output = format_header(&format!("GAME {} ({})", pbp.id, state), false);
    if pbp.plays.is_empty() {
        output.push_str("No plays yet\n");
        return output;
    }

    let skip = limit.map_or(0, |n| pbp.plays.len().saturating_sub(n));
    for play in pbp.plays.iter().skip(skip) {
        output.push_str(&format_play(play));
        output.push('\n');
    }
    output
}
