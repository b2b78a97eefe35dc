use std::fmt::Write;

use crate::api::{DailySchedule, Game, GameDate, Team};
use crate::commands::parse_game_date;
use crate::data_provider::NHLDataProvider;
use crate::formatting::{format_game_status, format_header, format_score, DisplayZone, NO_GAMES_MESSAGE};
use anyhow::{Context, Result};

/// Width inside the card border
const CARD_INNER_WIDTH: usize = 34;

/// Width of the team name column
const NAME_WIDTH: usize = 25;

pub async fn run(client: &dyn NHLDataProvider, date: Option<String>, zone: &DisplayZone) -> Result<()> {
    let game_date = parse_game_date(date)?;

    let schedule = client
        .daily_schedule(&game_date)
        .await
        .context("Failed to fetch schedule")?;

    print!("{}", format_scores(&schedule, game_date, zone));
    Ok(())
}

/// Header plus one card per game, or the no-games message
pub fn format_scores(schedule: &DailySchedule, date: GameDate, zone: &DisplayZone) -> String {
    let mut output = String::new();
    output.push_str(&format_header(&format!("NHL SCORES - {}", date), true));
    output.push('\n');

    if schedule.is_empty() {
        let _ = writeln!(output, "{}", NO_GAMES_MESSAGE);
        return output;
    }

    for game in &schedule.games {
        output.push_str(&format_game_card(game, zone));
        output.push('\n');
    }
    output
}

pub fn format_game_card(game: &Game, zone: &DisplayZone) -> String {
    let mut card = String::new();
    let border = "─".repeat(CARD_INNER_WIDTH);

    let _ = writeln!(card, "┌{}┐", border);
    let _ = writeln!(card, "{}", team_row(&game.away_team));
    let _ = writeln!(card, "{}", team_row(&game.home_team));
    let _ = writeln!(
        card,
        "│ {:<width$} │",
        format_game_status(game, zone),
        width = CARD_INNER_WIDTH - 2
    );
    let _ = writeln!(card, "└{}┘", border);
    card
}

fn team_row(team: &Team) -> String {
    let name: String = team.name.default.chars().take(NAME_WIDTH - 1).collect();
    format!(
        "│ {:<4}{:<name_width$}{:>3} │",
        team.abbrev,
        name,
        format_score(team.score),
        name_width = NAME_WIDTH
    )
}
