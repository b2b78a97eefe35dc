//! Shot events pulled out of a play-by-play feed.
//!
//! Shots, missed shots and goals are attributed to a side through the
//! play's `eventOwnerTeamId`. Their rink coordinates are normalized so the
//! home team always attacks +x and the away team -x, whichever end they
//! shot at in that period. Shootout attempts are not shots: only their
//! goals are counted, separately, and the side with more of them gets one
//! goal added to its final score.

use tracing::debug;

use crate::api::{Play, PlayByPlay, PlayByPlayTeam};

const SHOOTOUT_PERIOD_TYPES: [&str; 2] = ["SO", "SHOOTOUT"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotKind {
    Goal,
    OnGoal,
    Missed,
}

impl ShotKind {
    fn from_type_key(key: &str) -> Option<Self> {
        match key {
            "goal" => Some(ShotKind::Goal),
            "shot-on-goal" => Some(ShotKind::OnGoal),
            "missed-shot" => Some(ShotKind::Missed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Away,
    Home,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shot {
    pub event_id: i64,
    pub side: Side,
    pub kind: ShotKind,
    pub period: Option<i32>,
    pub time_in_period: Option<String>,
    /// Coordinates as reported by the feed
    pub coords: Option<(i32, i32)>,
    /// Coordinates with home attacking +x and away attacking -x
    pub chart_coords: Option<(i32, i32)>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamShots {
    pub abbrev: String,
    pub attempts: u32,
    pub on_goal: u32,
    pub goals: u32,
    pub shootout_goals: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShotSummary {
    pub away: TeamShots,
    pub home: TeamShots,
    /// Non-shootout shots in feed order
    pub shots: Vec<Shot>,
}

impl ShotSummary {
    pub fn from_play_by_play(pbp: &PlayByPlay) -> Self {
        let mut summary = ShotSummary {
            away: TeamShots {
                abbrev: team_abbrev(pbp.away_team.as_ref()),
                ..TeamShots::default()
            },
            home: TeamShots {
                abbrev: team_abbrev(pbp.home_team.as_ref()),
                ..TeamShots::default()
            },
            shots: Vec::new(),
        };

        for play in &pbp.plays {
            let Some(kind) = ShotKind::from_type_key(&play.type_desc_key) else {
                continue;
            };
            let Some(side) = owner_side(pbp, play) else {
                debug!(game_id = pbp.id, event_id = play.event_id, "Shot without a known owner");
                continue;
            };
            summary.record(play, side, kind);
        }
        summary
    }

    fn record(&mut self, play: &Play, side: Side, kind: ShotKind) {
        let team = match side {
            Side::Away => &mut self.away,
            Side::Home => &mut self.home,
        };

        if is_shootout(play) {
            if kind == ShotKind::Goal {
                team.shootout_goals += 1;
            }
            return;
        }

        team.attempts += 1;
        if kind != ShotKind::Missed {
            team.on_goal += 1;
        }
        if kind == ShotKind::Goal {
            team.goals += 1;
        }

        let coords = play
            .detail_i64("xCoord")
            .zip(play.detail_i64("yCoord"))
            .and_then(|(x, y)| Some((i32::try_from(x).ok()?, i32::try_from(y).ok()?)));
        self.shots.push(Shot {
            event_id: play.event_id,
            side,
            kind,
            period: play.period(),
            time_in_period: play.time_in_period.clone(),
            coords,
            chart_coords: coords.map(|(x, y)| normalize(x, y, side)),
        });
    }

    /// Final (away, home) score; the shootout winner gets one goal
    pub fn final_score(&self) -> (u32, u32) {
        let (away, home) = (self.away.goals, self.home.goals);
        match self.away.shootout_goals.cmp(&self.home.shootout_goals) {
            std::cmp::Ordering::Greater => (away + 1, home),
            std::cmp::Ordering::Less => (away, home + 1),
            std::cmp::Ordering::Equal => (away, home),
        }
    }

    pub fn went_to_shootout(&self) -> bool {
        self.away.shootout_goals + self.home.shootout_goals > 0
    }
}

/// Flip a location so each side always shoots at the same end
pub fn normalize(x: i32, y: i32, side: Side) -> (i32, i32) {
    match side {
        Side::Home if x < 0 => (-x, -y),
        Side::Away if x > 0 => (-x, -y),
        _ => (x, y),
    }
}

pub fn is_shootout(play: &Play) -> bool {
    play.period_type()
        .is_some_and(|t| SHOOTOUT_PERIOD_TYPES.contains(&t))
}

fn owner_side(pbp: &PlayByPlay, play: &Play) -> Option<Side> {
    let owner = play.detail_i64("eventOwnerTeamId")?;
    if pbp.home_team.as_ref().is_some_and(|t| t.id == owner) {
        Some(Side::Home)
    } else if pbp.away_team.as_ref().is_some_and(|t| t.id == owner) {
        Some(Side::Away)
    } else {
        None
    }
}

fn team_abbrev(team: Option<&PlayByPlayTeam>) -> String {
    team.map(|t| t.abbrev.clone())
        .filter(|a| !a.is_empty())
        .unwrap_or_else(|| "?".to_string())
}
