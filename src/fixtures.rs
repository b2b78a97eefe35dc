/// Fixture data for tests, benchmarks and the development mock client
///
/// Builders return deterministic schedules covering every game state, and the
/// JSON constants mirror real `api-web.nhle.com` responses trimmed to the
/// fields this crate reads.
use crate::api::{
    DailySchedule, Game, GameClock, GameDate, GameState, LocalizedString, PeriodDescriptor, Play,
    PlayByPlay, PlayByPlayTeam, Team,
};
use serde_json::json;

/// Scores response for 2024-01-16 with games in four states
pub const SAMPLE_SCHEDULE_JSON: &str = r#"{
  "prevDate": "2024-01-15",
  "currentDate": "2024-01-16",
  "nextDate": "2024-01-17",
  "gameWeek": [],
  "games": [
    {
      "id": 2023020690,
      "season": 20232024,
      "gameType": 2,
      "gameDate": "2024-01-16",
      "startTimeUTC": "2024-01-17T00:00:00Z",
      "gameState": "FUT",
      "gameScheduleState": "OK",
      "awayTeam": {"id": 6, "name": {"default": "Bruins"}, "abbrev": "BOS"},
      "homeTeam": {"id": 8, "name": {"default": "Canadiens"}, "abbrev": "MTL"},
      "gameCenterLink": "/gamecenter/bos-vs-mtl/2024/01/16/2023020690"
    },
    {
      "id": 2023020691,
      "season": 20232024,
      "gameType": 2,
      "gameDate": "2024-01-16",
      "startTimeUTC": "2024-01-16T23:30:00Z",
      "gameState": "LIVE",
      "awayTeam": {"id": 10, "name": {"default": "Maple Leafs"}, "abbrev": "TOR", "score": 2, "sog": 17},
      "homeTeam": {"id": 9, "name": {"default": "Senators"}, "abbrev": "OTT", "score": 1, "sog": 14},
      "clock": {"timeRemaining": "08:42", "secondsRemaining": 522, "running": true, "inIntermission": false},
      "period": 2,
      "periodDescriptor": {"number": 2, "periodType": "REG"}
    },
    {
      "id": 2023020692,
      "season": 20232024,
      "gameType": 2,
      "gameDate": "2024-01-16",
      "startTimeUTC": "2024-01-16T23:00:00Z",
      "gameState": "CRIT",
      "awayTeam": {"id": 3, "name": {"default": "Rangers"}, "abbrev": "NYR", "score": 3},
      "homeTeam": {"id": 1, "name": {"default": "Devils"}, "abbrev": "NJD", "score": 3},
      "clock": {"timeRemaining": "18:00", "secondsRemaining": 1080, "running": false, "inIntermission": true},
      "period": 3
    },
    {
      "id": 2023020680,
      "season": 20232024,
      "gameType": 2,
      "gameDate": "2024-01-16",
      "startTimeUTC": "2024-01-16T18:00:00Z",
      "gameState": "OFF",
      "awayTeam": {"id": 54, "name": {"default": "Golden Knights"}, "abbrev": "VGK", "score": 4},
      "homeTeam": {"id": 26, "name": {"default": "Kings"}, "abbrev": "LAK", "score": 2},
      "clock": {"timeRemaining": "00:00", "secondsRemaining": 0, "running": false, "inIntermission": false},
      "period": 3
    }
  ]
}"#;

/// Scores response for a date without games
pub const EMPTY_SCHEDULE_JSON: &str = r#"{
  "prevDate": "2024-01-14",
  "currentDate": "2024-01-15",
  "nextDate": "2024-01-16",
  "gameWeek": [],
  "games": []
}"#;

pub const SAMPLE_PLAY_BY_PLAY_JSON: &str = r#"{
  "id": 2023020680,
  "gameState": "OFF",
  "plays": [
    {"eventId": 102, "typeDescKey": "period-start", "periodDescriptor": {"number": 1, "periodType": "REG"}, "timeInPeriod": "00:00"},
    {"eventId": 8, "typeDescKey": "faceoff", "periodDescriptor": {"number": 1, "periodType": "REG"}, "timeInPeriod": "00:00",
     "details": {"xCoord": 0, "yCoord": 0, "zoneCode": "N"}},
    {"eventId": 151, "typeDescKey": "goal", "periodDescriptor": {"number": 1, "periodType": "REG"}, "timeInPeriod": "04:17",
     "details": {"xCoord": 78, "yCoord": -4, "scoringPlayerId": 8478403, "awayScore": 1, "homeScore": 0}}
  ]
}"#;

/// Play-by-play of a game decided in a shootout, ANA at VGK
///
/// Keeps fields this crate does not model (`rosterSpots`, `sortOrder`,
/// `situationCode`, ...) so raw dumps can be checked for them.
pub const SHOOTOUT_PLAY_BY_PLAY_JSON: &str = r#"{
  "id": 2023020700,
  "season": 20232024,
  "gameState": "OFF",
  "awayTeam": {"id": 24, "abbrev": "ANA", "score": 1},
  "homeTeam": {"id": 54, "abbrev": "VGK", "score": 2},
  "rosterSpots": [{"teamId": 54, "playerId": 8478403, "sweaterNumber": 9}],
  "plays": [
    {"eventId": 1, "sortOrder": 8, "typeCode": 520, "typeDescKey": "period-start",
     "periodDescriptor": {"number": 1, "periodType": "REG"}, "timeInPeriod": "00:00"},
    {"eventId": 11, "sortOrder": 20, "typeCode": 506, "typeDescKey": "shot-on-goal", "situationCode": "1551",
     "homeTeamDefendingSide": "right",
     "periodDescriptor": {"number": 1, "periodType": "REG"}, "timeInPeriod": "02:10",
     "details": {"xCoord": -70, "yCoord": 10, "eventOwnerTeamId": 54}},
    {"eventId": 12, "sortOrder": 31, "typeCode": 507, "typeDescKey": "missed-shot", "situationCode": "1551",
     "periodDescriptor": {"number": 1, "periodType": "REG"}, "timeInPeriod": "05:44",
     "details": {"xCoord": 80, "yCoord": -20, "eventOwnerTeamId": 24}},
    {"eventId": 13, "sortOrder": 40, "typeCode": 505, "typeDescKey": "goal", "situationCode": "1551",
     "periodDescriptor": {"number": 1, "periodType": "REG"}, "timeInPeriod": "11:02",
     "details": {"xCoord": -75, "yCoord": 5, "eventOwnerTeamId": 24, "awayScore": 1, "homeScore": 0}},
    {"eventId": 21, "sortOrder": 77, "typeCode": 508, "typeDescKey": "blocked-shot",
     "periodDescriptor": {"number": 2, "periodType": "REG"}, "timeInPeriod": "03:30",
     "details": {"xCoord": 60, "yCoord": 12, "eventOwnerTeamId": 54}},
    {"eventId": 22, "sortOrder": 90, "typeCode": 505, "typeDescKey": "goal", "situationCode": "1451",
     "periodDescriptor": {"number": 2, "periodType": "REG"}, "timeInPeriod": "14:51",
     "details": {"xCoord": 82, "yCoord": -3, "eventOwnerTeamId": 54, "awayScore": 1, "homeScore": 1}},
    {"eventId": 31, "sortOrder": 120, "typeCode": 506, "typeDescKey": "shot-on-goal",
     "periodDescriptor": {"number": 3, "periodType": "REG"}, "timeInPeriod": "19:12",
     "details": {"eventOwnerTeamId": 24}},
    {"eventId": 51, "sortOrder": 200, "typeCode": 505, "typeDescKey": "goal",
     "periodDescriptor": {"number": 5, "periodType": "SO"}, "timeInPeriod": "00:00",
     "details": {"xCoord": 75, "yCoord": 2, "eventOwnerTeamId": 54}},
    {"eventId": 52, "sortOrder": 201, "typeCode": 505, "typeDescKey": "goal",
     "periodDescriptor": {"number": 5, "periodType": "SO"}, "timeInPeriod": "00:00",
     "details": {"xCoord": -78, "yCoord": -1, "eventOwnerTeamId": 24}},
    {"eventId": 53, "sortOrder": 202, "typeCode": 507, "typeDescKey": "missed-shot",
     "periodDescriptor": {"number": 5, "periodType": "SO"}, "timeInPeriod": "00:00",
     "details": {"xCoord": 74, "yCoord": 8, "eventOwnerTeamId": 24}},
    {"eventId": 54, "sortOrder": 203, "typeCode": 505, "typeDescKey": "goal",
     "periodDescriptor": {"number": 5, "periodType": "SO"}, "timeInPeriod": "00:00",
     "details": {"xCoord": 80, "yCoord": 0, "eventOwnerTeamId": 54}}
  ]
}"#;

/// Create a schedule with one game in every state, including an unknown one
pub fn create_mock_schedule(date: GameDate) -> DailySchedule {
    let games = vec![
        create_mock_game(2024020001, "BOS", "MTL", GameState::Future),
        create_mock_game(2024020002, "TOR", "OTT", GameState::Live),
        create_mock_game(2024020003, "NYR", "NJD", GameState::Critical),
        create_mock_game(2024020004, "VGK", "LAK", GameState::Final),
        create_mock_game(2024020005, "SEA", "VAN", GameState::Off),
        create_mock_game(2024020006, "EDM", "CGY", GameState::PreGame),
        create_mock_game(2024020007, "CHI", "STL", GameState::Unknown("PPD".to_string())),
    ];

    DailySchedule {
        current_date: date.to_api_string(),
        prev_date: Some(date.add_days(-1).to_api_string()),
        next_date: Some(date.add_days(1).to_api_string()),
        games,
    }
}

/// Create a schedule of `count` finished games, long enough to scroll
pub fn create_schedule_with_games(date: GameDate, count: usize) -> DailySchedule {
    let games = (0..count)
        .map(|i| create_mock_game(2024021000 + i as i64, "BOS", "MTL", GameState::Final))
        .collect();

    DailySchedule {
        current_date: date.to_api_string(),
        prev_date: None,
        next_date: None,
        games,
    }
}

/// Helper to create a mock game
pub fn create_mock_game(id: i64, away_abbrev: &str, home_abbrev: &str, state: GameState) -> Game {
    let started = state.has_started();
    let clock = if state.is_live() {
        Some(GameClock {
            time_remaining: Some("12:34".to_string()),
            seconds_remaining: Some(754),
            running: state == GameState::Live,
            in_intermission: state == GameState::Critical,
        })
    } else {
        None
    };

    Game {
        id,
        game_state: state,
        away_team: create_mock_team(away_abbrev, if started { Some(2) } else { None }),
        home_team: create_mock_team(home_abbrev, if started { Some(3) } else { None }),
        period: if started { Some(2) } else { None },
        clock,
        start_time_utc: "2024-11-21T00:00:00Z".to_string(),
    }
}

fn create_mock_team(abbrev: &str, score: Option<i32>) -> Team {
    Team {
        id: abbrev.chars().map(|c| c as i64).sum(),
        abbrev: abbrev.to_string(),
        name: LocalizedString::from(abbrev),
        score,
    }
}

pub fn create_mock_play_by_play(game_id: i64) -> PlayByPlay {
    const AWAY_ID: i64 = 10;
    const HOME_ID: i64 = 8;

    let play = |event_id: i64, kind: &str, period: i32, time: &str| Play {
        event_id,
        type_desc_key: kind.to_string(),
        period_descriptor: Some(PeriodDescriptor {
            number: period,
            period_type: Some("REG".to_string()),
        }),
        time_in_period: Some(time.to_string()),
        details: None,
    };
    let shot = |event_id: i64, kind: &str, period: i32, time: &str, owner: i64, x: i32, y: i32| Play {
        details: Some(json!({ "xCoord": x, "yCoord": y, "eventOwnerTeamId": owner })),
        ..play(event_id, kind, period, time)
    };

    PlayByPlay {
        id: game_id,
        game_state: Some(GameState::Live),
        away_team: Some(PlayByPlayTeam { id: AWAY_ID, abbrev: "TOR".to_string() }),
        home_team: Some(PlayByPlayTeam { id: HOME_ID, abbrev: "MTL".to_string() }),
        plays: vec![
            play(1, "period-start", 1, "00:00"),
            play(2, "faceoff", 1, "00:00"),
            shot(3, "shot-on-goal", 1, "03:12", AWAY_ID, 64, -12),
            shot(4, "goal", 1, "07:45", HOME_ID, -81, 6),
            play(5, "period-end", 1, "20:00"),
            play(6, "period-start", 2, "00:00"),
            play(7, "hit", 2, "05:01"),
        ],
    }
}
