use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nhl_scores::api::{parse_schedule, GameDate};
use nhl_scores::commands::scores::format_scores;
use nhl_scores::fixtures::{create_mock_schedule, SAMPLE_SCHEDULE_JSON};
use nhl_scores::formatting::{format_game_status, DisplayZone};
use nhl_scores::tui::game_card_lines;
use ratatui::style::Color;

fn zone() -> DisplayZone {
    DisplayZone::Named(chrono_tz::America::New_York)
}

/// Benchmark the status line for each kind of game
fn bench_game_status(c: &mut Criterion) {
    let schedule = create_mock_schedule(GameDate::from_ymd(2024, 11, 20).unwrap_or_else(GameDate::today));
    let zone = zone();

    let mut group = c.benchmark_group("game_status");

    group.bench_function("all_states", |b| {
        b.iter(|| {
            for game in &schedule.games {
                black_box(format_game_status(black_box(game), &zone));
            }
        });
    });

    group.bench_function("scheduled_start_time", |b| {
        let future = schedule
            .games
            .iter()
            .find(|g| g.game_state.is_scheduled())
            .unwrap_or(&schedule.games[0]);
        b.iter(|| black_box(format_game_status(black_box(future), &zone)));
    });

    group.finish();
}

/// Benchmark parsing a scores response
fn bench_parse_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("sample_schedule", |b| {
        b.iter(|| black_box(parse_schedule(black_box(SAMPLE_SCHEDULE_JSON))));
    });

    group.finish();
}

/// Benchmark building everything a refresh redraws
fn bench_render_inputs(c: &mut Criterion) {
    let date = GameDate::from_ymd(2024, 11, 20).unwrap_or_else(GameDate::today);
    let schedule = create_mock_schedule(date);
    let zone = zone();

    let mut group = c.benchmark_group("render_inputs");

    group.bench_function("card_lines", |b| {
        b.iter(|| {
            for game in &schedule.games {
                black_box(game_card_lines(game, false, &zone, Color::Yellow));
            }
        });
    });

    group.bench_function("cli_scores", |b| {
        b.iter(|| black_box(format_scores(&schedule, date, &zone)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_game_status,
    bench_parse_schedule,
    bench_render_inputs
);
criterion_main!(benches);
