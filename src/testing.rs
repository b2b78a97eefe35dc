//! General test utilities.
//!
//! `TestProvider` is an in-memory `NHLDataProvider` that counts calls and can
//! delay or fail them, so refresh timing can be checked under paused tokio time.

use async_trait::async_trait;
use ratatui::buffer::Buffer;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::fmt::MakeWriter;

use crate::api::{ApiError, DailySchedule, GameDate, PlayByPlay};
use crate::data_provider::NHLDataProvider;
use crate::fixtures;

/// Constant for general rendering width
pub const RENDER_WIDTH: u16 = 80;

#[derive(Default)]
pub struct TestProvider {
    schedule_calls: AtomicUsize,
    play_by_play_calls: AtomicUsize,
    delays: Vec<Duration>,
    fail: bool,
    game_count: Option<usize>,
}

impl TestProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every schedule request fails with HTTP 503
    pub fn failing() -> Self {
        TestProvider { fail: true, ..Default::default() }
    }

    /// Schedule request `n` sleeps for `delays[n]` before answering
    pub fn with_delays(delays: Vec<Duration>) -> Self {
        TestProvider { delays, ..Default::default() }
    }

    /// Answer every request with this many games (default: call number + 1)
    pub fn with_game_count(mut self, count: usize) -> Self {
        self.game_count = Some(count);
        self
    }

    pub fn schedule_calls(&self) -> usize {
        self.schedule_calls.load(Ordering::SeqCst)
    }

    pub fn play_by_play_calls(&self) -> usize {
        self.play_by_play_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NHLDataProvider for TestProvider {
    async fn daily_schedule(&self, date: &GameDate) -> Result<DailySchedule, ApiError> {
        let call = self.schedule_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delays.get(call) {
            tokio::time::sleep(*delay).await;
        }
        if self.fail {
            return Err(ApiError::Status {
                url: format!("test://score/{}", date),
                status: 503,
            });
        }
        let count = self.game_count.unwrap_or(call + 1);
        Ok(fixtures::create_schedule_with_games(*date, count))
    }

    async fn play_by_play(&self, game_id: i64) -> Result<PlayByPlay, ApiError> {
        self.play_by_play_calls.fetch_add(1, Ordering::SeqCst);
        Ok(fixtures::create_mock_play_by_play(game_id))
    }

    async fn play_by_play_json(&self, game_id: i64) -> Result<serde_json::Value, ApiError> {
        self.play_by_play_calls.fetch_add(1, Ordering::SeqCst);
        let mut raw: serde_json::Value =
            serde_json::from_str(fixtures::SHOOTOUT_PLAY_BY_PLAY_JSON).unwrap();
        raw["id"] = serde_json::json!(game_id);
        Ok(raw)
    }

    async fn landing(&self, game_id: i64) -> Result<serde_json::Value, ApiError> {
        Ok(serde_json::json!({ "id": game_id, "gameState": "OFF" }))
    }

    async fn boxscore(&self, game_id: i64) -> Result<serde_json::Value, ApiError> {
        Ok(serde_json::json!({ "id": game_id, "awayTeam": { "abbrev": "VGK" } }))
    }
}

/// Helper to extract lines from buffer
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Log output captured from a thread-local subscriber
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with every event at `warn` and above written to the returned string
pub fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, String) {
    let capture = LogCapture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, capture.contents())
}
