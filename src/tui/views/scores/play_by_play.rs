use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::warn;

use crate::api::{Game, PlayByPlay};
use crate::cache;
use crate::data_provider::NHLDataProvider;
use crate::formatting;
use crate::opener;
use crate::shots::ShotSummary;
use crate::tui::components::Scrollable;
use crate::tui::error::TuiError;
use crate::tui::theme;
use crate::tui::traits::{KeyResult, View};

type FetchResult = Result<PlayByPlay, String>;

enum PlayState {
    Loading(oneshot::Receiver<FetchResult>),
    Loaded(PlayByPlay),
    Failed,
}

/// Play-by-play events of one game, newest last
pub struct PlayByPlayView {
    provider: Arc<dyn NHLDataProvider>,
    game_id: i64,
    matchup: String,
    state: PlayState,
    task: JoinHandle<()>,
    scrollable: Scrollable,
}

impl PlayByPlayView {
    pub fn new(provider: Arc<dyn NHLDataProvider>, game: &Game) -> Self {
        let (rx, task) = spawn_fetch(Arc::clone(&provider), game.id, false);
        PlayByPlayView {
            provider,
            game_id: game.id,
            matchup: format!("{} @ {}", game.away_team.abbrev, game.home_team.abbrev),
            state: PlayState::Loading(rx),
            task,
            scrollable: Scrollable::new(),
        }
    }

    fn reload(&mut self) {
        self.task.abort();
        let (rx, task) = spawn_fetch(Arc::clone(&self.provider), self.game_id, true);
        self.state = PlayState::Loading(rx);
        self.task = task;
    }

    fn lines(pbp: &PlayByPlay) -> Vec<Line<'static>> {
        pbp.plays
            .iter()
            .map(|play| {
                let style = if play.type_desc_key == "goal" {
                    theme::card_score_style()
                } else {
                    theme::card_team_style()
                };
                Line::from(Span::styled(formatting::format_play(play), style))
            })
            .collect()
    }
}

fn spawn_fetch(
    provider: Arc<dyn NHLDataProvider>,
    game_id: i64,
    bypass_cache: bool,
) -> (oneshot::Receiver<FetchResult>, JoinHandle<()>) {
    let (tx, rx) = oneshot::channel();
    let task = tokio::spawn(async move {
        let result = if bypass_cache {
            cache::refresh_play_by_play(provider.as_ref(), game_id).await
        } else {
            cache::fetch_play_by_play_cached(provider.as_ref(), game_id).await
        };
        let _ = tx.send(result.map_err(|e| e.to_string()));
    });
    (rx, task)
}

impl Drop for PlayByPlayView {
    fn drop(&mut self) {
        self.task.abort();
    }
}

impl View for PlayByPlayView {
    fn render(&mut self, f: &mut Frame, area: Rect, _focused: bool) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::pane_border_style())
            .title(Span::styled(
                format!(" {} - Play-by-play ", self.matchup),
                theme::pane_title_style(),
            ));

        let pbp = match &self.state {
            PlayState::Loading(_) => {
                let line = Line::styled("Loading play-by-play...", theme::message_style());
                f.render_widget(Paragraph::new(line).block(block), area);
                return;
            }
            PlayState::Failed => {
                let line = Line::styled("Failed to load play-by-play", theme::error_style());
                f.render_widget(Paragraph::new(line).block(block), area);
                return;
            }
            PlayState::Loaded(pbp) if pbp.plays.is_empty() => {
                let line = Line::styled("No plays yet", theme::message_style());
                f.render_widget(Paragraph::new(line).block(block), area);
                return;
            }
            PlayState::Loaded(pbp) => pbp,
        };

        let shots = ShotSummary::from_play_by_play(pbp);
        let block = block.title(
            Line::from(Span::styled(
                format!(" Shots on goal {}-{} ", shots.away.on_goal, shots.home.on_goal),
                theme::hint_style(),
            ))
            .right_aligned(),
        );

        let lines = Self::lines(pbp);
        self.scrollable.measure(area, lines.len(), true);
        self.scrollable.render_lines(f, area, lines, Some(block));
    }

    fn handle_key(&mut self, key: KeyEvent) -> KeyResult {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => KeyResult::GoBack,
            KeyCode::Char('r') => {
                self.reload();
                KeyResult::Handled
            }
            KeyCode::Char('o') => {
                let url = formatting::gamecenter_url(self.game_id);
                match opener::open_url(&url) {
                    Ok(()) => KeyResult::Handled,
                    Err(source) => KeyResult::Notice(TuiError::OpenFailed { url, source }.to_string()),
                }
            }
            KeyCode::Char('q') => KeyResult::Quit,
            _ => {
                if self.scrollable.handle_key(key) {
                    KeyResult::Handled
                } else {
                    KeyResult::NotHandled
                }
            }
        }
    }

    fn update(&mut self) {
        let PlayState::Loading(rx) = &mut self.state else {
            return;
        };
        match rx.try_recv() {
            Ok(Ok(pbp)) => self.state = PlayState::Loaded(pbp),
            Ok(Err(message)) => {
                warn!(game_id = self.game_id, error = %message, "Play-by-play fetch failed");
                self.state = PlayState::Failed;
            }
            Err(oneshot::error::TryRecvError::Empty) => {}
            Err(oneshot::error::TryRecvError::Closed) => self.state = PlayState::Failed,
        }
    }

    fn breadcrumb_label(&self) -> String {
        format!("Game {}", self.game_id)
    }

    fn key_hints(&self) -> Vec<&'static str> {
        vec!["↑/↓ Scroll", "r Refresh", "o Open", "Esc Back", "q Quit"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::GameState;
    use crate::fixtures::create_mock_game;
    use crate::testing::{buffer_lines, TestProvider, RENDER_WIDTH};
    use crossterm::event::KeyModifiers;
    use ratatui::{Terminal, backend::TestBackend};
    use std::time::Duration;

    fn draw(view: &mut PlayByPlayView) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(RENDER_WIDTH, 12)).unwrap();
        terminal.draw(|f| view.render(f, f.area(), true)).unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    fn view_for(provider: &Arc<TestProvider>, game_id: i64) -> PlayByPlayView {
        let game = create_mock_game(game_id, "TOR", "OTT", GameState::Live);
        let provider: Arc<dyn NHLDataProvider> = provider.clone();
        PlayByPlayView::new(provider, &game)
    }

    async fn settle(view: &mut PlayByPlayView) {
        tokio::time::sleep(Duration::from_millis(1)).await;
        view.update();
    }

    #[tokio::test]
    async fn test_loads_and_lists_plays() {
        let provider = Arc::new(TestProvider::new());
        let mut view = view_for(&provider, 3_000_001);
        assert!(draw(&mut view).iter().any(|l| l.contains("Loading play-by-play")));

        settle(&mut view).await;
        let lines = draw(&mut view);
        assert!(lines[0].contains("TOR @ OTT - Play-by-play"));
        assert!(lines[0].contains("Shots on goal 1-1"));
        assert!(lines.iter().any(|l| l.contains("P1 07:45  goal")));
        assert_eq!(view.breadcrumb_label(), "Game 3000001");
    }

    #[tokio::test]
    async fn test_reopening_uses_cache() {
        let provider = Arc::new(TestProvider::new());
        let mut first = view_for(&provider, 3_000_011);
        settle(&mut first).await;
        let mut second = view_for(&provider, 3_000_011);
        settle(&mut second).await;

        assert_eq!(provider.play_by_play_calls(), 1);
        assert!(matches!(second.state, PlayState::Loaded(_)));
    }

    #[tokio::test]
    async fn test_refresh_bypasses_cache() {
        let provider = Arc::new(TestProvider::new());
        let mut view = view_for(&provider, 3_000_021);
        settle(&mut view).await;

        view.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::empty()));
        assert!(matches!(view.state, PlayState::Loading(_)));
        settle(&mut view).await;

        assert_eq!(provider.play_by_play_calls(), 2);
        assert!(matches!(view.state, PlayState::Loaded(_)));
    }

    #[tokio::test]
    async fn test_escape_goes_back() {
        let provider = Arc::new(TestProvider::new());
        let mut view = view_for(&provider, 3_000_031);
        let result = view.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::empty()));
        assert!(matches!(result, KeyResult::GoBack));
    }
}
