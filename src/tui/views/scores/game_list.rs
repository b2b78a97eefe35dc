use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::sync::Arc;
use std::time::SystemTime;
use tokio::sync::mpsc;
use tracing::debug;

use super::PlayByPlayView;
use crate::api::{DailySchedule, Game, GameDate, Team};
use crate::config::Config;
use crate::data_provider::NHLDataProvider;
use crate::formatting::{self, DisplayZone, LOADING_MESSAGE, LOAD_FAILED_MESSAGE, NO_GAMES_MESSAGE};
use crate::opener;
use crate::refresh::{RefreshController, RefreshEvent, RefreshOutcome};
use crate::tui::components::Scrollable;
use crate::tui::error::{TuiError, TuiResult};
use crate::tui::scroll_restore::ScrollRestore;
use crate::tui::theme;
use crate::tui::traits::{KeyResult, View};

/// Lines per game card: away, home, status, spacer
const CARD_HEIGHT: u16 = 4;
const NAME_WIDTH: usize = 24;

enum ListState {
    Loading,
    Loaded(DailySchedule),
    Failed,
}

/// Root view: the day's games, refreshed by its own controller
pub struct GameListView {
    provider: Arc<dyn NHLDataProvider>,
    controller: RefreshController,
    events: mpsc::UnboundedReceiver<RefreshEvent>,
    state: ListState,
    /// Only present while game cards are on screen
    list: Option<Scrollable>,
    restore: ScrollRestore,
    selected_game: Option<i64>,
    zone: DisplayZone,
    selection_fg: Color,
}

impl GameListView {
    /// Create the view and issue its initial fetch; needs a tokio runtime
    pub fn new(
        provider: Arc<dyn NHLDataProvider>,
        date: GameDate,
        config: &Config,
        zone: DisplayZone,
    ) -> Self {
        let (mut controller, events) =
            RefreshController::new(Arc::clone(&provider), date, config.refresh_period());
        controller.mount();
        controller.set_auto_refresh(config.auto_refresh);

        GameListView {
            provider,
            controller,
            events,
            state: ListState::Loading,
            list: None,
            restore: ScrollRestore::new(),
            selected_game: None,
            zone,
            selection_fg: config.theme.selection_fg,
        }
    }

    fn games(&self) -> &[Game] {
        match &self.state {
            ListState::Loaded(schedule) => &schedule.games,
            _ => &[],
        }
    }

    fn selected_index(&self) -> Option<usize> {
        let id = self.selected_game?;
        self.games().iter().position(|g| g.id == id)
    }

    fn selected(&self) -> Option<&Game> {
        self.selected_index().map(|i| &self.games()[i])
    }

    /// Offset a new fetch should come back to
    ///
    /// A restore still waiting for its render wins over the rebuilt pane,
    /// which sits at 0 until then.
    fn anchor(&self) -> Option<u16> {
        self.restore
            .pending()
            .or_else(|| ScrollRestore::capture(self.list.as_ref()))
    }

    fn handle_event(&mut self, event: RefreshEvent) {
        match event {
            RefreshEvent::Tick { generation } => {
                let anchor = self.anchor();
                self.controller.handle_tick(generation, anchor);
            }
            RefreshEvent::Loaded(completion) => {
                if let Some(outcome) = self.controller.apply(completion) {
                    self.commit(outcome);
                }
            }
        }
    }

    /// Replace the schedule and queue the scroll restore for the next render
    fn commit(&mut self, outcome: RefreshOutcome) {
        match outcome {
            RefreshOutcome::Loaded { schedule, anchor } => {
                let kept = self
                    .selected_game
                    .filter(|id| schedule.games.iter().any(|g| g.id == *id));
                self.selected_game = kept.or_else(|| schedule.games.first().map(|g| g.id));

                if schedule.is_empty() {
                    self.list = None;
                    self.restore.clear();
                } else {
                    self.list = Some(Scrollable::new());
                    self.restore.schedule(anchor);
                }
                self.state = ListState::Loaded(schedule);
            }
            RefreshOutcome::Failed { message } => {
                debug!(error = %message, "Replacing game list with load failure");
                self.state = ListState::Failed;
                self.list = None;
                self.restore.clear();
            }
        }
    }

    fn change_date(&mut self, days: i64) {
        let date = self.controller.date().add_days(days);
        self.controller.set_date(date);
        self.state = ListState::Loading;
        self.list = None;
        self.restore.clear();
        self.selected_game = None;
    }

    fn move_selection(&mut self, down: bool) {
        let count = self.games().len();
        if count == 0 {
            return;
        }
        let current = self.selected_index().unwrap_or(0);
        let next = if down {
            (current + 1).min(count - 1)
        } else {
            current.saturating_sub(1)
        };
        self.selected_game = Some(self.games()[next].id);

        if let Some(list) = self.list.as_mut() {
            list.ensure_visible(card_top(next), CARD_HEIGHT - 1);
        }
    }

    fn open_selected(&self) -> TuiResult<()> {
        let game = self.selected().ok_or(TuiError::NoGameSelected)?;
        let url = formatting::gamecenter_url(game.id);
        opener::open_url(&url).map_err(|source| TuiError::OpenFailed { url, source })
    }

    fn refresh_line(&self) -> Line<'static> {
        let mut spans = vec![
            Span::styled(format!("◀ {} ▶", self.controller.date()), theme::pane_title_style()),
            Span::raw("  Auto-refresh: "),
        ];
        if self.controller.is_auto_refresh_enabled() {
            spans.push(Span::styled("ON", theme::refresh_on_style()));
            spans.push(Span::styled(
                format!(" (every {}s)", self.controller.period().as_secs()),
                theme::message_style(),
            ));
        } else {
            spans.push(Span::styled("OFF", theme::refresh_off_style()));
        }
        spans.push(Span::styled("  [a] toggle  [r] refresh", theme::hint_style()));
        Line::from(spans)
    }

    fn card_lines(&self) -> Vec<Line<'static>> {
        self.games()
            .iter()
            .flat_map(|game| {
                let selected = self.selected_game == Some(game.id);
                game_card_lines(game, selected, &self.zone, self.selection_fg)
            })
            .collect()
    }
}

fn card_top(index: usize) -> u16 {
    u16::try_from(index)
        .unwrap_or(u16::MAX)
        .saturating_mul(CARD_HEIGHT)
}

/// Lines of one game card
pub fn game_card_lines(
    game: &Game,
    selected: bool,
    zone: &DisplayZone,
    selection_fg: Color,
) -> Vec<Line<'static>> {
    let team_style = if selected {
        theme::card_selected_style(selection_fg)
    } else {
        theme::card_team_style()
    };
    let team_line = |team: &Team, marker: &'static str| {
        Line::from(vec![
            Span::styled(marker, team_style),
            Span::styled(
                format!("{:<4}{:<width$}", team.abbrev, team.name.default, width = NAME_WIDTH),
                team_style,
            ),
            Span::styled(
                format!("{:>3}", formatting::format_score(team.score)),
                theme::card_score_style(),
            ),
        ])
    };
    let marker = if selected {
        theme::SELECTION_SYMBOL
    } else {
        theme::UNSELECTED_SYMBOL
    };

    vec![
        team_line(&game.away_team, marker),
        team_line(&game.home_team, theme::UNSELECTED_SYMBOL),
        Line::from(vec![
            Span::raw(theme::UNSELECTED_SYMBOL),
            Span::styled(
                formatting::format_game_status(game, zone),
                theme::card_status_style(game.game_state.is_live()),
            ),
        ]),
        Line::default(),
    ]
}

impl View for GameListView {
    fn render(&mut self, f: &mut Frame, area: Rect, _focused: bool) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Refresh settings
                Constraint::Min(0),    // Games
                Constraint::Length(1), // Refresh settings
            ])
            .split(area);

        let refresh_line = self.refresh_line();
        f.render_widget(Paragraph::new(refresh_line.clone()), chunks[0]);
        f.render_widget(Paragraph::new(refresh_line), chunks[2]);

        let title = format!(" Games {} ", self.controller.date());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::pane_border_style());

        let message = match &self.state {
            ListState::Loading => Some(Line::styled(LOADING_MESSAGE, theme::message_style())),
            ListState::Failed => Some(Line::styled(LOAD_FAILED_MESSAGE, theme::error_style())),
            ListState::Loaded(schedule) if schedule.is_empty() => {
                Some(Line::styled(NO_GAMES_MESSAGE, theme::message_style()))
            }
            ListState::Loaded(_) => None,
        };
        if let Some(line) = message {
            let block = block.title(Span::styled(title, theme::pane_title_style()));
            f.render_widget(Paragraph::new(line).block(block), chunks[1]);
            return;
        }

        let lines = self.card_lines();
        if let Some(list) = self.list.as_mut() {
            list.measure(chunks[1], lines.len(), true);
            self.restore.apply_after_layout(list);

            let indicator = list.scroll_indicator();
            let mut block = block.title(Span::styled(title, theme::pane_title_style()));
            if !indicator.is_empty() {
                block = block.title(
                    Line::from(Span::styled(format!(" {} ", indicator), theme::hint_style()))
                        .right_aligned(),
                );
            }
            list.render_lines(f, chunks[1], lines, Some(block));
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> KeyResult {
        match key.code {
            KeyCode::Up => {
                self.move_selection(false);
                KeyResult::Handled
            }
            KeyCode::Down => {
                self.move_selection(true);
                KeyResult::Handled
            }
            KeyCode::Left => {
                self.change_date(-1);
                KeyResult::Handled
            }
            KeyCode::Right => {
                self.change_date(1);
                KeyResult::Handled
            }
            KeyCode::Char('a') => {
                self.controller.toggle_auto_refresh();
                KeyResult::Handled
            }
            KeyCode::Char('r') => {
                let anchor = self.anchor();
                self.controller.refresh_now(anchor);
                KeyResult::Handled
            }
            KeyCode::Char('o') => match self.open_selected() {
                Ok(()) => KeyResult::Handled,
                Err(e) => KeyResult::Notice(e.to_string()),
            },
            KeyCode::Enter => match self.selected() {
                Some(game) => KeyResult::DrillDown(Box::new(PlayByPlayView::new(
                    Arc::clone(&self.provider),
                    game,
                ))),
                None => KeyResult::Handled,
            },
            KeyCode::Char('q') => KeyResult::Quit,
            _ => match self.list.as_mut() {
                Some(list) => {
                    if list.handle_key(key) {
                        KeyResult::Handled
                    } else {
                        KeyResult::NotHandled
                    }
                }
                None => KeyResult::NotHandled,
            },
        }
    }

    fn update(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.handle_event(event);
        }
    }

    fn breadcrumb_label(&self) -> String {
        self.controller.date().to_string()
    }

    fn key_hints(&self) -> Vec<&'static str> {
        // Refresh keys are listed on the refresh line
        vec!["↑/↓ Select", "←/→ Date", "Enter Plays", "o Open", "q Quit"]
    }

    fn last_refresh(&self) -> Option<SystemTime> {
        self.controller.last_refresh()
    }
}
