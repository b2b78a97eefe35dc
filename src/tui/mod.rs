mod traits;
mod app;
mod components;
mod views;
mod theme;
mod error;
mod scroll_restore;

use std::io;
use std::sync::Arc;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use tracing::{debug, info};

use crate::api::GameDate;
use crate::config::Config;
use crate::data_provider::NHLDataProvider;
use crate::formatting::DisplayZone;
use app::AppState;
use traits::{View, KeyResult};
use components::{render_breadcrumb, render_status_bar};
use views::scores::GameListView;

pub use error::{TuiError, TuiResult};
pub use views::scores::game_card_lines;

const EVENT_POLL_INTERVAL_MS: u64 = 100;

pub async fn run(
    provider: Arc<dyn NHLDataProvider>,
    config: &Config,
    date: GameDate,
    zone: DisplayZone,
) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!(%date, zone = %zone.name(), "Starting TUI");
    let root: Box<dyn View> = Box::new(GameListView::new(provider, date, config, zone));
    let mut app_state = AppState::new(root);

    let result = event_loop(&mut terminal, &mut app_state, config).await;

    // Cancel refreshes before handing the terminal back
    drop(app_state);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    config: &Config,
) -> Result<(), io::Error> {
    #[cfg(feature = "development")]
    let mut screenshot_requested = false;

    loop {
        app_state.update_all();

        #[cfg(feature = "development")]
        let mut screenshot_buffer = None;

        terminal.draw(|f| {
            draw(f, app_state, &config.time_format);

            // Development feature: Clone buffer if screenshot requested
            #[cfg(feature = "development")]
            if screenshot_requested {
                screenshot_buffer = Some((f.buffer_mut().clone(), f.area()));
            }
        })?;

        #[cfg(feature = "development")]
        if let Some((buffer, area)) = screenshot_buffer.take() {
            screenshot_requested = false;
            let filename = crate::dev::screenshot::screenshot_filename();
            app_state.notice = Some(
                match crate::dev::screenshot::save_buffer_screenshot(&buffer, area, &filename) {
                    Ok(()) => {
                        info!("Screenshot saved to: {}", filename);
                        format!("Screenshot saved to {}", filename)
                    }
                    Err(e) => {
                        tracing::error!("Failed to save screenshot: {}", e);
                        format!("Failed to save screenshot: {}", e)
                    }
                },
            );
        }

        // Handle events; fetches and the refresh timer run on the worker threads
        if event::poll(std::time::Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            // Development feature: Shift-S for screenshot
            #[cfg(feature = "development")]
            {
                use crossterm::event::KeyModifiers;
                if key.code == KeyCode::Char('S') && key.modifiers.contains(KeyModifiers::SHIFT) {
                    info!("Screenshot requested via Shift-S");
                    screenshot_requested = true;
                    continue;
                }
            }

            if handle_key_event(key, app_state) {
                break; // Exit requested
            }
        }
    }
    Ok(())
}

fn draw(f: &mut Frame, app_state: &mut AppState, time_format: &str) {
    // Create layout: breadcrumb, content, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),  // Breadcrumb
            Constraint::Min(0),     // Content
            Constraint::Length(1),  // Status bar
        ])
        .split(f.area());

    render_breadcrumb(f, chunks[0], &app_state.breadcrumb());
    app_state.current_view().render(f, chunks[1], true);

    let hints = app_state.key_hints();
    render_status_bar(
        f,
        chunks[2],
        &hints,
        app_state.notice.as_deref(),
        app_state.last_refresh(),
        time_format,
    );
}

/// Returns true when the application should exit
fn handle_key_event(key: KeyEvent, app_state: &mut AppState) -> bool {
    // Notices last until the next key press
    app_state.notice = None;

    match app_state.current_view().handle_key(key) {
        KeyResult::Handled => false,
        KeyResult::NotHandled => {
            if key.code == KeyCode::Esc {
                app_state.pop_view();
            }
            false
        }
        KeyResult::DrillDown(new_view) => {
            debug!(depth = app_state.depth() + 1, "Drilling down");
            app_state.push_view(new_view);
            false
        }
        KeyResult::GoBack => {
            app_state.pop_view();
            false
        }
        KeyResult::Notice(message) => {
            app_state.notice = Some(message);
            false
        }
        KeyResult::Quit => true,
    }
}
