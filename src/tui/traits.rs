use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};
use std::time::SystemTime;

/// Result of key handling by a view
pub enum KeyResult {
    /// The view consumed the key event
    Handled,
    /// The view didn't handle this key, pass to parent
    NotHandled,
    /// Request to drill down into a child view
    DrillDown(Box<dyn View>),
    /// Request to go back up one level
    GoBack,
    /// Show a one-off message in the status bar
    Notice(String),
    /// Request to quit the application
    Quit,
}

/// Core trait for all views in the hierarchical TUI
pub trait View {
    /// Render the view to the terminal
    fn render(&mut self, f: &mut Frame, area: Rect, focused: bool);

    /// Handle a key event
    /// Returns KeyResult indicating what action should be taken
    fn handle_key(&mut self, key: KeyEvent) -> KeyResult;

    /// Drain background results; called once per loop iteration for every
    /// view on the stack, visible or not
    fn update(&mut self) {}

    /// Get the breadcrumb label for this view
    fn breadcrumb_label(&self) -> String {
        "Unknown".to_string()
    }

    /// Key hints shown in the status bar while this view is on top
    fn key_hints(&self) -> Vec<&'static str> {
        vec!["Esc Back", "q Quit"]
    }

    /// Time of the last successful data refresh, for views that refresh
    fn last_refresh(&self) -> Option<SystemTime> {
        None
    }
}
