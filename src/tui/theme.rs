use ratatui::style::{Color, Modifier, Style};

// Primary colors
pub const ACCENT_COLOR: Color = Color::Cyan;
pub const MUTED_COLOR: Color = Color::DarkGray;
pub const ERROR_FG: Color = Color::Red;
pub const LIVE_COLOR: Color = Color::Green;

pub const SELECTION_SYMBOL: &str = "▶ ";
pub const UNSELECTED_SYMBOL: &str = "  ";

// Cards
pub fn card_team_style() -> Style {
    Style::new().fg(Color::White)
}

pub fn card_selected_style(selection_fg: Color) -> Style {
    Style::new()
        .fg(selection_fg)
        .add_modifier(Modifier::BOLD)
}

pub fn card_score_style() -> Style {
    Style::new().fg(Color::White).add_modifier(Modifier::BOLD)
}

pub fn card_status_style(live: bool) -> Style {
    if live {
        Style::new().fg(LIVE_COLOR)
    } else {
        Style::new().fg(MUTED_COLOR)
    }
}

pub fn pane_border_style() -> Style {
    Style::new().fg(MUTED_COLOR)
}

pub fn pane_title_style() -> Style {
    Style::new()
        .fg(ACCENT_COLOR)
        .add_modifier(Modifier::BOLD)
}

// Refresh settings line
pub fn refresh_on_style() -> Style {
    Style::new().fg(LIVE_COLOR).add_modifier(Modifier::BOLD)
}

pub fn refresh_off_style() -> Style {
    Style::new().fg(MUTED_COLOR)
}

// Status and hints
pub fn message_style() -> Style {
    Style::new().fg(MUTED_COLOR)
}

pub fn error_style() -> Style {
    Style::new().fg(ERROR_FG)
}

pub fn hint_style() -> Style {
    Style::new()
        .fg(MUTED_COLOR)
        .add_modifier(Modifier::DIM)
}
