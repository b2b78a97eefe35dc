use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};
use std::time::SystemTime;
use unicode_width::UnicodeWidthStr;

use crate::formatting::format_refresh_time;
use crate::tui::theme;

const HINT_SEPARATOR: &str = " │ ";

/// Build the status bar line: a notice or the key hints on the left, the
/// last refresh time pushed to the right edge
pub fn status_line(
    width: u16,
    hints: &[&str],
    notice: Option<&str>,
    last_refresh: Option<SystemTime>,
    time_format: &str,
) -> Line<'static> {
    let mut spans = Vec::new();

    if let Some(message) = notice {
        spans.push(Span::styled(message.to_string(), theme::error_style()));
    } else {
        for (i, hint) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(HINT_SEPARATOR, theme::hint_style()));
            }
            spans.push(Span::styled(hint.to_string(), theme::hint_style()));
        }
    }

    if let Some(refresh_time) = last_refresh {
        let refresh_text = format!("Last refresh: {}", format_refresh_time(refresh_time, time_format));
        let left_width: usize = spans.iter().map(|s| s.content.width()).sum();
        let padding = (width as usize)
            .saturating_sub(left_width)
            .saturating_sub(refresh_text.width())
            .max(1);

        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(refresh_text, theme::message_style()));
    }

    Line::from(spans)
}

/// Render the bottom status bar
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    hints: &[&str],
    notice: Option<&str>,
    last_refresh: Option<SystemTime>,
    time_format: &str,
) {
    let line = status_line(area.width, hints, notice, last_refresh, time_format);
    f.render_widget(Paragraph::new(line), area);
}
