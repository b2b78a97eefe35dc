use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Color},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::tui::theme;

/// Render the breadcrumb navigation trail
pub fn render_breadcrumb(f: &mut Frame, area: Rect, breadcrumb: &[String]) {
    if breadcrumb.is_empty() {
        return;
    }

    let mut spans = Vec::new();

    for (i, crumb) in breadcrumb.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" > ", Style::default().fg(theme::MUTED_COLOR)));
        }

        let style = if i == breadcrumb.len() - 1 {
            // Last item (current location) is brighter
            Style::default().fg(Color::White)
        } else if i == 0 {
            theme::pane_title_style()
        } else {
            Style::default().fg(Color::Gray)
        };

        spans.push(Span::styled(crumb.clone(), style));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::BOTTOM).border_style(theme::pane_border_style()));

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{buffer_lines, RENDER_WIDTH};
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_breadcrumb_trail() {
        let mut terminal = Terminal::new(TestBackend::new(RENDER_WIDTH, 2)).unwrap();
        let crumbs = vec!["Scores".to_string(), "2024-01-15".to_string(), "Game 2023020680".to_string()];
        terminal
            .draw(|f| render_breadcrumb(f, f.area(), &crumbs))
            .unwrap();

        let lines = buffer_lines(terminal.backend().buffer());
        assert!(lines[0].starts_with("Scores > 2024-01-15 > Game 2023020680"));
    }
}
