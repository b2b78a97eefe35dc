use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{Block, Paragraph},
};

/// Lines scrolled by PageUp / PageDown
const PAGE_SCROLL_LINES: u16 = 10;

/// Vertical scroll state for a pane of lines
///
/// Rendering is split in two: `measure` records the viewport and content
/// height for this frame (clamping the offset), then `render_lines` draws at
/// the current offset. Anything that positions the offset against the new
/// content, such as a scroll restore, goes between the two.
#[derive(Debug, Default)]
pub struct Scrollable {
    scroll_offset: u16,
    content_height: usize,
    viewport_height: u16,
}

impl Scrollable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle scroll keys (Up, Down, PageUp, PageDown, Home, End)
    /// Returns true if the key was handled
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                true
            }
            KeyCode::Down => {
                self.scroll_down(1);
                true
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(PAGE_SCROLL_LINES);
                true
            }
            KeyCode::PageDown => {
                self.scroll_down(PAGE_SCROLL_LINES);
                true
            }
            KeyCode::Home => {
                self.scroll_offset = 0;
                true
            }
            KeyCode::End => {
                self.scroll_offset = self.max_scroll();
                true
            }
            _ => false,
        }
    }

    pub fn offset(&self) -> u16 {
        self.scroll_offset
    }

    pub fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    /// Jump straight to an offset, clamped to the current content
    pub fn jump_to(&mut self, offset: u16) {
        self.scroll_offset = offset.min(self.max_scroll());
    }

    /// Scroll the least amount needed to show `height` lines starting at `start`
    pub fn ensure_visible(&mut self, start: u16, height: u16) {
        let end = start.saturating_add(height);
        if start < self.scroll_offset {
            self.scroll_offset = start;
        } else if end > self.scroll_offset.saturating_add(self.viewport_height) {
            self.scroll_offset = end.saturating_sub(self.viewport_height);
        }
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    /// Scroll down by n lines, but don't scroll past the bottom
    fn scroll_down(&mut self, n: u16) {
        self.scroll_offset = self.scroll_offset.saturating_add(n).min(self.max_scroll());
    }

    /// Calculate the maximum scroll offset
    fn max_scroll(&self) -> u16 {
        let content = u16::try_from(self.content_height).unwrap_or(u16::MAX);
        content.saturating_sub(self.viewport_height)
    }

    /// Record this frame's viewport and content size
    pub fn measure(&mut self, area: Rect, line_count: usize, bordered: bool) {
        self.viewport_height = if bordered {
            area.height.saturating_sub(2) // Account for top and bottom borders
        } else {
            area.height
        };
        self.content_height = line_count;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    /// Render lines at the current offset
    pub fn render_lines(&self, f: &mut Frame, area: Rect, lines: Vec<Line<'_>>, block: Option<Block>) {
        let paragraph = Paragraph::new(lines).scroll((self.scroll_offset, 0));
        let paragraph = match block {
            Some(b) => paragraph.block(b),
            None => paragraph,
        };
        f.render_widget(paragraph, area);
    }

    /// Get scroll indicator text (e.g., "Line 5/20")
    pub fn scroll_indicator(&self) -> String {
        if self.content_height == 0 || self.content_height <= self.viewport_height as usize {
            return String::new();
        }
        format!("Line {}/{}", self.scroll_offset + 1, self.content_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn measured(lines: usize, viewport: u16) -> Scrollable {
        let mut s = Scrollable::new();
        s.measure(Rect::new(0, 0, 40, viewport), lines, false);
        s
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_jump_before_measure_clamps_to_zero() {
        let mut s = Scrollable::new();
        s.jump_to(240);
        assert_eq!(s.offset(), 0);
    }

    #[test]
    fn test_jump_after_measure() {
        let mut s = measured(400, 20);
        s.jump_to(240);
        assert_eq!(s.offset(), 240);
        s.jump_to(1000);
        assert_eq!(s.offset(), 380);
    }

    #[test]
    fn test_measure_clamps_when_content_shrinks() {
        let mut s = measured(100, 10);
        s.jump_to(80);
        s.measure(Rect::new(0, 0, 40, 10), 30, false);
        assert_eq!(s.offset(), 20);
    }

    #[test]
    fn test_scroll_keys() {
        let mut s = measured(50, 10);
        assert!(s.handle_key(key(KeyCode::PageDown)));
        assert_eq!(s.offset(), 10);
        s.handle_key(key(KeyCode::End));
        assert_eq!(s.offset(), 40);
        s.handle_key(key(KeyCode::Down));
        assert_eq!(s.offset(), 40);
        s.handle_key(key(KeyCode::Home));
        assert_eq!(s.offset(), 0);
        s.handle_key(key(KeyCode::Up));
        assert_eq!(s.offset(), 0);
        assert!(!s.handle_key(key(KeyCode::Char('x'))));
    }

    #[test]
    fn test_ensure_visible() {
        let mut s = measured(100, 10);
        s.ensure_visible(25, 4);
        assert_eq!(s.offset(), 19);
        s.ensure_visible(5, 4);
        assert_eq!(s.offset(), 5);
        s.ensure_visible(7, 2);
        assert_eq!(s.offset(), 5);
    }

    #[test]
    fn test_bordered_viewport() {
        let s = {
            let mut s = Scrollable::new();
            s.measure(Rect::new(0, 0, 40, 12), 30, true);
            s
        };
        assert_eq!(s.viewport_height(), 10);
        assert_eq!(s.scroll_indicator(), "Line 1/30");
        assert_eq!(measured(5, 10).scroll_indicator(), "");
    }
}
