/// Screenshot utilities for capturing terminal output
///
/// Saves a rendered ratatui buffer as plain text, one row per line.

use std::fs::File;
use std::io::{self, Write};
use ratatui::{buffer::Buffer, layout::Rect};

/// Save a terminal screenshot from a buffer to a text file
///
/// Call with a buffer cloned during a draw call.
pub fn save_buffer_screenshot(
    buffer: &Buffer,
    area: Rect,
    filename: &str,
) -> io::Result<()> {
    let mut file = File::create(filename)?;

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            write!(file, "{}", buffer[(x, y)].symbol())?;
        }
        writeln!(file)?;
    }

    Ok(())
}

/// Timestamped screenshot file name in the working directory
pub fn screenshot_filename() -> String {
    format!("nhl-scores-screenshot-{}.txt", chrono::Local::now().format("%Y%m%d-%H%M%S"))
}
