//! Hands a URL to the platform's default opener.

use std::io;
use std::process::{Command, Stdio};
use tracing::info;

/// Program and leading arguments used to open a URL on this platform
pub fn opener_command() -> (&'static str, &'static [&'static str]) {
    if cfg!(target_os = "macos") {
        ("open", &[])
    } else if cfg!(target_os = "windows") {
        ("cmd", &["/C", "start", ""])
    } else {
        ("xdg-open", &[])
    }
}

/// Launch the opener without waiting for it; the TUI keeps the terminal
pub fn open_url(url: &str) -> io::Result<()> {
    let (program, args) = opener_command();
    Command::new(program)
        .args(args)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    info!(%url, program, "Opened URL");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opener_command_for_platform() {
        let (program, args) = opener_command();
        if cfg!(target_os = "windows") {
            assert_eq!(program, "cmd");
            assert_eq!(args.last(), Some(&""));
        } else {
            assert!(args.is_empty());
            assert!(program == "open" || program == "xdg-open");
        }
    }
}
