use anyhow::Context;
use ratatui::style::Color;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use xdg::BaseDirectories;

use crate::api::{ClientConfig, DEFAULT_BASE_URL};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    /// Seconds between automatic refreshes while auto-refresh is on
    pub refresh_interval: u32,
    /// Initial state of the auto-refresh toggle
    pub auto_refresh: bool,
    /// strftime format of the "Last refresh" timestamp
    pub time_format: String,
    /// IANA zone for game start times; falls back to `TZ`, then the system zone
    pub time_zone: Option<String>,
    pub api_base_url: String,
    /// Per-request timeout in seconds
    pub request_timeout: u32,
    pub theme: ThemeConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ThemeConfig {
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_fg: Color,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            refresh_interval: 20,
            auto_refresh: false,
            time_format: "%H:%M:%S".to_string(),
            time_zone: None,
            api_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: 10,
            theme: ThemeConfig::default(),
        }
    }
}

impl Config {
    /// Refresh period, never shorter than one second
    pub fn refresh_period(&self) -> Duration {
        Duration::from_secs(u64::from(self.refresh_interval.max(1)))
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api_base_url.clone(),
            timeout: Duration::from_secs(u64::from(self.request_timeout.max(1))),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            selection_fg: DEFAULT_SELECTION_FG,
        }
    }
}

/// Default highlight for the selected game card
const DEFAULT_SELECTION_FG: Color = Color::Rgb(255, 165, 0);

fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid color: {}", s)))
}

/// Any colour ratatui can parse (names, `#rrggbb`, 0-255 index), plus `orange`
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("orange") {
        return Some(DEFAULT_SELECTION_FG);
    }
    Color::from_str(s).ok()
}

pub fn get_config_path() -> Option<PathBuf> {
    let xdg_dirs = BaseDirectories::with_prefix(env!("CARGO_PKG_NAME"));
    Some(xdg_dirs.get_config_home()?.join("config.toml"))
}

/// Load one config file; every key is optional
pub fn load(path: &Path) -> anyhow::Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Invalid config file {}", path.display()))
}

/// Config from the XDG location, or defaults when it is missing or invalid
pub fn read() -> Config {
    let Some(path) = get_config_path().filter(|p| p.exists()) else {
        return Config::default();
    };
    load(&path).unwrap_or_else(|e| {
        // Logging is not set up yet and the TUI has not taken the terminal
        eprintln!("Warning: {:#}; using defaults", e);
        Config::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("cyan"), Some(Color::Cyan));
        assert_eq!(parse_color("Light-Blue"), Some(Color::LightBlue));
        assert_eq!(parse_color(" ORANGE "), Some(DEFAULT_SELECTION_FG));
        assert_eq!(parse_color("#00FFFF"), Some(Color::Rgb(0, 255, 255)));
        assert_eq!(parse_color("208"), Some(Color::Indexed(208)));
        assert_eq!(parse_color("chartreuse-ish"), None);
    }

    #[test]
    fn test_defaults_match_refresh_behaviour() {
        let config = Config::default();
        assert_eq!(config.refresh_interval, 20);
        assert!(!config.auto_refresh);
        assert_eq!(config.refresh_period(), Duration::from_secs(20));
        assert_eq!(config.time_format, "%H:%M:%S");
        assert_eq!(config.time_zone, None);
        assert_eq!(config.api_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.theme.selection_fg, DEFAULT_SELECTION_FG);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let toml_str = r##"
time_zone = "America/Los_Angeles"
request_timeout = 3

[theme]
selection_fg = "#00FFFF"
        "##;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.time_zone.as_deref(), Some("America/Los_Angeles"));
        assert_eq!(config.refresh_interval, 20);
        assert_eq!(config.client_config().timeout, Duration::from_secs(3));
        assert_eq!(config.theme.selection_fg, Color::Rgb(0, 255, 255));
    }

    #[test]
    fn test_refresh_period_never_zero() {
        let config = Config { refresh_interval: 0, ..Default::default() };
        assert_eq!(config.refresh_period(), Duration::from_secs(1));
    }

    #[test]
    fn test_load_reports_invalid_file() {
        let path = std::env::temp_dir().join(format!("nhl-scores-config-{}.toml", std::process::id()));
        fs::write(&path, "[theme]\nselection_fg = \"chartreuse-ish\"\n").unwrap();

        let err = load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid color: chartreuse-ish"));

        fs::write(&path, "auto_refresh = true\n").unwrap();
        assert!(load(&path).unwrap().auto_refresh);
        fs::remove_file(&path).unwrap();
    }
}
