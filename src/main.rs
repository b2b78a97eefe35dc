use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use nhl_scores::api::Client;
use nhl_scores::commands;
use nhl_scores::config;
use nhl_scores::data_provider::NHLDataProvider;
use nhl_scores::formatting::DisplayZone;
use nhl_scores::tui;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "nhl-scores", version)]
#[command(about = "NHL scores dashboard", long_about = "NHL scores dashboard\n\nIf no command is specified, the program starts in interactive mode.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// IANA time zone for game start times (e.g. America/New_York)
    #[arg(long, global = true)]
    tz: Option<String>,

    /// Date in YYYY-MM-DD format for interactive mode (defaults to today)
    #[arg(short, long)]
    date: Option<String>,

    /// Use fixture data instead of the NHL API
    #[cfg(feature = "development")]
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display scores for a date once and exit
    Scores {
        /// Date in YYYY-MM-DD format (optional, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Display play-by-play events for a game
    Pbp {
        /// Game ID (e.g., 2024020001)
        game_id: i64,

        /// Only show the most recent N plays
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Fetch landing, boxscore and play-by-play for a game
    Game {
        /// Game ID (e.g., 2024020001)
        game_id: i64,

        /// Save each response as <id>-<kind>.json in this directory
        #[arg(short, long)]
        save_dir: Option<PathBuf>,
    },
    /// Display current configuration
    Config,
}

fn create_client(config: &config::Config) -> anyhow::Result<Arc<dyn NHLDataProvider>> {
    let client = Client::with_config(config.client_config())
        .context("Failed to create NHL API client")?;
    Ok(Arc::new(client))
}

#[cfg(feature = "development")]
fn create_provider(cli: &Cli, config: &config::Config) -> anyhow::Result<Arc<dyn NHLDataProvider>> {
    if cli.mock {
        return Ok(Arc::new(nhl_scores::dev::MockClient::new()));
    }
    create_client(config)
}

#[cfg(not(feature = "development"))]
fn create_provider(_cli: &Cli, config: &config::Config) -> anyhow::Result<Arc<dyn NHLDataProvider>> {
    create_client(config)
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command(zone: &DisplayZone) {
    let cfg = config::read();

    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("refresh_interval: {} seconds", cfg.refresh_interval);
    println!("auto_refresh: {}", cfg.auto_refresh);
    println!("time_format: {}", cfg.time_format);
    println!("time_zone: {} (resolved: {})", cfg.time_zone.as_deref().unwrap_or("unset"), zone.name());
    println!("api_base_url: {}", cfg.api_base_url);
    println!("request_timeout: {} seconds", cfg.request_timeout);
    println!();
    println!("[theme]");
    println!("selection_fg: {:?}", cfg.theme.selection_fg);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Run TUI mode; the game list owns its own refresh loop
async fn run_tui_mode(
    provider: Arc<dyn NHLDataProvider>,
    config: &config::Config,
    date: Option<String>,
    zone: DisplayZone,
) -> anyhow::Result<()> {
    let date = commands::parse_game_date(date)?;
    tui::run(provider, config, date, zone).await?;
    Ok(())
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(
    client: &dyn NHLDataProvider,
    command: Commands,
    zone: &DisplayZone,
) -> anyhow::Result<()> {
    match command {
        Commands::Config => unreachable!("Config command should be handled before execute_command"),
        Commands::Scores { date } => commands::scores::run(client, date, zone).await,
        Commands::Pbp { game_id, limit } => commands::play_by_play::run(client, game_id, limit).await,
        Commands::Game { game_id, save_dir } => commands::game::run(client, game_id, save_dir).await,
    }
}

async fn run(cli: Cli, config: config::Config) -> anyhow::Result<()> {
    let zone = DisplayZone::resolve(cli.tz.as_deref(), config.time_zone.as_deref());

    // Handle Config command separately (doesn't need a client)
    if let Some(Commands::Config) = cli.command {
        handle_config_command(&zone);
        return Ok(());
    }

    let provider = create_provider(&cli, &config)?;
    match cli.command {
        // If no subcommand, run TUI
        None => run_tui_mode(provider, &config, cli.date, zone).await,
        Some(command) => execute_command(provider.as_ref(), command, &zone).await,
    }
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    if let Err(e) = run(cli, config).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
