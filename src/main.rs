use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use nba::commands;
use nba::config;
use nba::data_provider::{self, SampleProvider, WeekDataProvider};
use nba::tui;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "nba")]
#[command(about = "NBA weekly schedule and predictions", long_about = "NBA weekly schedule and predictions\n\nIf no command is specified, the program starts in interactive mode.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// URL of the week document (overrides config)
    #[arg(long, global = true, conflicts_with_all = ["file", "sample"])]
    url: Option<String>,

    /// Read the week document from a local JSON file (overrides config)
    #[arg(long, global = true, conflicts_with = "sample")]
    file: Option<PathBuf>,

    /// Use the built-in sample week
    #[arg(long, global = true)]
    sample: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display games for one day of the week
    Games {
        /// Date in YYYY-MM-DD format (optional, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Day name, e.g. "friday" (overrides --date)
        #[arg(long)]
        day: Option<String>,
    },
    /// Display the seven-day calendar with game counts
    Week,
    /// Display last week's predictions and accuracy
    Predictions,
    /// List known teams
    Teams,
    /// Display current configuration
    Config,
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
fn handle_config_command(cfg: &config::Config) {
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
    println!("data_url: {}", cfg.data_url.as_deref().unwrap_or("(none)"));
    println!(
        "data_file: {}",
        cfg.data_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none)".to_string())
    );
    println!("request_timeout_secs: {}", cfg.request_timeout_secs);
    println!("date_format: {}", cfg.date_format);
    println!();
    println!("[display]");
    println!("use_unicode: {}", cfg.display.use_unicode);
    println!();
    println!("[theme]");
    println!("selection_fg: {:?}", cfg.theme.selection_fg);
    println!("correct_fg: {:?}", cfg.theme.correct_fg);
    println!("incorrect_fg: {:?}", cfg.theme.incorrect_fg);
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

/// Apply data source flags on top of the config file
fn apply_source_overrides(cli: &Cli, config: &mut config::Config) {
    if let Some(url) = &cli.url {
        config.data_url = Some(url.clone());
        config.data_file = None;
    }
    if let Some(file) = &cli.file {
        config.data_file = Some(file.clone());
    }
}

fn create_client(cli: &Cli, config: &config::Config) -> Arc<dyn WeekDataProvider> {
    if cli.sample {
        return Arc::new(SampleProvider);
    }
    match data_provider::provider_from_config(config) {
        Ok(client) => client,
        Err(e) => {
            let error_msg = format!("Failed to create data provider: {}", e);
            tracing::error!("{}", error_msg);
            eprintln!("{}", error_msg);
            std::process::exit(1);
        }
    }
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(
    client: &dyn WeekDataProvider,
    command: Commands,
    config: &config::Config,
) -> anyhow::Result<()> {
    match command {
        Commands::Config | Commands::Teams => {
            unreachable!("Offline commands are handled before execute_command")
        }
        Commands::Games { date, day } => commands::games::run(client, date, day, config).await,
        Commands::Week => commands::week::run(client, config).await,
        Commands::Predictions => commands::predictions::run(client, config).await,
    }
}

#[tokio::main]
async fn main() {
    let mut config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    apply_source_overrides(&cli, &mut config);

    // Offline commands don't need a data provider
    match &cli.command {
        Some(Commands::Config) => {
            handle_config_command(&config);
            return;
        }
        Some(Commands::Teams) => {
            commands::teams::run();
            return;
        }
        _ => {}
    }

    let client = create_client(&cli, &config);

    // If no subcommand, run TUI
    let Some(command) = cli.command else {
        if let Err(e) = tui::run(client, config).await {
            eprintln!("Error running TUI: {}", e);
            std::process::exit(1);
        }
        return;
    };

    if let Err(e) = execute_command(client.as_ref(), command, &config).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
