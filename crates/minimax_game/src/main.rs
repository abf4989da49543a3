//! Minimax Game - command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use minimax_game::cli::{Cli, Command};
use minimax_game::tui::run_tui;
use minimax_game::{FirstPlayer, GameConfig, evaluate_report, suggest_report};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            delay_ms,
            computer_first,
            log_file,
        } => run_play(config, delay_ms, computer_first, log_file).await,
        Command::Evaluate { board, json } => {
            init_stderr_logging();
            println!("{}", evaluate_report(&board, json)?);
            Ok(())
        }
        Command::Suggest {
            board,
            json,
            verbose,
        } => {
            init_stderr_logging();
            println!("{}", suggest_report(&board, json, verbose)?);
            Ok(())
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// One-shot commands log to stderr so stdout stays machine-readable.
fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the interactive terminal game
async fn run_play(
    config_path: Option<PathBuf>,
    delay_ms: Option<u64>,
    computer_first: bool,
    log_file: Option<PathBuf>,
) -> Result<()> {
    let mut config = GameConfig::load(config_path.as_deref())?;
    if let Some(delay_ms) = delay_ms {
        config = config.with_computer_delay_ms(delay_ms);
    }
    if computer_first {
        config = config.with_first_player(FirstPlayer::Computer);
    }
    if let Some(log_file) = log_file {
        config = config.with_log_file(log_file);
    }

    // Log to a file so the terminal UI is not overwritten
    let file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init();

    info!(?config, "Starting minimax game");
    run_tui(config).await
}
