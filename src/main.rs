//! Tictactoe - unified CLI
//!
//! Interactive terminal game plus a headless simulation mode.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use tictactoe::{GameConfig, Mode, simulate};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { mode, log_file } => run_play(cli.config, mode, log_file).await,
        Command::Simulate { games, seed, json } => run_simulate(cli.config, games, seed, json),
    }
}

/// Loads the config file if one was given, defaults otherwise.
fn load_config(path: Option<PathBuf>) -> Result<GameConfig> {
    match path {
        Some(path) => GameConfig::from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(GameConfig::default()),
    }
}

/// Run the terminal UI
async fn run_play(config: Option<PathBuf>, mode: Option<Mode>, log_file: PathBuf) -> Result<()> {
    // Log to a file so output does not interfere with the TUI
    let file = std::fs::File::create(&log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init();

    let config = load_config(config)?;
    let menu_mode = mode.unwrap_or(*config.default_mode());
    info!(?config, menu_mode = %menu_mode, "Starting tictactoe TUI");

    tui::run_tui(config, menu_mode).await
}

/// Run heuristic self-play
#[instrument(skip(config))]
fn run_simulate(config: Option<PathBuf>, games: u32, seed: Option<u64>, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(config)?;
    let seed = seed.unwrap_or_else(rand::random);
    info!(seed, games, "Running simulation");

    let report = simulate(games, seed, *config.opponent_mark());
    if json {
        let out = serde_json::json!({ "seed": seed, "report": report });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("seed {}: {}", seed, report);
    }
    Ok(())
}
