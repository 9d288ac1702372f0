//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe::Mode;

/// Tic-tac-toe in the terminal, against a friend or a greedy heuristic
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Terminal tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Mode highlighted in the menu (overrides the config file)
        #[arg(long, value_enum)]
        mode: Option<Mode>,

        /// File receiving log output while the UI owns the terminal
        #[arg(long, default_value = "tictactoe.log")]
        log_file: PathBuf,
    },

    /// Play the heuristic against itself and print the tally
    Simulate {
        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Random seed (random if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
