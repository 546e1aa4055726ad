//! Command-line interface for strictly_replay.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_replay_engine::DisplayOrder;

/// Strictly Replay - tic-tac-toe with move history and replay
#[derive(Parser, Debug)]
#[command(name = "strictly_replay")]
#[command(about = "Tic-tac-toe with move history and replay", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (optional)
    #[arg(short, long, global = true, default_value = "strictly_replay.toml")]
    pub config: PathBuf,

    /// Move list order, overriding the configuration file
    #[arg(long, global = true)]
    pub order: Option<DisplayOrder>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply a list of moves without a terminal UI and print the result
    Replay {
        /// Cells to play in order: indices 0-8 or labels such as `center`
        #[arg(short, long, value_delimiter = ',', required = true)]
        moves: Vec<String>,

        /// Step to jump to after the moves are applied
        #[arg(short, long)]
        jump: Option<usize>,

        /// Print a JSON snapshot instead of text
        #[arg(long)]
        json: bool,
    },
}
