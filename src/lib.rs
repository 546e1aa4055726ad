//! Strictly Replay library - tic-tac-toe with move history and replay
//!
//! The game logic lives in [`strictly_replay_engine`]; this crate adds the
//! shell around it.
//!
//! # Architecture
//!
//! - **Engine**: history, replay and rules (re-exported below)
//! - **Config**: optional TOML settings for the shell
//! - **Replay**: headless driver that prints text or JSON
//! - **TUI**: interactive terminal front end
//!
//! # Example
//!
//! ```
//! use strictly_replay::{DisplayOrder, Position, replay};
//!
//! let report = replay(DisplayOrder::Ascending, &[Position::Center], None).unwrap();
//! assert!(report.render_text().contains("Next player: O"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod replay;
mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, ShellConfig};

// Crate-level exports - Headless replay
pub use replay::{ReplayReport, parse_moves, replay};

// Crate-level exports - Terminal UI
pub use tui::{App, Focus, run_tui};

// Crate-level exports - Game types
pub use strictly_replay_engine::{
    Board, DisplayOrder, EngineError, EngineSnapshot, GameEngine, GameState, GameStatus,
    History, HistoryEntry, HistoryItem, IgnoreReason, Move, MoveDescription, MoveOutcome, Player,
    Position, Square, WinningLine, calculate_winner,
};
