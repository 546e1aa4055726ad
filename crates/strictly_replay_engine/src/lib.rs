//! Tic-tac-toe game engine with move history and replay.
//!
//! The engine keeps every board snapshot of a session, lets callers jump to
//! any earlier step, and discards the abandoned branch when a move is
//! played from the past. Nothing here performs I/O; a rendering layer
//! reads [`GameEngine`]'s derived views and issues commands.
//!
//! # Example
//!
//! ```
//! use strictly_replay_engine::{GameEngine, GameStatus, Player, Position};
//!
//! let mut engine = GameEngine::new();
//! engine.play(Position::Center);
//! engine.play(Position::TopLeft);
//! assert_eq!(engine.status(), GameStatus::InProgress(Player::X));
//!
//! engine.jump_to(1).unwrap();
//! engine.play(Position::BottomRight);
//! assert_eq!(engine.history().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod error;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod state;
mod types;
mod view;

pub use action::{IgnoreReason, Move, MoveOutcome};
pub use engine::GameEngine;
pub use error::EngineError;
pub use history::{History, HistoryEntry};
pub use position::Position;
pub use rules::{WinningLine, calculate_winner};
pub use state::GameState;
pub use types::{Board, Player, Square};
pub use view::{DisplayOrder, EngineSnapshot, GameStatus, HistoryItem, MoveDescription};
