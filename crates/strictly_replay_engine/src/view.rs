//! Derived, read-only views over the engine state.
//!
//! Everything here is computed from the history and the current step; a
//! rendering layer can draw the game from these values alone.

use super::{Board, Move, Player, Position};
use serde::{Deserialize, Serialize};

/// Current status of the game at the selected step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// No winner yet and empty squares remain.
    #[display("Next player: {}", _0)]
    InProgress(Player),
    /// A line is complete.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Full board, no line.
    #[display("Draw!")]
    Draw,
}

/// Order in which the move list is presented.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DisplayOrder {
    /// Oldest step first.
    #[default]
    Ascending,
    /// Newest step first.
    Descending,
}

impl DisplayOrder {
    /// The opposite order.
    pub fn toggled(self) -> Self {
        match self {
            DisplayOrder::Ascending => DisplayOrder::Descending,
            DisplayOrder::Descending => DisplayOrder::Ascending,
        }
    }

    /// Label for the control that switches to the other order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            DisplayOrder::Ascending => "Descending",
            DisplayOrder::Descending => "Ascending",
        }
    }
}

/// What a history step represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDescription {
    /// The empty starting board.
    Start,
    /// The mark placed to reach this step.
    Move {
        /// Step number (1-based, equal to the history index).
        step: usize,
        /// The mark that was placed.
        action: Move,
    },
}

impl std::fmt::Display for MoveDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveDescription::Start => f.write_str("Go to start"),
            MoveDescription::Move { step, action } => write!(
                f,
                "Go to move #{}: (col={}, row={})",
                step,
                action.position.col() + 1,
                action.position.row() + 1
            ),
        }
    }
}

/// One row of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_new::new)]
pub struct HistoryItem {
    /// History index this item jumps to.
    pub step: usize,
    /// Description of the step.
    pub description: MoveDescription,
    /// True for the step currently shown on the board.
    pub is_current: bool,
}

/// Serializable picture of everything a rendering layer needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineSnapshot {
    /// Board at the current step.
    pub board: Board,
    /// Selected history index.
    pub current_step: usize,
    /// Status at the current step.
    pub status: GameStatus,
    /// Winning line, when status is a win.
    pub winning_line: Option<[Position; 3]>,
    /// Move list order.
    pub display_order: DisplayOrder,
    /// Move list in display order.
    pub moves: Vec<HistoryItem>,
}
