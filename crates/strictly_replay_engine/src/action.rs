//! First-class move types for tic-tac-toe.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a `play` command had no effect.
///
/// Ignored moves are not failures; the command is simply a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum IgnoreReason {
    /// The cell index is not on the board.
    #[display("Cell {} is off the board", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The current board already has a winner.
    #[display("Game is already won by {}", _0)]
    GameOver(Player),
}

/// Result of a `play` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MoveOutcome {
    /// The mark was placed and recorded as a new history step.
    Placed {
        /// Index of the new history entry.
        step: usize,
        /// The move that was applied.
        action: Move,
    },
    /// The command had no effect.
    Ignored(IgnoreReason),
}

impl MoveOutcome {
    /// Returns true if the move changed the game.
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveOutcome::Placed { .. })
    }
}
