//! The session state owned by the engine.

use super::history::{History, HistoryEntry};
use super::view::DisplayOrder;
use super::{Board, Player};
use serde::Serialize;

/// Complete game state for one session.
///
/// The next player is not stored; it follows from the parity of
/// `current_step`. It is only constructed through [`GameState::new`];
/// there is no deserialization path that could bypass the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Board snapshots, starting with the empty board.
    pub(crate) history: History,
    /// Index of the snapshot currently shown.
    pub(crate) current_step: usize,
    /// Move list presentation order.
    pub(crate) display_order: DisplayOrder,
}

impl GameState {
    /// Creates a fresh session.
    pub fn new(display_order: DisplayOrder) -> Self {
        Self {
            history: History::new(),
            current_step: 0,
            display_order,
        }
    }

    /// Returns the move history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the selected step.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns the move list order.
    pub fn display_order(&self) -> DisplayOrder {
        self.display_order
    }

    /// Player to move at the selected step.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// Entry at the selected step, if the step is valid.
    pub fn current_entry(&self) -> Option<&HistoryEntry> {
        self.history.get(self.current_step)
    }

    /// Board at the selected step.
    ///
    /// Falls back to the starting board should the step ever be invalid.
    pub fn current_board(&self) -> &Board {
        self.current_entry()
            .or_else(|| self.history.get(0))
            .map(HistoryEntry::board)
            .unwrap_or(&EMPTY_BOARD)
    }
}

static EMPTY_BOARD: Board = Board::EMPTY;

impl Default for GameState {
    fn default() -> Self {
        Self::new(DisplayOrder::default())
    }
}
