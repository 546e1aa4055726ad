//! Origin invariant: the first history entry is the empty board.

use super::Invariant;
use crate::{Board, GameState, HistoryEntry};

/// Invariant: `history[0]` is the all-empty board.
pub struct EmptyOriginInvariant;

impl Invariant<GameState> for EmptyOriginInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().get(0).map(HistoryEntry::board) == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}
