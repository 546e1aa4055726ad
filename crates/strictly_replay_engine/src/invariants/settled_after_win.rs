//! Settled invariant: nothing is played on top of a won board.

use super::Invariant;
use crate::GameState;
use crate::rules::calculate_winner;

/// Invariant: no history entry follows a board that already has a
/// completed line.
pub struct SettledAfterWinInvariant;

impl Invariant<GameState> for SettledAfterWinInvariant {
    fn holds(state: &GameState) -> bool {
        let entries = state.history().entries();
        entries
            .iter()
            .take(entries.len().saturating_sub(1))
            .all(|entry| calculate_winner(entry.board()).is_none())
    }

    fn description() -> &'static str {
        "No move is recorded after a winning board"
    }
}
