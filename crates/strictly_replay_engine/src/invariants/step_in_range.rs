//! Cursor invariant: the selected step exists.

use super::Invariant;
use crate::GameState;

/// Invariant: `0 <= current_step < len(history)`.
pub struct StepInRangeInvariant;

impl Invariant<GameState> for StepInRangeInvariant {
    fn holds(state: &GameState) -> bool {
        state.current_step() < state.history().len()
    }

    fn description() -> &'static str {
        "Current step indexes an existing history entry"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;
    use crate::invariants::testing::state_from_boards;

    #[test]
    fn test_fresh_state_holds() {
        assert!(StepInRangeInvariant::holds(&GameState::default()));
    }

    #[test]
    fn test_past_end_violates() {
        let state = state_from_boards(&[Board::new()], 1);
        assert!(!StepInRangeInvariant::holds(&state));
    }
}
