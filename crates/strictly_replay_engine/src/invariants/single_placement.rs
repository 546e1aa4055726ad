//! Placement invariant: each step adds exactly one mark.

use super::Invariant;
use crate::{GameState, Position, Square};

/// Invariant: `history[k]` differs from `history[k-1]` in exactly one
/// square, and that square goes from empty to a mark.
pub struct SinglePlacementInvariant;

impl Invariant<GameState> for SinglePlacementInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().entries().windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            let mut placed = 0;
            for pos in Position::ALL {
                match (before.get(pos), after.get(pos)) {
                    (a, b) if a == b => {}
                    (Square::Empty, Square::Occupied(_)) => placed += 1,
                    // A mark was removed or overwritten.
                    _ => return false,
                }
            }
            placed == 1
        })
    }

    fn description() -> &'static str {
        "Each history step places exactly one mark on an empty square"
    }
}
