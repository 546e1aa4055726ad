//! Alternating turn invariant: X places on even steps, O on odd steps.

use super::Invariant;
use crate::{GameState, Player, Position, Square};

/// Invariant: every mark new at step `k` belongs to the player whose turn
/// it was at step `k - 1`.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .entries()
            .windows(2)
            .enumerate()
            .all(|(k, pair)| {
                let expected = Player::for_step(k);
                Position::ALL.iter().all(|&pos| {
                    match (pair[0].board().get(pos), pair[1].board().get(pos)) {
                        (Square::Empty, Square::Occupied(player)) => player == expected,
                        _ => true,
                    }
                })
            })
    }

    fn description() -> &'static str {
        "Players alternate, starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invariants::testing::state_from_boards;
    use crate::{Board, GameEngine};

    #[test]
    fn test_engine_history_holds() {
        let mut engine = GameEngine::new();
        for i in [0, 1, 2, 3] {
            engine.play_index(i);
        }
        assert!(AlternatingTurnInvariant::holds(engine.state()));
    }

    #[test]
    fn test_o_first_violates() {
        let b1 = Board::new().with_mark(Position::Center, Player::O);
        let state = state_from_boards(&[Board::new(), b1], 1);
        assert!(!AlternatingTurnInvariant::holds(&state));
    }

    #[test]
    fn test_double_x_violates() {
        let b1 = Board::new().with_mark(Position::Center, Player::X);
        let b2 = b1.with_mark(Position::TopLeft, Player::X);
        let state = state_from_boards(&[Board::new(), b1, b2], 2);
        assert!(!AlternatingTurnInvariant::holds(&state));
    }
}
