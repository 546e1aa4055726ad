//! First-class invariants for the replay engine.
//!
//! Invariants are logical properties of [`GameState`](crate::GameState) that
//! must hold after every command. They are checked in debug builds and can
//! be tested independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);
impl_invariant_set!(I1, I2, I3, I4, I5);

pub mod alternating_turn;
pub mod empty_origin;
pub mod settled_after_win;
pub mod single_placement;
pub mod step_in_range;

pub use alternating_turn::AlternatingTurnInvariant;
pub use empty_origin::EmptyOriginInvariant;
pub use settled_after_win::SettledAfterWinInvariant;
pub use single_placement::SinglePlacementInvariant;
pub use step_in_range::StepInRangeInvariant;

/// All replay engine invariants as a composable set.
pub type ReplayInvariants = (
    EmptyOriginInvariant,
    SinglePlacementInvariant,
    AlternatingTurnInvariant,
    StepInRangeInvariant,
    SettledAfterWinInvariant,
);

#[cfg(test)]
pub(crate) mod testing {
    use crate::{Board, GameState, History};

    /// Builds a state from raw boards, bypassing the engine's checks.
    pub fn state_from_boards(boards: &[Board], current_step: usize) -> GameState {
        let mut state = GameState::default();
        state.history = History::from_boards(boards);
        state.current_step = current_step;
        state
    }
}

#[cfg(test)]
mod tests {
    use super::testing::state_from_boards;
    use super::*;
    use crate::{Board, GameEngine, GameState, Player, Position};

    #[test]
    fn test_invariant_set_holds_for_new_state() {
        assert!(ReplayInvariants::check_all(&GameState::default()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_play_and_jump() {
        let mut engine = GameEngine::new();
        for pos in [Position::TopLeft, Position::Center, Position::TopRight] {
            engine.play(pos);
        }
        engine.jump_to(1).expect("step 1 exists");
        engine.play(Position::BottomRight);
        assert!(ReplayInvariants::check_all(engine.state()).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        // Step 1 places two marks, one of them for the wrong player.
        let b1 = Board::new()
            .with_mark(Position::TopLeft, Player::O)
            .with_mark(Position::Center, Player::O);
        let state = state_from_boards(&[Board::new(), b1], 1);

        let violations = ReplayInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (EmptyOriginInvariant, StepInRangeInvariant);
        assert!(TwoInvariants::check_all(&GameState::default()).is_ok());
    }
}
