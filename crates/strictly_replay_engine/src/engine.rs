//! The game-state and history engine.
//!
//! [`GameEngine`] owns a single [`GameState`] and is the only thing that
//! mutates it. Commands run to completion; queries derive everything from
//! the history and the selected step.

use super::action::{IgnoreReason, Move, MoveOutcome};
use super::error::EngineError;
use super::invariants::{InvariantSet, ReplayInvariants};
use super::rules::{WinningLine, calculate_winner, is_draw};
use super::state::GameState;
use super::view::{DisplayOrder, EngineSnapshot, GameStatus, HistoryItem, MoveDescription};
use super::{Board, History, Player, Position};
use tracing::{debug, error, info, instrument};

/// Tic-tac-toe engine with move history and replay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates a new session with an ascending move list.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(DisplayOrder::default())
    }

    /// Creates a new session with the given move list order.
    #[instrument]
    pub fn with_order(display_order: DisplayOrder) -> Self {
        Self {
            state: GameState::new(display_order),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the move history.
    pub fn history(&self) -> &History {
        self.state.history()
    }

    /// Returns the selected step.
    pub fn current_step(&self) -> usize {
        self.state.current_step()
    }

    /// Returns the board at the selected step.
    pub fn current_board(&self) -> &Board {
        self.state.current_board()
    }

    /// Returns the player to move at the selected step.
    pub fn next_player(&self) -> Player {
        self.state.next_player()
    }

    /// Returns the move list order.
    pub fn display_order(&self) -> DisplayOrder {
        self.state.display_order()
    }

    // ─────────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────────

    /// Places the next player's mark at `position`.
    ///
    /// The move is ignored when the square is taken or the board at the
    /// selected step is already won. Otherwise every step after the
    /// selected one is discarded and the new board becomes the last step.
    #[instrument(skip(self), fields(step = self.state.current_step))]
    pub fn play(&mut self, position: Position) -> MoveOutcome {
        let board = self.state.current_board();

        if let Some(win) = calculate_winner(board) {
            debug!(winner = %win.player, "Ignoring move on a won board");
            return MoveOutcome::Ignored(IgnoreReason::GameOver(win.player));
        }

        if !board.is_empty(position) {
            debug!("Ignoring move on an occupied square");
            return MoveOutcome::Ignored(IgnoreReason::SquareOccupied(position));
        }

        let action = Move::new(self.state.next_player(), position);
        let next = board.with_mark(position, action.player);
        let step = self.state.history.branch(self.state.current_step, next);
        self.state.current_step = step;

        info!(%action, step, "Move placed");
        self.check_invariants();
        MoveOutcome::Placed { step, action }
    }

    /// Places a mark by raw cell index (0-8).
    ///
    /// Indices off the board are ignored like any other illegal move.
    #[instrument(skip(self))]
    pub fn play_index(&mut self, index: usize) -> MoveOutcome {
        match Position::from_index(index) {
            Some(position) => self.play(position),
            None => {
                debug!("Ignoring move off the board");
                MoveOutcome::Ignored(IgnoreReason::OutOfBounds(index))
            }
        }
    }

    /// Selects a history step without modifying the history.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::StepOutOfRange`] and leaves the state
    /// untouched if `step` is not in the history.
    #[instrument(skip(self), fields(len = self.state.history.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), EngineError> {
        let len = self.state.history.len();
        if step >= len {
            return Err(EngineError::StepOutOfRange { step, len });
        }
        self.state.current_step = step;
        info!(step, "Jumped to step");
        self.check_invariants();
        Ok(())
    }

    /// Flips the move list between ascending and descending order.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) {
        self.state.display_order = self.state.display_order.toggled();
        debug!(order = %self.state.display_order, "Display order toggled");
    }

    /// Starts a new session, keeping the move list order.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state = GameState::new(self.state.display_order);
        info!("Game reset");
    }

    // ─────────────────────────────────────────────────────────────
    //  Derived views
    // ─────────────────────────────────────────────────────────────

    /// Returns the winner and line on the selected board, if any.
    pub fn winner(&self) -> Option<WinningLine> {
        calculate_winner(self.current_board())
    }

    /// Returns the completed line on the selected board, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.winner().map(|w| w.line)
    }

    /// Returns true if `position` is part of the winning line.
    pub fn is_winning_square(&self, position: Position) -> bool {
        self.winner().is_some_and(|w| w.contains(position))
    }

    /// Status at the selected step.
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        if let Some(win) = calculate_winner(board) {
            GameStatus::Winner(win.player)
        } else if is_draw(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(self.next_player())
        }
    }

    /// Describes the history entry at `step`.
    ///
    /// Returns `None` for steps outside the history.
    pub fn move_description(&self, step: usize) -> Option<MoveDescription> {
        if step == 0 {
            return self.history().get(0).map(|_| MoveDescription::Start);
        }
        self.history()
            .placement_at(step)
            .map(|action| MoveDescription::Move { step, action })
    }

    /// The move list, in display order.
    #[instrument(skip(self))]
    pub fn history_view(&self) -> Vec<HistoryItem> {
        let current = self.current_step();
        let mut items: Vec<HistoryItem> = (0..self.history().len())
            .filter_map(|step| {
                self.move_description(step)
                    .map(|description| HistoryItem::new(step, description, step == current))
            })
            .collect();
        if self.display_order() == DisplayOrder::Descending {
            items.reverse();
        }
        items
    }

    /// Captures every derived view at once.
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            board: self.current_board().clone(),
            current_step: self.current_step(),
            status: self.status(),
            winning_line: self.winning_line(),
            display_order: self.display_order(),
            moves: self.history_view(),
        }
    }

    fn check_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = ReplayInvariants::check_all(&self.state)
        {
            for violation in &violations {
                error!(%violation, "Invariant violated");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(engine: &mut GameEngine, cells: &[usize]) {
        for &cell in cells {
            assert!(engine.play_index(cell).is_placed(), "cell {cell} should be playable");
        }
    }

    #[test]
    fn test_new_engine() {
        let engine = GameEngine::new();
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.current_step(), 0);
        assert_eq!(engine.next_player(), Player::X);
        assert_eq!(engine.status(), GameStatus::InProgress(Player::X));
        assert_eq!(engine.display_order(), DisplayOrder::Ascending);
        assert_eq!(engine.winning_line(), None);
    }

    #[test]
    fn test_first_move() {
        let mut engine = GameEngine::new();
        let outcome = engine.play(Position::TopLeft);
        assert_eq!(
            outcome,
            MoveOutcome::Placed {
                step: 1,
                action: Move::new(Player::X, Position::TopLeft)
            }
        );
        assert_eq!(engine.current_board().get(Position::TopLeft).player(), Some(Player::X));
        assert_eq!(engine.status(), GameStatus::InProgress(Player::O));
    }

    #[test]
    fn test_occupied_square_is_ignored() {
        let mut engine = GameEngine::new();
        engine.play(Position::Center);
        let before = engine.clone();
        assert_eq!(
            engine.play(Position::Center),
            MoveOutcome::Ignored(IgnoreReason::SquareOccupied(Position::Center))
        );
        assert_eq!(engine, before);
    }

    #[test]
    fn test_off_board_index_is_ignored() {
        let mut engine = GameEngine::new();
        let before = engine.clone();
        assert_eq!(
            engine.play_index(9),
            MoveOutcome::Ignored(IgnoreReason::OutOfBounds(9))
        );
        assert_eq!(engine, before);
    }

    #[test]
    fn test_won_board_ignores_moves() {
        let mut engine = GameEngine::new();
        play_all(&mut engine, &[0, 1, 3, 4, 6]);
        let before = engine.clone();
        assert_eq!(
            engine.play_index(8),
            MoveOutcome::Ignored(IgnoreReason::GameOver(Player::X))
        );
        assert_eq!(engine, before);
        assert_eq!(engine.winning_line().map(|l| l.map(Position::to_index)), Some([0, 3, 6]));
        assert!(engine.is_winning_square(Position::MiddleLeft));
        assert!(!engine.is_winning_square(Position::Center));
    }

    #[test]
    fn test_jump_keeps_history() {
        let mut engine = GameEngine::new();
        play_all(&mut engine, &[0, 1, 2]);
        engine.jump_to(1).expect("step exists");
        assert_eq!(engine.history().len(), 4);
        assert_eq!(engine.current_step(), 1);
        assert_eq!(engine.next_player(), Player::O);
        assert_eq!(engine.current_board(), engine.history().get(1).unwrap().board());
    }

    #[test]
    fn test_jump_out_of_range_is_rejected() {
        let mut engine = GameEngine::new();
        play_all(&mut engine, &[4]);
        let before = engine.clone();
        assert_eq!(
            engine.jump_to(2),
            Err(EngineError::StepOutOfRange { step: 2, len: 2 })
        );
        assert_eq!(engine, before);
    }

    #[test]
    fn test_jump_back_from_win_allows_play() {
        let mut engine = GameEngine::new();
        play_all(&mut engine, &[0, 1, 3, 4, 6]);
        engine.jump_to(4).expect("step exists");
        assert_eq!(engine.status(), GameStatus::InProgress(Player::X));
        assert!(engine.play_index(8).is_placed());
        assert_eq!(engine.history().len(), 6);
        assert_eq!(engine.winner(), None);
    }

    #[test]
    fn test_move_descriptions() {
        let mut engine = GameEngine::new();
        play_all(&mut engine, &[4, 2]);
        assert_eq!(engine.move_description(0), Some(MoveDescription::Start));
        assert_eq!(
            engine.move_description(2),
            Some(MoveDescription::Move {
                step: 2,
                action: Move::new(Player::O, Position::TopRight)
            })
        );
        assert_eq!(
            engine.move_description(1).map(|d| d.to_string()),
            Some("Go to move #1: (col=2, row=2)".to_string())
        );
        assert_eq!(engine.move_description(3), None);
    }

    #[test]
    fn test_history_view_marks_current_and_honours_order() {
        let mut engine = GameEngine::new();
        play_all(&mut engine, &[0, 4, 8]);
        engine.jump_to(1).expect("step exists");

        let view = engine.history_view();
        assert_eq!(view.iter().map(|i| i.step).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(
            view.iter().filter(|i| i.is_current).map(|i| i.step).collect::<Vec<_>>(),
            vec![1]
        );

        engine.toggle_order();
        let view = engine.history_view();
        assert_eq!(view.iter().map(|i| i.step).collect::<Vec<_>>(), vec![3, 2, 1, 0]);
        assert!(view[2].is_current);
    }

    #[test]
    fn test_reset_keeps_order() {
        let mut engine = GameEngine::with_order(DisplayOrder::Descending);
        play_all(&mut engine, &[0, 1]);
        engine.reset();
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.current_step(), 0);
        assert_eq!(engine.display_order(), DisplayOrder::Descending);
    }

    #[test]
    fn test_snapshot_matches_views() {
        let mut engine = GameEngine::new();
        play_all(&mut engine, &[0, 1, 3, 4, 6]);
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.status, GameStatus::Winner(Player::X));
        assert_eq!(snapshot.current_step, 5);
        assert_eq!(snapshot.moves.len(), 6);
        assert_eq!(
            snapshot.winning_line,
            Some([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft])
        );
    }
}
