//! Application state and key handling.

use super::input::{digit_to_position, move_cursor};
use crossterm::event::KeyCode;
use strictly_replay_engine::{DisplayOrder, GameEngine, MoveOutcome, Position};
use tracing::{debug, instrument, warn};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    Board,
    /// Arrow keys move through the move list.
    Moves,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    focus: Focus,
    selected: usize,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(order: DisplayOrder) -> Self {
        Self {
            engine: GameEngine::with_order(order),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            status_message: HELP.to_string(),
            should_quit: false,
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Index into the move list of the highlighted row.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.switch_focus(),
            KeyCode::Char('o') => {
                self.engine.toggle_order();
                self.select_current();
                self.status_message = format!("Move list order: {}", self.engine.display_order());
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('j') | KeyCode::Char('k') => {
                if self.focus == Focus::Board {
                    self.focus = Focus::Moves;
                    self.select_current();
                }
                self.handle_moves_key(key);
            }
            code if digit_to_position(code).is_some() => {
                if let Some(pos) = digit_to_position(code) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::Moves => self.handle_moves_key(code),
            },
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_moves_key(&mut self, key: KeyCode) {
        let len = self.engine.history().len();
        match key {
            KeyCode::Up | KeyCode::Char('k') => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1).min(len.saturating_sub(1));
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.jump_to_selected(),
            _ => {}
        }
    }

    fn switch_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        };
        self.select_current();
        debug!(focus = ?self.focus, "Focus switched");
    }

    /// Highlights the move list row of the current step.
    fn select_current(&mut self) {
        self.selected = self
            .engine
            .history_view()
            .iter()
            .position(|item| item.is_current)
            .unwrap_or(0);
    }

    fn play(&mut self, pos: Position) {
        self.status_message = match self.engine.play(pos) {
            MoveOutcome::Placed { action, .. } => {
                format!("{} played {}", action.player, action.position)
            }
            MoveOutcome::Ignored(reason) => reason.to_string(),
        };
        self.select_current();
    }

    fn jump_to_selected(&mut self) {
        let Some(item) = self.engine.history_view().get(self.selected).copied() else {
            return;
        };
        match self.engine.jump_to(item.step) {
            Ok(()) => self.status_message = item.description.to_string(),
            Err(e) => {
                warn!(error = %e, "Jump rejected");
                self.status_message = e.to_string();
            }
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.engine.reset();
        self.cursor = Position::Center;
        self.selected = 0;
        self.status_message = "Game restarted. Player X's turn.".to_string();
    }
}

const HELP: &str =
    "Arrows/1-9 move, Enter plays, Tab or j/k for moves, o order, r restart, q quit";

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_replay_engine::{GameStatus, Player};

    fn press(app: &mut App, keys: &[KeyCode]) {
        for &key in keys {
            app.handle_key(key);
        }
    }

    #[test]
    fn test_digits_play_moves() {
        let mut app = App::new(DisplayOrder::Ascending);
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5')]);
        assert_eq!(app.engine().history().len(), 3);
        assert_eq!(app.cursor(), Position::Center);
        assert_eq!(app.status_message(), "O played Center");
    }

    #[test]
    fn test_occupied_cell_reports_reason() {
        let mut app = App::new(DisplayOrder::Ascending);
        press(&mut app, &[KeyCode::Enter, KeyCode::Enter]);
        assert_eq!(app.engine().history().len(), 2);
        assert_eq!(app.status_message(), "Square Center is already occupied");
    }

    #[test]
    fn test_cursor_then_enter_plays_at_cursor() {
        let mut app = App::new(DisplayOrder::Ascending);
        press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Char(' ')]);
        assert_eq!(
            app.engine().current_board().get(Position::TopLeft).player(),
            Some(Player::X)
        );
    }

    #[test]
    fn test_jump_via_move_list() {
        let mut app = App::new(DisplayOrder::Ascending);
        press(
            &mut app,
            &[KeyCode::Char('1'), KeyCode::Char('2'), KeyCode::Char('3')],
        );
        press(&mut app, &[KeyCode::Tab]);
        assert_eq!(app.focus(), Focus::Moves);
        assert_eq!(app.selected(), 3);

        press(&mut app, &[KeyCode::Up, KeyCode::Up, KeyCode::Enter]);
        assert_eq!(app.engine().current_step(), 1);
        assert_eq!(app.engine().status(), GameStatus::InProgress(Player::O));
        assert_eq!(app.status_message(), "Go to move #1: (col=1, row=1)");
    }

    #[test]
    fn test_vim_keys_from_board_walk_move_list() {
        let mut app = App::new(DisplayOrder::Ascending);
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('2')]);
        assert_eq!(app.focus(), Focus::Board);
        let cursor = app.cursor();

        press(&mut app, &[KeyCode::Char('k')]);
        assert_eq!(app.focus(), Focus::Moves);
        assert_eq!(app.selected(), 1);
        assert_eq!(app.cursor(), cursor);

        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.engine().current_step(), 1);
        assert_eq!(app.engine().history().len(), 3);

        press(&mut app, &[KeyCode::Tab, KeyCode::Char('j')]);
        assert_eq!(app.focus(), Focus::Moves);
        assert_eq!(app.selected(), 2);
    }

    #[test]
    fn test_descending_order_keeps_selection_on_current() {
        let mut app = App::new(DisplayOrder::Ascending);
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('2')]);
        press(&mut app, &[KeyCode::Tab, KeyCode::Char('o')]);
        assert_eq!(app.engine().display_order(), DisplayOrder::Descending);
        assert_eq!(app.selected(), 0);

        // Bottom of the descending list is the start.
        press(&mut app, &[KeyCode::Char('j'), KeyCode::Char('j'), KeyCode::Char('j')]);
        assert_eq!(app.selected(), 2);
        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.engine().current_step(), 0);
    }

    #[test]
    fn test_restart_and_quit() {
        let mut app = App::new(DisplayOrder::Descending);
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('r')]);
        assert_eq!(app.engine().history().len(), 1);
        assert_eq!(app.engine().display_order(), DisplayOrder::Descending);
        assert!(!app.should_quit());
        press(&mut app, &[KeyCode::Char('q')]);
        assert!(app.should_quit());
    }
}
