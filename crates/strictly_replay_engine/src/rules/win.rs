//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in the order they are checked.
///
/// Rows first, then columns, then the two diagonals. When a board holds
/// more than one complete line, the earliest entry here wins.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line and the player who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    /// The player with three in a row.
    pub player: Player,
    /// The three positions of the line.
    pub line: [Position; 3],
}

impl WinningLine {
    /// Returns true if `pos` is part of this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }

    /// The line as raw board indices.
    pub fn indices(&self) -> [usize; 3] {
        self.line.map(Position::to_index)
    }
}

/// Finds the first completed line on the board.
///
/// Returns `None` when no line is uniformly marked.
#[instrument(level = "trace")]
pub fn calculate_winner(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => {
                Some(WinningLine {
                    player,
                    line: [a, b, c],
                })
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Player)]) -> Board {
        let mut board = Board::new();
        for &(i, player) in marks {
            board.set(Position::ALL[i], Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(calculate_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[(0, Player::X), (1, Player::X), (2, Player::X)]);
        let win = calculate_winner(&board).expect("top row is complete");
        assert_eq!(win.player, Player::X);
        assert_eq!(win.indices(), [0, 1, 2]);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[(2, Player::O), (4, Player::O), (6, Player::O)]);
        let win = calculate_winner(&board).expect("diagonal is complete");
        assert_eq!(win.player, Player::O);
        assert_eq!(win.indices(), [2, 4, 6]);
        assert!(win.contains(Position::Center));
        assert!(!win.contains(Position::TopLeft));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[(0, Player::X), (1, Player::O), (2, Player::X)]);
        assert_eq!(calculate_winner(&board), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let mut board = Board::new();
            for pos in line {
                board.set(pos, Square::Occupied(Player::O));
            }
            let win = calculate_winner(&board).expect("line is complete");
            assert_eq!(win.line, line);
        }
    }

    #[test]
    fn test_simultaneous_lines_resolve_to_earliest() {
        // Full X board: every line is complete, row 0 comes first.
        let board = Board::from_squares([Square::Occupied(Player::X); 9]);
        assert_eq!(calculate_winner(&board).map(|w| w.indices()), Some([0, 1, 2]));

        // Two disjoint columns: column 0 is checked before column 2.
        let board = board_with(&[
            (2, Player::X),
            (5, Player::X),
            (8, Player::X),
            (0, Player::O),
            (3, Player::O),
            (6, Player::O),
        ]);
        let win = calculate_winner(&board).expect("two lines are complete");
        assert_eq!(win.player, Player::O);
        assert_eq!(win.indices(), [0, 3, 6]);
    }
}
