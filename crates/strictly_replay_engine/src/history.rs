//! Board snapshots recorded after every accepted move.

use super::{Board, Move, Position, Square};
use serde::Serialize;
use tracing::{debug, instrument};

/// An immutable board snapshot taken after a move.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HistoryEntry {
    board: Board,
}

impl HistoryEntry {
    /// Wraps a board snapshot.
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    /// The snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Finds the mark placed between `previous` and this entry.
    ///
    /// Returns the last cell (in index order) that went from empty to a
    /// mark, or `None` when nothing was placed.
    pub fn placement_since(&self, previous: &HistoryEntry) -> Option<Move> {
        Position::ALL.iter().rev().find_map(|&pos| {
            match (previous.board.get(pos), self.board.get(pos)) {
                (Square::Empty, Square::Occupied(player)) => Some(Move::new(player, pos)),
                _ => None,
            }
        })
    }
}

/// Ordered board snapshots, starting from the empty board.
///
/// Entries are only ever appended, except that playing from an earlier
/// step first drops every entry after it.
///
/// A `History` can only be built by [`History::new`] and grown by
/// [`History::branch`], so it always starts with the empty board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates a history holding only the empty starting board.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::new(Board::new())],
        }
    }

    /// Builds a history from raw boards without any checks.
    #[cfg(test)]
    pub(crate) fn from_boards(boards: &[Board]) -> Self {
        Self {
            entries: boards.iter().cloned().map(HistoryEntry::new).collect(),
        }
    }

    /// Number of recorded steps, including the start.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// False for any history built through the public API.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the newest entry (0 when there are none).
    pub fn last_step(&self) -> usize {
        self.entries.len().saturating_sub(1)
    }

    /// Returns the entry at `step`.
    pub fn get(&self, step: usize) -> Option<&HistoryEntry> {
        self.entries.get(step)
    }

    /// All entries in step order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Returns the move that produced `step`, if `step > 0`.
    pub fn placement_at(&self, step: usize) -> Option<Move> {
        let previous = self.entries.get(step.checked_sub(1)?)?;
        self.entries.get(step)?.placement_since(previous)
    }

    /// Records `board` as the successor of `from_step`.
    ///
    /// Entries after `from_step` belong to an abandoned branch and are
    /// discarded. Returns the step of the new entry.
    #[instrument(skip(self, board), fields(len = self.entries.len()))]
    pub fn branch(&mut self, from_step: usize, board: Board) -> usize {
        let keep = (from_step + 1).min(self.entries.len());
        if keep < self.entries.len() {
            debug!(
                discarded = self.entries.len() - keep,
                "Truncating abandoned branch"
            );
            self.entries.truncate(keep);
        }
        self.entries.push(HistoryEntry::new(board));
        self.last_step()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
