//! Headless replay: drive the engine from a move list and render the result.

use anyhow::{Context, Result, anyhow};
use std::fmt;
use strictly_replay_engine::{DisplayOrder, GameEngine, GameStatus, MoveOutcome, Position};
use tracing::{info, instrument, warn};

/// Parses move tokens (indices 0-8 or position labels).
///
/// # Errors
///
/// Fails on the first token that names no cell.
#[instrument]
pub fn parse_moves(tokens: &[String]) -> Result<Vec<Position>> {
    tokens
        .iter()
        .map(|token| {
            Position::from_label_or_number(token).ok_or_else(|| {
                anyhow!("Unrecognised cell `{}` (expected 0-8 or a label like `center`)", token)
            })
        })
        .collect()
}

/// Result of a headless replay.
#[derive(Debug, Clone)]
pub struct ReplayReport {
    /// Engine after all commands.
    pub engine: GameEngine,
    /// Outcome of every move, in input order.
    pub outcomes: Vec<(Position, MoveOutcome)>,
}

/// Plays `moves` on a fresh engine, then optionally jumps to `jump`.
#[instrument(skip(moves), fields(move_count = moves.len()))]
pub fn replay(
    order: DisplayOrder,
    moves: &[Position],
    jump: Option<usize>,
) -> Result<ReplayReport> {
    let mut engine = GameEngine::with_order(order);
    let outcomes = moves
        .iter()
        .map(|&pos| {
            let outcome = engine.play(pos);
            if let MoveOutcome::Ignored(reason) = outcome {
                warn!(%pos, %reason, "Move ignored");
            }
            (pos, outcome)
        })
        .collect();

    if let Some(step) = jump {
        engine
            .jump_to(step)
            .with_context(|| format!("Cannot jump to step {}", step))?;
    }

    info!(status = %engine.status(), step = engine.current_step(), "Replay finished");
    Ok(ReplayReport { engine, outcomes })
}

impl ReplayReport {
    /// Renders the board, status and move list as plain text.
    pub fn render_text(&self) -> String {
        self.to_string()
    }

    /// Renders the engine snapshot as pretty JSON.
    pub fn render_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.engine.snapshot())
            .context("Failed to serialize snapshot")
    }
}

impl fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let engine = &self.engine;

        for (pos, outcome) in &self.outcomes {
            if let MoveOutcome::Ignored(reason) = outcome {
                writeln!(f, "ignored {}: {}", pos.to_index(), reason)?;
            }
        }

        writeln!(f, "{}", engine.current_board())?;
        writeln!(f)?;
        writeln!(f, "{}", engine.status())?;
        if let (GameStatus::Winner(_), Some(line)) = (engine.status(), engine.winning_line()) {
            let cells: Vec<String> = line.iter().map(|p| p.to_index().to_string()).collect();
            writeln!(f, "Winning line: {}", cells.join(", "))?;
        }
        writeln!(f)?;
        for item in engine.history_view() {
            let marker = if item.is_current { '>' } else { ' ' };
            writeln!(f, "{} {}. {}", marker, item.step, item.description)?;
        }
        Ok(())
    }
}
