//! Error types for the replay engine.

use derive_more::{Display, Error};

/// Contract violations reported by the engine.
///
/// Illegal moves are not errors; see [`MoveOutcome`](crate::MoveOutcome).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// A jump targeted a step that is not in the history.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    StepOutOfRange {
        /// The requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
}
