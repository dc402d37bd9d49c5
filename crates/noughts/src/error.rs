//! Engine error types.

use super::{Mark, Position};

/// Error returned when the engine rejects a request.
///
/// State is never changed when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// A move was attempted after the round ended.
    #[display("Game is already over")]
    GameOver,

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The cell index was outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    IndexOutOfRange(usize),

    /// A blank name was given for a seat when starting a session.
    #[display("Player {} needs a name", _0)]
    InvalidName(Mark),

    /// A serialized engine whose board, history and status disagree.
    #[display("Inconsistent engine snapshot: {}", _0)]
    InvalidSnapshot(&'static str),
}

impl EngineError {
    /// True for the errors ordinary misclicks produce.
    ///
    /// Presenters ignore these; anything else is either an integration bug or
    /// a validation message for the user.
    pub fn is_misclick(&self) -> bool {
        matches!(self, EngineError::GameOver | EngineError::CellOccupied(_))
    }
}

impl std::error::Error for EngineError {}
