//! First-class move records.

use super::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A move: a mark placed at a position.
///
/// The engine keeps the round's moves in order, which is what the
/// invariant checks replay against the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}
