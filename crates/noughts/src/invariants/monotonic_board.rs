//! Monotonic board invariant: cells never change once set.

use super::super::{Board, Cell, GameEngine};
use super::Invariant;

/// Invariant: board cells are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board must never hit an occupied
/// cell and must reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let mut reconstructed = Board::new();

        for mov in engine.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, Cell::Occupied(mov.mark));
        }

        reconstructed == *engine.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
