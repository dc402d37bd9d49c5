//! Cell count invariant: occupied cells equal moves played.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: exactly `move_count` cells are non-empty.
pub struct CellCountInvariant;

impl Invariant<GameEngine> for CellCountInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.board().occupied_count() == engine.move_count()
    }

    fn description() -> &'static str {
        "Occupied cell count matches move count"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_through_a_round() {
        let mut engine = GameEngine::new();
        assert!(CellCountInvariant::holds(&engine));
        for cell in [4, 0, 8, 2] {
            engine.apply_move(cell).unwrap();
            assert!(CellCountInvariant::holds(&engine));
        }
        assert_eq!(engine.move_count(), 4);
    }

    #[test]
    fn test_extra_history_violates() {
        let mut engine = GameEngine::new();
        engine.apply_move(4).unwrap();
        engine.corrupt_history_for_test();
        assert!(!CellCountInvariant::holds(&engine));
    }
}
