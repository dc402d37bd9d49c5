//! Alternating turn invariant: X, O, X, O, ...

use super::super::{GameEngine, GameStatus, Mark};
use super::Invariant;

/// Invariant: marks alternate, starting with X.
///
/// While the round is in progress the mark to move must match the parity of
/// the history.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();

        if let Some(first) = history.first()
            && first.mark != Mark::X
        {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].mark == pair[1].mark) {
            return false;
        }

        match engine.status() {
            GameStatus::InProgress { to_move } => {
                let expected = if history.len() % 2 == 0 {
                    Mark::X
                } else {
                    Mark::O
                };
                *to_move == expected
            }
            GameStatus::Won { .. } | GameStatus::Draw => true,
        }
    }

    fn description() -> &'static str {
        "Marks alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_engine_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameEngine::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut engine = GameEngine::new();
        for cell in [0, 4, 2, 6, 8] {
            engine.apply_move(cell).unwrap();
            assert!(AlternatingTurnInvariant::holds(&engine));
        }
        assert_eq!(engine.to_move(), Some(Mark::O));
    }

    #[test]
    fn test_same_mark_twice_violates() {
        let mut engine = GameEngine::new();
        engine.apply_move(4).unwrap();
        engine.corrupt_history_for_test();
        assert!(!AlternatingTurnInvariant::holds(&engine));
    }
}
