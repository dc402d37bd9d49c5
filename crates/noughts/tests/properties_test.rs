//! Property tests over arbitrary click sequences.

use noughts::{Cell, EngineError, GameEngine, GameStatus, Mark, Position, WinLine, check_win};
use proptest::prelude::*;
use strum::IntoEnumIterator;

/// Clicks include a few out-of-range indices to exercise rejection.
fn clicks() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0usize..12, 0..30)
}

fn line_is_uniform(engine: &GameEngine, line: WinLine) -> Option<Mark> {
    let [a, b, c] = line.positions().map(|p| engine.board().get(p));
    match (a, b, c) {
        (Cell::Occupied(m1), Cell::Occupied(m2), Cell::Occupied(m3)) if m1 == m2 && m2 == m3 => {
            Some(m1)
        }
        _ => None,
    }
}

proptest! {
    #[test]
    fn occupied_cells_match_move_count(cells in clicks()) {
        let mut engine = GameEngine::new();
        for cell in cells {
            let _ = engine.apply_move(cell);
            prop_assert_eq!(engine.board().occupied_count(), engine.move_count());
            prop_assert!(engine.move_count() <= 9);
        }
    }

    #[test]
    fn rejected_moves_never_mutate(cells in clicks()) {
        let mut engine = GameEngine::with_players("Alice", "Bob").unwrap();
        for cell in cells {
            let before = engine.clone();
            match engine.apply_move(cell) {
                Ok(_) => {
                    prop_assert_eq!(engine.move_count(), before.move_count() + 1);
                }
                Err(err) => {
                    prop_assert_eq!(&engine, &before);
                    match err {
                        EngineError::GameOver => prop_assert!(before.is_over()),
                        EngineError::IndexOutOfRange(i) => prop_assert!(i > 8),
                        EngineError::CellOccupied(pos) => {
                            prop_assert!(!before.board().is_empty(pos));
                        }
                        EngineError::InvalidName(_) | EngineError::InvalidSnapshot(_) => {
                            prop_assert!(false, "not a move error")
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn check_win_matches_uniform_lines(cells in clicks()) {
        let mut engine = GameEngine::new();
        for cell in cells {
            let _ = engine.apply_move(cell);
            for mark in [Mark::X, Mark::O] {
                let expected = WinLine::iter().any(|l| line_is_uniform(&engine, l) == Some(mark));
                prop_assert_eq!(check_win(engine.board(), mark), expected);
            }
        }
    }

    #[test]
    fn status_agrees_with_board(cells in clicks()) {
        let mut engine = GameEngine::new();
        for cell in cells {
            let _ = engine.apply_move(cell);
            match *engine.status() {
                GameStatus::Won { winner, line } => {
                    prop_assert_eq!(line_is_uniform(&engine, line), Some(winner));
                    let last = engine.history().last().copied();
                    prop_assert_eq!(last.map(|m| m.mark), Some(winner));
                }
                GameStatus::Draw => {
                    prop_assert_eq!(engine.move_count(), 9);
                    prop_assert!(WinLine::iter().all(|l| line_is_uniform(&engine, l).is_none()));
                }
                GameStatus::InProgress { .. } => {
                    prop_assert!(engine.move_count() < 9);
                    prop_assert!(WinLine::iter().all(|l| line_is_uniform(&engine, l).is_none()));
                }
            }
        }
    }

    #[test]
    fn reset_preserves_score_and_session_zeroes_it(rounds in prop::collection::vec(clicks(), 1..5)) {
        let mut engine = GameEngine::with_players("Alice", "Bob").unwrap();
        for cells in rounds {
            for cell in cells {
                let _ = engine.apply_move(cell);
            }
            let scores = engine.scoreboard().clone();
            engine.reset_round();
            prop_assert_eq!(engine.scoreboard(), &scores);
            prop_assert_eq!(engine.available_positions().len(), Position::ALL.len());
        }
        engine.start_new_session("Carol", "Dave").unwrap();
        prop_assert_eq!(engine.scoreboard().rounds_played(), 0);
    }
}
