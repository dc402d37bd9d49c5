//! Status and score text derived from engine state.
//!
//! The only place display strings are built; the engine never writes text.

use noughts::{GameEngine, GameStatus, Mark};

/// One-line status for the current round.
pub fn status_line(engine: &GameEngine) -> String {
    let scores = engine.scoreboard();
    match engine.status() {
        GameStatus::InProgress { to_move } => {
            format!("{}'s turn ({})", scores.display_name(*to_move), to_move)
        }
        GameStatus::Won { winner, line } => {
            format!(
                "{} wins! ({}, {})",
                scores.display_name(*winner),
                winner,
                line
            )
        }
        GameStatus::Draw => "It's a draw!".to_string(),
    }
}

/// Score rows: one per mark, then draws.
pub fn score_lines(engine: &GameEngine) -> Vec<String> {
    let scores = engine.scoreboard();
    let mut lines: Vec<String> = [Mark::X, Mark::O]
        .into_iter()
        .map(|mark| {
            format!(
                "{} {}: {}",
                mark,
                scores.display_name(mark),
                scores.wins(mark)
            )
        })
        .collect();
    lines.push(format!("Draws: {}", scores.draws()));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_line_uses_names() {
        let mut engine = GameEngine::with_players("Alice", "Bob").unwrap();
        assert_eq!(status_line(&engine), "Alice's turn (X)");
        engine.apply_move(4).unwrap();
        assert_eq!(status_line(&engine), "Bob's turn (O)");
    }

    #[test]
    fn test_anonymous_turn_line() {
        let engine = GameEngine::new();
        assert_eq!(status_line(&engine), "Player X's turn (X)");
    }

    #[test]
    fn test_win_and_draw_lines() {
        let mut engine = GameEngine::with_players("Alice", "Bob").unwrap();
        for cell in [0, 1, 4, 2, 8] {
            engine.apply_move(cell).unwrap();
        }
        assert_eq!(status_line(&engine), "Alice wins! (X, main diagonal)");

        engine.reset_round();
        for cell in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            engine.apply_move(cell).unwrap();
        }
        assert_eq!(status_line(&engine), "It's a draw!");
    }

    #[test]
    fn test_score_lines() {
        let mut engine = GameEngine::with_players("Alice", "Bob").unwrap();
        for cell in [0, 3, 1, 4, 2] {
            engine.apply_move(cell).unwrap();
        }
        assert_eq!(
            score_lines(&engine),
            vec!["X Alice: 1", "O Bob: 0", "Draws: 0"]
        );
    }
}
