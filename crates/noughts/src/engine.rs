//! The game engine: board, turn order, terminal detection and score.

use super::action::Move;
use super::rules::{self, WinLine};
use super::scoreboard::{PlayerName, Scoreboard};
use super::{Board, Cell, EngineError, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Current status of the round.
///
/// Exactly one variant holds at a time. `Won` and `Draw` are terminal until
/// the round is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Round is ongoing.
    InProgress {
        /// Mark that moves next.
        to_move: Mark,
    },
    /// Round ended with three in a row.
    Won {
        /// Mark that completed the line.
        winner: Mark,
        /// The completed line.
        line: WinLine,
    },
    /// Board filled with no line.
    Draw,
}

impl GameStatus {
    /// Returns true if the round has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    /// Returns the winner, if the round was won.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        GameStatus::InProgress { to_move: Mark::X }
    }
}

/// Tic-tac-toe game engine.
///
/// Sole authority on board state, turn order and round results. Each
/// engine is an independent value; there is no shared or static state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawEngine")]
pub struct GameEngine {
    board: Board,
    status: GameStatus,
    history: Vec<Move>,
    scoreboard: Scoreboard,
}

/// Unchecked mirror of [`GameEngine`] used while deserializing.
#[derive(Deserialize)]
struct RawEngine {
    board: Board,
    status: GameStatus,
    history: Vec<Move>,
    scoreboard: Scoreboard,
}

impl TryFrom<RawEngine> for GameEngine {
    type Error = EngineError;

    fn try_from(raw: RawEngine) -> Result<Self, Self::Error> {
        use super::invariants::{EngineInvariants, InvariantSet};

        let engine = Self {
            board: raw.board,
            status: raw.status,
            history: raw.history,
            scoreboard: raw.scoreboard,
        };

        if let Err(violations) = EngineInvariants::check_all(&engine) {
            warn!(count = violations.len(), "Snapshot violates engine invariants");
            let description = violations
                .first()
                .map_or("Engine invariant violated", |v| v.description);
            return Err(EngineError::InvalidSnapshot(description));
        }
        if engine.status != engine.expected_status()? {
            warn!(status = ?engine.status, "Snapshot status disagrees with board");
            return Err(EngineError::InvalidSnapshot(
                "Status does not match the board",
            ));
        }
        Ok(engine)
    }
}

impl GameEngine {
    /// Creates an engine with an empty board, X to move, and unnamed seats.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with a named session already started.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidName`] if either name is blank.
    #[instrument]
    pub fn with_players(x_name: &str, o_name: &str) -> Result<Self, EngineError> {
        let mut engine = Self::new();
        engine.start_new_session(x_name, o_name)?;
        Ok(engine)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the round status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the mark to move, or `None` once the round is over.
    pub fn to_move(&self) -> Option<Mark> {
        match self.status {
            GameStatus::InProgress { to_move } => Some(to_move),
            _ => None,
        }
    }

    /// Number of moves played this round (0-9).
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Moves played this round, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the scoreboard.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Returns true if the round has ended.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Positions a move may still be made on. Empty once the round is over.
    pub fn available_positions(&self) -> Vec<Position> {
        if self.is_over() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Attempts a move for the active mark at a cell index (0-8).
    ///
    /// Returns the resulting status so callers can update the display
    /// without querying again.
    ///
    /// # Errors
    ///
    /// - [`EngineError::GameOver`] if the round has ended.
    /// - [`EngineError::IndexOutOfRange`] if `cell` is not in 0-8.
    /// - [`EngineError::CellOccupied`] if the cell already holds a mark.
    ///
    /// State is unchanged on every error.
    #[instrument(skip(self), fields(move_count = self.history.len()))]
    pub fn apply_move(&mut self, cell: usize) -> Result<GameStatus, EngineError> {
        if self.is_over() {
            debug!("Move rejected: round is over");
            return Err(EngineError::GameOver);
        }
        let Some(position) = Position::from_index(cell) else {
            warn!(cell, "Move rejected: index out of range");
            return Err(EngineError::IndexOutOfRange(cell));
        };
        self.place(position)
    }

    /// Attempts a move for the active mark at a position.
    ///
    /// # Errors
    ///
    /// - [`EngineError::GameOver`] if the round has ended.
    /// - [`EngineError::CellOccupied`] if the cell already holds a mark.
    #[instrument(skip(self), fields(move_count = self.history.len()))]
    pub fn place(&mut self, position: Position) -> Result<GameStatus, EngineError> {
        let GameStatus::InProgress { to_move: mark } = self.status else {
            debug!("Move rejected: round is over");
            return Err(EngineError::GameOver);
        };
        if !self.board.is_empty(position) {
            debug!(%position, "Move rejected: cell occupied");
            return Err(EngineError::CellOccupied(position));
        }

        self.board.set(position, Cell::Occupied(mark));
        self.history.push(Move::new(mark, position));

        // Win is checked before the full-board test so a winning ninth
        // move is reported as a win.
        self.status = if let Some(line) = rules::find_win(&self.board, mark) {
            self.scoreboard.record_win(mark);
            info!(winner = %mark, %line, "Round won");
            GameStatus::Won { winner: mark, line }
        } else if rules::is_full(&self.board) {
            self.scoreboard.record_draw();
            info!("Round drawn");
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                to_move: mark.opponent(),
            }
        };

        #[cfg(debug_assertions)]
        self.check_invariants();

        debug!(%mark, %position, status = ?self.status, "Move applied");
        Ok(self.status)
    }

    /// Clears the board for a new round. X moves first. Scores are kept.
    #[instrument(skip(self))]
    pub fn reset_round(&mut self) {
        self.board = Board::new();
        self.history.clear();
        self.status = GameStatus::default();
        info!(
            rounds_played = self.scoreboard.rounds_played(),
            "Round reset"
        );
    }

    /// Starts a new session: binds names to X and O, zeroes the score, and
    /// resets the round.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidName`] for the first blank name (X is
    /// checked first). Nothing changes on error.
    #[instrument(skip(self))]
    pub fn start_new_session(&mut self, x_name: &str, o_name: &str) -> Result<(), EngineError> {
        let x = PlayerName::parse(x_name, Mark::X)
            .inspect_err(|e| warn!(error = %e, "Session rejected"))?;
        let o = PlayerName::parse(o_name, Mark::O)
            .inspect_err(|e| warn!(error = %e, "Session rejected"))?;

        info!(player_x = %x, player_o = %o, "Starting new session");
        self.scoreboard = Scoreboard::named(x, o);
        self.reset_round();
        Ok(())
    }

    /// Status the board implies, given invariants already hold.
    fn expected_status(&self) -> Result<GameStatus, EngineError> {
        let Some((winner, line)) = rules::winner(&self.board) else {
            return Ok(if rules::is_full(&self.board) {
                GameStatus::Draw
            } else {
                GameStatus::InProgress {
                    to_move: if self.history.len() % 2 == 0 {
                        Mark::X
                    } else {
                        Mark::O
                    },
                }
            });
        };

        let last_mover = self.history.last().map(|m| m.mark);
        if last_mover != Some(winner) || rules::check_win(&self.board, winner.opponent()) {
            return Err(EngineError::InvalidSnapshot(
                "Play continued after a completed line",
            ));
        }
        Ok(GameStatus::Won { winner, line })
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        use super::invariants::{EngineInvariants, InvariantSet};

        if let Err(violations) = EngineInvariants::check_all(self) {
            let descriptions = violations
                .iter()
                .map(|v| v.description)
                .collect::<Vec<_>>()
                .join("; ");
            tracing::error!(violations = %descriptions, "Engine invariant violated");
            debug_assert!(false, "Engine invariant violated: {}", descriptions);
        }
    }

    #[cfg(test)]
    pub(crate) fn corrupt_history_for_test(&mut self) {
        if let Some(last) = self.history.last().copied() {
            self.history.push(last);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(engine: &mut GameEngine, cells: &[usize]) -> GameStatus {
        let mut status = *engine.status();
        for cell in cells {
            status = engine.apply_move(*cell).unwrap();
        }
        status
    }

    #[test]
    fn test_initial_state() {
        let engine = GameEngine::new();
        assert_eq!(engine.status(), &GameStatus::InProgress { to_move: Mark::X });
        assert_eq!(engine.move_count(), 0);
        assert_eq!(engine.available_positions().len(), 9);
    }

    #[test]
    fn test_move_flips_turn() {
        let mut engine = GameEngine::new();
        let status = engine.apply_move(4).unwrap();
        assert_eq!(status, GameStatus::InProgress { to_move: Mark::O });
        assert_eq!(engine.board().get(Position::Center), Cell::Occupied(Mark::X));
    }

    #[test]
    fn test_winning_ninth_move_is_won_not_draw() {
        let mut engine = GameEngine::new();
        let status = play(&mut engine, &[0, 1, 2, 3, 7, 5, 8, 6, 4]);
        assert_eq!(engine.move_count(), 9);
        assert_eq!(
            status,
            GameStatus::Won {
                winner: Mark::X,
                line: WinLine::MainDiagonal
            }
        );
        assert_eq!(engine.scoreboard().wins(Mark::X), 1);
        assert_eq!(engine.scoreboard().draws(), 0);
    }

    #[test]
    fn test_available_positions_empty_after_win() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[0, 3, 1, 4, 2]);
        assert!(engine.is_over());
        assert!(engine.available_positions().is_empty());
    }

    #[test]
    fn test_with_players_binds_names() {
        let engine = GameEngine::with_players("Alice", "Bob").unwrap();
        assert_eq!(engine.scoreboard().display_name(Mark::X), "Alice");
        assert_eq!(engine.scoreboard().display_name(Mark::O), "Bob");
    }

    #[test]
    fn test_invalid_x_name_checked_first() {
        let mut engine = GameEngine::new();
        assert_eq!(
            engine.start_new_session(" ", ""),
            Err(EngineError::InvalidName(Mark::X))
        );
        assert_eq!(
            engine.start_new_session("Alice", ""),
            Err(EngineError::InvalidName(Mark::O))
        );
    }
}
