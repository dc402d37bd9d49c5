//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark, Position};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the 8 three-in-a-row lines.
///
/// Variants are declared in canonical order: rows, then columns, then
/// diagonals. When several lines match at once the first in this order wins.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum WinLine {
    /// Cells 0, 1, 2.
    #[display("top row")]
    TopRow,
    /// Cells 3, 4, 5.
    #[display("middle row")]
    MiddleRow,
    /// Cells 6, 7, 8.
    #[display("bottom row")]
    BottomRow,
    /// Cells 0, 3, 6.
    #[display("left column")]
    LeftColumn,
    /// Cells 1, 4, 7.
    #[display("middle column")]
    MiddleColumn,
    /// Cells 2, 5, 8.
    #[display("right column")]
    RightColumn,
    /// Cells 0, 4, 8.
    #[display("main diagonal")]
    MainDiagonal,
    /// Cells 2, 4, 6.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl WinLine {
    /// The three positions making up this line.
    pub fn positions(self) -> [Position; 3] {
        use Position::*;

        match self {
            WinLine::TopRow => [TopLeft, TopCenter, TopRight],
            WinLine::MiddleRow => [MiddleLeft, Center, MiddleRight],
            WinLine::BottomRow => [BottomLeft, BottomCenter, BottomRight],
            WinLine::LeftColumn => [TopLeft, MiddleLeft, BottomLeft],
            WinLine::MiddleColumn => [TopCenter, Center, BottomCenter],
            WinLine::RightColumn => [TopRight, MiddleRight, BottomRight],
            WinLine::MainDiagonal => [TopLeft, Center, BottomRight],
            WinLine::AntiDiagonal => [TopRight, Center, BottomLeft],
        }
    }

    /// The three board indices making up this line.
    pub fn indices(self) -> [usize; 3] {
        self.positions().map(Position::to_index)
    }

    /// Whether the line passes through the position.
    pub fn contains(self, pos: Position) -> bool {
        self.positions().contains(&pos)
    }
}

/// Returns the first line, in canonical order, held entirely by `mark`.
#[instrument(skip(board))]
pub fn find_win(board: &Board, mark: Mark) -> Option<WinLine> {
    WinLine::iter().find(|line| {
        line.positions()
            .iter()
            .all(|pos| board.get(*pos) == Cell::Occupied(mark))
    })
}

/// Checks whether `mark` has three in a row anywhere on the board.
pub fn check_win(board: &Board, mark: Mark) -> bool {
    find_win(board, mark).is_some()
}

/// Checks the board for either mark holding a line.
///
/// X is checked first. Boards reached through legal play never have both.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<(Mark, WinLine)> {
    [Mark::X, Mark::O]
        .into_iter()
        .find_map(|mark| find_win(board, mark).map(|line| (mark, line)))
}
