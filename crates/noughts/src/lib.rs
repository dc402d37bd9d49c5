//! Noughts - tic-tac-toe game engine
//!
//! A pure, synchronous engine for two local players: board state, turn
//! order, win/draw detection, and a score that carries across rounds.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns the board, status, move history and
//!   [`Scoreboard`]; it mutates state and returns a [`GameStatus`].
//! - **Rules**: pure functions over a [`Board`] ([`check_win`], [`find_win`]).
//! - **Invariants**: properties checked after every move in debug builds.
//! - **Shared**: [`SharedEngine`] serializes access for multi-threaded hosts.
//!
//! Rendering and input belong to a presenter, which reads engine state and
//! forwards move requests.
//!
//! # Example
//!
//! ```
//! use noughts::{GameEngine, GameStatus, Mark, WinLine};
//!
//! let mut engine = GameEngine::with_players("Alice", "Bob").unwrap();
//! for cell in [0, 1, 4, 2] {
//!     engine.apply_move(cell).unwrap();
//! }
//! let status = engine.apply_move(8).unwrap();
//! assert_eq!(
//!     status,
//!     GameStatus::Won { winner: Mark::X, line: WinLine::MainDiagonal }
//! );
//! assert_eq!(engine.scoreboard().wins(Mark::X), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod error;
pub mod invariants;
mod position;
pub mod rules;
mod scoreboard;
mod shared;
mod types;

pub use action::Move;
pub use engine::{GameEngine, GameStatus};
pub use error::EngineError;
pub use position::Position;
pub use rules::{WinLine, check_win, find_win, is_full, winner};
pub use scoreboard::{PlayerName, Scoreboard, Seat};
pub use shared::SharedEngine;
pub use types::{Board, Cell, Mark};
