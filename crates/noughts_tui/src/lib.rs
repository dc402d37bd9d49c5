//! Terminal presenter for the noughts engine.
//!
//! Owns no game rules: it renders [`noughts::GameEngine`] state, turns key
//! presses and mouse clicks into move requests, and collects player names.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod status;
pub mod ui;

pub use app::{App, Mode, NameForm};
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
