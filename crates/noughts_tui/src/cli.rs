//! Command-line interface for noughts_tui.

use clap::Parser;
use std::path::PathBuf;

/// Noughts - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "noughts_tui")]
#[command(about = "Two-player tic-tac-toe with a running score", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(short, long, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Name for player X (overrides config)
    #[arg(long)]
    pub player_x: Option<String>,

    /// Name for player O (overrides config)
    #[arg(long)]
    pub player_o: Option<String>,

    /// Log file path (overrides config)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
