//! Noughts - terminal tic-tac-toe for two local players.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts::GameEngine;
use noughts_tui::{App, Cli, Mode, TuiConfig, ui};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(&cli.config)
        .context("Failed to load config")?
        .with_overrides(&cli);

    init_logging(&config)?;
    info!(config_path = %cli.config.display(), "Starting noughts TUI");

    let app = match config.player_names() {
        Some((x, o)) => App::with_names(GameEngine::new(), x, o),
        None => {
            if config.player_x().is_some() || config.player_o().is_some() {
                warn!("Only one player name configured, asking for both");
            }
            App::asking_for_names(GameEngine::new())
        }
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Exiting noughts TUI");
    res
}

/// Sends logs to a file so they never draw over the game.
fn init_logging(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Draw, wait for input, apply it; until the user quits.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    let mut area = Rect::default();

    while !app.should_quit() {
        terminal.draw(|frame| {
            area = frame.area();
            ui::draw(frame, &app);
        })?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key)?,
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                if matches!(app.mode(), Mode::Playing)
                    && let Some(cell) = ui::cell_at(area, mouse.column, mouse.row)
                {
                    debug!(cell, "Cell clicked");
                    app.request_move(cell)?;
                }
            }
            _ => {}
        }
    }

    Ok(())
}
