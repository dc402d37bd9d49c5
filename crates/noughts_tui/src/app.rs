//! Application state and key handling.

use crate::input::{digit_cell, move_cursor};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use noughts::{EngineError, GameEngine, Mark, Position};
use tracing::{debug, error, info, instrument};

/// Form collecting two player names for a new session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameForm {
    /// Name typed for X.
    pub x: String,
    /// Name typed for O.
    pub o: String,
    /// Field receiving keystrokes.
    pub focus: Mark,
    /// Validation message from the last submit.
    pub error: Option<String>,
}

impl NameForm {
    fn prefilled(engine: &GameEngine) -> Self {
        let name = |mark: Mark| {
            engine
                .scoreboard()
                .name(mark)
                .map(|n| n.to_string())
                .unwrap_or_default()
        };
        Self {
            x: name(Mark::X),
            o: name(Mark::O),
            focus: Mark::X,
            error: None,
        }
    }

    fn field_mut(&mut self) -> &mut String {
        match self.focus {
            Mark::X => &mut self.x,
            Mark::O => &mut self.o,
        }
    }
}

/// What the keyboard is currently driving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Keys play on the grid.
    Playing,
    /// Keys edit the new-game form.
    NewGame(NameForm),
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    mode: Mode,
    hint: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates an application around an engine.
    pub fn new(engine: GameEngine) -> Self {
        Self {
            engine,
            cursor: Position::Center,
            mode: Mode::Playing,
            hint: None,
            should_quit: false,
        }
    }

    /// Creates an application that opens on the new-game form.
    pub fn asking_for_names(engine: GameEngine) -> Self {
        let mut app = Self::new(engine);
        app.open_form();
        app
    }

    /// Starts a session from preset names.
    ///
    /// A blank name leaves the new-game form open with both names filled in
    /// and the validation message shown.
    pub fn with_names(engine: GameEngine, x_name: &str, o_name: &str) -> Self {
        let mut app = Self::asking_for_names(engine);
        if let Mode::NewGame(form) = &mut app.mode {
            form.x = x_name.to_string();
            form.o = o_name.to_string();
        }
        app.submit_form();
        app
    }

    /// The engine being presented.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Current input mode.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Short note about the last ignored input, if any.
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    ///
    /// # Errors
    ///
    /// Fails only on integration bugs (a move index the engine rejects as
    /// out of range); ordinary misclicks are absorbed.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return Ok(());
        }

        match self.mode {
            Mode::Playing => self.handle_playing_key(key.code),
            Mode::NewGame(_) => {
                self.handle_form_key(key.code);
                Ok(())
            }
        }
    }

    fn handle_playing_key(&mut self, code: KeyCode) -> Result<()> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart_round(),
            KeyCode::Char('n') => self.open_form(),
            KeyCode::Enter | KeyCode::Char(' ') => self.request_move(self.cursor.to_index())?,
            KeyCode::Char(c) => {
                if let Some(cell) = digit_cell(c) {
                    self.request_move(cell)?;
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, code);
            }
            _ => {}
        }
        Ok(())
    }

    /// Forwards a click or keypress on a cell to the engine.
    ///
    /// # Errors
    ///
    /// Returns the engine error when it is not an ordinary misclick.
    #[instrument(skip(self))]
    pub fn request_move(&mut self, cell: usize) -> Result<()> {
        if let Some(pos) = Position::from_index(cell) {
            self.cursor = pos;
        }

        match self.engine.apply_move(cell) {
            Ok(status) => {
                debug!(?status, "Move accepted");
                self.hint = None;
                Ok(())
            }
            Err(e) if e.is_misclick() => {
                debug!(error = %e, "Ignoring misclick");
                self.hint = Some(match e {
                    EngineError::GameOver => "Round over. Press r for another.".to_string(),
                    other => other.to_string(),
                });
                Ok(())
            }
            Err(e) => {
                error!(error = %e, cell, "Presenter sent an invalid move");
                Err(e.into())
            }
        }
    }

    /// Clears the board; scores stay.
    pub fn restart_round(&mut self) {
        self.engine.reset_round();
        self.cursor = Position::Center;
        self.hint = None;
    }

    /// Opens the new-game form.
    pub fn open_form(&mut self) {
        debug!("Opening new game form");
        self.mode = Mode::NewGame(NameForm::prefilled(&self.engine));
    }

    fn handle_form_key(&mut self, code: KeyCode) {
        let Mode::NewGame(form) = &mut self.mode else {
            return;
        };

        match code {
            KeyCode::Esc => {
                debug!("New game cancelled");
                self.mode = Mode::Playing;
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                form.focus = form.focus.opponent();
            }
            KeyCode::Backspace => {
                form.field_mut().pop();
            }
            KeyCode::Char(c) => form.field_mut().push(c),
            KeyCode::Enter => self.submit_form(),
            _ => {}
        }
    }

    /// Submits the form; a blank name keeps it open with a message.
    #[instrument(skip(self))]
    pub fn submit_form(&mut self) {
        let Mode::NewGame(form) = &mut self.mode else {
            return;
        };

        match self.engine.start_new_session(&form.x, &form.o) {
            Ok(()) => {
                info!("New session started from form");
                self.mode = Mode::Playing;
                self.cursor = Position::Center;
                self.hint = None;
            }
            Err(EngineError::InvalidName(mark)) => {
                form.focus = mark;
                form.error = Some(format!("Please enter a name for player {}", mark));
            }
            Err(e) => {
                form.error = Some(e.to_string());
            }
        }
    }
}
