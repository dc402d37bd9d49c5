//! Player names and running score across rounds.

use super::{EngineError, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A player's display name: trimmed and never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[serde(into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    /// Validates a name for the given seat.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidName`] if the name is empty or whitespace.
    pub fn parse(raw: &str, seat: Mark) -> Result<Self, EngineError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(EngineError::InvalidName(seat));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> Self {
        name.0
    }
}

/// One side of the scoreboard.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Seat {
    name: Option<PlayerName>,
    wins: u32,
}

impl Seat {
    /// Bound name, if a named session was started.
    pub fn name(&self) -> Option<&PlayerName> {
        self.name.as_ref()
    }

    /// Rounds won in this session.
    pub fn wins(&self) -> u32 {
        self.wins
    }
}

/// Win counts per mark, plus drawn rounds.
///
/// Survives round resets; replaced only when a new session starts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawScoreboard")]
pub struct Scoreboard {
    x: Seat,
    o: Seat,
    draws: u32,
}

#[derive(Deserialize)]
struct RawSeat {
    name: Option<String>,
    wins: u32,
}

impl RawSeat {
    fn validate(self, mark: Mark) -> Result<Seat, EngineError> {
        let name = self
            .name
            .map(|raw| PlayerName::parse(&raw, mark))
            .transpose()?;
        Ok(Seat {
            name,
            wins: self.wins,
        })
    }
}

/// Unchecked mirror of [`Scoreboard`]; names are validated per seat.
#[derive(Deserialize)]
struct RawScoreboard {
    x: RawSeat,
    o: RawSeat,
    draws: u32,
}

impl TryFrom<RawScoreboard> for Scoreboard {
    type Error = EngineError;

    fn try_from(raw: RawScoreboard) -> Result<Self, Self::Error> {
        Ok(Self {
            x: raw.x.validate(Mark::X)?,
            o: raw.o.validate(Mark::O)?,
            draws: raw.draws,
        })
    }
}

impl Scoreboard {
    /// Creates a zeroed scoreboard with both names bound.
    pub fn named(x: PlayerName, o: PlayerName) -> Self {
        Self {
            x: Seat {
                name: Some(x),
                wins: 0,
            },
            o: Seat {
                name: Some(o),
                wins: 0,
            },
            draws: 0,
        }
    }

    /// The seat for a mark.
    pub fn seat(&self, mark: Mark) -> &Seat {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }

    fn seat_mut(&mut self, mark: Mark) -> &mut Seat {
        match mark {
            Mark::X => &mut self.x,
            Mark::O => &mut self.o,
        }
    }

    /// Wins recorded for a mark.
    pub fn wins(&self, mark: Mark) -> u32 {
        self.seat(mark).wins
    }

    /// Bound name for a mark, if any.
    pub fn name(&self, mark: Mark) -> Option<&PlayerName> {
        self.seat(mark).name()
    }

    /// Name to show for a mark, falling back to "Player X" / "Player O".
    pub fn display_name(&self, mark: Mark) -> String {
        match self.name(mark) {
            Some(name) => name.to_string(),
            None => format!("Player {}", mark),
        }
    }

    /// Drawn rounds in this session.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Total rounds that reached a result.
    pub fn rounds_played(&self) -> u32 {
        self.x.wins + self.o.wins + self.draws
    }

    #[instrument(skip(self))]
    pub(crate) fn record_win(&mut self, mark: Mark) {
        let seat = self.seat_mut(mark);
        seat.wins = seat.wins.saturating_add(1);
        debug!(wins = seat.wins, "Recorded win");
    }

    #[instrument(skip(self))]
    pub(crate) fn record_draw(&mut self) {
        self.draws = self.draws.saturating_add(1);
        debug!(draws = self.draws, "Recorded draw");
    }
}
