//! Thread-safe engine handle for multi-threaded hosts.

use super::{EngineError, GameEngine, GameStatus};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{instrument, warn};

/// Shares one [`GameEngine`] between threads.
///
/// Every mutating call holds the lock for its whole read-modify-write, so
/// moves, resets and session starts are serialized.
#[derive(Debug, Clone, Default)]
pub struct SharedEngine {
    engine: Arc<Mutex<GameEngine>>,
}

impl SharedEngine {
    /// Wraps an engine for sharing.
    #[instrument(skip(engine))]
    pub fn new(engine: GameEngine) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, GameEngine> {
        // The engine only mutates after all checks pass, so a panic while
        // the lock was held cannot leave it half-updated.
        self.engine.lock().unwrap_or_else(|poisoned| {
            warn!("Engine lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// See [`GameEngine::apply_move`].
    ///
    /// # Errors
    ///
    /// Same as [`GameEngine::apply_move`].
    #[instrument(skip(self))]
    pub fn apply_move(&self, cell: usize) -> Result<GameStatus, EngineError> {
        self.lock().apply_move(cell)
    }

    /// See [`GameEngine::reset_round`].
    #[instrument(skip(self))]
    pub fn reset_round(&self) {
        self.lock().reset_round();
    }

    /// See [`GameEngine::start_new_session`].
    ///
    /// # Errors
    ///
    /// Same as [`GameEngine::start_new_session`].
    #[instrument(skip(self))]
    pub fn start_new_session(&self, x_name: &str, o_name: &str) -> Result<(), EngineError> {
        self.lock().start_new_session(x_name, o_name)
    }

    /// Copy of the current engine state for display.
    pub fn snapshot(&self) -> GameEngine {
        self.lock().clone()
    }

    /// Runs a read-only query against the engine under the lock.
    pub fn with<R>(&self, f: impl FnOnce(&GameEngine) -> R) -> R {
        f(&*self.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;
    use std::thread;

    #[test]
    fn test_concurrent_moves_never_double_fill() {
        let shared = SharedEngine::new(GameEngine::new());

        let handles: Vec<_> = (0..9)
            .map(|cell| {
                let shared = shared.clone();
                thread::spawn(move || shared.apply_move(cell))
            })
            .collect();
        let accepted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(Result::is_ok)
            .count();

        let engine = shared.snapshot();
        assert_eq!(engine.move_count(), accepted);
        assert_eq!(engine.board().occupied_count(), accepted);
    }

    #[test]
    fn test_session_through_handle() {
        let shared = SharedEngine::default();
        shared.start_new_session("Ann", "Ben").unwrap();
        shared.apply_move(0).unwrap();
        assert_eq!(shared.with(|e| e.to_move()), Some(Mark::O));
        shared.reset_round();
        assert_eq!(shared.with(|e| e.move_count()), 0);
    }
}
