//! Thread-safe handle around a single game.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use rand::Rng;

use crate::board::{GameStatus, Move, MoveError, Piece, Square};
use crate::game::{GameManager, GameState, MoveOutcome};

use super::advisor::{Advice, MoveAdvisor};
use super::suggester::MoveSuggester;

/// Cloneable handle to a `GameManager` shared between threads.
///
/// Every operation holds the lock for its whole duration, so a human move and
/// an engine reply can never interleave. An engine search can be cut short
/// from another thread with `signal_stop` without taking the lock.
#[derive(Clone)]
pub struct SharedGame {
    game: Arc<Mutex<GameManager>>,
    stop: Arc<AtomicBool>,
}

impl Default for SharedGame {
    fn default() -> Self {
        SharedGame::new(GameManager::new())
    }
}

impl SharedGame {
    #[must_use]
    pub fn new(manager: GameManager) -> Self {
        SharedGame {
            game: Arc::new(Mutex::new(manager)),
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn apply_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<MoveOutcome, MoveError> {
        self.game.lock().apply_move(from, to, promotion)
    }

    pub fn complete_promotion(
        &self,
        square: Square,
        choice: Piece,
    ) -> Result<GameStatus, MoveError> {
        let mut game = self.game.lock();
        game.complete_promotion(square, choice).map(GameState::status)
    }

    pub fn undo(&self) -> bool {
        self.game.lock().undo()
    }

    pub fn reset(&self) {
        self.game.lock().reset();
    }

    /// Search with the game's configured depth and node budget and play the
    /// result. `Ok(None)` when there is nothing to play.
    ///
    /// A stop signalled while this call waits for the lock cuts the coming
    /// search short. The flag is cleared once the search returns.
    pub fn play_engine_reply(&self) -> Result<Option<Move>, MoveError> {
        let mut game = self.game.lock();
        let result = game.search(&self.stop);
        self.stop.store(false, Ordering::Relaxed);
        let Some(mv) = result.best_move else {
            return Ok(None);
        };
        log::debug!(
            "engine reply {mv} (depth {}, score {}, {} nodes)",
            result.completed_depth,
            result.score,
            result.stats.nodes
        );
        match game.apply_move(mv.from, mv.to, mv.promotion)? {
            MoveOutcome::Committed(played) => Ok(Some(played)),
            MoveOutcome::PendingPromotion { square, .. } => {
                Err(MoveError::PromotionPending { square })
            }
        }
    }

    /// Ask `advisor` for a move and play it.
    pub fn play_advised_reply<S, R>(
        &self,
        advisor: &mut MoveAdvisor<S, R>,
    ) -> Result<Option<Advice>, MoveError>
    where
        S: MoveSuggester,
        R: Rng,
    {
        let mut game = self.game.lock();
        let Some(advice) = advisor.advise(game.state()) else {
            return Ok(None);
        };
        let mv = advice.mv;
        game.apply_move(mv.from, mv.to, mv.promotion)?;
        Ok(Some(advice))
    }

    /// Ask a running engine search to stop at its next node.
    pub fn signal_stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Copy of the current game state.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.game.lock().state().clone()
    }

    /// Run `f` with exclusive access to the game.
    pub fn with_game<T>(&self, f: impl FnOnce(&mut GameManager) -> T) -> T {
        f(&mut self.game.lock())
    }
}
