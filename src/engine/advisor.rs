//! Move advice with a random legal fallback.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::board::Move;
use crate::game::GameState;

use super::suggester::{parse_coordinate_move, MoveSuggester};

/// Where an advised move came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdviceSource {
    /// The suggester's own move, checked legal
    Suggested,
    /// A uniformly random legal move, used after the suggester failed
    RandomFallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advice {
    pub mv: Move,
    pub source: AdviceSource,
}

/// Asks a `MoveSuggester` for a move and never returns an illegal one.
pub struct MoveAdvisor<S, R = StdRng> {
    suggester: S,
    rng: R,
}

impl<S: MoveSuggester> MoveAdvisor<S, StdRng> {
    /// Advisor with an entropy-seeded generator.
    pub fn new(suggester: S) -> Self {
        MoveAdvisor {
            suggester,
            rng: StdRng::from_entropy(),
        }
    }
}

impl<S: MoveSuggester, R: Rng> MoveAdvisor<S, R> {
    pub fn with_rng(suggester: S, rng: R) -> Self {
        MoveAdvisor { suggester, rng }
    }

    pub fn suggester(&self) -> &S {
        &self.suggester
    }

    /// A legal move for the side to move, or `None` when there is none (game
    /// over, or a promotion is pending).
    pub fn advise(&mut self, state: &GameState) -> Option<Advice> {
        if state.pending_promotion().is_some() {
            return None;
        }
        let position = state.position();
        let legal = position.generate_moves();
        if legal.is_empty() {
            return None;
        }

        match self.suggester.suggest(state) {
            Ok(text) => match parse_coordinate_move(position, &text) {
                Ok(mv) => {
                    return Some(Advice {
                        mv,
                        source: AdviceSource::Suggested,
                    })
                }
                Err(err) => log::warn!(
                    "{} suggested '{}' which was rejected: {err}; playing a random move",
                    self.suggester.name(),
                    text.trim()
                ),
            },
            Err(err) => log::warn!(
                "{} failed: {err}; playing a random move",
                self.suggester.name()
            ),
        }

        legal.as_slice().choose(&mut self.rng).map(|&mv| Advice {
            mv,
            source: AdviceSource::RandomFallback,
        })
    }
}
