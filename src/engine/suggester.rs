//! External move sources.

use std::fmt;

use crate::board::{best_move, Move, MoveParseError, Position, DEFAULT_SEARCH_DEPTH};
use crate::game::{Difficulty, GameState};

/// Why a move source could not produce a suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionError {
    /// The source could not be reached or refused to answer
    Unavailable { reason: String },
    /// The source answered without a move
    NoMove,
    /// A promotion is waiting for its piece; nothing can be suggested
    PromotionPending,
}

impl fmt::Display for SuggestionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestionError::Unavailable { reason } => {
                write!(f, "Move source unavailable: {reason}")
            }
            SuggestionError::NoMove => write!(f, "Move source returned no move"),
            SuggestionError::PromotionPending => {
                write!(f, "Cannot suggest a move while a promotion is pending")
            }
        }
    }
}

impl std::error::Error for SuggestionError {}

/// Something that proposes a move in coordinate notation for a game.
///
/// Answers are untrusted text; `MoveAdvisor` checks them against the legal
/// moves before use.
pub trait MoveSuggester {
    fn suggest(&self, state: &GameState) -> Result<String, SuggestionError>;

    /// Name used in log output
    fn name(&self) -> &'static str {
        "suggester"
    }
}

impl<F> MoveSuggester for F
where
    F: Fn(&GameState) -> Result<String, SuggestionError>,
{
    fn suggest(&self, state: &GameState) -> Result<String, SuggestionError> {
        self(state)
    }
}

/// Suggests the move found by the built-in alpha-beta search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSuggester {
    pub depth: u32,
}

impl Default for SearchSuggester {
    fn default() -> Self {
        SearchSuggester {
            depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}

impl SearchSuggester {
    #[must_use]
    pub fn new(depth: u32) -> Self {
        SearchSuggester { depth }
    }

    #[must_use]
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        SearchSuggester::new(difficulty.depth())
    }
}

impl MoveSuggester for SearchSuggester {
    fn suggest(&self, state: &GameState) -> Result<String, SuggestionError> {
        if state.pending_promotion().is_some() {
            return Err(SuggestionError::PromotionPending);
        }
        best_move(state.position(), self.depth)
            .map(|mv| mv.to_string())
            .ok_or(SuggestionError::NoMove)
    }

    fn name(&self) -> &'static str {
        "search"
    }
}

/// Parse `e2e4`, `e7e8q`, `O-O` or `O-O-O` (annotations `+#!?` ignored)
/// into a legal move of `position`.
pub fn parse_coordinate_move(position: &Position, text: &str) -> Result<Move, MoveParseError> {
    position.parse_move(text)
}
