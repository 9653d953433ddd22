//! Game-state analysis: check, checkmate, stalemate and the result they imply.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::StateError;
use super::{Color, Position};

/// Outcome of the game so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    Draw,
    #[default]
    Ongoing,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameResult::WhiteWins => "1-0",
            GameResult::BlackWins => "0-1",
            GameResult::Draw => "1/2-1/2",
            GameResult::Ongoing => "*",
        };
        f.write_str(text)
    }
}

/// Status flags for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameStatus {
    pub side_to_move: Color,
    pub in_check: bool,
    pub checkmate: bool,
    pub stalemate: bool,
}

impl GameStatus {
    /// Status of a fresh game
    #[must_use]
    pub const fn initial() -> Self {
        GameStatus {
            side_to_move: Color::White,
            in_check: false,
            checkmate: false,
            stalemate: false,
        }
    }

    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.checkmate || self.stalemate
    }

    /// The mated side loses; stalemate is a draw.
    #[must_use]
    pub const fn result(&self) -> GameResult {
        if self.checkmate {
            match self.side_to_move {
                Color::White => GameResult::BlackWins,
                Color::Black => GameResult::WhiteWins,
            }
        } else if self.stalemate {
            GameResult::Draw
        } else {
            GameResult::Ongoing
        }
    }

    /// Short human-readable description, e.g. for a status bar.
    #[must_use]
    pub fn status_message(&self) -> String {
        if self.checkmate {
            format!("Checkmate! {} wins", self.side_to_move.opponent())
        } else if self.stalemate {
            "Stalemate! The game is a draw".to_string()
        } else if self.in_check {
            format!("{} is in check", self.side_to_move)
        } else {
            format!("{} to move", self.side_to_move)
        }
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        GameStatus::initial()
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.status_message())
    }
}

impl Position {
    /// Compute check, checkmate and stalemate for the side to move.
    ///
    /// Fails only if the board does not hold exactly one king per side.
    pub fn analyze(&self) -> Result<GameStatus, StateError> {
        self.board.validate()?;
        let in_check = self.is_in_check();
        let can_move = self.has_legal_moves();
        Ok(GameStatus {
            side_to_move: self.side_to_move,
            in_check,
            checkmate: in_check && !can_move,
            stalemate: !in_check && !can_move,
        })
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.is_in_check() && !self.has_legal_moves()
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check() && !self.has_legal_moves()
    }
}
