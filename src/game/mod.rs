//! Game management on top of the rules engine.
//!
//! [`GameManager`] owns a single game: it validates and commits moves,
//! keeps a bounded undo history, and parks pawns on the last rank until a
//! promotion piece is chosen.
//!
//! # Example
//! ```
//! use chess_rules::board::{Piece, Square};
//! use chess_rules::game::{GameManager, MoveOutcome};
//!
//! let mut game = GameManager::new();
//! let outcome = game.apply_move(Square(1, 4), Square(3, 4), None).unwrap();
//! assert!(matches!(outcome, MoveOutcome::Committed(_)));
//! assert!(game.undo());
//! assert!(!game.undo());
//! # let _ = Piece::Queen;
//! ```

mod config;
mod history;
mod manager;

pub use config::{Difficulty, EngineConfig, DEFAULT_MAX_HISTORY, MIN_MAX_HISTORY};
pub use history::{HistoryEntry, HistoryStats};
pub use manager::{
    CapturedPieces, GameManager, GameState, MoveOutcome, PendingPromotion, PieceCounts,
};
