//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let position = Position::new();
//! assert!(best_move(&position, 1).is_some());
//! ```

pub use super::{
    best_move, evaluate, find_best_move, CastleSide, CastlingRights, Color, FenError, GameStatus,
    Move, MoveError, MoveList, MoveParseError, Piece, Position, PositionBuilder, SearchLimits,
    Square, SquareError,
};
