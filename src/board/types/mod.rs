//! Core chess types.
//!
//! This module contains the fundamental types used throughout the crate:
//! - `Piece`, `Color` and `PlacedPiece` - piece kinds, colors and pieces on squares
//! - `Square` - (rank, file) board square with UI grid conversion
//! - `Move` and `MoveList` - move representation
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

// Re-export all public types
pub use castling::{CastleSide, CastlingRights};
pub use moves::{Move, MoveList};
pub use piece::{Color, Piece, PieceId, PlacedPiece, PROMOTION_PIECES};
pub use square::Square;
