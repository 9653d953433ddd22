pub mod board;
pub mod engine;
pub mod game;

pub use board::{Board, Color, Move, Piece, Position, Square};
pub use game::{GameManager, MoveOutcome};
