//! Chess board representation and rules.
//!
//! Uses an 8x8 mailbox with clone-and-recheck legality, which is plenty for
//! interactive play and shallow search. Supports full chess rules including
//! castling, en passant and promotion.
//!
//! # Example
//! ```
//! use chess_rules::board::{Position, Square};
//!
//! let position = Position::new();
//! let moves = position.generate_moves();
//! assert_eq!(moves.len(), 20);
//! assert_eq!(position.legal_moves(Square(0, 6)).len(), 2);
//! ```

mod attack_tables;
mod attacks;
mod builder;
mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
pub mod prelude;
mod pst;
mod search;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::PositionBuilder;
pub use error::{FenError, MoveError, MoveParseError, SquareError, StateError};
pub use fen::START_FEN;
pub use state::{Board, Position, UnmakeInfo};
pub use status::{GameResult, GameStatus};
pub use types::{
    CastleSide, CastlingRights, Color, Move, MoveList, Piece, PieceId, PlacedPiece, Square,
    PROMOTION_PIECES,
};

// Public API - evaluation and search
pub use eval::{evaluate, position_bonus, GamePhase};
pub use search::{
    best_move, find_best_move, find_best_move_with_logger, LogLogger, SearchContext, SearchInfo,
    SearchLimits, SearchLogger, SearchResult, SearchStats, DEFAULT_SEARCH_DEPTH, SCORE_INF,
};
