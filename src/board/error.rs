//! Error types for chess board operations.

use std::fmt;

use super::types::{Color, Piece, Square};

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs at least 4)
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Placement field does not have exactly 8 ranks
    InvalidRankCount { found: usize },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
    /// A rank covers fewer than 8 files
    TooFewFiles { rank: usize, files: usize },
    /// Position parsed but does not have exactly one king per side
    InvalidKings(StateError),
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 4 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            FenError::TooFewFiles { rank, files } => {
                write!(f, "Rank {rank} covers only {files} files, expected 8")
            }
            FenError::InvalidKings(err) => write!(f, "Invalid FEN position: {err}"),
        }
    }
}

impl std::error::Error for FenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FenError::InvalidKings(err) => Some(err),
            _ => None,
        }
    }
}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
    /// Move is not legal in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Board integrity violation. Never produced by legal play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    MissingKing { color: Color },
    ExtraKing { color: Color, count: usize },
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::MissingKing { color } => write!(f, "{color} has no king on the board"),
            StateError::ExtraKing { color, count } => {
                write!(f, "{color} has {count} kings on the board")
            }
        }
    }
}

impl std::error::Error for StateError {}

/// Reasons a requested move is refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Origin or destination lies outside the board
    OffBoard { square: Square },
    /// No piece on the origin square
    NoPiece { square: Square },
    /// The piece belongs to the side not on move
    WrongTurn { square: Square, to_move: Color },
    /// Destination holds a piece of the mover's own color
    OwnPieceCapture { square: Square },
    /// Destination is not among the piece's legal moves
    IllegalDestination { from: Square, to: Square },
    /// A promotion must be completed before anything else is played
    PromotionPending { square: Square },
    /// `complete_promotion` called without a matching pending promotion
    NoPendingPromotion { square: Square },
    /// Promotion choice must be a queen, rook, bishop or knight
    InvalidPromotion { piece: Piece },
    /// The game state failed its integrity check
    Corrupted(StateError),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OffBoard { square } => write!(f, "Square {square} is off the board"),
            MoveError::NoPiece { square } => write!(f, "No piece on {square}"),
            MoveError::WrongTurn { square, to_move } => {
                write!(f, "Piece on {square} cannot move: it is {to_move}'s turn")
            }
            MoveError::OwnPieceCapture { square } => {
                write!(f, "Cannot capture own piece on {square}")
            }
            MoveError::IllegalDestination { from, to } => {
                write!(f, "Illegal move {from}{to}")
            }
            MoveError::PromotionPending { square } => {
                write!(f, "Promotion on {square} must be completed first")
            }
            MoveError::NoPendingPromotion { square } => {
                write!(f, "No promotion pending on {square}")
            }
            MoveError::InvalidPromotion { piece } => {
                write!(f, "Cannot promote to {piece}")
            }
            MoveError::Corrupted(err) => write!(f, "Corrupted game state: {err}"),
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Corrupted(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StateError> for MoveError {
    fn from(err: StateError) -> Self {
        MoveError::Corrupted(err)
    }
}
