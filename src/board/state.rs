use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::StateError;
use super::{CastlingRights, Color, Piece, PieceId, PlacedPiece, Square};

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// 8x8 mailbox grid of pieces.
///
/// Cells are indexed `[rank][file]`. Equality compares occupancy only; piece
/// identity tokens and the id counter are ignored.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) squares: [[Option<PlacedPiece>; 8]; 8],
    pub(crate) next_id: u32,
}

impl Board {
    /// Standard initial arrangement.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (file, piece) in BACK_RANK.iter().enumerate() {
            board.place(Square(0, file), Color::White, *piece);
            board.place(Square(1, file), Color::White, Piece::Pawn);
        }
        for (file, piece) in BACK_RANK.iter().enumerate() {
            board.place(Square(6, file), Color::Black, Piece::Pawn);
            board.place(Square(7, file), Color::Black, *piece);
        }
        board
    }

    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            next_id: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<PlacedPiece> {
        self.squares[sq.0][sq.1]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.0][sq.1].is_none()
    }

    /// True if `sq` holds a piece of `color`
    #[inline]
    #[must_use]
    pub fn is_color(&self, sq: Square, color: Color) -> bool {
        matches!(self.piece_at(sq), Some(p) if p.color == color)
    }

    /// Put a new piece on `sq` with a fresh identity token.
    pub fn place(&mut self, sq: Square, color: Color, piece: Piece) -> PieceId {
        let id = PieceId(self.next_id);
        self.next_id += 1;
        self.squares[sq.0][sq.1] = Some(PlacedPiece::new(color, piece, id));
        id
    }

    /// Overwrite a cell, keeping whatever identity the piece carries.
    #[inline]
    pub(crate) fn set(&mut self, sq: Square, piece: Option<PlacedPiece>) {
        self.squares[sq.0][sq.1] = piece;
    }

    #[inline]
    pub fn remove(&mut self, sq: Square) -> Option<PlacedPiece> {
        self.squares[sq.0][sq.1].take()
    }

    /// All occupied squares in index order (a1, b1, ..., h8)
    pub fn pieces(&self) -> impl Iterator<Item = (Square, PlacedPiece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Occupied squares of one color, in index order
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, PlacedPiece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    #[must_use]
    pub fn count(&self, color: Color, piece: Piece) -> usize {
        self.pieces().filter(|(_, p)| p.is(color, piece)).count()
    }

    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.is(color, Piece::King))
            .map(|(sq, _)| sq)
    }

    /// Check that each side has exactly one king.
    pub fn validate(&self) -> Result<(), StateError> {
        for color in Color::BOTH {
            match self.count(color, Piece::King) {
                0 => return Err(StateError::MissingKing { color }),
                1 => {}
                count => return Err(StateError::ExtraKing { color, count }),
            }
        }
        Ok(())
    }

    /// Grid in UI orientation: row 0 is rank 8, column 0 is file a.
    #[must_use]
    pub fn to_grid(&self) -> [[Option<PlacedPiece>; 8]; 8] {
        let mut grid = [[None; 8]; 8];
        for (row, cells) in grid.iter_mut().enumerate() {
            *cells = self.squares[7 - row];
        }
        grid
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.squares == other.squares
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let c = match self.squares[rank][file] {
                    Some(p) => p.piece.to_fen_char(p.color),
                    None => '.',
                };
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

/// Rules-relevant game position: pieces, side to move, castling rights and
/// en-passant target.
///
/// The move counters are carried for FEN fidelity only.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Position {
    /// Standard starting position, white to move, all castling rights.
    #[must_use]
    pub fn new() -> Self {
        Position {
            board: Board::new(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::all(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Empty board, white to move, no rights. Mostly useful with the builder.
    #[must_use]
    pub fn empty() -> Self {
        Position {
            board: Board::empty(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<PlacedPiece> {
        self.board.piece_at(sq)
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "{} to move", self.side_to_move)
    }
}

/// Everything needed to take a move back.
///
/// Relative to the position the move was made in, so it stays valid however
/// many earlier moves are forgotten.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnmakeInfo {
    pub(crate) moved: Option<PlacedPiece>,
    pub(crate) captured: Option<(Square, PlacedPiece)>,
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_fullmove_number: u32,
    pub(crate) previous_next_id: u32,
}

impl UnmakeInfo {
    /// Piece removed by the move and the square it stood on
    #[must_use]
    pub fn captured(&self) -> Option<(Square, PlacedPiece)> {
        self.captured
    }

    #[must_use]
    pub fn previous_castling_rights(&self) -> CastlingRights {
        self.previous_castling_rights
    }

    #[must_use]
    pub fn previous_en_passant_target(&self) -> Option<Square> {
        self.previous_en_passant_target
    }
}
