//! Static evaluation: material plus piece-square bonuses.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::pst::{
    Table, BISHOP_TABLE, KING_END_TABLE, KING_MIDDLE_TABLE, KNIGHT_TABLE, PAWN_TABLE,
    PAWN_TABLE_BLACK, QUEEN_TABLE, ROOK_TABLE,
};
use super::{Board, Color, Piece, Position, Square};

/// Game phase, judged by how many pieces are left on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GamePhase {
    Opening,
    Middlegame,
    Endgame,
}

impl GamePhase {
    /// More than 24 pieces is the opening, more than 12 the middlegame.
    #[must_use]
    pub const fn from_piece_count(count: usize) -> Self {
        if count > 24 {
            GamePhase::Opening
        } else if count > 12 {
            GamePhase::Middlegame
        } else {
            GamePhase::Endgame
        }
    }
}

impl Board {
    #[must_use]
    pub fn game_phase(&self) -> GamePhase {
        GamePhase::from_piece_count(self.piece_count())
    }
}

fn table_for(piece: Piece, color: Color, phase: GamePhase) -> &'static Table {
    match piece {
        Piece::Pawn => match color {
            Color::White => &PAWN_TABLE,
            Color::Black => &PAWN_TABLE_BLACK,
        },
        Piece::Knight => &KNIGHT_TABLE,
        Piece::Bishop => &BISHOP_TABLE,
        Piece::Rook => &ROOK_TABLE,
        Piece::Queen => &QUEEN_TABLE,
        Piece::King => match phase {
            GamePhase::Endgame => &KING_END_TABLE,
            _ => &KING_MIDDLE_TABLE,
        },
    }
}

/// Positional bonus for a piece of `color` standing on `sq`.
#[inline]
#[must_use]
pub fn position_bonus(piece: Piece, color: Color, sq: Square, phase: GamePhase) -> i32 {
    table_for(piece, color, phase)[sq.row()][sq.col()]
}

/// Score the position from `perspective`'s point of view, in centipawns.
///
/// Every piece adds its value plus its square bonus for its owner and
/// subtracts the same for the other side.
#[must_use]
pub fn evaluate(position: &Position, perspective: Color) -> i32 {
    let board = position.board();
    let phase = board.game_phase();
    board
        .pieces()
        .map(|(sq, p)| {
            let worth = p.piece.value() + position_bonus(p.piece, p.color, sq, phase);
            if p.color == perspective {
                worth
            } else {
                -worth
            }
        })
        .sum()
}

impl Position {
    /// Static evaluation from `perspective`'s point of view.
    #[must_use]
    pub fn evaluate(&self, perspective: Color) -> i32 {
        evaluate(self, perspective)
    }
}
