//! Square attack detection.
//!
//! Works backwards from the target square: it is attacked if a suitable
//! enemy piece sits where a piece of that kind standing on the target could
//! reach. Pawns only attack diagonally and kings only one step, so castling
//! and en passant never count as attacks.

use super::attack_tables::{king_targets, knight_targets, BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use super::{Board, Color, Piece, Position, Square};

impl Board {
    /// True if any piece of `by` attacks `square`, whatever stands on it.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        // A pawn of `by` attacks from one rank behind the target, in its own direction.
        let back = -by.pawn_direction();
        for df in [-1, 1] {
            if let Some(from) = square.offset(back, df) {
                if self.holds(from, by, Piece::Pawn) {
                    return true;
                }
            }
        }

        if knight_targets(square)
            .iter()
            .any(|&sq| self.holds(sq, by, Piece::Knight))
        {
            return true;
        }

        if king_targets(square)
            .iter()
            .any(|&sq| self.holds(sq, by, Piece::King))
        {
            return true;
        }

        self.slider_attacks(square, by, &ROOK_DIRECTIONS, Piece::Rook)
            || self.slider_attacks(square, by, &BISHOP_DIRECTIONS, Piece::Bishop)
    }

    /// Walk each ray from `square`; the first piece hit attacks it if it is
    /// `by`'s `slider` or queen.
    fn slider_attacks(
        &self,
        square: Square,
        by: Color,
        directions: &[(isize, isize)],
        slider: Piece,
    ) -> bool {
        for &(dr, df) in directions {
            let mut current = square;
            while let Some(next) = current.offset(dr, df) {
                if let Some(p) = self.piece_at(next) {
                    if p.color == by && (p.piece == slider || p.piece == Piece::Queen) {
                        return true;
                    }
                    break;
                }
                current = next;
            }
        }
        false
    }

    #[inline]
    fn holds(&self, sq: Square, color: Color, piece: Piece) -> bool {
        matches!(self.piece_at(sq), Some(p) if p.is(color, piece))
    }

    /// True if `color`'s king is attacked. A missing king is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.find_king(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opponent()))
    }
}

impl Position {
    /// True if the side to move is in check.
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.board.is_in_check(self.side_to_move)
    }
}
