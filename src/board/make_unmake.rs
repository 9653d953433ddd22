use super::{CastleSide, Color, Move, Piece, Position, Square, UnmakeInfo};

impl Position {
    /// Square of the piece a move removes, if any. Differs from `mv.to` only
    /// for en passant.
    #[inline]
    pub(crate) fn capture_square(mv: &Move) -> Square {
        if mv.is_en_passant {
            Square(mv.from.rank(), mv.to.file())
        } else {
            mv.to
        }
    }

    /// Apply a move and return what is needed to take it back.
    ///
    /// The move is trusted to come from the legality filter. With
    /// `promotion = None` on a promotion the pawn itself lands on the last
    /// rank.
    pub fn make_move(&mut self, mv: &Move) -> UnmakeInfo {
        let mut info = UnmakeInfo {
            moved: self.board.piece_at(mv.from),
            captured: None,
            previous_en_passant_target: self.en_passant_target,
            previous_castling_rights: self.castling_rights,
            previous_halfmove_clock: self.halfmove_clock,
            previous_fullmove_number: self.fullmove_number,
            previous_next_id: self.board.next_id,
        };
        let Some(moving) = info.moved else {
            debug_assert!(false, "make_move from empty square {}", mv.from);
            return info;
        };
        let color = moving.color;

        let capture_sq = Self::capture_square(mv);
        if let Some(victim) = self.board.remove(capture_sq) {
            info.captured = Some((capture_sq, victim));
            // A rook taken on its corner can no longer castle.
            if victim.piece == Piece::Rook && capture_sq.rank() == victim.color.back_rank() {
                if let Some(side) = CastleSide::from_rook_file(capture_sq.file()) {
                    self.castling_rights.remove(victim.color, side);
                }
            }
        }

        self.board.remove(mv.from);
        match mv.promotion {
            Some(piece) if mv.is_promotion => {
                self.board.place(mv.to, color, piece);
            }
            _ => self.board.set(mv.to, Some(moving)),
        }

        if mv.is_castling {
            if let Some(side) = CastleSide::from_king_target(mv.to.file()) {
                let rank = color.back_rank();
                let rook = self.board.remove(Square(rank, side.rook_file()));
                self.board.set(Square(rank, side.rook_target_file()), rook);
            }
        }

        match moving.piece {
            Piece::King => self.castling_rights.remove_color(color),
            Piece::Rook if mv.from.rank() == color.back_rank() => {
                if let Some(side) = CastleSide::from_rook_file(mv.from.file()) {
                    self.castling_rights.remove(color, side);
                }
            }
            _ => {}
        }

        self.en_passant_target = if mv.is_double_pawn_push() {
            Some(Square((mv.from.rank() + mv.to.rank()) / 2, mv.from.file()))
        } else {
            None
        };

        if moving.piece == Piece::Pawn || info.captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if color == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = color.opponent();
        info
    }

    /// Reverse `make_move`, restoring the exact prior position.
    pub fn unmake_move(&mut self, mv: &Move, info: UnmakeInfo) {
        self.side_to_move = mv.color;
        self.castling_rights = info.previous_castling_rights;
        self.en_passant_target = info.previous_en_passant_target;
        self.halfmove_clock = info.previous_halfmove_clock;
        self.fullmove_number = info.previous_fullmove_number;

        let Some(moved) = info.moved else {
            return;
        };

        if mv.is_castling {
            if let Some(side) = CastleSide::from_king_target(mv.to.file()) {
                let rank = moved.color.back_rank();
                let rook = self.board.remove(Square(rank, side.rook_target_file()));
                self.board.set(Square(rank, side.rook_file()), rook);
            }
        }

        self.board.remove(mv.to);
        self.board.set(mv.from, Some(moved));
        if let Some((sq, victim)) = info.captured {
            self.board.set(sq, Some(victim));
        }
        self.board.next_id = info.previous_next_id;
    }

    /// Replace the pawn standing on `square` with a freshly minted piece.
    pub(crate) fn promote_in_place(&mut self, square: Square, piece: Piece) {
        if let Some(pawn) = self.board.piece_at(square) {
            self.board.place(square, pawn.color, piece);
        }
    }
}
