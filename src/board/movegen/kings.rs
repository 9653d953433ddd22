use super::super::attack_tables::king_targets;
use super::super::{CastleSide, Color, Move, MoveList, Piece, Position, Square};

/// Files that must be empty between king and rook
const fn between_files(side: CastleSide) -> &'static [usize] {
    match side {
        CastleSide::KingSide => &[5, 6],
        CastleSide::QueenSide => &[1, 2, 3],
    }
}

/// Files the king crosses or lands on
const fn king_path_files(side: CastleSide) -> [usize; 2] {
    match side {
        CastleSide::KingSide => [5, 6],
        CastleSide::QueenSide => [3, 2],
    }
}

impl Position {
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for &to in king_targets(from) {
            match self.board.piece_at(to) {
                Some(p) if p.color == color => {}
                target => {
                    moves.push(Move::new(from, to, color, Piece::King, target.map(|p| p.piece)))
                }
            }
        }

        let back_rank = color.back_rank();
        if from != Square(back_rank, 4) {
            return;
        }
        for side in CastleSide::BOTH {
            if self.can_castle(color, side) {
                let to = Square(back_rank, side.king_target_file());
                moves.push(Move::castle(from, to, color));
            }
        }
    }

    /// Whether `color` may castle towards `side` right now.
    ///
    /// Requires the right, king and rook on their home squares, empty squares
    /// between them, and a king that is not in check and does not cross or
    /// land on an attacked square.
    #[must_use]
    pub fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        if !self.castling_rights.has(color, side) {
            return false;
        }

        let board = &self.board;
        let rank = color.back_rank();
        let king_sq = Square(rank, 4);
        let rook_sq = Square(rank, side.rook_file());
        let opponent = color.opponent();

        let king_home = matches!(board.piece_at(king_sq), Some(p) if p.is(color, Piece::King));
        let rook_home = matches!(board.piece_at(rook_sq), Some(p) if p.is(color, Piece::Rook));
        if !king_home || !rook_home {
            return false;
        }

        if between_files(side)
            .iter()
            .any(|&file| !board.is_empty(Square(rank, file)))
        {
            return false;
        }

        if board.is_square_attacked(king_sq, opponent) {
            return false;
        }

        king_path_files(side)
            .iter()
            .all(|&file| !board.is_square_attacked(Square(rank, file), opponent))
    }
}
