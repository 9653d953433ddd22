use super::super::{Color, Move, MoveList, Piece, Position, Square};

impl Position {
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let board = &self.board;
        let dir = color.pawn_direction();
        let promotion_rank = color.pawn_promotion_rank();

        let push = |to: Square, captured: Option<Piece>, moves: &mut MoveList| {
            if to.rank() == promotion_rank {
                moves.push(Move::promotion(from, to, color, captured, Some(Piece::Queen)));
            } else {
                moves.push(Move::new(from, to, color, Piece::Pawn, captured));
            }
        };

        if let Some(forward) = from.offset(dir, 0) {
            if board.is_empty(forward) {
                push(forward, None, moves);
                if from.rank() == color.pawn_start_rank() {
                    if let Some(double) = forward.offset(dir, 0) {
                        if board.is_empty(double) {
                            moves.push(Move::new(from, double, color, Piece::Pawn, None));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target) = from.offset(dir, df) else {
                continue;
            };
            match board.piece_at(target) {
                Some(victim) if victim.color != color => push(target, Some(victim.piece), moves),
                Some(_) => {}
                None => {
                    if self.is_en_passant_capture(from, target, color) {
                        moves.push(Move::en_passant(from, target, color));
                    }
                }
            }
        }
    }

    /// The en-passant target only exists for the side to move, and needs the
    /// enemy pawn that just advanced beside `from`.
    fn is_en_passant_capture(&self, from: Square, target: Square, color: Color) -> bool {
        color == self.side_to_move
            && self.en_passant_target == Some(target)
            && matches!(
                self.board.piece_at(Square(from.rank(), target.file())),
                Some(p) if p.is(color.opponent(), Piece::Pawn)
            )
    }
}
