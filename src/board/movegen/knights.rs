use super::super::attack_tables::knight_targets;
use super::super::{Color, Move, MoveList, Piece, Position, Square};

impl Position {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for &to in knight_targets(from) {
            match self.board.piece_at(to) {
                Some(p) if p.color == color => {}
                target => moves.push(Move::new(
                    from,
                    to,
                    color,
                    Piece::Knight,
                    target.map(|p| p.piece),
                )),
            }
        }
    }
}
