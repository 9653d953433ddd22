use super::super::attack_tables::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use super::super::{Color, Move, MoveList, Piece, Position, Square};

impl Position {
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        slider: Piece,
        moves: &mut MoveList,
    ) {
        let directions: &[(isize, isize)] = match slider {
            Piece::Bishop => &BISHOP_DIRECTIONS,
            Piece::Rook => &ROOK_DIRECTIONS,
            _ => &QUEEN_DIRECTIONS,
        };

        for &(dr, df) in directions {
            let mut current = from;
            while let Some(to) = current.offset(dr, df) {
                match self.board.piece_at(to) {
                    None => moves.push(Move::new(from, to, color, slider, None)),
                    Some(p) => {
                        if p.color != color {
                            moves.push(Move::new(from, to, color, slider, Some(p.piece)));
                        }
                        break;
                    }
                }
                current = to;
            }
        }
    }
}
