mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Move, MoveList, Piece, Position, Square, PROMOTION_PIECES};

impl Position {
    /// Pseudo-legal moves of whatever piece stands on `from`, for its own color.
    pub(crate) fn generate_pseudo_moves_from(&self, from: Square, moves: &mut MoveList) {
        let Some(placed) = self.board.piece_at(from) else {
            return;
        };
        let color = placed.color;
        match placed.piece {
            Piece::Pawn => self.generate_pawn_moves(from, color, moves),
            Piece::Knight => self.generate_knight_moves(from, color, moves),
            Piece::Bishop | Piece::Rook | Piece::Queen => {
                self.generate_slider_moves(from, color, placed.piece, moves)
            }
            Piece::King => self.generate_king_moves(from, color, moves),
        }
    }

    /// True if playing `mv` does not leave the mover's own king attacked.
    #[must_use]
    pub fn is_legal(&self, mv: &Move) -> bool {
        let mut next = self.clone();
        next.make_move(mv);
        !next.board.is_in_check(mv.color)
    }

    /// Legal moves of the piece on `from`, evaluated for that piece's color.
    ///
    /// Promotions come with a queen preselected. Empty for an off-board square.
    #[must_use]
    pub fn legal_moves_from(&self, from: Square) -> MoveList {
        let mut pseudo = MoveList::new();
        if !from.is_on_board() {
            return pseudo;
        }
        self.generate_pseudo_moves_from(from, &mut pseudo);
        let mut legal = MoveList::new();
        for mv in pseudo {
            if self.is_legal(&mv) {
                legal.push(mv);
            }
        }
        legal
    }

    /// Legal destination squares of the piece on `from`. Empty if `from` is empty.
    #[must_use]
    pub fn legal_moves(&self, from: Square) -> Vec<Square> {
        self.legal_moves_from(from).iter().map(|mv| mv.to).collect()
    }

    /// Every legal move of the side to move, by origin square index then
    /// generator order.
    #[must_use]
    pub fn generate_moves(&self) -> MoveList {
        let mut legal = MoveList::new();
        let origins: Vec<Square> = self
            .board
            .pieces_of(self.side_to_move)
            .map(|(sq, _)| sq)
            .collect();
        for from in origins {
            for mv in self.legal_moves_from(from) {
                legal.push(mv);
            }
        }
        legal
    }

    /// True if the side to move has at least one legal move.
    #[must_use]
    pub fn has_legal_moves(&self) -> bool {
        self.board
            .pieces_of(self.side_to_move)
            .any(|(sq, _)| !self.legal_moves_from(sq).is_empty())
    }

    /// Count leaf nodes of the legal move tree, with every promotion choice
    /// counted separately.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        let mut position = self.clone();
        perft_inner(&mut position, depth)
    }
}

fn expand_promotions(mv: Move) -> impl Iterator<Item = Move> {
    let choices: &'static [Piece] = if mv.is_promotion {
        &PROMOTION_PIECES
    } else {
        &[]
    };
    std::iter::once(mv)
        .filter(|mv| !mv.is_promotion)
        .chain(choices.iter().map(move |&p| mv.with_promotion(p)))
}

fn perft_inner(position: &mut Position, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = position.generate_moves();
    if depth == 1 {
        return moves
            .iter()
            .map(|mv| if mv.is_promotion { PROMOTION_PIECES.len() as u64 } else { 1 })
            .sum();
    }

    let mut nodes = 0;
    for mv in moves.into_iter().flat_map(expand_promotions) {
        let info = position.make_move(&mv);
        nodes += perft_inner(position, depth - 1);
        position.unmake_move(&mv, info);
    }
    nodes
}
