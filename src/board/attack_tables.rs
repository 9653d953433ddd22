use once_cell::sync::Lazy;

use super::Square;

pub(crate) const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub(crate) const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

fn jump_table(deltas: &[(isize, isize)]) -> Vec<Vec<Square>> {
    Square::all()
        .map(|sq| {
            deltas
                .iter()
                .filter_map(|&(dr, df)| sq.offset(dr, df))
                .collect()
        })
        .collect()
}

/// Knight destinations per square index, in `KNIGHT_DELTAS` order.
pub(crate) static KNIGHT_TARGETS: Lazy<Vec<Vec<Square>>> = Lazy::new(|| jump_table(&KNIGHT_DELTAS));

/// King (one-step) destinations per square index, in `KING_DELTAS` order.
pub(crate) static KING_TARGETS: Lazy<Vec<Vec<Square>>> = Lazy::new(|| jump_table(&KING_DELTAS));

#[inline]
pub(crate) fn knight_targets(sq: Square) -> &'static [Square] {
    &KNIGHT_TARGETS[sq.as_index()]
}

#[inline]
pub(crate) fn king_targets(sq: Square) -> &'static [Square] {
    &KING_TARGETS[sq.as_index()]
}
