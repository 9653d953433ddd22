//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;

/// A fully described move.
///
/// Besides the two squares, a move carries who moved what and which special
/// rule it triggers, so history entries and UIs can describe it without the
/// position it was played in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub color: Color,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub is_castling: bool,
    pub is_en_passant: bool,
    pub is_promotion: bool,
    /// Chosen promotion piece. `None` on a promotion means the choice is still pending.
    pub promotion: Option<Piece>,
}

impl Move {
    /// A plain move or capture with no special rule.
    #[must_use]
    pub const fn new(
        from: Square,
        to: Square,
        color: Color,
        piece: Piece,
        captured: Option<Piece>,
    ) -> Self {
        Move {
            from,
            to,
            color,
            piece,
            captured,
            is_castling: false,
            is_en_passant: false,
            is_promotion: false,
            promotion: None,
        }
    }

    #[must_use]
    pub const fn castle(from: Square, to: Square, color: Color) -> Self {
        let mut mv = Move::new(from, to, color, Piece::King, None);
        mv.is_castling = true;
        mv
    }

    #[must_use]
    pub const fn en_passant(from: Square, to: Square, color: Color) -> Self {
        let mut mv = Move::new(from, to, color, Piece::Pawn, Some(Piece::Pawn));
        mv.is_en_passant = true;
        mv
    }

    /// Pawn move onto the last rank. `promotion = None` leaves the choice pending.
    #[must_use]
    pub const fn promotion(
        from: Square,
        to: Square,
        color: Color,
        captured: Option<Piece>,
        promotion: Option<Piece>,
    ) -> Self {
        let mut mv = Move::new(from, to, color, Piece::Pawn, captured);
        mv.is_promotion = true;
        mv.promotion = promotion;
        mv
    }

    /// Same move with the promotion choice filled in
    #[inline]
    #[must_use]
    pub const fn with_promotion(mut self, piece: Piece) -> Self {
        self.promotion = Some(piece);
        self
    }

    /// A promotion whose piece has not been chosen yet
    #[inline]
    #[must_use]
    pub const fn is_pending_promotion(&self) -> bool {
        self.is_promotion && self.promotion.is_none()
    }

    #[inline]
    #[must_use]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece == Piece::Pawn && self.from.rank().abs_diff(self.to.rank()) == 2
    }

    /// True if this move goes `from` -> `to` and can carry `promotion`.
    /// Any promotion choice fits a promotion move; none fits any other move.
    #[must_use]
    pub fn matches(&self, from: Square, to: Square, promotion: Option<Piece>) -> bool {
        self.from == from && self.to == to && (promotion.is_none() || self.is_promotion)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

/// Ordered list of moves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(48),
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.moves.get(idx).copied()
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.get(0)
    }

    /// Find the move matching the given squares and promotion choice
    #[must_use]
    pub fn find(&self, from: Square, to: Square, promotion: Option<Piece>) -> Option<Move> {
        self.iter()
            .find(|mv| mv.matches(from, to, promotion))
            .copied()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.moves[idx]
    }
}
