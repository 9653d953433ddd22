use std::collections::VecDeque;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{GameStatus, Move, UnmakeInfo};

use super::config::MIN_MAX_HISTORY;

/// One played move and what it takes to undo it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HistoryEntry {
    pub mv: Move,
    pub(crate) undo: UnmakeInfo,
    pub(crate) previous_status: GameStatus,
}

impl HistoryEntry {
    #[must_use]
    pub fn undo_info(&self) -> &UnmakeInfo {
        &self.undo
    }
}

/// Snapshot of history bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryStats {
    pub len: usize,
    pub max_len: usize,
    /// Entries dropped off the front since the game started
    pub evicted: u64,
}

/// Bounded move history; the oldest entries fall off first.
#[derive(Clone, Debug)]
pub(crate) struct MoveHistory {
    entries: VecDeque<HistoryEntry>,
    max_len: usize,
    evicted: u64,
}

impl MoveHistory {
    pub(crate) fn new(max_len: usize) -> Self {
        let max_len = max_len.max(MIN_MAX_HISTORY);
        MoveHistory {
            entries: VecDeque::with_capacity(max_len + 1),
            max_len,
            evicted: 0,
        }
    }

    pub(crate) fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
        self.trim();
    }

    pub(crate) fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop_back()
    }

    pub(crate) fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    pub(crate) fn last_mut(&mut self) -> Option<&mut HistoryEntry> {
        self.entries.back_mut()
    }

    pub(crate) fn iter(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry> + '_ {
        self.entries.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn max_len(&self) -> usize {
        self.max_len
    }

    /// Change the cap, clamped to the floor, dropping old entries at once.
    pub(crate) fn set_max_len(&mut self, max_len: usize) {
        self.max_len = max_len.max(MIN_MAX_HISTORY);
        self.trim();
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.evicted = 0;
    }

    pub(crate) fn stats(&self) -> HistoryStats {
        HistoryStats {
            len: self.entries.len(),
            max_len: self.max_len,
            evicted: self.evicted,
        }
    }

    fn trim(&mut self) {
        while self.entries.len() > self.max_len {
            self.entries.pop_front();
            self.evicted += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, Piece, Position, Square};

    fn entry(position: &mut Position, text: &str) -> HistoryEntry {
        let mv = position.parse_move(text).unwrap();
        let undo = position.make_move(&mv);
        HistoryEntry {
            mv,
            undo,
            previous_status: GameStatus::initial(),
        }
    }

    #[test]
    fn trims_from_the_front() {
        let mut position = Position::new();
        let mut history = MoveHistory::new(10);
        for _ in 0..3 {
            for text in ["b1c3", "b8c6", "c3b1", "c6b8"] {
                history.push(entry(&mut position, text));
            }
        }
        assert_eq!(history.len(), 10);
        assert_eq!(history.stats().evicted, 2);
        assert_eq!(history.iter().next().map(|e| e.mv.to_string()), Some("c3b1".into()));

        history.set_max_len(0);
        assert_eq!(history.max_len(), MIN_MAX_HISTORY);

        history.clear();
        assert_eq!(history.len(), 0);
        assert_eq!(history.stats().evicted, 0);
    }

    #[test]
    fn last_mut_backfills_promotion() {
        let mut position = Position::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
        let mut history = MoveHistory::new(10);
        history.push(entry(&mut position, "a7a8"));
        if let Some(last) = history.last_mut() {
            last.mv.promotion = Some(Piece::Rook);
        }
        let last = history.pop().unwrap();
        assert_eq!(last.mv.promotion, Some(Piece::Rook));
        assert_eq!(last.mv.color, Color::White);
        assert_eq!(last.undo_info().captured(), None);
        assert_eq!(last.mv.to, Square(7, 0));
    }
}
