//! Owned game: the authoritative position plus history, status and any
//! pending promotion.

use std::sync::atomic::AtomicBool;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{
    best_move, find_best_move, Board, CastlingRights, Color, FenError, GameResult, GameStatus,
    Move, MoveError, Piece, Position, SearchLimits, SearchResult, Square,
};

use super::config::EngineConfig;
use super::history::{HistoryEntry, HistoryStats, MoveHistory};

/// A pawn waiting on the last rank for its promotion piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PendingPromotion {
    pub square: Square,
    pub color: Color,
}

/// What `GameManager::apply_move` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was played and the turn passed.
    Committed(Move),
    /// The pawn reached the last rank; call `complete_promotion` to finish the move.
    PendingPromotion { square: Square, color: Color },
}

/// Complete state of one game.
#[derive(Clone, Debug)]
pub struct GameState {
    position: Position,
    history: MoveHistory,
    status: GameStatus,
    pending_promotion: Option<PendingPromotion>,
}

impl GameState {
    fn new(position: Position, status: GameStatus, max_history: usize) -> Self {
        GameState {
            position,
            history: MoveHistory::new(max_history),
            status,
            pending_promotion: None,
        }
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.position.board()
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.position.castling_rights()
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.position.en_passant_target()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.status.in_check
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.status.checkmate
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.status.stalemate
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.status.is_game_over()
    }

    #[must_use]
    pub fn result(&self) -> GameResult {
        self.status.result()
    }

    #[must_use]
    pub fn pending_promotion(&self) -> Option<PendingPromotion> {
        self.pending_promotion
    }

    /// Retained moves, oldest first.
    pub fn moves(&self) -> impl DoubleEndedIterator<Item = &Move> + '_ {
        self.history.iter().map(|entry| &entry.mv)
    }

    /// Retained history entries, oldest first.
    pub fn history(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry> + '_ {
        self.history.iter()
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last().map(|entry| &entry.mv)
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

/// Pieces each side has taken, in capture order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CapturedPieces {
    /// Black pieces taken by white
    pub by_white: Vec<Piece>,
    /// White pieces taken by black
    pub by_black: Vec<Piece>,
}

/// Number of pieces of each kind per side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PieceCounts {
    counts: [[usize; 6]; 2],
}

impl PieceCounts {
    #[must_use]
    pub fn get(&self, color: Color, piece: Piece) -> usize {
        self.counts[color.index()][piece.index()]
    }

    #[must_use]
    pub fn total(&self, color: Color) -> usize {
        self.counts[color.index()].iter().sum()
    }
}

/// Owns one game and is the only way to change it.
#[derive(Clone, Debug)]
pub struct GameManager {
    state: GameState,
    config: EngineConfig,
}

impl Default for GameManager {
    fn default() -> Self {
        GameManager::new()
    }
}

impl GameManager {
    /// New game from the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        GameManager::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let state = GameState::new(
            Position::new(),
            GameStatus::initial(),
            config.effective_max_history(),
        );
        GameManager { state, config }
    }

    /// New game from a FEN position, with default configuration.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let position = Position::try_from_fen(fen)?;
        let status = position.analyze().map_err(FenError::InvalidKings)?;
        let config = EngineConfig::default();
        let state = GameState::new(position, status, config.effective_max_history());
        Ok(GameManager { state, config })
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Legal destinations of the piece on `from`, for that piece's color.
    /// Empty for an empty or off-board square.
    #[must_use]
    pub fn legal_moves(&self, from: Square) -> Vec<Square> {
        self.state.position.legal_moves(from)
    }

    /// Play `from` -> `to` for the side to move.
    ///
    /// A pawn reaching the last rank without `promotion` is left there and
    /// the move waits for `complete_promotion`; the turn does not pass.
    /// A `promotion` on a move that does not promote is ignored.
    pub fn apply_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<MoveOutcome, MoveError> {
        if let Some(pending) = self.state.pending_promotion {
            return Err(MoveError::PromotionPending {
                square: pending.square,
            });
        }
        if let Some(square) = [from, to].into_iter().find(|sq| !sq.is_on_board()) {
            return Err(MoveError::OffBoard { square });
        }
        self.state.position.board().validate()?;

        let position = &self.state.position;
        let piece = position
            .piece_at(from)
            .ok_or(MoveError::NoPiece { square: from })?;
        if piece.color != position.side_to_move() {
            return Err(MoveError::WrongTurn {
                square: from,
                to_move: position.side_to_move(),
            });
        }
        if let Some(choice) = promotion {
            if !choice.is_promotion_choice() {
                return Err(MoveError::InvalidPromotion { piece: choice });
            }
        }
        if position.board().is_color(to, piece.color) {
            return Err(MoveError::OwnPieceCapture { square: to });
        }

        let mut mv = position
            .legal_moves_from(from)
            .iter()
            .find(|mv| mv.to == to)
            .copied()
            .ok_or(MoveError::IllegalDestination { from, to })?;
        if mv.is_promotion {
            mv.promotion = promotion;
        }

        let previous_status = self.state.status;
        let undo = self.state.position.make_move(&mv);

        if mv.is_pending_promotion() {
            self.state.position.side_to_move = mv.color;
            self.state.history.push(HistoryEntry {
                mv,
                undo,
                previous_status,
            });
            self.state.pending_promotion = Some(PendingPromotion {
                square: to,
                color: mv.color,
            });
            log::debug!("{} pawn reached {to}, awaiting promotion choice", mv.color);
            return Ok(MoveOutcome::PendingPromotion {
                square: to,
                color: mv.color,
            });
        }

        match self.state.position.analyze() {
            Ok(status) => {
                self.state.history.push(HistoryEntry {
                    mv,
                    undo,
                    previous_status,
                });
                self.record_status(status, &mv);
                Ok(MoveOutcome::Committed(mv))
            }
            Err(err) => {
                self.state.position.unmake_move(&mv, undo);
                Err(err.into())
            }
        }
    }

    /// Finish a pending promotion on `square` with `choice`.
    pub fn complete_promotion(
        &mut self,
        square: Square,
        choice: Piece,
    ) -> Result<&GameState, MoveError> {
        let pending = self
            .state
            .pending_promotion
            .filter(|pending| pending.square == square)
            .ok_or(MoveError::NoPendingPromotion { square })?;
        if !choice.is_promotion_choice() {
            return Err(MoveError::InvalidPromotion { piece: choice });
        }

        let mut promoted = self.state.position.clone();
        promoted.promote_in_place(square, choice);
        promoted.side_to_move = pending.color.opponent();
        let status = promoted.analyze()?;
        self.state.position = promoted;
        self.state.pending_promotion = None;

        let mut mv = None;
        if let Some(entry) = self.state.history.last_mut() {
            entry.mv.promotion = Some(choice);
            mv = Some(entry.mv);
        }
        if let Some(mv) = mv {
            self.record_status(status, &mv);
        } else {
            self.state.status = status;
        }
        Ok(&self.state)
    }

    fn record_status(&mut self, status: GameStatus, mv: &Move) {
        self.state.status = status;
        log::debug!("{} played {mv}; {}", mv.color, status.status_message());
        if status.is_game_over() {
            log::info!("game over: {} ({})", status.status_message(), status.result());
        }
    }

    /// Take back the most recent move. Returns false if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(entry) = self.state.history.pop() else {
            return false;
        };
        self.state.position.unmake_move(&entry.mv, entry.undo);
        self.state.status = entry.previous_status;
        self.state.pending_promotion = None;
        log::debug!("undid {} ({})", entry.mv, entry.mv.color);
        true
    }

    /// Back to the starting position with an empty history.
    pub fn reset(&mut self) {
        self.state.position = Position::new();
        self.state.history.clear();
        self.state.status = GameStatus::initial();
        self.state.pending_promotion = None;
        log::debug!("game reset");
    }

    /// Fixed-depth search for the side to move. `None` if the game is over
    /// or a promotion is pending.
    #[must_use]
    pub fn best_move(&self, depth: u32) -> Option<Move> {
        if self.state.pending_promotion.is_some() {
            return None;
        }
        best_move(&self.state.position, depth)
    }

    /// Iterative-deepening search using the configured depth and node budget.
    #[must_use]
    pub fn search(&self, stop: &AtomicBool) -> SearchResult {
        let limits = SearchLimits {
            depth: self.config.default_depth,
            node_limit: self.config.node_limit,
        };
        find_best_move(&self.state.position, limits, stop)
    }

    #[must_use]
    pub fn history_stats(&self) -> HistoryStats {
        self.state.history.stats()
    }

    #[must_use]
    pub fn max_history(&self) -> usize {
        self.state.history.max_len()
    }

    /// Change the history cap (minimum 10). Excess old entries are dropped now.
    pub fn set_max_history(&mut self, max_len: usize) {
        self.state.history.set_max_len(max_len);
        self.config.max_history = self.state.history.max_len();
    }

    /// Pieces captured by each side, as far back as history reaches.
    #[must_use]
    pub fn captured_pieces(&self) -> CapturedPieces {
        let mut captured = CapturedPieces::default();
        for mv in self.state.moves() {
            if let Some(piece) = mv.captured {
                match mv.color {
                    Color::White => captured.by_white.push(piece),
                    Color::Black => captured.by_black.push(piece),
                }
            }
        }
        captured
    }

    /// White material minus black material on the board, kings excluded.
    #[must_use]
    pub fn material_difference(&self) -> i32 {
        self.state
            .board()
            .pieces()
            .filter(|(_, p)| p.piece != Piece::King)
            .map(|(_, p)| match p.color {
                Color::White => p.piece.value(),
                Color::Black => -p.piece.value(),
            })
            .sum()
    }

    #[must_use]
    pub fn piece_counts(&self) -> PieceCounts {
        let mut counts = PieceCounts::default();
        for (_, p) in self.state.board().pieces() {
            counts.counts[p.color.index()][p.piece.index()] += 1;
        }
        counts
    }
}
