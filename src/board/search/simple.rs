//! Core search implementation.
//!
//! Plain fixed-depth minimax with alpha-beta pruning. No move ordering,
//! quiescence or transposition table: leaves are scored by the static
//! evaluator from the point of view of the side that started the search.

use std::sync::atomic::{AtomicBool, Ordering};

use super::constants::SCORE_INF;
use crate::board::eval::evaluate;
use crate::board::{Color, Move, MoveList, Piece, Position};

/// Search context for a single search.
pub struct SearchContext<'a> {
    root: Color,
    stop: Option<&'a AtomicBool>,
    node_limit: Option<u64>,
    nodes: u64,
    aborted: bool,
}

impl<'a> SearchContext<'a> {
    /// Unbounded search scoring leaves for `root`.
    #[must_use]
    pub fn new(root: Color) -> Self {
        SearchContext {
            root,
            stop: None,
            node_limit: None,
            nodes: 0,
            aborted: false,
        }
    }

    /// Search that gives up once `stop` is raised or `node_limit` nodes have
    /// been visited.
    #[must_use]
    pub fn with_limits(root: Color, stop: &'a AtomicBool, node_limit: Option<u64>) -> Self {
        SearchContext {
            root,
            stop: Some(stop),
            node_limit,
            nodes: 0,
            aborted: false,
        }
    }

    #[must_use]
    pub fn root(&self) -> Color {
        self.root
    }

    /// Nodes entered so far
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// True once a limit cut the search short. Scores returned after that are meaningless.
    #[must_use]
    pub fn aborted(&self) -> bool {
        self.aborted
    }

    /// Count a node and report whether the search must unwind.
    fn enter_node(&mut self) -> bool {
        if self.aborted {
            return false;
        }
        let out_of_nodes = self.node_limit.is_some_and(|limit| self.nodes >= limit);
        let stopped = self.stop.is_some_and(|flag| flag.load(Ordering::Relaxed));
        if out_of_nodes || stopped {
            self.aborted = true;
            return false;
        }
        self.nodes += 1;
        true
    }

    /// Minimax value of `position` searched `depth` plies deep with an
    /// alpha-beta window.
    ///
    /// Terminal nodes (depth exhausted, or no legal moves) return the static
    /// evaluation for the root side.
    pub fn alpha_beta(
        &mut self,
        position: &Position,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        if !self.enter_node() {
            return 0;
        }
        if depth == 0 {
            return evaluate(position, self.root);
        }
        let moves = position.generate_moves();
        if moves.is_empty() {
            return evaluate(position, self.root);
        }

        if maximizing {
            let mut best = -SCORE_INF;
            for mv in &moves {
                let child = child_position(position, mv);
                let score = self.alpha_beta(&child, depth - 1, alpha, beta, false);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = SCORE_INF;
            for mv in &moves {
                let child = child_position(position, mv);
                let score = self.alpha_beta(&child, depth - 1, alpha, beta, true);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }

    /// Same recursion as `alpha_beta` without pruning.
    pub fn minimax(&mut self, position: &Position, depth: u32, maximizing: bool) -> i32 {
        if !self.enter_node() {
            return 0;
        }
        if depth == 0 {
            return evaluate(position, self.root);
        }
        let moves = position.generate_moves();
        if moves.is_empty() {
            return evaluate(position, self.root);
        }

        let scores = moves.iter().map(|mv| {
            let child = child_position(position, mv);
            self.minimax(&child, depth - 1, !maximizing)
        });
        let best = if maximizing {
            scores.max()
        } else {
            scores.min()
        };
        best.unwrap_or_else(|| evaluate(position, self.root))
    }

    /// Top-level maximizing pass over `moves`.
    ///
    /// Returns the first move with the strictly highest score. The running
    /// alpha is handed down so later siblings can be cut early.
    pub(crate) fn search_root(
        &mut self,
        position: &Position,
        moves: &MoveList,
        depth: u32,
    ) -> Option<(Move, i32)> {
        let mut best: Option<(Move, i32)> = None;
        let mut alpha = -SCORE_INF;
        for mv in moves {
            let child = child_position(position, mv);
            let score = self.alpha_beta(&child, depth.saturating_sub(1), alpha, SCORE_INF, false);
            if self.aborted {
                return None;
            }
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((*mv, score));
            }
            alpha = alpha.max(score);
        }
        best
    }
}

/// Throwaway copy of `position` with `mv` played. Unresolved promotions become queens.
fn child_position(position: &Position, mv: &Move) -> Position {
    let mv = if mv.is_pending_promotion() {
        mv.with_promotion(Piece::Queen)
    } else {
        *mv
    };
    let mut child = position.clone();
    child.make_move(&mv);
    child
}
