//! Search module implementing minimax with alpha-beta pruning.
//!
//! Features:
//! - Fixed-depth alpha-beta (`best_move`) and a pruning-free reference (`SearchContext::minimax`)
//! - Iterative deepening with a node budget and a cooperative stop flag (`find_best_move`)
//! - Per-iteration progress reports through `SearchLogger`

mod constants;
mod log;
mod simple;

use std::sync::atomic::AtomicBool;
use std::time::Instant;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::eval::evaluate;
use super::{Move, Position};
pub use constants::{DEFAULT_SEARCH_DEPTH, SCORE_INF};
pub use log::{LogLogger, SearchInfo, SearchLogger};
pub use simple::SearchContext;

/// Bounds for an iterative-deepening search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchLimits {
    /// Deepest iteration to run (0 is treated as 1)
    pub depth: u32,
    /// Total nodes across all iterations; `None` for no budget
    pub node_limit: Option<u64>,
}

impl SearchLimits {
    #[must_use]
    pub const fn depth(depth: u32) -> Self {
        SearchLimits {
            depth,
            node_limit: None,
        }
    }

    #[must_use]
    pub const fn with_node_limit(mut self, nodes: u64) -> Self {
        self.node_limit = Some(nodes);
        self
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        SearchLimits::depth(DEFAULT_SEARCH_DEPTH)
    }
}

/// Statistics tracked during search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub elapsed_ms: u128,
}

/// Outcome of `find_best_move`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move of the deepest completed iteration. If no iteration
    /// finished, the first legal move. `None` only when there is no legal move.
    pub best_move: Option<Move>,
    /// Score of `best_move` for the side to move
    pub score: i32,
    /// Deepest fully searched iteration (0 if none finished)
    pub completed_depth: u32,
    pub stats: SearchStats,
}

/// Best move for the side to move, searching `depth` plies.
///
/// Ties go to the first move in generation order. Depth 0 searches one ply.
/// Returns `None` when the side to move has no legal moves.
#[must_use]
pub fn best_move(position: &Position, depth: u32) -> Option<Move> {
    let moves = position.generate_moves();
    let mut ctx = SearchContext::new(position.side_to_move());
    ctx.search_root(position, &moves, depth.max(1))
        .map(|(mv, _)| mv)
}

/// Iterative deepening search bounded by `limits` and `stop`.
#[must_use]
pub fn find_best_move(position: &Position, limits: SearchLimits, stop: &AtomicBool) -> SearchResult {
    find_best_move_with_logger(position, limits, stop, &LogLogger)
}

/// `find_best_move` with a custom progress sink.
pub fn find_best_move_with_logger(
    position: &Position,
    limits: SearchLimits,
    stop: &AtomicBool,
    logger: &dyn SearchLogger,
) -> SearchResult {
    let start = Instant::now();
    let root = position.side_to_move();
    let moves = position.generate_moves();
    let mut result = SearchResult {
        best_move: moves.first(),
        score: evaluate(position, root),
        completed_depth: 0,
        stats: SearchStats::default(),
    };
    if moves.is_empty() {
        return result;
    }

    for depth in 1..=limits.depth.max(1) {
        let budget = limits
            .node_limit
            .map(|limit| limit.saturating_sub(result.stats.nodes));
        let mut ctx = SearchContext::with_limits(root, stop, budget);
        let outcome = ctx.search_root(position, &moves, depth);
        result.stats.nodes += ctx.nodes();

        let Some((mv, score)) = outcome else {
            ::log::trace!(
                "search stopped during depth {depth} after {} nodes",
                result.stats.nodes
            );
            break;
        };
        result.best_move = Some(mv);
        result.score = score;
        result.completed_depth = depth;

        let elapsed = start.elapsed();
        let nps = if elapsed.as_millis() > 0 {
            (u128::from(result.stats.nodes) * 1000 / elapsed.as_millis()) as u64
        } else {
            0
        };
        logger.info(&SearchInfo {
            depth,
            score,
            nodes: result.stats.nodes,
            nps,
            time_ms: elapsed.as_millis(),
            best_move: Some(mv),
        });
    }

    result.stats.elapsed_ms = start.elapsed().as_millis();
    result
}
