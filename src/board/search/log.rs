use crate::board::Move;

/// Progress report for one completed iterative-deepening iteration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchInfo {
    pub depth: u32,
    pub score: i32,
    pub nodes: u64,
    pub nps: u64,
    pub time_ms: u128,
    pub best_move: Option<Move>,
}

pub trait SearchLogger {
    fn info(&self, info: &SearchInfo);
}

/// Forwards iteration reports to the `log` facade.
pub struct LogLogger;

impl SearchLogger for LogLogger {
    fn info(&self, info: &SearchInfo) {
        let best = info
            .best_move
            .map_or_else(|| "none".to_string(), |mv| mv.to_string());
        log::info!(
            "depth {} score {} nodes {} nps {} time {} best {}",
            info.depth,
            info.score,
            info.nodes,
            info.nps,
            info.time_ms,
            best
        );
    }
}
