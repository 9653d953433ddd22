//! Search constants.

/// Bound larger than any static evaluation, used as the initial window.
pub const SCORE_INF: i32 = 1_000_000;

/// Depth used when the caller does not pick one.
pub const DEFAULT_SEARCH_DEPTH: u32 = 3;
