//! Game and engine configuration.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::DEFAULT_SEARCH_DEPTH;

/// History entries kept when nothing else is configured.
pub const DEFAULT_MAX_HISTORY: usize = 50;

/// Smallest history cap accepted; lower requests are clamped up to this.
pub const MIN_MAX_HISTORY: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Undoable moves kept before the oldest are forgotten
    pub max_history: usize,
    /// Search depth used by `GameManager::best_move` callers that do not pick one
    pub default_depth: u32,
    /// Optional node budget for iterative-deepening searches
    pub node_limit: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_history: DEFAULT_MAX_HISTORY,
            default_depth: DEFAULT_SEARCH_DEPTH,
            node_limit: None,
        }
    }
}

impl EngineConfig {
    /// History cap after applying the floor.
    #[must_use]
    pub fn effective_max_history(&self) -> usize {
        self.max_history.max(MIN_MAX_HISTORY)
    }
}

/// Playing strength offered to users, mapped onto search depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    #[must_use]
    pub const fn depth(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
            Difficulty::Expert => 4,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown difficulty '{s}'"))
    }
}
