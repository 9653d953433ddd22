//! Move advice and shared game access.
//!
//! External move sources plug in through [`MoveSuggester`]. [`MoveAdvisor`]
//! checks their answers against the legal moves and falls back to a random
//! legal move when they are unusable. [`SharedGame`] lets a human player and
//! the engine take turns on one game from different threads.

mod advisor;
mod controller;
mod suggester;

pub use advisor::{Advice, AdviceSource, MoveAdvisor};
pub use controller::SharedGame;
pub use suggester::{parse_coordinate_move, MoveSuggester, SearchSuggester, SuggestionError};
