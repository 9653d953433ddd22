//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts for move generation correctness
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `edge_cases.rs` - Castling, en passant, promotion and end-of-game positions
//! - `eval.rs` - Static evaluation
//! - `search.rs` - Minimax / alpha-beta agreement and search limits
//! - `proptest.rs` - Property-based tests

mod make_unmake;
mod proptest;
