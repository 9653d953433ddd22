//! Property-based tests using proptest.
//!
//! Each case plays a seeded random game from the start position; case counts
//! are kept small since legality is checked by cloning.

use crate::board::{Move, Position, UnmakeInfo};
use proptest::prelude::*;
use rand::prelude::*;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=30usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `num_moves` random legal moves, returning what was played.
fn random_playout(
    position: &mut Position,
    seed: u64,
    num_moves: usize,
) -> Vec<(Move, UnmakeInfo)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut played = Vec::new();
    for _ in 0..num_moves {
        let moves = position.generate_moves();
        let Some(&mv) = moves.as_slice().choose(&mut rng) else {
            break;
        };
        let info = position.make_move(&mv);
        played.push((mv, info));
    }
    played
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Property: make_move followed by unmake_move restores the position exactly
    #[test]
    fn prop_make_unmake_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut position = Position::new();
        let initial_fen = position.to_fen();

        let mut played = random_playout(&mut position, seed, num_moves);
        while let Some((mv, info)) = played.pop() {
            position.unmake_move(&mv, info);
        }

        prop_assert_eq!(&position, &Position::new());
        prop_assert_eq!(position.to_fen(), initial_fen);
    }

    /// Property: FEN round-trip preserves position
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut position = Position::new();
        random_playout(&mut position, seed, num_moves);

        let fen = position.to_fen();
        let restored = Position::try_from_fen(&fen);
        prop_assert!(restored.is_ok(), "{} failed to parse", fen);
        prop_assert_eq!(restored.ok(), Some(position));
    }

    /// Property: legal moves never leave the mover's king attacked
    #[test]
    fn prop_legal_moves_are_legal(seed in seed_strategy(), num_moves in 0..15usize) {
        let mut position = Position::new();
        random_playout(&mut position, seed, num_moves);

        let side = position.side_to_move();
        for mv in position.generate_moves() {
            prop_assert_eq!(mv.color, side);
            let mut next = position.clone();
            next.make_move(&mv);
            prop_assert!(!next.board().is_in_check(side), "{} leaves king in check", mv);
        }
    }

    /// Property: status flags agree with move generation
    #[test]
    fn prop_status_consistent(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut position = Position::new();
        random_playout(&mut position, seed, num_moves);

        let status = position.analyze();
        prop_assert!(status.is_ok());
        let status = status.unwrap();
        let no_moves = position.generate_moves().is_empty();
        prop_assert_eq!(status.checkmate, status.in_check && no_moves);
        prop_assert_eq!(status.stalemate, !status.in_check && no_moves);
        prop_assert_eq!(status.in_check, position.is_in_check());
    }

    /// Property: the king count invariant survives every legal move
    #[test]
    fn prop_kings_survive(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut position = Position::new();
        random_playout(&mut position, seed, num_moves);
        prop_assert!(position.board().validate().is_ok());
    }
}
