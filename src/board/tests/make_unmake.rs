//! Make/unmake move tests.

use crate::board::{CastleSide, Color, Move, Piece, Position, Square};
use rand::prelude::*;

fn find_move(position: &Position, from: Square, to: Square, promotion: Option<Piece>) -> Move {
    position
        .generate_moves()
        .find(from, to, promotion)
        .expect("Expected move not found")
}

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

#[test]
fn test_en_passant_make_unmake() {
    let mut position =
        Position::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3");
    let original = position.clone();
    let mv = find_move(&position, sq("e5"), sq("f6"), None);
    assert!(mv.is_en_passant);

    let info = position.make_move(&mv);
    assert!(position.piece_at(sq("f5")).is_none(), "victim removed");
    assert_eq!(info.captured().map(|(s, _)| s), Some(sq("f5")));

    position.unmake_move(&mv, info);
    assert_eq!(position, original);
    assert_eq!(position.en_passant_target(), Some(sq("f6")));
}

#[test]
fn test_promotion_make_unmake() {
    let mut position = Position::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let original = position.clone();
    let mv = find_move(&position, sq("a7"), sq("a8"), Some(Piece::Knight));
    let info = position.make_move(&mv);
    assert_eq!(
        position.piece_at(sq("a8")).map(|p| p.piece),
        Some(Piece::Knight)
    );
    position.unmake_move(&mv, info);
    assert_eq!(position, original);
    assert!(position
        .piece_at(sq("a7"))
        .is_some_and(|p| p.is(Color::White, Piece::Pawn)));
}

#[test]
fn test_promotion_without_choice_leaves_pawn() {
    let mut position = Position::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let mut mv = find_move(&position, sq("a7"), sq("a8"), None);
    mv.promotion = None;
    let info = position.make_move(&mv);
    assert!(position
        .piece_at(sq("a8"))
        .is_some_and(|p| p.is(Color::White, Piece::Pawn)));
    position.unmake_move(&mv, info);
    assert!(position.piece_at(sq("a8")).is_none());
}

#[test]
fn test_castling_make_unmake_moves_rook() {
    for (text, king_to, rook_from, rook_to) in [
        ("O-O", "g1", "h1", "f1"),
        ("O-O-O", "c1", "a1", "d1"),
    ] {
        let mut position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let original = position.clone();
        let mv = position.parse_move(text).unwrap();
        let info = position.make_move(&mv);

        assert!(position
            .piece_at(sq(king_to))
            .is_some_and(|p| p.is(Color::White, Piece::King)));
        assert!(position
            .piece_at(sq(rook_to))
            .is_some_and(|p| p.is(Color::White, Piece::Rook)));
        assert!(position.piece_at(sq(rook_from)).is_none());
        assert!(!position.castling_rights().has(Color::White, CastleSide::KingSide));
        assert!(!position.castling_rights().has(Color::White, CastleSide::QueenSide));
        assert!(position.castling_rights().has(Color::Black, CastleSide::KingSide));

        position.unmake_move(&mv, info);
        assert_eq!(position, original, "{text} not restored");
    }
}

#[test]
fn test_rook_moves_and_captures_clear_rights() {
    let mut position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let mv = position.make_move_str("h1h8").unwrap();
    assert_eq!(mv.captured, Some(Piece::Rook));
    let rights = position.castling_rights();
    assert!(!rights.has(Color::White, CastleSide::KingSide));
    assert!(!rights.has(Color::Black, CastleSide::KingSide));
    assert!(rights.has(Color::White, CastleSide::QueenSide));
    assert!(rights.has(Color::Black, CastleSide::QueenSide));
}

#[test]
fn test_double_push_sets_en_passant_target() {
    let mut position = Position::new();
    position.make_move_str("e2e4").unwrap();
    assert_eq!(position.en_passant_target(), Some(sq("e3")));
    position.make_move_str("g8f6").unwrap();
    assert_eq!(position.en_passant_target(), None);
}

#[test]
fn test_counters_update() {
    let mut position = Position::new();
    position.make_move_str("g1f3").unwrap();
    assert_eq!(position.halfmove_clock(), 1);
    assert_eq!(position.fullmove_number(), 1);
    position.make_move_str("e7e5").unwrap();
    assert_eq!(position.halfmove_clock(), 0);
    assert_eq!(position.fullmove_number(), 2);
    assert_eq!(position.side_to_move(), Color::White);
}

#[test]
fn test_legal_moves_stable_after_make_unmake() {
    let mut position = Position::from_fen(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    );
    let initial: Vec<String> = position.generate_moves().iter().map(Move::to_string).collect();

    for mv in position.generate_moves() {
        let info = position.make_move(&mv);
        position.unmake_move(&mv, info);
    }

    let after: Vec<String> = position.generate_moves().iter().map(Move::to_string).collect();
    assert_eq!(initial, after);
}

#[test]
fn test_random_games_unwind_to_start() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..8 {
        let mut position = Position::new();
        let mut played = Vec::new();
        for _ in 0..60 {
            let moves = position.generate_moves();
            let Some(&mv) = moves.as_slice().choose(&mut rng) else {
                break;
            };
            let info = position.make_move(&mv);
            played.push((mv, info));
        }
        while let Some((mv, info)) = played.pop() {
            position.unmake_move(&mv, info);
        }
        assert_eq!(position, Position::new());
        assert_eq!(position.to_fen(), Position::new().to_fen());
    }
}
