//! End-to-end game management: committing moves, promotions, undo and the
//! shared handle.

use std::thread;

use chess_rules::board::{CastleSide, Color, GameResult, MoveError, Piece, Position, Square};
use chess_rules::engine::{AdviceSource, MoveAdvisor, SearchSuggester, SharedGame};
use chess_rules::game::{EngineConfig, GameManager, MoveOutcome, MIN_MAX_HISTORY};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn play(game: &mut GameManager, moves: &[&str]) {
    for text in moves {
        let mv = game.state().position().parse_move(text).unwrap();
        let outcome = game.apply_move(mv.from, mv.to, mv.promotion).unwrap();
        assert!(matches!(outcome, MoveOutcome::Committed(_)), "{text}");
    }
}

#[test]
fn commits_a_move_and_passes_the_turn() {
    let mut game = GameManager::new();
    let outcome = game.apply_move(sq("e2"), sq("e4"), None).unwrap();
    let MoveOutcome::Committed(mv) = outcome else {
        panic!("expected a committed move");
    };
    assert_eq!(mv.to_string(), "e2e4");
    assert_eq!(game.state().side_to_move(), Color::Black);
    assert_eq!(game.state().en_passant_target(), Some(sq("e3")));
    assert_eq!(game.state().history_len(), 1);
    assert_eq!(game.state().last_move(), Some(&mv));
}

#[test]
fn rejects_bad_moves_without_changing_state() {
    let mut game = GameManager::new();
    let before = game.state().position().clone();

    assert_eq!(
        game.apply_move(sq("e4"), sq("e5"), None),
        Err(MoveError::NoPiece { square: sq("e4") })
    );
    assert_eq!(
        game.apply_move(sq("e7"), sq("e5"), None),
        Err(MoveError::WrongTurn {
            square: sq("e7"),
            to_move: Color::White
        })
    );
    assert_eq!(
        game.apply_move(sq("a1"), sq("a2"), None),
        Err(MoveError::OwnPieceCapture { square: sq("a2") })
    );
    assert_eq!(
        game.apply_move(sq("e2"), sq("e5"), None),
        Err(MoveError::IllegalDestination {
            from: sq("e2"),
            to: sq("e5")
        })
    );
    assert_eq!(
        game.apply_move(sq("e2"), sq("e4"), Some(Piece::King)),
        Err(MoveError::InvalidPromotion { piece: Piece::King })
    );

    assert_eq!(game.state().position(), &before);
    assert_eq!(game.state().history_len(), 0);
    assert_eq!(
        game.apply_move(sq("e2"), sq("e5"), None)
            .unwrap_err()
            .to_string(),
        "Illegal move e2e5"
    );
}

#[test]
fn scholars_mate_ends_the_game() {
    let mut game = GameManager::new();
    play(
        &mut game,
        &["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"],
    );
    let state = game.state();
    assert!(state.is_checkmate());
    assert!(state.is_in_check());
    assert!(state.is_game_over());
    assert_eq!(state.result(), GameResult::WhiteWins);
    assert!(game.best_move(2).is_none());
    assert_eq!(game.captured_pieces().by_white, vec![Piece::Pawn]);
}

#[test]
fn castling_moves_the_rook_and_undo_restores_rights() {
    let mut game = GameManager::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let before = game.state().position().clone();

    let outcome = game.apply_move(sq("e1"), sq("g1"), None).unwrap();
    assert!(matches!(outcome, MoveOutcome::Committed(mv) if mv.is_castling));
    let board = game.state().board();
    assert!(board.piece_at(sq("f1")).is_some_and(|p| p.is(Color::White, Piece::Rook)));
    assert!(board.piece_at(sq("h1")).is_none());
    assert!(!game
        .state()
        .castling_rights()
        .has(Color::White, CastleSide::QueenSide));

    assert!(game.undo());
    assert_eq!(game.state().position(), &before);
    assert!(game
        .state()
        .castling_rights()
        .has(Color::White, CastleSide::KingSide));
}

#[test]
fn en_passant_capture_and_undo() {
    let mut game = GameManager::new();
    play(&mut game, &["e2e4", "a7a6", "e4e5", "d7d5"]);
    let before = game.state().position().clone();

    assert!(game.legal_moves(sq("e5")).contains(&sq("d6")));
    game.apply_move(sq("e5"), sq("d6"), None).unwrap();
    assert!(game.state().board().piece_at(sq("d5")).is_none());
    assert_eq!(game.captured_pieces().by_white, vec![Piece::Pawn]);

    assert!(game.undo());
    assert_eq!(game.state().position(), &before);
    assert!(game.state().board().piece_at(sq("d5")).is_some());
}

#[test]
fn promotion_waits_for_a_choice() {
    let mut game = GameManager::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();

    let outcome = game.apply_move(sq("a7"), sq("a8"), None).unwrap();
    assert_eq!(
        outcome,
        MoveOutcome::PendingPromotion {
            square: sq("a8"),
            color: Color::White
        }
    );
    let state = game.state();
    assert_eq!(state.side_to_move(), Color::White);
    assert!(state
        .board()
        .piece_at(sq("a8"))
        .is_some_and(|p| p.is(Color::White, Piece::Pawn)));
    assert!(state.last_move().is_some_and(|mv| mv.is_pending_promotion()));
    assert!(game.best_move(1).is_none());

    assert_eq!(
        game.apply_move(sq("a1"), sq("a2"), None),
        Err(MoveError::PromotionPending { square: sq("a8") })
    );
    assert!(matches!(
        game.complete_promotion(sq("a8"), Piece::Pawn),
        Err(MoveError::InvalidPromotion { .. })
    ));
    assert!(matches!(
        game.complete_promotion(sq("b8"), Piece::Queen),
        Err(MoveError::NoPendingPromotion { .. })
    ));

    let state = game.complete_promotion(sq("a8"), Piece::Knight).unwrap();
    assert_eq!(state.side_to_move(), Color::Black);
    assert!(state.pending_promotion().is_none());
    assert!(state
        .board()
        .piece_at(sq("a8"))
        .is_some_and(|p| p.is(Color::White, Piece::Knight)));
    assert_eq!(state.last_move().and_then(|mv| mv.promotion), Some(Piece::Knight));

    assert!(game.undo());
    assert_eq!(game.state().side_to_move(), Color::White);
    assert!(game
        .state()
        .board()
        .piece_at(sq("a7"))
        .is_some_and(|p| p.is(Color::White, Piece::Pawn)));
    assert!(game.state().board().piece_at(sq("a8")).is_none());
}

#[test]
fn undoing_a_pending_promotion_restores_the_pawn() {
    let mut game = GameManager::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
    let before = game.state().position().clone();
    game.apply_move(sq("a7"), sq("a8"), None).unwrap();
    assert!(game.undo());
    assert!(game.state().pending_promotion().is_none());
    assert_eq!(game.state().position(), &before);
    assert!(game.apply_move(sq("a7"), sq("a8"), Some(Piece::Rook)).is_ok());
}

#[test]
fn failed_promotion_leaves_the_pending_state_intact() {
    // Black is left in check with white to move, so the pawn can take the king.
    let mut game = GameManager::from_fen("1k6/P7/8/8/8/8/8/K7 w - - 0 1").unwrap();
    let before = game.state().position().clone();
    game.apply_move(sq("a7"), sq("b8"), None).unwrap();
    let pending = game.state().position().clone();

    assert!(matches!(
        game.complete_promotion(sq("b8"), Piece::Queen),
        Err(MoveError::Corrupted(_))
    ));
    assert_eq!(game.state().position(), &pending);
    assert_eq!(game.state().side_to_move(), Color::White);
    assert!(game.state().pending_promotion().is_some());
    assert!(game.state().last_move().is_some_and(|mv| mv.is_pending_promotion()));

    assert!(game.undo());
    assert_eq!(game.state().position(), &before);
}

#[test]
fn promotion_with_choice_commits_at_once() {
    let mut game = GameManager::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
    let outcome = game.apply_move(sq("a7"), sq("a8"), Some(Piece::Queen)).unwrap();
    assert!(matches!(outcome, MoveOutcome::Committed(mv) if mv.promotion == Some(Piece::Queen)));
    assert_eq!(game.state().side_to_move(), Color::Black);
    assert_eq!(game.material_difference(), 900);
    let counts = game.piece_counts();
    assert_eq!(counts.get(Color::White, Piece::Queen), 1);
    assert_eq!(counts.get(Color::White, Piece::Pawn), 0);
    assert_eq!(counts.total(Color::Black), 1);
}

#[test]
fn undo_on_empty_history_is_a_no_op() {
    let mut game = GameManager::new();
    assert!(!game.undo());
    assert_eq!(game.state().position(), &Position::new());
}

#[test]
fn history_evicts_oldest_entries() {
    let config = EngineConfig {
        max_history: MIN_MAX_HISTORY,
        ..EngineConfig::default()
    };
    let mut game = GameManager::with_config(config);
    let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8"];
    for _ in 0..3 {
        play(&mut game, &shuffle);
    }
    let stats = game.history_stats();
    assert_eq!(stats.len, 10);
    assert_eq!(stats.evicted, 2);

    for _ in 0..10 {
        assert!(game.undo());
    }
    assert!(!game.undo());

    let mut expected = Position::new();
    expected.make_move_str("g1f3").unwrap();
    expected.make_move_str("g8f6").unwrap();
    assert_eq!(game.state().position(), &expected);
}

#[test]
fn history_cap_is_clamped() {
    let mut game = GameManager::new();
    assert_eq!(game.max_history(), 50);
    game.set_max_history(3);
    assert_eq!(game.max_history(), MIN_MAX_HISTORY);
    game.set_max_history(200);
    assert_eq!(game.max_history(), 200);
}

#[test]
fn off_board_squares_are_rejected() {
    let mut game = GameManager::new();
    let before = game.state().position().clone();

    assert_eq!(
        game.apply_move(sq("e2"), Square(8, 4), None),
        Err(MoveError::OffBoard {
            square: Square(8, 4)
        })
    );
    assert_eq!(
        game.apply_move(Square(1, 9), sq("e4"), None),
        Err(MoveError::OffBoard {
            square: Square(1, 9)
        })
    );
    assert!(game.legal_moves(Square(8, 0)).is_empty());
    assert!(game.legal_moves(Square(usize::MAX, usize::MAX)).is_empty());
    assert_eq!(
        game.complete_promotion(Square(8, 0), Piece::Queen).unwrap_err(),
        MoveError::NoPendingPromotion {
            square: Square(8, 0)
        }
    );

    assert_eq!(game.state().position(), &before);
    assert_eq!(game.state().history_len(), 0);
}

#[test]
fn reset_returns_to_start() {
    let mut game = GameManager::new();
    play(&mut game, &["d2d4", "d7d5"]);
    game.reset();
    assert_eq!(game.state().position(), &Position::new());
    assert_eq!(game.state().history_len(), 0);
    assert!(!game.undo());
}

#[test]
fn from_fen_rejects_bad_input() {
    assert!(GameManager::from_fen("not a fen").is_err());
    assert!(GameManager::from_fen("8/8/8/8/8/8/8/8 w - - 0 1").is_err());
}

#[test]
fn shared_game_serializes_human_and_engine_moves() {
    let shared = SharedGame::new(GameManager::with_config(EngineConfig {
        default_depth: 1,
        ..EngineConfig::default()
    }));

    let mut handles = Vec::new();
    for _ in 0..2 {
        let game = shared.clone();
        handles.push(thread::spawn(move || {
            for _ in 0..3 {
                let human = game.with_game(|g| g.best_move(1));
                if let Some(mv) = human {
                    // Another thread may have moved in between; rejection is fine.
                    let _ = game.apply_move(mv.from, mv.to, mv.promotion);
                }
                let _ = game.play_engine_reply();
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    let state = shared.snapshot();
    assert!(state.history_len() > 0);
    let mut replay = Position::new();
    for mv in state.moves() {
        assert!(replay.is_legal(mv), "{mv} was not legal when played");
        replay.make_move(mv);
    }
    assert_eq!(&replay, state.position());
}

#[test]
fn stop_signalled_before_the_reply_is_honoured_once() {
    let shared = SharedGame::new(GameManager::with_config(EngineConfig {
        default_depth: 1,
        ..EngineConfig::default()
    }));
    let first_legal = shared.snapshot().position().generate_moves().first();

    shared.signal_stop();
    let stopped = shared.play_engine_reply().unwrap();
    assert_eq!(stopped, first_legal);

    let expected = shared.with_game(|g| g.best_move(1));
    let searched = shared.play_engine_reply().unwrap();
    assert_eq!(searched, expected);
    assert_eq!(shared.snapshot().history_len(), 2);
}

#[test]
fn shared_game_plays_advised_reply() {
    let shared = SharedGame::default();
    shared.apply_move(sq("e2"), sq("e4"), None).unwrap();

    let mut advisor = MoveAdvisor::with_rng(SearchSuggester::new(1), StdRng::seed_from_u64(1));
    let advice = shared.play_advised_reply(&mut advisor).unwrap().unwrap();
    assert_eq!(advice.source, AdviceSource::Suggested);
    assert_eq!(advice.mv.color, Color::Black);
    assert_eq!(shared.snapshot().side_to_move(), Color::White);
    assert!(shared.undo());
    assert_eq!(shared.snapshot().side_to_move(), Color::Black);
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip() {
    use chess_rules::game::Difficulty;

    let config = EngineConfig {
        max_history: 20,
        default_depth: 2,
        node_limit: Some(10_000),
    };
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(serde_json::from_str::<EngineConfig>(&json).unwrap(), config);

    let partial: EngineConfig = serde_json::from_str(r#"{"default_depth": 4}"#).unwrap();
    assert_eq!(partial.default_depth, 4);
    assert_eq!(partial.max_history, 50);

    let difficulty: Difficulty = serde_json::from_str("\"expert\"").unwrap();
    assert_eq!(difficulty.depth(), 4);

    let mut game = GameManager::new();
    play(&mut game, &["e2e4", "c7c5"]);
    let json = serde_json::to_string(game.state().position()).unwrap();
    let restored: Position = serde_json::from_str(&json).unwrap();
    assert_eq!(&restored, game.state().position());

    let mv = *game.state().last_move().unwrap();
    let json = serde_json::to_string(&mv).unwrap();
    assert_eq!(serde_json::from_str::<chess_rules::board::Move>(&json).unwrap(), mv);
}
