use std::env;
use std::process::ExitCode;

use chess_rules::board::{best_move, Position, DEFAULT_SEARCH_DEPTH};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: check_mate_status <move1> <move2> ...");
        return ExitCode::FAILURE;
    }

    let mut position = Position::new();
    for text in args.iter().skip(1) {
        if let Err(err) = position.make_move_str(text) {
            eprintln!("{text}: {err}");
            return ExitCode::FAILURE;
        }
    }

    let status = match position.analyze() {
        Ok(status) => status,
        Err(err) => {
            eprintln!("corrupted position: {err}");
            return ExitCode::FAILURE;
        }
    };
    let legal_moves = position.generate_moves();
    println!("fen: {}", position.to_fen());
    println!("side_to_move: {}", status.side_to_move);
    println!("legal_moves: {}", legal_moves.len());
    println!("check: {}", status.in_check);
    println!("checkmate: {}", status.checkmate);
    println!("stalemate: {}", status.stalemate);
    println!("result: {}", status.result());
    for mv in legal_moves.iter() {
        println!("{mv}");
    }
    if let Some(best) = best_move(&position, DEFAULT_SEARCH_DEPTH) {
        println!("best_move: {best}");
    }
    ExitCode::SUCCESS
}
