use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{CastleSide, Color, Move, Piece, Position, Square};

/// FEN of the standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const CASTLING_CHARS: [(char, Color, CastleSide); 4] = [
    ('K', Color::White, CastleSide::KingSide),
    ('Q', Color::White, CastleSide::QueenSide),
    ('k', Color::Black, CastleSide::KingSide),
    ('q', Color::Black, CastleSide::QueenSide),
];

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// The move counters are optional. The placement must have exactly one
    /// king per side.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut position = Position::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRankCount { found: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    if file > 8 {
                        return Err(FenError::TooManyFiles {
                            rank: rank_idx,
                            files: file,
                        });
                    }
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if file >= 8 {
                    return Err(FenError::TooManyFiles {
                        rank: rank_idx,
                        files: file + 1,
                    });
                }
                position.board.place(Square(7 - rank_idx, file), color, piece);
                file += 1;
            }
            if file < 8 {
                return Err(FenError::TooFewFiles {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        position.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        for c in parts[2].chars() {
            if c == '-' {
                continue;
            }
            let (_, color, side) = CASTLING_CHARS
                .iter()
                .find(|(ch, _, _)| *ch == c)
                .ok_or(FenError::InvalidCastling { char: c })?;
            position.castling_rights.set(*color, *side);
        }

        position.en_passant_target = match parts[3] {
            "-" => None,
            text => Some(text.parse::<Square>().map_err(|_| FenError::InvalidEnPassant {
                found: text.to_string(),
            })?),
        };

        if let Some(clock) = parts.get(4) {
            position.halfmove_clock = clock.parse().unwrap_or(0);
        }
        if let Some(number) = parts.get(5) {
            position.fullmove_number = number.parse().unwrap_or(1).max(1);
        }

        position.board.validate().map_err(FenError::InvalidKings)?;
        Ok(position)
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    fn placement_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some(p) = self.board.piece_at(Square(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(p.piece.to_fen_char(p.color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        rows.join("/")
    }

    fn side_fen(&self) -> &'static str {
        match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        }
    }

    /// Convert the position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut castling: String = CASTLING_CHARS
            .iter()
            .filter(|(_, color, side)| self.castling_rights.has(*color, *side))
            .map(|(c, _, _)| *c)
            .collect();
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            self.placement_fen(),
            self.side_fen(),
            castling,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Lossy FEN for collaborators that only read placement and side to move.
    ///
    /// Castling is always reported as `KQkq`, en passant as `-`, and the
    /// counters as `0 1`, whatever the real state is.
    #[must_use]
    pub fn to_simplified_fen(&self) -> String {
        format!("{} {} KQkq - 0 1", self.placement_fen(), self.side_fen())
    }

    /// Parse a move in coordinate notation against the legal moves of this
    /// position.
    ///
    /// Accepts `e2e4`, `e7e8q` and the castling forms `O-O` / `O-O-O` (or
    /// with zeros). Trailing `+`, `#`, `!` and `?` annotations are ignored. A
    /// promotion without a piece letter resolves to a queen.
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveParseError> {
        let trimmed = text.trim().trim_end_matches(['+', '#', '!', '?']);
        let illegal = || MoveParseError::IllegalMove {
            notation: text.to_string(),
        };

        let (from, to, promotion) = match trimmed {
            "O-O" | "0-0" | "O-O-O" | "0-0-0" => {
                let side = if trimmed.len() == 3 {
                    CastleSide::KingSide
                } else {
                    CastleSide::QueenSide
                };
                let rank = self.side_to_move.back_rank();
                (Square(rank, 4), Square(rank, side.king_target_file()), None)
            }
            _ => parse_coordinates(trimmed)?,
        };

        let legal = self.generate_moves();
        let mv = legal.find(from, to, promotion).ok_or_else(illegal)?;
        Ok(match promotion {
            Some(piece) => mv.with_promotion(piece),
            None => mv,
        })
    }

    /// Parse and play a coordinate move in one call.
    pub fn make_move_str(&mut self, text: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(text)?;
        self.make_move(&mv);
        Ok(mv)
    }
}

fn parse_coordinates(text: &str) -> Result<(Square, Square, Option<Piece>), MoveParseError> {
    let len = text.chars().count();
    if !(4..=5).contains(&len) || !text.is_ascii() {
        return Err(MoveParseError::InvalidLength { len });
    }
    let invalid_square = || MoveParseError::InvalidSquare {
        notation: text.to_string(),
    };
    let from: Square = text[0..2].parse().map_err(|_| invalid_square())?;
    let to: Square = text[2..4].parse().map_err(|_| invalid_square())?;

    let promotion = match text[4..].chars().next() {
        None => None,
        Some(c) => match Piece::from_char(c) {
            Some(piece) if piece.is_promotion_choice() => Some(piece),
            _ => return Err(MoveParseError::InvalidPromotion { char: c }),
        },
    };
    Ok((from, to, promotion))
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_fen(s)
    }
}
