//! FEN parsing and serialization.
//!
//! A board carries no castling rights or en passant square of its own. Castling
//! rights are read into the moved flags of kings and rooks, and the en passant
//! square becomes the double step that produced it.

use std::fmt;
use std::str::FromStr;

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::chess_move::{CastleSide, Move};
use crate::error::FenError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::team::Team;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A board plus the game-level fields FEN records alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenPosition {
    pub board: Board,
    /// The team to move.
    pub turn: Team,
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl FenPosition {
    /// The standard starting position, White to move.
    pub fn starting() -> FenPosition {
        FenPosition {
            board: Board::starting_position(),
            turn: Team::White,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

fn parse_placement(field: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut board = Board::empty();
    // FEN ranks go from 8 down to 1.
    for (rank_index, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_index as u8;
        let mut file: usize = 0;

        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                if !(1..=8).contains(&digit) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                file += digit as usize;
            } else {
                let (kind, team) =
                    Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
                if file >= 8 {
                    return Err(FenError::BadRankLength {
                        rank_index,
                        length: file + 1,
                    });
                }
                board.place(Piece::new(kind, team, Square::at(file as u8, rank)))?;
                file += 1;
            }
        }

        if file != 8 {
            return Err(FenError::BadRankLength {
                rank_index,
                length: file,
            });
        }
    }
    Ok(board)
}

fn parse_castling(field: &str) -> Result<Vec<(Team, CastleSide)>, FenError> {
    if field == "-" {
        return Ok(Vec::new());
    }
    field
        .chars()
        .map(|c| match c {
            'K' => Ok((Team::White, CastleSide::KingSide)),
            'Q' => Ok((Team::White, CastleSide::QueenSide)),
            'k' => Ok((Team::Black, CastleSide::KingSide)),
            'q' => Ok((Team::Black, CastleSide::QueenSide)),
            other => Err(FenError::InvalidCastlingChar { character: other }),
        })
        .collect()
}

/// Kings and rooks count as moved unless a castling right vouches for them.
/// Pawns off their starting rank have necessarily moved.
fn moved_flags(board: &Board, rights: &[(Team, CastleSide)]) -> Bitboard {
    let mut moved = board.pieces(PieceKind::King) | board.pieces(PieceKind::Rook);
    for &(team, side) in rights {
        let king = CastleSide::king_home(team);
        let rook = side.rook_home(team);
        if board.pieces_of(PieceKind::King, team).contains(king)
            && board.pieces_of(PieceKind::Rook, team).contains(rook)
        {
            moved = moved.without(king).without(rook);
        }
    }
    for team in Team::ALL {
        moved |= board.pieces_of(PieceKind::Pawn, team) & !Bitboard::rank_mask(team.pawn_rank());
    }
    moved
}

/// Turn an en passant target into the double step that must have just been played.
fn parse_en_passant(field: &str, board: &Board, turn: Team) -> Result<Option<Move>, FenError> {
    if field == "-" {
        return Ok(None);
    }
    let invalid = || FenError::InvalidEnPassant {
        found: field.to_string(),
    };
    let target = Square::from_algebraic(field).ok_or_else(invalid)?;

    let mover = turn.flip();
    let from = Square::at(target.file(), mover.pawn_rank());
    let step = Move::new(
        from,
        from.offset(0, 2 * mover.forward()).ok_or_else(invalid)?,
        PieceKind::Pawn,
        mover,
    );
    if step.passed_square() != Some(target)
        || !board.pieces_of(PieceKind::Pawn, mover).contains(step.to)
    {
        return Err(invalid());
    }
    Ok(Some(step))
}

fn parse_counter(field: Option<&str>, name: &'static str, default: u16) -> Result<u16, FenError> {
    match field {
        None => Ok(default),
        Some(text) => text.parse::<u16>().map_err(|_| FenError::InvalidMoveCounter {
            field: name,
            found: text.to_string(),
        }),
    }
}

impl FromStr for FenPosition {
    type Err = FenError;

    /// Parse a FEN record. The two move counters are optional.
    fn from_str(fen: &str) -> Result<FenPosition, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if !(4..=6).contains(&fields.len()) {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let mut board = parse_placement(fields[0])?;

        let turn = match fields[1] {
            "w" => Team::White,
            "b" => Team::Black,
            other => {
                return Err(FenError::InvalidColor {
                    found: other.to_string(),
                });
            }
        };

        let rights = parse_castling(fields[2])?;
        let mut moved = moved_flags(&board, &rights);

        let last_move = parse_en_passant(fields[3], &board, turn)?;
        if let Some(step) = last_move {
            moved = moved.with(step.to);
        }
        board.set_moved(moved);
        board.set_last_move(last_move);

        let halfmove_clock = parse_counter(fields.get(4).copied(), "halfmove clock", 0)?;
        let fullmove_number = parse_counter(fields.get(5).copied(), "fullmove number", 1)?;

        board.validate()?;
        Ok(FenPosition {
            board,
            turn,
            halfmove_clock,
            fullmove_number,
        })
    }
}

/// The castling field implied by the moved flags of kings and rooks.
fn castling_field(board: &Board) -> String {
    let mut out = String::new();
    for team in Team::ALL {
        for side in CastleSide::ALL {
            let king = board.piece_at(CastleSide::king_home(team));
            let rook = board.piece_at(side.rook_home(team));
            let unmoved = |piece: Option<Piece>, kind: PieceKind| {
                piece.is_some_and(|p| p.kind == kind && p.team == team && !p.has_moved)
            };
            let available = unmoved(king, PieceKind::King) && unmoved(rook, PieceKind::Rook);
            if available {
                let c = match side {
                    CastleSide::KingSide => 'k',
                    CastleSide::QueenSide => 'q',
                };
                out.push(match team {
                    Team::White => c.to_ascii_uppercase(),
                    Team::Black => c,
                });
            }
        }
    }
    if out.is_empty() {
        out.push('-');
    }
    out
}

impl fmt::Display for FenPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.board, self.turn, castling_field(&self.board))?;

        let en_passant = self
            .board
            .last_move()
            .filter(|mv| mv.team != self.turn)
            .and_then(|mv| mv.passed_square());
        match en_passant {
            Some(sq) => write!(f, " {sq}")?,
            None => write!(f, " -")?,
        }

        write!(f, " {} {}", self.halfmove_clock, self.fullmove_number)
    }
}

#[cfg(test)]
mod tests {
    use super::{FenPosition, STARTING_FEN};
    use crate::board::Board;
    use crate::error::{BoardError, FenError};
    use crate::piece_kind::PieceKind;
    use crate::square::Square;
    use crate::team::Team;

    fn roundtrip(fen: &str) {
        let position: FenPosition = fen.parse().unwrap();
        let output = format!("{position}");
        assert_eq!(output, fen, "FEN roundtrip failed");
        let again: FenPosition = output.parse().unwrap();
        assert_eq!(position, again);
    }

    #[test]
    fn roundtrip_starting() {
        roundtrip(STARTING_FEN);
    }

    #[test]
    fn roundtrip_sicilian() {
        roundtrip("rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2");
    }

    #[test]
    fn roundtrip_kiwipete() {
        roundtrip("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    }

    #[test]
    fn roundtrip_endgame() {
        roundtrip("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1");
    }

    #[test]
    fn roundtrip_partial_rights() {
        roundtrip("r3k2r/8/8/8/8/8/8/R3K2R b Kq - 3 17");
    }

    #[test]
    fn starting_position_matches_fen() {
        let position: FenPosition = STARTING_FEN.parse().unwrap();
        assert_eq!(position.board, Board::starting_position());
        assert_eq!(position, FenPosition::starting());
    }

    #[test]
    fn castling_rights_become_moved_flags() {
        let position: FenPosition = "r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1".parse().unwrap();
        let board = position.board;
        assert!(!board.has_moved(Square::E1));
        assert!(!board.has_moved(Square::H1));
        assert!(board.has_moved(Square::A1));
        assert!(!board.has_moved(Square::E8));
        assert!(!board.has_moved(Square::A8));
        assert!(board.has_moved(Square::H8));
    }

    #[test]
    fn en_passant_becomes_last_move() {
        let position: FenPosition = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
            .parse()
            .unwrap();
        let mv = position.board.last_move().unwrap();
        assert_eq!((mv.from, mv.to), (Square::E2, Square::E4));
        assert_eq!(mv.team, Team::White);
        assert_eq!(mv.kind, PieceKind::Pawn);
        assert_eq!(position.turn, Team::Black);
    }

    #[test]
    fn counters_are_optional() {
        let position: FenPosition = "8/8/8/8/8/8/8/K6k w - -".parse().unwrap();
        assert_eq!(position.halfmove_clock, 0);
        assert_eq!(position.fullmove_number, 1);
        assert_eq!(format!("{position}"), "8/8/8/8/8/8/8/K6k w - - 0 1");
    }

    #[test]
    fn error_wrong_field_count() {
        assert_eq!(
            "e4 e5".parse::<FenPosition>(),
            Err(FenError::WrongFieldCount { found: 2 })
        );
    }

    #[test]
    fn error_invalid_piece_char() {
        let result = "rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR w KQkq - 0 1"
            .parse::<FenPosition>();
        assert_eq!(result, Err(FenError::InvalidPieceChar { character: 'X' }));
    }

    #[test]
    fn error_bad_rank_length() {
        let result = "rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
            .parse::<FenPosition>();
        assert!(matches!(result, Err(FenError::BadRankLength { rank_index: 1, .. })));
    }

    #[test]
    fn error_invalid_color() {
        let result = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1"
            .parse::<FenPosition>();
        assert!(matches!(result, Err(FenError::InvalidColor { .. })));
    }

    #[test]
    fn error_invalid_castling() {
        let result = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq - 0 1"
            .parse::<FenPosition>();
        assert_eq!(result, Err(FenError::InvalidCastlingChar { character: 'X' }));
    }

    #[test]
    fn error_invalid_en_passant() {
        let bad_square = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1"
            .parse::<FenPosition>();
        assert!(matches!(bad_square, Err(FenError::InvalidEnPassant { .. })));

        // No black pawn stands on e5 to have made the double step.
        let no_pawn = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e6 0 1"
            .parse::<FenPosition>();
        assert!(matches!(no_pawn, Err(FenError::InvalidEnPassant { .. })));
    }

    #[test]
    fn error_invalid_move_counter() {
        let result = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - abc 1"
            .parse::<FenPosition>();
        assert!(matches!(
            result,
            Err(FenError::InvalidMoveCounter { field: "halfmove clock", .. })
        ));
    }

    #[test]
    fn error_two_kings() {
        let result = "8/8/8/8/8/8/8/K6K w - - 0 1"
            .parse::<FenPosition>();
        assert_eq!(
            result,
            Err(FenError::InvalidBoard {
                source: BoardError::TooManyKings { team: Team::White, count: 2 }
            })
        );
    }
}
