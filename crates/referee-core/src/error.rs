//! Error types for square construction, board validation and FEN parsing.

use crate::square::Square;
use crate::team::Team;

/// A coordinate pair that does not name a square on the 8×8 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("square ({file}, {rank}) is off the board")]
pub struct InvalidSquare {
    /// The offending file coordinate.
    pub file: i32,
    /// The offending rank coordinate.
    pub rank: i32,
}

/// Errors from building or validating a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A piece was placed on a square that already holds one.
    #[error("square {square} is already occupied")]
    SquareOccupied {
        /// The contested square.
        square: Square,
    },
    /// A team has more than one king.
    #[error("expected at most 1 king for {team:?}, found {count}")]
    TooManyKings {
        /// Which team has the extra king.
        team: Team,
        /// Number of kings found.
        count: u32,
    },
    /// Pawns occupy the first or eighth rank.
    #[error("pawn found on back rank at {square}")]
    PawnOnBackRank {
        /// Where the pawn stands.
        square: Square,
    },
}

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The FEN string has fewer than 4 or more than 6 space-separated fields.
    #[error("expected 4 to 6 FEN fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The piece placement section does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank in the piece placement describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index (0 = rank 8 in FEN, 7 = rank 1).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The active color field is not "w" or "b".
    #[error("invalid active color: \"{found}\"")]
    InvalidColor {
        /// The invalid color string.
        found: String,
    },
    /// An unrecognized character appeared in the castling rights field.
    #[error("invalid castling character: '{character}'")]
    InvalidCastlingChar {
        /// The invalid character.
        character: char,
    },
    /// The en passant field is not "-" or a square on the third or sixth rank.
    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant {
        /// The invalid en passant string.
        found: String,
    },
    /// A move counter is not a valid number.
    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter {
        /// The field name ("halfmove clock" or "fullmove number").
        field: &'static str,
        /// The invalid string.
        found: String,
    },
    /// The parsed placement fails structural validation.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying board validation error.
        #[from]
        source: BoardError,
    },
}

#[cfg(test)]
mod tests {
    use super::{BoardError, FenError, InvalidSquare};
    use crate::square::Square;
    use crate::team::Team;

    #[test]
    fn invalid_square_display() {
        let err = InvalidSquare { file: 8, rank: -1 };
        assert_eq!(format!("{err}"), "square (8, -1) is off the board");
    }

    #[test]
    fn board_error_display() {
        let err = BoardError::SquareOccupied { square: Square::E4 };
        assert_eq!(format!("{err}"), "square e4 is already occupied");
        let err = BoardError::TooManyKings { team: Team::Black, count: 2 };
        assert_eq!(format!("{err}"), "expected at most 1 king for Black, found 2");
    }

    #[test]
    fn fen_error_from_board_error() {
        let fen_err: FenError = BoardError::PawnOnBackRank { square: Square::A1 }.into();
        assert!(matches!(fen_err, FenError::InvalidBoard { .. }));
        assert_eq!(format!("{fen_err}"), "invalid board: pawn found on back rank at a1");
    }
}
