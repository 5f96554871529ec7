//! A piece standing on the board.

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::team::Team;

/// A piece together with where it stands and whether it has moved.
///
/// `has_moved` drives castling legality and is set by every applied move.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub team: Team,
    pub square: Square,
    pub has_moved: bool,
}

impl Piece {
    /// An unmoved piece.
    #[inline]
    pub const fn new(kind: PieceKind, team: Team, square: Square) -> Piece {
        Piece {
            kind,
            team,
            square,
            has_moved: false,
        }
    }

    /// The same piece flagged as having moved.
    #[inline]
    pub const fn moved(self) -> Piece {
        Piece {
            has_moved: true,
            ..self
        }
    }

    /// Parse a FEN character: uppercase is White, lowercase is Black.
    pub fn from_fen_char(c: char) -> Option<(PieceKind, Team)> {
        let kind = PieceKind::from_fen_char(c)?;
        let team = if c.is_ascii_uppercase() {
            Team::White
        } else {
            Team::Black
        };
        Some((kind, team))
    }

    /// The FEN character for this piece's kind and team.
    pub fn fen_char(&self) -> char {
        fen_char(self.kind, self.team)
    }
}

/// FEN letter for a kind/team pair.
pub(crate) fn fen_char(kind: PieceKind, team: Team) -> char {
    match team {
        Team::White => kind.fen_char().to_ascii_uppercase(),
        Team::Black => kind.fen_char(),
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.fen_char(), self.square)
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Piece({}", self)?;
        if self.has_moved {
            write!(f, ", moved")?;
        }
        write!(f, ")")
    }
}
