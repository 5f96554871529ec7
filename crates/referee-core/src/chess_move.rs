//! Move records and castling sides.

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::team::Team;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Both sides, kingside first.
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// File the king starts on when castling is possible.
    pub const KING_HOME_FILE: u8 = 4;

    /// File the rook starts on.
    #[inline]
    pub const fn rook_home_file(self) -> u8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    /// File the king lands on.
    #[inline]
    pub const fn king_target_file(self) -> u8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }

    /// File the rook lands on, immediately beside the king.
    #[inline]
    pub const fn rook_target_file(self) -> u8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }

    /// The king's home square for `team`.
    #[inline]
    pub const fn king_home(team: Team) -> Square {
        Square::at(Self::KING_HOME_FILE, team.back_rank())
    }

    /// The rook's home corner for `team` on this side.
    #[inline]
    pub const fn rook_home(self, team: Team) -> Square {
        Square::at(self.rook_home_file(), team.back_rank())
    }

    /// Where the king ends up.
    #[inline]
    pub const fn king_target(self, team: Team) -> Square {
        Square::at(self.king_target_file(), team.back_rank())
    }

    /// Where the rook ends up.
    #[inline]
    pub const fn rook_target(self, team: Team) -> Square {
        Square::at(self.rook_target_file(), team.back_rank())
    }

    /// Classify a king move as castling: it must stay on its rank and travel two files.
    pub fn from_king_move(from: Square, to: Square) -> Option<CastleSide> {
        match from.delta(to) {
            (2, 0) => Some(CastleSide::KingSide),
            (-2, 0) => Some(CastleSide::QueenSide),
            _ => None,
        }
    }
}

/// A single move, flagged with everything needed to apply and describe it.
///
/// A castling move is expressed by the king's origin and destination; the rook's
/// relocation is implied by [`Move::castle`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: PieceKind,
    pub team: Team,
    pub capture: bool,
    pub castle: Option<CastleSide>,
    pub promotion: Option<PieceKind>,
    pub en_passant: bool,
}

impl Move {
    /// A quiet (non-capturing, non-special) move.
    pub const fn new(from: Square, to: Square, kind: PieceKind, team: Team) -> Move {
        Move {
            from,
            to,
            kind,
            team,
            capture: false,
            castle: None,
            promotion: None,
            en_passant: false,
        }
    }

    /// The same move, marked as a capture.
    pub const fn capturing(self) -> Move {
        Move {
            capture: true,
            ..self
        }
    }

    /// The same move, promoting to `kind`.
    pub const fn promoting(self, kind: PieceKind) -> Move {
        Move {
            promotion: Some(kind),
            ..self
        }
    }

    /// Castling for `team` toward `side`.
    pub const fn castling(team: Team, side: CastleSide) -> Move {
        Move {
            castle: Some(side),
            ..Move::new(
                CastleSide::king_home(team),
                side.king_target(team),
                PieceKind::King,
                team,
            )
        }
    }

    /// An en passant capture landing on `to`, the square the enemy pawn passed over.
    pub const fn en_passant(from: Square, to: Square, team: Team) -> Move {
        Move {
            capture: true,
            en_passant: true,
            ..Move::new(from, to, PieceKind::Pawn, team)
        }
    }

    /// Return `true` for a pawn advancing two ranks.
    #[inline]
    pub fn is_double_step(&self) -> bool {
        self.kind == PieceKind::Pawn && self.from.delta(self.to) == (0, 2 * self.team.forward())
    }

    /// The square a double step passed over, if this is one.
    pub fn passed_square(&self) -> Option<Square> {
        if self.is_double_step() {
            self.from.offset(0, self.team.forward())
        } else {
            None
        }
    }

    /// The square of the pawn removed by an en passant capture.
    pub fn en_passant_victim(&self) -> Option<Square> {
        if self.en_passant {
            self.to.offset(0, -self.team.forward())
        } else {
            None
        }
    }

    /// Coordinate form, e.g. `e2e4` or `e7e8q`.
    pub fn to_coordinate(&self) -> String {
        match self.promotion {
            Some(kind) => format!("{}{}{}", self.from, self.to, kind.fen_char()),
            None => format!("{}{}", self.from, self.to),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_coordinate())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} {:?} {:?}", self, self.team, self.kind)?;
        if self.capture {
            write!(f, " capture")?;
        }
        if let Some(side) = self.castle {
            write!(f, " {side:?}")?;
        }
        if self.en_passant {
            write!(f, " en-passant")?;
        }
        write!(f, ")")
    }
}
