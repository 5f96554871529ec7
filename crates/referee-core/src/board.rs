//! The board snapshot: piece placement, moved flags and the move that produced it.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::chess_move::Move;
use crate::error::BoardError;
use crate::piece::{self, Piece};
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::team::Team;

/// Back-rank order of the standard setup, a-file to h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An immutable position: where every piece stands and which pieces have moved.
///
/// Every later position is derived with [`Board::apply_move`]; the board never knows
/// whose turn it is. That belongs to whoever owns the game.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Bitboard for each piece kind, indexed by [`PieceKind::index()`].
    pieces: [Bitboard; PieceKind::COUNT],
    /// Bitboard for each team, indexed by [`Team::index()`].
    sides: [Bitboard; Team::COUNT],
    /// Union of both sides.
    occupied: Bitboard,
    /// Squares whose occupant has moved at least once.
    moved: Bitboard,
    /// The move that produced this position, if any.
    last_move: Option<Move>,
}

impl Board {
    /// Return a board with no pieces.
    pub const fn empty() -> Board {
        Board {
            pieces: [Bitboard::EMPTY; PieceKind::COUNT],
            sides: [Bitboard::EMPTY; Team::COUNT],
            occupied: Bitboard::EMPTY,
            moved: Bitboard::EMPTY,
            last_move: None,
        }
    }

    /// Return the standard 32-piece starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for team in Team::ALL {
            for (file, kind) in (0u8..).zip(BACK_RANK) {
                board.toggle_piece(Square::at(file, team.back_rank()), kind, team);
                board.toggle_piece(Square::at(file, team.pawn_rank()), PieceKind::Pawn, team);
            }
        }
        board
    }

    /// Return the piece on the given square, if any.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        let kind = self.kind_on(sq)?;
        let team = self.team_on(sq)?;
        Some(Piece {
            kind,
            team,
            square: sq,
            has_moved: self.moved.contains(sq),
        })
    }

    /// Return the piece kind on the given square, if any.
    pub fn kind_on(&self, sq: Square) -> Option<PieceKind> {
        PieceKind::ALL
            .into_iter()
            .find(|&kind| self.pieces[kind.index()].contains(sq))
    }

    /// Return the team of the piece on the given square, if any.
    pub fn team_on(&self, sq: Square) -> Option<Team> {
        Team::ALL
            .into_iter()
            .find(|&team| self.sides[team.index()].contains(sq))
    }

    /// Return `true` if the given square is occupied.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.occupied.contains(sq)
    }

    /// Return `true` if `sq` holds a piece belonging to the opponent of `team`.
    #[inline]
    pub fn is_opponent(&self, sq: Square, team: Team) -> bool {
        self.sides[team.flip().index()].contains(sq)
    }

    /// Return `true` if `sq` holds a piece of `team`.
    #[inline]
    pub fn is_friendly(&self, sq: Square, team: Team) -> bool {
        self.sides[team.index()].contains(sq)
    }

    /// Return the occupied squares bitboard.
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.occupied
    }

    /// Return the bitboard for the given team.
    #[inline]
    pub fn side(&self, team: Team) -> Bitboard {
        self.sides[team.index()]
    }

    /// Return the bitboard for the given piece kind (both teams).
    #[inline]
    pub fn pieces(&self, kind: PieceKind) -> Bitboard {
        self.pieces[kind.index()]
    }

    /// Return the squares holding pieces of `kind` belonging to `team`.
    #[inline]
    pub fn pieces_of(&self, kind: PieceKind, team: Team) -> Bitboard {
        self.pieces[kind.index()] & self.sides[team.index()]
    }

    /// Iterate over the pieces of one team in square order.
    pub fn team_pieces(&self, team: Team) -> impl Iterator<Item = Piece> + '_ {
        self.side(team).filter_map(move |sq| self.piece_at(sq))
    }

    /// Iterate over every piece on the board in square order.
    pub fn all_pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.occupied.filter_map(move |sq| self.piece_at(sq))
    }

    /// Return the square of `team`'s king, or `None` if it has none.
    ///
    /// With more than one king (an invalid board) the lowest square wins.
    pub fn king_square(&self, team: Team) -> Option<Square> {
        self.pieces_of(PieceKind::King, team).lsb()
    }

    /// Return `true` if the piece on `sq` has moved. Empty squares report `false`.
    #[inline]
    pub fn has_moved(&self, sq: Square) -> bool {
        self.moved.contains(sq)
    }

    /// Return the squares whose occupants have moved.
    #[inline]
    pub fn moved(&self) -> Bitboard {
        self.moved
    }

    /// Return the move that produced this position.
    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Return this board with `piece` placed on its square.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::SquareOccupied`] if the square already holds a piece.
    pub fn with_piece(mut self, piece: Piece) -> Result<Board, BoardError> {
        self.place(piece)?;
        Ok(self)
    }

    /// Return this board with whatever stands on `sq` removed.
    pub fn without_piece(mut self, sq: Square) -> Board {
        self.remove(sq);
        self
    }

    /// Place a piece, refusing occupied squares.
    pub(crate) fn place(&mut self, piece: Piece) -> Result<(), BoardError> {
        if self.is_occupied(piece.square) {
            return Err(BoardError::SquareOccupied {
                square: piece.square,
            });
        }
        self.toggle_piece(piece.square, piece.kind, piece.team);
        if piece.has_moved {
            self.moved = self.moved.with(piece.square);
        }
        Ok(())
    }

    /// Remove and return the piece on `sq`.
    pub(crate) fn remove(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.piece_at(sq)?;
        self.toggle_piece(sq, piece.kind, piece.team);
        self.moved = self.moved.without(sq);
        Some(piece)
    }

    /// Toggle a piece into/out of the board arrays via XOR.
    #[inline]
    pub(crate) fn toggle_piece(&mut self, sq: Square, kind: PieceKind, team: Team) {
        let mask = sq.bitboard();
        self.pieces[kind.index()] ^= mask;
        self.sides[team.index()] ^= mask;
        self.occupied = self.sides[Team::White.index()] | self.sides[Team::Black.index()];
    }

    #[inline]
    pub(crate) fn set_moved(&mut self, moved: Bitboard) {
        self.moved = moved & self.occupied;
    }

    #[inline]
    pub(crate) fn set_last_move(&mut self, mv: Option<Move>) {
        self.last_move = mv;
    }

    /// Check the structural rules a reachable position obeys.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TooManyKings`] when a team has more than one king and
    /// [`BoardError::PawnOnBackRank`] when a pawn stands on the first or eighth rank.
    /// A missing king is not an error here; rule queries report it.
    pub fn validate(&self) -> Result<(), BoardError> {
        for team in Team::ALL {
            let count = self.pieces_of(PieceKind::King, team).count();
            if count > 1 {
                return Err(BoardError::TooManyKings { team, count });
            }
        }

        let back_ranks = Bitboard::rank_mask(0) | Bitboard::rank_mask(7);
        if let Some(square) = (self.pieces(PieceKind::Pawn) & back_ranks).lsb() {
            return Err(BoardError::PawnOnBackRank { square });
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }

    fn char_at(&self, sq: Square) -> Option<char> {
        Some(piece::fen_char(self.kind_on(sq)?, self.team_on(sq)?))
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::empty()
    }
}

/// Writes the FEN piece-placement field.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0u8..8).rev() {
            let mut gap = 0;
            for file in 0u8..8 {
                match self.char_at(Square::at(file, rank)) {
                    Some(c) => {
                        if gap > 0 {
                            write!(f, "{gap}")?;
                            gap = 0;
                        }
                        write!(f, "{c}")?;
                    }
                    None => gap += 1,
                }
            }
            if gap > 0 {
                write!(f, "{gap}")?;
            }
            if rank > 0 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for rank in (0u8..8).rev() {
            write!(f, "{}  ", rank + 1)?;
            for file in 0u8..8 {
                let c = board.char_at(Square::at(file, rank)).unwrap_or('.');
                if file < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
