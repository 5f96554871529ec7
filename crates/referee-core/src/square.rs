//! Board squares using Little-Endian Rank-File (LERF) encoding.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::error::InvalidSquare;

/// A square on the board, stored as `rank * 8 + file`.
///
/// Files and ranks are zero-based: file 0 is the a-file, rank 0 is White's back rank.
/// A `Square` is always on the board; raw coordinates are checked by
/// [`Square::from_coords`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

macro_rules! rank_squares {
    (@each $rank:expr; $file:expr;) => {};
    (@each $rank:expr; $file:expr; $name:ident $(, $rest:ident)*) => {
        pub const $name: Square = Square::at($file, $rank);
        rank_squares!(@each $rank; $file + 1; $($rest),*);
    };
    ($rank:expr; $($name:ident),+) => {
        rank_squares!(@each $rank; 0u8; $($name),+);
    };
}

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Build a square from in-range coordinates.
    #[inline]
    pub(crate) const fn at(file: u8, rank: u8) -> Square {
        debug_assert!(file < 8 && rank < 8);
        Square(rank * 8 + file)
    }

    /// Build a square from raw coordinates, rejecting anything off the board.
    pub fn from_coords(file: i32, rank: i32) -> Result<Square, InvalidSquare> {
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Ok(Square::at(file as u8, rank as u8))
        } else {
            Err(InvalidSquare { file, rank })
        }
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Square {
        debug_assert!(index < 64);
        Square(index)
    }

    /// Parse an algebraic square name such as `"e4"`.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        match s.as_bytes() {
            [f @ b'a'..=b'h', r @ b'1'..=b'8'] => Some(Square::at(f - b'a', r - b'1')),
            _ => None,
        }
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// File index, 0 (a) to 7 (h).
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Rank index, 0 (rank 1) to 7 (rank 8).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// The file letter, `'a'..='h'`.
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.file()) as char
    }

    /// The rank digit, `'1'..='8'`.
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'1' + self.rank()) as char
    }

    /// The square `df` files and `dr` ranks away, if it is still on the board.
    #[inline]
    pub const fn offset(self, df: i8, dr: i8) -> Option<Square> {
        let file = self.file() as i8 + df;
        let rank = self.rank() as i8 + dr;
        if file >= 0 && file < 8 && rank >= 0 && rank < 8 {
            Some(Square::at(file as u8, rank as u8))
        } else {
            None
        }
    }

    /// Signed (file, rank) displacement from `self` to `to`.
    #[inline]
    pub const fn delta(self, to: Square) -> (i8, i8) {
        (
            to.file() as i8 - self.file() as i8,
            to.rank() as i8 - self.rank() as i8,
        )
    }

    /// Return a bitboard with only this square set.
    #[inline]
    pub const fn bitboard(self) -> Bitboard {
        Bitboard::new(1u64 << self.0)
    }

    /// Iterate over all 64 squares in index order (a1, b1, ..., h8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }

    rank_squares!(0; A1, B1, C1, D1, E1, F1, G1, H1);
    rank_squares!(1; A2, B2, C2, D2, E2, F2, G2, H2);
    rank_squares!(2; A3, B3, C3, D3, E3, F3, G3, H3);
    rank_squares!(3; A4, B4, C4, D4, E4, F4, G4, H4);
    rank_squares!(4; A5, B5, C5, D5, E5, F5, G5, H5);
    rank_squares!(5; A6, B6, C6, D6, E6, F6, G6, H6);
    rank_squares!(6; A7, B7, C7, D7, E7, F7, G7, H7);
    rank_squares!(7; A8, B8, C8, D8, E8, F8, G8, H8);
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}
