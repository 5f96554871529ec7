//! The two sides of a game.

use std::fmt;

/// One of the two sides. White moves up the board (toward rank index 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Team {
    White = 0,
    Black = 1,
}

impl Team {
    /// Total number of teams.
    pub const COUNT: usize = 2;

    /// Both teams in index order.
    pub const ALL: [Team; 2] = [Team::White, Team::Black];

    /// Return the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposing team.
    #[inline]
    pub const fn flip(self) -> Team {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }

    /// Rank delta of a single pawn step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Team::White => 1,
            Team::Black => -1,
        }
    }

    /// Rank index of the king and rook home squares.
    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Team::White => 0,
            Team::Black => 7,
        }
    }

    /// Rank index pawns start on, and the only rank a double step is allowed from.
    #[inline]
    pub const fn pawn_rank(self) -> u8 {
        match self {
            Team::White => 1,
            Team::Black => 6,
        }
    }

    /// Rank index on which a pawn of this team promotes.
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        self.flip().back_rank()
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Team::White => "white",
            Team::Black => "black",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::White => write!(f, "w"),
            Team::Black => write!(f, "b"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Team;

    #[test]
    fn flip() {
        assert_eq!(Team::White.flip(), Team::Black);
        assert_eq!(Team::Black.flip(), Team::White);
        assert_eq!(Team::White.flip().flip(), Team::White);
    }

    #[test]
    fn ranks_are_mirrored() {
        for team in Team::ALL {
            assert_eq!(team.back_rank() + team.flip().back_rank(), 7);
            assert_eq!(team.pawn_rank() + team.flip().pawn_rank(), 7);
            assert_eq!(team.promotion_rank(), team.flip().back_rank());
        }
        assert_eq!(Team::White.forward(), -Team::Black.forward());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Team::White), "w");
        assert_eq!(format!("{}", Team::Black), "b");
        assert_eq!(Team::Black.name(), "black");
    }
}
