//! Board geometry: unit steps, path-clearance rays and leaper offsets.
//!
//! The ray tables are built at compile time by walking unit steps between every
//! pair of aligned squares.

use crate::bitboard::Bitboard;
use crate::square::Square;

/// Knight jump offsets as (file, rank) deltas.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2), (2, 1), (2, -1), (1, -2),
    (-1, -2), (-2, -1), (-2, 1), (-1, 2),
];

/// King step offsets as (file, rank) deltas.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

const fn signum(x: i8) -> i8 {
    if x > 0 {
        1
    } else if x < 0 {
        -1
    } else {
        0
    }
}

const fn unit_step_raw(df: i8, dr: i8) -> Option<(i8, i8)> {
    let adf = if df < 0 { -df } else { df };
    let adr = if dr < 0 { -dr } else { dr };
    if (df == 0 && dr == 0) || !(df == 0 || dr == 0 || adf == adr) {
        None
    } else {
        Some((signum(df), signum(dr)))
    }
}

/// Unit step `(sign(dx), sign(dy))` from `from` toward `to`, or `None` when the two
/// squares are equal or do not share a file, rank or diagonal.
#[inline]
pub const fn unit_step(from: Square, to: Square) -> Option<(i8, i8)> {
    let (df, dr) = from.delta(to);
    unit_step_raw(df, dr)
}

/// Return `true` if the squares share a file or rank.
#[inline]
pub const fn is_straight(from: Square, to: Square) -> bool {
    from.index() != to.index() && (from.file() == to.file() || from.rank() == to.rank())
}

/// Return `true` if the squares share a diagonal.
#[inline]
pub const fn is_diagonal(from: Square, to: Square) -> bool {
    let (df, dr) = from.delta(to);
    df != 0 && (df == dr || df == -dr)
}

const fn compute_between() -> [[Bitboard; 64]; 64] {
    let mut table = [[Bitboard::EMPTY; 64]; 64];
    let mut s1 = 0usize;
    while s1 < 64 {
        let mut s2 = 0usize;
        while s2 < 64 {
            let f1 = (s1 % 8) as i8;
            let r1 = (s1 / 8) as i8;
            let f2 = (s2 % 8) as i8;
            let r2 = (s2 / 8) as i8;
            if let Some((sf, sr)) = unit_step_raw(f2 - f1, r2 - r1) {
                let mut bits = 0u64;
                let mut f = f1 + sf;
                let mut r = r1 + sr;
                while f != f2 || r != r2 {
                    bits |= 1u64 << (r as usize * 8 + f as usize);
                    f += sf;
                    r += sr;
                }
                table[s1][s2] = Bitboard::new(bits);
            }
            s2 += 1;
        }
        s1 += 1;
    }
    table
}

const fn compute_line() -> [[Bitboard; 64]; 64] {
    let mut table = [[Bitboard::EMPTY; 64]; 64];
    let mut s1 = 0usize;
    while s1 < 64 {
        let mut s2 = 0usize;
        while s2 < 64 {
            let f1 = (s1 % 8) as i8;
            let r1 = (s1 / 8) as i8;
            if let Some((sf, sr)) = unit_step_raw((s2 % 8) as i8 - f1, (s2 / 8) as i8 - r1) {
                let mut bits = 1u64 << s1;
                // Extend from s1 in both directions until the board edge.
                let mut dir = 0;
                while dir < 2 {
                    let (df, dr) = if dir == 0 { (sf, sr) } else { (-sf, -sr) };
                    let mut f = f1 + df;
                    let mut r = r1 + dr;
                    while f >= 0 && f < 8 && r >= 0 && r < 8 {
                        bits |= 1u64 << (r as usize * 8 + f as usize);
                        f += df;
                        r += dr;
                    }
                    dir += 1;
                }
                table[s1][s2] = Bitboard::new(bits);
            }
            s2 += 1;
        }
        s1 += 1;
    }
    table
}

static BETWEEN: [[Bitboard; 64]; 64] = compute_between();
static LINE: [[Bitboard; 64]; 64] = compute_line();

/// Squares strictly between `a` and `b` along their shared line.
///
/// Empty when the squares are adjacent, equal, or not aligned.
#[inline]
pub fn between(a: Square, b: Square) -> Bitboard {
    BETWEEN[a.index()][b.index()]
}

/// Every square on the full line through `a` and `b`, edge to edge.
///
/// Empty when the squares are equal or not aligned.
#[inline]
pub fn line(a: Square, b: Square) -> Bitboard {
    LINE[a.index()][b.index()]
}

/// Squares reachable from `sq` by applying each offset once.
pub fn leaper_targets(sq: Square, offsets: &[(i8, i8)]) -> Bitboard {
    offsets
        .iter()
        .filter_map(|&(df, dr)| sq.offset(df, dr))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_steps() {
        assert_eq!(unit_step(Square::A1, Square::A8), Some((0, 1)));
        assert_eq!(unit_step(Square::H8, Square::A1), Some((-1, -1)));
        assert_eq!(unit_step(Square::E4, Square::B4), Some((-1, 0)));
        assert_eq!(unit_step(Square::G1, Square::F3), None);
        assert_eq!(unit_step(Square::E4, Square::E4), None);
    }

    #[test]
    fn between_walks_exclusive() {
        let bb = between(Square::A1, Square::D4);
        assert_eq!(bb.collect::<Vec<_>>(), vec![Square::B2, Square::C3]);
        assert_eq!(between(Square::E1, Square::H1).count(), 2);
        assert!(between(Square::E1, Square::E2).is_empty());
        assert!(between(Square::G1, Square::F3).is_empty());
        assert_eq!(between(Square::A1, Square::D4), between(Square::D4, Square::A1));
    }

    #[test]
    fn line_spans_board() {
        let diag = line(Square::C3, Square::E5);
        assert_eq!(diag.count(), 8);
        assert!(diag.contains(Square::A1) && diag.contains(Square::H8));
        assert_eq!(line(Square::E4, Square::E6).count(), 8);
        assert!(line(Square::B1, Square::C3).is_empty());
    }

    #[test]
    fn alignment_predicates() {
        assert!(is_straight(Square::A1, Square::A5));
        assert!(!is_straight(Square::A1, Square::A1));
        assert!(is_diagonal(Square::C1, Square::H6));
        assert!(!is_diagonal(Square::C1, Square::C6));
    }

    #[test]
    fn leaper_counts() {
        assert_eq!(leaper_targets(Square::E4, &KNIGHT_OFFSETS).count(), 8);
        assert_eq!(leaper_targets(Square::A1, &KNIGHT_OFFSETS).count(), 2);
        assert_eq!(leaper_targets(Square::E4, &KING_OFFSETS).count(), 8);
        assert_eq!(leaper_targets(Square::H8, &KING_OFFSETS).count(), 3);
    }
}
