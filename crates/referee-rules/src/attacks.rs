//! Check detection from pure attack geometry.
//!
//! Nothing here consults move legality. A king attacks its neighbours whether or
//! not it could safely step there, and a pawn attacks its forward diagonals whether
//! or not anything stands on them. That keeps "is this square attacked" free of any
//! recursion back into the evaluator.

use referee_core::geometry::{self, KING_OFFSETS, KNIGHT_OFFSETS};
use referee_core::{Bitboard, Board, PieceKind, Square, Team};

use crate::error::RulesError;

/// Return `true` if nothing stands strictly between `from` and `to`.
///
/// Only meaningful for aligned squares; unaligned pairs have nothing between them.
#[inline]
pub fn path_clear(board: &Board, from: Square, to: Square) -> bool {
    (geometry::between(from, to) & board.occupied()).is_empty()
}

/// Return `true` if a `kind` piece of `team` standing on `from` attacks `target`.
///
/// The occupant of `target` is irrelevant.
pub fn piece_attacks(
    board: &Board,
    kind: PieceKind,
    team: Team,
    from: Square,
    target: Square,
) -> bool {
    let (df, dr) = from.delta(target);
    match kind {
        PieceKind::Pawn => dr == team.forward() && df.abs() == 1,
        PieceKind::Knight => matches!((df.abs(), dr.abs()), (1, 2) | (2, 1)),
        PieceKind::King => from != target && df.abs() <= 1 && dr.abs() <= 1,
        PieceKind::Rook => geometry::is_straight(from, target) && path_clear(board, from, target),
        PieceKind::Bishop => geometry::is_diagonal(from, target) && path_clear(board, from, target),
        PieceKind::Queen => {
            (geometry::is_straight(from, target) || geometry::is_diagonal(from, target))
                && path_clear(board, from, target)
        }
    }
}

/// Return the squares of `by_team` pieces attacking `square`.
pub fn attackers_of(board: &Board, square: Square, by_team: Team) -> Bitboard {
    let them = board.side(by_team);
    let mut attackers = Bitboard::EMPTY;

    // Leapers are found by casting their pattern back from the target.
    let knights = them & board.pieces(PieceKind::Knight);
    let kings = them & board.pieces(PieceKind::King);
    attackers |= geometry::leaper_targets(square, &KNIGHT_OFFSETS) & knights;
    attackers |= geometry::leaper_targets(square, &KING_OFFSETS) & kings;
    for df in [-1, 1] {
        if let Some(sq) = square.offset(df, -by_team.forward()) {
            attackers |= sq.bitboard() & them & board.pieces(PieceKind::Pawn);
        }
    }

    let straight = (board.pieces(PieceKind::Rook) | board.pieces(PieceKind::Queen)) & them;
    for from in straight {
        if geometry::is_straight(from, square) && path_clear(board, from, square) {
            attackers = attackers.with(from);
        }
    }

    let diagonal = (board.pieces(PieceKind::Bishop) | board.pieces(PieceKind::Queen)) & them;
    for from in diagonal {
        if geometry::is_diagonal(from, square) && path_clear(board, from, square) {
            attackers = attackers.with(from);
        }
    }

    attackers
}

/// Return `true` if any piece of `by_team` attacks `square`.
#[inline]
pub fn is_square_attacked(board: &Board, square: Square, by_team: Team) -> bool {
    attackers_of(board, square, by_team).is_nonempty()
}

/// Return `true` if `team`'s king is attacked.
///
/// # Errors
///
/// Returns [`RulesError::NoKing`] if `team` has no king.
pub fn is_in_check(board: &Board, team: Team) -> Result<bool, RulesError> {
    let king = board.king_square(team).ok_or(RulesError::NoKing { team })?;
    Ok(is_square_attacked(board, king, team.flip()))
}

/// Return the squares a piece on `from` attacks, ignoring what stands on them.
pub fn attack_set(board: &Board, from: Square) -> Bitboard {
    match (board.kind_on(from), board.team_on(from)) {
        (Some(kind), Some(team)) => Square::all()
            .filter(|&target| piece_attacks(board, kind, team, from, target))
            .collect(),
        _ => Bitboard::EMPTY,
    }
}

/// Return `true` unless `team` has a king that is attacked. A kingless team is never exposed.
pub(crate) fn king_safe(board: &Board, team: Team) -> bool {
    match board.king_square(team) {
        Some(king) => !is_square_attacked(board, king, team.flip()),
        None => true,
    }
}
