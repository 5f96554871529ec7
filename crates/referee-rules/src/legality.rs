//! The move legality evaluator.
//!
//! A move is legal when the piece rule for its kind admits it, a pin does not forbid
//! it, and the mover's king is not attacked once it has been played. The last test
//! is done by applying the move to a copy of the board and asking the attack
//! detector, so legality never recurses into itself.

use referee_core::geometry::{between, is_diagonal, is_straight};
use referee_core::{Board, CastleSide, Move, Piece, PieceKind, Square, Team};

use crate::attacks::{king_safe, path_clear};
use crate::castling::can_castle;
use crate::error::RulesError;
use crate::moves::resolve_move;
use crate::pins::find_pin;

/// Return `true` if `team` may move its `kind` piece from `from` to `to`.
///
/// Returns `false` for an empty origin, a piece of another team or kind, a null move
/// or a friendly destination. A team without a king has no self-check constraint.
pub fn is_legal_move(board: &Board, team: Team, kind: PieceKind, from: Square, to: Square) -> bool {
    let Some(piece) = board.piece_at(from) else {
        return false;
    };
    if piece.team != team || piece.kind != kind || from == to || board.is_friendly(to, team) {
        return false;
    }

    if let Some(side) = castling_side(&piece, to) {
        return can_castle(board, team, side);
    }

    if !piece_rule(board, &piece, to) {
        return false;
    }

    if let Some(pin) = find_pin(board, &piece)
        && !pin.allows(to)
    {
        return false;
    }

    resolve_move(board, from, to, None).is_some_and(|mv| leaves_king_safe(board, mv))
}

/// Coordinate-level form of [`is_legal_move`].
///
/// # Errors
///
/// Returns [`RulesError::InvalidSquare`] if either coordinate pair is off the board.
pub fn is_legal_move_at(
    board: &Board,
    team: Team,
    kind: PieceKind,
    from: (i32, i32),
    to: (i32, i32),
) -> Result<bool, RulesError> {
    let from = Square::from_coords(from.0, from.1)?;
    let to = Square::from_coords(to.0, to.1)?;
    Ok(is_legal_move(board, team, kind, from, to))
}

/// Simulate `mv` and report whether its team's king survives it.
pub(crate) fn leaves_king_safe(board: &Board, mv: Move) -> bool {
    king_safe(&board.apply_move(mv), mv.team)
}

/// A king on its home square moving two files along the back rank is a castling attempt.
pub(crate) fn castling_side(piece: &Piece, to: Square) -> Option<CastleSide> {
    if piece.kind != PieceKind::King || piece.square != CastleSide::king_home(piece.team) {
        return None;
    }
    CastleSide::from_king_move(piece.square, to)
}

/// The square `team`'s pawn on `from` may capture en passant onto, if any.
///
/// Only the move that produced `board` can be taken en passant: an enemy pawn's
/// double step that landed beside `from` on the same rank.
pub fn en_passant_target(board: &Board, from: Square, team: Team) -> Option<Square> {
    let last = board.last_move()?;
    if last.team != team.flip()
        || !last.is_double_step()
        || last.to.rank() != from.rank()
        || from.delta(last.to).0.abs() != 1
        || !board.pieces_of(PieceKind::Pawn, last.team).contains(last.to)
    {
        return None;
    }
    last.passed_square()
}

/// The movement rule for the piece's kind, before pins and king safety.
///
/// The destination is known not to hold a friendly piece.
fn piece_rule(board: &Board, piece: &Piece, to: Square) -> bool {
    let from = piece.square;
    let (df, dr) = from.delta(to);
    match piece.kind {
        PieceKind::Pawn => pawn_rule(board, piece, to),
        PieceKind::Knight => matches!((df.abs(), dr.abs()), (1, 2) | (2, 1)),
        PieceKind::Bishop => is_diagonal(from, to) && path_clear(board, from, to),
        PieceKind::Rook => is_straight(from, to) && path_clear(board, from, to),
        PieceKind::Queen => {
            (is_straight(from, to) || is_diagonal(from, to)) && path_clear(board, from, to)
        }
        PieceKind::King => df.abs() <= 1 && dr.abs() <= 1,
    }
}

fn pawn_rule(board: &Board, piece: &Piece, to: Square) -> bool {
    let forward = piece.team.forward();
    match piece.square.delta(to) {
        (0, dr) if dr == forward => !board.is_occupied(to),
        (0, dr) if dr == 2 * forward => {
            piece.square.rank() == piece.team.pawn_rank()
                && ((between(piece.square, to) | to.bitboard()) & board.occupied()).is_empty()
        }
        (-1 | 1, dr) if dr == forward => {
            board.is_opponent(to, piece.team)
                || en_passant_target(board, piece.square, piece.team) == Some(to)
        }
        _ => false,
    }
}
