//! Destination sets and full move lists built on the evaluator.

use referee_core::{Bitboard, Board, Move, PieceKind, Square, Team};

use crate::legality::{castling_side, en_passant_target, is_legal_move};

/// Every square the piece on `square` may legally move to.
///
/// Scans the whole board through [`is_legal_move`]. An empty square or a piece of
/// the other team yields the empty set.
pub fn legal_destinations(board: &Board, team: Team, square: Square) -> Bitboard {
    let Some(piece) = board.piece_at(square) else {
        return Bitboard::EMPTY;
    };
    if piece.team != team {
        return Bitboard::EMPTY;
    }
    Square::all()
        .filter(|&to| is_legal_move(board, team, piece.kind, square, to))
        .collect()
}

/// Every legal move for `team`, flagged and ready to apply.
///
/// A pawn reaching the last rank contributes one move per promotion piece.
pub fn legal_moves(board: &Board, team: Team) -> Vec<Move> {
    let mut moves = Vec::new();
    for piece in board.team_pieces(team) {
        for to in legal_destinations(board, team, piece.square) {
            let promotes = piece.kind == PieceKind::Pawn && to.rank() == team.promotion_rank();
            if promotes {
                moves.extend(
                    PieceKind::PROMOTIONS
                        .into_iter()
                        .filter_map(|kind| resolve_move(board, piece.square, to, Some(kind))),
                );
            } else if let Some(mv) = resolve_move(board, piece.square, to, None) {
                moves.push(mv);
            }
        }
    }
    moves
}

/// Return `true` if `team` has at least one legal move.
pub fn has_legal_move(board: &Board, team: Team) -> bool {
    board
        .team_pieces(team)
        .any(|piece| legal_destinations(board, team, piece.square).is_nonempty())
}

/// Turn a chosen origin and destination into a flagged [`Move`].
///
/// Works out capture, castling and en passant from the board. `promotion` is kept
/// only when a pawn lands on its last rank. Legality is not checked; `None` means
/// the origin is empty.
pub fn resolve_move(
    board: &Board,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> Option<Move> {
    let piece = board.piece_at(from)?;
    let team = piece.team;

    if let Some(side) = castling_side(&piece, to) {
        return Some(Move::castling(team, side));
    }

    let mut mv = Move::new(from, to, piece.kind, team);
    if board.is_opponent(to, team) {
        mv = mv.capturing();
    }

    if piece.kind == PieceKind::Pawn {
        if !board.is_occupied(to) && en_passant_target(board, from, team) == Some(to) {
            mv = Move::en_passant(from, to, team);
        }
        if to.rank() == team.promotion_rank()
            && let Some(kind) = promotion
        {
            mv = mv.promoting(kind);
        }
    }

    Some(mv)
}
