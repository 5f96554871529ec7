//! Checkmate and stalemate detection.

use referee_core::geometry::{KING_OFFSETS, between, leaper_targets};
use referee_core::{Board, PieceKind, Team};
use tracing::debug;

use crate::attacks::{attackers_of, is_in_check};
use crate::error::RulesError;
use crate::legality::is_legal_move;
use crate::moves::has_legal_move;

/// Return `true` if `team` is checkmated.
///
/// The king's own escapes are tried first. With a single checker, any other piece
/// that can capture it (en passant included) or step onto the line between it and
/// the king saves the game. Against a double check only a king move helps.
///
/// # Errors
///
/// Returns [`RulesError::NoKing`] if `team` has no king.
pub fn is_checkmate(board: &Board, team: Team) -> Result<bool, RulesError> {
    let king = board.king_square(team).ok_or(RulesError::NoKing { team })?;
    let checkers = attackers_of(board, king, team.flip());
    if checkers.is_empty() {
        return Ok(false);
    }

    let escapes = leaper_targets(king, &KING_OFFSETS)
        .any(|to| is_legal_move(board, team, PieceKind::King, king, to));
    if escapes {
        return Ok(false);
    }

    let Some(checker) = checkers.lsb() else {
        return Ok(false);
    };
    if checkers.count() > 1 {
        debug!(?team, checkers = checkers.count(), "double check with no king escape");
        return Ok(true);
    }

    let mut answers = between(checker, king).with(checker);
    // A checking pawn that just double-stepped can also be taken on the square it passed.
    if let Some(last) = board.last_move()
        && last.to == checker
        && let Some(passed) = last.passed_square()
    {
        answers = answers.with(passed);
    }

    for from in board.side(team).without(king) {
        let Some(kind) = board.kind_on(from) else {
            continue;
        };
        for to in answers {
            if is_legal_move(board, team, kind, from, to) {
                return Ok(false);
            }
        }
    }

    debug!(?team, checker = %checker, "checkmate");
    Ok(true)
}

/// Return `true` if `team` is not in check but has no legal move.
///
/// # Errors
///
/// Returns [`RulesError::NoKing`] if `team` has no king.
pub fn is_stalemate(board: &Board, team: Team) -> Result<bool, RulesError> {
    if is_in_check(board, team)? {
        return Ok(false);
    }
    Ok(!has_legal_move(board, team))
}
