//! Pin detection.

use referee_core::geometry::{between, is_straight, line, unit_step};
use referee_core::{Board, Piece, PieceKind, Square};
use tracing::trace;

/// A pin: the piece shields its own king from `attacker`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinInfo {
    /// The enemy slider holding the pin.
    pub attacker: Piece,
    /// Unit step from the attacker toward the king.
    pub direction: (i8, i8),
}

impl PinInfo {
    /// Return `true` if `square` lies on the pin line, the attacker's own square included.
    pub fn allows(&self, square: Square) -> bool {
        let (df, dr) = self.attacker.square.delta(square);
        let (sf, sr) = self.direction;
        df * sr == dr * sf
    }
}

/// Find the pin on `piece`, if any.
///
/// Scans the enemy sliders on the king's line through `piece`. A slider pins when it
/// moves along that line type and `piece` is the only thing between it and the king.
/// Kings are never pinned, and a team without a king has no pins.
pub fn find_pin(board: &Board, piece: &Piece) -> Option<PinInfo> {
    if piece.kind == PieceKind::King {
        return None;
    }
    let king = board.king_square(piece.team)?;
    let outward = unit_step(king, piece.square)?;
    let straight = is_straight(king, piece.square);
    let enemy = piece.team.flip();

    for attacker_sq in board.side(enemy) & line(king, piece.square) {
        if unit_step(king, attacker_sq) != Some(outward) {
            continue;
        }
        let Some(attacker) = board.piece_at(attacker_sq) else {
            continue;
        };
        let rides_line = if straight {
            attacker.kind.slides_straight()
        } else {
            attacker.kind.slides_diagonally()
        };
        if !rides_line {
            continue;
        }
        if between(king, attacker_sq) & board.occupied() == piece.square.bitboard() {
            trace!(pinned = %piece, attacker = %attacker, "pin found");
            return Some(PinInfo {
                attacker,
                direction: (-outward.0, -outward.1),
            });
        }
    }
    None
}
