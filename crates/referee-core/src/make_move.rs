//! Move application via copy-make.

use tracing::trace;

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece_kind::PieceKind;

impl Board {
    /// Apply a move and return the resulting board. Copy-make: `self` is not modified.
    ///
    /// The move is trusted: legality is the caller's business. Captures, en passant
    /// removal, promotion and the castling rook hop are all driven by the move's
    /// flags. Every piece that moves is marked as moved, and the new board records
    /// `mv` as its last move.
    ///
    /// If the source square is empty the board is returned unchanged.
    pub fn apply_move(&self, mv: Move) -> Board {
        let mut b = *self;

        let (Some(kind), Some(us)) = (b.kind_on(mv.from), b.team_on(mv.from)) else {
            return b;
        };

        // Remove the captured piece first. En passant takes a pawn that is not on `to`.
        match mv.en_passant_victim() {
            Some(victim) => {
                if b.pieces_of(PieceKind::Pawn, us.flip()).contains(victim) {
                    trace!(mv = %mv, victim = %victim, "en passant capture");
                    b.remove(victim);
                }
            }
            None => {
                if b.is_opponent(mv.to, us) {
                    b.remove(mv.to);
                }
            }
        }

        let placed = mv.promotion.unwrap_or(kind);
        b.toggle_piece(mv.from, kind, us);
        b.toggle_piece(mv.to, placed, us);
        let mut moved = b.moved().without(mv.from).with(mv.to);

        if let Some(side) = mv.castle {
            let rook_from = side.rook_home(us);
            let rook_to = side.rook_target(us);
            if b.pieces_of(PieceKind::Rook, us).contains(rook_from) {
                trace!(mv = %mv, rook_from = %rook_from, rook_to = %rook_to, "castling rook hop");
                b.toggle_piece(rook_from, PieceKind::Rook, us);
                b.toggle_piece(rook_to, PieceKind::Rook, us);
                moved = moved.without(rook_from).with(rook_to);
            }
        }

        b.set_moved(moved);
        b.set_last_move(Some(mv));
        b
    }
}
