//! Castling preconditions.

use referee_core::geometry::between;
use referee_core::{Board, CastleSide, PieceKind, Square, Team};
use tracing::trace;

use crate::attacks::is_square_attacked;

/// Return `true` if `team` may castle toward `side` on this board.
///
/// King and rook must both be unmoved and on their home squares, the squares
/// between them empty, the king not in check, and no square the king crosses or
/// lands on attacked.
pub fn can_castle(board: &Board, team: Team, side: CastleSide) -> bool {
    let king_home = CastleSide::king_home(team);
    let rook_home = side.rook_home(team);

    let home = |sq: Square, kind: PieceKind| {
        board
            .piece_at(sq)
            .is_some_and(|p| p.kind == kind && p.team == team && !p.has_moved)
    };
    if !home(king_home, PieceKind::King) || !home(rook_home, PieceKind::Rook) {
        trace!(?team, ?side, "castling pieces missing or moved");
        return false;
    }

    if (between(king_home, rook_home) & board.occupied()).is_nonempty() {
        trace!(?team, ?side, "castling path blocked");
        return false;
    }

    let enemy = team.flip();
    let king_target = side.king_target(team);
    let king_path = between(king_home, king_target).with(king_target).with(king_home);
    for sq in king_path {
        if is_square_attacked(board, sq, enemy) {
            trace!(?team, ?side, square = %sq, "castling through attack");
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use referee_core::{FenPosition, Move};

    fn board(fen: &str) -> Board {
        fen.parse::<FenPosition>().unwrap().board
    }

    #[test]
    fn both_sides_open() {
        let b = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        for team in Team::ALL {
            for side in CastleSide::ALL {
                assert!(can_castle(&b, team, side), "{team:?} {side:?}");
            }
        }
    }

    #[test]
    fn starting_position_is_blocked() {
        let b = Board::starting_position();
        assert!(!can_castle(&b, Team::White, CastleSide::KingSide));
        assert!(!can_castle(&b, Team::Black, CastleSide::QueenSide));
    }

    #[test]
    fn moved_rook_forbids_castling_even_back_home() {
        let b = board("4k3/8/8/8/8/8/8/4K2R w K - 0 1");
        assert!(can_castle(&b, Team::White, CastleSide::KingSide));

        let b = b.apply_move(Move::new(Square::H1, Square::H2, PieceKind::Rook, Team::White));
        let b = b.apply_move(Move::new(Square::E8, Square::D8, PieceKind::King, Team::Black));
        let b = b.apply_move(Move::new(Square::H2, Square::H1, PieceKind::Rook, Team::White));
        assert_eq!(b.kind_on(Square::H1), Some(PieceKind::Rook));
        assert!(!can_castle(&b, Team::White, CastleSide::KingSide));
    }

    #[test]
    fn moved_king_forbids_castling() {
        let b = board("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
        assert!(!can_castle(&b, Team::White, CastleSide::QueenSide));
    }

    #[test]
    fn not_out_of_check() {
        let b = board("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        assert!(!can_castle(&b, Team::White, CastleSide::KingSide));
        assert!(!can_castle(&b, Team::White, CastleSide::QueenSide));
    }

    #[test]
    fn not_through_attacked_square() {
        // The bishop on a6 covers f1.
        let b = board("4k3/8/b7/8/8/8/8/R3K2R w KQ - 0 1");
        assert!(!can_castle(&b, Team::White, CastleSide::KingSide));
        assert!(can_castle(&b, Team::White, CastleSide::QueenSide));
    }

    #[test]
    fn queenside_b_file_may_be_attacked() {
        // b1 must be empty but may be attacked; c1 and d1 may not.
        let b = board("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
        assert!(can_castle(&b, Team::White, CastleSide::QueenSide));

        let b = board("2r1k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
        assert!(!can_castle(&b, Team::White, CastleSide::QueenSide));
    }

    #[test]
    fn path_must_be_empty() {
        let b = board("4k3/8/8/8/8/8/8/RN2K3 w Q - 0 1");
        assert!(!can_castle(&b, Team::White, CastleSide::QueenSide));
    }
}
