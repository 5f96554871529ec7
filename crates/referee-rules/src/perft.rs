//! Perft: leaf-node counts of the legal move tree.

use referee_core::{Board, Team};

use crate::moves::legal_moves;

/// Count the leaf nodes `depth` plies below `board` with `team` to move.
///
/// Depth 0 is the position itself. At depth 1 the move list is counted without
/// applying any move.
pub fn perft(board: &Board, team: Team, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves(board, team);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .map(|mv| perft(&board.apply_move(mv), team.flip(), depth - 1))
        .sum()
}

/// Per-move perft breakdown as `(coordinate_move, node_count)`, sorted by move.
pub fn divide(board: &Board, team: Team, depth: usize) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = legal_moves(board, team)
        .into_iter()
        .map(|mv| {
            let count = if depth <= 1 {
                1
            } else {
                perft(&board.apply_move(mv), team.flip(), depth - 1)
            };
            (mv.to_coordinate(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use referee_core::FenPosition;

    fn position(fen: &str) -> (Board, Team) {
        let pos: FenPosition = fen.parse().unwrap();
        (pos.board, pos.turn)
    }

    fn count(fen: &str, depth: usize) -> u64 {
        let (board, team) = position(fen);
        perft(&board, team, depth)
    }

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const ENDGAME: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
    const PROMOTIONS: &str = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";
    const TRICKY: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";

    #[test]
    fn depth_zero_is_one() {
        assert_eq!(perft(&Board::starting_position(), Team::White, 0), 1);
    }

    #[test]
    fn startpos() {
        let board = Board::starting_position();
        assert_eq!(perft(&board, Team::White, 1), 20);
        assert_eq!(perft(&board, Team::White, 2), 400);
        assert_eq!(perft(&board, Team::White, 3), 8_902);
    }

    #[test]
    #[ignore] // slow
    fn startpos_depth_4() {
        assert_eq!(perft(&Board::starting_position(), Team::White, 4), 197_281);
    }

    #[test]
    fn kiwipete() {
        assert_eq!(count(KIWIPETE, 1), 48);
        assert_eq!(count(KIWIPETE, 2), 2_039);
    }

    #[test]
    #[ignore] // slow
    fn kiwipete_depth_3() {
        assert_eq!(count(KIWIPETE, 3), 97_862);
    }

    #[test]
    fn rook_and_pawn_endgame() {
        assert_eq!(count(ENDGAME, 1), 14);
        assert_eq!(count(ENDGAME, 2), 191);
        assert_eq!(count(ENDGAME, 3), 2_812);
    }

    #[test]
    fn promotions_and_castling() {
        assert_eq!(count(PROMOTIONS, 1), 6);
        assert_eq!(count(PROMOTIONS, 2), 264);
    }

    #[test]
    fn tricky_position() {
        assert_eq!(count(TRICKY, 1), 44);
        assert_eq!(count(TRICKY, 2), 1_486);
    }

    #[test]
    fn divide_startpos() {
        let results = divide(&Board::starting_position(), Team::White, 1);
        assert_eq!(results.len(), 20);
        assert!(results.iter().all(|(_, n)| *n == 1));
        assert_eq!(results[0].0, "a2a3");

        let total: u64 = divide(&Board::starting_position(), Team::White, 2)
            .iter()
            .map(|(_, n)| n)
            .sum();
        assert_eq!(total, 400);
    }
}
