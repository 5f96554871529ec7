//! Standard algebraic notation.

use referee_core::{Board, CastleSide, Move, PieceKind, Square};

use crate::legality::is_legal_move;

/// Describe `mv` in standard algebraic notation.
///
/// `before` is the board the move was played on; its last move is all the history
/// the description needs. The caller supplies whether the move gives check or mate.
pub fn notate(mv: &Move, before: &Board, is_check: bool, is_checkmate: bool) -> String {
    let mut san = match mv.castle {
        Some(CastleSide::KingSide) => String::from("O-O"),
        Some(CastleSide::QueenSide) => String::from("O-O-O"),
        None => describe(mv, before),
    };
    if is_checkmate {
        san.push('#');
    } else if is_check {
        san.push('+');
    }
    san
}

fn describe(mv: &Move, before: &Board) -> String {
    let mut san = String::new();
    match mv.kind.notation_letter() {
        Some(letter) => {
            san.push(letter);
            disambiguate(mv, before, &mut san);
        }
        None if mv.capture => san.push(mv.from.file_char()),
        None => {}
    }
    if mv.capture {
        san.push('x');
    }
    san.push_str(&mv.to.to_string());
    if let Some(letter) = mv.promotion.and_then(PieceKind::notation_letter) {
        san.push('=');
        san.push(letter);
    }
    san
}

/// Append the origin file, rank or both when another piece of the same kind could
/// also have reached the destination.
fn disambiguate(mv: &Move, before: &Board, san: &mut String) {
    let rivals: Vec<Square> = before
        .pieces_of(mv.kind, mv.team)
        .without(mv.from)
        .filter(|&sq| is_legal_move(before, mv.team, mv.kind, sq, mv.to))
        .collect();
    if rivals.is_empty() {
        return;
    }

    let shares_file = rivals.iter().any(|sq| sq.file() == mv.from.file());
    let shares_rank = rivals.iter().any(|sq| sq.rank() == mv.from.rank());
    if !shares_file {
        san.push(mv.from.file_char());
    } else if !shares_rank {
        san.push(mv.from.rank_char());
    } else {
        san.push(mv.from.file_char());
        san.push(mv.from.rank_char());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use referee_core::FenPosition;

    use crate::moves::resolve_move;

    fn board(fen: &str) -> Board {
        fen.parse::<FenPosition>().unwrap().board
    }

    fn san(b: &Board, from: Square, to: Square, promotion: Option<PieceKind>) -> String {
        let mv = resolve_move(b, from, to, promotion).unwrap();
        notate(&mv, b, false, false)
    }

    #[test]
    fn pawn_pushes_and_piece_moves() {
        let b = Board::starting_position();
        assert_eq!(san(&b, Square::E2, Square::E4, None), "e4");
        assert_eq!(san(&b, Square::G1, Square::F3, None), "Nf3");
        assert_eq!(san(&b, Square::E7, Square::E5, None), "e5");
    }

    #[test]
    fn captures() {
        let b = board("4k3/8/8/3p4/4P3/8/8/4K1N1 w - - 0 1");
        assert_eq!(san(&b, Square::E4, Square::D5, None), "exd5");

        let b = board("4k3/8/8/8/8/5p2/8/4K1N1 w - - 0 1");
        assert_eq!(san(&b, Square::G1, Square::F3, None), "Nxf3");
    }

    #[test]
    fn en_passant_is_a_pawn_capture() {
        let b = board("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
        assert_eq!(san(&b, Square::E5, Square::D6, None), "exd6");
    }

    #[test]
    fn castling() {
        let b = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert_eq!(san(&b, Square::E1, Square::G1, None), "O-O");
        assert_eq!(san(&b, Square::E8, Square::C8, None), "O-O-O");
        let mv = resolve_move(&b, Square::E1, Square::C1, None).unwrap();
        assert_eq!(notate(&mv, &b, true, false), "O-O-O+");
    }

    #[test]
    fn promotion() {
        let b = board("1n5k/P7/8/8/8/8/8/K7 w - - 0 1");
        assert_eq!(san(&b, Square::A7, Square::A8, Some(PieceKind::Queen)), "a8=Q");
        assert_eq!(san(&b, Square::A7, Square::B8, Some(PieceKind::Knight)), "axb8=N");
    }

    #[test]
    fn check_and_mate_suffixes() {
        let b = Board::starting_position();
        let mv = resolve_move(&b, Square::E2, Square::E4, None).unwrap();
        assert_eq!(notate(&mv, &b, true, false), "e4+");
        assert_eq!(notate(&mv, &b, true, true), "e4#");
        assert_eq!(notate(&mv, &b, false, true), "e4#");
    }

    #[test]
    fn knights_disambiguate_by_file() {
        let b = board("4k3/8/8/8/8/5N2/8/1N2K3 w - - 0 1");
        assert_eq!(san(&b, Square::B1, Square::D2, None), "Nbd2");
        assert_eq!(san(&b, Square::F3, Square::D2, None), "Nfd2");
        assert_eq!(san(&b, Square::F3, Square::E5, None), "Ne5");
    }

    #[test]
    fn rooks_disambiguate_by_rank() {
        let b = board("4k3/R7/8/8/8/8/8/R3K3 w - - 0 1");
        assert_eq!(san(&b, Square::A1, Square::A4, None), "R1a4");
        assert_eq!(san(&b, Square::A7, Square::A4, None), "R7a4");
    }

    #[test]
    fn queens_disambiguate_by_both() {
        let b = board("k7/8/8/8/4Q2Q/8/8/K6Q w - - 0 1");
        assert_eq!(san(&b, Square::H4, Square::E1, None), "Qh4e1");
        assert_eq!(san(&b, Square::E4, Square::E1, None), "Qee1");
    }

    #[test]
    fn pinned_rival_needs_no_disambiguation() {
        // The c3 knight is pinned by the bishop on b4, so only the g1 knight reaches e2.
        let b = board("4k3/8/8/8/1b6/2N5/8/4K1N1 w - - 0 1");
        assert_eq!(san(&b, Square::G1, Square::E2, None), "Ne2");
    }
}
