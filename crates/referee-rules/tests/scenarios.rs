//! Whole-game scenarios across the rules crate.
//!
//! Each test drives the public API the way a game controller would: resolve a move,
//! check it, apply it, and describe it.

use referee_core::{Board, CastleSide, FenPosition, MoveHistory, PieceKind, Square, Team};
use referee_rules::{
    can_castle, find_pin, is_checkmate, is_in_check, is_legal_move, is_legal_move_at,
    legal_destinations, notate, resolve_move,
};

fn board(fen: &str) -> Board {
    fen.parse::<FenPosition>().unwrap().board
}

/// Play `from`→`to` for `team`, recording its notation, and return the new board.
fn play(board: &Board, history: &mut MoveHistory, team: Team, from: Square, to: Square) -> Board {
    let kind = board.kind_on(from).expect("origin holds a piece");
    assert!(is_legal_move(board, team, kind, from, to), "{from}{to} should be legal");
    let mv = resolve_move(board, from, to, None).expect("origin holds a piece");
    let after = board.apply_move(mv);
    let check = is_in_check(&after, team.flip()).unwrap();
    let mate = is_checkmate(&after, team.flip()).unwrap();
    history.push(mv, notate(&mv, board, check, mate));
    after
}

// --- Opening ---

#[test]
fn king_pawn_opening_history() {
    let start = Board::starting_position();
    assert_eq!(is_legal_move_at(&start, Team::White, PieceKind::Pawn, (4, 1), (4, 3)), Ok(true));

    let mut history = MoveHistory::new();
    let b = play(&start, &mut history, Team::White, Square::E2, Square::E4);
    assert_eq!(is_legal_move_at(&b, Team::Black, PieceKind::Pawn, (4, 6), (4, 4)), Ok(true));
    play(&b, &mut history, Team::Black, Square::E7, Square::E5);

    assert_eq!(history.numbered(), "1. e4 e5");
}

#[test]
fn scholars_mate_is_notated_with_hash() {
    let mut history = MoveHistory::new();
    let mut b = Board::starting_position();
    for (team, from, to) in [
        (Team::White, Square::E2, Square::E4),
        (Team::Black, Square::E7, Square::E5),
        (Team::White, Square::F1, Square::C4),
        (Team::Black, Square::B8, Square::C6),
        (Team::White, Square::D1, Square::H5),
        (Team::Black, Square::G8, Square::F6),
        (Team::White, Square::H5, Square::F7),
    ] {
        b = play(&b, &mut history, team, from, to);
    }
    assert_eq!(history.numbered(), "1. e4 e5 2. Bc4 Nc6 3. Qh5 Nf6 4. Qxf7#");
    assert_eq!(is_checkmate(&b, Team::Black), Ok(true));
}

// --- Properties ---

#[test]
fn back_rank_mate() {
    let b = board("6k1/5ppp/8/8/8/8/8/3R2K1 w - - 0 1");
    let mut history = MoveHistory::new();
    let b = play(&b, &mut history, Team::White, Square::D1, Square::D8);
    assert_eq!(is_checkmate(&b, Team::Black), Ok(true));
    assert_eq!(history.entries()[0].san, "Rd8#");
}

#[test]
fn knights_sharing_a_target_are_disambiguated() {
    let b = board("4k3/8/8/8/8/8/8/1N2K1N1 w - - 0 1");
    let mut history = MoveHistory::new();
    play(&b, &mut history, Team::White, Square::G1, Square::F3);
    assert_eq!(history.entries()[0].san, "Nf3", "only one knight reaches f3");

    let b = board("4k3/8/8/8/8/5N2/8/1N2K3 w - - 0 1");
    let mut history = MoveHistory::new();
    play(&b, &mut history, Team::White, Square::B1, Square::D2);
    assert_eq!(history.entries()[0].san, "Nbd2");
}

#[test]
fn pinned_bishop_keeps_to_the_diagonal() {
    let b = board("4k3/8/8/8/q7/8/2B5/3K4 w - - 0 1");
    let pin = find_pin(&b, &b.piece_at(Square::C2).unwrap()).expect("c2 is pinned by the queen");
    assert_eq!(pin.attacker.square, Square::A4);

    let dests = legal_destinations(&b, Team::White, Square::C2);
    assert!(dests.contains(Square::B3));
    assert!(dests.contains(Square::A4), "capturing the pinner stays on the line");
    assert!(!dests.contains(Square::D3));
    assert_eq!(dests.count(), 2);
}

#[test]
fn king_never_steps_next_to_the_other_king() {
    let b = board("8/8/8/3k4/8/3K4/8/8 w - - 0 1");
    for to in legal_destinations(&b, Team::White, Square::D3) {
        let (df, dr) = to.delta(Square::D5);
        assert!(df.abs() > 1 || dr.abs() > 1, "king moved next to the enemy king on {to}");
    }
}

#[test]
fn kingside_castling_moves_both_pieces() {
    let b = board("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    assert!(can_castle(&b, Team::White, CastleSide::KingSide));
    assert!(is_legal_move(&b, Team::White, PieceKind::King, Square::E1, Square::G1));

    let mv = resolve_move(&b, Square::E1, Square::G1, None).unwrap();
    let after = b.apply_move(mv);
    assert_eq!(after.kind_on(Square::G1), Some(PieceKind::King));
    assert_eq!(after.kind_on(Square::F1), Some(PieceKind::Rook));
    assert!(!after.is_occupied(Square::E1));
    assert!(!after.is_occupied(Square::H1));
    assert!(after.has_moved(Square::G1) && after.has_moved(Square::F1));
    assert!(!can_castle(&after, Team::White, CastleSide::QueenSide), "the king has moved");
}

#[test]
fn en_passant_only_right_after_the_double_step() {
    let b = board("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1");
    let mut history = MoveHistory::new();
    let b = play(&b, &mut history, Team::Black, Square::D7, Square::D5);
    assert!(is_legal_move(&b, Team::White, PieceKind::Pawn, Square::E5, Square::D6));

    let b = play(&b, &mut history, Team::White, Square::E1, Square::F1);
    let b = play(&b, &mut history, Team::Black, Square::E8, Square::F8);
    assert!(!is_legal_move(&b, Team::White, PieceKind::Pawn, Square::E5, Square::D6));
}

#[test]
fn off_board_coordinates_are_errors() {
    let b = Board::starting_position();
    assert!(is_legal_move_at(&b, Team::White, PieceKind::Pawn, (4, 1), (4, 8)).is_err());
    assert!(is_legal_move_at(&b, Team::White, PieceKind::Pawn, (-1, 1), (4, 3)).is_err());
}
