//! Chess rules for referee: attacks, pins, castling, move legality, checkmate and notation.

mod attacks;
mod castling;
mod checkmate;
mod error;
mod legality;
mod moves;
mod notation;
mod perft;
mod pins;

pub use attacks::{
    attack_set, attackers_of, is_in_check, is_square_attacked, path_clear, piece_attacks,
};
pub use castling::can_castle;
pub use checkmate::{is_checkmate, is_stalemate};
pub use error::RulesError;
pub use legality::{en_passant_target, is_legal_move, is_legal_move_at};
pub use moves::{has_legal_move, legal_destinations, legal_moves, resolve_move};
pub use notation::notate;
pub use perft::{divide, perft};
pub use pins::{PinInfo, find_pin};
