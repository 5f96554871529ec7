//! Core chess types: squares, pieces, the board snapshot, moves and FEN.

mod bitboard;
mod board;
mod chess_move;
mod error;
mod fen;
pub mod geometry;
mod history;
mod make_move;
mod piece;
mod piece_kind;
mod square;
mod team;

pub use bitboard::Bitboard;
pub use board::{Board, PrettyBoard};
pub use chess_move::{CastleSide, Move};
pub use error::{BoardError, FenError, InvalidSquare};
pub use fen::{FenPosition, STARTING_FEN};
pub use history::{HistoryEntry, MoveHistory};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square::Square;
pub use team::Team;
