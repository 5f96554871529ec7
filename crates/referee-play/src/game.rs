//! The turn controller: one game, its board, turn and history.

use std::fmt;

use referee_core::{Bitboard, Board, FenPosition, Move, MoveHistory, PieceKind, Square, Team};
use referee_rules::{
    is_checkmate, is_in_check, is_legal_move, is_stalemate, legal_destinations, notate,
    resolve_move,
};
use tracing::{debug, info};

use crate::error::PlayError;

/// Where the game stands for the team to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ongoing,
    Check,
    Checkmate { winner: Team },
    Stalemate,
}

impl Status {
    /// Return `true` once no further move may be played.
    pub fn is_over(self) -> bool {
        matches!(self, Status::Checkmate { .. } | Status::Stalemate)
    }

    /// Evaluate the position for `team`, the side about to move.
    fn evaluate(board: &Board, team: Team) -> Result<Status, PlayError> {
        if is_checkmate(board, team)? {
            return Ok(Status::Checkmate { winner: team.flip() });
        }
        if is_in_check(board, team)? {
            return Ok(Status::Check);
        }
        if is_stalemate(board, team)? {
            return Ok(Status::Stalemate);
        }
        Ok(Status::Ongoing)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ongoing => f.write_str("ongoing"),
            Status::Check => f.write_str("check"),
            Status::Checkmate { winner } => write!(f, "checkmate, {} wins", winner.name()),
            Status::Stalemate => f.write_str("stalemate"),
        }
    }
}

/// The outcome of a committed move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedMove {
    pub mv: Move,
    /// Algebraic notation, check and mate suffixes included.
    pub san: String,
    /// Status of the side now to move.
    pub status: Status,
}

/// A game in progress.
///
/// The rules layer only answers questions about a board; `Game` owns everything that
/// changes from move to move and makes sure moves are played in turn.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Team,
    history: MoveHistory,
    status: Status,
    halfmove_clock: u16,
}

impl Game {
    /// A new game from the starting position.
    pub fn new() -> Game {
        Game {
            board: Board::starting_position(),
            turn: Team::White,
            history: MoveHistory::new(),
            status: Status::Ongoing,
            halfmove_clock: 0,
        }
    }

    /// A game continuing from a FEN position.
    ///
    /// Both kings must be on the board, and the side not on move must not be in check.
    pub fn from_fen(fen: &str) -> Result<Game, PlayError> {
        let pos: FenPosition = fen.parse()?;
        let status = Status::evaluate(&pos.board, pos.turn)?;
        let waiting = pos.turn.flip();
        if is_in_check(&pos.board, waiting)? {
            return Err(PlayError::OpponentInCheck { team: waiting });
        }
        Ok(Game {
            board: pos.board,
            turn: pos.turn,
            history: MoveHistory::starting_at(pos.fullmove_number),
            status,
            halfmove_clock: pos.halfmove_clock,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Team {
        self.turn
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// The current position as FEN.
    pub fn fen(&self) -> String {
        FenPosition {
            board: self.board,
            turn: self.turn,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.history.next_move_number(),
        }
        .to_string()
    }

    /// Legal destinations of the piece on `square`, which must belong to the team on move.
    pub fn destinations(&self, square: Square) -> Result<Bitboard, PlayError> {
        self.own_piece(square)?;
        Ok(legal_destinations(&self.board, self.turn, square))
    }

    /// Return `true` if moving from `from` to `to` is a pawn reaching its last rank.
    pub fn requires_promotion(&self, from: Square, to: Square) -> bool {
        self.board.kind_on(from) == Some(PieceKind::Pawn)
            && to.rank() == self.turn.promotion_rank()
    }

    /// Play a move for the team on move.
    ///
    /// A pawn reaching its last rank must name its promotion piece; any other move
    /// must not.
    pub fn play(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<PlayedMove, PlayError> {
        if self.status.is_over() {
            return Err(PlayError::GameOver);
        }
        let kind = self.own_piece(from)?;
        if !is_legal_move(&self.board, self.turn, kind, from, to) {
            return Err(PlayError::IllegalMove { from, to });
        }

        match (self.requires_promotion(from, to), promotion) {
            (true, None) => return Err(PlayError::PromotionRequired { from, to }),
            (true, Some(piece)) if !PieceKind::PROMOTIONS.contains(&piece) => {
                return Err(PlayError::InvalidPromotion {
                    letter: piece.fen_char(),
                });
            }
            (false, Some(piece)) => {
                return Err(PlayError::InvalidPromotion {
                    letter: piece.fen_char(),
                });
            }
            _ => {}
        }

        let mv = resolve_move(&self.board, from, to, promotion)
            .ok_or(PlayError::EmptySquare { square: from })?;
        let after = self.board.apply_move(mv);
        let opponent = self.turn.flip();
        let status = Status::evaluate(&after, opponent)?;
        let san = notate(
            &mv,
            &self.board,
            matches!(status, Status::Check | Status::Checkmate { .. }),
            matches!(status, Status::Checkmate { .. }),
        );
        debug!(%mv, %san, ?status, "move played");

        self.halfmove_clock = if kind == PieceKind::Pawn || mv.capture {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };
        self.history.push(mv, san.clone());
        self.board = after;
        self.turn = opponent;
        self.status = status;
        if status.is_over() {
            info!(%status, moves = %self.history, "game over");
        }

        Ok(PlayedMove { mv, san, status })
    }

    /// The kind of the piece on `square`, provided it belongs to the team on move.
    fn own_piece(&self, square: Square) -> Result<PieceKind, PlayError> {
        let piece = self.board.piece_at(square).ok_or(PlayError::EmptySquare { square })?;
        if piece.team != self.turn {
            return Err(PlayError::NotYourPiece {
                square,
                owner: piece.team,
                turn: self.turn,
            });
        }
        Ok(piece.kind)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
