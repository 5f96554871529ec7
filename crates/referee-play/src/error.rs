//! Turn controller and session errors.

use referee_core::{FenError, Square, Team};
use referee_rules::RulesError;

/// Errors that can occur while playing a game or handling a session command.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    /// The origin square holds no piece.
    #[error("no piece on {square}")]
    EmptySquare {
        /// The empty origin.
        square: Square,
    },

    /// The origin square holds a piece of the team not on move.
    #[error("the piece on {square} belongs to {}, but {} is to move", owner.name(), turn.name())]
    NotYourPiece {
        /// The chosen origin.
        square: Square,
        /// The piece's team.
        owner: Team,
        /// The team on move.
        turn: Team,
    },

    /// The move breaks the rules.
    #[error("illegal move: {from}{to}")]
    IllegalMove {
        /// Origin square.
        from: Square,
        /// Destination square.
        to: Square,
    },

    /// A pawn reached its last rank without naming a promotion piece.
    #[error("promotion piece required for {from}{to}")]
    PromotionRequired {
        /// Origin square.
        from: Square,
        /// Destination square.
        to: Square,
    },

    /// A promotion letter was given that is not allowed here.
    #[error("invalid promotion: {letter}")]
    InvalidPromotion {
        /// The offending letter.
        letter: char,
    },

    /// A loaded position has the side not on move already in check.
    #[error("{} is in check but it is not their move", team.name())]
    OpponentInCheck {
        /// The team in check.
        team: Team,
    },

    /// A move was attempted after checkmate or stalemate.
    #[error("the game is over")]
    GameOver,

    /// Move text is not of the form `e2e4` or `e7e8q`.
    #[error("invalid move text: {text}")]
    InvalidMoveText {
        /// The text that failed to parse.
        text: String,
    },

    /// A square name could not be parsed.
    #[error("invalid square: {text}")]
    InvalidSquareText {
        /// The text that failed to parse.
        text: String,
    },

    /// The command word is not recognised.
    #[error("unknown command: {name}")]
    UnknownCommand {
        /// The command word.
        name: String,
    },

    /// A command is missing its argument.
    #[error("missing argument for {command}")]
    MissingArgument {
        /// The command word.
        command: &'static str,
    },

    /// `set` named an option that does not exist.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name.
        name: String,
    },

    /// `set` gave a value the option cannot take.
    #[error("invalid value for {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// A rules query failed.
    #[error(transparent)]
    Rules(#[from] RulesError),

    /// A FEN string could not be loaded.
    #[error("invalid FEN: {0}")]
    Fen(#[from] FenError),

    /// Reading input or writing output failed.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
