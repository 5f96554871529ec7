//! Session command parsing.

use referee_core::{PieceKind, Square};

use crate::error::PlayError;

/// A move as typed: origin, destination and an optional promotion letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveText {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `new` -- start a game from the opening position.
    New,
    /// `fen <FEN>` -- start a game from a position.
    Fen(String),
    /// `moves <sq>` -- list the legal destinations of a piece.
    Moves(Square),
    /// `play <from><to>[promo]` -- play a move.
    Play(MoveText),
    /// `history` -- print the numbered move list.
    History,
    /// `board` -- print the board grid.
    Board,
    /// `status` -- print the game status.
    Status,
    /// `set <name> <value>` -- change a session option.
    Set { name: String, value: String },
    /// `quit` -- end the session.
    Quit,
}

/// Parse a single non-blank input line into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, PlayError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = tokens.split_first() else {
        return Err(PlayError::UnknownCommand { name: String::new() });
    };

    match name {
        "new" => Ok(Command::New),
        "history" => Ok(Command::History),
        "board" => Ok(Command::Board),
        "status" => Ok(Command::Status),
        "quit" => Ok(Command::Quit),
        "fen" => {
            if args.is_empty() {
                return Err(PlayError::MissingArgument { command: "fen" });
            }
            Ok(Command::Fen(args.join(" ")))
        }
        "moves" => {
            let text = args.first().ok_or(PlayError::MissingArgument { command: "moves" })?;
            Ok(Command::Moves(parse_square(text)?))
        }
        "play" => {
            let text = args.first().ok_or(PlayError::MissingArgument { command: "play" })?;
            Ok(Command::Play(parse_move(text)?))
        }
        "set" => match args {
            [name, value] => Ok(Command::Set {
                name: name.to_string(),
                value: value.to_string(),
            }),
            _ => Err(PlayError::MissingArgument { command: "set" }),
        },
        _ => Err(PlayError::UnknownCommand {
            name: name.to_string(),
        }),
    }
}

fn parse_square(text: &str) -> Result<Square, PlayError> {
    Square::from_algebraic(text).ok_or_else(|| PlayError::InvalidSquareText {
        text: text.to_string(),
    })
}

/// Parse coordinate move text such as `e2e4` or `e7e8q`.
pub fn parse_move(text: &str) -> Result<MoveText, PlayError> {
    let invalid = || PlayError::InvalidMoveText {
        text: text.to_string(),
    };
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(invalid());
    }

    let from = Square::from_algebraic(&text[0..2]).ok_or_else(invalid)?;
    let to = Square::from_algebraic(&text[2..4]).ok_or_else(invalid)?;
    let promotion = match text[4..].chars().next() {
        Some(c) => Some(PieceKind::from_fen_char(c).ok_or_else(invalid)?),
        None => None,
    };
    Ok(MoveText { from, to, promotion })
}
