//! Turn controller and line protocol for referee.

pub mod command;
pub mod config;
pub mod error;
pub mod game;
pub mod session;

pub use command::{Command, MoveText, parse_command, parse_move};
pub use config::SessionConfig;
pub use error::PlayError;
pub use game::{Game, PlayedMove, Status};
pub use session::Session;
