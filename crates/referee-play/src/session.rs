//! Line-oriented session driving a [`Game`].

use std::io::{BufRead, Write};

use referee_core::PieceKind;
use tracing::{debug, info, warn};

use crate::command::{Command, MoveText, parse_command};
use crate::config::SessionConfig;
use crate::error::PlayError;
use crate::game::Game;

/// What the loop should do after a command.
enum Flow {
    Continue,
    Quit,
}

/// A session: the current game plus the options set during it.
///
/// Reads one command per line and answers on the output. Rejected commands are
/// reported as `error: <message>` and the session carries on.
#[derive(Debug, Default)]
pub struct Session {
    game: Game,
    config: SessionConfig,
}

impl Session {
    /// A session with a fresh game and default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Run until `quit` or the end of `input`.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        output: &mut W,
    ) -> Result<(), PlayError> {
        info!("session started");
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            match parse_command(trimmed).and_then(|cmd| self.execute(cmd, output)) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(PlayError::Io { source }) => return Err(PlayError::Io { source }),
                Err(e) => {
                    warn!(error = %e, "command rejected");
                    writeln!(output, "error: {e}")?;
                }
            }
            output.flush()?;
        }
        info!("session finished");
        Ok(())
    }

    fn execute<W: Write>(&mut self, cmd: Command, output: &mut W) -> Result<Flow, PlayError> {
        match cmd {
            Command::New => {
                self.game = Game::new();
                writeln!(output, "ok")?;
            }
            Command::Fen(fen) => {
                self.game = Game::from_fen(&fen)?;
                writeln!(output, "ok")?;
            }
            Command::Moves(square) => {
                let squares: Vec<String> = self
                    .game
                    .destinations(square)?
                    .map(|sq| sq.to_string())
                    .collect();
                if squares.is_empty() {
                    writeln!(output, "none")?;
                } else {
                    writeln!(output, "{}", squares.join(" "))?;
                }
            }
            Command::Play(text) => self.handle_play(text, output)?,
            Command::History => writeln!(output, "{}", self.game.history())?,
            Command::Board => writeln!(output, "{}", self.game.board().pretty())?,
            Command::Status => {
                let status = self.game.status();
                if status.is_over() {
                    writeln!(output, "{status}")?;
                } else {
                    writeln!(output, "{status}, {} to move", self.game.turn().name())?;
                }
            }
            Command::Set { name, value } => {
                self.config.set(&name, &value)?;
                debug!(%name, %value, "option set");
                writeln!(output, "ok")?;
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn handle_play<W: Write>(&mut self, text: MoveText, output: &mut W) -> Result<(), PlayError> {
        let promotion = match text.promotion {
            None if self.config.autoqueen && self.game.requires_promotion(text.from, text.to) => {
                Some(PieceKind::Queen)
            }
            other => other,
        };
        let played = self.game.play(text.from, text.to, promotion)?;

        if played.status.is_over() {
            writeln!(output, "{} ({})", played.san, played.status)?;
        } else {
            writeln!(output, "{}", played.san)?;
        }
        if self.config.showboard {
            writeln!(output, "{}", self.game.board().pretty())?;
        }
        Ok(())
    }
}
