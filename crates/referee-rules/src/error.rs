//! Errors surfaced by rule queries.

use referee_core::{InvalidSquare, Team};

/// Conditions that make a rule query unanswerable.
///
/// An illegal move is not one of them: legality is an ordinary `false`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    /// A coordinate lies outside the board.
    #[error(transparent)]
    InvalidSquare(#[from] InvalidSquare),

    /// The queried team has no king on the board.
    #[error("{} has no king on the board", team.name())]
    NoKing {
        /// The kingless team.
        team: Team,
    },
}
