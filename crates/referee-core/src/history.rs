//! Append-only record of the moves played in a game.

use std::fmt;

use crate::chess_move::Move;
use crate::team::Team;

/// One committed move together with its algebraic notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub mv: Move,
    pub san: String,
}

/// The moves of a game in the order they were played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveHistory {
    entries: Vec<HistoryEntry>,
    /// Move number of the first entry.
    first_number: u16,
}

impl MoveHistory {
    /// An empty history starting at move 1.
    pub fn new() -> MoveHistory {
        MoveHistory::starting_at(1)
    }

    /// An empty history whose first entry belongs to move `number`.
    pub fn starting_at(number: u16) -> MoveHistory {
        MoveHistory {
            entries: Vec::new(),
            first_number: number.max(1),
        }
    }

    /// Append a move.
    pub fn push(&mut self, mv: Move, san: impl Into<String>) {
        self.entries.push(HistoryEntry {
            mv,
            san: san.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// The most recent move, if any.
    pub fn last_move(&self) -> Option<Move> {
        self.entries.last().map(|entry| entry.mv)
    }

    /// The move number the next White move would carry, as FEN counts it.
    pub fn next_move_number(&self) -> u16 {
        let black_moves = self
            .entries
            .iter()
            .filter(|entry| entry.mv.team == Team::Black)
            .count();
        self.first_number.saturating_add(black_moves as u16)
    }

    /// Render the history with move numbers, e.g. `1. e4 e5 2. Nf3`.
    ///
    /// A history whose first entry is Black's opens with `N... `.
    pub fn numbered(&self) -> String {
        let mut out = String::new();
        let mut number = self.first_number;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            match entry.mv.team {
                Team::White => {
                    out.push_str(&format!("{number}. {}", entry.san));
                }
                Team::Black => {
                    if i == 0 {
                        out.push_str(&format!("{number}... {}", entry.san));
                    } else {
                        out.push_str(&entry.san);
                    }
                    number = number.saturating_add(1);
                }
            }
        }
        out
    }
}

impl Default for MoveHistory {
    fn default() -> MoveHistory {
        MoveHistory::new()
    }
}

impl fmt::Display for MoveHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.numbered())
    }
}
