//! Session options adjustable with `set`.

use crate::error::PlayError;

/// Configuration knobs adjustable via `set <name> <value>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Promote to a queen when a move reaches the last rank without a promotion letter.
    pub autoqueen: bool,
    /// Print the board after every committed move.
    pub showboard: bool,
}

impl SessionConfig {
    /// Set the option `name` from its textual `value`.
    ///
    /// Boolean options accept `true`/`false`, `on`/`off` and `1`/`0`.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), PlayError> {
        let slot = match name {
            "autoqueen" => &mut self.autoqueen,
            "showboard" => &mut self.showboard,
            _ => {
                return Err(PlayError::UnknownOption {
                    name: name.to_string(),
                });
            }
        };
        *slot = parse_bool(value).ok_or_else(|| PlayError::InvalidOptionValue {
            name: name.to_string(),
            value: value.to_string(),
        })?;
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "1" => Some(true),
        "false" | "off" | "0" => Some(false),
        _ => None,
    }
}
