use serde::{Deserialize, Serialize};
use std::fmt;

use crate::stone::Cell;

/// Which earlier positions a move may not recreate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KoRule {
    /// Only the position just before the opponent's last move.
    #[default]
    Simple,
    /// Any position since the start of the game (positional superko).
    Superko,
}

impl fmt::Display for KoRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KoRule::Simple => write!(f, "simple"),
            KoRule::Superko => write!(f, "superko"),
        }
    }
}

impl std::str::FromStr for KoRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(KoRule::Simple),
            "superko" => Ok(KoRule::Superko),
            _ => Err(format!("unknown ko rule: {s}")),
        }
    }
}

/// Immutable snapshot of every cell on the board. Two positions are equal
/// iff every point holds the same cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position(Box<[Cell]>);

impl Position {
    pub(crate) fn new(cells: &[Cell]) -> Self {
        Position(cells.into())
    }

    pub fn cells(&self) -> &[Cell] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_simple() {
        assert_eq!(KoRule::default(), KoRule::Simple);
    }

    #[test]
    fn parses_and_displays() {
        assert_eq!("superko".parse::<KoRule>(), Ok(KoRule::Superko));
        assert_eq!(KoRule::Simple.to_string(), "simple");
        assert!("situational".parse::<KoRule>().is_err());
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(KoRule::Superko).unwrap(),
            serde_json::json!("superko")
        );
    }
}
