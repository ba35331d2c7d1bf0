use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;
use std::ops::Neg;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(i8)]
pub enum Stone {
    Black = 1,
    White = -1,
}

impl Stone {
    pub fn opp(self) -> Self {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }

    /// Board glyph used by the text renderer.
    pub fn symbol(self) -> char {
        match self {
            Stone::Black => 'X',
            Stone::White => 'O',
        }
    }

    pub fn letter(self) -> &'static str {
        match self {
            Stone::Black => "B",
            Stone::White => "W",
        }
    }
}

impl Neg for Stone {
    type Output = Self;

    fn neg(self) -> Self {
        self.opp()
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stone::Black => write!(f, "Black"),
            Stone::White => write!(f, "White"),
        }
    }
}

impl std::str::FromStr for Stone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "b" | "black" => Ok(Stone::Black),
            "w" | "white" => Ok(Stone::White),
            _ => Err(format!("invalid color: {s}")),
        }
    }
}

/// State of a single grid point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize_repr, Deserialize_repr)]
#[repr(i8)]
pub enum Cell {
    #[default]
    Empty = 0,
    Black = 1,
    White = -1,
}

impl Cell {
    pub fn stone(self) -> Option<Stone> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Stone::Black),
            Cell::White => Some(Stone::White),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn symbol(self) -> char {
        self.stone().map_or('.', Stone::symbol)
    }
}

impl From<Stone> for Cell {
    fn from(stone: Stone) -> Self {
        match stone {
            Stone::Black => Cell::Black,
            Stone::White => Cell::White,
        }
    }
}

impl From<Option<Stone>> for Cell {
    fn from(stone: Option<Stone>) -> Self {
        stone.map_or(Cell::Empty, Cell::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent() {
        assert_eq!(Stone::Black.opp(), Stone::White);
        assert_eq!(Stone::White.opp(), Stone::Black);
    }

    #[test]
    fn negation() {
        assert_eq!(-Stone::Black, Stone::White);
        assert_eq!(-Stone::White, Stone::Black);
    }

    #[test]
    fn display() {
        assert_eq!(Stone::Black.to_string(), "Black");
        assert_eq!(Stone::White.to_string(), "White");
    }

    #[test]
    fn parses_colors() {
        assert_eq!("b".parse::<Stone>(), Ok(Stone::Black));
        assert_eq!("BLACK".parse::<Stone>(), Ok(Stone::Black));
        assert_eq!("w".parse::<Stone>(), Ok(Stone::White));
        assert_eq!("White".parse::<Stone>(), Ok(Stone::White));
        assert!("red".parse::<Stone>().is_err());
    }

    #[test]
    fn cell_conversions() {
        assert_eq!(Cell::from(Stone::Black), Cell::Black);
        assert_eq!(Cell::from(None), Cell::Empty);
        assert_eq!(Cell::White.stone(), Some(Stone::White));
        assert_eq!(Cell::Empty.stone(), None);
        assert!(Cell::default().is_empty());
    }

    #[test]
    fn cell_serializes_as_integer() {
        assert_eq!(serde_json::to_value(Cell::Black).unwrap(), 1);
        assert_eq!(serde_json::to_value(Cell::White).unwrap(), -1);
        assert_eq!(serde_json::to_value(Cell::Empty).unwrap(), 0);
    }
}
