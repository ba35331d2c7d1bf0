use serde::{Deserialize, Serialize};
use std::fmt;

/// Column letters in coordinate text. `I` is skipped.
pub const COLUMN_LETTERS: &str = "ABCDEFGHJKLMNOPQRST";

/// Largest supported board size, bounded by the column alphabet.
pub const MAX_SIZE: u8 = 19;

/// A zero-indexed (column, row) pair on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub col: u8,
    pub row: u8,
}

impl Point {
    pub const fn new(col: u8, row: u8) -> Self {
        Point { col, row }
    }
}

impl From<(u8, u8)> for Point {
    fn from((col, row): (u8, u8)) -> Self {
        Point { col, row }
    }
}

/// Formats as coordinate text, e.g. `(15, 15)` is `Q16`.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match COLUMN_LETTERS.as_bytes().get(self.col as usize) {
            Some(&letter) => write!(f, "{}{}", letter as char, self.row as u16 + 1),
            None => write!(f, "({}, {})", self.col, self.row),
        }
    }
}

impl std::str::FromStr for Point {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars
            .next()
            .ok_or_else(|| "empty coordinate".to_string())?
            .to_ascii_uppercase();
        let col = COLUMN_LETTERS
            .find(letter)
            .ok_or_else(|| format!("invalid column letter: {letter}"))?;

        let digits = chars.as_str();
        let row: u8 = digits
            .parse()
            .map_err(|_| format!("invalid row number: {digits}"))?;
        if row == 0 || row > MAX_SIZE {
            return Err(format!("row out of range: {row}"));
        }

        Ok(Point::new(col as u8, row - 1))
    }
}
