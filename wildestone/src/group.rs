use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::point::Point;
use crate::stone::Stone;

/// A maximal 4-connected set of same-colored stones and its liberties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub stone: Stone,
    pub stones: BTreeSet<Point>,
    pub liberties: BTreeSet<Point>,
}

impl Group {
    pub fn len(&self) -> usize {
        self.stones.len()
    }

    /// Always false for a group built from the board.
    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.stones.contains(&point)
    }

    pub fn liberty_count(&self) -> usize {
        self.liberties.len()
    }

    pub fn is_captured(&self) -> bool {
        self.liberties.is_empty()
    }

    /// Exactly one liberty left.
    pub fn in_atari(&self) -> bool {
        self.liberties.len() == 1
    }
}
