use serde::{Deserialize, Serialize};
use std::fmt;

use crate::point::Point;
use crate::stone::Stone;

/// What a player does on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Place(Point),
    Pass,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Place(point) => write!(f, "{point}"),
            Action::Pass => write!(f, "pass"),
        }
    }
}

impl std::str::FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("pass") {
            Ok(Action::Pass)
        } else {
            s.parse().map(Action::Place)
        }
    }
}

impl From<Point> for Action {
    fn from(point: Point) -> Self {
        Action::Place(point)
    }
}

/// A recorded move. `number` counts from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub number: u32,
    pub stone: Stone,
    pub action: Action,
}

impl Move {
    pub fn is_pass(&self) -> bool {
        self.action == Action::Pass
    }

    pub fn point(&self) -> Option<Point> {
        match self.action {
            Action::Place(point) => Some(point),
            Action::Pass => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} {}", self.number, self.stone.letter(), self.action)
    }
}
