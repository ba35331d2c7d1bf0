use std::fmt;

/// Why a requested operation was refused. The game is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoError {
    OutOfBounds,
    OccupiedPoint,
    SuicideMove,
    KoViolation,
    WrongTurn,
    NoMoveToUndo,
}

impl fmt::Display for GoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoError::OutOfBounds => write!(f, "out of bounds"),
            GoError::OccupiedPoint => write!(f, "occupied point"),
            GoError::SuicideMove => write!(f, "suicide"),
            GoError::KoViolation => write!(f, "ko violation"),
            GoError::WrongTurn => write!(f, "wrong turn"),
            GoError::NoMoveToUndo => write!(f, "no move to undo"),
        }
    }
}

impl std::error::Error for GoError {}
