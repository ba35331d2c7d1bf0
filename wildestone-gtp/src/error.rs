use std::fmt;

use wildestone::GoError;

/// Failure of a single GTP command. Reported to the controller as `? message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GtpError {
    UnknownCommand,
    Syntax(String),
    IllegalMove(GoError),
    CannotUndo,
    UnacceptableSize,
}

impl fmt::Display for GtpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GtpError::UnknownCommand => write!(f, "unknown command"),
            GtpError::Syntax(msg) => write!(f, "syntax error: {msg}"),
            GtpError::IllegalMove(e) => write!(f, "illegal move ({e})"),
            GtpError::CannotUndo => write!(f, "cannot undo"),
            GtpError::UnacceptableSize => write!(f, "unacceptable size"),
        }
    }
}

impl std::error::Error for GtpError {}

impl From<GoError> for GtpError {
    fn from(e: GoError) -> Self {
        match e {
            GoError::NoMoveToUndo => GtpError::CannotUndo,
            other => GtpError::IllegalMove(other),
        }
    }
}
