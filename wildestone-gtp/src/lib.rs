//! Go Text Protocol front end for the wildestone rules engine.
//!
//! Each input line is parsed into a [`Command`], executed against a
//! [`GtpSession`], and answered with a [`Response`]. Moves go through
//! `Game::attempt_move`, so anything the engine rejects comes back as
//! `? illegal move`.

pub mod command;
pub mod config;
pub mod error;
pub mod session;

use std::io::{BufRead, Write};

pub use command::Command;
pub use config::Config;
pub use error::GtpError;
pub use session::{GtpSession, Response};

/// Run the command loop until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(session: &mut GtpSession, input: R, mut output: W) -> std::io::Result<()> {
    for line in input.lines() {
        let line = line?;
        if let Some(response) = session.handle_line(&line) {
            write!(output, "{response}")?;
            output.flush()?;
        }
        if session.is_done() {
            break;
        }
    }
    Ok(())
}
