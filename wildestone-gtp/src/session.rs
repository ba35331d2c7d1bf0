use std::fmt;

use wildestone::{Action, Game, MAX_SIZE, Point, RandomPlayer, Rules, Stone};

use crate::command::Command;
use crate::config::Config;
use crate::error::GtpError;

/// The list of known GTP commands.
pub const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "clear_board",
    "genmove",
    "known_command",
    "komi",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "showboard",
    "undo",
    "version",
];

/// A reply to one command, formatted as `=id text` or `?id message`
/// followed by a blank line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub id: Option<u32>,
    pub result: Result<String, GtpError>,
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.id.map(|i| i.to_string()).unwrap_or_default();
        match &self.result {
            Ok(text) => write!(f, "={id} {text}\n\n"),
            Err(e) => write!(f, "?{id} {e}\n\n"),
        }
    }
}

/// One controller connection: a game plus the settings `clear_board` resets to.
pub struct GtpSession {
    game: Game,
    size: u8,
    komi: f64,
    rules: Rules,
    player: RandomPlayer,
    quit: bool,
}

impl GtpSession {
    pub fn new(config: &Config) -> Self {
        GtpSession {
            game: Game::with_rules(config.board_size, config.komi, config.rules),
            size: config.board_size,
            komi: config.komi,
            rules: config.rules,
            player: RandomPlayer::new(),
            quit: false,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Whether `quit` has been received.
    pub fn is_done(&self) -> bool {
        self.quit
    }

    /// Handle one input line. Blank lines and comments get no response.
    pub fn handle_line(&mut self, line: &str) -> Option<Response> {
        let command = Command::parse(line)?;
        let result = self.execute(&command);
        if let Err(e) = &result {
            tracing::debug!("{} failed: {e}", command.name);
        }
        Some(Response {
            id: command.id,
            result,
        })
    }

    /// Execute a GTP command and return the response text.
    pub fn execute(&mut self, command: &Command) -> Result<String, GtpError> {
        match command.name.as_str() {
            "name" => Ok("wildestone".to_string()),

            "version" => Ok(env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => Ok("2".to_string()),

            "list_commands" => Ok(KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let name = required(command, 0)?.to_lowercase();
                Ok(KNOWN_COMMANDS.contains(&name.as_str()).to_string())
            }

            "quit" => {
                self.quit = true;
                Ok(String::new())
            }

            "boardsize" => {
                let arg = required(command, 0)?;
                let size: u8 = arg
                    .parse()
                    .map_err(|_| GtpError::Syntax(format!("invalid size: {arg}")))?;
                if size == 0 || size > MAX_SIZE {
                    return Err(GtpError::UnacceptableSize);
                }
                self.size = size;
                self.reset();
                tracing::info!("board size set to {size}");
                Ok(String::new())
            }

            "clear_board" => {
                self.reset();
                tracing::info!("board cleared");
                Ok(String::new())
            }

            "komi" => {
                let arg = required(command, 0)?;
                self.komi = arg
                    .parse()
                    .map_err(|_| GtpError::Syntax(format!("invalid komi: {arg}")))?;
                self.game.set_komi(self.komi);
                Ok(String::new())
            }

            "play" => {
                let stone = parse_color(required(command, 0)?)?;
                let action = parse_vertex(required(command, 1)?)?;
                self.game.attempt_move(action, stone)?;
                Ok(String::new())
            }

            "genmove" => {
                let stone = parse_color(required(command, 0)?)?;
                if stone != self.game.current_turn() {
                    return Err(GtpError::IllegalMove(wildestone::GoError::WrongTurn));
                }
                let played = self.player.play(&mut self.game);
                Ok(played.mv.action.to_string())
            }

            "undo" => {
                self.game.undo()?;
                Ok(String::new())
            }

            "showboard" => {
                let captures = self.game.captures();
                Ok(format!(
                    "\n{}Black captures: {}, White captures: {}",
                    self.game.goban(),
                    captures.black,
                    captures.white
                ))
            }

            _ => Err(GtpError::UnknownCommand),
        }
    }

    fn reset(&mut self) {
        self.game = Game::with_rules(self.size, self.komi, self.rules);
    }
}

fn required(command: &Command, i: usize) -> Result<&str, GtpError> {
    command
        .arg(i)
        .ok_or_else(|| GtpError::Syntax("missing argument".to_string()))
}

fn parse_color(s: &str) -> Result<Stone, GtpError> {
    s.parse().map_err(GtpError::Syntax)
}

fn parse_vertex(s: &str) -> Result<Action, GtpError> {
    if s.eq_ignore_ascii_case("pass") {
        return Ok(Action::Pass);
    }
    s.parse::<Point>()
        .map(Action::Place)
        .map_err(GtpError::Syntax)
}
