use serde::{Deserialize, Serialize};

use crate::error::GoError;
use crate::goban::{Captures, Goban};
use crate::group::Group;
use crate::history::History;
use crate::point::Point;
use crate::rules::Rules;
use crate::stone::{Cell, Stone};
use crate::turn::{Action, Move};
use crate::validator::{self, Transition};

/// Serializable snapshot of a game, for renderers and storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub size: u8,
    pub komi: f64,
    pub rules: Rules,
    pub turn: Stone,
    pub board: Vec<Cell>,
    pub captures: Captures,
    pub moves: Vec<Move>,
}

/// Result of a legal move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Played {
    pub mv: Move,
    pub captured: Vec<Point>,
}

/// One game: the board, its move history, and whose turn it is.
///
/// All mutation goes through [`Game::attempt_move`] and [`Game::undo`].
/// A rejected call leaves the game exactly as it was.
#[derive(Debug, Clone)]
pub struct Game {
    komi: f64,
    rules: Rules,
    goban: Goban,
    history: History,
}

impl Game {
    pub fn new(size: u8, komi: f64) -> Self {
        Self::with_rules(size, komi, Rules::default())
    }

    pub fn with_rules(size: u8, komi: f64, rules: Rules) -> Self {
        let goban = Goban::new(size);
        let history = History::new(goban.position());
        Game {
            komi,
            rules,
            goban,
            history,
        }
    }

    /// Replay recorded moves onto an empty board. Move numbers are reassigned.
    pub fn with_moves(size: u8, komi: f64, rules: Rules, moves: &[Move]) -> Result<Self, GoError> {
        let mut game = Self::with_rules(size, komi, rules);
        for m in moves {
            game.attempt_move(m.action, m.stone)?;
        }
        Ok(game)
    }

    /// Rebuild a game from its snapshot by replaying the recorded moves.
    pub fn from_game_state(state: &GameState) -> Result<Self, GoError> {
        Self::with_moves(state.size, state.komi, state.rules, &state.moves)
    }

    // -- Accessors --

    pub fn size(&self) -> u8 {
        self.goban.size()
    }

    pub fn komi(&self) -> f64 {
        self.komi
    }

    /// Komi is bookkeeping for scoring and never affects legality.
    pub fn set_komi(&mut self, komi: f64) {
        self.komi = komi;
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn goban(&self) -> &Goban {
        &self.goban
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn move_history(&self) -> &[Move] {
        self.history.moves()
    }

    pub fn captures(&self) -> &Captures {
        self.goban.captures()
    }

    pub fn stone_captures(&self, stone: Stone) -> u32 {
        self.goban.captures().get(stone)
    }

    pub fn stone_at(&self, point: Point) -> Cell {
        self.goban.cell(point)
    }

    pub fn group_at(&self, point: Point) -> Option<Group> {
        self.goban.group(point)
    }

    pub fn current_turn(&self) -> Stone {
        match self.history.last_move() {
            None => Stone::Black,
            Some(m) => m.stone.opp(),
        }
    }

    // -- Game actions --

    /// Play `action` for `stone`. The only way a move enters the game.
    pub fn attempt_move(&mut self, action: Action, stone: Stone) -> Result<Played, GoError> {
        let result = if stone != self.current_turn() {
            Err(GoError::WrongTurn)
        } else {
            validator::validate(&self.goban, &self.history, &self.rules, action, stone)
        };

        match result {
            Ok(transition) => Ok(self.commit(transition)),
            Err(e) => {
                tracing::debug!("rejected {stone} {action}: {e}");
                Err(e)
            }
        }
    }

    pub fn play(&mut self, point: Point, stone: Stone) -> Result<Played, GoError> {
        self.attempt_move(Action::Place(point), stone)
    }

    pub fn pass(&mut self, stone: Stone) -> Result<Played, GoError> {
        self.attempt_move(Action::Pass, stone)
    }

    /// Whether `stone` could play at `point` now, ignoring whose turn it is.
    pub fn is_legal(&self, point: Point, stone: Stone) -> bool {
        validator::validate(
            &self.goban,
            &self.history,
            &self.rules,
            Action::Place(point),
            stone,
        )
        .is_ok()
    }

    /// Take back the last move, restoring the board and the turn.
    pub fn undo(&mut self) -> Result<Move, GoError> {
        let (mv, captured) = self.history.pop().ok_or(GoError::NoMoveToUndo)?;

        if let Action::Place(point) = mv.action {
            self.goban.unplace(point, mv.stone, &captured);
        }
        assert!(
            self.goban.position() == *self.history.current_position(),
            "board does not match history after undoing {mv}"
        );

        tracing::debug!("undid {mv}");
        Ok(mv)
    }

    fn commit(&mut self, transition: Transition) -> Played {
        let Transition {
            stone,
            action,
            goban,
            captured,
            position,
        } = transition;

        if let Some(goban) = goban {
            self.goban = goban;
        }

        let mv = Move {
            number: self.history.len() as u32 + 1,
            stone,
            action,
        };
        self.history.record(mv, captured.clone(), position);

        tracing::trace!("played {mv}, captured {}", captured.len());
        Played { mv, captured }
    }

    // -- Serialization --

    pub fn game_state(&self) -> GameState {
        GameState {
            size: self.size(),
            komi: self.komi,
            rules: self.rules,
            turn: self.current_turn(),
            board: self.goban.cells().to_vec(),
            captures: self.goban.captures().clone(),
            moves: self.history.moves().to_vec(),
        }
    }
}
