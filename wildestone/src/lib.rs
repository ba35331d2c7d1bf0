pub mod error;
pub mod game;
pub mod goban;
pub mod group;
pub mod history;
pub mod ko;
pub mod player;
pub mod point;
pub mod rules;
pub mod stone;
pub mod turn;
pub mod validator;

pub use error::GoError;
pub use game::{Game, GameState, Played};
pub use goban::{Captures, Goban};
pub use group::Group;
pub use history::History;
pub use ko::{KoRule, Position};
pub use player::RandomPlayer;
pub use point::{MAX_SIZE, Point};
pub use rules::Rules;
pub use stone::{Cell, Stone};
pub use turn::{Action, Move};
pub use validator::Transition;
