use rand::RngExt;

use crate::game::{Game, Played};
use crate::turn::Action;

/// Picks uniformly among the empty points, passing when none is legal.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        RandomPlayer
    }

    /// Choose a point for the player to move and play it.
    pub fn play(&self, game: &mut Game) -> Played {
        self.play_with(game, &mut rand::rng())
    }

    /// Like [`RandomPlayer::play`], drawing from `rng`.
    ///
    /// Each rejected candidate is dropped, so this takes at most one attempt
    /// per empty point before falling back to a pass.
    pub fn play_with<R: RngExt>(&self, game: &mut Game, rng: &mut R) -> Played {
        let stone = game.current_turn();
        let mut candidates = game.goban().empty_points();

        while !candidates.is_empty() {
            let point = candidates.swap_remove(rng.random_range(0..candidates.len()));
            if let Ok(played) = game.attempt_move(Action::Place(point), stone) {
                return played;
            }
        }

        tracing::debug!("{stone} has no legal point, passing");
        game.attempt_move(Action::Pass, stone)
            .expect("passing on the current turn is always legal")
    }
}
