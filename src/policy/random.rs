//! Uniform random play.

use super::Policy;
use crate::core::{Action, GameRng, Player};
use crate::rules::RuleEngine;

/// Picks uniformly among the engine's legal actions.
///
/// With a wall probability set, first decides between moving and walling
/// (falling back to whichever is available), then picks uniformly within
/// that group. Otherwise every legal action is equally likely, which on an
/// open board means mostly walls.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
    wall_probability: Option<f64>,
}

impl RandomPolicy {
    /// Create a policy with its own seeded stream.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    /// Create a policy drawing from an existing stream.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self {
            rng,
            wall_probability: None,
        }
    }

    /// Decide between moving and walling with the given odds first.
    ///
    /// Odds outside `0.0..=1.0` are clamped; NaN means never wall.
    #[must_use]
    pub fn with_wall_probability(mut self, probability: f64) -> Self {
        let probability = if probability.is_nan() { 0.0 } else { probability.clamp(0.0, 1.0) };
        self.wall_probability = Some(probability);
        self
    }
}

impl Policy for RandomPolicy {
    fn choose_action(&mut self, engine: &RuleEngine, player: Player) -> Option<Action> {
        let actions = engine.legal_actions(player);
        if actions.is_empty() {
            return None;
        }

        let Some(probability) = self.wall_probability else {
            let idx = self.rng.gen_range_usize(0..actions.len());
            return Some(actions[idx]);
        };

        // Moves sort before walls.
        let split = actions.partition_point(Action::is_move);
        let (moves, walls) = actions.split_at(split);
        let group = match (moves.is_empty(), walls.is_empty()) {
            (false, false) if self.rng.gen_bool(probability) => walls,
            (false, _) => moves,
            (true, _) => walls,
        };
        self.rng.choose(group).copied()
    }
}
