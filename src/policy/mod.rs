//! Pluggable players.
//!
//! A `Policy` sees only the engine's public read interface and answers
//! with an `Action`. `play_out` runs two policies against each other
//! without any rendering or input layer.

mod random;

pub use random::RandomPolicy;

use tracing::debug;

use crate::core::{Action, Player, RuleError};
use crate::rules::RuleEngine;

/// Chooses actions for a seat.
pub trait Policy {
    /// Choose an action for `player`.
    ///
    /// Returns `None` if the player has no legal action.
    fn choose_action(&mut self, engine: &RuleEngine, player: Player) -> Option<Action>;
}

/// Alternate two policies until someone wins, a player has no legal action,
/// or `max_turns` actions have been applied.
///
/// Returns the winner, if any. An error means a policy proposed an action
/// the engine rejected.
pub fn play_out<'a>(
    engine: &mut RuleEngine,
    white: &'a mut dyn Policy,
    black: &'a mut dyn Policy,
    max_turns: u32,
) -> Result<Option<Player>, RuleError> {
    for _ in 0..max_turns {
        if engine.winner().is_some() {
            break;
        }

        let player = engine.current_turn();
        let policy = match player {
            Player::White => &mut *white,
            Player::Black => &mut *black,
        };
        let Some(action) = policy.choose_action(engine, player) else {
            debug!(%player, "no legal action");
            break;
        };
        engine.apply(player, action)?;
    }

    let winner = engine.winner();
    debug!(?winner, turns = engine.turn_number() - 1, "play-out finished");
    Ok(winner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;

    /// Always steps towards the goal row along the start column.
    struct StraightRunner;

    impl Policy for StraightRunner {
        fn choose_action(&mut self, engine: &RuleEngine, player: Player) -> Option<Action> {
            let here = engine.piece_cell(player);
            let goal = engine.goal_row(player);
            let target = if goal < here.row { here.row - 1 } else { here.row + 1 };
            let straight = Cell::new(here.col, target);
            let moves = engine.legal_moves(player);
            if moves.contains(&straight) {
                Some(Action::Move(straight))
            } else {
                // Jump or side-step around the other piece.
                let mut moves: Vec<_> = moves.into_iter().collect();
                moves.sort_by_key(|cell| cell.row.abs_diff(goal));
                moves.first().copied().map(Action::Move)
            }
        }
    }

    #[test]
    fn test_play_out_jump_decides_race() {
        let mut engine = RuleEngine::new();
        let winner = play_out(&mut engine, &mut StraightRunner, &mut StraightRunner, 100).unwrap();

        // Black meets White head-on in the middle and jumps, saving a step.
        assert_eq!(winner, Some(Player::Black));
        assert_eq!(engine.winner(), Some(Player::Black));
        assert_eq!(engine.turn_number(), 15);
    }

    #[test]
    fn test_play_out_mixes_policy_types() {
        let mut engine = RuleEngine::new();
        let mut random = RandomPolicy::new(21).with_wall_probability(0.0);
        let winner = play_out(&mut engine, &mut random, &mut StraightRunner, 100).unwrap();

        // Black walks straight home, so the race ends inside the limit.
        let winner = winner.unwrap();
        assert_eq!(engine.piece_cell(winner).row, engine.goal_row(winner));
        assert!(engine.turn_number() <= 17);
    }

    #[test]
    fn test_play_out_respects_turn_limit() {
        let mut engine = RuleEngine::new();
        let winner = play_out(&mut engine, &mut StraightRunner, &mut StraightRunner, 4).unwrap();

        assert_eq!(winner, None);
        assert_eq!(engine.turn_number(), 5);
    }
}
