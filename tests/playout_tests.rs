//! Headless games between policies.

mod common;

use common::{init_tracing, snapshot};
use quoridor_engine::{play_out, GameConfig, GameRng, GoalAssignment, Phase, Player, RandomPolicy, RuleEngine};

fn random_game(seed: u64, max_turns: u32) -> (RuleEngine, Option<Player>) {
    let mut rng = GameRng::new(seed);
    let mut white = RandomPolicy::from_rng(rng.fork()).with_wall_probability(0.3);
    let mut black = RandomPolicy::from_rng(rng.fork()).with_wall_probability(0.3);

    let mut engine = RuleEngine::new();
    let winner = play_out(&mut engine, &mut white, &mut black, max_turns).unwrap();
    (engine, winner)
}

#[test]
fn test_same_seed_same_game() {
    init_tracing();
    for seed in [1, 17, 4242] {
        let (a, winner_a) = random_game(seed, 300);
        let (b, winner_b) = random_game(seed, 300);

        assert_eq!(winner_a, winner_b);
        assert_eq!(snapshot(&a), snapshot(&b));
        assert_eq!(a.last_action(), b.last_action());
    }
}

#[test]
fn test_finished_games_are_consistent() {
    for seed in 0..8 {
        let (engine, winner) = random_game(seed, 2_000);

        let Some(winner) = winner else {
            // Random walkers may wander for a long time; nothing more to check.
            continue;
        };
        assert_eq!(engine.phase(), Phase::GameOver { winner });
        assert_eq!(engine.piece_cell(winner).row, engine.goal_row(winner));
        assert_eq!(engine.last_action().map(|record| record.player), Some(winner));
        assert_eq!(engine.current_turn(), winner.opponent());
        assert!(engine.legal_actions(winner.opponent()).is_empty());
    }
}

#[test]
fn test_walls_are_spent_not_lost() {
    for seed in 0..4 {
        let (engine, _) = random_game(seed, 200);
        let spent = engine.placed_walls().len();
        let remaining: usize = Player::ALL
            .into_iter()
            .map(|player| usize::from(engine.walls_remaining(player)))
            .sum();
        assert_eq!(spent + remaining, 20);
        assert!(engine.distance_to_goal(Player::White).is_some());
        assert!(engine.distance_to_goal(Player::Black).is_some());
    }
}

#[test]
fn test_inverted_goals_play_out() {
    let config = GameConfig::new()
        .with_board_size(5)
        .with_walls_per_player(3)
        .with_goals(GoalAssignment::Inverted);
    let mut engine = RuleEngine::with_config(config).unwrap();
    let mut white = RandomPolicy::new(5).with_wall_probability(0.2);
    let mut black = RandomPolicy::new(6).with_wall_probability(0.2);

    assert_eq!(engine.goal_row(Player::White), 4);
    assert_eq!(engine.goal_row(Player::Black), 0);

    let winner = play_out(&mut engine, &mut white, &mut black, 5_000).unwrap();
    if let Some(winner) = winner {
        assert_eq!(engine.piece_cell(winner).row, engine.goal_row(winner));
    }
}
