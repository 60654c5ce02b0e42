//! Shared helpers for integration tests.

#![allow(dead_code)]

use quoridor_engine::{Action, Cell, Player, RuleEngine};
use tracing_subscriber::EnvFilter;

/// Install a test-writer subscriber once per binary. Set `RUST_LOG=debug`
/// to see engine events.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Apply a scripted sequence of moves, panicking on the first rejection.
pub fn play_moves(engine: &mut RuleEngine, moves: &[(Player, (u8, u8))]) {
    for &(player, (col, row)) in moves {
        engine
            .apply(player, Action::Move(Cell::new(col, row)))
            .unwrap_or_else(|err| panic!("{player} -> ({col}, {row}): {err}"));
    }
}

/// Everything observable about an engine, for before/after comparisons.
pub fn snapshot(engine: &RuleEngine) -> String {
    format!(
        "{:?}|{:?}|{:?}|{:?}|{:?}|{:?}|{:?}|{:?}",
        engine.grid(),
        engine.piece_cell(Player::White),
        engine.piece_cell(Player::Black),
        engine.walls_remaining(Player::White),
        engine.walls_remaining(Player::Black),
        engine.current_turn(),
        engine.phase(),
        engine.placed_walls(),
    )
}
