//! # quoridor-engine
//!
//! A rule engine for Quoridor: two pieces race across a 9x9 board while
//! each player spends a limited supply of walls to slow the other down.
//!
//! ## Design Principles
//!
//! 1. **One owner**: `RuleEngine` owns the board. Everything else, from
//!    the move generator to a rendering layer, reads it.
//!
//! 2. **Reject, never repair**: an illegal action returns a `RuleError`
//!    and leaves the engine exactly as it was.
//!
//! 3. **No sealed players**: every accepted wall leaves both pieces a
//!    route to their goal row. Legality probes run on a scratch grid and
//!    roll back automatically.
//!
//! ## Modules
//!
//! - `core`: players, configuration, actions, RNG, errors
//! - `board`: cells, walls, pieces and the grid
//! - `rules`: move generation, wall validation, the engine itself
//! - `policy`: pluggable players and a headless play-out driver

pub mod core;
pub mod board;
pub mod rules;
pub mod policy;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, GameConfig, GameRng, GoalAssignment, Player, PlayerMap, RuleError, WallViolation,
};

pub use crate::board::{Cell, Direction, Grid, Orientation, Piece, PlacedWall, Wall, WallState};

pub use crate::rules::{MoveGenerator, Phase, RuleEngine, WallValidator};

pub use crate::policy::{play_out, Policy, RandomPolicy};
