//! Core engine types: players, configuration, actions, RNG, errors.
//!
//! These are the building blocks shared by the board, the rules and any
//! policy driving the engine.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use player::{Player, PlayerMap};
pub use rng::GameRng;
pub use config::{GameConfig, GoalAssignment, DEFAULT_BOARD_SIZE, DEFAULT_WALLS_PER_PLAYER};
pub use action::{Action, ActionRecord};
pub use error::{RuleError, WallViolation};
