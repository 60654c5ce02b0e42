//! Quoridor rules.
//!
//! - `MoveGenerator`: slides, straight jumps and diagonal jumps
//! - `WallValidator`: wall geometry plus the path guarantee
//! - `RuleEngine`: owns the board and applies both, turn by turn
//!
//! Only the engine mutates the board; the generator and validator work
//! from read-only views.

pub mod movegen;
pub mod validator;
pub mod engine;

pub use movegen::{Destinations, MoveGenerator};
pub use validator::{distance_to_goal, reaches_goal, WallValidator};
pub use engine::{Phase, RuleEngine};
