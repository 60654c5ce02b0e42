//! Player tokens.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use crate::core::Player;

/// A player's token and where it stands.
///
/// Exactly one piece exists per player; it is created on the home row and
/// only ever moved by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    /// The player this token belongs to.
    pub owner: Player,
    /// Current position.
    pub cell: Cell,
}

impl Piece {
    /// Create a piece.
    #[must_use]
    pub const fn new(owner: Player, cell: Cell) -> Self {
        Self { owner, cell }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} piece at {}", self.owner, self.cell)
    }
}
