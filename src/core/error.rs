//! Errors reported by the rule engine.
//!
//! Every rejected action leaves the engine untouched: legality is decided
//! before any state is mutated.

use crate::board::{Cell, Wall};

use super::player::Player;

/// Why a wall cannot be placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, derive_more::Display)]
pub enum WallViolation {
    /// The wall would extend past the edge of the board.
    #[display("wall would leave the board")]
    OffBoard,

    /// One of the wall's segments is already blocked.
    #[display("wall overlaps an existing wall")]
    Overlaps,

    /// The perpendicular wall with the same midpoint is already placed.
    ///
    /// Only that exact wall counts. Two collinear walls that merely meet
    /// end to end do not stop a perpendicular wall passing between them.
    #[display("wall crosses an existing wall")]
    Crosses,

    /// The wall would cut the given player off from their goal edge.
    #[display("wall would leave {} without a path to goal", _0)]
    BlocksPath(Player),
}

/// Error that can occur when querying or mutating the engine.
#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display)]
pub enum RuleError {
    /// A coordinate lies outside the grid.
    #[display("{} is outside the board", _0)]
    OutOfBounds(Cell),

    /// The destination is not among the piece's legal moves.
    #[display("{} cannot move to {}", player, dest)]
    IllegalMove {
        /// The player attempting the move.
        player: Player,
        /// The requested destination.
        dest: Cell,
    },

    /// The wall fails a geometric or reachability check.
    #[display("cannot place {}: {}", wall, reason)]
    IllegalWall {
        /// The rejected wall.
        wall: Wall,
        /// The failed check.
        reason: WallViolation,
    },

    /// The player's wall pool is exhausted.
    #[display("{} has no walls remaining", _0)]
    NoWallsRemaining(Player),

    /// The player acted out of turn.
    #[display("it is not {}'s turn", _0)]
    NotYourTurn(Player),

    /// The game has already been won.
    #[display("game is over, {} won", _0)]
    GameOver(Player),

    /// The configuration cannot produce a playable board.
    #[display("invalid configuration: {}", _0)]
    InvalidConfig(String),
}

impl std::error::Error for RuleError {}
