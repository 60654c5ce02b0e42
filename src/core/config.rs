//! Game configuration types.
//!
//! The engine consumes three constants from its environment:
//! - the board size (9 for standard Quoridor),
//! - the wall supply per player (10),
//! - which edge each player is racing towards.
//!
//! `GameConfig` bundles them, builder style.

use serde::{Deserialize, Serialize};

use super::error::RuleError;
use super::player::Player;

/// Standard board size.
pub const DEFAULT_BOARD_SIZE: u8 = 9;

/// Standard wall supply per player.
pub const DEFAULT_WALLS_PER_PLAYER: u8 = 10;

/// Which edge each player starts on and which they must reach.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalAssignment {
    /// White starts on the last row and races to row 0; Black the reverse.
    #[default]
    Standard,
    /// White starts on row 0 and races to the last row; Black the reverse.
    Inverted,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of rows (and columns) on the square board.
    pub board_size: u8,

    /// Walls each player may place over the game.
    pub walls_per_player: u8,

    /// Goal-edge assignment.
    pub goals: GoalAssignment,

    /// Who moves first.
    pub first_player: Player,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            walls_per_player: DEFAULT_WALLS_PER_PLAYER,
            goals: GoalAssignment::Standard,
            first_player: Player::White,
        }
    }
}

impl GameConfig {
    /// Create the standard 9x9, ten-wall configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board size.
    #[must_use]
    pub fn with_board_size(mut self, size: u8) -> Self {
        self.board_size = size;
        self
    }

    /// Set the wall supply per player.
    #[must_use]
    pub fn with_walls_per_player(mut self, walls: u8) -> Self {
        self.walls_per_player = walls;
        self
    }

    /// Set the goal-edge assignment.
    #[must_use]
    pub fn with_goals(mut self, goals: GoalAssignment) -> Self {
        self.goals = goals;
        self
    }

    /// Set the player who moves first.
    #[must_use]
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    /// Check that the configuration describes a playable board.
    ///
    /// A wall spans two cells, so the board needs at least three rows for
    /// a wall to fit between the home rows.
    pub fn validate(&self) -> Result<(), RuleError> {
        if self.board_size < 3 {
            return Err(RuleError::InvalidConfig(format!(
                "board size must be at least 3, got {}",
                self.board_size
            )));
        }
        Ok(())
    }

    /// The row a player starts on.
    #[must_use]
    pub fn home_row(&self, player: Player) -> u8 {
        self.goal_row(player.opponent())
    }

    /// The row a player must reach to win.
    #[must_use]
    pub fn goal_row(&self, player: Player) -> u8 {
        let last = self.board_size - 1;
        match (self.goals, player) {
            (GoalAssignment::Standard, Player::White) | (GoalAssignment::Inverted, Player::Black) => 0,
            (GoalAssignment::Standard, Player::Black) | (GoalAssignment::Inverted, Player::White) => last,
        }
    }

    /// The column both pieces start on (the middle of the home row).
    #[must_use]
    pub fn start_column(&self) -> u8 {
        (self.board_size - 1) / 2
    }
}
