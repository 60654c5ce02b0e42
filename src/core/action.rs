//! Action representation.
//!
//! A turn is either a piece move or a wall placement. Actions are plain
//! values: they can be enumerated, compared and handed to
//! `RuleEngine::apply` by any caller, human input layer or policy alike.

use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::board::{Cell, Wall};

/// A complete turn.
///
/// ## Example
///
/// ```
/// use quoridor_engine::board::{Cell, Orientation, Wall};
/// use quoridor_engine::core::Action;
///
/// let step = Action::Move(Cell::new(4, 7));
/// let block = Action::PlaceWall(Wall::new(Orientation::Vertical, Cell::new(3, 2)));
///
/// assert!(step.is_move());
/// assert!(!block.is_move());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move the acting player's piece to the cell.
    Move(Cell),
    /// Place one of the acting player's walls.
    PlaceWall(Wall),
}

impl Action {
    /// Check if this action moves a piece.
    #[must_use]
    pub fn is_move(&self) -> bool {
        matches!(self, Action::Move(_))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Move(cell) => write!(f, "move to {cell}"),
            Action::PlaceWall(wall) => write!(f, "place {wall}"),
        }
    }
}

/// Record of an accepted action, emitted in debug logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Player who took the action.
    pub player: Player,
    /// The action itself.
    pub action: Action,
    /// Turn number at which it was taken (starts at 1).
    pub turn: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Orientation;

    #[test]
    fn test_action_display() {
        let step = Action::Move(Cell::new(4, 7));
        assert_eq!(step.to_string(), "move to (4, 7)");

        let block = Action::PlaceWall(Wall::new(Orientation::Vertical, Cell::new(3, 2)));
        assert_eq!(block.to_string(), "place vertical wall at (3, 2)");
    }

    #[test]
    fn test_action_ordering_puts_moves_first() {
        let mut actions = vec![
            Action::PlaceWall(Wall::new(Orientation::Horizontal, Cell::new(0, 1))),
            Action::Move(Cell::new(4, 7)),
        ];
        actions.sort();
        assert!(actions[0].is_move());
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::PlaceWall(Wall::new(Orientation::Horizontal, Cell::new(4, 7)));
        let json = serde_json::to_string(&action).unwrap();
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, back);
    }
}
