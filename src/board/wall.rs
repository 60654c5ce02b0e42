//! Walls: two-segment barriers laid along cell edges.
//!
//! A wall is identified by its orientation and an anchor cell. The anchor
//! names the grid point at the anchor cell's top-left corner, where the
//! wall starts:
//!
//! - a **vertical** wall runs down from that point, blocking the left
//!   edges of the anchor cell and the cell below it;
//! - a **horizontal** wall runs right from that point, blocking the top
//!   edges of the anchor cell and the cell to its right.

use serde::{Deserialize, Serialize};

use super::cell::{Cell, Direction};
use crate::core::Player;

/// Wall orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Lies along a row boundary; blocks vertical movement.
    Horizontal,
    /// Lies along a column boundary; blocks horizontal movement.
    Vertical,
}

impl Orientation {
    /// The perpendicular orientation.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// A wall position. Walls are plain values; whether one is on the board
/// is a property of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Wall {
    /// Horizontal or vertical.
    pub orientation: Orientation,
    /// Cell whose top-left corner is the wall's starting point.
    pub anchor: Cell,
}

impl Wall {
    /// Create a wall.
    #[must_use]
    pub const fn new(orientation: Orientation, anchor: Cell) -> Self {
        Self { orientation, anchor }
    }

    /// Create a horizontal wall.
    #[must_use]
    pub const fn horizontal(col: u8, row: u8) -> Self {
        Self::new(Orientation::Horizontal, Cell::new(col, row))
    }

    /// Create a vertical wall.
    #[must_use]
    pub const fn vertical(col: u8, row: u8) -> Self {
        Self::new(Orientation::Vertical, Cell::new(col, row))
    }

    /// Check if the wall lies entirely on the interior of a `size`x`size`
    /// board. Walls along the outer boundary are meaningless and walls
    /// hanging past the corner are rejected.
    #[must_use]
    pub fn fits(self, size: u8) -> bool {
        let Cell { col, row } = self.anchor;
        match self.orientation {
            Orientation::Vertical => (1..size).contains(&col) && row.saturating_add(1) < size,
            Orientation::Horizontal => col.saturating_add(1) < size && (1..size).contains(&row),
        }
    }

    /// The two cell edges this wall blocks, as seen from the cell on the
    /// anchor side. Only meaningful for walls that `fit`.
    #[must_use]
    pub fn segments(self) -> [(Cell, Direction); 2] {
        let Cell { col, row } = self.anchor;
        match self.orientation {
            Orientation::Vertical => [
                (self.anchor, Direction::Left),
                (Cell::new(col, row.saturating_add(1)), Direction::Left),
            ],
            Orientation::Horizontal => [
                (self.anchor, Direction::Up),
                (Cell::new(col.saturating_add(1), row), Direction::Up),
            ],
        }
    }

    /// The perpendicular wall sharing this wall's midpoint.
    ///
    /// The two never share a segment, so the crossing has to be checked
    /// separately from overlap.
    #[must_use]
    pub fn crossing(self) -> Wall {
        let Cell { col, row } = self.anchor;
        match self.orientation {
            Orientation::Vertical => Wall::horizontal(col.saturating_sub(1), row.saturating_add(1)),
            Orientation::Horizontal => Wall::vertical(col.saturating_add(1), row.saturating_sub(1)),
        }
    }

    /// The same anchor, turned through a right angle.
    #[must_use]
    pub fn flipped(self) -> Wall {
        Wall::new(self.orientation.flipped(), self.anchor)
    }

    /// Every wall that fits on a `size`x`size` board: `2 * (size - 1)^2`
    /// candidates.
    pub fn candidates(size: u8) -> impl Iterator<Item = Wall> {
        [Orientation::Horizontal, Orientation::Vertical]
            .into_iter()
            .flat_map(move |orientation| {
                (0..size).flat_map(move |row| {
                    (0..size).map(move |col| Wall::new(orientation, Cell::new(col, row)))
                })
            })
            .filter(move |wall| wall.fits(size))
    }
}

impl std::fmt::Display for Wall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.orientation {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        };
        write!(f, "{kind} wall at {}", self.anchor)
    }
}

/// Lifecycle of a wall on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WallState {
    /// Applied only for a legality probe; always rolled back.
    Provisional,
    /// Committed. Never removed for the rest of the game.
    Placed,
}

/// A committed wall and the player whose pool it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedWall {
    /// Position of the wall.
    pub wall: Wall,
    /// Player who placed it.
    pub owner: Player,
}
