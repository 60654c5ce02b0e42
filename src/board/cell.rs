//! Board coordinates and the four orthogonal directions.

use serde::{Deserialize, Serialize};

/// A square on the board, identified by column and row.
///
/// Row 0 is the top edge, column 0 the left edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Column, counted from the left edge.
    pub col: u8,
    /// Row, counted from the top edge.
    pub row: u8,
}

impl Cell {
    /// Create a cell.
    #[must_use]
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// Check if the cell lies on a `size`x`size` board.
    #[must_use]
    pub const fn in_bounds(self, size: u8) -> bool {
        self.col < size && self.row < size
    }

    /// The neighbouring cell in `dir`, if it is still on the board.
    #[must_use]
    pub fn step(self, dir: Direction, size: u8) -> Option<Cell> {
        let (dc, dr) = dir.delta();
        let col = self.col.checked_add_signed(dc)?;
        let row = self.row.checked_add_signed(dr)?;
        let next = Cell::new(col, row);
        next.in_bounds(size).then_some(next)
    }

    /// Row-major index into a `size`x`size` board.
    #[must_use]
    pub(crate) fn index(self, size: u8) -> usize {
        usize::from(self.row) * usize::from(size) + usize::from(self.col)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// One of the four edges of a cell.
///
/// The discriminants give the slot order used by the grid's edge flags:
/// left, top, right, bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Towards column 0.
    Left = 0,
    /// Towards row 0.
    Up = 1,
    /// Towards the last column.
    Right = 2,
    /// Towards the last row.
    Down = 3,
}

impl Direction {
    /// All directions, in edge-slot order.
    pub const ALL: [Direction; 4] = [Direction::Left, Direction::Up, Direction::Right, Direction::Down];

    /// Edge-slot index.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The direction pointing back.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
        }
    }

    /// The two directions at right angles to this one.
    #[must_use]
    pub const fn orthogonal(self) -> [Direction; 2] {
        match self {
            Direction::Left | Direction::Right => [Direction::Up, Direction::Down],
            Direction::Up | Direction::Down => [Direction::Left, Direction::Right],
        }
    }

    /// Column and row offsets.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }
}
