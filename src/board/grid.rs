//! The square board: cell occupancy plus per-cell edge flags.
//!
//! Every cell carries four edge slots (left, top, right, bottom). A slot
//! holds the wall blocking that edge, if any. Slots are always written in
//! pairs, so a cell's right slot and its right neighbour's left slot hold
//! the same wall.
//!
//! Mutation is crate-private: only the rule engine moves pieces and
//! places walls, and only the wall validator applies provisional walls.

use serde::Serialize;

use super::cell::{Cell, Direction};
use super::piece::Piece;
use super::wall::{Wall, WallState};
use crate::core::{Player, RuleError};

/// A wall as seen from one of the edges it blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct EdgeWall {
    /// The wall blocking the edge.
    pub wall: Wall,
    /// Whether it is committed or only being probed.
    pub state: WallState,
}

/// Board storage. No rules live here, only bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Grid {
    size: u8,
    occupancy: Vec<Option<Player>>,
    edges: Vec<[Option<EdgeWall>; 4]>,
}

impl Grid {
    /// Create an empty `size`x`size` board.
    #[must_use]
    pub fn new(size: u8) -> Self {
        let cells = usize::from(size) * usize::from(size);
        Self {
            size,
            occupancy: vec![None; cells],
            edges: vec![[None; 4]; cells],
        }
    }

    /// Number of rows (and columns).
    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Reject cells that are not on the board.
    pub fn check(&self, cell: Cell) -> Result<(), RuleError> {
        if cell.in_bounds(self.size) {
            Ok(())
        } else {
            Err(RuleError::OutOfBounds(cell))
        }
    }

    /// The piece standing on `cell`, if any.
    pub fn piece_at(&self, cell: Cell) -> Result<Option<Piece>, RuleError> {
        self.check(cell)?;
        Ok(self.occupant(cell).map(|owner| Piece::new(owner, cell)))
    }

    /// Check if a wall blocks the edge of `cell` facing `dir`.
    ///
    /// The outer boundary is not a wall: edges on the rim report `false`.
    pub fn edge_blocked(&self, cell: Cell, dir: Direction) -> Result<bool, RuleError> {
        self.check(cell)?;
        Ok(self.edge(cell, dir).is_some())
    }

    /// The wall blocking the edge of `cell` facing `dir`, if any.
    pub fn wall_on_edge(&self, cell: Cell, dir: Direction) -> Result<Option<EdgeWall>, RuleError> {
        self.check(cell)?;
        Ok(self.edge(cell, dir))
    }

    /// Every cell of a row, left to right.
    pub fn row(&self, row: u8) -> impl Iterator<Item = Cell> {
        (0..self.size).map(move |col| Cell::new(col, row))
    }

    /// Write a wall into both of its segments. The wall must fit the board.
    pub(crate) fn place_wall(&mut self, wall: Wall, state: WallState) {
        debug_assert!(wall.fits(self.size), "{wall} does not fit");
        for (cell, dir) in wall.segments() {
            self.set_edge(cell, dir, Some(EdgeWall { wall, state }));
        }
    }

    /// Clear both segments of a wall. The wall must fit the board.
    pub(crate) fn unplace_wall(&mut self, wall: Wall) {
        debug_assert!(wall.fits(self.size), "{wall} does not fit");
        for (cell, dir) in wall.segments() {
            self.set_edge(cell, dir, None);
        }
    }

    /// Set or clear an edge slot of an in-bounds cell, mirrored onto the
    /// neighbour's opposite slot.
    fn set_edge(&mut self, cell: Cell, dir: Direction, wall: Option<EdgeWall>) {
        let size = self.size;
        self.edges[cell.index(size)][dir.index()] = wall;
        if let Some(neighbour) = cell.step(dir, size) {
            self.edges[neighbour.index(size)][dir.opposite().index()] = wall;
        }
    }

    /// Put a piece on an in-bounds, empty cell.
    pub(crate) fn put_piece(&mut self, piece: Piece) {
        debug_assert!(piece.cell.in_bounds(self.size), "{piece} is off the board");
        self.occupancy[piece.cell.index(self.size)] = Some(piece.owner);
    }

    /// Move whatever stands on `from` to `to`. Both must be in bounds.
    pub(crate) fn move_piece(&mut self, from: Cell, to: Cell) {
        let size = self.size;
        let piece = self.occupancy[from.index(size)].take();
        self.occupancy[to.index(size)] = piece;
    }

    /// Occupant of an in-bounds cell.
    pub(crate) fn occupant(&self, cell: Cell) -> Option<Player> {
        self.occupancy[cell.index(self.size)]
    }

    /// Edge slot of an in-bounds cell.
    pub(crate) fn edge(&self, cell: Cell, dir: Direction) -> Option<EdgeWall> {
        self.edges[cell.index(self.size)][dir.index()]
    }

    /// The neighbour in `dir` if it is on the board and no wall is in the
    /// way.
    pub(crate) fn open_step(&self, cell: Cell, dir: Direction) -> Option<Cell> {
        if self.edge(cell, dir).is_some() {
            return None;
        }
        cell.step(dir, self.size)
    }

    /// Check if exactly this wall occupies its first segment.
    pub(crate) fn holds_wall(&self, wall: Wall) -> bool {
        let [(cell, dir), _] = wall.segments();
        cell.in_bounds(self.size) && self.edge(cell, dir).is_some_and(|edge| edge.wall == wall)
    }
}
