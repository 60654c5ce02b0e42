//! Board data model: cells, walls, pieces and the grid that stores them.
//!
//! Nothing here knows the rules. `Grid` is storage plus adjacency queries;
//! `Wall` and `Piece` are plain values.

pub mod cell;
pub mod wall;
pub mod piece;
pub mod grid;

pub use cell::{Cell, Direction};
pub use wall::{Orientation, PlacedWall, Wall, WallState};
pub use piece::Piece;
pub use grid::{EdgeWall, Grid};
