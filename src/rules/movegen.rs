//! Legal piece moves: slides, straight jumps and diagonal jumps.

use smallvec::SmallVec;

use crate::board::{Cell, Direction, Grid, Piece};

/// Destinations reachable in one move. At most five: three slides plus two
/// diagonals around the opponent.
pub type Destinations = SmallVec<[Cell; 5]>;

/// Computes where a piece may move. Pure: never touches the grid.
#[derive(Clone, Copy, Debug, Default)]
pub struct MoveGenerator;

impl MoveGenerator {
    /// Create a move generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Every legal destination for `piece`, each listed once.
    ///
    /// Per direction:
    /// 1. a wall or the rim on that edge rules the direction out;
    /// 2. an empty neighbour is an ordinary slide;
    /// 3. an occupied neighbour with an open edge behind it is jumped
    ///    straight over;
    /// 4. otherwise the piece may step diagonally around the occupant,
    ///    on whichever sides the occupant's edges are open.
    ///
    /// A piece that is not on the board has no destinations.
    #[must_use]
    pub fn legal_destinations(&self, piece: &Piece, grid: &Grid) -> Destinations {
        let mut out = Destinations::new();
        if !piece.cell.in_bounds(grid.size()) {
            return out;
        }

        for dir in Direction::ALL {
            let Some(next) = grid.open_step(piece.cell, dir) else {
                continue;
            };

            if grid.occupant(next).is_none() {
                out.push(next);
                continue;
            }

            if let Some(beyond) = grid.open_step(next, dir) {
                out.push(beyond);
                continue;
            }

            for side in dir.orthogonal() {
                if let Some(diagonal) = grid.open_step(next, side) {
                    out.push(diagonal);
                }
            }
        }

        out
    }
}
