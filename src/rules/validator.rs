//! Wall legality: geometry first, then the path guarantee.
//!
//! A wall is legal when it fits on the board, overlaps no blocked edge,
//! does not cross a perpendicular wall at its midpoint, and still leaves
//! both players a route to their goal row.
//!
//! The path check applies the wall provisionally to a scratch copy of the
//! grid. `ProvisionalWall` removes it again when dropped, so the scratch
//! grid is back to its original state after every probe, whatever the
//! outcome.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use tracing::trace;

use crate::board::{Cell, Direction, Grid, Piece, Wall, WallState};
use crate::core::{GameConfig, Player, PlayerMap, WallViolation};

/// Decides whether walls may be placed.
#[derive(Clone, Copy, Debug)]
pub struct WallValidator {
    goals: PlayerMap<u8>,
}

impl WallValidator {
    /// Create a validator for the given goal rows.
    #[must_use]
    pub fn new(goals: PlayerMap<u8>) -> Self {
        Self { goals }
    }

    /// Create a validator using the configuration's goal assignment.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(PlayerMap::new(|p| config.goal_row(p)))
    }

    /// Goal row of a player.
    #[must_use]
    pub fn goal_row(&self, player: Player) -> u8 {
        self.goals[player]
    }

    /// Check if `wall` may be placed. No visible side effects.
    #[must_use]
    pub fn can_place(&self, wall: Wall, grid: &Grid, pieces: &PlayerMap<Piece>) -> bool {
        self.validate(wall, grid, pieces).is_ok()
    }

    /// Like `can_place`, but says which check failed.
    ///
    /// Geometric failures short-circuit before any path search runs.
    pub fn validate(&self, wall: Wall, grid: &Grid, pieces: &PlayerMap<Piece>) -> Result<(), WallViolation> {
        self.check_geometry(wall, grid)?;
        let mut scratch = grid.clone();
        self.check_paths(wall, &mut scratch, pieces)
    }

    /// Every wall that may currently be placed.
    ///
    /// Runs the full check for each of the `2 * (N - 1)^2` candidates,
    /// reusing one scratch grid.
    #[must_use]
    pub fn legal_walls(&self, grid: &Grid, pieces: &PlayerMap<Piece>) -> FxHashSet<Wall> {
        let mut scratch = grid.clone();
        Wall::candidates(grid.size())
            .filter(|&wall| {
                self.check_geometry(wall, &scratch).is_ok() && self.check_paths(wall, &mut scratch, pieces).is_ok()
            })
            .collect()
    }

    /// Stage one: board limits, overlap and crossing.
    pub fn check_geometry(&self, wall: Wall, grid: &Grid) -> Result<(), WallViolation> {
        if !wall.fits(grid.size()) {
            return Err(WallViolation::OffBoard);
        }
        if wall.segments().into_iter().any(|(cell, dir)| grid.edge(cell, dir).is_some()) {
            return Err(WallViolation::Overlaps);
        }
        if grid.holds_wall(wall.crossing()) {
            return Err(WallViolation::Crosses);
        }
        Ok(())
    }

    /// Stage two: with the wall in place, both players can still reach
    /// their goal rows. `scratch` is restored before returning.
    fn check_paths(&self, wall: Wall, scratch: &mut Grid, pieces: &PlayerMap<Piece>) -> Result<(), WallViolation> {
        let probe = ProvisionalWall::apply(scratch, wall);

        for (player, piece) in pieces.iter() {
            if !reaches_goal(probe.grid(), piece.cell, self.goals[player]) {
                trace!(%wall, %player, "wall would seal player off");
                return Err(WallViolation::BlocksPath(player));
            }
        }

        Ok(())
    }
}

/// A wall applied for the duration of a probe.
struct ProvisionalWall<'g> {
    grid: &'g mut Grid,
    wall: Wall,
}

impl<'g> ProvisionalWall<'g> {
    fn apply(grid: &'g mut Grid, wall: Wall) -> Self {
        grid.place_wall(wall, WallState::Provisional);
        Self { grid, wall }
    }

    fn grid(&self) -> &Grid {
        self.grid
    }
}

impl Drop for ProvisionalWall<'_> {
    fn drop(&mut self) {
        self.grid.unplace_wall(self.wall);
    }
}

/// Check if any cell of `goal_row` can be reached from `from`.
#[must_use]
pub fn reaches_goal(grid: &Grid, from: Cell, goal_row: u8) -> bool {
    distance_to_goal(grid, from, goal_row).is_some()
}

/// Length of the shortest single-step route from `from` to `goal_row`.
///
/// Breadth-first over open edges. Pieces are ignored: an occupied cell can
/// always be jumped or stepped around, so it never removes a route.
#[must_use]
pub fn distance_to_goal(grid: &Grid, from: Cell, goal_row: u8) -> Option<usize> {
    let size = grid.size();
    if !from.in_bounds(size) {
        return None;
    }

    let mut visited = vec![false; usize::from(size) * usize::from(size)];
    let mut queue = VecDeque::new();
    visited[from.index(size)] = true;
    queue.push_back((from, 0));

    while let Some((cell, dist)) = queue.pop_front() {
        if cell.row == goal_row {
            return Some(dist);
        }
        for dir in Direction::ALL {
            if let Some(next) = grid.open_step(cell, dir) {
                let seen = &mut visited[next.index(size)];
                if !*seen {
                    *seen = true;
                    queue.push_back((next, dist + 1));
                }
            }
        }
    }

    None
}
