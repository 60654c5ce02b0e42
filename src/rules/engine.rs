//! The rule engine: owns the board, enforces turns, decides the winner.
//!
//! Everything outside the engine (rendering, input, policies) goes through
//! the operations here. The grid is never handed out mutably.
//!
//! ## Selection phases
//!
//! An interactive caller drives a small state machine:
//!
//! ```text
//! AwaitingSelection --select_piece--> PieceSelected --move_piece--> AwaitingSelection
//! AwaitingSelection --lift_wall-----> WallLifted ----place_wall--> AwaitingSelection
//!                                     WallLifted ----cancel------> AwaitingSelection
//! any --(piece reaches its goal row)--> GameOver
//! ```
//!
//! `move_piece` and `place_wall` are accepted from any phase but
//! `GameOver`, so non-interactive callers can ignore selection entirely.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::movegen::{Destinations, MoveGenerator};
use super::validator::{distance_to_goal, WallValidator};
use crate::board::{Cell, Grid, Orientation, Piece, PlacedWall, Wall, WallState};
use crate::core::{Action, ActionRecord, GameConfig, Player, PlayerMap, RuleError};

/// Where an interactive turn currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Nothing selected.
    AwaitingSelection,
    /// The current player's piece is selected.
    PieceSelected {
        /// Cell of the selected piece.
        cell: Cell,
    },
    /// The current player is holding a wall.
    WallLifted {
        /// Orientation of the lifted wall.
        orientation: Orientation,
    },
    /// A piece reached its goal row. Terminal.
    GameOver {
        /// The player who got there.
        winner: Player,
    },
}

/// Quoridor rule engine.
///
/// Cloning is cheap enough for look-ahead: the placed-wall list is a
/// persistent vector and the grid is a few hundred bytes.
///
/// ## Example
///
/// ```
/// use quoridor_engine::board::{Cell, Wall};
/// use quoridor_engine::core::Player;
/// use quoridor_engine::rules::RuleEngine;
///
/// let mut engine = RuleEngine::new();
/// engine.move_piece(Player::White, Cell::new(4, 7)).unwrap();
/// engine.place_wall(Player::Black, Wall::horizontal(3, 7)).unwrap();
///
/// assert_eq!(engine.current_turn(), Player::White);
/// assert_eq!(engine.walls_remaining(Player::Black), 9);
/// assert_eq!(engine.winner(), None);
/// ```
#[derive(Clone, Debug)]
pub struct RuleEngine {
    config: GameConfig,
    grid: Grid,
    pieces: PlayerMap<Piece>,
    walls_remaining: PlayerMap<u8>,
    placed: Vector<PlacedWall>,
    current: Player,
    phase: Phase,
    turn: u32,
    last_action: Option<ActionRecord>,
    moves: MoveGenerator,
    validator: WallValidator,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleEngine {
    /// Start a standard game: 9x9 board, ten walls each, White to move
    /// from the bottom row.
    #[must_use]
    pub fn new() -> Self {
        Self::build(GameConfig::default())
    }

    /// Start a game with a custom configuration.
    pub fn with_config(config: GameConfig) -> Result<Self, RuleError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: GameConfig) -> Self {
        let mut grid = Grid::new(config.board_size);
        let pieces = PlayerMap::new(|p| Piece::new(p, Cell::new(config.start_column(), config.home_row(p))));
        for (_, piece) in pieces.iter() {
            grid.put_piece(*piece);
        }

        debug!(?config, "new game");

        Self {
            grid,
            pieces,
            walls_remaining: PlayerMap::with_value(config.walls_per_player),
            placed: Vector::new(),
            current: config.first_player,
            phase: Phase::AwaitingSelection,
            turn: 1,
            last_action: None,
            moves: MoveGenerator::new(),
            validator: WallValidator::from_config(&config),
            config,
        }
    }

    // === Read-only accessors ===

    /// The configuration this game was created with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only view of the board.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// A player's piece.
    #[must_use]
    pub fn piece(&self, player: Player) -> Piece {
        self.pieces[player]
    }

    /// Where a player's piece stands.
    #[must_use]
    pub fn piece_cell(&self, player: Player) -> Cell {
        self.pieces[player].cell
    }

    /// Walls a player may still place.
    #[must_use]
    pub fn walls_remaining(&self, player: Player) -> u8 {
        self.walls_remaining[player]
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_turn(&self) -> Player {
        self.current
    }

    /// Current selection phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Committed walls, in placement order.
    #[must_use]
    pub fn placed_walls(&self) -> &Vector<PlacedWall> {
        &self.placed
    }

    /// Turn number, starting at 1 and advancing after every accepted action.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn
    }

    /// The most recent accepted action.
    #[must_use]
    pub fn last_action(&self) -> Option<ActionRecord> {
        self.last_action
    }

    /// Row a player must reach.
    #[must_use]
    pub fn goal_row(&self, player: Player) -> u8 {
        self.validator.goal_row(player)
    }

    /// Shortest number of single steps between a player and their goal
    /// row, ignoring the other piece.
    #[must_use]
    pub fn distance_to_goal(&self, player: Player) -> Option<usize> {
        distance_to_goal(&self.grid, self.pieces[player].cell, self.goal_row(player))
    }

    // === Queries ===

    /// Cells a player's piece may move to. Independent of whose turn it is.
    #[must_use]
    pub fn legal_moves(&self, player: Player) -> FxHashSet<Cell> {
        self.destinations(player).into_iter().collect()
    }

    /// Walls a player may place. Empty once their supply is used up.
    ///
    /// Runs a path search for every candidate; meant for move enumeration,
    /// not for per-frame use.
    #[must_use]
    #[instrument(skip(self), level = "debug")]
    pub fn legal_walls(&self, player: Player) -> FxHashSet<Wall> {
        if self.walls_remaining[player] == 0 {
            return FxHashSet::default();
        }
        self.validator.legal_walls(&self.grid, &self.pieces)
    }

    /// Check if a wall could be placed on the current board, ignoring whose
    /// turn it is and wall supply. No side effects.
    #[must_use]
    pub fn can_place(&self, wall: Wall) -> bool {
        self.validator.can_place(wall, &self.grid, &self.pieces)
    }

    /// Every action `apply` would accept from `player` right now, moves
    /// first, each group sorted. Empty when it is not their turn or the
    /// game is over.
    #[must_use]
    pub fn legal_actions(&self, player: Player) -> Vec<Action> {
        if self.ensure_can_act(player).is_err() {
            return Vec::new();
        }

        let mut moves: Vec<Cell> = self.destinations(player).into_iter().collect();
        moves.sort_unstable();
        let mut walls: Vec<Wall> = self.legal_walls(player).into_iter().collect();
        walls.sort_unstable();

        moves
            .into_iter()
            .map(Action::Move)
            .chain(walls.into_iter().map(Action::PlaceWall))
            .collect()
    }

    /// The player whose piece stands on their goal row, if any.
    ///
    /// Stable once set: no action is accepted after the game is won.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        Player::ALL.into_iter().find(|&player| {
            self.grid
                .row(self.goal_row(player))
                .any(|cell| self.grid.occupant(cell) == Some(player))
        })
    }

    // === Actions ===

    /// Move a player's piece.
    ///
    /// Fails with `IllegalMove` unless `dest` is one of `legal_moves(player)`.
    #[instrument(skip(self), level = "debug")]
    pub fn move_piece(&mut self, player: Player, dest: Cell) -> Result<(), RuleError> {
        self.try_move(player, dest)
            .inspect_err(|err| debug!(%err, "move rejected"))
    }

    fn try_move(&mut self, player: Player, dest: Cell) -> Result<(), RuleError> {
        self.ensure_can_act(player)?;
        self.grid.check(dest)?;
        if !self.destinations(player).contains(&dest) {
            return Err(RuleError::IllegalMove { player, dest });
        }

        let from = self.pieces[player].cell;
        self.grid.move_piece(from, dest);
        self.pieces[player].cell = dest;
        self.finish_turn(player, Action::Move(dest));
        Ok(())
    }

    /// Place one of a player's walls.
    ///
    /// Fails with `NoWallsRemaining` when the supply is used up, and with
    /// `IllegalWall` when the wall overlaps, crosses, leaves the board or
    /// cuts either player off from their goal.
    #[instrument(skip(self), level = "debug")]
    pub fn place_wall(&mut self, player: Player, wall: Wall) -> Result<(), RuleError> {
        self.try_place(player, wall)
            .inspect_err(|err| debug!(%err, "wall rejected"))
    }

    fn try_place(&mut self, player: Player, wall: Wall) -> Result<(), RuleError> {
        self.ensure_can_act(player)?;
        self.grid.check(wall.anchor)?;
        if self.walls_remaining[player] == 0 {
            return Err(RuleError::NoWallsRemaining(player));
        }
        self.validator
            .validate(wall, &self.grid, &self.pieces)
            .map_err(|reason| RuleError::IllegalWall { wall, reason })?;

        self.grid.place_wall(wall, WallState::Placed);
        self.walls_remaining[player] -= 1;
        self.placed.push_back(PlacedWall { wall, owner: player });
        self.finish_turn(player, Action::PlaceWall(wall));
        Ok(())
    }

    /// Apply either kind of action.
    pub fn apply(&mut self, player: Player, action: Action) -> Result<(), RuleError> {
        match action {
            Action::Move(dest) => self.move_piece(player, dest),
            Action::PlaceWall(wall) => self.place_wall(player, wall),
        }
    }

    // === Selection ===

    /// Select the current player's piece, returning where it may go.
    #[instrument(skip(self), level = "debug")]
    pub fn select_piece(&mut self) -> Result<FxHashSet<Cell>, RuleError> {
        self.ensure_running()?;
        let player = self.current;
        self.set_phase(Phase::PieceSelected {
            cell: self.pieces[player].cell,
        });
        Ok(self.legal_moves(player))
    }

    /// Pick up a wall for the current player.
    pub fn lift_wall(&mut self, orientation: Orientation) -> Result<(), RuleError> {
        self.ensure_running()?;
        if self.walls_remaining[self.current] == 0 {
            return Err(RuleError::NoWallsRemaining(self.current));
        }
        self.set_phase(Phase::WallLifted { orientation });
        Ok(())
    }

    /// Turn the lifted wall through a right angle. Returns the new
    /// orientation, or `None` if no wall is lifted.
    pub fn flip_wall(&mut self) -> Option<Orientation> {
        let Phase::WallLifted { orientation } = self.phase else {
            return None;
        };
        let flipped = orientation.flipped();
        self.set_phase(Phase::WallLifted { orientation: flipped });
        Some(flipped)
    }

    /// Drop any selection. No effect once the game is over.
    pub fn cancel(&mut self) {
        if !matches!(self.phase, Phase::GameOver { .. }) {
            self.set_phase(Phase::AwaitingSelection);
        }
    }

    // === Internals ===

    fn destinations(&self, player: Player) -> Destinations {
        self.moves.legal_destinations(&self.pieces[player], &self.grid)
    }

    fn ensure_running(&self) -> Result<(), RuleError> {
        match self.phase {
            Phase::GameOver { winner } => Err(RuleError::GameOver(winner)),
            _ => Ok(()),
        }
    }

    fn ensure_can_act(&self, player: Player) -> Result<(), RuleError> {
        self.ensure_running()?;
        if player != self.current {
            return Err(RuleError::NotYourTurn(player));
        }
        Ok(())
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            debug!(from = ?self.phase, to = ?phase, "phase change");
            self.phase = phase;
        }
    }

    fn finish_turn(&mut self, player: Player, action: Action) {
        let record = ActionRecord {
            player,
            action,
            turn: self.turn,
        };
        debug!(?record, "action accepted");
        self.last_action = Some(record);
        self.turn += 1;
        self.current = player.opponent();

        let next = match self.winner() {
            Some(winner) => Phase::GameOver { winner },
            None => Phase::AwaitingSelection,
        };
        self.set_phase(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GoalAssignment, WallViolation};

    #[test]
    fn test_initial_state() {
        let engine = RuleEngine::new();

        assert_eq!(engine.piece_cell(Player::White), Cell::new(4, 8));
        assert_eq!(engine.piece_cell(Player::Black), Cell::new(4, 0));
        assert_eq!(engine.walls_remaining(Player::White), 10);
        assert_eq!(engine.walls_remaining(Player::Black), 10);
        assert_eq!(engine.current_turn(), Player::White);
        assert_eq!(engine.phase(), Phase::AwaitingSelection);
        assert_eq!(engine.turn_number(), 1);
        assert!(engine.placed_walls().is_empty());
        assert_eq!(engine.winner(), None);
    }

    #[test]
    fn test_inverted_goals() {
        let config = GameConfig::new().with_goals(GoalAssignment::Inverted);
        let engine = RuleEngine::with_config(config).unwrap();

        assert_eq!(engine.piece_cell(Player::White), Cell::new(4, 0));
        assert_eq!(engine.goal_row(Player::White), 8);
        assert_eq!(engine.distance_to_goal(Player::White), Some(8));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig::new().with_board_size(1);
        assert!(matches!(RuleEngine::with_config(config), Err(RuleError::InvalidConfig(_))));
    }

    #[test]
    fn test_move_advances_turn() {
        let mut engine = RuleEngine::new();
        engine.move_piece(Player::White, Cell::new(4, 7)).unwrap();

        assert_eq!(engine.piece_cell(Player::White), Cell::new(4, 7));
        assert_eq!(engine.current_turn(), Player::Black);
        assert_eq!(engine.turn_number(), 2);
        assert_eq!(
            engine.last_action().map(|r| r.action),
            Some(Action::Move(Cell::new(4, 7)))
        );
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut engine = RuleEngine::new();
        let before = engine.clone();

        assert_eq!(
            engine.move_piece(Player::White, Cell::new(4, 6)),
            Err(RuleError::IllegalMove {
                player: Player::White,
                dest: Cell::new(4, 6)
            })
        );
        assert_eq!(
            engine.move_piece(Player::White, Cell::new(4, 9)),
            Err(RuleError::OutOfBounds(Cell::new(4, 9)))
        );
        assert_eq!(
            engine.move_piece(Player::Black, Cell::new(4, 1)),
            Err(RuleError::NotYourTurn(Player::Black))
        );

        assert_eq!(engine.grid(), before.grid());
        assert_eq!(engine.current_turn(), before.current_turn());
        assert_eq!(engine.turn_number(), before.turn_number());
    }

    #[test]
    fn test_place_wall_consumes_supply() {
        let mut engine = RuleEngine::new();
        let wall = Wall::horizontal(0, 4);
        engine.place_wall(Player::White, wall).unwrap();

        assert_eq!(engine.walls_remaining(Player::White), 9);
        assert_eq!(engine.current_turn(), Player::Black);
        assert_eq!(
            engine.placed_walls().iter().copied().collect::<Vec<_>>(),
            vec![PlacedWall { wall, owner: Player::White }]
        );
    }

    #[test]
    fn test_overlapping_wall_rejected() {
        let mut engine = RuleEngine::new();
        engine.place_wall(Player::White, Wall::horizontal(0, 4)).unwrap();

        assert_eq!(
            engine.place_wall(Player::Black, Wall::horizontal(1, 4)),
            Err(RuleError::IllegalWall {
                wall: Wall::horizontal(1, 4),
                reason: WallViolation::Overlaps
            })
        );
        assert_eq!(engine.walls_remaining(Player::Black), 10);
        assert_eq!(engine.current_turn(), Player::Black);
    }

    #[test]
    fn test_wall_anchor_out_of_bounds() {
        let mut engine = RuleEngine::new();
        assert_eq!(
            engine.place_wall(Player::White, Wall::horizontal(12, 3)),
            Err(RuleError::OutOfBounds(Cell::new(12, 3)))
        );
    }

    #[test]
    fn test_no_walls_remaining() {
        let config = GameConfig::new().with_walls_per_player(1);
        let mut engine = RuleEngine::with_config(config).unwrap();

        engine.place_wall(Player::White, Wall::horizontal(0, 4)).unwrap();
        engine.move_piece(Player::Black, Cell::new(4, 1)).unwrap();

        assert!(engine.legal_walls(Player::White).is_empty());
        assert_eq!(
            engine.place_wall(Player::White, Wall::horizontal(4, 4)),
            Err(RuleError::NoWallsRemaining(Player::White))
        );
        assert_eq!(engine.lift_wall(Orientation::Vertical), Err(RuleError::NoWallsRemaining(Player::White)));
    }

    #[test]
    fn test_selection_phases() {
        let mut engine = RuleEngine::new();

        let moves = engine.select_piece().unwrap();
        assert_eq!(engine.phase(), Phase::PieceSelected { cell: Cell::new(4, 8) });
        assert!(moves.contains(&Cell::new(4, 7)));

        engine.lift_wall(Orientation::Horizontal).unwrap();
        assert_eq!(engine.flip_wall(), Some(Orientation::Vertical));
        assert_eq!(
            engine.phase(),
            Phase::WallLifted {
                orientation: Orientation::Vertical
            }
        );

        engine.cancel();
        assert_eq!(engine.phase(), Phase::AwaitingSelection);
        assert_eq!(engine.flip_wall(), None);

        engine.select_piece().unwrap();
        engine.move_piece(Player::White, Cell::new(4, 7)).unwrap();
        assert_eq!(engine.phase(), Phase::AwaitingSelection);
    }

    #[test]
    fn test_legal_actions_only_for_current_player() {
        let engine = RuleEngine::new();

        assert!(engine.legal_actions(Player::Black).is_empty());

        let actions = engine.legal_actions(Player::White);
        assert_eq!(actions.len(), 3 + 128);
        assert!(actions[..3].iter().all(Action::is_move));
    }

    #[test]
    fn test_small_board_game_ends() {
        let config = GameConfig::new().with_board_size(3);
        let mut engine = RuleEngine::with_config(config).unwrap();
        // White (1,2) -> goal row 0, Black (1,0) -> goal row 2.
        engine.move_piece(Player::White, Cell::new(0, 2)).unwrap();
        engine.move_piece(Player::Black, Cell::new(1, 1)).unwrap();
        engine.move_piece(Player::White, Cell::new(0, 1)).unwrap();
        engine.move_piece(Player::Black, Cell::new(2, 1)).unwrap();
        engine.move_piece(Player::White, Cell::new(0, 0)).unwrap();

        assert_eq!(engine.winner(), Some(Player::White));
        assert_eq!(engine.phase(), Phase::GameOver { winner: Player::White });
        assert_eq!(
            engine.move_piece(Player::Black, Cell::new(2, 2)),
            Err(RuleError::GameOver(Player::White))
        );
        assert!(engine.select_piece().is_err());
        engine.cancel();
        assert_eq!(engine.winner(), Some(Player::White));
    }
}
