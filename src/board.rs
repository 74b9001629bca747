//! Game board: a 10×10 matrix of cells with occupancy and attack state.

use alloc::vec::Vec;

use crate::bitboard::Mask;
use crate::common::Position;
use crate::config::BOARD_SIZE;
use crate::ship::ShipId;

/// State of one cell.
///
/// Cells only move forward along `Empty → Ship → Hit → Sunk` or
/// `Empty → Miss`. `Unknown` only appears in fog-of-war views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Empty,
    Ship,
    Hit,
    Miss,
    Sunk,
    Unknown,
}

impl CellState {
    /// `true` for states an attack has already resolved.
    #[inline]
    pub fn is_attacked(self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss | CellState::Sunk)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    position: Position,
    state: CellState,
    ship: Option<ShipId>,
    part: Option<usize>,
}

impl Cell {
    fn empty(position: Position) -> Self {
        Cell {
            position,
            state: CellState::Empty,
            ship: None,
            part: None,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    /// Ship occupying this cell, if any.
    pub fn ship(&self) -> Option<ShipId> {
        self.ship
    }

    /// Segment index of the occupying ship, counted from its origin.
    pub fn part(&self) -> Option<usize> {
        self.part
    }

    pub(crate) fn set_state(&mut self, state: CellState) {
        self.state = state;
    }

    pub(crate) fn occupy(&mut self, ship: ShipId, part: usize) {
        self.state = CellState::Ship;
        self.ship = Some(ship);
        self.part = Some(part);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a board with every cell `Empty`.
    pub fn new() -> Self {
        let cells = core::array::from_fn(|row| {
            core::array::from_fn(|col| Cell::empty(Position::new(row, col)))
        });
        Board { cells }
    }

    /// Cell at `pos`, or `None` if off the board.
    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.cells.get(pos.row)?.get(pos.col)
    }

    pub(crate) fn get_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        self.cells.get_mut(pos.row)?.get_mut(pos.col)
    }

    /// State at `pos`, or `None` if off the board.
    pub fn state(&self, pos: Position) -> Option<CellState> {
        self.get(pos).map(|c| c.state)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flat_map(|row| row.iter())
    }

    pub fn cells_by_state(&self, state: CellState) -> Vec<Position> {
        self.cells()
            .filter(|c| c.state == state)
            .map(|c| c.position)
            .collect()
    }

    pub fn count_state(&self, state: CellState) -> usize {
        self.cells().filter(|c| c.state == state).count()
    }

    /// `true` if `pos` is on the board and has not been attacked.
    pub fn is_untargeted(&self, pos: Position) -> bool {
        self.state(pos).is_some_and(|s| !s.is_attacked())
    }

    /// Cells that have not been attacked yet (`Empty`, `Ship` or `Unknown`).
    pub fn untargeted(&self) -> Vec<Position> {
        self.cells()
            .filter(|c| !c.state.is_attacked())
            .map(|c| c.position)
            .collect()
    }

    /// Untargeted orthogonal neighbours of `positions`, deduplicated,
    /// in discovery order.
    pub fn adjacent_untargeted(&self, positions: &[Position]) -> Vec<Position> {
        let mut seen = Mask::new();
        let mut out = Vec::new();
        for pos in positions {
            for n in pos.neighbours() {
                if self.is_untargeted(n) && !seen.contains(n) {
                    let _ = seen.set(n);
                    out.push(n);
                }
            }
        }
        out
    }

    /// Cells hit on ships that are not yet sunk.
    pub fn open_hits(&self) -> Vec<Position> {
        self.cells_by_state(CellState::Hit)
    }

    /// Mask of cells in any of the given states.
    pub fn mask_of(&self, states: &[CellState]) -> Mask {
        let mut mask = Mask::new();
        for cell in self.cells().filter(|c| states.contains(&c.state)) {
            let _ = mask.set(cell.position);
        }
        mask
    }

    /// What an opponent is allowed to see: attack outcomes only. Unattacked
    /// cells become `Unknown` and ship identities are stripped.
    pub fn fog_view(&self) -> Board {
        let mut view = self.clone();
        for cell in view.cells.iter_mut().flat_map(|row| row.iter_mut()) {
            if !cell.state.is_attacked() {
                cell.state = CellState::Unknown;
            }
            cell.ship = None;
            cell.part = None;
        }
        view
    }
}
