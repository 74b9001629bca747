//! Bomb traps for the 2v2 variant.
//!
//! A trap sits on one cell of an allied or enemy board. The first attack on
//! that cell triggers it instead of damaging anything underneath.

use alloc::vec::Vec;

use crate::board::{Board, CellState};
use crate::common::Position;
use crate::config::TRAP_REVEAL_RADIUS;
use crate::seat::Seat;

/// Handle of a trap within its team's trap list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TrapId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BombTrap {
    id: TrapId,
    owner: Seat,
    position: Position,
    triggered: bool,
    reveal_radius: usize,
}

impl BombTrap {
    pub fn new(id: TrapId, owner: Seat, position: Position) -> Self {
        Self {
            id,
            owner,
            position,
            triggered: false,
            reveal_radius: TRAP_REVEAL_RADIUS,
        }
    }

    pub fn id(&self) -> TrapId {
        self.id
    }

    /// Seat whose board carries the trap.
    pub fn owner(&self) -> Seat {
        self.owner
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    pub fn is_active(&self) -> bool {
        !self.triggered
    }

    pub fn reveal_radius(&self) -> usize {
        self.reveal_radius
    }

    /// Fire the trap. Returns `false` if it had already gone off.
    pub(crate) fn trigger(&mut self) -> bool {
        if self.triggered {
            return false;
        }
        self.triggered = true;
        true
    }

    /// Cells exposed when this trap goes off.
    pub fn reveal_area(&self) -> Vec<Position> {
        reveal_area(self.position, self.reveal_radius)
    }
}

/// Square of side `2 * radius + 1` around `center`, clipped to the board.
pub fn reveal_area(center: Position, radius: usize) -> Vec<Position> {
    let r = radius as isize;
    let mut area = Vec::with_capacity((2 * radius + 1) * (2 * radius + 1));
    for dr in -r..=r {
        for dc in -r..=r {
            if let Some(pos) = center.offset(dr, dc) {
                area.push(pos);
            }
        }
    }
    area
}

/// Active trap on `owner`'s board at `pos`, if any.
pub fn trap_at(traps: &[BombTrap], owner: Seat, pos: Position) -> Option<TrapId> {
    traps
        .iter()
        .find(|t| t.is_active() && t.owner == owner && t.position == pos)
        .map(|t| t.id)
}

/// A trap can go on any on-board cell that is still `Empty` or `Ship`
/// and does not already hold a trap on the same board.
pub fn can_place_trap(board: &Board, traps: &[BombTrap], owner: Seat, pos: Position) -> bool {
    matches!(board.state(pos), Some(CellState::Empty | CellState::Ship))
        && !traps.iter().any(|t| t.owner == owner && t.position == pos)
}

pub fn traps_on_board(traps: &[BombTrap], owner: Seat) -> impl Iterator<Item = &BombTrap> {
    traps.iter().filter(move |t| t.owner == owner)
}

pub fn count_active(traps: &[BombTrap]) -> usize {
    traps.iter().filter(|t| t.is_active()).count()
}
