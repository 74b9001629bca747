//! Ship classes and placed ships.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::Mask;
use crate::common::{BoardError, Position};
use crate::config::BOARD_SIZE;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Position of segment `i` of a ship starting at `origin`. May leave the board.
    #[inline]
    pub fn segment(self, origin: Position, i: usize) -> Position {
        match self {
            Orientation::Horizontal => Position::new(origin.row, origin.col + i),
            Orientation::Vertical => Position::new(origin.row + i, origin.col),
        }
    }
}

/// Every ship class in play. The last three only exist in the 2v2 variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipClass {
    Carrier,
    Battleship,
    Cruiser,
    Submarine,
    Destroyer,
    Commander,
    Mother,
    Scout,
}

impl ShipClass {
    pub const fn length(self) -> usize {
        match self {
            ShipClass::Carrier | ShipClass::Commander => 5,
            ShipClass::Battleship | ShipClass::Mother => 4,
            ShipClass::Cruiser | ShipClass::Submarine | ShipClass::Scout => 3,
            ShipClass::Destroyer => 2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShipClass::Carrier => "Carrier",
            ShipClass::Battleship => "Battleship",
            ShipClass::Cruiser => "Cruiser",
            ShipClass::Submarine => "Submarine",
            ShipClass::Destroyer => "Destroyer",
            ShipClass::Commander => "Commander",
            ShipClass::Mother => "Mother",
            ShipClass::Scout => "Scout",
        }
    }

    /// Special ships are the 2v2 win condition.
    pub const fn is_special(self) -> bool {
        matches!(
            self,
            ShipClass::Commander | ShipClass::Mother | ShipClass::Scout
        )
    }
}

impl fmt::Display for ShipClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Handle of a ship within the fleet of one board (its index in that fleet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(pub usize);

/// `true` if a run of `length` cells from `origin` stays on the board.
pub fn fits(origin: Position, length: usize, orientation: Orientation) -> bool {
    if !origin.is_valid() || length == 0 {
        return false;
    }
    match orientation {
        Orientation::Horizontal => origin.col + length <= BOARD_SIZE,
        Orientation::Vertical => origin.row + length <= BOARD_SIZE,
    }
}

/// A ship placed on a board, with its hit counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    id: ShipId,
    class: ShipClass,
    origin: Position,
    orientation: Orientation,
    hits: usize,
    sunk: bool,
}

impl Ship {
    /// Build a ship at `origin`, failing if it would leave the board.
    /// Overlap is the board's concern, not the ship's.
    pub fn new(
        id: ShipId,
        class: ShipClass,
        origin: Position,
        orientation: Orientation,
    ) -> Result<Self, BoardError> {
        if !fits(origin, class.length(), orientation) {
            return Err(BoardError::ShipOutOfBounds);
        }
        Ok(Ship {
            id,
            class,
            origin,
            orientation,
            hits: 0,
            sunk: false,
        })
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    pub fn length(&self) -> usize {
        self.class.length()
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn is_sunk(&self) -> bool {
        self.sunk
    }

    /// Cells covered by the ship, from the origin outwards.
    pub fn cells(&self) -> impl Iterator<Item = Position> {
        let (origin, orientation) = (self.origin, self.orientation);
        (0..self.length()).map(move |i| orientation.segment(origin, i))
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells().any(|c| c == pos)
    }

    /// Occupancy mask of the ship.
    pub fn mask(&self) -> Mask {
        let mut mask = Mask::new();
        for pos in self.cells() {
            // in bounds: checked by `Ship::new`
            let _ = mask.set(pos);
        }
        mask
    }

    /// Count one more hit. Returns `true` when this hit sank the ship.
    pub(crate) fn register_hit(&mut self) -> bool {
        if self.sunk {
            return false;
        }
        self.hits += 1;
        if self.hits >= self.length() {
            self.sunk = true;
            return true;
        }
        false
    }

    /// Re-key the ship under a new fleet index.
    pub(crate) fn with_id(mut self, id: ShipId) -> Self {
        self.id = id;
        self
    }
}

pub fn ship_by_id(ships: &[Ship], id: ShipId) -> Option<&Ship> {
    ships.iter().find(|s| s.id == id)
}

pub fn count_sunk(ships: &[Ship]) -> usize {
    ships.iter().filter(|s| s.sunk).count()
}

/// `true` when the fleet is non-empty and every ship in it is sunk.
pub fn all_sunk(ships: &[Ship]) -> bool {
    !ships.is_empty() && ships.iter().all(|s| s.sunk)
}

/// Lengths of ships still afloat, the public knowledge an attacker has
/// about the defender's fleet.
pub fn remaining_lengths(ships: &[Ship]) -> Vec<usize> {
    ships.iter().filter(|s| !s.sunk).map(|s| s.length()).collect()
}
