use crate::ship::ShipClass;

pub const BOARD_SIZE: usize = 10;

pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipClass; NUM_SHIPS] = [
    ShipClass::Carrier,
    ShipClass::Battleship,
    ShipClass::Cruiser,
    ShipClass::Submarine,
    ShipClass::Destroyer,
];

/// Win-condition ships of the 2v2 variant, one set per team.
pub const NUM_SPECIAL_SHIPS: usize = 3;
pub const SPECIAL_SHIPS: [ShipClass; NUM_SPECIAL_SHIPS] = [
    ShipClass::Commander,
    ShipClass::Mother,
    ShipClass::Scout,
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

pub const TRAPS_PER_TEAM: usize = 3;

/// A radius of 1 reveals the 3×3 block centred on the trap.
pub const TRAP_REVEAL_RADIUS: usize = 1;

/// Random draws per ship before random placement gives up on it.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Pacing delays used by the async sessions, in milliseconds.
pub const AI_THINK_MS: u64 = 1000;
pub const BUDDY_THINK_MS: u64 = 1000;
pub const ENEMY_THINK_MS: u64 = 1500;

/// Look up a ship class by its display name, case-insensitively.
/// Returns `None` if the name does not match any regular or special ship.
pub fn ship_class_by_name(name: &str) -> Option<ShipClass> {
    SHIPS
        .iter()
        .chain(SPECIAL_SHIPS.iter())
        .copied()
        .find(|class| class.name().eq_ignore_ascii_case(name))
}

/// Lengths of the regular fleet, in configuration order.
pub fn fleet_lengths() -> [usize; NUM_SHIPS] {
    SHIPS.map(|class| class.length())
}
