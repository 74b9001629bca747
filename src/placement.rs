//! Ship placement: validation, manual placement and random fleets.

use alloc::vec::Vec;
use log::{debug, warn};
use rand::Rng;

use crate::board::{Board, CellState};
use crate::common::{BoardError, Position};
use crate::config::{BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{fits, Orientation, Ship, ShipClass, ShipId};

/// `true` iff the run of `length` cells from `origin` stays on the board
/// and every cell in it is `Empty`.
pub fn can_place(board: &Board, origin: Position, length: usize, orientation: Orientation) -> bool {
    fits(origin, length, orientation)
        && (0..length).all(|i| {
            board.state(orientation.segment(origin, i)) == Some(CellState::Empty)
        })
}

/// Stamp `ship` onto the board: each covered cell becomes `Ship` and records
/// the ship id and segment index.
///
/// Performs no validation; callers check [`can_place`] first.
pub fn place_ship(board: &mut Board, ship: &Ship) {
    debug_assert!(can_place(board, ship.origin(), ship.length(), ship.orientation()));
    for (part, pos) in ship.cells().enumerate() {
        if let Some(cell) = board.get_mut(pos) {
            cell.occupy(ship.id(), part);
        }
    }
}

/// Validate and place a new ship of `class`, appending it to `ships`.
/// The board and fleet are untouched on failure.
pub fn place_new_ship(
    board: &mut Board,
    ships: &mut Vec<Ship>,
    class: ShipClass,
    origin: Position,
    orientation: Orientation,
) -> Result<ShipId, BoardError> {
    let id = ShipId(ships.len());
    let ship = Ship::new(id, class, origin, orientation)?;
    if !can_place(board, origin, class.length(), orientation) {
        return Err(BoardError::ShipOverlaps);
    }
    place_ship(board, &ship);
    ships.push(ship);
    Ok(id)
}

/// Draw a uniformly random origin and orientation. The origin is not
/// constrained by ship length; [`can_place`] rejects runs that overhang.
pub fn random_origin<R: Rng + ?Sized>(rng: &mut R) -> (Position, Orientation) {
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    let pos = Position::new(
        rng.random_range(0..BOARD_SIZE),
        rng.random_range(0..BOARD_SIZE),
    );
    (pos, orientation)
}

/// Place one ship of `class` at a random free spot, trying up to
/// [`MAX_PLACEMENT_ATTEMPTS`] draws.
pub fn place_randomly<R: Rng + ?Sized>(
    rng: &mut R,
    board: &mut Board,
    ships: &mut Vec<Ship>,
    class: ShipClass,
) -> Result<ShipId, BoardError> {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let (origin, orientation) = random_origin(rng);
        if can_place(board, origin, class.length(), orientation) {
            return place_new_ship(board, ships, class, origin, orientation);
        }
    }
    Err(BoardError::UnableToPlaceShip(class))
}

/// Place every class in `classes` at random, in order.
///
/// Fails fast: the first class that cannot be placed within its attempt
/// budget aborts with [`BoardError::UnableToPlaceShip`], leaving the ships
/// already placed on the board. Callers that need all-or-nothing work on a
/// scratch board.
pub fn place_ships_randomly<R: Rng + ?Sized>(
    rng: &mut R,
    board: &mut Board,
    ships: &mut Vec<Ship>,
    classes: &[ShipClass],
) -> Result<(), BoardError> {
    for &class in classes {
        place_randomly(rng, board, ships, class)?;
    }
    Ok(())
}

/// Random fleet for a player starting from an empty board. Never fails.
pub fn place_player_ships_randomly<R: Rng + ?Sized>(
    rng: &mut R,
    classes: &[ShipClass],
) -> (Board, Vec<Ship>) {
    place_ships_with_restart(rng, &Board::new(), &[], classes)
}

/// Random placement that restarts from `base` whenever a single class
/// exhausts its attempts.
///
/// Unlike [`place_ships_randomly`] this never surfaces a failure: a player
/// asking for a random layout always gets a complete one. Termination is
/// only probabilistic, which is fine as long as `base` leaves the fleet
/// plenty of room.
pub fn place_ships_with_restart<R: Rng + ?Sized>(
    rng: &mut R,
    base: &Board,
    base_ships: &[Ship],
    classes: &[ShipClass],
) -> (Board, Vec<Ship>) {
    let mut restarts = 0usize;
    loop {
        let mut board = base.clone();
        let mut ships = base_ships.to_vec();
        match place_ships_randomly(rng, &mut board, &mut ships, classes) {
            Ok(()) => {
                debug!("random fleet placed after {} restarts", restarts);
                return (board, ships);
            }
            Err(e) => {
                restarts += 1;
                warn!("{}, restarting placement", e);
            }
        }
    }
}

/// Rebuild a board holding only `keep`, re-keyed in order. Used to clear a
/// player's regular fleet while preserving ships placed alongside it.
pub fn rebuild_with(keep: &[Ship]) -> (Board, Vec<Ship>) {
    let mut board = Board::new();
    let mut ships = Vec::with_capacity(keep.len());
    for ship in keep {
        let ship = ship.with_id(ShipId(ships.len()));
        place_ship(&mut board, &ship);
        ships.push(ship);
    }
    (board, ships)
}
