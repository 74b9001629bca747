//! Attack resolution against a board and its fleet.

use crate::board::{Board, CellState};
use crate::common::{AttackResult, BoardError, Position};
use crate::ship::Ship;

/// `true` only for on-board cells not yet resolved by an attack.
pub fn is_valid_attack(board: &Board, pos: Position) -> bool {
    board.is_untargeted(pos)
}

/// Resolve an attack at `pos`.
///
/// Water becomes `Miss`. A ship cell becomes `Hit` and bumps the ship's hit
/// counter; when the counter reaches the ship's length the ship is sunk and
/// every one of its cells is rewritten to `Sunk`. Attacking a resolved cell
/// is an error and changes nothing.
pub fn process_attack(
    board: &mut Board,
    ships: &mut [Ship],
    pos: Position,
) -> Result<AttackResult, BoardError> {
    let cell = board.get(pos).ok_or(BoardError::OutOfBounds(pos))?;
    if cell.state().is_attacked() {
        return Err(BoardError::AlreadyAttacked(pos));
    }

    let Some(id) = cell.ship() else {
        if let Some(cell) = board.get_mut(pos) {
            cell.set_state(CellState::Miss);
        }
        return Ok(AttackResult::Miss);
    };

    let ship = ships
        .iter_mut()
        .find(|s| s.id() == id)
        .ok_or(BoardError::UnknownShipHit(id))?;
    if let Some(cell) = board.get_mut(pos) {
        cell.set_state(CellState::Hit);
    }

    let class = ship.class();
    if ship.register_hit() {
        mark_sunk(board, ship);
        return Ok(AttackResult::Sunk { ship: id, class });
    }
    Ok(AttackResult::Hit { ship: id, class })
}

fn mark_sunk(board: &mut Board, ship: &Ship) {
    for pos in ship.cells() {
        if let Some(cell) = board.get_mut(pos) {
            cell.set_state(CellState::Sunk);
        }
    }
}
