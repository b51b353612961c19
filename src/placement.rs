//! Validating and committing ships onto a [`Board`].

use crate::board::Board;
use crate::common::{Cell, FleetError, PlacementError};
use crate::ship::Ship;

/// Place `ship` on `board`.
///
/// Both checks run before any cell is written: a rejected ship leaves the board
/// untouched.
pub fn place(board: &mut Board, ship: &Ship) -> Result<(), PlacementError> {
    let (row, col) = ship.origin();
    log::debug!(
        "placing {} at ({},{}) - {}",
        ship.name(),
        row,
        col,
        ship.orientation()
    );
    let mask = match ship.footprint() {
        Ok(mask) => mask,
        Err(err) => {
            log::debug!("{} rejected: {}", ship.name(), err);
            return Err(err);
        }
    };
    // ensure no overlap
    if !(board.ship_map() & mask).is_empty() {
        log::debug!("{} rejected: overlaps another ship", ship.name());
        return Err(PlacementError::Overlap);
    }
    for (r, c) in mask.iter_set_bits() {
        board.set(r, c, Cell::Ship);
    }
    Ok(())
}

/// Place every ship in order, stopping at the first failure.
///
/// Ships placed before the failing one stay on the board. Returns the number of
/// ships placed.
pub fn place_fleet(board: &mut Board, ships: &[Ship]) -> Result<usize, FleetError> {
    for (index, ship) in ships.iter().enumerate() {
        place(board, ship).map_err(|reason| FleetError {
            index,
            ship: ship.name(),
            reason,
        })?;
    }
    Ok(ships.len())
}
