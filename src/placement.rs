//! Ship placement: validate-and-commit, cancel, and random placement.

use rand::Rng;

use crate::common::{Coordinate, GameError, PlacementOutcome};
use crate::grid::{CellState, Grid};
use crate::ship::{Orientation, Ship};

/// Attempts before random placement gives up on a crowded board.
const RANDOM_ATTEMPTS: usize = 100;

/// Coordinates a ship of `length` would occupy from `anchor` along
/// `orientation`, or `None` when the run leaves the `[0, size)` square.
fn span(
    anchor: Coordinate,
    orientation: Orientation,
    length: usize,
    size: usize,
) -> Option<Vec<Coordinate>> {
    let mut coords = Vec::with_capacity(length);
    for step in 0..length {
        let c = match orientation {
            Orientation::Horizontal => Coordinate::new(anchor.row, anchor.col + step),
            Orientation::Vertical => Coordinate::new(anchor.row + step, anchor.col),
        };
        if !c.in_bounds(size) {
            return None;
        }
        coords.push(c);
    }
    Some(coords)
}

/// Validate and commit a placement. `Invalid` (a coordinate out of bounds or
/// a non-empty target cell) leaves the grid and ship untouched so the caller
/// can retry with new input.
pub fn try_place(
    ship: &mut Ship,
    anchor: Coordinate,
    orientation: Orientation,
    grid: &mut Grid,
) -> Result<PlacementOutcome, GameError> {
    if ship.is_placed() {
        return Err(GameError::AlreadyPlaced);
    }
    let coords = match span(anchor, orientation, ship.length(), grid.size()) {
        Some(coords) => coords,
        None => return Ok(PlacementOutcome::Invalid),
    };
    for &c in &coords {
        if grid.get(c)? != CellState::Empty {
            return Ok(PlacementOutcome::Invalid);
        }
    }
    for &c in &coords {
        grid.set(c, CellState::Occupied)?;
    }
    ship.assign(coords);
    Ok(PlacementOutcome::Valid)
}

/// Revert a just-confirmed placement: cells back to `Empty`, coordinate list
/// cleared. Calling this on an unplaced ship is a programming error.
pub fn cancel(ship: &mut Ship, grid: &mut Grid) -> Result<(), GameError> {
    if !ship.is_placed() {
        return Err(GameError::NotPlaced);
    }
    for &c in ship.coordinates() {
        grid.set(c, CellState::Empty)?;
    }
    ship.clear();
    Ok(())
}

/// Place a ship at a random valid anchor and orientation. Backs the
/// empty-input-places-randomly flow during setup.
pub fn random_place<R: Rng>(ship: &mut Ship, grid: &mut Grid, rng: &mut R) -> Result<(), GameError> {
    if ship.is_placed() {
        return Err(GameError::AlreadyPlaced);
    }
    for _ in 0..RANDOM_ATTEMPTS {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let anchor = Coordinate::new(
            rng.random_range(0..grid.size()),
            rng.random_range(0..grid.size()),
        );
        if try_place(ship, anchor, orientation, grid)? == PlacementOutcome::Valid {
            return Ok(());
        }
    }
    Err(GameError::UnableToPlace)
}
