//! Shot resolution against the defender's board, with win detection.

use crate::common::{Coordinate, FireOutcome, GameError, ShotResult};
use crate::grid::CellState;
use crate::player::Player;

/// Resolve one shot from `attacker` against `defender` at `target`.
///
/// Marks the defender's true board and the attacker's observed view, then
/// checks whether the defender's fleet is fully destroyed; when it is, the
/// attacker has won. Re-firing at a resolved cell is rejected with
/// `AlreadyTargeted` and changes nothing, so a repeated shot never consumes
/// the turn.
pub fn fire(
    attacker: &mut Player,
    defender: &mut Player,
    target: Coordinate,
) -> Result<FireOutcome, GameError> {
    let result = match defender.board.get(target)? {
        CellState::Hit | CellState::Miss => {
            return Err(GameError::AlreadyTargeted {
                row: target.row,
                col: target.col,
            })
        }
        CellState::Occupied => {
            defender.board.set(target, CellState::Hit)?;
            attacker.enemy_board.set(target, CellState::Hit)?;
            ShotResult::Hit
        }
        CellState::Empty => {
            defender.board.set(target, CellState::Miss)?;
            attacker.enemy_board.set(target, CellState::Miss)?;
            ShotResult::Miss
        }
    };
    let game_over = defender.fleet.is_destroyed(&defender.board);
    Ok(FireOutcome { result, game_over })
}
