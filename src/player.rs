//! A player: name, true board, observed view of the enemy, and fleet.

use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::ship::Fleet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    /// The player's own board: `Empty`/`Occupied`/`Hit`, plus `Miss` where
    /// the opponent shot open water.
    pub board: Grid,
    /// What this player knows about the opponent: hits and misses only,
    /// never `Occupied`.
    pub enemy_board: Grid,
    pub fleet: Fleet,
}

impl Player {
    /// Fresh player with an unplaced fleet built from `ship_lengths`.
    pub fn new(name: impl Into<String>, board_size: usize, ship_lengths: &[usize]) -> Self {
        Player {
            name: name.into(),
            board: Grid::new(board_size),
            enemy_board: Grid::new(board_size),
            fleet: Fleet::from_lengths(ship_lengths),
        }
    }
}
