//! Ships and fleets: placement status and derived destruction checks.

use serde::{Deserialize, Serialize};

use crate::common::Coordinate;
use crate::grid::{CellState, Grid};

/// Axis a ship extends along from its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Menu labels offered during setup, in presentation order.
    pub const LABELS: [&'static str; 2] = ["Horizontal", "Vertical"];

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Horizontal" => Some(Orientation::Horizontal),
            "Vertical" => Some(Orientation::Vertical),
            _ => None,
        }
    }
}

/// A single ship: fixed length, coordinates assigned at placement time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    length: usize,
    coordinates: Vec<Coordinate>,
}

impl Ship {
    /// Unplaced ship of the given length.
    pub fn new(length: usize) -> Self {
        debug_assert!(length > 0);
        Ship {
            length,
            coordinates: Vec::new(),
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Occupied coordinates, empty until placed.
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    pub fn is_placed(&self) -> bool {
        self.coordinates.len() == self.length
    }

    /// Destroyed when placed and every segment reads `Hit` on the owner's
    /// board. Derived on demand, never stored.
    pub fn is_destroyed(&self, board: &Grid) -> bool {
        self.is_placed()
            && self
                .coordinates
                .iter()
                .all(|&c| board.get(c) == Ok(CellState::Hit))
    }

    pub(crate) fn assign(&mut self, coordinates: Vec<Coordinate>) {
        self.coordinates = coordinates;
    }

    pub(crate) fn clear(&mut self) {
        self.coordinates.clear();
    }
}

/// One player's full set of ships. Composition is fixed at construction and
/// never changes for the duration of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    /// Build an unplaced fleet from a list of ship lengths.
    pub fn from_lengths(lengths: &[usize]) -> Self {
        Fleet {
            ships: lengths.iter().map(|&len| Ship::new(len)).collect(),
        }
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ships_mut(&mut self) -> &mut [Ship] {
        &mut self.ships
    }

    /// Every ship has its full coordinate run assigned.
    pub fn fully_placed(&self) -> bool {
        self.ships.iter().all(Ship::is_placed)
    }

    /// Every ship is destroyed on the owner's board: the match is over.
    pub fn is_destroyed(&self, board: &Grid) -> bool {
        self.ships.iter().all(|ship| ship.is_destroyed(board))
    }
}
