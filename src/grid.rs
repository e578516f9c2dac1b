//! Bounds-checked square grid of cell states. Owns no game rules.

use serde::{Deserialize, Serialize};

use crate::common::{Coordinate, GameError};

/// State of a single board cell. This enum is the single source of truth;
/// glyphs and colors are derived from it at render time only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    /// Open water, never shot at.
    Empty,
    /// An un-hit ship segment.
    Occupied,
    /// A ship segment that was shot.
    Hit,
    /// Open water that was shot.
    Miss,
}

/// A `size`×`size` matrix of cell states, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// All-`Empty` square grid.
    pub fn new(size: usize) -> Self {
        Grid {
            size,
            cells: vec![CellState::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, at: Coordinate) -> Result<usize, GameError> {
        if !at.in_bounds(self.size) {
            return Err(GameError::OutOfBounds {
                row: at.row,
                col: at.col,
            });
        }
        Ok(at.row * self.size + at.col)
    }

    /// Cell state at `at`, or `OutOfBounds`.
    pub fn get(&self, at: Coordinate) -> Result<CellState, GameError> {
        Ok(self.cells[self.index(at)?])
    }

    /// Overwrite the cell at `at`, or `OutOfBounds`.
    pub fn set(&mut self, at: Coordinate, state: CellState) -> Result<(), GameError> {
        let idx = self.index(at)?;
        self.cells[idx] = state;
        Ok(())
    }

    /// Iterate rows of cell states, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.size)
    }
}
