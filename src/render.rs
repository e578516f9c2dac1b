//! Character-grid rendering with row and column labels. Never mutates state.

use crossterm::style::Stylize;

use crate::grid::{CellState, Grid};

/// Plain glyph for a cell state; color is layered on top at render time.
pub fn cell_glyph(state: CellState) -> char {
    match state {
        CellState::Empty => ' ',
        CellState::Occupied => '█',
        CellState::Hit => 'X',
        CellState::Miss => 'O',
    }
}

/// Letter label for a column index.
pub fn column_label(col: usize) -> char {
    (b'A' + col as u8) as char
}

/// Render a grid as a labelled character matrix: `A..` column headers,
/// digit row labels, one glyph per cell. Hits are highlighted.
pub fn render_grid(grid: &Grid) -> String {
    let mut out = String::new();

    let mut header = String::from(" |");
    for col in 0..grid.size() {
        header.push(column_label(col));
        header.push('|');
    }
    out.push_str(&format!("{}\n", header.green().on_white()));

    for (row, cells) in grid.rows().enumerate() {
        out.push_str(&format!("{}", format!("{}|", row).green().on_white()));
        for &cell in cells {
            match cell {
                CellState::Hit => out.push_str(&format!("{}", cell_glyph(cell).red())),
                _ => out.push(cell_glyph(cell)),
            }
            out.push('|');
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Coordinate;

    #[test]
    fn glyphs_are_distinct_per_state() {
        let states = [
            CellState::Empty,
            CellState::Occupied,
            CellState::Hit,
            CellState::Miss,
        ];
        for a in states {
            for b in states {
                if a != b {
                    assert_ne!(cell_glyph(a), cell_glyph(b));
                }
            }
        }
    }

    #[test]
    fn rendering_labels_every_row_and_column() {
        let grid = Grid::new(4);
        let out = render_grid(&grid);
        assert_eq!(out.lines().count(), 5);
        for label in ["A", "B", "C", "D", "0|", "3|"] {
            assert!(out.contains(label), "missing {:?}", label);
        }
        assert!(!out.contains('E'));
    }

    #[test]
    fn rendering_shows_each_state_and_leaves_the_grid_alone() {
        let mut grid = Grid::new(3);
        grid.set(Coordinate::new(0, 0), CellState::Occupied).unwrap();
        grid.set(Coordinate::new(1, 1), CellState::Hit).unwrap();
        grid.set(Coordinate::new(2, 2), CellState::Miss).unwrap();
        let before = grid.clone();

        let out = render_grid(&grid);
        assert!(out.contains('█'));
        assert!(out.contains('X'));
        assert!(out.contains('O'));
        assert_eq!(grid, before);
    }
}
