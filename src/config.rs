//! Board-size limits and the fleet composition table.

/// Smallest playable board.
pub const MIN_BOARD_SIZE: usize = 2;
/// Largest board addressable by the `L:D` coordinate form (rows 0-9,
/// columns A-J).
pub const MAX_BOARD_SIZE: usize = 10;
/// Fleet used for board sizes without a dedicated entry.
pub const DEFAULT_FLEET: &[usize] = &[4, 4];

/// Ship lengths for a given board size. The composition is fixed for the
/// whole match once the board size is chosen.
pub fn fleet_for_size(size: usize) -> &'static [usize] {
    match size {
        2 => &[1],
        3 => &[2, 1],
        4 => &[2, 2, 1],
        5 => &[3, 2, 1],
        6 => &[3, 2, 2, 1],
        7 => &[3, 3, 2, 2],
        8 => &[4, 3, 2, 2],
        9 => &[4, 3, 3, 2],
        _ => DEFAULT_FLEET,
    }
}
