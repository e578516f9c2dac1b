//! Shared core types: coordinates, shot outcomes, and engine errors.

use core::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Matcher for textual coordinates: column letter, colon, row digit.
static COORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Ja-j]:[0-9]$").unwrap());

/// A zero-based (row, col) cell address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Coordinate { row, col }
    }

    /// Parse the `L:D` text form (e.g. `A:3`): the letter is the column,
    /// the digit is the row. Inputs outside the pattern yield `None`;
    /// board-size bounds are the caller's concern.
    pub fn parse(input: &str) -> Option<Self> {
        if !COORD_RE.is_match(input) {
            return None;
        }
        let mut chars = input.chars();
        let col_ch = chars.next()?.to_ascii_uppercase();
        chars.next();
        let row_ch = chars.next()?;
        Some(Coordinate {
            row: row_ch.to_digit(10)? as usize,
            col: (col_ch as u8 - b'A') as usize,
        })
    }

    /// Whether the coordinate lies on a `size`×`size` board.
    pub fn in_bounds(&self, size: usize) -> bool {
        self.row < size && self.col < size
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", (b'A' + self.col as u8) as char, self.row)
    }
}

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    Hit,
    Miss,
}

/// Outcome of one `fire` call. When `game_over` is set, the defender's
/// entire fleet is destroyed and the attacker has won the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FireOutcome {
    pub result: ShotResult,
    pub game_over: bool,
}

/// Outcome of a placement attempt. `Invalid` is expected, recoverable user
/// input; the caller re-prompts and retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementOutcome {
    Valid,
    Invalid,
}

/// Errors returned by core engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate outside the `[0, size)` square.
    OutOfBounds { row: usize, col: usize },
    /// Cell was already resolved to `Hit` or `Miss`.
    AlreadyTargeted { row: usize, col: usize },
    /// Attempted to place a ship that already has coordinates.
    AlreadyPlaced,
    /// Cancel called on a ship with no coordinates.
    NotPlaced,
    /// Random placement exhausted its attempt budget.
    UnableToPlace,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::OutOfBounds { row, col } => {
                write!(f, "coordinate ({}, {}) is outside the board", row, col)
            }
            GameError::AlreadyTargeted { row, col } => {
                write!(f, "cell ({}, {}) was already fired upon", row, col)
            }
            GameError::AlreadyPlaced => write!(f, "ship is already placed on the board"),
            GameError::NotPlaced => write!(f, "ship has no placement to cancel"),
            GameError::UnableToPlace => write!(f, "unable to find room for the ship"),
        }
    }
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_accepts_the_documented_form() {
        assert_eq!(Coordinate::parse("A:1"), Some(Coordinate::new(1, 0)));
        assert_eq!(Coordinate::parse("b:2"), Some(Coordinate::new(2, 1)));
        assert_eq!(Coordinate::parse("J:9"), Some(Coordinate::new(9, 9)));
    }

    #[test]
    fn parse_rejects_everything_else() {
        for input in ["", "A1", "A:10", "K:1", "1:A", "A:", ":1", "AA:1", " A:1"] {
            assert_eq!(Coordinate::parse(input), None, "input {:?}", input);
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        let coord = Coordinate::new(3, 2);
        assert_eq!(coord.to_string(), "C:3");
        assert_eq!(Coordinate::parse(&coord.to_string()), Some(coord));
    }

    #[test]
    fn in_bounds_checks_both_axes() {
        assert!(Coordinate::new(0, 0).in_bounds(1));
        assert!(!Coordinate::new(1, 0).in_bounds(1));
        assert!(!Coordinate::new(0, 1).in_bounds(1));
    }
}
