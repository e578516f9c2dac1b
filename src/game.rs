//! Match state: the serializable unit that suspends and resumes a game.

use std::mem;

use serde::{Deserialize, Serialize};

use crate::config::fleet_for_size;
use crate::player::Player;
use crate::session::SessionError;

/// Both players plus the board size. `player1` is always the player about
/// to act, so a restored match resumes on the correct turn; [`swap_turn`]
/// maintains the convention after every resolved shot.
///
/// [`swap_turn`]: MatchState::swap_turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub board_size: usize,
    pub player1: Player,
    pub player2: Player,
}

impl MatchState {
    /// Fresh match with unplaced fleets for the configured board size.
    pub fn new(
        board_size: usize,
        player1_name: impl Into<String>,
        player2_name: impl Into<String>,
    ) -> Self {
        let lengths = fleet_for_size(board_size);
        MatchState {
            board_size,
            player1: Player::new(player1_name, board_size, lengths),
            player2: Player::new(player2_name, board_size, lengths),
        }
    }

    /// Both fleets fully placed; play may begin.
    pub fn ready(&self) -> bool {
        self.player1.fleet.fully_placed() && self.player2.fleet.fully_placed()
    }

    /// Hand the turn to the other player.
    pub fn swap_turn(&mut self) {
        mem::swap(&mut self.player1, &mut self.player2);
    }

    /// Serialize to the self-describing snapshot text.
    pub fn snapshot(&self) -> Result<String, SessionError> {
        serde_json::to_string(self).map_err(|e| SessionError::Corrupt(e.to_string()))
    }

    /// Rebuild a match from snapshot text. Grids come back cell by cell from
    /// the stored contents; nothing is re-derived from ship geometry, so the
    /// full hit/miss history survives.
    pub fn restore(snapshot: &str) -> Result<Self, SessionError> {
        serde_json::from_str(snapshot).map_err(|e| SessionError::Corrupt(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::fire;
    use crate::common::Coordinate;
    use crate::placement::try_place;
    use crate::ship::Orientation;
    use pretty_assertions::assert_eq;

    fn placed_match() -> MatchState {
        let mut m = MatchState::new(4, "Ann", "Bob");
        for player in [&mut m.player1, &mut m.player2] {
            let mut row = 0;
            for i in 0..player.fleet.ships().len() {
                try_place(
                    &mut player.fleet.ships_mut()[i],
                    Coordinate::new(row, 0),
                    Orientation::Horizontal,
                    &mut player.board,
                )
                .unwrap();
                row += 1;
            }
        }
        m
    }

    #[test]
    fn new_match_is_not_ready_until_fleets_are_placed() {
        let fresh = MatchState::new(4, "Ann", "Bob");
        assert!(!fresh.ready());
        assert!(placed_match().ready());
    }

    #[test]
    fn swap_turn_exchanges_the_players() {
        let mut m = placed_match();
        m.swap_turn();
        assert_eq!(m.player1.name, "Bob");
        assert_eq!(m.player2.name, "Ann");
    }

    #[test]
    fn snapshot_restores_to_an_identical_match() {
        let mut m = placed_match();
        fire(&mut m.player1, &mut m.player2, Coordinate::new(3, 3)).unwrap();
        fire(&mut m.player1, &mut m.player2, Coordinate::new(0, 0)).unwrap();

        let restored = MatchState::restore(&m.snapshot().unwrap()).unwrap();
        assert_eq!(restored, m);
    }

    #[test]
    fn restored_match_replays_fire_calls_identically() {
        let shots = [
            Coordinate::new(0, 0),
            Coordinate::new(2, 2),
            Coordinate::new(0, 1),
            Coordinate::new(1, 0),
        ];

        let mut original = placed_match();
        let mut restored =
            MatchState::restore(&original.snapshot().unwrap()).unwrap();

        for target in shots {
            let a = fire(&mut original.player1, &mut original.player2, target);
            let b = fire(&mut restored.player1, &mut restored.player2, target);
            assert_eq!(a, b, "diverged at {}", target);
        }
        assert_eq!(original, restored);
    }

    #[test]
    fn snapshot_text_is_self_describing() {
        let text = placed_match().snapshot().unwrap();
        for field in ["board_size", "player1", "player2", "fleet", "enemy_board", "name"] {
            assert!(text.contains(field), "missing field {:?}", field);
        }
    }

    #[test]
    fn garbage_snapshots_are_reported_corrupt() {
        assert!(matches!(
            MatchState::restore("not json at all"),
            Err(SessionError::Corrupt(_))
        ));
    }
}
