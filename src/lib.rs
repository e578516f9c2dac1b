//! Two-player console battleship with resumable sessions.
//!
//! The core engine (grids, fleets, placement, combat, snapshots) is pure
//! and synchronous. The interactive loop talks to two small collaborator
//! traits, [`console::Console`] for prompts and [`session::SessionStore`]
//! for persistence, so a whole match can be scripted in tests.

pub mod app;
pub mod combat;
pub mod common;
pub mod config;
pub mod console;
pub mod game;
pub mod grid;
pub mod logging;
pub mod placement;
pub mod player;
pub mod render;
pub mod session;
pub mod ship;

pub use app::App;
pub use common::{Coordinate, FireOutcome, GameError, PlacementOutcome, ShotResult};
pub use config::{fleet_for_size, DEFAULT_FLEET, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use console::{ask_coordinate, ask_coordinate_or_empty, Console, ScriptedConsole, StdConsole};
pub use game::MatchState;
pub use grid::{CellState, Grid};
pub use logging::init_logging;
pub use player::Player;
pub use render::{cell_glyph, column_label, render_grid};
pub use session::{FileStore, MemoryStore, SessionError, SessionStore};
pub use ship::{Fleet, Orientation, Ship};
