//! Interactive session loop: main menu, setup phase, and the turn cycle.
//!
//! The loop is a plain finite-state walk: the current `MatchState` and
//! session title are passed explicitly between phases, never held in
//! ambient state.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use rand::rngs::SmallRng;

use crate::combat;
use crate::common::{FireOutcome, GameError, PlacementOutcome, ShotResult};
use crate::config::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::console::{ask_coordinate, ask_coordinate_or_empty, Console};
use crate::game::MatchState;
use crate::placement;
use crate::player::Player;
use crate::render::render_grid;
use crate::session::{self, SessionError, SessionStore, TITLE_REGISTRY_KEY};
use crate::ship::Orientation;

const MAIN_MENU: [&str; 3] = ["New game", "Continue game", "Exit"];
const TITLE_MENU: [&str; 2] = ["Overwrite it", "Pick another name"];
const CONFIRM_MENU: [&str; 2] = ["Confirm position", "Cancel position"];
const TURN_MENU: [&str; 2] = ["Show my board", "Attack the enemy"];
const BACK_TO_MENU: &str = "Back to main menu";

/// The interactive application: owns the prompt collaborator, the session
/// store, and the RNG used for random placement.
pub struct App<C, S> {
    console: C,
    store: S,
    rng: SmallRng,
}

impl<C: Console, S: SessionStore> App<C, S> {
    pub fn new(console: C, store: S, rng: SmallRng) -> Self {
        App { console, store, rng }
    }

    /// Main menu loop; returns when the user exits.
    pub fn run(&mut self) -> Result<()> {
        loop {
            println!("\n== BATTLEGRID ==");
            match self.console.ask_choice("Main Menu", &MAIN_MENU)?.as_str() {
                "New game" => self.new_game()?,
                "Continue game" => self.continue_game()?,
                _ => break,
            }
        }
        Ok(())
    }

    fn new_game(&mut self) -> Result<()> {
        let title = self.choose_title()?;
        let size = self.ask_board_size()?;
        let name1 = self.ask_name("Enter the name of player 1:")?;
        let name2 = self.ask_name("Enter the name of player 2:")?;

        let mut m = MatchState::new(size, name1, name2);
        info!("new match '{}' on a {}x{} board", title, size, size);

        self.place_fleet(&mut m.player1)?;
        self.place_fleet(&mut m.player2)?;
        self.play(&title, m)
    }

    /// Ask for a session title, resolving collisions with existing saved
    /// games and registering it (evicting the oldest past the cap).
    fn choose_title(&mut self) -> Result<String> {
        loop {
            let title = self.console.ask_text("Enter a title for this game:")?;
            if title.is_empty() || title == TITLE_REGISTRY_KEY {
                println!("That title cannot be used. Pick another one.");
                continue;
            }
            let existing = session::titles(&self.store)?;
            if existing.iter().any(|t| t == &title) {
                let choice = self
                    .console
                    .ask_choice("A game with this title already exists. What now?", &TITLE_MENU)?;
                if choice == "Pick another name" {
                    continue;
                }
                self.store
                    .delete(&title)
                    .context("clearing the overwritten session")?;
            }
            session::register_title(&mut self.store, &title)
                .context("registering the session title")?;
            return Ok(title);
        }
    }

    fn ask_board_size(&mut self) -> Result<usize> {
        let prompt = format!(
            "Enter the board size ({}-{}):",
            MIN_BOARD_SIZE, MAX_BOARD_SIZE
        );
        loop {
            match self.console.ask_text(&prompt)?.parse::<usize>() {
                Ok(n) if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&n) => return Ok(n),
                _ => println!(
                    "The size must be a number between {} and {}.",
                    MIN_BOARD_SIZE, MAX_BOARD_SIZE
                ),
            }
        }
    }

    fn ask_name(&mut self, prompt: &str) -> Result<String> {
        loop {
            let name = self.console.ask_text(prompt)?;
            if !name.is_empty() {
                return Ok(name);
            }
            println!("Please enter a name.");
        }
    }

    /// Setup phase for one player: place every ship, with one
    /// cancel-and-retry window after each confirmed placement.
    fn place_fleet(&mut self, player: &mut Player) -> Result<()> {
        println!("\n{}, place your ships on the board:", player.name);
        let size = player.board.size();
        for i in 0..player.fleet.ships().len() {
            loop {
                println!("{}", render_grid(&player.board));
                let prompt = format!(
                    "{}, enter the anchor for your ship of length {} (e.g. A:1, empty for random):",
                    player.name,
                    player.fleet.ships()[i].length()
                );
                let outcome = match ask_coordinate_or_empty(&mut self.console, &prompt, size)? {
                    None => match placement::random_place(
                        &mut player.fleet.ships_mut()[i],
                        &mut player.board,
                        &mut self.rng,
                    ) {
                        Ok(()) => PlacementOutcome::Valid,
                        Err(GameError::UnableToPlace) => {
                            println!("No room left for a random placement here.");
                            continue;
                        }
                        Err(e) => return Err(e.into()),
                    },
                    Some(anchor) => {
                        let choice = self
                            .console
                            .ask_choice("Select orientation:", &Orientation::LABELS)?;
                        let orientation =
                            Orientation::from_label(&choice).unwrap_or(Orientation::Horizontal);
                        placement::try_place(
                            &mut player.fleet.ships_mut()[i],
                            anchor,
                            orientation,
                            &mut player.board,
                        )?
                    }
                };
                if outcome == PlacementOutcome::Invalid {
                    println!("That placement does not fit. Try again.");
                    continue;
                }
                println!("{}", render_grid(&player.board));
                let confirm = self.console.ask_choice("Keep this placement?", &CONFIRM_MENU)?;
                if confirm == "Cancel position" {
                    placement::cancel(&mut player.fleet.ships_mut()[i], &mut player.board)?;
                    continue;
                }
                break;
            }
        }
        Ok(())
    }

    /// Turn cycle. `m.player1` always acts; after every non-terminal turn the
    /// players swap and the snapshot is written, so a restored match resumes
    /// with the right player on the move.
    fn play(&mut self, title: &str, mut m: MatchState) -> Result<()> {
        debug_assert!(m.ready());
        loop {
            let action = self.console.ask_choice(
                &format!("{}, what do you want to do?", m.player1.name),
                &TURN_MENU,
            )?;
            if action == "Show my board" {
                println!("\nYour board:");
                println!("{}", render_grid(&m.player1.board));
                self.wait_for_enter("Press enter to continue...")?;
            }

            let outcome = self.take_shot(&mut m)?;
            println!("{}", render_grid(&m.player1.enemy_board));
            match outcome.result {
                ShotResult::Hit => println!("Hit!"),
                ShotResult::Miss => println!("Miss!"),
            }

            if outcome.game_over {
                println!("\n{}", render_grid(&m.player2.board));
                println!("{} wins!", m.player1.name);
                info!("match '{}' won by {}", title, m.player1.name);
                self.store
                    .delete(title)
                    .context("deleting the finished session")?;
                session::remove_title(&mut self.store, title)
                    .context("deregistering the finished session")?;
                self.wait_for_enter("Press enter to return to the main menu...")?;
                return Ok(());
            }

            self.wait_for_enter("Press enter to hand over the keyboard...")?;
            m.swap_turn();
            let snapshot = m.snapshot()?;
            self.store
                .set(title, &snapshot)
                .context("saving the session snapshot")?;
            debug!("saved snapshot for '{}'", title);
        }
    }

    /// Prompt until `fire` accepts the target; already-resolved cells
    /// re-prompt instead of wasting the turn.
    fn take_shot(&mut self, m: &mut MatchState) -> Result<FireOutcome> {
        println!("\n{}'s turn:", m.player1.name);
        println!("{}", render_grid(&m.player1.enemy_board));
        let size = m.board_size;
        let prompt = format!(
            "{}, enter the coordinates for your shot (e.g. A:1 or B:2):",
            m.player1.name
        );
        loop {
            let target = ask_coordinate(&mut self.console, &prompt, size)?;
            match combat::fire(&mut m.player1, &mut m.player2, target) {
                Ok(outcome) => return Ok(outcome),
                Err(GameError::AlreadyTargeted { .. }) => {
                    println!("You already fired at {}. Pick a new target.", target);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn continue_game(&mut self) -> Result<()> {
        let titles = session::titles(&self.store)?;
        if titles.is_empty() {
            println!("No saved games yet.");
            return Ok(());
        }
        let mut options: Vec<&str> = titles.iter().map(String::as_str).collect();
        options.push(BACK_TO_MENU);
        let choice = self
            .console
            .ask_choice("Select a game to continue:", &options)?;
        if choice == BACK_TO_MENU {
            return Ok(());
        }

        let m = match session::load_snapshot(&self.store, &choice) {
            Ok(text) => match MatchState::restore(&text) {
                Ok(m) => m,
                Err(e) => {
                    warn!("snapshot for '{}' is unreadable: {}", choice, e);
                    println!("Something is wrong with this game session.");
                    return Ok(());
                }
            },
            Err(SessionError::NotFound(_)) => {
                println!("Something is wrong with this game session.");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        info!("resuming match '{}'", choice);
        self.play(&choice, m)
    }

    fn wait_for_enter(&mut self, prompt: &str) -> Result<()> {
        self.console.ask_text(prompt)?;
        Ok(())
    }
}
