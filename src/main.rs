use std::path::PathBuf;

use battlegrid::{init_logging, App, FileStore, StdConsole};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path of the session store file (also read from BATTLEGRID_STORE).
    #[arg(long)]
    store: Option<PathBuf>,
    /// Fix the RNG seed for reproducible random placements (e.g., --seed 12345).
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let store_path = cli
        .store
        .or_else(|| std::env::var_os("BATTLEGRID_STORE").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("battlegrid-sessions.json"));

    let rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let mut app = App::new(StdConsole::stdin(), FileStore::new(store_path), rng);
    app.run()
}
