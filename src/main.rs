use std::path::PathBuf;

use anyhow::Context;
use battleship_solo::{
    init_logging, play, CliPresenter, GameSession, GridLayout, PlayEnd, StatisticsStore,
    DEFAULT_STATS_FILE, NUM_SHIPS, TURN_LIMIT,
};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value = DEFAULT_STATS_FILE, help = "Statistics file to load and update")]
    stats: PathBuf,
    #[arg(long, help = "Fix RNG seed for reproducible ship placement (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Create a zeroed statistics file if it does not exist")]
    init: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let store = StatisticsStore::new(cli.stats);
    if cli.init && store.init()? {
        println!("Created {}", store.path().display());
    }
    let mut stats = store.load().with_context(|| {
        format!(
            "cannot start without statistics from {}",
            store.path().display()
        )
    })?;

    let mut rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (ship placement will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    println!(
        "Battleship: find {} hidden ships within {} turns.",
        NUM_SHIPS, TURN_LIMIT
    );
    let mut session = GameSession::new(&mut rng);
    let mut presenter = CliPresenter::stdio();
    let report = play(
        &mut session,
        &mut stats,
        &mut presenter,
        &GridLayout::default(),
        &mut rng,
    )?;
    match report.end {
        PlayEnd::Declined => println!("Thanks for playing!"),
        PlayEnd::Closed => println!("Goodbye."),
    }
    log::info!("{} game(s) finished this session", report.games);

    if let Err(e) = store.save(&stats) {
        log::error!("An unexpected error occurred while updating the file: {}", e);
    }
    Ok(())
}
