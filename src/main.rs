use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use terminal_worm::config::{
    DEFAULT_GRID_EXTENT, GameConfig, MAX_GRID_EXTENT, MIN_GRID_EXTENT, THEME_CLASSIC,
};
use terminal_worm::error::GameError;
use terminal_worm::game::{Engine, HighScoreStore, Presenter};
use terminal_worm::input::{GameInput, poll_input};
use terminal_worm::presenter::TerminalPresenter;
use terminal_worm::score::JsonScoreStore;
use terminal_worm::terminal_runtime::{TerminalSession, install_panic_hook};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Input poll timeout while no tick timer is armed.
const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Cells per side of the square board.
    #[arg(
        long = "grid-extent",
        default_value_t = DEFAULT_GRID_EXTENT,
        value_parser = clap::value_parser!(u16)
            .range(i64::from(MIN_GRID_EXTENT)..=i64::from(MAX_GRID_EXTENT))
    )]
    grid_extent: u16,

    /// Seed for food placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// High score file (defaults to the per-user data directory).
    #[arg(long = "scores-file")]
    scores_file: Option<PathBuf>,

    /// Append diagnostic logs to this file. Filter with `RUST_LOG`.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), GameError> {
    let cli = Cli::parse();

    if let Some(path) = cli.log_file.as_deref() {
        init_tracing(path)?;
    }

    let config = GameConfig::with_grid_extent(cli.grid_extent);
    config.validate()?;

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let store = cli
        .scores_file
        .map_or_else(JsonScoreStore::at_default_location, JsonScoreStore::new);

    info!(
        grid_extent = config.grid_extent,
        seed = ?cli.seed,
        scores_file = %store.path().display(),
        "starting terminal-worm"
    );

    install_panic_hook();

    let session = TerminalSession::enter()?;
    let presenter = TerminalPresenter::new(session, &THEME_CLASSIC);
    let mut engine = Engine::new(config, rng, presenter, store)?;

    run(&mut engine)
}

fn run<P: Presenter, S: HighScoreStore>(engine: &mut Engine<P, S>) -> Result<(), GameError> {
    engine.present()?;

    loop {
        let timeout = engine.next_deadline().map_or(IDLE_POLL_INTERVAL, |deadline| {
            deadline.saturating_duration_since(Instant::now())
        });

        if let Some(input) = poll_input(timeout)? {
            if input == GameInput::Quit {
                break;
            }

            engine.handle_input(input, Instant::now())?;
        }

        engine.on_timer(Instant::now())?;
    }

    info!(high_score = engine.high_score(), "exiting");
    Ok(())
}

fn init_tracing(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
