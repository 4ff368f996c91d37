use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use simon_says::catalog;
use simon_says::console::Terminal;
use simon_says::core::{GameConfig, GameRng, DEFAULT_CATALOG_PATH};
use simon_says::rules::SimonRules;
use simon_says::session::{self, Session};

#[derive(Parser)]
#[command(
    name = "simon-says",
    about = "Play Simon Says: only do what Simon says",
    version
)]
struct Cli {
    /// Action list, one per line
    #[arg(long, env = "SIMON_ACTIONS", default_value = DEFAULT_CATALOG_PATH)]
    actions: PathBuf,

    /// Seed for a reproducible game (default: from the clock)
    #[arg(long, env = "SIMON_SEED")]
    seed: Option<u64>,

    /// Player name (skips the name prompt)
    #[arg(long)]
    name: Option<String>,

    /// Decoy name that may prefix an unauthorized command (up to two)
    #[arg(long = "decoy", value_name = "NAME")]
    decoys: Vec<String>,

    /// Increase log verbosity (-v info, -vv debug). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = GameConfig::new().with_catalog_path(&cli.actions);
    if !cli.decoys.is_empty() {
        config = config.with_decoys(cli.decoys);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    config.validate()?;

    let catalog = catalog::load(&config.catalog_path).context("Error loading actions")?;

    let mut rng = match config.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_clock(),
    };
    tracing::info!(seed = rng.seed(), "rng seeded");

    let mut term = Terminal::stdio();
    let player = match cli.name {
        Some(name) => {
            session::greet(&mut term, &name)?;
            name
        }
        None => session::welcome(&mut term)?,
    };

    let rules = SimonRules::new(config, catalog, player)?;
    Session::new(rules).run(&mut rng, &mut term)?;
    Ok(())
}
