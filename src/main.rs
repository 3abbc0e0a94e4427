use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use connect_four_arena::ai::AnyAgent;
use connect_four_arena::arena::{Arena, Tally};
use connect_four_arena::config::AppConfig;
use connect_four_arena::game::Player;

/// Play Connect Four games between automated agents and tally the results.
#[derive(Parser)]
#[command(name = "connect-four-arena", about = "Connect Four agent arena")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "arena.toml")]
    config: PathBuf,

    /// Number of games to play
    #[arg(long)]
    trials: Option<usize>,

    /// Print the board after every move
    #[arg(long)]
    visualize: bool,

    /// RNG seed for all agents
    #[arg(long)]
    seed: Option<u64>,

    /// Search depth for minimax agents
    #[arg(long)]
    depth: Option<usize>,

    /// Print the tally as JSON
    #[arg(long)]
    json: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(cli.log_level);

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(trials) = cli.trials {
        config.arena.trials = trials;
    }
    if cli.visualize {
        config.arena.visualize = true;
    }
    if cli.seed.is_some() {
        config.arena.seed = cli.seed;
    }
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    config.validate().context("invalid configuration")?;

    let mut master = match config.arena.seed {
        Some(seed) => {
            info!(seed, "seeding agents");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };
    let yellow = AnyAgent::build(config.players.yellow, &config.search, StdRng::from_rng(&mut master));
    let red = AnyAgent::build(config.players.red, &config.search, StdRng::from_rng(&mut master));

    let mut arena = Arena::new(Box::new(red), Box::new(yellow))
        .with_visualization(config.arena.visualize);

    if config.arena.trials == 1 && !cli.json {
        let record = arena.play_game().context("playing game")?;
        println!("Game result: {}", record.status);
        return Ok(());
    }

    let tally = arena
        .run_trials(config.arena.trials)
        .context("running trials")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
    } else {
        print_result_line(&tally, config.arena.hero);
    }

    Ok(())
}

fn print_result_line(tally: &Tally, hero: Player) {
    println!(
        "Wins: {} Losses: {} Draws: {}",
        tally.wins(hero),
        tally.losses(hero),
        tally.draws()
    );
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
