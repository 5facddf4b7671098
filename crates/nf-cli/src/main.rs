//! Terminal frontend for the Nightfall survival game.

mod commands;
mod render;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "nightfall",
    about = "Nightfall, a turn-based zombie survival game",
    version,
    propagate_version = true
)]
struct Cli {
    /// Print diagnostics to stderr (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively, one command per line
    Play {
        /// RNG seed (overrides the config file)
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print a generated world map and its settlements
    Map {
        /// RNG seed
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Map width in cells
        #[arg(long, default_value = "64")]
        width: i32,

        /// Map height in cells
        #[arg(long, default_value = "48")]
        height: i32,
    },

    /// Print the floors of a generated building
    Interior {
        /// Building type (e.g. house, pharmacy, police-station)
        kind: String,

        /// RNG seed
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },

    /// Run a scripted survivor and summarise how it fared
    Simulate {
        /// Turns to play
        #[arg(short, long, default_value = "200")]
        turns: u32,

        /// RNG seed (overrides the config file)
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the whole message log
        #[arg(long)]
        log: bool,
    },

    /// Print the starting game state as JSON
    Snapshot {
        /// RNG seed (overrides the config file)
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Play { seed, config } => commands::play::run(seed, config.as_deref()),
        Commands::Map {
            seed,
            width,
            height,
        } => commands::map::run(seed, width, height),
        Commands::Interior { kind, seed } => commands::interior::run(&kind, seed),
        Commands::Simulate {
            turns,
            seed,
            config,
            log,
        } => commands::simulate::run(turns, seed, config.as_deref(), log),
        Commands::Snapshot { seed, config } => commands::snapshot::run(seed, config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
