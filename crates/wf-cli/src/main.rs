//! CLI frontend for the Wayfarer interactive fiction engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use commands::RuleArgs;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_WORLD: &str = "worlds/campus.json";

#[derive(Parser)]
#[command(
    name = "wf",
    about = "Wayfarer: a small deterministic interactive fiction engine",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine activity to stderr (overrides RUST_LOG)
    #[arg(short = 'v', long = "debug", global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively on stdin/stdout
    Play {
        /// World data file (JSON)
        #[arg(short, long, default_value = DEFAULT_WORLD)]
        world: PathBuf,

        /// ID of the starting location
        #[arg(short, long, default_value = "0")]
        start: u32,

        #[command(flatten)]
        rules: RuleArgs,
    },

    /// Replay a command script and report the outcome
    Simulate {
        /// Script file: one command per line, or a JSON array
        #[arg(long)]
        script: PathBuf,

        /// World data file (JSON)
        #[arg(short, long, default_value = DEFAULT_WORLD)]
        world: PathBuf,

        /// ID of the starting location
        #[arg(short, long, default_value = "0")]
        start: u32,

        #[command(flatten)]
        rules: RuleArgs,

        /// Print every command with its response
        #[arg(long)]
        verbose: bool,

        /// Emit a JSON report instead of text
        #[arg(long)]
        json: bool,
    },

    /// Validate a world file and list its locations
    Check {
        /// World data file (JSON)
        #[arg(short, long, default_value = DEFAULT_WORLD)]
        world: PathBuf,
    },
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into())
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let result = match cli.command {
        Commands::Play {
            world,
            start,
            rules,
        } => commands::play::run(&world, start, &rules),
        Commands::Simulate {
            script,
            world,
            start,
            rules,
            verbose,
            json,
        } => commands::simulate::run(&world, &script, start, &rules, verbose, json),
        Commands::Check { world } => commands::check::run(&world),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
