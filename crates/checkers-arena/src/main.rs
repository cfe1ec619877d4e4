//! Checkers arena - plays the search engine against itself.
//!
//! `checkers-arena play` runs one game with configurable search depths and
//! prints a summary (or JSON with `--json`). `checkers-arena perft` counts
//! move-tree leaves from the starting position. Logging goes to stderr and
//! is controlled by `RUST_LOG` (e.g. `RUST_LOG=info` to see every move).

mod config;
mod output;
mod runner;

use anyhow::Context;
use checkers_core::Side;
use checkers_engine::movegen::perft::{perft, perft_divide};
use checkers_engine::Board;
use clap::{Parser, Subcommand};
use config::ArenaConfig;
use runner::MatchRunner;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Checkers engine self-play and diagnostics.
#[derive(Parser)]
#[command(name = "checkers-arena")]
#[command(about = "Checkers engine self-play and diagnostics")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one game, engine against engine
    Play {
        /// Search depth for Dark
        #[arg(long)]
        dark_depth: Option<u32>,
        /// Search depth for Light
        #[arg(long)]
        light_depth: Option<u32>,
        /// Hops before the game is declared drawn
        #[arg(long)]
        max_plies: Option<usize>,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Count move-tree leaves from the starting position
    Perft {
        /// Depth in plies
        #[arg(short, long, default_value = "5")]
        depth: u32,
        /// Show the count below each root move
        #[arg(long)]
        divide: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            dark_depth,
            light_depth,
            max_plies,
            json,
        } => {
            let mut config = ArenaConfig::load(cli.config.as_deref()).context("loading arena config")?;
            if let Some(depth) = dark_depth {
                config.dark_depth = depth;
            }
            if let Some(depth) = light_depth {
                config.light_depth = depth;
            }
            if let Some(plies) = max_plies {
                config.max_plies = plies;
            }
            config.validate()?;

            tracing::info!(
                dark_depth = config.dark_depth,
                light_depth = config.light_depth,
                max_plies = config.max_plies,
                "starting game"
            );
            let summary = MatchRunner::new(&config).play()?;

            if json {
                println!("{}", output::to_json(&summary)?);
            } else {
                print!("{}", output::to_text(&summary)?);
            }
        }

        Commands::Perft { depth, divide } => {
            let board = Board::new();
            if divide {
                for (mv, nodes) in perft_divide(&board, Side::Dark, depth) {
                    println!("{}: {}", mv, nodes);
                }
            }
            println!("perft({}) = {}", depth, perft(&board, Side::Dark, depth));
        }
    }

    Ok(())
}
