// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # slotpart
//!
//! Command-line driver that assigns simulation components to
//! `(rank, thread)` slots before a distributed run.
//!
//! ## Usage
//! ```bash
//! # Partition a graph over 4 ranks × 2 threads
//! slotpart run --graph model.json --ranks 4 --threads 2 --strategy linear -o out.json
//!
//! # Show the registered strategies
//! slotpart list
//!
//! # Compare every strategy's balance on a graph
//! slotpart inspect --synthetic 1000 --ranks 8 --threads 4
//! ```

mod commands;
mod config;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "slotpart",
    about = "Static rank/thread partitioning of simulation component graphs",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file (CLI arguments override it).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Where the component graph comes from.
#[derive(Args, Debug, Clone)]
#[group(multiple = false)]
pub struct GraphSource {
    /// Path to the graph manifest (JSON).
    #[arg(short, long)]
    pub graph: Option<PathBuf>,

    /// Generate a synthetic graph with this many components instead.
    #[arg(long)]
    pub synthetic: Option<usize>,
}

/// Topology overrides.
#[derive(Args, Debug, Clone)]
pub struct TopologyArgs {
    /// Number of ranks.
    #[arg(short, long)]
    pub ranks: Option<u32>,

    /// Threads per rank.
    #[arg(short, long)]
    pub threads: Option<u32>,
}

#[derive(Subcommand)]
enum Commands {
    /// Partition a graph and write the assignments.
    Run {
        #[command(flatten)]
        source: GraphSource,

        #[command(flatten)]
        topology: TopologyArgs,

        /// Strategy name (see `slotpart list`).
        #[arg(short, long)]
        strategy: Option<String>,

        /// Strategy verbosity level.
        #[arg(long)]
        verbosity: Option<u32>,

        /// Write assignments as JSON to this path.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List registered partition strategies.
    List,

    /// Run every registered strategy on a graph and compare slot loads.
    Inspect {
        #[command(flatten)]
        source: GraphSource,

        #[command(flatten)]
        topology: TopologyArgs,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging based on verbosity.
    commands::init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => config::PartitionConfig::from_file(path)?,
        None => config::PartitionConfig::default(),
    };

    match cli.command {
        Commands::Run {
            source,
            topology,
            strategy,
            verbosity,
            output,
        } => {
            commands::apply_overrides(&mut config, &source, &topology);
            if let Some(strategy) = strategy {
                config.strategy = strategy;
            }
            if let Some(verbosity) = verbosity {
                config.verbosity = verbosity;
            }
            if output.is_some() {
                config.output = output;
            }
            commands::run::execute(config, source.synthetic)
        }
        Commands::List => commands::list::execute(),
        Commands::Inspect { source, topology } => {
            commands::apply_overrides(&mut config, &source, &topology);
            commands::inspect::execute(config, source.synthetic)
        }
    }
}
