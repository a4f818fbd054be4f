// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations and shared helpers.

pub mod inspect;
pub mod list;
pub mod run;

use crate::config::PartitionConfig;
use crate::{GraphSource, TopologyArgs};
use partition_graph::{graph::Validated, GraphLoader, PartitionGraph};
use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber. `RUST_LOG` wins over `-v` flags.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Folds command-line graph and topology flags into `config`.
pub fn apply_overrides(config: &mut PartitionConfig, source: &GraphSource, topology: &TopologyArgs) {
    if let Some(graph) = &source.graph {
        config.graph_path = Some(graph.clone());
    }
    if let Some(ranks) = topology.ranks {
        config.ranks = ranks;
    }
    if let Some(threads) = topology.threads {
        config.threads_per_rank = threads;
    }
}

/// Loads the graph named by the config, or builds a synthetic one.
pub fn load_graph(
    config: &PartitionConfig,
    synthetic: Option<usize>,
) -> anyhow::Result<PartitionGraph<Validated>> {
    if let Some(count) = synthetic {
        return Ok(GraphLoader::synthetic("synthetic", count));
    }
    let path = config
        .graph_path
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("no graph given; use --graph, --synthetic or a config file"))?;
    GraphLoader::load(path)
        .map_err(|e| anyhow::anyhow!("failed to load graph from '{}': {e}", path.display()))
}
