// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `slotpart run` command: partition a graph and emit the assignments.

use crate::config::PartitionConfig;
use partition_graph::{graph::Validated, PartitionGraph};
use partition_planner::PartitionReport;

/// One line of the assignment output.
#[derive(Debug, serde::Serialize)]
struct Assignment<'a> {
    id: u64,
    name: &'a str,
    rank: u32,
    thread: u32,
}

pub fn execute(config: PartitionConfig, synthetic: Option<usize>) -> anyhow::Result<()> {
    tracing::debug!("effective config:\n{}", config.to_toml()?);
    let mut graph = super::load_graph(&config, synthetic)?;
    let topology = config.topology();

    println!("  Graph:    {}", graph.summary());
    println!("  Topology: {topology}");
    println!("  Strategy: {}", config.strategy);
    println!();

    let strategy = config.create_strategy()?;
    strategy.perform_partition(&mut graph)?;

    let report = PartitionReport::from_graph(strategy.name(), topology, &graph)?;
    report.validate(graph.num_components())?;

    println!("  {}", report.summary());
    if report.loads.len() <= 32 {
        for load in &report.loads {
            println!("   {:>7}  {:>8}", load.slot.to_string(), load.components);
        }
    }

    if let Some(path) = &config.output {
        let json = assignments_json(&graph)?;
        std::fs::write(path, json)
            .map_err(|e| anyhow::anyhow!("cannot write '{}': {e}", path.display()))?;
        tracing::info!("wrote {} assignments to {}", graph.num_components(), path.display());
    }

    Ok(())
}

/// Serialises every component's slot as a JSON array.
fn assignments_json(graph: &PartitionGraph<Validated>) -> anyhow::Result<String> {
    let rows = graph
        .iter_components()
        .map(|c| {
            let slot = c
                .rank
                .ok_or_else(|| anyhow::anyhow!("component {} has no slot", c.id))?;
            Ok(Assignment {
                id: c.id.0,
                name: &c.name,
                rank: slot.rank,
                thread: slot.thread,
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(serde_json::to_string_pretty(&rows)?)
}
