// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `slotpart inspect` command: compare every registered strategy on one
//! graph and topology.

use crate::config::PartitionConfig;
use partition_planner::{registry, PartitionReport};

pub fn execute(config: PartitionConfig, synthetic: Option<usize>) -> anyhow::Result<()> {
    let graph = super::load_graph(&config, synthetic)?;
    let topology = config.topology();

    println!("  {}", graph.summary());
    println!("  Topology: {topology}");
    println!();
    println!(
        "  {:<14} {:>8} {:>8} {:>10} {:>6}",
        "Strategy", "Min", "Max", "Imbalance", "Idle",
    );
    println!("  {}", "-".repeat(50));

    for info in registry::list_available() {
        let strategy = registry::create(&info.name, topology, 0)?;
        let mut copy = graph.clone();

        let row = strategy
            .perform_partition(&mut copy)
            .and_then(|()| PartitionReport::from_graph(strategy.name(), topology, &copy));
        match row {
            Ok(report) => println!(
                "  {:<14} {:>8} {:>8} {:>10} {:>6}",
                info.name,
                report.min_load(),
                report.max_load(),
                report.imbalance(),
                report.idle_slots(),
            ),
            Err(e) => println!("  {:<14} n/a ({e})", info.name),
        }
    }

    println!();
    Ok(())
}
