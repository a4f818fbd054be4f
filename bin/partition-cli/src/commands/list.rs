// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `slotpart list` command: show registered strategies.

pub fn execute() -> anyhow::Result<()> {
    let strategies = partition_planner::registry::list_available();
    println!("  Available partition strategies:");
    for info in &strategies {
        println!("   {:<12} {}", info.name, info.description);
    }
    Ok(())
}
