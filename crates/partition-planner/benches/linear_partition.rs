// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Benchmarks for partition strategies on large synthetic graphs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use partition_graph::{GraphLoader, Topology};
use partition_planner::{LinearPartition, PartitionStrategy, RoundRobinPartition};

fn bench_linear(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear");
    let topology = Topology::new(64, 8);
    for n in [1_000usize, 100_000, 1_000_000] {
        let graph = GraphLoader::synthetic("bench", n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, graph| {
            b.iter(|| {
                let mut g = graph.clone();
                LinearPartition::new(topology, 0)
                    .perform_partition(black_box(&mut g))
                    .unwrap();
                g
            })
        });
    }
    group.finish();
}

fn bench_round_robin(c: &mut Criterion) {
    let topology = Topology::new(64, 8);
    let graph = GraphLoader::synthetic("bench", 100_000);
    c.bench_function("round-robin/100000", |b| {
        b.iter(|| {
            let mut g = graph.clone();
            RoundRobinPartition::new(topology, 0)
                .perform_partition(black_box(&mut g))
                .unwrap();
            g
        })
    });
}

criterion_group!(benches, bench_linear, bench_round_robin);
criterion_main!(benches);
