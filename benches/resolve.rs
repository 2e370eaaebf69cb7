// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mooring-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mooring and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use mooring::model::{DragContext, Handle, HandlePair, Node, NodeId, NodeKind, Point};
use mooring::policy::BranchPolicy;
use mooring::registry::ConnectionRegistry;
use mooring::resolve::ConnectionResolver;

// Benchmark identity (keep stable):
// - Group names in this file: `resolve.points`, `resolve.registry`
// - Case IDs must remain stable across refactors so results stay comparable
//   over time (e.g. `grid_generic`, `grid_condition`, `record_remove`).

const LABELS: [&str; 6] = [
    "执行完成",
    "处理失败",
    "generate report",
    "rollback change",
    "save document",
    "await review",
];

fn grid_nodes(kind: NodeKind) -> Vec<Node> {
    (0..64)
        .map(|idx| {
            let node_id = NodeId::new(format!("n:{idx}")).expect("node id");
            let x = f64::from(idx % 8) * 260.0;
            let y = f64::from(idx / 8) * 160.0;
            Node::new(node_id, kind, Point::new(x, y), LABELS[idx as usize % LABELS.len()])
        })
        .collect()
}

fn benches_resolve(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("resolve.points");

        for (case_id, kind) in [
            ("grid_generic", NodeKind::Execution),
            ("grid_condition", NodeKind::Condition),
        ] {
            let nodes = grid_nodes(kind);
            let resolver = ConnectionResolver::new(BranchPolicy::default());
            let context = DragContext::new();

            group.throughput(Throughput::Elements((nodes.len() * nodes.len()) as u64));
            group.bench_function(case_id, |b| {
                b.iter(|| {
                    let mut acc = 0u64;
                    for source in &nodes {
                        for target in &nodes {
                            let resolved = resolver.calculate_connection_points(
                                black_box(source),
                                black_box(target),
                                None,
                                Some(&context),
                                &[],
                            );
                            acc = acc
                                .wrapping_mul(131)
                                .wrapping_add(resolved.source_handle() as u64);
                            acc = acc
                                .wrapping_mul(131)
                                .wrapping_add(resolved.target_handle() as u64);
                        }
                    }
                    black_box(acc)
                })
            });
        }

        group.finish();
    }

    {
        let mut group = c.benchmark_group("resolve.registry");

        let nodes = grid_nodes(NodeKind::Execution);
        let pair = HandlePair::new(Handle::RightSource, Handle::LeftTarget);

        group.throughput(Throughput::Elements(nodes.len() as u64));
        group.bench_function("record_remove", |b| {
            b.iter(|| {
                let mut registry = ConnectionRegistry::new();
                for window in nodes.windows(2) {
                    registry.record(
                        window[0].node_id().clone(),
                        window[1].node_id().clone(),
                        pair,
                    );
                }
                let mut acc = 0u64;
                for node in &nodes {
                    acc = acc.wrapping_add(registry.connections_of(node.node_id()).len() as u64);
                }
                for window in nodes.windows(2) {
                    registry.remove(window[0].node_id(), window[1].node_id());
                }
                acc = acc.wrapping_add(registry.len() as u64);
                black_box(acc)
            })
        });

        group.finish();
    }
}

criterion_group!(benches, benches_resolve);
criterion_main!(benches);
