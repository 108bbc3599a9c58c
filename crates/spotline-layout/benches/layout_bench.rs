//! Benchmarks for the timeline layout engine.
//!
//! Run with: `cargo bench --package spotline-layout --bench layout_bench`
//!
//! The generated input mimics real lineages: many tracks, each a chain over
//! consecutive instants with an occasional division into two branches.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use spotline_core::{Feature, Spot, SpotId, TrackGraph};
use spotline_layout::{CellMetrics, TimeLayout};
use spotline_style::InterpolatedScale;
use std::hint::black_box;

/// Build `tracks` lineages of `length` instants each; every fourth track
/// divides halfway through.
fn lineage_graph(tracks: u32, length: u32) -> TrackGraph {
    let mut graph = TrackGraph::new();
    let mut next_id = 0u32;
    let mut spot = |graph: &mut TrackGraph, t: u32| -> SpotId {
        let id = SpotId(next_id);
        next_id += 1;
        graph
            .add_spot(Spot::new(id).with_feature(Feature::PositionT, f64::from(t)))
            .unwrap();
        id
    };

    for track in 0..tracks {
        let mut previous = spot(&mut graph, 0);
        let mut branch_root = None;
        for t in 1..length {
            let current = spot(&mut graph, t);
            graph.connect(previous, current, 1.0).unwrap();
            if track % 4 == 0 && t == length / 2 {
                branch_root = Some(previous);
            }
            previous = current;
        }
        if let Some(root) = branch_root {
            let mut prev = root;
            for t in (length / 2 + 1)..length {
                let current = spot(&mut graph, t);
                graph.connect(prev, current, 1.0).unwrap();
                prev = current;
            }
        }
    }
    graph
}

fn bench_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("time_layout_plan");
    for (tracks, length) in [(10u32, 10u32), (50, 20), (200, 50)] {
        let graph = lineage_graph(tracks, length);
        group.throughput(Throughput::Elements(graph.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{tracks}x{length}")),
            &graph,
            |b, graph| {
                let engine =
                    TimeLayout::new(graph, CellMetrics::default(), InterpolatedScale::jet());
                b.iter(|| black_box(engine.plan().unwrap()));
            },
        );
    }
    group.finish();
}

fn bench_construction(c: &mut Criterion) {
    let graph = lineage_graph(100, 30);
    c.bench_function("time_layout_new", |b| {
        b.iter(|| {
            black_box(TimeLayout::new(
                &graph,
                CellMetrics::default(),
                InterpolatedScale::jet(),
            ))
        })
    });
}

criterion_group!(benches, bench_plan, bench_construction);
criterion_main!(benches);
