//! Benchmarks for dependency-graph analysis over large boards.

use std::collections::HashSet;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use uuid::Uuid;

use quillboard::{ActorType, BoardTask, CycleDetector, TaskGraph};

/// A layered DAG: `layers` layers of `width` tasks, each task depending on
/// two tasks from the previous layer.
fn layered_tasks(layers: usize, width: usize) -> Vec<BoardTask> {
    let board_id = Uuid::new_v4();
    let mut tasks: Vec<BoardTask> = Vec::with_capacity(layers * width);

    for layer in 0..layers {
        for slot in 0..width {
            let mut task = BoardTask::new(board_id, "bench", "generated", ActorType::Coder);
            if layer > 0 {
                let prev = &tasks[(layer - 1) * width..layer * width];
                task.dependencies = vec![prev[slot].id, prev[(slot + 1) % width].id];
            }
            tasks.push(task);
        }
    }
    tasks
}

fn bench_ready_partition(c: &mut Criterion) {
    let mut group = c.benchmark_group("ready_partition");
    for size in [100usize, 400, 1600] {
        let tasks = layered_tasks(size / 20, 20);
        group.bench_with_input(BenchmarkId::from_parameter(size), &tasks, |b, tasks| {
            b.iter(|| {
                let graph = TaskGraph::build(tasks);
                graph.ready_partition(tasks, &HashSet::new())
            });
        });
    }
    group.finish();
}

fn bench_cycle_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("cycle_detection");
    for size in [100usize, 400, 1600] {
        let mut tasks = layered_tasks(size / 20, 20);
        // Inject one back-edge so the detector has work to do.
        let last_id = tasks.last().expect("non-empty").id;
        tasks[0].dependencies = vec![last_id];

        let detector = CycleDetector::new();
        group.bench_with_input(BenchmarkId::from_parameter(size), &tasks, |b, tasks| {
            b.iter(|| detector.detect_cycles(tasks));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ready_partition, bench_cycle_detection);
criterion_main!(benches);
