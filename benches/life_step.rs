use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_life::core::{patterns, Simulation};
use tui_life::types::GRID_SIZE;

fn bench_advance(c: &mut Criterion) {
    let mut sim = Simulation::new(GRID_SIZE);
    sim.seed(&patterns::demo_layout()).unwrap();

    c.bench_function("advance_generation_80x80", |b| {
        b.iter(|| {
            sim.advance();
            black_box(sim.generation());
        })
    });
}

fn bench_seed_demo_layout(c: &mut Criterion) {
    let layout = patterns::demo_layout();

    c.bench_function("seed_demo_layout", |b| {
        b.iter(|| {
            let mut sim = Simulation::new(GRID_SIZE);
            sim.seed(black_box(&layout)).unwrap();
            black_box(sim.grid().population());
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut sim = Simulation::new(GRID_SIZE);
    sim.seed(&patterns::demo_layout()).unwrap();
    sim.advance();

    c.bench_function("snapshot_80x80", |b| {
        b.iter(|| {
            black_box(sim.snapshot());
        })
    });
}

criterion_group!(benches, bench_advance, bench_seed_demo_layout, bench_snapshot);
criterion_main!(benches);
