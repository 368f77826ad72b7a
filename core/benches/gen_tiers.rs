use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sweepfield_core::*;

const TIERS: [(&str, Coord2, CellCount); 3] = [
    ("beginner", (9, 9), 10),
    ("expert", (30, 16), 99),
    ("sprawl", (100, 100), 2000),
];

fn bench_initialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("initialize");

    for (name, size, mines) in TIERS {
        let config = BoardConfig::new(size, mines, true);
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, &config| {
            let mut board = Board::new(config);
            let mut sampler = seeded_sampler(0x5eed);
            b.iter(|| {
                board.initialize(&mut sampler);
                black_box(board.realized_mines())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_initialize);
criterion_main!(benches);
