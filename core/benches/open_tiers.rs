use std::hint::black_box;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use sweepfield_core::*;

const SIDES: [Coord; 3] = [64, 256, 1024];

/// Worst case for the flood fill: a single mine in the far corner, opened from the origin.
fn sparse_board(side: Coord, order: FillOrder) -> Board {
    let config = BoardConfig::new_unchecked((side, side), 1, true).with_fill_order(order);
    Board::from_mine_coords(config, &[(side - 1, side - 1)]).expect("corner is on the board")
}

fn bench_open_sparse(c: &mut Criterion) {
    let mut group = c.benchmark_group("open_sparse");
    group.sample_size(20);

    for side in SIDES {
        for order in [FillOrder::DepthFirst, FillOrder::BreadthFirst] {
            let template = sparse_board(side, order);
            group.bench_with_input(
                BenchmarkId::new(format!("{order:?}"), side),
                &template,
                |b, template| {
                    b.iter_batched(
                        || template.clone(),
                        |mut board| black_box(board.open((0, 0))),
                        BatchSize::LargeInput,
                    );
                },
            );
        }
    }

    group.finish();
}

fn bench_open_dense(c: &mut Criterion) {
    let mut group = c.benchmark_group("open_dense");
    let template = Board::generate(BoardConfig::default(), 7);
    let (size_x, size_y) = template.size();
    let starts: Vec<Coord2> = (0..size_y)
        .flat_map(|y| (0..size_x).map(move |x| (x, y)))
        .filter(|&pos| template.mine_count_at(pos) == Ok(0) && !template.has_mine(pos))
        .take(64)
        .collect();

    group.bench_function("default_board", |b| {
        b.iter_batched(
            || template.clone(),
            |mut board| {
                for &start in &starts {
                    let _ = black_box(board.open(start));
                }
                board.open_cells()
            },
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_open_sparse, bench_open_dense);
criterion_main!(benches);
