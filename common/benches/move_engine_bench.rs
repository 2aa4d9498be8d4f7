use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::time::Duration;

use common::games::game2048::shift_grid;
use common::games::{Direction, Grid, SessionRng};

fn random_grid(rng: &mut SessionRng) -> Grid<u32> {
    let mut grid = Grid::new(4, 4, 0u32);
    for y in 0..4 {
        for x in 0..4 {
            if rng.random_ratio(1, 2) {
                let exp: u32 = rng.random_range(1..11);
                grid.set(x, y, 1 << exp);
            }
        }
    }
    grid
}

fn bench_shift_random_boards() {
    let mut rng = SessionRng::new(20480);
    for _ in 0..100 {
        let grid = random_grid(&mut rng);
        for direction in [
            Direction::Left,
            Direction::Right,
            Direction::Up,
            Direction::Down,
        ] {
            let _ = shift_grid(&grid, direction);
        }
    }
}

fn bench_shift_dense_board() {
    // Alternating values: nothing merges, every line still gets compacted
    // and written back.
    let mut grid = Grid::new(4, 4, 0u32);
    for y in 0..4 {
        for x in 0..4 {
            grid.set(x, y, if (x + y) % 2 == 0 { 2 } else { 4 });
        }
    }
    for _ in 0..100 {
        let _ = shift_grid(&grid, Direction::Left);
    }
}

fn move_engine_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_engine");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(50)
        .measurement_time(Duration::from_secs(20));

    group.bench_function("shift_100_random_boards", |b| {
        b.iter(bench_shift_random_boards)
    });

    group.bench_function("shift_100_dense_boards", |b| {
        b.iter(bench_shift_dense_board)
    });

    group.finish();
}

criterion_group!(benches, move_engine_bench);
criterion_main!(benches);
