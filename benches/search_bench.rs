use criterion::{criterion_group, criterion_main, Criterion};
use grid_search::heuristic::{bird_distance, chebyshev_distance, Heuristic};
use grid_search::*;
use grid_util::point::Point;
use rand::prelude::*;
use std::hint::black_box;

fn random_grid(n: usize, rng: &mut StdRng) -> TileGrid {
    let mut grid = TileGrid::square(n);
    for x in 0..n as i32 {
        for y in 0..n as i32 {
            if rng.gen_bool(0.3) {
                grid.set_wall(Point::new(x, y));
            }
        }
    }
    grid
}

fn reference_bench(c: &mut Criterion) {
    let scenario = Scenario::reference();
    let grid = scenario.build_grid();
    for mode in [SearchMode::AStar, SearchMode::Dfs] {
        let config = SearchConfig::new(mode, DEFAULT_ITERATION_BUDGET);
        c.bench_function(format!("reference, {mode}").as_str(), |b| {
            b.iter(|| {
                black_box(find_path(
                    &grid,
                    scenario.start,
                    scenario.goal,
                    &bird_distance,
                    config,
                ))
            })
        });
    }
}

fn random_bench(c: &mut Criterion) {
    const N: usize = 64;
    const N_GRIDS: usize = 20;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    let grids: Vec<TileGrid> = (0..N_GRIDS)
        .map(|_| {
            let mut grid = random_grid(N, &mut rng);
            grid.set(start, Tile::default());
            grid.set(end, Tile::default());
            grid
        })
        .collect();
    let heuristics: [(&str, &dyn Heuristic); 2] =
        [("bird", &bird_distance), ("chebyshev", &chebyshev_distance)];
    for mode in [SearchMode::AStar, SearchMode::Dfs] {
        for (name, heuristic) in heuristics {
            let config = SearchConfig::new(mode, N * N);
            c.bench_function(format!("random {N}x{N}, {mode}, {name}").as_str(), |b| {
                b.iter(|| {
                    for grid in &grids {
                        let _ = black_box(find_path(grid, start, end, heuristic, config));
                    }
                })
            });
        }
    }
}

criterion_group!(benches, reference_bench, random_bench);
criterion_main!(benches);
