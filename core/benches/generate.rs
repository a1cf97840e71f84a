use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use demineur_core::*;
use std::hint::black_box;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for preset in Preset::builtin() {
        let Ok(config) = preset.config() else {
            continue;
        };
        group.bench_with_input(BenchmarkId::from_parameter(&preset.name), &config, |b, &config| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                black_box(DensityGenerator::new(seed).generate(config))
            })
        });
    }
    group.finish();
}

fn bench_cascade(c: &mut Criterion) {
    let mut group = c.benchmark_group("cascade");
    for preset in Preset::builtin() {
        let Ok(config) = preset.config() else {
            continue;
        };
        // cascade from the first zero cell in generation order
        let grid = DensityGenerator::new(1).generate(config);
        let Some(start) = grid
            .iter_coords()
            .find(|&pos| grid[pos].adjacent_mines() == 0 && !grid[pos].is_mine())
        else {
            continue;
        };
        group.bench_with_input(BenchmarkId::from_parameter(&preset.name), &grid, |b, grid| {
            b.iter(|| {
                let mut session = Session::with_clock(grid.clone(), ManualClock::new());
                black_box(session.reveal_settled(start))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_cascade);
criterion_main!(benches);
