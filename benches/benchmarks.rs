/*
MIT License

Copyright (c) 2026 thermoelectric-rs developers
*/

//! Benchmarks for the transport pipeline

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use thermoelectric_rs::band::EnergyGrid;
use thermoelectric_rs::driver::TransportModel;
use thermoelectric_rs::fermi::FermiSolver;
use thermoelectric_rs::material::silicon;
use thermoelectric_rs::porosity::{PoreGeometry, PoreShape};

fn bench_fermi_solve(c: &mut Criterion) {
    let si = silicon();
    let grid = EnergyGrid::analytic(&si, 0.0, 1.0, 4000).unwrap();

    c.bench_function("fermi_solve_uncached", |b| {
        b.iter(|| {
            // a fresh solver each pass so the cache cannot short-circuit
            let solver = FermiSolver::default();
            black_box(solver.solve(&grid, &si, black_box(1.0e25), 300.0).unwrap())
        })
    });
}

fn bench_bulk_evaluate(c: &mut Criterion) {
    let si = silicon();
    let grid = EnergyGrid::analytic(&si, 0.0, 1.0, 4000).unwrap();
    let model = TransportModel::new(si, grid).unwrap();

    c.bench_function("bulk_evaluate", |b| {
        b.iter(|| black_box(model.evaluate(black_box(1.0e25), 300.0, None).unwrap()))
    });
}

fn bench_porous_evaluate(c: &mut Criterion) {
    let si = silicon();
    let grid = EnergyGrid::analytic(&si, 0.0, 1.0, 1000).unwrap();
    let model = TransportModel::new(si, grid).unwrap();
    let pores = PoreGeometry::new(PoreShape::Sphere { radius: 2.0e-9 }, 0.05).unwrap();

    c.bench_function("porous_evaluate", |b| {
        b.iter(|| {
            black_box(
                model
                    .evaluate(black_box(1.0e25), 300.0, Some(&pores))
                    .unwrap(),
            )
        })
    });
}

criterion_group!(
    benches,
    bench_fermi_solve,
    bench_bulk_evaluate,
    bench_porous_evaluate
);
criterion_main!(benches);
