/*
MIT License

Copyright (c) 2026 thermoelectric-rs developers
*/

//! Integration tests for parallel sweeps

use thermoelectric_rs::band::EnergyGrid;
use thermoelectric_rs::driver::{SweepQuery, TransportModel};
use thermoelectric_rs::material::silicon;
use thermoelectric_rs::porosity::{PoreGeometry, PoreShape};

fn model() -> TransportModel {
    let si = silicon();
    let grid = EnergyGrid::analytic(&si, 0.0, 1.0, 1000).unwrap();
    TransportModel::new(si, grid).unwrap()
}

#[test]
fn sweep_records_match_their_queries_in_order() {
    let m = model();
    let pore = PoreGeometry::new(PoreShape::Sphere { radius: 2.0e-9 }, 0.05).unwrap();
    let mut queries = Vec::new();
    for &n in &[1.0e24, 1.0e25, 1.0e26] {
        for &t in &[300.0, 500.0] {
            queries.push(SweepQuery {
                concentration: n,
                temperature: t,
                pore: Some(pore),
            });
        }
    }
    let records = m.sweep(&queries);
    assert_eq!(records.len(), queries.len());
    for (record, query) in records.iter().zip(queries.iter()) {
        assert_eq!(record.query, *query);
        assert!(record.outcome.is_ok(), "failed at {query:?}");
    }
}

#[test]
fn sweep_and_single_evaluation_agree() {
    let m = model();
    let queries = vec![
        SweepQuery {
            concentration: 1.0e25,
            temperature: 300.0,
            pore: None,
        },
        SweepQuery {
            concentration: 1.0e25,
            temperature: 500.0,
            pore: None,
        },
    ];
    let records = m.sweep(&queries);
    for record in &records {
        let single = m
            .evaluate(record.query.concentration, record.query.temperature, None)
            .unwrap();
        let swept = record.outcome.as_ref().unwrap();
        approx::assert_relative_eq!(swept.sigma, single.sigma, max_relative = 1e-12);
        approx::assert_relative_eq!(swept.seebeck, single.seebeck, max_relative = 1e-12);
    }
}

#[test]
fn seebeck_magnitude_falls_with_doping() {
    let m = model();
    let light = m.evaluate(1.0e24, 300.0, None).unwrap();
    let heavy = m.evaluate(1.0e26, 300.0, None).unwrap();
    assert!(heavy.seebeck.abs() < light.seebeck.abs());
}

#[test]
fn one_bad_point_does_not_poison_the_sweep() {
    let m = model();
    let queries = vec![
        SweepQuery {
            concentration: 1.0e25,
            temperature: 300.0,
            pore: None,
        },
        SweepQuery {
            concentration: 1.0e25,
            temperature: -300.0,
            pore: None,
        },
        SweepQuery {
            concentration: 1.0e25,
            temperature: 600.0,
            pore: None,
        },
    ];
    let records = m.sweep(&queries);
    assert!(records[0].outcome.is_ok());
    assert!(records[1].outcome.is_err());
    assert!(records[2].outcome.is_ok());
}
