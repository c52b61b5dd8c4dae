/*
MIT License

Copyright (c) 2026 thermoelectric-rs developers
*/

//! Integration tests for the scattering engine

use thermoelectric_rs::band::EnergyGrid;
use thermoelectric_rs::fermi::CarrierState;
use thermoelectric_rs::material::silicon;
use thermoelectric_rs::porosity::{NanoporeScattering, PoreGeometry, PoreShape};
use thermoelectric_rs::scattering::{ImpurityModel, IonizedImpurity, ScatteringEngine};

fn carrier() -> CarrierState {
    CarrierState {
        concentration: 1.0e25,
        temperature: 300.0,
        fermi_level: 0.05,
    }
}

#[test]
fn bulk_spectrum_carries_both_mechanisms() {
    let si = silicon();
    let grid = EnergyGrid::analytic(&si, 0.0, 1.0, 500).unwrap();
    let engine = ScatteringEngine::bulk(IonizedImpurity::default());
    let spectrum = engine.spectrum(&grid, &si, &carrier()).unwrap();
    assert!(spectrum.component("ionized-impurity").is_some());
    assert!(spectrum.component("acoustic-phonon").is_some());
    assert!(spectrum.component("nanopore").is_none());
}

#[test]
fn total_lifetime_is_the_matthiessen_combination() {
    let si = silicon();
    let grid = EnergyGrid::analytic(&si, 0.0, 1.0, 500).unwrap();
    let engine = ScatteringEngine::bulk(IonizedImpurity::default());
    let spectrum = engine.spectrum(&grid, &si, &carrier()).unwrap();

    let impurity = spectrum.component("ionized-impurity").unwrap();
    let phonon = spectrum.component("acoustic-phonon").unwrap();
    let i = grid.len() / 2;
    approx::assert_relative_eq!(
        spectrum.lifetime()[i],
        1.0 / (impurity[i] + phonon[i]),
        max_relative = 1e-12
    );
}

#[test]
fn lifetime_is_zero_where_no_mechanism_scatters() {
    let si = silicon();
    let grid = EnergyGrid::analytic(&si, 0.0, 1.0, 500).unwrap();
    let engine = ScatteringEngine::bulk(IonizedImpurity::default());
    let spectrum = engine.spectrum(&grid, &si, &carrier()).unwrap();
    // at the band edge D(E) = 0 and every rate vanishes
    assert_eq!(spectrum.lifetime()[0], 0.0);
}

#[test]
fn nanopores_shorten_the_total_lifetime() {
    let si = silicon();
    let grid = EnergyGrid::analytic(&si, 0.0, 0.5, 200).unwrap();
    let bulk = ScatteringEngine::bulk(IonizedImpurity::default())
        .spectrum(&grid, &si, &carrier())
        .unwrap();
    let geometry = PoreGeometry::new(PoreShape::Sphere { radius: 2.0e-9 }, 0.05).unwrap();
    let porous = ScatteringEngine::bulk(IonizedImpurity::default())
        .with(Box::new(NanoporeScattering::new(geometry)))
        .spectrum(&grid, &si, &carrier())
        .unwrap();
    for i in 1..grid.len() {
        assert!(
            porous.lifetime()[i] < bulk.lifetime()[i],
            "lifetime not shortened at E = {}",
            grid.energy()[i]
        );
    }
}

#[test]
fn impurity_models_differ_but_stay_physical() {
    let si = silicon();
    let grid = EnergyGrid::analytic(&si, 0.0, 1.0, 500).unwrap();
    for model in [
        ImpurityModel::StronglyScreened,
        ImpurityModel::BrooksHerring,
        ImpurityModel::Unscreened,
    ] {
        let spectrum = ScatteringEngine::bulk(IonizedImpurity::new(model))
            .spectrum(&grid, &si, &carrier())
            .unwrap();
        assert!(
            spectrum.lifetime().iter().all(|&t| t >= 0.0 && t.is_finite()),
            "non-physical lifetime under {model:?}"
        );
    }
}
