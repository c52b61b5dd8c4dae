/*
MIT License

Copyright (c) 2026 thermoelectric-rs developers
*/

//! Closed-form band model for use when DFT tables are not available
//!
//! Valid near the conduction-band edge (up to a few hundred meV), which is
//! where the Fermi window lives for the doping levels this crate targets.

use crate::material::MaterialParameters;
use crate::utils::constants::{BOLTZMANN_EV, ELEMENTARY_CHARGE, HBAR_EV};
use std::f64::consts::PI;

/// Nonparabolic density of states at energy `e` (eV above the band edge)
///
/// D(E) = (1/pi^2) sqrt(2 E (1 + alpha E)) (m_c / hbar^2)^(3/2) (1 + 2 alpha E) / e^(3/2)
///
/// in units of 1/(eV m^3). Zero below the band edge.
pub fn density_of_states(material: &MaterialParameters, e: f64) -> f64 {
    if e <= 0.0 {
        return 0.0;
    }
    let alpha = material.nonparabolicity;
    let m = material.conduction_mass();
    (1.0 / PI.powi(2))
        * (2.0 * e * (1.0 + alpha * e)).sqrt()
        * (m / HBAR_EV.powi(2)).powf(1.5)
        * (1.0 + 2.0 * alpha * e)
        / ELEMENTARY_CHARGE.powf(1.5)
}

/// Group velocity at energy `e` (eV above the band edge), in m/s
///
/// For the ellipsoidal nonparabolic band, hbar k = sqrt(2 m_c E (1 + alpha E))
/// and v = hbar k / (m_c (1 + 2 alpha E)).
pub fn group_velocity(material: &MaterialParameters, e: f64) -> f64 {
    if e <= 0.0 {
        return 0.0;
    }
    let alpha = material.nonparabolicity;
    let m = material.conduction_mass();
    (2.0 * e * ELEMENTARY_CHARGE * (1.0 + alpha * e) / m).sqrt() / (1.0 + 2.0 * alpha * e)
}

/// Temperature-dependent band gap Eg(T) = Eg(0) - A T^2 / (T + B), in eV
pub fn band_gap(eg_zero: f64, a: f64, b: f64, temperature: f64) -> f64 {
    eg_zero - a * temperature.powi(2) / (temperature + b)
}

/// Intrinsic carrier concentration n_i = sqrt(Nc Nv) exp(-Eg / 2 kB T), in 1/m^3
pub fn intrinsic_concentration(nc: f64, nv: f64, band_gap: f64, temperature: f64) -> f64 {
    (nc * nv).sqrt() * (-band_gap / (2.0 * BOLTZMANN_EV * temperature)).exp()
}
