/*
MIT License

Copyright (c) 2026 thermoelectric-rs developers
*/

//! Carrier statistics and the self-consistent Fermi-level solver
//!
//! The Fermi level is never set directly: it is derived from a target carrier
//! concentration and temperature by enforcing the charge-balance equation
//! n = Int D(E) f(E_f, E, T) dE above the conduction-band edge.

pub mod errors;
mod solver;

pub use solver::FermiSolver;

use crate::material::MaterialParameters;
use crate::utils::constants::{BOLTZMANN_EV, BOLTZMANN_J, HBAR_J};
use std::f64::consts::PI;

/// Carrier state at one (n, T) query point
///
/// The Fermi level is in eV above the conduction-band edge and satisfies the
/// charge-balance equation to solver tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarrierState {
    /// Carrier concentration in 1/m^3
    pub concentration: f64,
    /// Temperature in K
    pub temperature: f64,
    /// Fermi level in eV above the band edge (derived, never set directly)
    pub fermi_level: f64,
}

impl CarrierState {
    /// Reduced Fermi level eta = E_f / kB T
    pub fn reduced_fermi_level(&self) -> f64 {
        self.fermi_level / (BOLTZMANN_EV * self.temperature)
    }
}

/// Fermi-Dirac occupation f(E_f, E, T)
pub fn occupation(e: f64, fermi_level: f64, temperature: f64) -> f64 {
    let x = (e - fermi_level) / (BOLTZMANN_EV * temperature);
    1.0 / (x.exp() + 1.0)
}

/// Fermi window df/dE, sharply peaked at the Fermi level
///
/// Written with cosh so that deep tails underflow to zero instead of
/// producing inf/inf.
pub fn occupation_derivative(e: f64, fermi_level: f64, temperature: f64) -> f64 {
    let kt = BOLTZMANN_EV * temperature;
    let c = (0.5 * (e - fermi_level) / kt).cosh();
    -1.0 / (kt * (2.0 * c).powi(2))
}

/// Effective density of states of the conduction band, in 1/m^3
///
/// N_c = 2 (m_c(T) kB T / 2 pi hbar^2)^(3/2) with the temperature-corrected
/// conduction mass m_c(T) = m_c (1 + 5 alpha kB T).
pub fn effective_dos_concentration(material: &MaterialParameters, temperature: f64) -> f64 {
    let m = material.conduction_mass_at(temperature);
    2.0 * (m * BOLTZMANN_J * temperature / (2.0 * PI * HBAR_J.powi(2))).powf(1.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::silicon;
    use approx::assert_relative_eq;

    #[test]
    fn occupation_is_one_half_at_the_fermi_level() {
        assert_relative_eq!(occupation(0.05, 0.05, 300.0), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn occupation_saturates_in_the_tails() {
        assert_relative_eq!(occupation(-2.0, 0.0, 300.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(occupation(2.0, 0.0, 300.0), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn window_is_negative_peaked_and_tail_safe() {
        let peak = occupation_derivative(0.05, 0.05, 300.0);
        let tail = occupation_derivative(1.0, 0.05, 300.0);
        assert!(peak < tail && tail <= 0.0);
        // peak value is -1/(4 kB T)
        assert_relative_eq!(
            peak,
            -1.0 / (4.0 * BOLTZMANN_EV * 300.0),
            max_relative = 1e-12
        );
        // far tails underflow cleanly at low temperature
        let far = occupation_derivative(2.0, 0.0, 10.0);
        assert!(far.is_finite() && far.abs() < 1e-300);
    }

    #[test]
    fn effective_dos_concentration_is_physically_sized() {
        let nc = effective_dos_concentration(&silicon(), 300.0);
        // a few 1e24 per m^3 for the silicon conduction mass
        assert!(nc > 1.0e24 && nc < 1.0e25, "Nc = {nc}");
    }

    #[test]
    fn effective_dos_concentration_grows_with_temperature() {
        let si = silicon();
        assert!(
            effective_dos_concentration(&si, 600.0) > effective_dos_concentration(&si, 300.0)
        );
    }
}
