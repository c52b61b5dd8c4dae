/*
MIT License

Copyright (c) 2026 thermoelectric-rs developers
*/

//! Acoustic-phonon deformation-potential scattering (Ravich model)
//!
//! tau_p(E) = rho v_s^2 hbar / (pi D_A^2 kB T D(E)) divided by a
//! nonparabolicity correction built from the acoustic and valence deformation
//! potentials. Inputs are SI: mass density in kg/m^3, sound velocity in m/s,
//! deformation potentials in eV.

use super::errors::Result;
use super::ScatteringMechanism;
use crate::band::EnergyGrid;
use crate::fermi::CarrierState;
use crate::material::MaterialParameters;
use crate::utils::constants::{BOLTZMANN_EV, ELEMENTARY_CHARGE, HBAR_EV};
use ndarray::Array1;
use std::f64::consts::PI;

/// Acoustic-phonon scattering; all parameters come from the material record
#[derive(Debug, Clone, Copy, Default)]
pub struct AcousticPhonon;

impl AcousticPhonon {
    /// Nonparabolicity correction bracket of the Ravich model
    ///
    /// (1 - (aE/(1+2aE))(1 - Dv/DA))^2 - (8/3)(aE(1+aE)/(1+2aE)^2)(Dv/DA)
    fn nonparabolic_bracket(material: &MaterialParameters, e: f64) -> f64 {
        let alpha_e = material.nonparabolicity * e;
        let ratio =
            material.deformation_potential_valence / material.deformation_potential_acoustic;
        let reduced = alpha_e / (1.0 + 2.0 * alpha_e);
        (1.0 - reduced * (1.0 - ratio)).powi(2)
            - 8.0 / 3.0 * alpha_e * (1.0 + alpha_e) / (1.0 + 2.0 * alpha_e).powi(2) * ratio
    }
}

impl ScatteringMechanism for AcousticPhonon {
    fn label(&self) -> &'static str {
        "acoustic-phonon"
    }

    fn inverse_lifetimes(
        &self,
        grid: &EnergyGrid,
        material: &MaterialParameters,
        carrier: &CarrierState,
    ) -> Result<Array1<f64>> {
        let da = material.deformation_potential_acoustic;
        // parabolic-band rate per unit DoS, 1/s per (1/(eV m^3))
        let prefactor = PI * BOLTZMANN_EV * carrier.temperature * da.powi(2)
            * ELEMENTARY_CHARGE
            / (material.mass_density * material.sound_velocity.powi(2) * HBAR_EV);

        let mut rates = Array1::zeros(grid.len());
        for (i, (&e, &d)) in grid.energy().iter().zip(grid.dos().iter()).enumerate() {
            // a negative bracket would mean a negative lifetime; clamp the
            // contribution to zero to keep tau >= 0
            let bracket = Self::nonparabolic_bracket(material, e).max(0.0);
            rates[i] = prefactor * d * bracket;
        }
        Ok(rates)
    }
}
