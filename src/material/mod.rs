/*
MIT License

Copyright (c) 2026 thermoelectric-rs developers
*/

//! Material parameter records
//!
//! A [`MaterialParameters`] record collects everything the transport pipeline
//! needs to know about one semiconductor: conduction-band effective masses,
//! lattice constant, deformation potentials, dielectric constant and the
//! valley location in reciprocal space. Records are loaded once per material
//! (typically from JSON) and treated as read-only afterwards.

pub mod errors;

use crate::utils::constants::{BOLTZMANN_EV, ELECTRON_MASS};
use errors::{MaterialError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

fn default_dopant_charge() -> f64 {
    1.0
}

/// Immutable per-material parameters
///
/// Masses are in units of the electron rest mass, lengths in meters, energies
/// in eV and densities in SI units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialParameters {
    /// Material identifier, carried into error context
    pub id: String,
    /// Conduction-band effective masses per crystallographic axis (m0 units)
    pub effective_mass: [f64; 3],
    /// Lattice parameter in m
    pub lattice_parameter: f64,
    /// Conduction-band edge energy in eV; grid energies are measured from it
    pub band_edge: f64,
    /// Electron affinity in eV, the boxcar pore potential height U0
    pub electron_affinity: f64,
    /// Acoustic deformation potential D_A in eV
    pub deformation_potential_acoustic: f64,
    /// Valence deformation potential D_v in eV
    pub deformation_potential_valence: f64,
    /// Relative dielectric constant
    pub dielectric_constant: f64,
    /// Mass density in kg/m^3
    pub mass_density: f64,
    /// Longitudinal sound velocity in m/s
    pub sound_velocity: f64,
    /// Nonparabolicity parameter alpha in 1/eV
    pub nonparabolicity: f64,
    /// Valley location in fractional reciprocal coordinates
    pub valley: [f64; 3],
    /// Dopant electric charge in units of e (1 for phosphorus)
    #[serde(default = "default_dopant_charge")]
    pub dopant_charge: f64,
}

impl MaterialParameters {
    /// Check that every parameter is physically meaningful
    pub fn validate(&self) -> Result<()> {
        for (axis, &m) in ["x", "y", "z"].iter().zip(self.effective_mass.iter()) {
            if !(m > 0.0) || !m.is_finite() {
                return Err(MaterialError::InvalidParameter(format!(
                    "effective mass m_{axis} = {m} must be positive for '{}'",
                    self.id
                )));
            }
        }
        let positives = [
            ("lattice parameter", self.lattice_parameter),
            ("electron affinity", self.electron_affinity),
            (
                "acoustic deformation potential",
                self.deformation_potential_acoustic,
            ),
            (
                "valence deformation potential",
                self.deformation_potential_valence,
            ),
            ("dielectric constant", self.dielectric_constant),
            ("mass density", self.mass_density),
            ("sound velocity", self.sound_velocity),
        ];
        for (name, value) in positives {
            if !(value > 0.0) || !value.is_finite() {
                return Err(MaterialError::InvalidParameter(format!(
                    "{name} = {value} must be positive for '{}'",
                    self.id
                )));
            }
        }
        if !(self.nonparabolicity >= 0.0) || !self.nonparabolicity.is_finite() {
            return Err(MaterialError::InvalidParameter(format!(
                "nonparabolicity = {} must be non-negative for '{}'",
                self.nonparabolicity, self.id
            )));
        }
        Ok(())
    }

    /// Conduction-band effective mass 3/(1/m_x + 1/m_y + 1/m_z), in kg
    pub fn conduction_mass(&self) -> f64 {
        let inv: f64 = self.effective_mass.iter().map(|m| 1.0 / m).sum();
        3.0 / inv * ELECTRON_MASS
    }

    /// Temperature-corrected conduction mass m_c(T) = m_c (1 + 5 alpha kB T), in kg
    pub fn conduction_mass_at(&self, temperature: f64) -> f64 {
        self.conduction_mass() * (1.0 + 5.0 * self.nonparabolicity * BOLTZMANN_EV * temperature)
    }

    /// Effective mass along one axis, in kg
    pub fn axis_mass(&self, axis: usize) -> f64 {
        self.effective_mass[axis] * ELECTRON_MASS
    }
}

/// n-type silicon with literature parameters
///
/// Masses 0.98/0.19/0.19 m0, Delta-valley at 0.85 of the zone boundary along x,
/// deformation potentials and sound velocity for phosphorus-doped Si.
pub fn silicon() -> MaterialParameters {
    MaterialParameters {
        id: "si".to_string(),
        effective_mass: [0.98, 0.19, 0.19],
        lattice_parameter: 5.43e-10,
        band_edge: 0.0,
        electron_affinity: 4.05,
        deformation_potential_acoustic: 9.5,
        deformation_potential_valence: 7.0,
        dielectric_constant: 11.7,
        mass_density: 2329.0,
        sound_velocity: 8433.0,
        nonparabolicity: 0.5,
        valley: [0.85, 0.0, 0.0],
        dopant_charge: 1.0,
    }
}

static PRESETS: Lazy<HashMap<&'static str, MaterialParameters>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert("si", silicon());
    map
});

/// Look up a built-in material preset by identifier
pub fn preset(id: &str) -> Option<MaterialParameters> {
    PRESETS.get(id).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn silicon_passes_validation() {
        assert!(silicon().validate().is_ok());
    }

    #[test]
    fn negative_mass_is_rejected() {
        let mut mat = silicon();
        mat.effective_mass[1] = -0.19;
        assert!(matches!(
            mat.validate(),
            Err(MaterialError::InvalidParameter(_))
        ));
    }

    #[test]
    fn zero_dielectric_is_rejected() {
        let mut mat = silicon();
        mat.dielectric_constant = 0.0;
        assert!(mat.validate().is_err());
    }

    #[test]
    fn conduction_mass_is_the_harmonic_mean() {
        let mat = silicon();
        let expected = 3.0 / (1.0 / 0.98 + 2.0 / 0.19) * ELECTRON_MASS;
        assert_relative_eq!(mat.conduction_mass(), expected, max_relative = 1e-12);
        // the temperature correction grows the mass
        assert!(mat.conduction_mass_at(300.0) > mat.conduction_mass());
    }

    #[test]
    fn presets_round_trip_through_json() {
        let mat = preset("si").expect("silicon preset");
        let text = serde_json::to_string(&mat).unwrap();
        let back: MaterialParameters = serde_json::from_str(&text).unwrap();
        assert_eq!(back.id, "si");
        assert_relative_eq!(back.lattice_parameter, mat.lattice_parameter);
    }
}
