/*
MIT License

Copyright (c) 2026 thermoelectric-rs developers
*/

//! Ionized-impurity scattering
//!
//! Three models of electron scattering from ionized dopants. The strongly
//! screened model is the default for the heavily doped materials this crate
//! targets; Brooks-Herring and the unscreened Coulomb model cover moderate
//! and shallow doping. All three need the density of states or the carrier
//! state through the generalized Debye screening length.

use super::errors::{Result, ScatteringError};
use super::ScatteringMechanism;
use crate::band::EnergyGrid;
use crate::fermi::{effective_dos_concentration, CarrierState};
use crate::material::MaterialParameters;
use crate::utils::constants::{
    BOLTZMANN_J, ELEMENTARY_CHARGE, HBAR_EV, VACUUM_PERMITTIVITY,
};
use crate::utils::math::fermi_dirac_minus_half;
use ndarray::Array1;
use std::f64::consts::PI;

/// Which impurity-scattering model to evaluate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImpurityModel {
    /// Strongly screened Coulomb potential, for heavily doped semiconductors
    #[default]
    StronglyScreened,
    /// Brooks-Herring screened Coulomb model
    BrooksHerring,
    /// Unscreened Coulomb potential, for shallow doping (~1e18 cm^-3 and below)
    Unscreened,
}

/// Ionized-impurity scattering mechanism
///
/// The impurity concentration defaults to the carrier concentration (fully
/// ionized dopants); partial ionization can be modeled by supplying an
/// explicit concentration.
#[derive(Debug, Clone, Copy, Default)]
pub struct IonizedImpurity {
    model: ImpurityModel,
    concentration: Option<f64>,
}

impl IonizedImpurity {
    /// Mechanism with the given model and N_i = n
    pub fn new(model: ImpurityModel) -> Self {
        Self {
            model,
            concentration: None,
        }
    }

    /// Override the ionized impurity concentration (1/m^3)
    pub fn with_concentration(mut self, concentration: f64) -> Self {
        self.concentration = Some(concentration);
        self
    }

    /// Generalized Debye screening length in m
    ///
    /// L_D^-2 = e^2 N_c F_{-1/2}(eta) / (eps eps0 kB T), which reduces to the
    /// classic Debye length in the non-degenerate limit where
    /// N_c F_{-1/2}(eta) -> n.
    pub fn screening_length(material: &MaterialParameters, carrier: &CarrierState) -> f64 {
        let nc = effective_dos_concentration(material, carrier.temperature);
        let eta = carrier.reduced_fermi_level();
        let inv_sq = ELEMENTARY_CHARGE.powi(2) * nc * fermi_dirac_minus_half(eta)
            / (material.dielectric_constant
                * VACUUM_PERMITTIVITY
                * BOLTZMANN_J
                * carrier.temperature);
        inv_sq.sqrt().recip()
    }
}

impl ScatteringMechanism for IonizedImpurity {
    fn label(&self) -> &'static str {
        "ionized-impurity"
    }

    fn inverse_lifetimes(
        &self,
        grid: &EnergyGrid,
        material: &MaterialParameters,
        carrier: &CarrierState,
    ) -> Result<Array1<f64>> {
        let n_i = self.concentration.unwrap_or(carrier.concentration);
        if !(n_i >= 0.0) || !n_i.is_finite() {
            return Err(ScatteringError::InvalidParameter(format!(
                "impurity concentration must be non-negative, got {n_i}"
            )));
        }

        let coulomb = 4.0 * PI * material.dielectric_constant * VACUUM_PERMITTIVITY;
        let rates = match self.model {
            ImpurityModel::StronglyScreened => {
                let ld = Self::screening_length(material, carrier);
                // tau = hbar / (pi N_i D(E) (LD^2 / 4 pi eps eps0)^2 e^2)
                let prefactor = PI * n_i * (ld.powi(2) / coulomb).powi(2)
                    * ELEMENTARY_CHARGE.powi(2)
                    / HBAR_EV;
                grid.dos().mapv(|d| prefactor * d)
            }
            ImpurityModel::BrooksHerring => {
                let ld = Self::screening_length(material, carrier);
                let m = material.conduction_mass_at(carrier.temperature);
                let gamma_scale =
                    8.0 * m * ld.powi(2) / (HBAR_EV.powi(2) * ELEMENTARY_CHARGE);
                let tau_scale = 16.0 * PI * (2.0 * m).sqrt() * coulomb.powi(2)
                    / (n_i * ELEMENTARY_CHARGE.powf(2.5));
                grid.energy().mapv(|e| {
                    if e <= 0.0 {
                        return 0.0;
                    }
                    let g = gamma_scale * e;
                    let screening = (1.0 + g).ln() - g / (1.0 + g);
                    if screening <= 0.0 {
                        return 0.0;
                    }
                    screening / (tau_scale * e.powf(1.5))
                })
            }
            ImpurityModel::Unscreened => {
                if !(n_i > 0.0) {
                    return Ok(Array1::zeros(grid.len()));
                }
                let m = material.conduction_mass_at(carrier.temperature);
                let gamma_scale = 4.0 * PI * coulomb / (n_i.cbrt() * ELEMENTARY_CHARGE);
                let tau_scale = 16.0 * PI * (2.0 * m).sqrt() * coulomb.powi(2)
                    / (n_i * ELEMENTARY_CHARGE.powf(2.5));
                grid.energy().mapv(|e| {
                    if e <= 0.0 {
                        return 0.0;
                    }
                    let g = gamma_scale * e;
                    let screening = (1.0 + g.powi(2)).ln();
                    if screening <= 0.0 {
                        return 0.0;
                    }
                    screening / (tau_scale * e.powf(1.5))
                })
            }
        };
        Ok(rates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::silicon;

    fn state() -> CarrierState {
        CarrierState {
            concentration: 1.0e25,
            temperature: 300.0,
            fermi_level: 0.05,
        }
    }

    #[test]
    fn screening_length_is_around_a_nanometer_for_heavy_doping() {
        let ld = IonizedImpurity::screening_length(&silicon(), &state());
        assert!(ld > 1.0e-10 && ld < 1.0e-8, "L_D = {ld}");
    }

    #[test]
    fn strongly_screened_lifetime_is_physically_sized() {
        let si = silicon();
        let grid = EnergyGrid::analytic(&si, 0.0, 1.0, 1000).unwrap();
        let rates = IonizedImpurity::default()
            .inverse_lifetimes(&grid, &si, &state())
            .unwrap();
        // lifetime at 0.1 eV should land between 1 fs and 100 ps
        let i = grid.energy().iter().position(|&e| e >= 0.1).unwrap();
        let tau = 1.0 / rates[i];
        assert!(tau > 1.0e-15 && tau < 1.0e-10, "tau_im = {tau}");
    }

    #[test]
    fn rate_scales_linearly_with_impurity_concentration() {
        let si = silicon();
        let grid = EnergyGrid::analytic(&si, 0.0, 1.0, 200).unwrap();
        let base = IonizedImpurity::default()
            .inverse_lifetimes(&grid, &si, &state())
            .unwrap();
        let doubled = IonizedImpurity::default()
            .with_concentration(2.0e25)
            .inverse_lifetimes(&grid, &si, &state())
            .unwrap();
        let i = grid.len() / 2;
        approx::assert_relative_eq!(doubled[i], 2.0 * base[i], max_relative = 1e-12);
    }

    #[test]
    fn negative_impurity_concentration_is_rejected() {
        let si = silicon();
        let grid = EnergyGrid::analytic(&si, 0.0, 1.0, 200).unwrap();
        let result = IonizedImpurity::default()
            .with_concentration(-1.0)
            .inverse_lifetimes(&grid, &si, &state());
        assert!(matches!(result, Err(ScatteringError::InvalidParameter(_))));
    }

    #[test]
    fn brooks_herring_rate_is_finite_at_the_band_edge() {
        let si = silicon();
        let grid = EnergyGrid::analytic(&si, 0.0, 1.0, 500).unwrap();
        let rates = IonizedImpurity::new(ImpurityModel::BrooksHerring)
            .inverse_lifetimes(&grid, &si, &state())
            .unwrap();
        assert!(rates.iter().all(|r| r.is_finite() && *r >= 0.0));
    }
}
