/*
MIT License

Copyright (c) 2026 thermoelectric-rs developers
*/

//! Scattering-rate engine
//!
//! Each scattering mechanism contributes an inverse momentum relaxation time
//! spectrum over the energy grid; the engine combines them by Matthiessen's
//! rule, tau^-1(E) = sum_i tau_i^-1(E), which assumes the mechanisms are
//! statistically independent. Mechanisms are a small strategy set: ionized
//! impurities, acoustic phonons and (when pores are configured) nanopores.

pub mod errors;
pub mod impurity;
pub mod phonon;

pub use impurity::{ImpurityModel, IonizedImpurity};
pub use phonon::AcousticPhonon;

use crate::band::EnergyGrid;
use crate::fermi::CarrierState;
use crate::material::MaterialParameters;
use errors::{Result, ScatteringError};
use ndarray::Array1;

/// One scattering mechanism's contribution at each grid energy
pub trait ScatteringMechanism: Send + Sync {
    /// Short mechanism name used in spectra and diagnostics
    fn label(&self) -> &'static str;

    /// Inverse momentum relaxation times tau^-1(E) in 1/s at each grid point
    fn inverse_lifetimes(
        &self,
        grid: &EnergyGrid,
        material: &MaterialParameters,
        carrier: &CarrierState,
    ) -> Result<Array1<f64>>;
}

/// Total relaxation-time spectrum with its per-mechanism decomposition
#[derive(Debug, Clone)]
pub struct ScatteringSpectrum {
    energy: Array1<f64>,
    components: Vec<(&'static str, Array1<f64>)>,
    lifetime: Array1<f64>,
}

impl ScatteringSpectrum {
    /// Energy samples in eV above the band edge
    pub fn energy(&self) -> &Array1<f64> {
        &self.energy
    }

    /// Total relaxation time tau(E) in s; zero where the summed rate
    /// vanishes or diverges
    pub fn lifetime(&self) -> &Array1<f64> {
        &self.lifetime
    }

    /// Per-mechanism inverse rates, in engine order
    pub fn components(&self) -> &[(&'static str, Array1<f64>)] {
        &self.components
    }

    /// Inverse rate spectrum of one mechanism by label
    pub fn component(&self, label: &str) -> Option<&Array1<f64>> {
        self.components
            .iter()
            .find(|(name, _)| *name == label)
            .map(|(_, rates)| rates)
    }
}

/// Combines mechanism contributions by Matthiessen's rule
#[derive(Default)]
pub struct ScatteringEngine {
    mechanisms: Vec<Box<dyn ScatteringMechanism>>,
}

impl ScatteringEngine {
    /// Engine with no mechanisms; add them with [`Self::with`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mechanism to the combination
    pub fn with(mut self, mechanism: Box<dyn ScatteringMechanism>) -> Self {
        self.mechanisms.push(mechanism);
        self
    }

    /// Bulk engine: ionized impurities plus acoustic phonons
    pub fn bulk(impurity: IonizedImpurity) -> Self {
        Self::new()
            .with(Box::new(impurity))
            .with(Box::new(AcousticPhonon))
    }

    /// Evaluate every mechanism and combine into a total spectrum
    ///
    /// Fails with `Domain` when the grid reaches below the conduction-band
    /// edge (tau is undefined there) and with `InvalidParameter` for
    /// non-physical material input.
    pub fn spectrum(
        &self,
        grid: &EnergyGrid,
        material: &MaterialParameters,
        carrier: &CarrierState,
    ) -> Result<ScatteringSpectrum> {
        material.validate()?;
        if grid.energy()[0] < 0.0 {
            return Err(ScatteringError::Domain(format!(
                "grid reaches {} eV below the conduction-band edge",
                -grid.energy()[0]
            )));
        }
        if !(carrier.temperature > 0.0) {
            return Err(ScatteringError::Domain(format!(
                "temperature must be positive, got {}",
                carrier.temperature
            )));
        }

        let mut components = Vec::with_capacity(self.mechanisms.len());
        for mechanism in &self.mechanisms {
            let rates = mechanism.inverse_lifetimes(grid, material, carrier)?;
            components.push((mechanism.label(), rates));
        }

        let lifetime = matthiessen(grid.len(), &components);
        Ok(ScatteringSpectrum {
            energy: grid.energy().clone(),
            components,
            lifetime,
        })
    }
}

/// Matthiessen's rule: tau = 1 / sum of inverse rates
///
/// Where no mechanism contributes the total rate is zero and tau is set to
/// zero rather than infinity, the convention the transport integrals expect
/// (such states carry no current).
fn matthiessen(len: usize, components: &[(&'static str, Array1<f64>)]) -> Array1<f64> {
    let mut lifetime = Array1::zeros(len);
    for i in 0..len {
        let total: f64 = components.iter().map(|(_, rates)| rates[i]).sum();
        lifetime[i] = if total > 0.0 && total.is_finite() {
            1.0 / total
        } else {
            0.0
        };
    }
    lifetime
}
