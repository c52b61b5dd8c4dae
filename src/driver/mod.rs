/*
MIT License

Copyright (c) 2026 thermoelectric-rs developers
*/

//! Transport-model driver
//!
//! [`TransportModel`] wires the pipeline together: for each (n, T) query it
//! solves the Fermi level, evaluates the scattering spectrum (bulk mechanisms
//! plus nanopores when a pore geometry is supplied), integrates the transport
//! coefficients and applies the volumetric porosity correction. Sweeps over
//! many query points run in parallel; a failing point is logged and recorded
//! without aborting the rest of the sweep.

pub mod errors;

use crate::band::EnergyGrid;
use crate::fermi::FermiSolver;
use crate::material::MaterialParameters;
use crate::porosity::{apply_volumetric_correction, NanoporeScattering, PoreGeometry};
use crate::scattering::{ImpurityModel, IonizedImpurity, ScatteringEngine};
use crate::transport::{transport_coefficients, TransportResult};
use errors::{DriverError, Result, Stage};
use rayon::prelude::*;

/// One (n, T, pore) query point of a sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepQuery {
    /// Carrier concentration in 1/m^3
    pub concentration: f64,
    /// Temperature in K
    pub temperature: f64,
    /// Pore geometry, or `None` for the bulk material
    pub pore: Option<PoreGeometry>,
}

/// One sweep query together with its outcome
#[derive(Debug, Clone)]
pub struct SweepRecord {
    /// The query this record answers
    pub query: SweepQuery,
    /// Transport coefficients, or the error that stopped this point
    pub outcome: Result<TransportResult>,
}

/// The full transport pipeline for one material and band structure
pub struct TransportModel {
    material: MaterialParameters,
    grid: EnergyGrid,
    solver: FermiSolver,
    impurity_model: ImpurityModel,
    impurity_concentration: Option<f64>,
}

impl TransportModel {
    /// Model over a validated material and energy grid
    pub fn new(material: MaterialParameters, grid: EnergyGrid) -> Result<Self> {
        material.validate().map_err(|e| DriverError::Configuration {
            material: material.id.clone(),
            message: e.to_string(),
        })?;
        if grid.energy()[0] < 0.0 {
            return Err(DriverError::Configuration {
                material: material.id.clone(),
                message: format!(
                    "energy grid reaches {} eV below the conduction-band edge",
                    -grid.energy()[0]
                ),
            });
        }
        Ok(Self {
            material,
            grid,
            solver: FermiSolver::default(),
            impurity_model: ImpurityModel::default(),
            impurity_concentration: None,
        })
    }

    /// Select the ionized-impurity scattering model
    pub fn with_impurity_model(mut self, model: ImpurityModel) -> Self {
        self.impurity_model = model;
        self
    }

    /// Override the ionized impurity concentration (1/m^3); defaults to the
    /// carrier concentration of each query
    pub fn with_impurity_concentration(mut self, concentration: f64) -> Self {
        self.impurity_concentration = Some(concentration);
        self
    }

    /// The material this model evaluates
    pub fn material(&self) -> &MaterialParameters {
        &self.material
    }

    /// The energy grid this model integrates over
    pub fn grid(&self) -> &EnergyGrid {
        &self.grid
    }

    fn evaluation_error(&self, stage: Stage, n: f64, t: f64, message: String) -> DriverError {
        DriverError::Evaluation {
            material: self.material.id.clone(),
            stage,
            concentration: n,
            temperature: t,
            message,
        }
    }

    /// Evaluate the transport coefficients at one (n, T) query
    ///
    /// With a pore geometry the nanopore mechanism joins the bulk scattering
    /// engine and the conductivity is volumetrically corrected afterwards;
    /// with `None` the result is the bulk material's.
    pub fn evaluate(
        &self,
        concentration: f64,
        temperature: f64,
        pore: Option<&PoreGeometry>,
    ) -> Result<TransportResult> {
        let carrier = self
            .solver
            .solve(&self.grid, &self.material, concentration, temperature)
            .map_err(|e| {
                self.evaluation_error(Stage::FermiLevel, concentration, temperature, e.to_string())
            })?;

        let impurity = match self.impurity_concentration {
            Some(n_i) => IonizedImpurity::new(self.impurity_model).with_concentration(n_i),
            None => IonizedImpurity::new(self.impurity_model),
        };
        let mut engine = ScatteringEngine::bulk(impurity);
        if let Some(&geometry) = pore {
            engine = engine.with(Box::new(NanoporeScattering::new(geometry)));
        }
        let spectrum = engine
            .spectrum(&self.grid, &self.material, &carrier)
            .map_err(|e| {
                self.evaluation_error(Stage::Scattering, concentration, temperature, e.to_string())
            })?;

        let result = transport_coefficients(&self.grid, &carrier, spectrum.lifetime())
            .map_err(|e| {
                self.evaluation_error(Stage::Transport, concentration, temperature, e.to_string())
            })?;

        Ok(match pore {
            Some(geometry) => apply_volumetric_correction(&result, geometry.porosity),
            None => result,
        })
    }

    /// Evaluate many query points in parallel, preserving query order
    ///
    /// A failing point is logged at warn level and recorded in its slot; the
    /// other points are unaffected.
    pub fn sweep(&self, queries: &[SweepQuery]) -> Vec<SweepRecord> {
        queries
            .par_iter()
            .map(|&query| {
                let outcome =
                    self.evaluate(query.concentration, query.temperature, query.pore.as_ref());
                if let Err(ref e) = outcome {
                    log::warn!("sweep point skipped: {e}");
                }
                SweepRecord { query, outcome }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::silicon;
    use crate::porosity::PoreShape;

    fn model() -> TransportModel {
        let si = silicon();
        let grid = EnergyGrid::analytic(&si, 0.0, 1.0, 2000).unwrap();
        TransportModel::new(si, grid).unwrap()
    }

    #[test]
    fn bulk_silicon_evaluates_to_physical_coefficients() {
        let result = model().evaluate(1.0e25, 300.0, None).unwrap();
        assert!(result.sigma > 1.0e3 && result.sigma < 5.0e6, "sigma = {}", result.sigma);
        assert!(result.seebeck < 0.0, "S = {}", result.seebeck);
        assert!(result.kappa_e > 0.0);
    }

    #[test]
    fn pores_lower_sigma_and_raise_the_seebeck_magnitude() {
        let m = model();
        let bulk = m.evaluate(1.0e25, 300.0, None).unwrap();
        let geometry = PoreGeometry::new(PoreShape::Sphere { radius: 2.0e-9 }, 0.05).unwrap();
        let porous = m.evaluate(1.0e25, 300.0, Some(&geometry)).unwrap();
        assert!(porous.sigma < bulk.sigma);
        assert!(porous.seebeck.abs() > bulk.seebeck.abs());
    }

    #[test]
    fn invalid_material_is_a_configuration_error() {
        let mut si = silicon();
        let grid = EnergyGrid::analytic(&si, 0.0, 1.0, 200).unwrap();
        si.sound_velocity = -1.0;
        assert!(matches!(
            TransportModel::new(si, grid),
            Err(DriverError::Configuration { .. })
        ));
    }

    #[test]
    fn sweep_preserves_order_and_isolates_failures() {
        let m = model();
        let queries = vec![
            SweepQuery {
                concentration: 1.0e25,
                temperature: 300.0,
                pore: None,
            },
            // negative concentration cannot solve
            SweepQuery {
                concentration: -1.0,
                temperature: 300.0,
                pore: None,
            },
            SweepQuery {
                concentration: 2.0e25,
                temperature: 400.0,
                pore: None,
            },
        ];
        let records = m.sweep(&queries);
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].query, queries[0]);
        assert_eq!(records[2].query, queries[2]);
        assert!(records[0].outcome.is_ok());
        assert!(matches!(
            records[1].outcome,
            Err(DriverError::Evaluation {
                stage: Stage::FermiLevel,
                ..
            })
        ));
        assert!(records[2].outcome.is_ok());
    }
}
