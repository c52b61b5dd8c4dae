/*
MIT License

Copyright (c) 2026 thermoelectric-rs developers
*/

//! # thermoelectric-rs
//!
//! Electron transport coefficients for doped semiconductors with nanoscale
//! porosity. The pipeline solves the Fermi level self-consistently from a
//! target carrier concentration, builds relaxation-time spectra for ionized
//! impurities, acoustic phonons and nanopores, and integrates the Boltzmann
//! transport equation in the single relaxation-time approximation for the
//! electrical conductivity, Seebeck coefficient, power factor, electronic
//! thermal conductivity and Lorenz number. Nanopores act as energy filters:
//! they scatter low-energy carriers preferentially, trading conductivity for
//! thermopower.
//!
//! ## Example
//!
//! ```no_run
//! use thermoelectric_rs::band::EnergyGrid;
//! use thermoelectric_rs::driver::TransportModel;
//! use thermoelectric_rs::material::silicon;
//! use thermoelectric_rs::porosity::{PoreGeometry, PoreShape};
//!
//! # fn main() -> anyhow::Result<()> {
//! let material = silicon();
//! let grid = EnergyGrid::analytic(&material, 0.0, 1.0, 4000)?;
//! let model = TransportModel::new(material, grid)?;
//!
//! let bulk = model.evaluate(1.0e25, 300.0, None)?;
//! let pores = PoreGeometry::new(PoreShape::Sphere { radius: 2.0e-9 }, 0.05)?;
//! let porous = model.evaluate(1.0e25, 300.0, Some(&pores))?;
//! assert!(porous.seebeck.abs() > bulk.seebeck.abs());
//! # Ok(())
//! # }
//! ```

pub mod band;
pub mod cli;
pub mod driver;
pub mod fermi;
pub mod material;
pub mod porosity;
pub mod scattering;
pub mod transport;
pub mod utils;

pub use band::EnergyGrid;
pub use driver::{SweepQuery, SweepRecord, TransportModel};
pub use fermi::{CarrierState, FermiSolver};
pub use material::MaterialParameters;
pub use porosity::{NanoporeScattering, PoreGeometry, PoreShape};
pub use scattering::{ImpurityModel, IonizedImpurity, ScatteringEngine};
pub use transport::TransportResult;

/// Version of the thermoelectric-rs crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
