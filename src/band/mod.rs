/*
MIT License

Copyright (c) 2026 thermoelectric-rs developers
*/

//! Band data: energy grids with density of states and group velocity
//!
//! The transport pipeline consumes precomputed band data: a density of states
//! D(E) in 1/(eV m^3) and a group velocity v(E) in m/s tabulated on an
//! ascending energy grid, with energies in eV measured from the conduction
//! band edge. Tables typically come from an external DFT calculation; the
//! [`analytic`] module supplies a closed-form fallback.

pub mod analytic;
pub mod errors;

use crate::material::MaterialParameters;
use errors::{BandError, Result};
use ndarray::Array1;
use std::path::Path;

/// Tabulated band data on an ascending energy grid
#[derive(Debug, Clone)]
pub struct EnergyGrid {
    energy: Array1<f64>,
    dos: Array1<f64>,
    velocity: Array1<f64>,
}

impl EnergyGrid {
    /// Build a grid from raw columns, checking every invariant
    ///
    /// Energies must be strictly ascending and finite; the density of states
    /// must be non-negative.
    pub fn new(energy: Vec<f64>, dos: Vec<f64>, velocity: Vec<f64>) -> Result<Self> {
        if energy.len() != dos.len() || energy.len() != velocity.len() {
            return Err(BandError::InvalidGrid(format!(
                "column lengths differ: {} energies, {} DoS, {} velocities",
                energy.len(),
                dos.len(),
                velocity.len()
            )));
        }
        if energy.len() < 2 {
            return Err(BandError::InvalidGrid(
                "an energy grid needs at least two samples".to_string(),
            ));
        }
        for window in energy.windows(2) {
            if !(window[1] > window[0]) {
                return Err(BandError::InvalidGrid(format!(
                    "energies must be strictly ascending, found {} after {}",
                    window[1], window[0]
                )));
            }
        }
        for (i, &v) in energy.iter().chain(dos.iter()).chain(velocity.iter()).enumerate() {
            if !v.is_finite() {
                return Err(BandError::InvalidGrid(format!(
                    "non-finite band value at flat index {i}"
                )));
            }
        }
        if let Some(&d) = dos.iter().find(|&&d| d < 0.0) {
            return Err(BandError::InvalidGrid(format!(
                "density of states must be non-negative, found {d}"
            )));
        }
        Ok(Self {
            energy: Array1::from_vec(energy),
            dos: Array1::from_vec(dos),
            velocity: Array1::from_vec(velocity),
        })
    }

    /// Parse a whitespace-separated three-column table (energy, DoS, velocity)
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn from_table_str(text: &str) -> Result<Self> {
        let mut energy = Vec::new();
        let mut dos = Vec::new();
        let mut velocity = Vec::new();
        for (line_no, line) in text.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = trimmed.split_whitespace().collect();
            if fields.len() != 3 {
                return Err(BandError::Parse(format!(
                    "line {}: expected 3 columns, found {}",
                    line_no + 1,
                    fields.len()
                )));
            }
            let mut values = [0.0_f64; 3];
            for (slot, field) in values.iter_mut().zip(fields.iter()) {
                *slot = field.parse().map_err(|_| {
                    BandError::Parse(format!("line {}: cannot parse '{}'", line_no + 1, field))
                })?;
            }
            energy.push(values[0]);
            dos.push(values[1]);
            velocity.push(values[2]);
        }
        Self::new(energy, dos, velocity)
    }

    /// Read a band table from disk
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| BandError::Io(format!("{}: {e}", path.display())))?;
        Self::from_table_str(&text)
    }

    /// Build a uniform grid from the analytic nonparabolic band model
    pub fn analytic(
        material: &MaterialParameters,
        e_min: f64,
        e_max: f64,
        samples: usize,
    ) -> Result<Self> {
        material.validate()?;
        if !(e_max > e_min) || samples < 2 {
            return Err(BandError::InvalidParameter(format!(
                "invalid analytic grid request: [{e_min}, {e_max}] with {samples} samples"
            )));
        }
        let step = (e_max - e_min) / (samples - 1) as f64;
        let energy: Vec<f64> = (0..samples).map(|i| e_min + i as f64 * step).collect();
        let dos = energy
            .iter()
            .map(|&e| analytic::density_of_states(material, e))
            .collect();
        let velocity = energy
            .iter()
            .map(|&e| analytic::group_velocity(material, e))
            .collect();
        Self::new(energy, dos, velocity)
    }

    /// Number of energy samples
    pub fn len(&self) -> usize {
        self.energy.len()
    }

    /// True when the grid holds no samples (cannot happen for a valid grid)
    pub fn is_empty(&self) -> bool {
        self.energy.is_empty()
    }

    /// Energy samples in eV above the band edge
    pub fn energy(&self) -> &Array1<f64> {
        &self.energy
    }

    /// Density of states in 1/(eV m^3)
    pub fn dos(&self) -> &Array1<f64> {
        &self.dos
    }

    /// Group velocity in m/s
    pub fn velocity(&self) -> &Array1<f64> {
        &self.velocity
    }
}
