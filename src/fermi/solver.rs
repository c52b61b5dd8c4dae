/*
MIT License

Copyright (c) 2026 thermoelectric-rs developers
*/

//! Self-consistent Fermi-level solver
//!
//! Seeds with the Joyce-Dixon closed form for degenerate semiconductors and
//! refines by bisection on the charge-balance residual. Solutions are cached
//! per quantized (n, T) pair for reuse inside sweeps.

use super::errors::{FermiError, Result};
use super::{effective_dos_concentration, occupation, CarrierState};
use crate::band::EnergyGrid;
use crate::material::MaterialParameters;
use crate::utils::constants::BOLTZMANN_EV;
use crate::utils::math::{bisect, trapezoid};
use std::collections::HashMap;
use std::sync::RwLock;

/// Initial bracket below/above the Joyce-Dixon seed, in eV (the window the
/// self-consistent refinement scans)
const BRACKET_BELOW: f64 = 0.4;
const BRACKET_ABOVE: f64 = 0.2;

/// Bounded number of geometric bracket expansions per side
const MAX_EXPANSIONS: usize = 60;

/// Cache keys quantize (n, T) to integers to make floats hashable
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
struct FermiKey {
    log_n: i64, // ln(n) with 1e-9 resolution
    temp: i64,  // T with 1e-6 K resolution
}

impl FermiKey {
    fn new(concentration: f64, temperature: f64) -> Self {
        Self {
            log_n: (concentration.ln() * 1.0e9).round() as i64,
            temp: (temperature * 1.0e6).round() as i64,
        }
    }
}

/// Fermi-level solver with per-(n, T) result caching
#[derive(Debug)]
pub struct FermiSolver {
    tolerance: f64,
    max_iterations: usize,
    cache: RwLock<HashMap<FermiKey, f64>>,
}

impl Default for FermiSolver {
    fn default() -> Self {
        Self::new(1.0e-6, 200)
    }
}

impl FermiSolver {
    /// Create a solver with a relative charge-balance tolerance and an
    /// iteration cap
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Joyce-Dixon closed-form approximation of the reduced Fermi level
    ///
    /// eta = ln(n/Nc) + (n/Nc)/sqrt(8) - (3/16 - sqrt(3)/9) (n/Nc)^2
    pub fn joyce_dixon(concentration: f64, nc: f64, temperature: f64) -> f64 {
        let r = concentration / nc;
        let eta = r.ln() + r / 8.0_f64.sqrt() - (3.0 / 16.0 - 3.0_f64.sqrt() / 9.0) * r.powi(2);
        BOLTZMANN_EV * temperature * eta
    }

    /// Carrier concentration Int D(E) f(E_f, E, T) dE over the grid, in 1/m^3
    pub fn carrier_integral(grid: &EnergyGrid, fermi_level: f64, temperature: f64) -> f64 {
        let occupied = grid
            .energy()
            .iter()
            .zip(grid.dos().iter())
            .map(|(&e, &d)| d * occupation(e, fermi_level, temperature))
            .collect::<ndarray::Array1<f64>>();
        trapezoid(grid.energy(), &occupied)
            .expect("EnergyGrid guarantees at least two matched ascending samples")
    }

    /// Charge-balance residual g(E_f) = n - Int D(E) f(E_f, E, T) dE
    pub fn charge_balance_residual(
        grid: &EnergyGrid,
        fermi_level: f64,
        concentration: f64,
        temperature: f64,
    ) -> f64 {
        concentration - Self::carrier_integral(grid, fermi_level, temperature)
    }

    /// Solve for the Fermi level at a target carrier concentration
    ///
    /// # Arguments
    ///
    /// * `grid` - Band data with energies measured from the band edge
    /// * `material` - Material parameters (for N_c and the mass correction)
    /// * `concentration` - Target carrier concentration in 1/m^3
    /// * `temperature` - Temperature in K
    ///
    /// # Returns
    ///
    /// A [`CarrierState`] whose Fermi level satisfies the charge-balance
    /// equation to the solver tolerance, or a `Convergence` error when the
    /// residual cannot be brought below tolerance within the iteration cap
    /// (pathological D(E) or out-of-range n).
    pub fn solve(
        &self,
        grid: &EnergyGrid,
        material: &MaterialParameters,
        concentration: f64,
        temperature: f64,
    ) -> Result<CarrierState> {
        if !(concentration > 0.0) || !concentration.is_finite() {
            return Err(FermiError::Domain(format!(
                "carrier concentration must be positive, got {concentration}"
            )));
        }
        if !(temperature > 0.0) || !temperature.is_finite() {
            return Err(FermiError::Domain(format!(
                "temperature must be positive, got {temperature}"
            )));
        }

        let key = FermiKey::new(concentration, temperature);
        if let Ok(cache) = self.cache.read() {
            if let Some(&fermi_level) = cache.get(&key) {
                return Ok(CarrierState {
                    concentration,
                    temperature,
                    fermi_level,
                });
            }
        }

        let nc = effective_dos_concentration(material, temperature);
        let seed = Self::joyce_dixon(concentration, nc, temperature);
        log::debug!(
            "fermi solve for '{}': n = {concentration:.3e} m^-3, T = {temperature} K, \
             Nc = {nc:.3e} m^-3, Joyce-Dixon seed = {seed:.4} eV",
            material.id
        );

        let residual =
            |ef: f64| Self::charge_balance_residual(grid, ef, concentration, temperature);

        // g is decreasing in E_f; expand geometrically until the root is
        // bracketed (g(lo) > 0 > g(hi)) or the expansion cap is hit
        let mut lo = seed - BRACKET_BELOW;
        let mut width = BRACKET_BELOW;
        let mut expansions = 0;
        while residual(lo) < 0.0 {
            expansions += 1;
            if expansions > MAX_EXPANSIONS {
                return Err(FermiError::Convergence(format!(
                    "no lower bracket for n = {concentration:.3e} m^-3 at T = {temperature} K"
                )));
            }
            width *= 2.0;
            lo = seed - width;
        }
        let mut hi = seed + BRACKET_ABOVE;
        let mut width = BRACKET_ABOVE;
        let mut expansions = 0;
        while residual(hi) > 0.0 {
            expansions += 1;
            if expansions > MAX_EXPANSIONS {
                // the grid cannot hold this many carriers however deep E_f goes
                return Err(FermiError::Convergence(format!(
                    "no upper bracket for n = {concentration:.3e} m^-3 at T = {temperature} K \
                     (grid holds too few states?)"
                )));
            }
            width *= 2.0;
            hi = seed + width;
        }

        let fermi_level = bisect(
            residual,
            lo,
            hi,
            self.tolerance * concentration,
            self.max_iterations,
        )
        .map_err(|e| {
            FermiError::Convergence(format!(
                "charge balance for n = {concentration:.3e} m^-3 at T = {temperature} K: {e}"
            ))
        })?;

        if let Ok(mut cache) = self.cache.write() {
            // bounded cache: wipe rather than evict, sweeps rarely exceed this
            if cache.len() > 4096 {
                cache.clear();
            }
            cache.insert(key, fermi_level);
        }

        Ok(CarrierState {
            concentration,
            temperature,
            fermi_level,
        })
    }
}
