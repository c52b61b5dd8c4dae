/*
MIT License

Copyright (c) 2026 thermoelectric-rs developers
*/

//! Model-level energy filtering
//!
//! Two idealizations used to bound what real pore filtering can achieve. The
//! ideal filter removes every carrier below a cutoff energy outright; the
//! phenomenological filter imposes a constant lifetime below the cutoff and
//! combines it with the bulk lifetime by Matthiessen's rule.

use super::errors::{Result, TransportError};
use super::{transport_coefficients, TransportResult};
use crate::band::EnergyGrid;
use crate::fermi::CarrierState;
use ndarray::Array1;

fn check_cutoff(cutoff: f64) -> Result<()> {
    if !(cutoff >= 0.0) || !cutoff.is_finite() {
        return Err(TransportError::Domain(format!(
            "filtering cutoff must be non-negative, got {cutoff}"
        )));
    }
    Ok(())
}

/// Ideal energy filtering: tau = 0 below the cutoff, bulk above
///
/// The cutoff is in eV above the band edge. This is the upper bound on the
/// Seebeck enhancement any filter of that height can provide.
pub fn ideal_filtering(
    grid: &EnergyGrid,
    carrier: &CarrierState,
    bulk_lifetime: &Array1<f64>,
    cutoff: f64,
) -> Result<TransportResult> {
    check_cutoff(cutoff)?;
    let mut tau = bulk_lifetime.clone();
    for (t, &e) in tau.iter_mut().zip(grid.energy().iter()) {
        if e < cutoff {
            *t = 0.0;
        }
    }
    transport_coefficients(grid, carrier, &tau)
}

/// Phenomenological filtering: a constant lifetime below the cutoff
///
/// Below the cutoff the filter lifetime `tau_filter` is combined with the
/// bulk lifetime by Matthiessen's rule; above it the bulk lifetime passes
/// through unchanged.
pub fn phenomenological_filtering(
    grid: &EnergyGrid,
    carrier: &CarrierState,
    bulk_lifetime: &Array1<f64>,
    cutoff: f64,
    tau_filter: f64,
) -> Result<TransportResult> {
    check_cutoff(cutoff)?;
    if !(tau_filter > 0.0) || !tau_filter.is_finite() {
        return Err(TransportError::Domain(format!(
            "filter lifetime must be positive, got {tau_filter}"
        )));
    }
    let mut tau = bulk_lifetime.clone();
    for (t, &e) in tau.iter_mut().zip(grid.energy().iter()) {
        if e < cutoff && *t > 0.0 {
            *t = 1.0 / (1.0 / *t + 1.0 / tau_filter);
        }
    }
    transport_coefficients(grid, carrier, &tau)
}

/// Ideal-filtering results over a grid of cutoff energies
pub fn ideal_filtering_sweep(
    grid: &EnergyGrid,
    carrier: &CarrierState,
    bulk_lifetime: &Array1<f64>,
    cutoffs: &[f64],
) -> Result<Vec<TransportResult>> {
    cutoffs
        .iter()
        .map(|&u| ideal_filtering(grid, carrier, bulk_lifetime, u))
        .collect()
}

/// Phenomenological-filtering results over cutoff and filter-lifetime grids
///
/// Returns one row per filter lifetime, one column per cutoff.
pub fn phenomenological_sweep(
    grid: &EnergyGrid,
    carrier: &CarrierState,
    bulk_lifetime: &Array1<f64>,
    cutoffs: &[f64],
    filter_lifetimes: &[f64],
) -> Result<Vec<Vec<TransportResult>>> {
    filter_lifetimes
        .iter()
        .map(|&tau_filter| {
            cutoffs
                .iter()
                .map(|&u| {
                    phenomenological_filtering(grid, carrier, bulk_lifetime, u, tau_filter)
                })
                .collect()
        })
        .collect()
}
