/*
MIT License

Copyright (c) 2026 thermoelectric-rs developers
*/

//! Boltzmann transport integrals in the relaxation-time approximation
//!
//! Every coefficient comes from moments of the transport distribution
//! chi(E) = D(E) v^2(E) df/dE weighted by the total lifetime tau(E):
//!
//!   sigma   = -(e/3) Int chi tau dE
//!   S       = -(<E> - E_f) / T
//!   kappa_e = -(e/3T) Delta_0 (<E^2> - <E>^2)
//!   L       = (<E^2> - <E>^2) / T^2
//!
//! with <E^n> the tau-weighted average over chi and Delta_0 = Int chi tau dE.
//! Energies are in eV throughout, so the Seebeck coefficient and Lorenz
//! number come out in V/K and V^2/K^2 without conversion factors.

pub mod errors;
pub mod filtering;

use crate::band::EnergyGrid;
use crate::fermi::{occupation_derivative, CarrierState};
use crate::utils::constants::ELEMENTARY_CHARGE;
use crate::utils::math::trapezoid;
use errors::{Result, TransportError};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Transport coefficients at one (n, T) query point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportResult {
    /// Electrical conductivity in S/m
    pub sigma: f64,
    /// Seebeck coefficient in V/K (negative for electrons)
    pub seebeck: f64,
    /// Electronic thermal conductivity in W/(m K)
    pub kappa_e: f64,
    /// Power factor sigma S^2 in W/(m K^2)
    pub power_factor: f64,
    /// Lorenz number in V^2/K^2
    pub lorenz: f64,
    /// Fermi level in eV above the band edge
    pub fermi_level: f64,
    /// Carrier concentration in 1/m^3
    pub concentration: f64,
    /// Temperature in K
    pub temperature: f64,
}

/// Transport distribution chi(E) = D(E) v^2(E) df/dE
pub fn transport_distribution(grid: &EnergyGrid, carrier: &CarrierState) -> Array1<f64> {
    let mut chi = Array1::zeros(grid.len());
    for (i, ((&e, &d), &v)) in grid
        .energy()
        .iter()
        .zip(grid.dos().iter())
        .zip(grid.velocity().iter())
        .enumerate()
    {
        chi[i] = d * v * v * occupation_derivative(e, carrier.fermi_level, carrier.temperature);
    }
    chi
}

/// Transport coefficients from the energy grid, carrier state and lifetime
///
/// The lifetime array must match the grid; zero lifetime at an energy simply
/// removes that energy from the integrals.
pub fn transport_coefficients(
    grid: &EnergyGrid,
    carrier: &CarrierState,
    lifetime: &Array1<f64>,
) -> Result<TransportResult> {
    if lifetime.len() != grid.len() {
        return Err(TransportError::Domain(format!(
            "lifetime array has {} entries for a {}-point grid",
            lifetime.len(),
            grid.len()
        )));
    }
    if carrier.temperature <= 0.0 {
        return Err(TransportError::Domain(format!(
            "temperature must be positive, got {}",
            carrier.temperature
        )));
    }

    let chi = transport_distribution(grid, carrier);
    let weighted = &chi * lifetime;
    let first = &weighted * grid.energy();
    let second = &first * grid.energy();

    let delta_0 = trapezoid(grid.energy(), &weighted)?;
    if !delta_0.is_finite() || delta_0.abs() < f64::MIN_POSITIVE {
        return Err(TransportError::NumericalInstability(format!(
            "vanishing transport integral Delta_0 = {delta_0}"
        )));
    }
    let delta_1 = trapezoid(grid.energy(), &first)? / delta_0;
    let delta_2 = trapezoid(grid.energy(), &second)? / delta_0;

    let t = carrier.temperature;
    let sigma = -ELEMENTARY_CHARGE / 3.0 * delta_0;
    let seebeck = -(delta_1 - carrier.fermi_level) / t;
    let variance = delta_2 - delta_1 * delta_1;
    let kappa_e = -ELEMENTARY_CHARGE / (3.0 * t) * delta_0 * variance;
    let lorenz = variance / (t * t);

    let result = TransportResult {
        sigma,
        seebeck,
        kappa_e,
        power_factor: sigma * seebeck * seebeck,
        lorenz,
        fermi_level: carrier.fermi_level,
        concentration: carrier.concentration,
        temperature: t,
    };

    for (name, value) in [
        ("sigma", result.sigma),
        ("seebeck", result.seebeck),
        ("kappa_e", result.kappa_e),
        ("lorenz", result.lorenz),
    ] {
        if !value.is_finite() {
            return Err(TransportError::NumericalInstability(format!(
                "{name} is not finite: {value}"
            )));
        }
    }
    Ok(result)
}
