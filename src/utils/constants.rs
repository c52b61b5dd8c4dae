/*
MIT License

Copyright (c) 2026 thermoelectric-rs developers
*/

//! Physical constants used in transport calculations
//!
//! Energies are carried in eV throughout the crate; the elementary charge
//! doubles as the eV -> J conversion factor.

/// Reduced Planck constant in eV.s
pub const HBAR_EV: f64 = 6.582119e-16;

/// Boltzmann constant in eV/K
pub const BOLTZMANN_EV: f64 = 8.617330350e-5;

/// Elementary charge in C (also converts eV to J)
pub const ELEMENTARY_CHARGE: f64 = 1.6021765e-19;

/// Vacuum permittivity in F/m
pub const VACUUM_PERMITTIVITY: f64 = 8.854187817e-12;

/// Electron rest mass in kg
pub const ELECTRON_MASS: f64 = 9.109e-31;

/// Reduced Planck constant in J.s
pub const HBAR_J: f64 = HBAR_EV * ELEMENTARY_CHARGE;

/// Boltzmann constant in J/K
pub const BOLTZMANN_J: f64 = BOLTZMANN_EV * ELEMENTARY_CHARGE;
