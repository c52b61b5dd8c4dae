/*
MIT License

Copyright (c) 2026 thermoelectric-rs developers
*/

//! Utility functions for transport calculations
//!
//! This module provides common utilities used throughout the crate.

pub mod constants;
pub mod errors;
pub mod math;

/// Convert a density from 1/cm^3 to 1/m^3
pub fn per_cm3_to_per_m3(value: f64) -> f64 {
    value * 1.0e6
}

/// Convert a density from 1/m^3 to 1/cm^3
pub fn per_m3_to_per_cm3(value: f64) -> f64 {
    value * 1.0e-6
}

/// Convert a length from nanometers to meters
pub fn nm_to_m(value: f64) -> f64 {
    value * 1.0e-9
}

/// Convert an energy from eV to Joule
pub fn ev_to_joule(value: f64) -> f64 {
    value * constants::ELEMENTARY_CHARGE
}

/// Convert an energy from Joule to eV
pub fn joule_to_ev(value: f64) -> f64 {
    value / constants::ELEMENTARY_CHARGE
}
