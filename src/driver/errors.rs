/*
MIT License

Copyright (c) 2026 thermoelectric-rs developers
*/

//! Error types for the transport-model driver

use std::fmt;
use thiserror::Error;

/// Result type for driver operations
pub type Result<T> = std::result::Result<T, DriverError>;

/// Pipeline stage where an evaluation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Fermi-level solve
    FermiLevel,
    /// Scattering-rate evaluation
    Scattering,
    /// Transport integration
    Transport,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::FermiLevel => write!(f, "fermi-level solve"),
            Stage::Scattering => write!(f, "scattering rates"),
            Stage::Transport => write!(f, "transport integration"),
        }
    }
}

/// Driver errors, carrying the query context so sweep logs are self-contained
#[derive(Error, Debug, Clone)]
pub enum DriverError {
    /// Error evaluating one (n, T) query point
    #[error(
        "{stage} failed for '{material}' at n = {concentration:.3e} m^-3, \
         T = {temperature} K: {message}"
    )]
    Evaluation {
        material: String,
        stage: Stage,
        concentration: f64,
        temperature: f64,
        message: String,
    },

    /// Error in the model configuration itself
    #[error("invalid configuration for '{material}': {message}")]
    Configuration { material: String, message: String },
}
