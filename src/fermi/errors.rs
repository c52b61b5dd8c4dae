/*
MIT License

Copyright (c) 2026 thermoelectric-rs developers
*/

//! Error types for the Fermi-level solver

use thiserror::Error;

/// Result type for Fermi-level operations
pub type Result<T> = std::result::Result<T, FermiError>;

/// Fermi-level solver errors
#[derive(Error, Debug)]
pub enum FermiError {
    /// Error when the charge-balance iteration does not converge
    #[error("Convergence failure: {0}")]
    Convergence(String),

    /// Error when a solver input is non-physical
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error when the query lies outside the model's valid range
    #[error("Domain error: {0}")]
    Domain(String),
}

impl From<crate::material::errors::MaterialError> for FermiError {
    fn from(err: crate::material::errors::MaterialError) -> Self {
        FermiError::InvalidParameter(err.to_string())
    }
}
