/*
MIT License

Copyright (c) 2026 thermoelectric-rs developers
*/

//! Error types for the scattering module

use thiserror::Error;

/// Result type for scattering operations
pub type Result<T> = std::result::Result<T, ScatteringError>;

/// Scattering-engine errors
#[derive(Error, Debug)]
pub enum ScatteringError {
    /// Error when a material or mechanism parameter is non-physical
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error when a rate is requested outside the model's valid range
    #[error("Domain error: {0}")]
    Domain(String),
}

impl From<crate::material::errors::MaterialError> for ScatteringError {
    fn from(err: crate::material::errors::MaterialError) -> Self {
        ScatteringError::InvalidParameter(err.to_string())
    }
}

impl From<crate::porosity::errors::PoreError> for ScatteringError {
    fn from(err: crate::porosity::errors::PoreError) -> Self {
        ScatteringError::InvalidParameter(err.to_string())
    }
}
