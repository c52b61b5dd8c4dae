/*
MIT License

Copyright (c) 2026 thermoelectric-rs developers
*/

//! Error types for the band module

use thiserror::Error;

/// Result type for band-data operations
pub type Result<T> = std::result::Result<T, BandError>;

/// Band-data errors
#[derive(Error, Debug)]
pub enum BandError {
    /// Error when the energy grid violates an invariant
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),

    /// Error when tabulated band data cannot be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Error when band data cannot be read from disk
    #[error("I/O error: {0}")]
    Io(String),

    /// Error when an analytic band parameter is non-physical
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl From<crate::material::errors::MaterialError> for BandError {
    fn from(err: crate::material::errors::MaterialError) -> Self {
        BandError::InvalidParameter(err.to_string())
    }
}
