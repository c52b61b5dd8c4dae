/*
MIT License

Copyright (c) 2026 thermoelectric-rs developers
*/

//! Error types for the porosity module

use thiserror::Error;

/// Result type for porosity operations
pub type Result<T> = std::result::Result<T, PoreError>;

/// Pore-geometry errors
#[derive(Error, Debug)]
pub enum PoreError {
    /// Error when a pore parameter is non-physical
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
