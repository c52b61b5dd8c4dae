/*
MIT License

Copyright (c) 2026 thermoelectric-rs developers
*/

//! Error types for the material module

use thiserror::Error;

/// Result type for material operations
pub type Result<T> = std::result::Result<T, MaterialError>;

/// Material-specific errors
#[derive(Error, Debug)]
pub enum MaterialError {
    /// Error when a material parameter is non-physical
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
