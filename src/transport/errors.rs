/*
MIT License

Copyright (c) 2026 thermoelectric-rs developers
*/

//! Error types for the transport module

use thiserror::Error;

/// Result type for transport operations
pub type Result<T> = std::result::Result<T, TransportError>;

/// Transport-integration errors
#[derive(Error, Debug)]
pub enum TransportError {
    /// Error when an input is outside the physical domain
    #[error("Domain error: {0}")]
    Domain(String),

    /// Error when a transport integral degenerates or loses finiteness
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Error from the shared math utilities
    #[error("Math error: {0}")]
    Math(#[from] crate::utils::errors::UtilsError),
}
