/*
MIT License

Copyright (c) 2026 pxrd-rs contributors
*/

//! Error types for the scattering module

/// Error types for scattering-factor lookups and structure factors
#[derive(Debug, thiserror::Error)]
pub enum ScatteringError {
    #[error("Unknown element symbol: {0}")]
    UnknownElement(String),
}

/// Result type for scattering operations
pub type Result<T> = std::result::Result<T, ScatteringError>;
