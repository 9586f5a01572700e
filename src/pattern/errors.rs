/*
MIT License

Copyright (c) 2026 pxrd-rs contributors
*/

//! Error types for the pattern module

/// Error types for grid construction and pattern accumulation
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("Invalid angular range: {0}")]
    InvalidRange(String),

    #[error("Lattice error: {0}")]
    Lattice(#[from] crate::lattice::LatticeError),

    #[error("Scattering error: {0}")]
    Scattering(#[from] crate::scattering::ScatteringError),
}

/// Result type for pattern operations
pub type Result<T> = std::result::Result<T, PatternError>;
