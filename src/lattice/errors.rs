/*
MIT License

Copyright (c) 2026 pxrd-rs contributors
*/

//! Error types for the lattice module

/// Error types for lattice geometry operations
#[derive(Debug, thiserror::Error)]
pub enum LatticeError {
    #[error("Invalid lattice parameter: {0}")]
    InvalidParameter(String),

    #[error(
        "Degenerate triclinic metric for angles alpha={alpha}, beta={beta}, gamma={gamma} degrees"
    )]
    DegenerateMetric { alpha: f64, beta: f64, gamma: f64 },

    #[error("Q = {q} A^-1 at wavelength {wavelength} A lies outside the scattering sphere")]
    TwoThetaDomain { q: f64, wavelength: f64 },
}

/// Result type for lattice operations
pub type Result<T> = std::result::Result<T, LatticeError>;
