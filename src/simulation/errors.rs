/*
MIT License

Copyright (c) 2026 pxrd-rs contributors
*/

//! Error types for the simulation session
//!
//! Every session error is local and recoverable: a rejected edit leaves the
//! session state exactly as it was, so the caller can restore the previous
//! control value and surface a message.

/// Error types for session edits and recomputation
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("{name} = {value} outside the allowed range [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("No basis atom in slot {0}")]
    UnknownSlot(usize),

    #[error("The origin atom is fixed at (0, 0, 0) and cannot be moved or removed")]
    OriginImmutable,

    #[error("Basis is full ({capacity} atoms)")]
    BasisFull { capacity: usize },

    #[error("The null index (0 0 0) names no reflection")]
    NullIndex,

    #[error("Scattering error: {0}")]
    Scattering(#[from] crate::scattering::ScatteringError),

    #[error("Lattice error: {0}")]
    Lattice(#[from] crate::lattice::LatticeError),

    #[error("Pattern error: {0}")]
    Pattern(#[from] crate::pattern::PatternError),
}

/// Result type for session operations
pub type Result<T> = std::result::Result<T, SimulationError>;
