/*
MIT License

Copyright (c) 2026 pxrd-rs contributors
*/

//! Lattice geometry for the diffraction engine
//!
//! This module covers real-space and reciprocal-space geometry of the
//! triclinic unit cell: fractional-to-Cartesian mapping, Q magnitudes of
//! Miller indices, angle conversions and the candidate-index generator.

pub mod errors;
pub mod geometry;
pub mod hkl;
pub mod parameters;
pub mod vector;

pub use errors::{LatticeError, Result};
pub use geometry::{
    position, q_hkl, q_to_two_theta, two_theta_to_q, unit_cell_vertices, CELL_EDGES,
};
pub use hkl::{generate_candidates, MillerIndex};
pub use parameters::LatticeParameters;
pub use vector::Vector3D;
