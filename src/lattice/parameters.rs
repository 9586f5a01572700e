/*
MIT License

Copyright (c) 2026 pxrd-rs contributors
*/

//! Lattice parameters of the triclinic unit cell
//!
//! All six parameters are kept in the units the rest of the engine expects:
//! edge lengths in Angstroms and angles in degrees. The angles are only
//! meaningful when the triclinic metric determinant is strictly positive;
//! `validate` rejects any combination that degenerates the cell.

use serde::{Deserialize, Serialize};

use super::errors::{LatticeError, Result};
use crate::utils::deg_to_rad;

/// The six lattice parameters {a, b, c, alpha, beta, gamma}
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatticeParameters {
    /// Edge length a in Angstroms
    pub a: f64,
    /// Edge length b in Angstroms
    pub b: f64,
    /// Edge length c in Angstroms
    pub c: f64,
    /// Angle between the b and c axes, in degrees
    pub alpha: f64,
    /// Angle between the a and c axes, in degrees
    pub beta: f64,
    /// Angle between the a and b axes, in degrees
    pub gamma: f64,
}

impl Default for LatticeParameters {
    /// Rock-salt-like cubic cell, the reference default structure
    fn default() -> Self {
        Self::cubic(5.640)
    }
}

impl LatticeParameters {
    /// Create a general triclinic cell
    pub fn new(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Self {
        Self {
            a,
            b,
            c,
            alpha,
            beta,
            gamma,
        }
    }

    /// Create a cubic cell of edge `a`
    pub fn cubic(a: f64) -> Self {
        Self::new(a, a, a, 90.0, 90.0, 90.0)
    }

    /// The triclinic metric determinant term
    /// `1 - cos^2(alpha) - cos^2(beta) - cos^2(gamma) + 2 cos(alpha) cos(beta) cos(gamma)`.
    ///
    /// Strictly positive for every physically realizable cell; zero or
    /// negative combinations have no defined reciprocal-space geometry.
    pub fn metric_determinant(&self) -> f64 {
        let ca = deg_to_rad(self.alpha).cos();
        let cb = deg_to_rad(self.beta).cos();
        let cg = deg_to_rad(self.gamma).cos();
        1.0 - ca * ca - cb * cb - cg * cg + 2.0 * ca * cb * cg
    }

    /// Validate the parameter set
    ///
    /// # Returns
    ///
    /// `Ok(())` when all lengths are positive, all angles lie in the open
    /// interval (0, 180) degrees and the metric determinant is strictly
    /// positive; a [`LatticeError`] otherwise.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("a", self.a), ("b", self.b), ("c", self.c)] {
            if !(value > 0.0) || !value.is_finite() {
                return Err(LatticeError::InvalidParameter(format!(
                    "edge length {} must be positive and finite, got {}",
                    name, value
                )));
            }
        }
        for (name, value) in [
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("gamma", self.gamma),
        ] {
            if !(value > 0.0 && value < 180.0) {
                return Err(LatticeError::InvalidParameter(format!(
                    "angle {} must lie in (0, 180) degrees, got {}",
                    name, value
                )));
            }
        }
        if self.metric_determinant() <= 0.0 {
            return Err(LatticeError::DegenerateMetric {
                alpha: self.alpha,
                beta: self.beta,
                gamma: self.gamma,
            });
        }
        Ok(())
    }
}
