/*
MIT License

Copyright (c) 2026 pxrd-rs contributors
*/

//! Triclinic lattice geometry
//!
//! Real-space mapping of fractional coordinates onto Cartesian axes and the
//! reciprocal-space magnitude Q of a reflection, both via the standard
//! triclinic construction. The source of truth for the conventions is the
//! reference simulator: the a axis lies along x and the b axis in the x-y
//! plane.

use std::f64::consts::PI;

use super::errors::{LatticeError, Result};
use super::hkl::MillerIndex;
use super::parameters::LatticeParameters;
use super::vector::Vector3D;
use crate::utils::deg_to_rad;

/// Map a fractional unit-cell coordinate to a Cartesian position
///
/// # Arguments
///
/// * `fractional` - coordinate as fractions of the cell edge vectors
/// * `lattice` - the lattice parameters
///
/// # Returns
///
/// The Cartesian position in Angstroms, or [`LatticeError::DegenerateMetric`]
/// when the angle combination flattens the cell (sin(gamma) = 0 or a
/// negative z-axis square).
pub fn position(fractional: [f64; 3], lattice: &LatticeParameters) -> Result<Vector3D> {
    let [x, y, z] = fractional;
    let ca = deg_to_rad(lattice.alpha).cos();
    let sb = deg_to_rad(lattice.beta).sin();
    let cb = deg_to_rad(lattice.beta).cos();
    let sg = deg_to_rad(lattice.gamma).sin();
    let cg = deg_to_rad(lattice.gamma).cos();

    if sg.abs() < f64::EPSILON {
        return Err(LatticeError::DegenerateMetric {
            alpha: lattice.alpha,
            beta: lattice.beta,
            gamma: lattice.gamma,
        });
    }
    let abg = (ca - cg * cb) / sg;
    let z_sq = sb * sb - abg * abg;
    if z_sq < 0.0 {
        return Err(LatticeError::DegenerateMetric {
            alpha: lattice.alpha,
            beta: lattice.beta,
            gamma: lattice.gamma,
        });
    }

    Ok(Vector3D::new(
        x * lattice.a + y * lattice.b * cg + z * lattice.c * cb,
        y * lattice.b * sg + z * lattice.c * abg,
        z * lattice.c * z_sq.sqrt(),
    ))
}

/// Reciprocal-space magnitude Q of a reflection, in inverse Angstroms
///
/// Uses the general triclinic metric; for a cubic cell this reduces to
/// `2 pi / a * sqrt(h^2 + k^2 + l^2)`.
pub fn q_hkl(hkl: MillerIndex, lattice: &LatticeParameters) -> Result<f64> {
    let det = lattice.metric_determinant();
    if det <= 0.0 {
        return Err(LatticeError::DegenerateMetric {
            alpha: lattice.alpha,
            beta: lattice.beta,
            gamma: lattice.gamma,
        });
    }

    let ha = hkl.h as f64 / lattice.a;
    let kb = hkl.k as f64 / lattice.b;
    let lc = hkl.l as f64 / lattice.c;
    let sa = deg_to_rad(lattice.alpha).sin();
    let ca = deg_to_rad(lattice.alpha).cos();
    let sb = deg_to_rad(lattice.beta).sin();
    let cb = deg_to_rad(lattice.beta).cos();
    let sg = deg_to_rad(lattice.gamma).sin();
    let cg = deg_to_rad(lattice.gamma).cos();

    let numerator = ha * sa * ha * sa
        + kb * sb * kb * sb
        + lc * sg * lc * sg
        + 2.0 * ha * kb * (ca * cb - cg)
        + 2.0 * ha * lc * (ca * cg - cb)
        + 2.0 * kb * lc * (cb * cg - ca);

    Ok(2.0 * PI * (numerator / det).sqrt())
}

/// Convert a reciprocal-space magnitude to a scattering angle in degrees
///
/// # Returns
///
/// Two-theta in degrees, or [`LatticeError::TwoThetaDomain`] when
/// `|Q lambda / 4 pi| > 1` (the reflection lies outside the scattering
/// sphere, as in backscattering geometries).
pub fn q_to_two_theta(q: f64, wavelength: f64) -> Result<f64> {
    let arg = q * wavelength / (4.0 * PI);
    if arg.abs() > 1.0 {
        return Err(LatticeError::TwoThetaDomain { q, wavelength });
    }
    Ok(360.0 / PI * arg.asin())
}

/// Convert a scattering angle in degrees two-theta to Q in inverse Angstroms
pub fn two_theta_to_q(two_theta: f64, wavelength: f64) -> f64 {
    4.0 * PI / wavelength * (two_theta * PI / 360.0).sin()
}

/// Vertex index pairs forming the 12 edges of the unit cell, for the
/// rendering collaborator. Indices refer to [`unit_cell_vertices`] order.
pub const CELL_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (0, 2),
    (0, 3),
    (1, 4),
    (1, 5),
    (2, 4),
    (2, 6),
    (3, 5),
    (3, 6),
    (4, 7),
    (5, 7),
    (6, 7),
];

/// Cartesian positions of the eight unit-cell corners
///
/// Vertex order: (0,0,0), (1,0,0), (0,1,0), (0,0,1), (1,1,0), (1,0,1),
/// (0,1,1), (1,1,1), matching [`CELL_EDGES`].
pub fn unit_cell_vertices(lattice: &LatticeParameters) -> Result<[Vector3D; 8]> {
    const CORNERS: [[f64; 3]; 8] = [
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
        [1.0, 1.0, 0.0],
        [1.0, 0.0, 1.0],
        [0.0, 1.0, 1.0],
        [1.0, 1.0, 1.0],
    ];
    let mut vertices = [Vector3D::origin(); 8];
    for (vertex, corner) in vertices.iter_mut().zip(CORNERS.iter()) {
        *vertex = position(*corner, lattice)?;
    }
    Ok(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_origin_maps_to_origin() {
        let lattice = LatticeParameters::new(6.1, 4.2, 9.7, 78.0, 101.0, 93.0);
        let cart = position([0.0, 0.0, 0.0], &lattice).unwrap();
        assert_eq!(cart, Vector3D::origin());
    }

    #[test]
    fn test_cubic_position_is_diagonal() {
        let lattice = LatticeParameters::cubic(4.0);
        let cart = position([0.5, 0.5, 0.5], &lattice).unwrap();
        assert_relative_eq!(cart.x, 2.0, epsilon = 1e-12);
        assert_relative_eq!(cart.y, 2.0, epsilon = 1e-12);
        assert_relative_eq!(cart.z, 2.0, epsilon = 1e-12);
    }

    #[rstest]
    #[case(1, 1, 1)]
    #[case(2, 0, 0)]
    #[case(-1, 3, 2)]
    fn test_cubic_q_closed_form(#[case] h: i32, #[case] k: i32, #[case] l: i32) {
        let a = 5.43;
        let lattice = LatticeParameters::cubic(a);
        let q = q_hkl(MillerIndex::new(h, k, l), &lattice).unwrap();
        let expected = 2.0 * PI / a * ((h * h + k * k + l * l) as f64).sqrt();
        assert_relative_eq!(q, expected, epsilon = 1e-10);
    }

    #[test]
    fn test_q_silicon_111_reference_value() {
        let lattice = LatticeParameters::cubic(5.43);
        let q = q_hkl(MillerIndex::new(1, 1, 1), &lattice).unwrap();
        assert_relative_eq!(q, 2.004, epsilon = 1e-3);
    }

    #[test]
    fn test_q_centrosymmetry_triclinic() {
        let lattice = LatticeParameters::new(4.5, 6.2, 7.9, 72.0, 98.0, 113.0);
        assert!(lattice.validate().is_ok());
        for (h, k, l) in [(1, 0, 0), (1, 2, 3), (-2, 1, -1), (3, -3, 2)] {
            let q_plus = q_hkl(MillerIndex::new(h, k, l), &lattice).unwrap();
            let q_minus = q_hkl(MillerIndex::new(-h, -k, -l), &lattice).unwrap();
            assert_relative_eq!(q_plus, q_minus, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_degenerate_metric_is_an_error() {
        let lattice = LatticeParameters::new(5.0, 5.0, 5.0, 170.0, 170.0, 170.0);
        assert!(q_hkl(MillerIndex::new(1, 0, 0), &lattice).is_err());
        assert!(position([0.5, 0.5, 0.5], &lattice).is_err());
    }

    #[test]
    fn test_two_theta_round_trip() {
        let wavelength = 1.5498;
        let q = two_theta_to_q(42.0, wavelength);
        let tth = q_to_two_theta(q, wavelength).unwrap();
        assert_relative_eq!(tth, 42.0, epsilon = 1e-10);
    }

    #[test]
    fn test_two_theta_domain_error() {
        // Q beyond the 4 pi / lambda scattering sphere
        let wavelength = 1.55;
        let q = 4.0 * PI / wavelength * 1.01;
        assert!(matches!(
            q_to_two_theta(q, wavelength),
            Err(LatticeError::TwoThetaDomain { .. })
        ));
    }

    #[test]
    fn test_unit_cell_vertices_cubic() {
        let lattice = LatticeParameters::cubic(3.0);
        let vertices = unit_cell_vertices(&lattice).unwrap();
        assert_eq!(vertices[0], Vector3D::origin());
        assert_relative_eq!(vertices[7].x, 3.0, epsilon = 1e-12);
        assert_relative_eq!(vertices[7].y, 3.0, epsilon = 1e-12);
        assert_relative_eq!(vertices[7].z, 3.0, epsilon = 1e-12);
        // every edge of a cubic cell has length a
        for (i, j) in CELL_EDGES {
            assert_relative_eq!(vertices[i].distance(&vertices[j]), 3.0, epsilon = 1e-10);
        }
    }
}
