/*
MIT License

Copyright (c) 2026 pxrd-rs contributors
*/

use std::f64::consts::PI;

use approx::assert_relative_eq;
use rstest::rstest;

use pxrd_rs::lattice::{
    generate_candidates, position, q_hkl, q_to_two_theta, two_theta_to_q, unit_cell_vertices,
    LatticeError, LatticeParameters, MillerIndex, Vector3D,
};

#[rstest]
#[case(LatticeParameters::cubic(5.43))]
#[case(LatticeParameters::new(4.5, 6.2, 7.9, 72.0, 98.0, 113.0))]
#[case(LatticeParameters::new(3.2, 3.2, 5.2, 90.0, 90.0, 120.0))]
fn test_q_is_centrosymmetric(#[case] lattice: LatticeParameters) {
    assert!(lattice.validate().is_ok());
    for hkl in generate_candidates(3, 3, 3) {
        let mirrored = MillerIndex::new(-hkl.h, -hkl.k, -hkl.l);
        assert_relative_eq!(
            q_hkl(hkl, &lattice).unwrap(),
            q_hkl(mirrored, &lattice).unwrap(),
            epsilon = 1e-12
        );
    }
}

#[test]
fn test_cubic_q_matches_closed_form() {
    let a = 5.43;
    let lattice = LatticeParameters::cubic(a);
    let q = q_hkl(MillerIndex::new(1, 1, 1), &lattice).unwrap();
    assert_relative_eq!(q, 2.0 * PI / a * 3.0_f64.sqrt(), epsilon = 1e-12);
    assert_relative_eq!(q, 2.004, epsilon = 1e-3);
}

#[test]
fn test_fractional_origin_maps_to_cartesian_origin() {
    let lattices = [
        LatticeParameters::cubic(5.64),
        LatticeParameters::new(4.5, 6.2, 7.9, 72.0, 98.0, 113.0),
    ];
    for lattice in &lattices {
        assert_eq!(
            position([0.0, 0.0, 0.0], lattice).unwrap(),
            Vector3D::origin()
        );
    }
}

#[test]
fn test_hexagonal_position_geometry() {
    // gamma = 120 degrees: the b axis leans back along x
    let lattice = LatticeParameters::new(3.0, 3.0, 5.0, 90.0, 90.0, 120.0);
    let cart = position([0.0, 1.0, 0.0], &lattice).unwrap();
    assert_relative_eq!(cart.x, 3.0 * (120.0_f64.to_radians()).cos(), epsilon = 1e-12);
    assert_relative_eq!(cart.y, 3.0 * (120.0_f64.to_radians()).sin(), epsilon = 1e-12);
    assert_relative_eq!(cart.z, 0.0, epsilon = 1e-12);
}

#[test]
fn test_candidate_generator_counts() {
    assert_eq!(generate_candidates(1, 1, 1).len(), 26);
    assert_eq!(generate_candidates(4, 4, 4).len(), 9 * 9 * 9 - 1);
    assert_eq!(generate_candidates(0, 0, 0).len(), 0);
}

#[test]
fn test_degenerate_metric_reported_not_nan() {
    let flat = LatticeParameters::new(5.0, 5.0, 5.0, 170.0, 170.0, 170.0);
    assert!(flat.metric_determinant() <= 0.0);
    assert!(matches!(
        q_hkl(MillerIndex::new(1, 1, 1), &flat),
        Err(LatticeError::DegenerateMetric { .. })
    ));
    assert!(matches!(
        position([0.5, 0.5, 0.5], &flat),
        Err(LatticeError::DegenerateMetric { .. })
    ));
}

#[test]
fn test_two_theta_conversion_and_domain() {
    let wavelength = 1.5498;
    for tth in [5.0, 27.5, 65.0, 120.0] {
        let q = two_theta_to_q(tth, wavelength);
        assert_relative_eq!(q_to_two_theta(q, wavelength).unwrap(), tth, epsilon = 1e-10);
    }
    let beyond = 4.0 * PI / wavelength + 0.1;
    assert!(matches!(
        q_to_two_theta(beyond, wavelength),
        Err(LatticeError::TwoThetaDomain { .. })
    ));
}

#[test]
fn test_cell_vertices_span_the_cell() {
    let lattice = LatticeParameters::new(4.5, 6.2, 7.9, 72.0, 98.0, 113.0);
    let vertices = unit_cell_vertices(&lattice).unwrap();
    assert_eq!(vertices[0], Vector3D::origin());
    // the far corner is the sum of the three edge vectors
    let sum = vertices[1] + vertices[2] + vertices[3];
    assert_relative_eq!(sum.x, vertices[7].x, epsilon = 1e-10);
    assert_relative_eq!(sum.y, vertices[7].y, epsilon = 1e-10);
    assert_relative_eq!(sum.z, vertices[7].z, epsilon = 1e-10);
}
