/*
MIT License

Copyright (c) 2026 pxrd-rs contributors
*/

use approx::assert_relative_eq;

use pxrd_rs::lattice::{MillerIndex, Vector3D};
use pxrd_rs::scattering::CromerMannTable;
use pxrd_rs::simulation::{
    BasisAtom, LatticeParam, ParameterBounds, Session, SimulationError, SimulationParams,
};

fn default_session() -> Session {
    Session::new(Box::new(CromerMannTable::new())).unwrap()
}

#[test]
fn test_default_session_produces_a_pattern() {
    let session = default_session();
    assert_eq!(session.intensity().len(), 1500);
    assert_eq!(session.two_theta().len(), 1500);
    assert!(!session.reflections().is_empty());
    assert!(session.intensity().iter().any(|&v| v > 0.0));
    assert_relative_eq!(session.wavelength(), 12.398 / 8.0, epsilon = 1e-12);
}

#[test]
fn test_out_of_range_edit_is_rejected_without_mutation() {
    let mut session = default_session();
    let energy_before = session.energy_kev();
    let intensity_before = session.intensity().clone();

    assert!(matches!(
        session.set_energy(25.0),
        Err(SimulationError::OutOfRange { name: "energy", .. })
    ));
    assert_eq!(session.energy_kev(), energy_before);
    assert_eq!(*session.intensity(), intensity_before);

    assert!(session.set_crystallite_size(5.0).is_err());
    assert!(session.set_lattice_parameter(LatticeParam::A, 1.0).is_err());
    assert!(session.set_hkl_bounds(20, 4, 4).is_err());
}

#[test]
fn test_degenerate_lattice_edit_is_rejected() {
    let mut session = default_session();
    session
        .set_lattice_parameter(LatticeParam::Alpha, 120.0)
        .unwrap();
    session
        .set_lattice_parameter(LatticeParam::Beta, 120.0)
        .unwrap();
    // a third wide angle would flatten the cell
    let result = session.set_lattice_parameter(LatticeParam::Gamma, 140.0);
    assert!(matches!(result, Err(SimulationError::Lattice(_))));
    assert_relative_eq!(session.lattice().gamma, 90.0, epsilon = 0.0);
}

#[test]
fn test_unknown_element_keeps_previous_element() {
    let mut session = default_session();
    let result = session.set_element(0, "Fx");
    assert!(matches!(result, Err(SimulationError::Scattering(_))));
    assert_eq!(session.basis().get(0).unwrap().element, "Fe");

    session.set_element(0, "Cu").unwrap();
    assert_eq!(session.basis().get(0).unwrap().element, "Cu");
}

#[test]
fn test_reflection_window_goes_stale_on_lattice_edits() {
    let mut session = default_session();
    let before = session.reflections().to_vec();

    // a drastic lattice edit recomputes the pattern but not the window
    session.set_lattice_parameter(LatticeParam::A, 2.5).unwrap();
    assert_eq!(session.reflections(), before.as_slice());

    // any window trigger refreshes the selection against the new lattice
    session.set_tth_max(65.0).unwrap();
    assert_ne!(session.reflections(), before.as_slice());
}

#[test]
fn test_hkl_bounds_regenerate_candidates() {
    let mut session = default_session();
    let wide = session.reflections().len();
    session.set_hkl_bounds(1, 1, 1).unwrap();
    let narrow = session.reflections().len();
    assert!(narrow < wide);
    assert!(session
        .reflections()
        .iter()
        .all(|hkl| hkl.h.abs() <= 1 && hkl.k.abs() <= 1 && hkl.l.abs() <= 1));
}

#[test]
fn test_angular_range_edits_rebuild_grid() {
    let mut session = default_session();
    session.set_tth_min(10.0).unwrap();
    session.set_tth_max(50.0).unwrap();
    session.set_tth_step(0.08).unwrap();
    assert_eq!(session.two_theta().len(), 500);
    assert_relative_eq!(session.two_theta()[0], 10.0, epsilon = 1e-12);
    assert_eq!(session.intensity().len(), 500);

    // crossing bounds is rejected, state intact
    assert!(session.set_tth_min(55.0).is_err());
    assert_relative_eq!(session.two_theta()[0], 10.0, epsilon = 1e-12);
}

#[test]
fn test_atom_stack_discipline_through_session() {
    let mut session = default_session();
    let slot = session
        .add_atom(BasisAtom::new("O", [0.5, 0.5, 0.5]))
        .unwrap();
    assert_eq!(slot, 1);
    assert_eq!(session.basis().len(), 2);

    assert!(matches!(
        session.set_position(0, [0.1, 0.0, 0.0]),
        Err(SimulationError::OriginImmutable)
    ));

    let removed = session.remove_atom().unwrap();
    assert_eq!(removed.element, "O");
    assert!(matches!(
        session.remove_atom(),
        Err(SimulationError::OriginImmutable)
    ));
}

#[test]
fn test_added_atom_changes_the_pattern() {
    let mut session = default_session();
    let alone = session.intensity().clone();
    session
        .add_atom(BasisAtom::new("Cl", [0.5, 0.5, 0.5]))
        .unwrap();
    assert_ne!(*session.intensity(), alone);
}

#[test]
fn test_peak_marker_follows_a_reflection() {
    let session = default_session();
    let marker = session
        .peak_marker(MillerIndex::new(1, 1, 1))
        .unwrap()
        .expect("the (111) peak of the default cell is inside the window");
    // cubic 5.64 A at 8 keV: Q(111) = 2 pi sqrt(3) / 5.64
    assert_relative_eq!(marker.two_theta, 27.5, epsilon = 0.1);
    assert!(marker.intensity > 0.0);

    assert!(matches!(
        session.peak_marker(MillerIndex::new(0, 0, 0)),
        Err(SimulationError::NullIndex)
    ));

    // far outside the scattering sphere
    assert!(session
        .peak_marker(MillerIndex::new(9, 9, 9))
        .unwrap()
        .is_none());
}

#[test]
fn test_rendering_outputs() {
    let mut session = default_session();
    session
        .add_atom(BasisAtom::new("O", [0.5, 0.5, 0.5]))
        .unwrap();

    let positions = session.atom_positions().unwrap();
    assert_eq!(positions.len(), 2);
    assert_eq!(positions[0], Vector3D::origin());
    assert_relative_eq!(positions[1].x, 2.82, epsilon = 1e-10);

    let vertices = session.cell_vertices().unwrap();
    assert_relative_eq!(vertices[7].x, 5.64, epsilon = 1e-10);
}

#[test]
fn test_session_from_params_validates_everything() {
    let provider = || Box::new(CromerMannTable::new());
    let mut params = SimulationParams::default();
    params.origin_element = "Zz".to_string();
    assert!(Session::from_params(provider(), &params, ParameterBounds::default()).is_err());

    let mut params = SimulationParams::default();
    params.energy_kev = 2.0;
    assert!(Session::from_params(provider(), &params, ParameterBounds::default()).is_err());

    let mut params = SimulationParams::default();
    params.atoms.push(BasisAtom::new("Na", [0.5, 0.0, 0.0]));
    let session = Session::from_params(provider(), &params, ParameterBounds::default()).unwrap();
    assert_eq!(session.basis().len(), 2);
}

#[test]
fn test_wavelength_and_energy_are_coupled() {
    let mut session = default_session();
    session.set_wavelength(1.0332).unwrap();
    assert_relative_eq!(session.energy_kev(), 12.0, epsilon = 1e-3);

    // wavelength implying an out-of-range energy is rejected
    assert!(session.set_wavelength(0.5).is_err());
    assert_relative_eq!(session.energy_kev(), 12.0, epsilon = 1e-3);
}
