/*
MIT License

Copyright (c) 2026 pxrd-rs contributors
*/

//! # pxrd-rs
//!
//! An interactive powder X-ray diffraction (pXRD) pattern simulation
//! engine. Given lattice parameters, a basis of atoms at fractional
//! positions, a photon energy and a crystallite size, the engine produces
//! a simulated intensity-versus-two-theta curve plus the Cartesian
//! geometry a 3D unit-cell view needs.
//!
//! The pipeline runs leaf-first: lattice geometry and HKL enumeration feed
//! the reflection window selector, whose retained reflections are summed
//! into structure factors (through a form-factor cache) and shaped into
//! Gaussian peaks on the angular grid. [`simulation::Session`] owns the
//! state and reruns exactly the stages a given parameter edit invalidates,
//! which is what keeps slider interaction responsive.
//!
//! ```no_run
//! use pxrd_rs::scattering::CromerMannTable;
//! use pxrd_rs::simulation::Session;
//!
//! let mut session = Session::new(Box::new(CromerMannTable::new()))?;
//! session.set_energy(12.0)?;
//! assert!(!session.intensity().is_empty());
//! # Ok::<(), pxrd_rs::simulation::SimulationError>(())
//! ```

pub mod cli;
pub mod lattice;
pub mod pattern;
pub mod scattering;
pub mod simulation;
pub mod utils;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
