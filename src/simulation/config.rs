/*
MIT License

Copyright (c) 2026 pxrd-rs contributors
*/

//! Simulation parameters and slider bounds
//!
//! Defaults follow the reference simulator's shipped values: a 5.64 A cubic
//! cell with an Fe origin atom, 8 keV photons, 500 A crystallites and a
//! 5-65 degree window sampled every 0.04 degrees with HKL bounds of 4.
//! Persistence of these values to a defaults file is a UI concern and not
//! handled here; the structs are serde-derived so collaborators can store
//! and reload them as they see fit.

use serde::{Deserialize, Serialize};

use super::basis::BasisAtom;
use crate::lattice::LatticeParameters;

/// A closed numeric interval for a slider-bound quantity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    /// Create a range
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// True when `value` lies inside the closed interval
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }
}

/// Allowed ranges for every user-settable quantity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterBounds {
    /// Photon energy in keV
    pub energy: Range,
    /// Crystallite size in Angstroms
    pub crystallite_size: Range,
    /// Cell edge lengths a, b, c in Angstroms
    pub edge: Range,
    /// Cell angles alpha, beta, gamma in degrees
    pub angle: Range,
    /// Two-theta bounds in degrees
    pub two_theta: Range,
    /// Largest accepted HKL bound; enumeration is cubic in the bounds, so
    /// this caps the interactive cost a user can ask for
    pub hkl_limit: u32,
}

impl Default for ParameterBounds {
    fn default() -> Self {
        Self {
            energy: Range::new(4.0, 20.0),
            crystallite_size: Range::new(15.0, 1000.0),
            edge: Range::new(2.0, 13.0),
            angle: Range::new(40.0, 150.0),
            two_theta: Range::new(0.0, 180.0),
            hkl_limit: 10,
        }
    }
}

/// Everything the engine needs to simulate one pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    /// Lattice parameters of the unit cell
    pub lattice: LatticeParameters,
    /// Photon energy in keV; the wavelength is 12.398 / E
    pub energy_kev: f64,
    /// Scherrer crystallite size D in Angstroms
    pub crystallite_size: f64,
    /// Lower two-theta bound in degrees
    pub tth_min: f64,
    /// Upper two-theta bound in degrees
    pub tth_max: f64,
    /// Two-theta grid step in degrees
    pub tth_step: f64,
    /// HKL enumeration bound along h
    pub h_max: u32,
    /// HKL enumeration bound along k
    pub k_max: u32,
    /// HKL enumeration bound along l
    pub l_max: u32,
    /// Element of the origin atom
    pub origin_element: String,
    /// Additional basis atoms, slots 1..N in order
    pub atoms: Vec<BasisAtom>,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            lattice: LatticeParameters::default(),
            energy_kev: 8.0,
            crystallite_size: 500.0,
            tth_min: 5.0,
            tth_max: 65.0,
            tth_step: 0.04,
            h_max: 4,
            k_max: 4,
            l_max: 4,
            origin_element: "Fe".to_string(),
            atoms: Vec::new(),
        }
    }
}
