/*
MIT License

Copyright (c) 2026 pxrd-rs contributors
*/

//! The interactive simulation session
//!
//! [`Session`] owns every piece of mutable simulation state: the current
//! parameters, the atomic basis, the HKL candidate set, the retained
//! reflection window, the angular grid, the form-factor cache and the last
//! computed intensity array. Each setter validates its edit, rejects it
//! without mutating on failure, and then reruns exactly the stages that
//! edit invalidates:
//!
//! | edit                        | candidates | window | cache | pattern |
//! |-----------------------------|------------|--------|-------|---------|
//! | energy / wavelength         |            | yes    | clear | yes     |
//! | lattice parameter           |            |        |       | yes     |
//! | atom position               |            |        |       | yes     |
//! | atom element / add / remove |            |        | clear | yes     |
//! | angular range or step       |            | yes    |       | yes     |
//! | HKL bounds                  | yes        | yes    |       | yes     |
//! | crystallite size            |            |        |       | yes     |
//!
//! Lattice edits deliberately do not refresh the reflection window: the
//! window bounds depend only on energy and angles, and the retained set is
//! allowed to go stale against the lattice while the accumulator evaluates
//! live Q per reflection. Every recomputation is synchronous and blocking;
//! the pipeline itself is pure over the session state plus the cache.

pub mod basis;
pub mod config;
pub mod errors;

use log::debug;
use ndarray::Array1;

pub use basis::{Basis, BasisAtom};
pub use config::{ParameterBounds, Range, SimulationParams};
pub use errors::{Result, SimulationError};

use crate::lattice::{
    generate_candidates, position, q_hkl, q_to_two_theta, unit_cell_vertices, LatticeError,
    LatticeParameters, MillerIndex, Vector3D,
};
use crate::pattern::{compute_pattern, select_reflections, AngularGrid};
use crate::scattering::{FormFactorCache, ScatteringFactorProvider};
use crate::utils::{energy_to_wavelength, wavelength_to_energy};

/// One of the six lattice parameters, for single-slider edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatticeParam {
    A,
    B,
    C,
    Alpha,
    Beta,
    Gamma,
}

/// Position of a followed peak on the current pattern
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakMarker {
    /// Two-theta of the reflection in degrees
    pub two_theta: f64,
    /// Simulated intensity at the nearest grid sample
    pub intensity: f64,
}

/// The simulation session
pub struct Session {
    bounds: ParameterBounds,
    lattice: LatticeParameters,
    energy_kev: f64,
    crystallite_size: f64,
    tth_min: f64,
    tth_max: f64,
    tth_step: f64,
    h_max: u32,
    k_max: u32,
    l_max: u32,
    basis: Basis,
    provider: Box<dyn ScatteringFactorProvider>,
    candidates: Vec<MillerIndex>,
    reflections: Vec<MillerIndex>,
    grid: AngularGrid,
    cache: FormFactorCache,
    intensity: Array1<f64>,
}

impl Session {
    /// Create a session with the reference default parameters
    pub fn new(provider: Box<dyn ScatteringFactorProvider>) -> Result<Self> {
        Self::from_params(provider, &SimulationParams::default(), ParameterBounds::default())
    }

    /// Create a session from explicit parameters
    ///
    /// Validates everything up front: bounds, lattice metric, grid range
    /// and every element symbol; then runs the full pipeline once.
    pub fn from_params(
        provider: Box<dyn ScatteringFactorProvider>,
        params: &SimulationParams,
        bounds: ParameterBounds,
    ) -> Result<Self> {
        check_range(&bounds.energy, "energy", params.energy_kev)?;
        check_range(&bounds.crystallite_size, "crystallite size", params.crystallite_size)?;
        check_lattice(&bounds, &params.lattice)?;
        check_range(&bounds.two_theta, "tth_min", params.tth_min)?;
        check_range(&bounds.two_theta, "tth_max", params.tth_max)?;
        check_hkl_bound(&bounds, "h_max", params.h_max)?;
        check_hkl_bound(&bounds, "k_max", params.k_max)?;
        check_hkl_bound(&bounds, "l_max", params.l_max)?;

        check_element(provider.as_ref(), &params.origin_element)?;
        for atom in &params.atoms {
            check_element(provider.as_ref(), &atom.element)?;
        }

        let mut basis = Basis::new(&params.origin_element);
        for atom in &params.atoms {
            basis.push(atom.clone())?;
        }

        let grid = AngularGrid::new(params.tth_min, params.tth_max, params.tth_step)?;
        let candidates = generate_candidates(params.h_max, params.k_max, params.l_max);
        let intensity = Array1::zeros(grid.len());

        let mut session = Self {
            bounds,
            lattice: params.lattice,
            energy_kev: params.energy_kev,
            crystallite_size: params.crystallite_size,
            tth_min: params.tth_min,
            tth_max: params.tth_max,
            tth_step: params.tth_step,
            h_max: params.h_max,
            k_max: params.k_max,
            l_max: params.l_max,
            basis,
            provider,
            candidates,
            reflections: Vec::new(),
            grid,
            cache: FormFactorCache::new(),
            intensity,
        };
        session.update(true, true, true)?;
        Ok(session)
    }

    /// Rerun the requested pipeline stages
    ///
    /// `ul` refreshes the reflection window, `xpd` recomputes the pattern,
    /// `en` marks an energy-equivalent change and clears the form-factor
    /// cache first.
    fn update(&mut self, ul: bool, xpd: bool, en: bool) -> Result<()> {
        if en {
            self.cache.invalidate_all();
        }
        if ul {
            self.reflections = select_reflections(
                &self.candidates,
                &self.lattice,
                self.energy_kev,
                self.tth_min,
                self.tth_max,
            );
        }
        if xpd {
            let sites = self.basis.sites();
            self.intensity = compute_pattern(
                &self.reflections,
                &sites,
                &self.lattice,
                self.energy_kev,
                self.crystallite_size,
                &self.grid,
                self.provider.as_ref(),
                &mut self.cache,
                en,
            )?;
            debug!(
                "pattern recomputed: {} reflections onto {} samples",
                self.reflections.len(),
                self.grid.len()
            );
        }
        Ok(())
    }

    // ---- energy and size -------------------------------------------------

    /// Set the photon energy in keV
    pub fn set_energy(&mut self, energy_kev: f64) -> Result<()> {
        check_range(&self.bounds.energy, "energy", energy_kev)?;
        self.energy_kev = energy_kev;
        self.update(true, true, true)
    }

    /// Set the wavelength in Angstroms; drives the same energy state
    pub fn set_wavelength(&mut self, wavelength: f64) -> Result<()> {
        let energy = wavelength_to_energy(wavelength);
        if !self.bounds.energy.contains(energy) {
            return Err(SimulationError::OutOfRange {
                name: "wavelength",
                value: wavelength,
                min: energy_to_wavelength(self.bounds.energy.max),
                max: energy_to_wavelength(self.bounds.energy.min),
            });
        }
        self.energy_kev = energy;
        self.update(true, true, true)
    }

    /// Set the Scherrer crystallite size in Angstroms
    pub fn set_crystallite_size(&mut self, size: f64) -> Result<()> {
        check_range(&self.bounds.crystallite_size, "crystallite size", size)?;
        self.crystallite_size = size;
        self.update(false, true, false)
    }

    // ---- lattice ---------------------------------------------------------

    /// Set one lattice parameter
    pub fn set_lattice_parameter(&mut self, param: LatticeParam, value: f64) -> Result<()> {
        let mut candidate = self.lattice;
        let (range, name, field): (&Range, &'static str, &mut f64) = match param {
            LatticeParam::A => (&self.bounds.edge, "a", &mut candidate.a),
            LatticeParam::B => (&self.bounds.edge, "b", &mut candidate.b),
            LatticeParam::C => (&self.bounds.edge, "c", &mut candidate.c),
            LatticeParam::Alpha => (&self.bounds.angle, "alpha", &mut candidate.alpha),
            LatticeParam::Beta => (&self.bounds.angle, "beta", &mut candidate.beta),
            LatticeParam::Gamma => (&self.bounds.angle, "gamma", &mut candidate.gamma),
        };
        check_range(range, name, value)?;
        *field = value;
        candidate.validate()?;
        self.lattice = candidate;
        self.update(false, true, false)
    }

    /// Replace the whole lattice at once
    pub fn set_lattice(&mut self, lattice: LatticeParameters) -> Result<()> {
        check_lattice(&self.bounds, &lattice)?;
        self.lattice = lattice;
        self.update(false, true, false)
    }

    // ---- angular range ---------------------------------------------------

    /// Set the lower two-theta bound in degrees
    pub fn set_tth_min(&mut self, tth_min: f64) -> Result<()> {
        check_range(&self.bounds.two_theta, "tth_min", tth_min)?;
        let grid = AngularGrid::new(tth_min, self.tth_max, self.tth_step)?;
        self.tth_min = tth_min;
        self.grid = grid;
        self.update(true, true, false)
    }

    /// Set the upper two-theta bound in degrees
    pub fn set_tth_max(&mut self, tth_max: f64) -> Result<()> {
        check_range(&self.bounds.two_theta, "tth_max", tth_max)?;
        let grid = AngularGrid::new(self.tth_min, tth_max, self.tth_step)?;
        self.tth_max = tth_max;
        self.grid = grid;
        self.update(true, true, false)
    }

    /// Set the two-theta grid step in degrees
    pub fn set_tth_step(&mut self, tth_step: f64) -> Result<()> {
        let grid = AngularGrid::new(self.tth_min, self.tth_max, tth_step)?;
        self.tth_step = tth_step;
        self.grid = grid;
        // the window is untouched by the step; only the sampling changes
        self.update(false, true, false)
    }

    // ---- HKL bounds ------------------------------------------------------

    /// Set the HKL enumeration bounds; regenerates the candidate set
    pub fn set_hkl_bounds(&mut self, h_max: u32, k_max: u32, l_max: u32) -> Result<()> {
        check_hkl_bound(&self.bounds, "h_max", h_max)?;
        check_hkl_bound(&self.bounds, "k_max", k_max)?;
        check_hkl_bound(&self.bounds, "l_max", l_max)?;
        self.h_max = h_max;
        self.k_max = k_max;
        self.l_max = l_max;
        self.candidates = generate_candidates(h_max, k_max, l_max);
        self.update(true, true, false)
    }

    // ---- basis -----------------------------------------------------------

    /// Change the element of a basis slot
    ///
    /// The symbol is validated against the provider before any state
    /// changes; an unknown symbol leaves the previous element in place.
    pub fn set_element(&mut self, slot: usize, element: &str) -> Result<()> {
        if self.basis.get(slot).is_none() {
            return Err(SimulationError::UnknownSlot(slot));
        }
        check_element(self.provider.as_ref(), element)?;
        self.basis.set_element(slot, element)?;
        self.update(false, true, true)
    }

    /// Move a non-origin atom to a new fractional position
    ///
    /// Positions are nominally in [0, 1]^3 but not clamped; cached form
    /// factors are reused since neither element nor energy changed.
    pub fn set_position(&mut self, slot: usize, position: [f64; 3]) -> Result<()> {
        self.basis.set_position(slot, position)?;
        self.update(false, true, false)
    }

    /// Add an atom into the next free slot
    pub fn add_atom(&mut self, atom: BasisAtom) -> Result<usize> {
        check_element(self.provider.as_ref(), &atom.element)?;
        let slot = self.basis.push(atom)?;
        self.update(false, true, true)?;
        Ok(slot)
    }

    /// Remove the highest-index atom
    pub fn remove_atom(&mut self) -> Result<BasisAtom> {
        let removed = self.basis.pop()?;
        self.update(false, true, true)?;
        Ok(removed)
    }

    // ---- outputs ---------------------------------------------------------

    /// The simulated intensity, one value per grid sample
    pub fn intensity(&self) -> &Array1<f64> {
        &self.intensity
    }

    /// The two-theta samples in degrees
    pub fn two_theta(&self) -> &Array1<f64> {
        self.grid.values()
    }

    /// The currently retained reflection set
    pub fn reflections(&self) -> &[MillerIndex] {
        &self.reflections
    }

    /// The atomic basis
    pub fn basis(&self) -> &Basis {
        &self.basis
    }

    /// Current lattice parameters
    pub fn lattice(&self) -> &LatticeParameters {
        &self.lattice
    }

    /// Current photon energy in keV
    pub fn energy_kev(&self) -> f64 {
        self.energy_kev
    }

    /// Current wavelength in Angstroms
    pub fn wavelength(&self) -> f64 {
        energy_to_wavelength(self.energy_kev)
    }

    /// Current crystallite size in Angstroms
    pub fn crystallite_size(&self) -> f64 {
        self.crystallite_size
    }

    /// Cartesian positions of all basis atoms, for the 3D view
    pub fn atom_positions(&self) -> Result<Vec<Vector3D>> {
        self.basis
            .atoms()
            .iter()
            .map(|atom| position(atom.position, &self.lattice).map_err(Into::into))
            .collect()
    }

    /// Cartesian corners of the unit cell, for the 3D view
    pub fn cell_vertices(&self) -> Result<[Vector3D; 8]> {
        Ok(unit_cell_vertices(&self.lattice)?)
    }

    /// Locate a followed reflection on the current pattern
    ///
    /// # Returns
    ///
    /// The marker, or `None` when the peak lies outside the angular window
    /// (including outside the scattering sphere). The null index is
    /// rejected since it names no reflection.
    pub fn peak_marker(&self, hkl: MillerIndex) -> Result<Option<PeakMarker>> {
        if hkl.is_null() {
            return Err(SimulationError::NullIndex);
        }
        let q = q_hkl(hkl, &self.lattice)?;
        let two_theta = match q_to_two_theta(q, self.wavelength()) {
            Ok(tth) => tth,
            Err(LatticeError::TwoThetaDomain { .. }) => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(self.grid.nearest_index(two_theta).map(|index| PeakMarker {
            two_theta,
            intensity: self.intensity[index],
        }))
    }
}

fn check_range(range: &Range, name: &'static str, value: f64) -> Result<()> {
    if range.contains(value) {
        Ok(())
    } else {
        Err(SimulationError::OutOfRange {
            name,
            value,
            min: range.min,
            max: range.max,
        })
    }
}

fn check_hkl_bound(bounds: &ParameterBounds, name: &'static str, value: u32) -> Result<()> {
    if value <= bounds.hkl_limit {
        Ok(())
    } else {
        Err(SimulationError::OutOfRange {
            name,
            value: value as f64,
            min: 0.0,
            max: bounds.hkl_limit as f64,
        })
    }
}

fn check_lattice(bounds: &ParameterBounds, lattice: &LatticeParameters) -> Result<()> {
    check_range(&bounds.edge, "a", lattice.a)?;
    check_range(&bounds.edge, "b", lattice.b)?;
    check_range(&bounds.edge, "c", lattice.c)?;
    check_range(&bounds.angle, "alpha", lattice.alpha)?;
    check_range(&bounds.angle, "beta", lattice.beta)?;
    check_range(&bounds.angle, "gamma", lattice.gamma)?;
    lattice.validate()?;
    Ok(())
}

fn check_element(provider: &dyn ScatteringFactorProvider, element: &str) -> Result<()> {
    if provider.contains(element) {
        Ok(())
    } else {
        Err(SimulationError::Scattering(
            crate::scattering::ScatteringError::UnknownElement(element.to_string()),
        ))
    }
}
