/*
MIT License

Copyright (c) 2026 pxrd-rs contributors
*/

//! Full-pattern accumulation
//!
//! Sums every retained reflection's peak contribution into a fresh
//! intensity array over the angular grid. Each pass is a full recompute;
//! there is no incremental point-patching. The function is pure over its
//! explicit inputs plus the passed-in form-factor cache, so identical
//! inputs and cache state give bit-identical output.

use ndarray::Array1;

use log::warn;

use super::errors::Result;
use super::grid::AngularGrid;
use super::profile::{accumulate_peak, peak_sigma};
use crate::lattice::{q_hkl, q_to_two_theta, LatticeError, LatticeParameters, MillerIndex};
use crate::scattering::{intensity_f2, AtomSite, FormFactorCache, ScatteringFactorProvider};
use crate::utils::energy_to_wavelength;

/// Compute the simulated powder pattern over the angular grid
///
/// # Arguments
///
/// * `reflections` - the retained reflection set (possibly stale relative
///   to the lattice; Q is re-evaluated live per reflection regardless)
/// * `sites` - basis slots in slot order, slot 0 the origin atom
/// * `lattice` - current lattice parameters
/// * `energy_kev` - photon energy; the wavelength is derived from it
/// * `crystallite_size` - Scherrer size D in Angstroms
/// * `energy_changed` - first pass after an energy change (see the cache
///   discipline in the scattering module)
///
/// # Returns
///
/// One intensity value per grid sample. An empty reflection set yields an
/// all-zero array. A reflection whose two-theta is undefined for the
/// current wavelength is skipped with a warning.
#[allow(clippy::too_many_arguments)]
pub fn compute_pattern(
    reflections: &[MillerIndex],
    sites: &[AtomSite<'_>],
    lattice: &LatticeParameters,
    energy_kev: f64,
    crystallite_size: f64,
    grid: &AngularGrid,
    provider: &dyn ScatteringFactorProvider,
    cache: &mut FormFactorCache,
    energy_changed: bool,
) -> Result<Array1<f64>> {
    let wavelength = energy_to_wavelength(energy_kev);
    let mut intensity = Array1::zeros(grid.len());

    for &hkl in reflections {
        let q = q_hkl(hkl, lattice)?;
        let two_theta = match q_to_two_theta(q, wavelength) {
            Ok(tth) => tth,
            Err(err @ LatticeError::TwoThetaDomain { .. }) => {
                warn!("skipping reflection {}: {}", hkl, err);
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        let f2 = intensity_f2(hkl, q, sites, energy_kev, provider, cache, energy_changed)?;
        let sigma = peak_sigma(two_theta, wavelength, crystallite_size);
        // Lorentz-style 1/Q^2 normalization applied uniformly
        accumulate_peak(
            &mut intensity,
            grid.values(),
            two_theta,
            sigma,
            f2 / (q * q),
        );
    }

    Ok(intensity)
}
