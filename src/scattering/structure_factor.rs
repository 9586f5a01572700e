/*
MIT License

Copyright (c) 2026 pxrd-rs contributors
*/

//! Structure factor summation over the atomic basis
//!
//! For one reflection the complex structure factor is
//!
//! ```text
//! F(hkl) = sum_slots f_slot(Q, E) * exp(-2 pi i * hkl . r_slot)
//! ```
//!
//! with r_slot the fractional position of the slot's atom. Slot 0 is the
//! origin atom, pinned at (0, 0, 0), so its phase factor is always unity.
//! Form factors are fetched through the cache; only cache misses (and slot
//! 0 on an energy change, which is refreshed eagerly) reach the provider.
//! Results are identical whether served from the cache or recomputed; only
//! the number of provider calls differs.

use std::f64::consts::PI;

use num_complex::Complex64;

use super::cache::FormFactorCache;
use super::errors::Result;
use super::form_factor::{form_factor, ScatteringFactorProvider};
use crate::lattice::MillerIndex;

/// One basis slot as seen by the structure-factor sum
#[derive(Debug, Clone, Copy)]
pub struct AtomSite<'a> {
    /// Element symbol
    pub element: &'a str,
    /// Fractional position within the unit cell
    pub position: [f64; 3],
}

/// Complex structure factor of one reflection
///
/// # Arguments
///
/// * `hkl` - the reflection
/// * `q` - live reciprocal-space magnitude of `hkl` for the current lattice
/// * `sites` - basis slots in slot order, slot 0 being the origin atom
/// * `energy_kev` - photon energy
/// * `energy_changed` - true on the first pass after an energy change;
///   forces the origin-atom entry to be recomputed and stored even when a
///   stale value is still cached
pub fn structure_factor(
    hkl: MillerIndex,
    q: f64,
    sites: &[AtomSite<'_>],
    energy_kev: f64,
    provider: &dyn ScatteringFactorProvider,
    cache: &mut FormFactorCache,
    energy_changed: bool,
) -> Result<Complex64> {
    let mut total = Complex64::new(0.0, 0.0);
    for (slot, site) in sites.iter().enumerate() {
        let refresh = energy_changed && slot == 0;
        let f = match (refresh, cache.get(hkl, slot)) {
            (false, Some(cached)) => cached,
            _ => {
                let fresh = form_factor(provider, site.element, q, energy_kev)?;
                cache.insert(hkl, slot, fresh);
                fresh
            }
        };
        let phase = Complex64::from_polar(1.0, -2.0 * PI * hkl.dot(site.position));
        total += f * phase;
    }
    Ok(total)
}

/// Squared modulus |F(hkl)|^2 of the structure factor
pub fn intensity_f2(
    hkl: MillerIndex,
    q: f64,
    sites: &[AtomSite<'_>],
    energy_kev: f64,
    provider: &dyn ScatteringFactorProvider,
    cache: &mut FormFactorCache,
    energy_changed: bool,
) -> Result<f64> {
    let f = structure_factor(hkl, q, sites, energy_kev, provider, cache, energy_changed)?;
    Ok(f.norm_sqr())
}
