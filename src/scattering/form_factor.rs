/*
MIT License

Copyright (c) 2026 pxrd-rs contributors
*/

//! The atomic scattering factor provider seam
//!
//! The engine never embeds knowledge of where scattering factors come from;
//! it asks a [`ScatteringFactorProvider`] for the elastic form factor f0(Q)
//! and the energy-dependent dispersion corrections f1(E) and f2(E), and
//! combines them into the complex atomic form factor
//! `f(Q, E) = f0(Q) + f1(E) + i f2(E)`.
//!
//! Lookups for an unrecognized element symbol must fail distinctly with
//! [`ScatteringError::UnknownElement`](super::errors::ScatteringError) so
//! callers can reject the edit instead of crashing mid-computation.

use num_complex::Complex64;

use super::errors::Result;

/// Source of per-element atomic scattering factors
pub trait ScatteringFactorProvider {
    /// True when the provider has data for `element`
    fn contains(&self, element: &str) -> bool;

    /// Elastic form factor f0 at momentum transfer `q` (inverse Angstroms)
    fn f0(&self, element: &str, q: f64) -> Result<f64>;

    /// Real dispersion correction f1 at `energy_kev`
    fn f1(&self, element: &str, energy_kev: f64) -> Result<f64>;

    /// Imaginary dispersion correction f2 at `energy_kev`
    fn f2(&self, element: &str, energy_kev: f64) -> Result<f64>;
}

/// Combine provider terms into the complex atomic form factor
///
/// One call per (element, Q, E) triple makes exactly three provider
/// lookups; the structure-factor cache sits above this function.
pub fn form_factor(
    provider: &dyn ScatteringFactorProvider,
    element: &str,
    q: f64,
    energy_kev: f64,
) -> Result<Complex64> {
    let f0 = provider.f0(element, q)?;
    let f1 = provider.f1(element, energy_kev)?;
    let f2 = provider.f2(element, energy_kev)?;
    Ok(Complex64::new(f0 + f1, f2))
}
