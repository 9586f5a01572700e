/*
MIT License

Copyright (c) 2026 pxrd-rs contributors
*/

//! Form-factor cache keyed by (Miller index, atom slot)
//!
//! Caches the complex atomic form factor per reflection and basis slot so
//! that position-only and lattice-only edits skip the provider entirely.
//! The key deliberately ignores the lattice-driven drift of Q: a cached
//! entry is reused verbatim until the next energy change invalidates the
//! whole map. This mirrors the reference engine's approximation and trades
//! a small form-factor staleness for interactive latency.

use std::collections::HashMap;

use num_complex::Complex64;

use crate::lattice::MillerIndex;

/// Composite cache key: the reflection and the basis slot index
pub type FormFactorKey = (MillerIndex, usize);

/// Per-(reflection, slot) cache of complex atomic form factors
#[derive(Debug, Clone, Default)]
pub struct FormFactorCache {
    entries: HashMap<FormFactorKey, Complex64>,
}

impl FormFactorCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the cached form factor for a reflection and slot
    pub fn get(&self, hkl: MillerIndex, slot: usize) -> Option<Complex64> {
        self.entries.get(&(hkl, slot)).copied()
    }

    /// Store the form factor for a reflection and slot
    pub fn insert(&mut self, hkl: MillerIndex, slot: usize, value: Complex64) {
        self.entries.insert((hkl, slot), value);
    }

    /// Drop every entry. Called when the energy changes, since all cached
    /// values embed the energy-dependent dispersion corrections.
    pub fn invalidate_all(&mut self) {
        self.entries.clear();
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is cached
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
