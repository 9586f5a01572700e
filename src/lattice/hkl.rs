/*
MIT License

Copyright (c) 2026 pxrd-rs contributors
*/

//! Miller indices and the bounded candidate-index generator

use serde::{Deserialize, Serialize};
use std::fmt;

/// An integer Miller index triple (h, k, l)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MillerIndex {
    pub h: i32,
    pub k: i32,
    pub l: i32,
}

impl MillerIndex {
    /// Create a new Miller index
    pub fn new(h: i32, k: i32, l: i32) -> Self {
        Self { h, k, l }
    }

    /// True for the null index (0, 0, 0), which names no reflection
    pub fn is_null(&self) -> bool {
        self.h == 0 && self.k == 0 && self.l == 0
    }

    /// Dot product with a fractional position, used for phase factors
    pub fn dot(&self, position: [f64; 3]) -> f64 {
        self.h as f64 * position[0] + self.k as f64 * position[1] + self.l as f64 * position[2]
    }
}

impl fmt::Display for MillerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.h, self.k, self.l)
    }
}

/// Enumerate all candidate Miller indices within the given bounds
///
/// Produces every integer triple in `[-h_max, h_max] x [-k_max, k_max] x
/// [-l_max, l_max]` except (0, 0, 0), in lexicographic order by (h, k, l).
/// The set depends only on the bounds, never on lattice or energy, and is
/// regenerated only when a bound changes. Cost is O(h_max * k_max * l_max);
/// large bounds dominate the interactive recompute budget.
pub fn generate_candidates(h_max: u32, k_max: u32, l_max: u32) -> Vec<MillerIndex> {
    let (h_max, k_max, l_max) = (h_max as i32, k_max as i32, l_max as i32);
    let count = (2 * h_max + 1) * (2 * k_max + 1) * (2 * l_max + 1) - 1;
    let mut candidates = Vec::with_capacity(count as usize);
    for h in -h_max..=h_max {
        for k in -k_max..=k_max {
            for l in -l_max..=l_max {
                let hkl = MillerIndex::new(h, k, l);
                if !hkl.is_null() {
                    candidates.push(hkl);
                }
            }
        }
    }
    candidates
}
