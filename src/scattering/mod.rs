/*
MIT License

Copyright (c) 2026 pxrd-rs contributors
*/

//! Atomic scattering factors and structure-factor summation
//!
//! This module owns the provider seam for per-element scattering data, the
//! built-in Cromer-Mann table, the (reflection, slot)-keyed form-factor
//! cache and the structure-factor calculator that consumes all three.

pub mod cache;
pub mod elements;
pub mod errors;
pub mod form_factor;
pub mod structure_factor;

pub use cache::{FormFactorCache, FormFactorKey};
pub use elements::CromerMannTable;
pub use errors::{Result, ScatteringError};
pub use form_factor::{form_factor, ScatteringFactorProvider};
pub use structure_factor::{intensity_f2, structure_factor, AtomSite};
