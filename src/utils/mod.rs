/*
MIT License

Copyright (c) 2026 pxrd-rs contributors
*/

//! Utility functions and physical constants for pXRD calculations
//!
//! This module provides the constants and unit conversions used throughout
//! the diffraction engine.

/// Physical constants used in pXRD calculations
pub mod constants {
    /// Product h·c in keV·Å, relating photon energy and wavelength
    pub const HC_KEV_ANGSTROM: f64 = 12.398;

    /// Scherrer shape constant for near-spherical crystallites
    pub const SCHERRER_K: f64 = 0.9;

    /// Ratio between the FWHM and the standard deviation of a Gaussian
    pub const FWHM_TO_SIGMA: f64 = 2.355;

    /// Maximum number of basis atoms (origin atom plus nine user slots)
    pub const MAX_BASIS_ATOMS: usize = 10;
}

/// Convert a photon energy in keV to a wavelength in Angstroms
pub fn energy_to_wavelength(energy_kev: f64) -> f64 {
    constants::HC_KEV_ANGSTROM / energy_kev
}

/// Convert a wavelength in Angstroms to a photon energy in keV
pub fn wavelength_to_energy(wavelength: f64) -> f64 {
    constants::HC_KEV_ANGSTROM / wavelength
}

/// Convert an angle in degrees to radians
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Convert an angle in radians to degrees
pub fn rad_to_deg(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}
