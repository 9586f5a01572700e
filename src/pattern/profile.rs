/*
MIT License

Copyright (c) 2026 pxrd-rs contributors
*/

//! Gaussian peak-shape synthesis
//!
//! Each retained reflection becomes a normalized Gaussian on the angular
//! grid. The width comes from the Scherrer relation for the crystallite
//! size, converted to degrees two-theta:
//!
//! ```text
//! sigma = K * lambda / (2.355 * D * cos(tth / 2)) * 180 / pi
//! ```
//!
//! There is no guard at tth -> 180 degrees: cos(tth/2) -> 0 lets the width
//! blow up and the peak flatten, matching the reference behavior.

use ndarray::Array1;

use crate::utils::constants::{FWHM_TO_SIGMA, SCHERRER_K};
use crate::utils::{deg_to_rad, rad_to_deg};

/// Gaussian standard deviation in degrees two-theta of a peak at
/// `two_theta_deg` for the given wavelength and crystallite size
pub fn peak_sigma(two_theta_deg: f64, wavelength: f64, crystallite_size: f64) -> f64 {
    let sigma_rad =
        SCHERRER_K * wavelength / (FWHM_TO_SIGMA * crystallite_size * deg_to_rad(two_theta_deg / 2.0).cos());
    rad_to_deg(sigma_rad)
}

/// Add one weighted, area-normalized Gaussian peak onto the intensity array
///
/// Evaluates `weight / (sqrt(2 pi) sigma) * exp(-(theta - tth)^2 / (2 sigma^2))`
/// at every grid sample and accumulates in place.
pub fn accumulate_peak(
    intensity: &mut Array1<f64>,
    grid_values: &Array1<f64>,
    two_theta_deg: f64,
    sigma: f64,
    weight: f64,
) {
    let norm = weight / ((2.0 * std::f64::consts::PI).sqrt() * sigma);
    for (value, theta) in intensity.iter_mut().zip(grid_values.iter()) {
        let delta = theta - two_theta_deg;
        *value += norm * (-delta * delta / (2.0 * sigma * sigma)).exp();
    }
}
