/*
MIT License

Copyright (c) 2026 pxrd-rs contributors
*/

//! The two-theta sampling grid of the simulated pattern

use ndarray::Array1;

use super::errors::{PatternError, Result};

/// Ordered two-theta samples from `tth_min` (inclusive) to `tth_max`
/// (exclusive) in steps of `tth_step`, in degrees
#[derive(Debug, Clone)]
pub struct AngularGrid {
    values: Array1<f64>,
    tth_min: f64,
    tth_max: f64,
    tth_step: f64,
}

impl AngularGrid {
    /// Build the grid over the half-open interval [tth_min, tth_max)
    ///
    /// # Returns
    ///
    /// The grid, or [`PatternError::InvalidRange`] when the step is not
    /// positive or the interval is empty.
    pub fn new(tth_min: f64, tth_max: f64, tth_step: f64) -> Result<Self> {
        if !(tth_step > 0.0) || !tth_step.is_finite() {
            return Err(PatternError::InvalidRange(format!(
                "step must be positive and finite, got {}",
                tth_step
            )));
        }
        if !(tth_max > tth_min) {
            return Err(PatternError::InvalidRange(format!(
                "two-theta range [{}, {}) is empty",
                tth_min, tth_max
            )));
        }
        // small backoff keeps the endpoint out when the span divides evenly
        let count = ((tth_max - tth_min) / tth_step - 1e-9).ceil() as usize;
        let values = Array1::from_iter((0..count).map(|i| tth_min + i as f64 * tth_step));
        Ok(Self {
            values,
            tth_min,
            tth_max,
            tth_step,
        })
    }

    /// The two-theta samples in degrees
    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the grid has no samples
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Lower two-theta bound, in degrees
    pub fn tth_min(&self) -> f64 {
        self.tth_min
    }

    /// Upper two-theta bound, in degrees
    pub fn tth_max(&self) -> f64 {
        self.tth_max
    }

    /// Grid step, in degrees
    pub fn tth_step(&self) -> f64 {
        self.tth_step
    }

    /// Index of the sample closest to a two-theta value, or None when the
    /// value lies outside the grid span
    pub fn nearest_index(&self, two_theta: f64) -> Option<usize> {
        if self.values.is_empty() || two_theta < self.tth_min || two_theta >= self.tth_max {
            return None;
        }
        let index = ((two_theta - self.tth_min) / self.tth_step).round() as usize;
        Some(index.min(self.values.len() - 1))
    }
}
