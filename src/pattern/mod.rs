/*
MIT License

Copyright (c) 2026 pxrd-rs contributors
*/

//! Pattern synthesis: reflection window, peak shapes and accumulation
//!
//! Downstream half of the pipeline: selects which reflections are visible
//! in the instrument window, shapes each into a Gaussian peak and sums the
//! contributions into the intensity-versus-two-theta curve.

pub mod accumulator;
pub mod errors;
pub mod grid;
pub mod profile;
pub mod window;

pub use accumulator::compute_pattern;
pub use errors::{PatternError, Result};
pub use grid::AngularGrid;
pub use profile::{accumulate_peak, peak_sigma};
pub use window::{q_window, select_reflections};
