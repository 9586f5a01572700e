/*
MIT License

Copyright (c) 2026 pxrd-rs contributors
*/

//! Command Line Interface (CLI) module
//!
//! A thin collaborator around the engine: load simulation parameters from
//! a JSON file (or the built-in defaults), apply flag overrides, run one
//! pattern pass and write the result as JSON. The core contract lives in
//! the library; nothing here is needed to embed the engine elsewhere.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;
use serde::Serialize;

use crate::lattice::MillerIndex;
use crate::scattering::CromerMannTable;
use crate::simulation::{Session, SimulationParams};

/// Simulate a powder X-ray diffraction pattern
#[derive(Debug, Parser)]
#[command(name = "pxrd-rs", version, about)]
pub struct Cli {
    /// JSON file with simulation parameters; defaults are used when absent
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Output JSON file for the simulated pattern
    #[arg(long, default_value = "pattern.json")]
    pub output: PathBuf,

    /// Override the photon energy in keV
    #[arg(long)]
    pub energy: Option<f64>,

    /// Override the crystallite size in Angstroms
    #[arg(long)]
    pub size: Option<f64>,

    /// Override the origin atom element
    #[arg(long)]
    pub element: Option<String>,
}

/// The simulated pattern as written to the output file
#[derive(Debug, Serialize)]
struct PatternOutput {
    two_theta: Vec<f64>,
    intensity: Vec<f64>,
    reflections: Vec<MillerIndex>,
}

/// Run one simulation pass per the CLI arguments
pub fn run(cli: Cli) -> anyhow::Result<()> {
    let mut params = match &cli.params {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading parameters from {}", path.display()))?;
            serde_json::from_str::<SimulationParams>(&text)
                .with_context(|| format!("parsing parameters from {}", path.display()))?
        }
        None => SimulationParams::default(),
    };
    if let Some(energy) = cli.energy {
        params.energy_kev = energy;
    }
    if let Some(size) = cli.size {
        params.crystallite_size = size;
    }
    if let Some(element) = &cli.element {
        params.origin_element = element.clone();
    }

    let session = Session::from_params(
        Box::new(CromerMannTable::new()),
        &params,
        Default::default(),
    )?;
    info!(
        "simulated {} samples from {} reflections at {} keV",
        session.intensity().len(),
        session.reflections().len(),
        session.energy_kev()
    );

    let output = PatternOutput {
        two_theta: session.two_theta().to_vec(),
        intensity: session.intensity().to_vec(),
        reflections: session.reflections().to_vec(),
    };
    let json = serde_json::to_string_pretty(&output)?;
    fs::write(&cli.output, json)
        .with_context(|| format!("writing pattern to {}", cli.output.display()))?;
    Ok(())
}
