/*
MIT License

Copyright (c) 2026 pxrd-rs contributors
*/

//! Main executable for pxrd-rs

use clap::Parser;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    pxrd_rs::cli::run(pxrd_rs::cli::Cli::parse())
}
