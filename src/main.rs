/*
MIT License

Copyright (c) 2026 thermoelectric-rs developers
*/

//! Main executable for thermoelectric-rs

use clap::Parser;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = thermoelectric_rs::cli::Cli::parse();
    thermoelectric_rs::cli::run(&cli)
}
