/*
MIT License

Copyright (c) 2026 thermoelectric-rs developers
*/

//! Command-line interface
//!
//! Runs a transport sweep over carrier concentrations and temperatures for
//! one material, optionally with nanopores, and prints a table or JSON.

use crate::band::EnergyGrid;
use crate::driver::{SweepQuery, TransportModel};
use crate::material::{preset, MaterialParameters};
use crate::porosity::{PoreGeometry, PoreShape};
use crate::transport::TransportResult;
use crate::utils::{nm_to_m, per_cm3_to_per_m3, per_m3_to_per_cm3};
use anyhow::{anyhow, Context};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// Electron transport coefficients for doped, nanoporous semiconductors
#[derive(Debug, Parser)]
#[command(name = "thermoelectric-rs", version, about)]
pub struct Cli {
    /// Material parameters as a JSON file; overrides --preset
    #[arg(long)]
    pub material: Option<PathBuf>,

    /// Built-in material preset
    #[arg(long, default_value = "si")]
    pub preset: String,

    /// Band-structure table (energy, DoS, group velocity columns); an
    /// analytic nonparabolic band is used when omitted
    #[arg(long)]
    pub band: Option<PathBuf>,

    /// Carrier concentrations in 1/cm^3, comma separated
    #[arg(long, value_delimiter = ',', default_value = "1e19")]
    pub concentration: Vec<f64>,

    /// Temperatures in K, comma separated
    #[arg(long, value_delimiter = ',', default_value = "300")]
    pub temperature: Vec<f64>,

    /// Pore volume fraction in [0, 1); bulk material when omitted
    #[arg(long)]
    pub porosity: Option<f64>,

    /// Pore radius in nm
    #[arg(long, default_value_t = 2.0)]
    pub pore_radius_nm: f64,

    /// Pore shape
    #[arg(long, value_enum, default_value_t = ShapeArg::Sphere)]
    pub pore_shape: ShapeArg,

    /// Upper edge of the analytic energy grid in eV
    #[arg(long, default_value_t = 1.0)]
    pub energy_max: f64,

    /// Number of analytic energy-grid samples
    #[arg(long, default_value_t = 4000)]
    pub samples: usize,

    /// Emit JSON instead of the table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShapeArg {
    Sphere,
    Cylinder,
}

/// One sweep point in the report
#[derive(Debug, Serialize)]
struct Record {
    /// Carrier concentration in 1/cm^3, as queried
    concentration_cm3: f64,
    /// Temperature in K
    temperature: f64,
    /// Pore volume fraction, 0 for bulk
    porosity: f64,
    /// Coefficients, absent when the point failed
    result: Option<TransportResult>,
    /// Failure message when the point failed
    error: Option<String>,
}

fn load_material(cli: &Cli) -> anyhow::Result<MaterialParameters> {
    match &cli.material {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading material file {}", path.display()))?;
            let material: MaterialParameters = serde_json::from_str(&text)
                .with_context(|| format!("parsing material file {}", path.display()))?;
            Ok(material)
        }
        None => preset(&cli.preset)
            .ok_or_else(|| anyhow!("unknown material preset '{}'", cli.preset)),
    }
}

fn load_grid(cli: &Cli, material: &MaterialParameters) -> anyhow::Result<EnergyGrid> {
    match &cli.band {
        Some(path) => EnergyGrid::from_path(path)
            .with_context(|| format!("loading band table {}", path.display())),
        None => EnergyGrid::analytic(material, 0.0, cli.energy_max, cli.samples)
            .context("building the analytic energy grid"),
    }
}

fn pore_geometry(cli: &Cli) -> anyhow::Result<Option<PoreGeometry>> {
    let Some(porosity) = cli.porosity else {
        return Ok(None);
    };
    let radius = nm_to_m(cli.pore_radius_nm);
    let shape = match cli.pore_shape {
        ShapeArg::Sphere => PoreShape::Sphere { radius },
        ShapeArg::Cylinder => PoreShape::Cylinder { radius },
    };
    Ok(Some(PoreGeometry::new(shape, porosity)?))
}

/// Run the sweep described by the parsed arguments
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let material = load_material(cli)?;
    let grid = load_grid(cli, &material)?;
    let pore = pore_geometry(cli)?;
    let model = TransportModel::new(material, grid)?;

    let queries: Vec<SweepQuery> = cli
        .concentration
        .iter()
        .flat_map(|&n_cm3| {
            cli.temperature.iter().map(move |&t| SweepQuery {
                concentration: per_cm3_to_per_m3(n_cm3),
                temperature: t,
                pore,
            })
        })
        .collect();

    log::info!(
        "sweeping {} points for '{}'",
        queries.len(),
        model.material().id
    );
    let records: Vec<Record> = model
        .sweep(&queries)
        .into_iter()
        .map(|record| Record {
            concentration_cm3: per_m3_to_per_cm3(record.query.concentration),
            temperature: record.query.temperature,
            porosity: record.query.pore.map_or(0.0, |g| g.porosity),
            result: record.outcome.as_ref().ok().cloned(),
            error: record.outcome.err().map(|e| e.to_string()),
        })
        .collect();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    println!(
        "{:>12} {:>7} {:>6} {:>12} {:>12} {:>12} {:>12} {:>10}",
        "n [1/cm^3]", "T [K]", "phi", "sigma [S/m]", "S [V/K]", "PF [W/mK^2]", "ke [W/mK]", "Ef [eV]"
    );
    for record in &records {
        match (&record.result, &record.error) {
            (Some(r), _) => println!(
                "{:>12.3e} {:>7.1} {:>6.3} {:>12.4e} {:>12.4e} {:>12.4e} {:>12.4e} {:>10.4}",
                record.concentration_cm3,
                record.temperature,
                record.porosity,
                r.sigma,
                r.seebeck,
                r.power_factor,
                r.kappa_e,
                r.fermi_level
            ),
            (None, Some(message)) => println!(
                "{:>12.3e} {:>7.1} {:>6.3} failed: {message}",
                record.concentration_cm3, record.temperature, record.porosity
            ),
            (None, None) => unreachable!("a record is either a result or an error"),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_parse() {
        let cli = Cli::parse_from(["thermoelectric-rs"]);
        assert_eq!(cli.preset, "si");
        assert_eq!(cli.concentration, vec![1.0e19]);
        assert_eq!(cli.temperature, vec![300.0]);
        assert!(cli.porosity.is_none());
    }

    #[test]
    fn comma_lists_and_pores_parse() {
        let cli = Cli::parse_from([
            "thermoelectric-rs",
            "--concentration",
            "1e19,5e19",
            "--temperature",
            "300,500,700",
            "--porosity",
            "0.05",
            "--pore-shape",
            "cylinder",
        ]);
        assert_eq!(cli.concentration.len(), 2);
        assert_eq!(cli.temperature.len(), 3);
        assert_eq!(cli.porosity, Some(0.05));
        assert_eq!(cli.pore_shape, ShapeArg::Cylinder);
        let geometry = pore_geometry(&cli).unwrap().unwrap();
        assert_eq!(geometry.shape, PoreShape::Cylinder { radius: 2.0e-9 });
    }

    #[test]
    fn unknown_preset_is_an_error() {
        let cli = Cli::parse_from(["thermoelectric-rs", "--preset", "unobtainium"]);
        assert!(load_material(&cli).is_err());
    }
}
