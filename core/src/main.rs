//! GEOMAG: magnetic declination, inclination and strength lookups from the command line.
//!
//! Estimates are interpolated from a pre-sampled World Magnetic Model grid. By default the
//! compiled-in WMM-2020 tables are used; a configuration file can point at an external
//! snapshot and choose the output units.

mod common;

use clap::{Args, Parser, Subcommand};
use common::{create_parent_dirs, init_logger, validate_input_csv};
use log::{error, info};
use std::error::Error;
use std::path::PathBuf;

use geomag::MagneticFieldTable;
use geomag::batch::{FieldRecord, PositionRecord, lookup_records};
use geomag::config::LookupConfig;
use geomag::field::{AngleUnit, StrengthUnit};
use geomag::grid::{LAT_DIM, LON_DIM, SAMPLING_RES};

const LONG_ABOUT: &str = "GEOMAG: magnetic field lookups from a pre-sampled World Magnetic Model grid.

Declination, inclination and total field strength are bilinearly interpolated from a
10 degree global grid. Latitudes beyond the poles are clamped and longitudes are wrapped,
so any finite position yields an estimate. NaN or infinite coordinates are rejected.

Output units and an optional external table snapshot are read from a configuration
file (TOML/JSON/YAML); command-line unit flags override the file.";

/// Command line arguments
#[derive(Parser)]
#[command(author, version, about = "Magnetic field lookups from a pre-sampled World Magnetic Model grid.", long_about = LONG_ABOUT)]
struct Cli {
    /// Configuration file (TOML/JSON/YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    /// Log file path (if not specified, logs to stderr)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

/// Top-level commands
#[derive(Subcommand, Clone)]
enum Command {
    #[command(name = "point", about = "Estimate the field at a single position")]
    Point(PointArgs),
    #[command(
        name = "batch",
        about = "Estimate the field for every position in a CSV file",
        long_about = "Estimate the field for every position in a CSV file. The input needs 'latitude' and 'longitude' columns in degrees and may carry a 'label' column, which is copied to the output. Processing stops at the first row with a non-finite coordinate."
    )]
    Batch(BatchArgs),
    #[command(
        name = "export",
        about = "Write the active tables as headerless CSV files (declination.csv, inclination.csv, strength.csv)"
    )]
    Export(ExportArgs),
    #[command(name = "config", about = "Write the active configuration (defaults if --config is not given) to a file")]
    CreateConfig(CreateConfigArgs),
    #[command(name = "info", about = "Show the model and grid geometry of the active tables")]
    Info,
}

/// Output unit overrides
#[derive(Args, Clone, Debug)]
struct UnitArgs {
    /// Unit for declination and inclination
    #[arg(long, value_enum)]
    angle_unit: Option<AngleUnit>,

    /// Unit for field strength
    #[arg(long, value_enum)]
    strength_unit: Option<StrengthUnit>,
}

#[derive(Args, Clone, Debug)]
struct PointArgs {
    /// Latitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    latitude: f64,

    /// Longitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    longitude: f64,

    #[command(flatten)]
    units: UnitArgs,
}

#[derive(Args, Clone, Debug)]
struct BatchArgs {
    /// Input CSV file of positions
    #[arg(short, long, value_parser)]
    input: PathBuf,

    /// Output CSV file
    #[arg(short, long, value_parser)]
    output: PathBuf,

    #[command(flatten)]
    units: UnitArgs,
}

#[derive(Args, Clone, Debug)]
struct ExportArgs {
    /// Output directory
    #[arg(short, long, value_parser)]
    output: PathBuf,
}

#[derive(Args, Clone, Debug)]
struct CreateConfigArgs {
    /// Output file; the extension selects the format (.toml, .json, .yaml)
    #[arg(short, long, value_parser, default_value = "geomag.toml")]
    output: PathBuf,
}

impl UnitArgs {
    fn resolve(&self, config: &LookupConfig) -> (AngleUnit, StrengthUnit) {
        (
            self.angle_unit.unwrap_or(config.angle_unit),
            self.strength_unit.unwrap_or(config.strength_unit),
        )
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<LookupConfig, Box<dyn Error>> {
    match path {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            Ok(LookupConfig::from_file(path)?)
        }
        None => Ok(LookupConfig::default()),
    }
}

fn run_point(
    table: &MagneticFieldTable,
    config: &LookupConfig,
    args: &PointArgs,
) -> Result<(), Box<dyn Error>> {
    let (angle_unit, strength_unit) = args.units.resolve(config);
    let field = table.lookup(args.latitude, args.longitude)?;
    let (declination, inclination, strength) = field.in_units(angle_unit, strength_unit);
    println!("Position:    [{:.4}, {:.4}]", args.latitude, args.longitude);
    println!("Declination: {:.6} {}", declination, angle_unit.symbol());
    println!("Inclination: {:.6} {}", inclination, angle_unit.symbol());
    println!("Strength:    {:.6} {}", strength, strength_unit.symbol());
    let ned = field.ned_vector();
    println!(
        "NED vector:  [{:.6}, {:.6}, {:.6}] G",
        ned[0], ned[1], ned[2]
    );
    Ok(())
}

fn run_batch(
    table: &MagneticFieldTable,
    config: &LookupConfig,
    args: &BatchArgs,
) -> Result<(), Box<dyn Error>> {
    validate_input_csv(&args.input)?;
    let (angle_unit, strength_unit) = args.units.resolve(config);
    info!("Reading positions from {}", args.input.display());
    let records = PositionRecord::from_csv(&args.input)?;
    let results = lookup_records(table, &records, angle_unit, strength_unit)?;
    create_parent_dirs(&args.output)?;
    FieldRecord::to_csv(&results, &args.output)?;
    info!(
        "Wrote {} records to {}",
        results.len(),
        args.output.display()
    );
    Ok(())
}

fn run_export(table: &MagneticFieldTable, args: &ExportArgs) -> Result<(), Box<dyn Error>> {
    for path in table.export_csv(&args.output)? {
        info!("Wrote {}", path.display());
    }
    Ok(())
}

fn run_create_config(config: &LookupConfig, args: &CreateConfigArgs) -> Result<(), Box<dyn Error>> {
    create_parent_dirs(&args.output)?;
    config.to_file(&args.output)?;
    info!("Wrote configuration to {}", args.output.display());
    Ok(())
}

fn run_info(table: &MagneticFieldTable) {
    let metadata = table.metadata();
    println!("Model:      {}", metadata.model);
    println!("Version:    {}", metadata.version);
    match metadata.epoch_date() {
        Some(date) => println!("Epoch:      {:.4} ({})", metadata.epoch, date),
        None => println!("Epoch:      {:.4}", metadata.epoch),
    }
    println!(
        "Grid:       {} x {} samples at {} degree spacing",
        LAT_DIM, LON_DIM, SAMPLING_RES
    );
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let config = load_config(cli.config.as_ref())?;
    match &cli.command {
        Command::Point(args) => run_point(&config.build_table()?, &config, args),
        Command::Batch(args) => run_batch(&config.build_table()?, &config, args),
        Command::Export(args) => run_export(&config.build_table()?, args),
        Command::CreateConfig(args) => run_create_config(&config, args),
        Command::Info => {
            run_info(&config.build_table()?);
            Ok(())
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logger(&cli.log_level, cli.log_file.as_ref())?;
    if let Err(e) = run(&cli) {
        error!("{}", e);
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        let cli = Cli::try_parse_from([
            "geomag",
            "point",
            "--latitude",
            "-33.9",
            "--longitude",
            "-70.6",
            "--angle-unit",
            "degrees",
        ])
        .unwrap();
        match cli.command {
            Command::Point(args) => {
                assert_eq!(args.latitude, -33.9);
                assert_eq!(args.longitude, -70.6);
                assert_eq!(args.units.angle_unit, Some(AngleUnit::Degrees));
                assert_eq!(args.units.strength_unit, None);
            }
            _ => panic!("Expected point command"),
        }
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_parse_batch_with_global_options() {
        let cli = Cli::try_parse_from([
            "geomag",
            "batch",
            "-i",
            "in.csv",
            "-o",
            "out.csv",
            "--config",
            "geomag.yaml",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("geomag.yaml")));
        assert_eq!(cli.log_level, "debug");
        assert!(matches!(cli.command, Command::Batch(_)));
    }

    #[test]
    fn test_unit_overrides() {
        let config = LookupConfig {
            angle_unit: AngleUnit::Degrees,
            strength_unit: StrengthUnit::Microtesla,
            tables: None,
        };
        let units = UnitArgs {
            angle_unit: None,
            strength_unit: Some(StrengthUnit::Nanotesla),
        };
        assert_eq!(
            units.resolve(&config),
            (AngleUnit::Degrees, StrengthUnit::Nanotesla)
        );
    }

    #[test]
    fn test_missing_subcommand() {
        assert!(Cli::try_parse_from(["geomag"]).is_err());
    }
}
