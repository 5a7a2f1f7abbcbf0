use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use graticule::placement::{GridLabel, place_labels};
use graticule::{AngularExtent, Graticule, GraticuleResult, TableChoice};
use serde::Serialize;
use tools::{
    Overrides, extent_from_args, format_angle, render_json, render_text, resolve_config,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "graticule", about = "Adaptive latitude/longitude grid lines")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the grid for an extent given in degrees.
    Build(BuildArgs),
    /// Print the label for a single angle.
    Format(FormatArgs),
}

#[derive(Args, Debug)]
struct BuildArgs {
    #[arg(long, allow_negative_numbers = true)]
    west: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    south: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    east: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    north: Option<f64>,
    /// Ignore the extent flags and grid the whole globe.
    #[arg(long)]
    full_sphere: bool,
    /// JSON config document; flags below take precedence.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, value_enum)]
    table: Option<TableArg>,
    #[arg(long)]
    density: Option<f64>,
    /// Tessellation step along each line, in degrees.
    #[arg(long)]
    granularity: Option<f64>,
    #[arg(long)]
    legacy_bounds: bool,
    /// Include label placements in JSON output.
    #[arg(long)]
    labels: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

#[derive(Args, Debug)]
struct FormatArgs {
    #[arg(allow_negative_numbers = true)]
    degrees: f64,
    /// Treat the angle as a latitude (N/S) instead of a longitude (E/W).
    #[arg(long)]
    latitude: bool,
    /// Grid step in degrees, used to pick the displayed precision.
    #[arg(long)]
    spacing: Option<f64>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum TableArg {
    Standard,
    Extended,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

/// JSON document for `build --labels`.
#[derive(Serialize)]
struct WithLabels<'a> {
    #[serde(flatten)]
    result: &'a GraticuleResult,
    labels: Vec<GridLabel>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), String> {
    let cli = Cli::parse();
    match cli.command {
        Command::Build(args) => cmd_build(args),
        Command::Format(args) => cmd_format(args),
    }
}

fn cmd_build(args: BuildArgs) -> Result<(), String> {
    let overrides = Overrides {
        table: args.table.map(|t| match t {
            TableArg::Standard => TableChoice::Standard,
            TableArg::Extended => TableChoice::Extended,
        }),
        density: args.density,
        granularity_deg: args.granularity,
        legacy_bounds: args.legacy_bounds,
    };
    let config = resolve_config(args.config.as_deref(), &overrides)?;
    let graticule = Graticule::new(&config).map_err(|e| e.to_string())?;

    let extent = if args.full_sphere {
        AngularExtent::full_sphere()
    } else {
        extent_from_args(args.west, args.south, args.east, args.north)?
    };

    let result = graticule.build(&extent);
    info!(
        meridians = result.meridians.len(),
        parallels = result.parallels.len(),
        "built graticule"
    );

    let output = match args.format {
        OutputFormat::Text => render_text(&result),
        OutputFormat::Json if args.labels => {
            let doc = WithLabels {
                result: &result,
                labels: place_labels(&result, None),
            };
            serde_json::to_string_pretty(&doc).map_err(|e| format!("serialize result: {e}"))?
        }
        OutputFormat::Json => render_json(&result)?,
    };
    println!("{output}");
    Ok(())
}

fn cmd_format(args: FormatArgs) -> Result<(), String> {
    if !args.degrees.is_finite() {
        return Err(format!("angle must be finite, got {}", args.degrees));
    }
    match args.spacing {
        Some(spacing) if !spacing.is_finite() || spacing <= 0.0 => {
            return Err(format!("--spacing must be positive, got {spacing}"));
        }
        _ => {}
    }
    println!("{}", format_angle(args.degrees, args.latitude, args.spacing));
    Ok(())
}
