//! Pieces of the `graticule` command that are worth testing without a process:
//! config resolution and output rendering.

use std::fmt::Write;
use std::path::Path;

use foundation::math::round_to_decimals;
use graticule::label::{format_label, precision};
use graticule::{
    AngularExtent, BoundsRounding, GraticuleConfig, GraticuleResult, GridLine, TableChoice,
};

/// Flag values that override a config document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub table: Option<TableChoice>,
    pub density: Option<f64>,
    pub granularity_deg: Option<f64>,
    pub legacy_bounds: bool,
}

/// Defaults, then the config file if any, then the flags.
pub fn resolve_config(path: Option<&Path>, overrides: &Overrides) -> Result<GraticuleConfig, String> {
    let mut config = match path {
        Some(p) => GraticuleConfig::from_json_file(p).map_err(|e| format!("{}: {e}", p.display()))?,
        None => GraticuleConfig::default(),
    };

    if let Some(table) = &overrides.table {
        config.table = table.clone();
    }
    if let Some(density) = overrides.density {
        config.density = density;
    }
    if let Some(granularity) = overrides.granularity_deg {
        config.granularity_deg = granularity;
    }
    if overrides.legacy_bounds {
        config.bounds = BoundsRounding::Legacy;
    }

    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

/// Extent from degree flags; all four must be present.
pub fn extent_from_args(
    west: Option<f64>,
    south: Option<f64>,
    east: Option<f64>,
    north: Option<f64>,
) -> Result<AngularExtent, String> {
    match (west, south, east, north) {
        (Some(w), Some(s), Some(e), Some(n)) => {
            if ![w, s, e, n].iter().all(|v| v.is_finite()) {
                return Err("extent values must be finite".to_string());
            }
            Ok(AngularExtent::from_degrees(w, s, e, n))
        }
        _ => Err("--west, --south, --east and --north are required unless --full-sphere is set".to_string()),
    }
}

/// Label text for one angle, rounded to the precision of `spacing_deg` when given.
pub fn format_angle(degrees: f64, is_latitude: bool, spacing_deg: Option<f64>) -> String {
    let angle = match spacing_deg {
        Some(spacing) => round_to_decimals(degrees, precision(spacing)),
        None => degrees,
    };
    format_label(angle, is_latitude)
}

pub fn render_json(result: &GraticuleResult) -> Result<String, String> {
    serde_json::to_string_pretty(result).map_err(|e| format!("serialize result: {e}"))
}

/// Human-readable listing, one line per grid line.
pub fn render_text(result: &GraticuleResult) -> String {
    let mut out = String::new();
    if result.is_empty() {
        out.push_str("no grid for this extent\n");
        return out;
    }

    let _ = writeln!(
        out,
        "spacing: lat {}° lon {}°",
        round_to_decimals(result.spacing.lat.to_degrees(), 6),
        round_to_decimals(result.spacing.lon.to_degrees(), 6)
    );
    let _ = writeln!(out, "meridians ({}):", result.meridians.len());
    for line in &result.meridians {
        push_line(&mut out, line);
    }
    let _ = writeln!(out, "parallels ({}):", result.parallels.len());
    for line in &result.parallels {
        push_line(&mut out, line);
    }
    out
}

fn push_line(out: &mut String, line: &GridLine) {
    let _ = writeln!(
        out,
        "  {:<16} {:<9} {:>11}  points {}",
        line.label_text,
        format!("{:?}", line.color).to_lowercase(),
        round_to_decimals(line.angle.to_degrees(), 6),
        line.path.len()
    );
}
