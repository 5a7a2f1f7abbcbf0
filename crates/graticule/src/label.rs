//! Degree-minute-second label text for grid lines.
//!
//! Formatting is a fixed sequence of rules:
//! 1. round the angle to the decimal resolution of the grid step,
//! 2. split it into whole degrees, minutes and hundredths of a second,
//! 3. drop empty minute/second segments and append the hemisphere,
//! 4. swap in a friendly name for the equator, prime meridian and antimeridian.

use std::fmt::Write as _;

use foundation::math::round_to_decimals;

use crate::lines::GridAxis;

pub const EQUATOR_DMS: &str = "0°N";
pub const PRIME_MERIDIAN_DMS: &str = "0°E";
pub const ANTIMERIDIAN_DMS: &str = "180°E";
/// Raw text of the western copy of the antimeridian; never drawn.
pub const ANTIMERIDIAN_WEST_DMS: &str = "180°W";

const CENTI_ARCSEC_PER_DEGREE: f64 = 360_000.0;
const CENTI_ARCSEC_PER_MINUTE: u64 = 6_000;

/// Decimal digits of degrees worth showing for a grid step (degrees).
pub fn precision(spacing_deg: f64) -> u32 {
    // Steps come from radians and may sit an ulp below a threshold.
    let below = |threshold: f64| spacing_deg < threshold * (1.0 - 1e-9);
    if below(0.01) {
        3
    } else if below(0.1) {
        2
    } else if below(1.0) {
        1
    } else {
        0
    }
}

/// `D°[M'][S"]<hemisphere>` for an angle in degrees.
pub fn format_dms(angle_deg: f64, axis: GridAxis) -> String {
    let total = (angle_deg.abs() * CENTI_ARCSEC_PER_DEGREE).round() as u64;
    let degrees = total / (CENTI_ARCSEC_PER_DEGREE as u64);
    let rest = total % (CENTI_ARCSEC_PER_DEGREE as u64);
    let minutes = rest / CENTI_ARCSEC_PER_MINUTE;
    let centi_seconds = rest % CENTI_ARCSEC_PER_MINUTE;

    let mut out = format!("{degrees}°");
    if minutes != 0 || centi_seconds != 0 {
        let _ = write!(out, "{minutes}'");
    }
    if centi_seconds != 0 {
        push_seconds(&mut out, centi_seconds);
        out.push('"');
    }
    out.push(hemisphere(angle_deg, axis));
    out
}

fn push_seconds(out: &mut String, centi_seconds: u64) {
    let whole = centi_seconds / 100;
    let frac = centi_seconds % 100;
    let _ = if frac == 0 {
        write!(out, "{whole}")
    } else if frac % 10 == 0 {
        write!(out, "{whole}.{}", frac / 10)
    } else {
        write!(out, "{whole}.{frac:02}")
    };
}

fn hemisphere(angle_deg: f64, axis: GridAxis) -> char {
    let positive = angle_deg >= 0.0;
    match (axis, positive) {
        (GridAxis::Parallel, true) => 'N',
        (GridAxis::Parallel, false) => 'S',
        (GridAxis::Meridian, true) => 'E',
        (GridAxis::Meridian, false) => 'W',
    }
}

/// Raw DMS text for a line at `angle_rad` on a grid stepping by `spacing_rad`.
pub fn dms_for_line(angle_rad: f64, spacing_rad: f64, axis: GridAxis) -> String {
    let digits = precision(spacing_rad.to_degrees());
    format_dms(round_to_decimals(angle_rad.to_degrees(), digits), axis)
}

pub fn friendly_name(dms: &str) -> Option<&'static str> {
    match dms {
        EQUATOR_DMS => Some("Equator"),
        PRIME_MERIDIAN_DMS => Some("Prime Meridian"),
        ANTIMERIDIAN_DMS => Some("Antimeridian"),
        _ => None,
    }
}

/// Text shown to the user: the friendly name if there is one, otherwise the DMS text.
pub fn display_text(dms: &str) -> String {
    friendly_name(dms).map_or_else(|| dms.to_string(), str::to_string)
}

/// `format(angle, is_latitude)` with friendly names applied.
pub fn format_label(angle_deg: f64, is_latitude: bool) -> String {
    let axis = if is_latitude {
        GridAxis::Parallel
    } else {
        GridAxis::Meridian
    };
    display_text(&format_dms(angle_deg, axis))
}
