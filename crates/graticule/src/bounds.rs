use std::f64::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::extent::AngularExtent;
use crate::spacing::GridSpacing;

/// Grid steps added on each edge so the grid still covers the screen while
/// the extent estimate lags behind camera motion.
pub const EXPANSION_STEPS: f64 = 2.0;

/// How the upper edges are snapped to the grid.
///
/// `Legacy` snaps the east edge with the latitude step and the north edge
/// with the longitude step (and pads the north edge by longitude steps).
/// It exists only to reproduce older output; `Matched` keeps every edge on
/// its own axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundsRounding {
    #[default]
    Matched,
    Legacy,
}

/// Grid-aligned iteration limits and label positions (radians).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridBounds {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
    /// Latitude at which meridian labels sit.
    pub label_lat: f64,
    /// Longitude at which parallel labels sit.
    pub label_lon: f64,
}

/// Snap `value` to a multiple of `step`, moving toward zero.
pub fn snap_toward_zero(value: f64, step: f64) -> f64 {
    let q = value / step;
    let whole = if value < 0.0 { q.ceil() } else { q.floor() };
    whole * step
}

pub fn compute_bounds(
    extent: &AngularExtent,
    spacing: GridSpacing,
    rounding: BoundsRounding,
) -> GridBounds {
    let GridSpacing {
        lat: d_lat,
        lon: d_lon,
    } = spacing;
    let (east_step, north_step, north_pad) = match rounding {
        BoundsRounding::Matched => (d_lon, d_lat, d_lat),
        BoundsRounding::Legacy => (d_lat, d_lon, d_lon),
    };

    let min_lon = (snap_toward_zero(extent.west, d_lon) - EXPANSION_STEPS * d_lon).max(-PI);
    let max_lon = (snap_toward_zero(extent.east, east_step) + EXPANSION_STEPS * d_lon).min(PI);
    let min_lat =
        (snap_toward_zero(extent.south, d_lat) - EXPANSION_STEPS * d_lat).max(-FRAC_PI_2);
    let max_lat =
        (snap_toward_zero(extent.north, north_step) + EXPANSION_STEPS * north_pad).min(FRAC_PI_2);

    let label_lat = min_lat + ((max_lat - min_lat) / d_lat / 2.0).floor() * d_lat;
    let label_lon = min_lon + ((max_lon - min_lon) / d_lon / 2.0).floor() * d_lon;

    let bounds = GridBounds {
        min_lon,
        max_lon,
        min_lat,
        max_lat,
        label_lat,
        label_lon,
    };
    trace!(?bounds, ?rounding, "grid bounds");
    bounds
}
