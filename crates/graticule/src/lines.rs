use foundation::math::LonLat;
use serde::{Deserialize, Serialize};

use crate::bounds::GridBounds;
use crate::color::{LineColor, color_for};
use crate::label::{ANTIMERIDIAN_WEST_DMS, display_text, dms_for_line};

/// Default tessellation step along a line (degrees).
pub const DEFAULT_GRANULARITY_DEG: f64 = 1.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridAxis {
    /// Constant longitude.
    Meridian,
    /// Constant latitude.
    Parallel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub axis: GridAxis,
    /// The coordinate held constant along the line (radians).
    pub angle: f64,
    pub path: Vec<LonLat>,
    /// Cross-axis coordinate of the label (radians).
    pub label_angle: f64,
    pub label_text: String,
    pub color: LineColor,
}

/// `min, min + step, min + 2*step, ...` strictly below `max`.
pub fn grid_steps(min: f64, max: f64, step: f64) -> impl Iterator<Item = f64> {
    let count = if step > 0.0 && max > min {
        ((max - min) / step).ceil() as usize
    } else {
        0
    };
    (0..count)
        .map(move |i| min + i as f64 * step)
        .filter(move |v| *v < max)
}

/// Cross-axis samples for a line; always ends exactly on `max`.
fn tessellate(min: f64, max: f64, granularity: f64) -> Vec<f64> {
    let mut samples: Vec<f64> = grid_steps(min, max, granularity).collect();
    samples.push(max);
    samples
}

pub fn generate_meridians(bounds: &GridBounds, d_lon: f64, granularity: f64) -> Vec<GridLine> {
    let lats = tessellate(bounds.min_lat, bounds.max_lat, granularity);
    grid_steps(bounds.min_lon, bounds.max_lon, d_lon)
        .filter_map(|lon| {
            let dms = dms_for_line(lon, d_lon, GridAxis::Meridian);
            // The eastern 180° line already covers it.
            if dms == ANTIMERIDIAN_WEST_DMS {
                return None;
            }
            Some(GridLine {
                axis: GridAxis::Meridian,
                angle: lon,
                path: lats.iter().map(|&lat| LonLat::new(lon, lat)).collect(),
                label_angle: bounds.label_lat,
                color: color_for(GridAxis::Meridian, &dms),
                label_text: display_text(&dms),
            })
        })
        .collect()
}

pub fn generate_parallels(bounds: &GridBounds, d_lat: f64, granularity: f64) -> Vec<GridLine> {
    let lons = tessellate(bounds.min_lon, bounds.max_lon, granularity);
    grid_steps(bounds.min_lat, bounds.max_lat, d_lat)
        .map(|lat| {
            let dms = dms_for_line(lat, d_lat, GridAxis::Parallel);
            GridLine {
                axis: GridAxis::Parallel,
                angle: lat,
                path: lons.iter().map(|&lon| LonLat::new(lon, lat)).collect(),
                label_angle: bounds.label_lon,
                color: color_for(GridAxis::Parallel, &dms),
                label_text: display_text(&dms),
            }
        })
        .collect()
}
