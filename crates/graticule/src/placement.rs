use foundation::math::{Ecef, Geodetic, LonLat, geodetic_to_ecef};
use serde::{Deserialize, Serialize};

use crate::builder::GraticuleResult;
use crate::color::LineColor;
use crate::lines::{GridAxis, GridLine};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalAlign {
    Left,
    Center,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAlign {
    Top,
    Bottom,
}

/// Screen-space layout of a grid label relative to its anchor.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelHint {
    pub pixel_offset: [f32; 2],
    pub horizontal: HorizontalAlign,
    pub vertical: VerticalAlign,
}

/// Meridian labels hang to the right of their line, parallel labels sit on top of it.
pub fn label_hint(axis: GridAxis) -> LabelHint {
    match axis {
        GridAxis::Meridian => LabelHint {
            pixel_offset: [4.0, 0.0],
            horizontal: HorizontalAlign::Left,
            vertical: VerticalAlign::Top,
        },
        GridAxis::Parallel => LabelHint {
            pixel_offset: [0.0, -6.0],
            horizontal: HorizontalAlign::Center,
            vertical: VerticalAlign::Bottom,
        },
    }
}

/// Where a line's label sits on the globe.
///
/// With a screen-centre pick the label slides along its line to the centre's
/// latitude (meridians) or longitude (parallels); otherwise it uses the
/// grid's own mid-span coordinate.
pub fn label_anchor(line: &GridLine, center: Option<Geodetic>) -> LonLat {
    match line.axis {
        GridAxis::Meridian => {
            let lat = center.map_or(line.label_angle, |c| c.lat_rad);
            LonLat::new(line.angle, lat)
        }
        GridAxis::Parallel => {
            let lon = center.map_or(line.label_angle, |c| c.lon_rad);
            LonLat::new(lon, line.angle)
        }
    }
}

pub fn label_anchor_ecef(line: &GridLine, center: Option<Geodetic>) -> Ecef {
    geodetic_to_ecef(label_anchor(line, center).on_surface())
}

/// Line path lifted onto the ellipsoid surface.
pub fn path_to_ecef(line: &GridLine) -> Vec<Ecef> {
    line.path
        .iter()
        .map(|p| geodetic_to_ecef(p.on_surface()))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLabel {
    pub axis: GridAxis,
    pub text: String,
    pub position: LonLat,
    pub ecef: Ecef,
    pub color: LineColor,
    pub hint: LabelHint,
}

/// One label per line, meridians first.
pub fn place_labels(result: &GraticuleResult, center: Option<Geodetic>) -> Vec<GridLabel> {
    result
        .lines()
        .map(|line| {
            let position = label_anchor(line, center);
            GridLabel {
                axis: line.axis,
                text: line.label_text.clone(),
                position,
                ecef: geodetic_to_ecef(position.on_surface()),
                color: line.color,
                hint: label_hint(line.axis),
            }
        })
        .collect()
}
