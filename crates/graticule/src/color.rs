use serde::{Deserialize, Serialize};

use crate::label::{ANTIMERIDIAN_DMS, EQUATOR_DMS, PRIME_MERIDIAN_DMS};
use crate::lines::GridAxis;

/// Highlight policy for a grid line.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineColor {
    /// Equator, prime meridian and antimeridian.
    Highlight,
    /// Ordinary meridians.
    Normal,
    /// Ordinary parallels, drawn at reduced opacity.
    Muted,
}

impl LineColor {
    pub const fn rgba(self) -> [f32; 4] {
        match self {
            LineColor::Highlight => [1.0, 1.0, 0.0, 1.0],
            LineColor::Normal => [1.0, 1.0, 1.0, 1.0],
            LineColor::Muted => [1.0, 1.0, 1.0, 0.5],
        }
    }
}

/// Colour of a line from its raw (pre-friendly-name) DMS text.
pub fn color_for(axis: GridAxis, dms: &str) -> LineColor {
    match axis {
        GridAxis::Meridian if dms == PRIME_MERIDIAN_DMS || dms == ANTIMERIDIAN_DMS => {
            LineColor::Highlight
        }
        GridAxis::Meridian => LineColor::Normal,
        GridAxis::Parallel if dms == EQUATOR_DMS => LineColor::Highlight,
        GridAxis::Parallel => LineColor::Muted,
    }
}
