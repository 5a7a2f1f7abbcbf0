use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::GraticuleError;
use crate::extent::AngularExtent;

/// Target number of grid divisions across the visible span.
pub const DEFAULT_DENSITY: f64 = 7.0;

/// Canonical grid increments (degrees).
pub const STANDARD_STEPS_DEG: [f64; 8] = [0.05, 0.1, 0.2, 0.5, 1.0, 2.0, 5.0, 10.0];

/// Canonical increments plus finer steps for extreme zoom (degrees).
pub const EXTENDED_STEPS_DEG: [f64; 11] = [
    0.00675, 0.0125, 0.025, 0.05, 0.1, 0.2, 0.5, 1.0, 2.0, 5.0, 10.0,
];

/// Strictly ascending list of allowed grid increments.
#[derive(Debug, Clone, PartialEq)]
pub struct SpacingTable {
    steps_deg: Cow<'static, [f64]>,
}

impl SpacingTable {
    pub const STANDARD: Self = Self {
        steps_deg: Cow::Borrowed(&STANDARD_STEPS_DEG),
    };

    pub const EXTENDED: Self = Self {
        steps_deg: Cow::Borrowed(&EXTENDED_STEPS_DEG),
    };

    /// Validated custom table.
    pub fn from_degrees(steps_deg: Vec<f64>) -> Result<Self, GraticuleError> {
        if steps_deg.is_empty() {
            return Err(GraticuleError::EmptySpacingTable);
        }
        for (index, &value) in steps_deg.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(GraticuleError::NonPositiveSpacing { index, value });
            }
            if index > 0 && value <= steps_deg[index - 1] {
                return Err(GraticuleError::SpacingNotAscending { index });
            }
        }
        Ok(Self {
            steps_deg: Cow::Owned(steps_deg),
        })
    }

    pub fn steps_deg(&self) -> &[f64] {
        &self.steps_deg
    }

    pub fn steps_rad(&self) -> impl Iterator<Item = f64> + '_ {
        self.steps_deg.iter().map(|d| d.to_radians())
    }

    pub fn finest_rad(&self) -> f64 {
        self.steps_deg.first().copied().unwrap_or(0.0).to_radians()
    }

    pub fn coarsest_rad(&self) -> f64 {
        self.steps_deg.last().copied().unwrap_or(0.0).to_radians()
    }

    /// Walk up the table while the current step is still finer than
    /// `span / density`, returning the last step reached.
    ///
    /// A non-positive or NaN span never enters the walk and yields `0.0`.
    pub fn pick(&self, span: f64, density: f64) -> f64 {
        let target = span / density;
        let mut spacing = 0.0;
        let mut steps = self.steps_rad();
        while spacing < target {
            match steps.next() {
                Some(step) => spacing = step,
                None => break,
            }
        }
        spacing
    }
}

impl Default for SpacingTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Selected grid increments (radians). Zero on an axis means "no grid".
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GridSpacing {
    pub lat: f64,
    pub lon: f64,
}

impl GridSpacing {
    pub fn is_degenerate(&self) -> bool {
        !(self.lat > 0.0 && self.lon > 0.0)
    }
}

pub fn select_spacing(extent: &AngularExtent, table: &SpacingTable, density: f64) -> GridSpacing {
    GridSpacing {
        lat: table.pick(extent.height(), density),
        lon: table.pick(extent.width(), density),
    }
}
