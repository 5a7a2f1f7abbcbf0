use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bounds::{BoundsRounding, GridBounds, compute_bounds};
use crate::config::GraticuleConfig;
use crate::error::GraticuleError;
use crate::extent::AngularExtent;
use crate::lines::{DEFAULT_GRANULARITY_DEG, GridLine, generate_meridians, generate_parallels};
use crate::spacing::{DEFAULT_DENSITY, GridSpacing, SpacingTable, select_spacing};

/// Grid lines for one visible extent.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraticuleResult {
    pub spacing: GridSpacing,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounds: Option<GridBounds>,
    pub meridians: Vec<GridLine>,
    pub parallels: Vec<GridLine>,
}

impl GraticuleResult {
    pub fn is_empty(&self) -> bool {
        self.meridians.is_empty() && self.parallels.is_empty()
    }

    /// Meridians first, then parallels.
    pub fn lines(&self) -> impl Iterator<Item = &GridLine> {
        self.meridians.iter().chain(self.parallels.iter())
    }
}

/// Adaptive graticule generator.
///
/// Holds only immutable configuration; `build` is a pure function of the
/// extent, so one instance can serve any number of threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Graticule {
    table: SpacingTable,
    density: f64,
    granularity: f64,
    rounding: BoundsRounding,
}

impl Default for Graticule {
    fn default() -> Self {
        Self {
            table: SpacingTable::STANDARD,
            density: DEFAULT_DENSITY,
            granularity: DEFAULT_GRANULARITY_DEG.to_radians(),
            rounding: BoundsRounding::Matched,
        }
    }
}

impl Graticule {
    pub fn new(config: &GraticuleConfig) -> Result<Self, GraticuleError> {
        config.validate()?;
        Ok(Self {
            table: config.spacing_table()?,
            density: config.density,
            granularity: config.granularity_deg.to_radians(),
            rounding: config.bounds,
        })
    }

    pub fn table(&self) -> &SpacingTable {
        &self.table
    }

    pub fn build(&self, extent: &AngularExtent) -> GraticuleResult {
        if extent.is_degenerate() {
            debug!(?extent, "degenerate extent, no grid");
            return GraticuleResult::default();
        }

        let spacing = select_spacing(extent, &self.table, self.density);
        if spacing.is_degenerate() {
            debug!(?extent, ?spacing, "zero grid spacing, no grid");
            return GraticuleResult {
                spacing,
                ..GraticuleResult::default()
            };
        }

        let bounds = compute_bounds(extent, spacing, self.rounding);
        let meridians = generate_meridians(&bounds, spacing.lon, self.granularity);
        let parallels = generate_parallels(&bounds, spacing.lat, self.granularity);

        debug!(
            lat_step_deg = spacing.lat.to_degrees(),
            lon_step_deg = spacing.lon.to_degrees(),
            meridians = meridians.len(),
            parallels = parallels.len(),
            "graticule built"
        );

        GraticuleResult {
            spacing,
            bounds: Some(bounds),
            meridians,
            parallels,
        }
    }
}

/// Build with the default configuration.
pub fn build(extent: &AngularExtent) -> GraticuleResult {
    Graticule::default().build(extent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::LineColor;
    use crate::config::TableChoice;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn graticule_is_shareable() {
        assert_send_sync::<Graticule>();
        assert_send_sync::<GraticuleResult>();
    }

    #[test]
    fn default_matches_default_config() {
        let from_config = Graticule::new(&GraticuleConfig::default()).expect("valid");
        assert_eq!(from_config, Graticule::default());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = GraticuleConfig {
            density: f64::NAN,
            ..GraticuleConfig::default()
        };
        assert!(matches!(
            Graticule::new(&config),
            Err(GraticuleError::InvalidDensity(_))
        ));
    }

    #[test]
    fn degenerate_extents_give_empty_result() {
        let g = Graticule::default();
        let zero_width = AngularExtent::from_degrees(5.0, -5.0, 5.0, 5.0);
        let zero_height = AngularExtent::from_degrees(-5.0, 5.0, 5.0, 5.0);
        for extent in [zero_width, zero_height] {
            let result = g.build(&extent);
            assert!(result.is_empty());
            assert!(result.bounds.is_none());
        }
    }

    #[test]
    fn build_is_deterministic() {
        let extent = AngularExtent::from_degrees(-33.3, 12.0, 4.4, 40.5);
        assert_eq!(build(&extent), build(&extent));
    }

    #[test]
    fn extended_table_reaches_finer_steps() {
        let extent = AngularExtent::from_degrees(10.0, 10.0, 10.01, 10.01);
        let standard = build(&extent);
        let extended = Graticule::new(&GraticuleConfig {
            table: TableChoice::Extended,
            ..GraticuleConfig::default()
        })
        .expect("valid")
        .build(&extent);
        assert!(extended.spacing.lon < standard.spacing.lon);
        assert!(!extended.meridians.is_empty());
        assert!(
            extended
                .meridians
                .iter()
                .all(|l| l.color == LineColor::Normal)
        );
    }

    #[test]
    fn lines_iterates_both_axes() {
        let result = build(&AngularExtent::from_degrees(-10.0, -10.0, 10.0, 10.0));
        assert_eq!(
            result.lines().count(),
            result.meridians.len() + result.parallels.len()
        );
    }
}
