use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bounds::BoundsRounding;
use crate::error::GraticuleError;
use crate::lines::DEFAULT_GRANULARITY_DEG;
use crate::spacing::{DEFAULT_DENSITY, SpacingTable};

/// Which spacing table to select grid steps from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableChoice {
    #[default]
    Standard,
    Extended,
    /// Strictly ascending steps in degrees.
    Custom(Vec<f64>),
}

/// Tunable constants of the graticule.
///
/// Every field has a default, so a config document only needs the fields it
/// changes:
///
/// ```json
/// { "table": "extended", "granularity_deg": 3.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraticuleConfig {
    pub table: TableChoice,
    /// Target number of divisions across the visible span.
    pub density: f64,
    /// Tessellation step along each line (degrees).
    pub granularity_deg: f64,
    pub bounds: BoundsRounding,
}

impl Default for GraticuleConfig {
    fn default() -> Self {
        Self {
            table: TableChoice::Standard,
            density: DEFAULT_DENSITY,
            granularity_deg: DEFAULT_GRANULARITY_DEG,
            bounds: BoundsRounding::Matched,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(GraticuleError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "I/O error: {err}"),
            ConfigError::Parse(err) => write!(f, "Config parse error: {err}"),
            ConfigError::Invalid(err) => write!(f, "Invalid config: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<GraticuleError> for ConfigError {
    fn from(err: GraticuleError) -> Self {
        ConfigError::Invalid(err)
    }
}

impl GraticuleConfig {
    pub fn spacing_table(&self) -> Result<SpacingTable, GraticuleError> {
        match &self.table {
            TableChoice::Standard => Ok(SpacingTable::STANDARD),
            TableChoice::Extended => Ok(SpacingTable::EXTENDED),
            TableChoice::Custom(steps) => SpacingTable::from_degrees(steps.clone()),
        }
    }

    pub fn validate(&self) -> Result<(), GraticuleError> {
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(GraticuleError::InvalidDensity(self.density));
        }
        if !self.granularity_deg.is_finite() || self.granularity_deg <= 0.0 {
            return Err(GraticuleError::InvalidGranularity(self.granularity_deg));
        }
        self.spacing_table().map(|_| ())
    }

    pub fn from_json_str(payload: &str) -> Result<Self, ConfigError> {
        let config: GraticuleConfig = serde_json::from_str(payload).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let payload = fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_json_str(&payload)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, GraticuleConfig, TableChoice};
    use crate::bounds::BoundsRounding;
    use crate::error::GraticuleError;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn default_config_is_valid() {
        let config = GraticuleConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.density, 7.0);
    }

    #[test]
    fn partial_document_keeps_defaults() {
        let config =
            GraticuleConfig::from_json_str(r#"{ "table": "extended", "granularity_deg": 3.0 }"#)
                .expect("parse");
        assert_eq!(
            config,
            GraticuleConfig {
                table: TableChoice::Extended,
                granularity_deg: 3.0,
                ..GraticuleConfig::default()
            }
        );
    }

    #[test]
    fn custom_table_and_legacy_bounds() {
        let config = GraticuleConfig::from_json_str(
            r#"{ "table": { "custom": [1.0, 15.0, 30.0] }, "bounds": "legacy" }"#,
        )
        .expect("parse");
        assert_eq!(config.table, TableChoice::Custom(vec![1.0, 15.0, 30.0]));
        assert_eq!(config.bounds, BoundsRounding::Legacy);
        assert_eq!(config.spacing_table().expect("table").steps_deg(), &[1.0, 15.0, 30.0]);
    }

    #[test]
    fn rejects_invalid_values() {
        let err = GraticuleConfig::from_json_str(r#"{ "density": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(GraticuleError::InvalidDensity(_))));

        let err = GraticuleConfig::from_json_str(r#"{ "granularity_deg": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(GraticuleError::InvalidGranularity(_))));

        let err = GraticuleConfig::from_json_str(r#"{ "table": { "custom": [5.0, 2.0] } }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(GraticuleError::SpacingNotAscending { index: 1 })
        ));

        let err = GraticuleConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut path = std::env::temp_dir();
        path.push(format!("graticule_config_{}.json", std::process::id()));
        fs::write(&path, r#"{ "density": 5.0 }"#).expect("write config");
        let config = GraticuleConfig::from_json_file(&path).expect("load");
        let _ = fs::remove_file(&path);
        assert_eq!(config.density, 5.0);

        let missing = GraticuleConfig::from_json_file(path.with_extension("missing"));
        assert!(matches!(missing, Err(ConfigError::Io(_))));
    }
}
