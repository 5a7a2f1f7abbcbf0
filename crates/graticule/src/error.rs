use std::fmt;

/// Invalid graticule configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum GraticuleError {
    EmptySpacingTable,
    NonPositiveSpacing { index: usize, value: f64 },
    SpacingNotAscending { index: usize },
    InvalidDensity(f64),
    InvalidGranularity(f64),
}

impl fmt::Display for GraticuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraticuleError::EmptySpacingTable => write!(f, "spacing table is empty"),
            GraticuleError::NonPositiveSpacing { index, value } => {
                write!(f, "spacing table entry {index} must be positive (got {value})")
            }
            GraticuleError::SpacingNotAscending { index } => {
                write!(f, "spacing table entry {index} is not greater than the previous entry")
            }
            GraticuleError::InvalidDensity(v) => {
                write!(f, "density must be a positive finite number (got {v})")
            }
            GraticuleError::InvalidGranularity(v) => {
                write!(f, "granularity must be a positive finite angle (got {v})")
            }
        }
    }
}

impl std::error::Error for GraticuleError {}
