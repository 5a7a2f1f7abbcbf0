//! Adaptive latitude/longitude grid for a globe view.
//!
//! `build` turns the visible geographic rectangle into meridians and
//! parallels whose spacing keeps roughly the same number of lines on screen
//! at any zoom level, each with a DMS label and a highlight colour.

pub mod bounds;
pub mod builder;
pub mod color;
pub mod config;
pub mod error;
pub mod extent;
pub mod label;
pub mod lines;
pub mod placement;
pub mod spacing;
pub mod viewport;

pub use bounds::{BoundsRounding, GridBounds};
pub use builder::*;
pub use color::LineColor;
pub use config::*;
pub use error::GraticuleError;
pub use extent::AngularExtent;
pub use lines::{GridAxis, GridLine};
pub use spacing::{GridSpacing, SpacingTable};
