use std::f64::consts::{FRAC_PI_2, PI};

use foundation::math::Geodetic;
use serde::{Deserialize, Serialize};

/// Geographic rectangle currently visible in the viewport (radians).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct AngularExtent {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl AngularExtent {
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    pub fn from_degrees(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self::new(
            west.to_radians(),
            south.to_radians(),
            east.to_radians(),
            north.to_radians(),
        )
    }

    /// The whole globe; used when the viewport does not resolve to a rectangle.
    pub fn full_sphere() -> Self {
        Self::new(-PI, -FRAC_PI_2, PI, FRAC_PI_2)
    }

    /// Envelope of a set of points. `None` if the iterator is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Geodetic>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut out = Self::new(first.lon_rad, first.lat_rad, first.lon_rad, first.lat_rad);
        for p in iter {
            out.west = out.west.min(p.lon_rad);
            out.east = out.east.max(p.lon_rad);
            out.south = out.south.min(p.lat_rad);
            out.north = out.north.max(p.lat_rad);
        }
        Some(out)
    }

    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    /// Zero/negative area or non-finite edges.
    pub fn is_degenerate(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
            || ![self.west, self.south, self.east, self.north]
                .iter()
                .all(|v| v.is_finite())
    }

    pub fn contains(&self, other: &AngularExtent) -> bool {
        self.west <= other.west
            && self.east >= other.east
            && self.south <= other.south
            && self.north >= other.north
    }
}

#[cfg(test)]
mod tests {
    use super::AngularExtent;
    use foundation::math::Geodetic;

    #[test]
    fn full_sphere_dimensions() {
        let e = AngularExtent::full_sphere();
        assert_eq!(e.width(), 2.0 * std::f64::consts::PI);
        assert_eq!(e.height(), std::f64::consts::PI);
        assert!(!e.is_degenerate());
    }

    #[test]
    fn degenerate_detection() {
        assert!(AngularExtent::new(0.1, 0.2, 0.1, 0.5).is_degenerate());
        assert!(AngularExtent::new(0.1, 0.2, 0.3, 0.2).is_degenerate());
        assert!(AngularExtent::new(0.3, 0.0, 0.1, 0.2).is_degenerate());
        assert!(AngularExtent::new(f64::NAN, 0.0, 0.1, 0.2).is_degenerate());
        assert!(!AngularExtent::from_degrees(-1.0, -1.0, 1.0, 1.0).is_degenerate());
    }

    #[test]
    fn envelope_of_points() {
        let pts = [
            Geodetic::new(0.1, -0.2, 0.0),
            Geodetic::new(-0.3, 0.4, 0.0),
            Geodetic::new(0.2, 0.0, 10.0),
        ];
        let e = AngularExtent::from_points(pts).expect("non-empty");
        assert_eq!(e, AngularExtent::new(-0.2, -0.3, 0.4, 0.2));
        assert!(AngularExtent::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn containment() {
        let outer = AngularExtent::from_degrees(-20.0, -20.0, 20.0, 20.0);
        let inner = AngularExtent::from_degrees(-10.0, -10.0, 10.0, 10.0);
        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
    }
}
