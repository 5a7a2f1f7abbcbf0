use serde::{Deserialize, Serialize};

use super::{Ecef, Vec3};

/// WGS84 semi-major axis (meters).
pub const WGS84_A: f64 = 6_378_137.0;
/// WGS84 flattening.
pub const WGS84_F: f64 = 1.0 / 298.257_223_563;
/// WGS84 semi-minor axis (meters).
pub const WGS84_B: f64 = WGS84_A * (1.0 - WGS84_F);
/// WGS84 first eccentricity squared.
pub const WGS84_E2: f64 = WGS84_F * (2.0 - WGS84_F);
/// WGS84 second eccentricity squared.
pub const WGS84_EP2: f64 = (WGS84_A * WGS84_A - WGS84_B * WGS84_B) / (WGS84_B * WGS84_B);

/// WGS84 ellipsoid radii along x, y, z.
pub const WGS84_RADII: Vec3 = Vec3::new(WGS84_A, WGS84_A, WGS84_B);

/// Geodetic coordinates in radians and meters.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geodetic {
    pub lat_rad: f64,
    pub lon_rad: f64,
    pub alt_m: f64,
}

impl Geodetic {
    pub fn new(lat_rad: f64, lon_rad: f64, alt_m: f64) -> Self {
        Self {
            lat_rad,
            lon_rad,
            alt_m,
        }
    }
}

/// A surface position, longitude first (radians).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl LonLat {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    pub fn from_degrees(lon_deg: f64, lat_deg: f64) -> Self {
        Self::new(lon_deg.to_radians(), lat_deg.to_radians())
    }

    pub fn to_degrees(self) -> (f64, f64) {
        (self.lon.to_degrees(), self.lat.to_degrees())
    }

    /// Point on the ellipsoid surface.
    pub fn on_surface(self) -> Geodetic {
        Geodetic::new(self.lat, self.lon, 0.0)
    }
}

pub fn geodetic_to_ecef(geo: Geodetic) -> Ecef {
    let sin_lat = geo.lat_rad.sin();
    let cos_lat = geo.lat_rad.cos();
    let sin_lon = geo.lon_rad.sin();
    let cos_lon = geo.lon_rad.cos();

    let n = WGS84_A / (1.0 - WGS84_E2 * sin_lat * sin_lat).sqrt();
    let x = (n + geo.alt_m) * cos_lat * cos_lon;
    let y = (n + geo.alt_m) * cos_lat * sin_lon;
    let z = (n * (1.0 - WGS84_E2) + geo.alt_m) * sin_lat;

    Ecef::new(x, y, z)
}

/// Bowring's closed-form inverse; sub-millimetre near the surface.
pub fn ecef_to_geodetic(ecef: Ecef) -> Geodetic {
    let p = (ecef.x * ecef.x + ecef.y * ecef.y).sqrt();
    let lon = ecef.y.atan2(ecef.x);

    let theta = (ecef.z * WGS84_A).atan2(p * WGS84_B);
    let sin_theta = theta.sin();
    let cos_theta = theta.cos();

    let lat = (ecef.z + WGS84_EP2 * WGS84_B * sin_theta * sin_theta * sin_theta)
        .atan2(p - WGS84_E2 * WGS84_A * cos_theta * cos_theta * cos_theta);

    let sin_lat = lat.sin();
    let n = WGS84_A / (1.0 - WGS84_E2 * sin_lat * sin_lat).sqrt();
    // Polar points: p / cos(lat) degenerates, measure along z instead.
    let alt = if lat.cos().abs() < 1e-10 {
        ecef.z.abs() - WGS84_B
    } else {
        p / lat.cos() - n
    };

    Geodetic::new(lat, lon, alt)
}
