use foundation::math::{Ecef, Geodetic, Vec3, WGS84_RADII, ecef_to_geodetic};

use crate::extent::AngularExtent;

/// World-space ray (ECEF meters).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self { origin, dir }
    }
}

/// Nearest forward intersection of `ray` with the WGS84 surface.
///
/// Returns `None` when the ray misses, points away from the globe, or has a
/// zero direction. A ray starting inside the ellipsoid reports its exit point.
pub fn pick_ellipsoid(ray: Ray) -> Option<Geodetic> {
    let dir = ray.dir.normalize()?;
    if !ray.origin.is_finite() {
        return None;
    }

    // Scale space so the ellipsoid becomes the unit sphere.
    let inv_radii = Vec3::new(1.0 / WGS84_RADII.x, 1.0 / WGS84_RADII.y, 1.0 / WGS84_RADII.z);
    let o = ray.origin.mul_elem(inv_radii);
    let d = dir.mul_elem(inv_radii);

    let a = d.dot(d);
    let b = 2.0 * o.dot(d);
    let c = o.dot(o) - 1.0;
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return None;
    }

    let sqrt_disc = disc.sqrt();
    let near = (-b - sqrt_disc) / (2.0 * a);
    let far = (-b + sqrt_disc) / (2.0 * a);
    let t = if near >= 0.0 {
        near
    } else if far >= 0.0 {
        far
    } else {
        return None;
    };

    let hit = ray.origin + dir * t;
    let geo = ecef_to_geodetic(Ecef::from(hit));
    Some(Geodetic::new(geo.lat_rad, geo.lon_rad, 0.0))
}

/// Lon/lat envelope of the four viewport corners.
///
/// Any corner that misses the globe means the view cannot be described by a
/// rectangle, so the whole sphere is returned instead.
pub fn extent_from_corners(corners: [Option<Geodetic>; 4]) -> AngularExtent {
    if corners.iter().any(Option::is_none) {
        return AngularExtent::full_sphere();
    }
    AngularExtent::from_points(corners.into_iter().flatten())
        .unwrap_or_else(AngularExtent::full_sphere)
}

/// Visible extent from the rays through the four viewport corners.
pub fn visible_extent(corner_rays: [Ray; 4]) -> AngularExtent {
    extent_from_corners(corner_rays.map(pick_ellipsoid))
}

/// Surface point under the viewport centre, `(0, 0)` if the ray misses.
pub fn screen_center(center_ray: Ray) -> Geodetic {
    pick_ellipsoid(center_ray).unwrap_or(Geodetic::new(0.0, 0.0, 0.0))
}
