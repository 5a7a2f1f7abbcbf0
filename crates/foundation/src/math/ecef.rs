use super::Vec3;

/// Earth-centered, Earth-fixed Cartesian coordinates (meters).
#[derive(Debug, Copy, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Ecef {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Ecef {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl From<Vec3> for Ecef {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}
