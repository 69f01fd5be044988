//! Point structure for representing coordinates

/// A position expressed in some coordinate system's native units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate (easting, or longitude in geodetic systems)
    pub x: f64,
    /// Y coordinate (northing, or latitude in geodetic systems)
    pub y: f64,
    /// Z coordinate (elevation, optional)
    pub z: Option<f64>,
}

impl Point {
    /// Create a new 2D point
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y, z: None }
    }

    /// Create a new 3D point
    pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Point { x, y, z: Some(z) }
    }

    /// Check if this point has a Z coordinate
    pub fn has_z(&self) -> bool {
        self.z.is_some()
    }

    /// Get the Z coordinate, or 0.0 if not present
    pub fn z_value(&self) -> f64 {
        self.z.unwrap_or(0.0)
    }

    /// Check that both planar components are finite numbers
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Copy of this point with the elevation component removed
    pub fn without_z(&self) -> Point {
        Point::new(self.x, self.y)
    }
}
