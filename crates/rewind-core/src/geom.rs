//! Geometry primitives recorded alongside events.

use std::fmt;

/// A position in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec3 {
    /// East/west axis.
    pub x: f64,
    /// Vertical axis.
    pub y: f64,
    /// North/south axis.
    pub z: f64,
}

impl Vec3 {
    /// Construct a position from its components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The origin.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A view direction: yaw around the vertical axis, pitch above/below
/// the horizon. Degrees, matching the host convention.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    /// Horizontal angle in degrees.
    pub yaw: f64,
    /// Vertical angle in degrees.
    pub pitch: f64,
}

impl Rotation {
    /// Construct a rotation from yaw and pitch.
    pub fn new(yaw: f64, pitch: f64) -> Self {
        Self { yaw, pitch }
    }

    /// Facing straight ahead along +z.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(yaw {}, pitch {})", self.yaw, self.pitch)
    }
}
