//! Ray representation.

use ntrack_math::{Dir3, Point3, Vec3};

/// A ray in 3D space defined by origin and direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Unit direction of the ray.
    pub direction: Dir3,
    /// Precomputed reciprocal of direction components for slab tests.
    pub(crate) inv_direction: Vec3,
}

impl Ray {
    /// Create a new ray from origin and direction.
    ///
    /// The direction will be normalized.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        let dir = Dir3::new_normalize(direction);
        let inv = Vec3::new(1.0 / dir.x, 1.0 / dir.y, 1.0 / dir.z);
        Self {
            origin,
            direction: dir,
            inv_direction: inv,
        }
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction.as_ref()
    }
}
