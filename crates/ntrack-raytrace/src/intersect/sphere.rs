//! Ray-sphere intersection (quadratic equation).

use ntrack_math::Point3;
use ntrack_track::SolidId;

use super::{forward_pair, Intercept, Solid};
use crate::Ray;

/// A solid ball.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    /// Solid identifier.
    pub id: SolidId,
    /// Center point.
    pub center: Point3,
    /// Radius.
    pub radius: f64,
}

impl Sphere {
    /// Create a sphere.
    pub fn new(id: SolidId, center: Point3, radius: f64) -> Self {
        Self { id, center, radius }
    }
}

impl Solid for Sphere {
    fn id(&self) -> SolidId {
        self.id
    }

    fn intersect(&self, ray: &Ray) -> Vec<Intercept> {
        let oc = ray.origin - self.center;
        let d = ray.direction.as_ref();

        // Quadratic: |oc + t*d|^2 = r^2 with |d| = 1
        let b = 2.0 * oc.dot(d);
        let c = oc.dot(&oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * c;
        if discriminant < 0.0 {
            return Vec::new();
        }

        let sqrt_disc = discriminant.sqrt();
        let t1 = (-b - sqrt_disc) / 2.0;
        let t2 = (-b + sqrt_disc) / 2.0;
        forward_pair(ray, t1, t2)
    }

    fn contains(&self, point: &Point3) -> bool {
        (point - self.center).norm() < self.radius
    }
}
