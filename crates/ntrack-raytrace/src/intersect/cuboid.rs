//! Ray-box intersection (slab method).

use ntrack_math::Point3;
use ntrack_track::SolidId;

use super::{forward_pair, Intercept, Solid};
use crate::Ray;

/// An axis-aligned solid box.
#[derive(Debug, Clone, Copy)]
pub struct Cuboid {
    /// Solid identifier.
    pub id: SolidId,
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
}

impl Cuboid {
    /// Create a box from two opposite corners, in any order.
    pub fn new(id: SolidId, a: Point3, b: Point3) -> Self {
        Self {
            id,
            min: Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Entry and exit parameters of the infinite line through `ray`.
    fn slab(&self, ray: &Ray) -> Option<(f64, f64)> {
        let mut t_near = f64::NEG_INFINITY;
        let mut t_far = f64::INFINITY;

        for axis in 0..3 {
            let inv = ray.inv_direction[axis];
            let o = ray.origin[axis];
            if inv.is_infinite() {
                // Parallel to this slab.
                if o < self.min[axis] || o > self.max[axis] {
                    return None;
                }
                continue;
            }
            let t1 = (self.min[axis] - o) * inv;
            let t2 = (self.max[axis] - o) * inv;
            t_near = t_near.max(t1.min(t2));
            t_far = t_far.min(t1.max(t2));
        }

        (t_far >= t_near).then_some((t_near, t_far))
    }
}

impl Solid for Cuboid {
    fn id(&self) -> SolidId {
        self.id
    }

    fn intersect(&self, ray: &Ray) -> Vec<Intercept> {
        match self.slab(ray) {
            Some((t_near, t_far)) => forward_pair(ray, t_near, t_far),
            None => Vec::new(),
        }
    }

    fn contains(&self, point: &Point3) -> bool {
        (0..3).all(|axis| point[axis] > self.min[axis] && point[axis] < self.max[axis])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntrack_math::Vec3;
    use ntrack_track::Direction;

    fn unit_box() -> Cuboid {
        Cuboid::new(
            SolidId(2),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(0.0, 0.0, 0.0),
        )
    }

    #[test]
    fn test_corners_are_ordered() {
        let b = unit_box();
        assert_eq!(b.min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(b.max, Point3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_ray_box_hit() {
        let ray = Ray::new(Point3::new(-5.0, 0.5, 0.5), Vec3::new(1.0, 0.0, 0.0));
        let hits = unit_box().intersect(&ray);
        assert_eq!(hits.len(), 2);
        assert!((hits[0].distance - 5.0).abs() < 1e-10);
        assert_eq!(hits[0].direction, Direction::Entering);
        assert!((hits[1].distance - 6.0).abs() < 1e-10);
        assert_eq!(hits[1].direction, Direction::Leaving);
    }

    #[test]
    fn test_ray_box_miss() {
        let ray = Ray::new(Point3::new(-5.0, 5.0, 5.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(unit_box().intersect(&ray).is_empty());
    }

    #[test]
    fn test_ray_inside_box() {
        let ray = Ray::new(Point3::new(0.5, 0.5, 0.5), Vec3::new(1.0, 0.0, 0.0));
        let hits = unit_box().intersect(&ray);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].direction, Direction::Leaving);
        assert!((hits[0].distance - 0.5).abs() < 1e-10);
        assert!(unit_box().contains(&ray.origin));
    }

    #[test]
    fn test_ray_leaving_from_face() {
        let ray = Ray::new(Point3::new(1.0, 0.5, 0.5), Vec3::new(1.0, 0.0, 0.0));
        assert!(unit_box().intersect(&ray).is_empty());
        assert!(!unit_box().contains(&ray.origin));
    }

    #[test]
    fn test_ray_entering_from_face() {
        let ray = Ray::new(Point3::new(0.0, 0.5, 0.5), Vec3::new(1.0, 0.0, 0.0));
        let hits = unit_box().intersect(&ray);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].direction, Direction::Entering);
        assert!(hits[0].distance.abs() < 1e-12);
        assert!((hits[1].distance - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_ray_box_diagonal() {
        let ray = Ray::new(Point3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));
        let hits = unit_box().intersect(&ray);
        assert_eq!(hits.len(), 2);
        assert!((hits[0].point - Point3::origin()).norm() < 1e-10);
        assert!((hits[1].point - Point3::new(1.0, 1.0, 1.0)).norm() < 1e-10);
    }

    #[test]
    fn test_ray_box_behind() {
        let ray = Ray::new(Point3::new(-5.0, 0.5, 0.5), Vec3::new(-1.0, 0.0, 0.0));
        assert!(unit_box().intersect(&ray).is_empty());
        assert!(!unit_box().contains(&ray.origin));
    }
}
