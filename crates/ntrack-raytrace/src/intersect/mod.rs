//! Ray-solid intersection.
//!
//! Each primitive reports where a ray crosses its boundary and in which
//! direction. Only crossings at or ahead of the ray origin are reported.

mod cuboid;
mod sphere;

pub use cuboid::Cuboid;
pub use sphere::Sphere;

use ntrack_math::Point3;
use ntrack_track::{Direction, SolidId};

use crate::Ray;

/// A boundary crossing found by a solid's intersector.
#[derive(Debug, Clone, Copy)]
pub struct Intercept {
    /// Parameter along the ray (distance, as the direction is unit length).
    pub distance: f64,
    /// 3D crossing point.
    pub point: Point3,
    /// Entering or leaving the solid.
    pub direction: Direction,
}

impl Intercept {
    /// Build an intercept at parameter `t` along `ray`.
    pub fn on_ray(ray: &Ray, t: f64, direction: Direction) -> Self {
        Self {
            distance: t,
            point: ray.at(t),
            direction,
        }
    }
}

/// A bounded solid a ray can be traced against.
///
/// Implementations must be read-only so rays can be traced in parallel.
pub trait Solid: Send + Sync {
    /// Identifier tagged on the segments inside this solid.
    fn id(&self) -> SolidId;

    /// All forward crossings of `ray` with the boundary, sorted by distance.
    ///
    /// A ray starting inside the solid reports only its leaving crossing.
    fn intersect(&self, ray: &Ray) -> Vec<Intercept>;

    /// Whether `point` lies strictly inside the solid.
    fn contains(&self, point: &Point3) -> bool;
}

/// Turn the two roots of an entry/exit pair into forward intercepts.
///
/// A ray starting on the boundary and heading out (`t_leave == 0`) is not
/// inside the solid and reports nothing.
fn forward_pair(ray: &Ray, t_enter: f64, t_leave: f64) -> Vec<Intercept> {
    if t_leave <= 0.0 {
        Vec::new()
    } else if t_enter < 0.0 {
        vec![Intercept::on_ray(ray, t_leave, Direction::Leaving)]
    } else {
        vec![
            Intercept::on_ray(ray, t_enter, Direction::Entering),
            Intercept::on_ray(ray, t_leave, Direction::Leaving),
        ]
    }
}
