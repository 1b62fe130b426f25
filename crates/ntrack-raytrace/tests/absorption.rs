//! End-to-end tracing through a sample in a container.

use approx::assert_relative_eq;
use ntrack_math::{Point3, Tolerance, Vec3};
use ntrack_raytrace::{trace, trace_batch, Cuboid, Ray, Solid, Sphere, TraceSettings};
use ntrack_track::SolidId;

const CAN: SolidId = SolidId(1);
const SAMPLE: SolidId = SolidId(2);

/// A 2x2x2 sample sitting in a 4x4x4 can, touching its -x wall.
fn can_and_sample() -> Vec<Box<dyn Solid>> {
    vec![
        Box::new(Cuboid::new(
            SAMPLE,
            Point3::new(-2.0, -1.0, -1.0),
            Point3::new(0.0, 1.0, 1.0),
        )),
        // The can is modelled as the slab beyond the sample.
        Box::new(Cuboid::new(
            CAN,
            Point3::new(0.0, -2.0, -2.0),
            Point3::new(2.0, 2.0, 2.0),
        )),
    ]
}

#[test]
fn scatter_point_inside_sample() {
    let solids = can_and_sample();
    let ray = Ray::new(Point3::new(-1.0, 0.0, 0.0), Vec3::x());
    let track = trace(&ray, &solids, Tolerance::DEFAULT);

    assert_eq!(track.initial_solid(), Some(SAMPLE));
    assert_eq!(track.count(), 2);
    assert_eq!(track.non_complete(), 0);
    assert_relative_eq!(track.distance_in(SAMPLE), 1.0, epsilon = 1e-10);
    assert_relative_eq!(track.distance_in(CAN), 2.0, epsilon = 1e-10);
    assert_relative_eq!(track.total_distance_inside(), 3.0, epsilon = 1e-10);

    let transmission = track.attenuation(|id| if id == SAMPLE { 0.7 } else { 0.1 });
    assert_relative_eq!(transmission, (-(0.7 + 0.2f64)).exp(), epsilon = 1e-10);
}

#[test]
fn segments_are_ordered_along_ray() {
    let solids = can_and_sample();
    let ray = Ray::new(Point3::new(-1.5, 0.2, -0.3), Vec3::new(1.0, 0.1, 0.05));
    let track = trace(&ray, &solids, Tolerance::DEFAULT);

    assert!(!track.is_empty());
    assert!(track
        .segments()
        .windows(2)
        .all(|w| w[0].distance < w[1].distance));
}

#[test]
fn batch_of_rays_from_sample_is_complete() {
    let solids = can_and_sample();
    let rays: Vec<Ray> = (0..64)
        .map(|i| {
            let y = -0.9 + 1.8 * (i as f64) / 63.0;
            Ray::new(Point3::new(-1.0, y, 0.0), Vec3::x())
        })
        .collect();
    let batch = trace_batch(&rays, &solids, &TraceSettings::default());

    assert_eq!(batch.tracks.len(), rays.len());
    assert!(batch.rejected.is_empty());
    for (_, track) in &batch.tracks {
        assert_relative_eq!(track.distance_in(SAMPLE), 1.0, epsilon = 1e-10);
    }
}

#[test]
fn sphere_in_front_of_sample_leaves_a_gap() {
    let mut solids = can_and_sample();
    solids.push(Box::new(Sphere::new(
        SolidId(3),
        Point3::new(5.0, 0.0, 0.0),
        1.0,
    )));
    let ray = Ray::new(Point3::new(-1.0, 0.0, 0.0), Vec3::x());
    let track = trace(&ray, &solids, Tolerance::DEFAULT);

    assert_eq!(track.count(), 3);
    assert_eq!(track.non_complete(), 3);
    assert!(track.check_complete().is_err());
    assert_relative_eq!(track.distance_in(SolidId(3)), 2.0, epsilon = 1e-10);
}
