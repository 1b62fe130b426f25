#![warn(missing_docs)]

//! Ray tracing driver for ntrack.
//!
//! Traces rays against a set of solids, feeds every boundary crossing into
//! a [`Track`](ntrack_track::Track) and rebuilds the ordered segments the
//! ray passes through.
//!
//! # Architecture
//!
//! - [`Ray`] - Ray representation with origin and direction
//! - [`Solid`] - The intersection seam a geometry library implements
//! - [`intersect`] - Convex primitives ([`Sphere`], [`Cuboid`])
//! - [`trace`](trace()) / [`trace_batch`] - Single and parallel tracing
//!
//! # Example
//!
//! ```
//! use ntrack_math::{Point3, Tolerance, Vec3};
//! use ntrack_raytrace::{trace, Cuboid, Ray, Solid, Sphere};
//! use ntrack_track::SolidId;
//!
//! let solids: Vec<Box<dyn Solid>> = vec![
//!     Box::new(Sphere::new(SolidId(1), Point3::origin(), 1.0)),
//!     Box::new(Cuboid::new(
//!         SolidId(2),
//!         Point3::new(3.0, -1.0, -1.0),
//!         Point3::new(4.0, 1.0, 1.0),
//!     )),
//! ];
//! let ray = Ray::new(Point3::new(-5.0, 0.0, 0.0), Vec3::x());
//! let track = trace(&ray, &solids, Tolerance::DEFAULT);
//!
//! assert_eq!(track.count(), 2);
//! ```

mod error;
pub mod intersect;
mod ray;
mod trace;

pub use error::{Result, TraceError};
pub use intersect::{Cuboid, Intercept, Solid, Sphere};
pub use ray::Ray;
pub use trace::{trace, trace_batch, TraceBatch, TraceSettings};
