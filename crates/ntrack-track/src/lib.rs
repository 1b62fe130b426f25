#![warn(missing_docs)]

//! Track reconstruction for rays passing through bounded solids.
//!
//! A caller traces a ray against each solid of interest and records every
//! boundary crossing, in any order. [`Track::build_link`] sorts those
//! crossings and rebuilds the ordered list of segments the ray traverses,
//! handling solids that touch and solids separated by void.
//!
//! # Architecture
//!
//! - [`Crossing`] - Raw enter/leave observation with its distance
//! - [`Segment`] - A piece of the track inside one solid
//! - [`Track`] - The builder holding both, plus validation
//!
//! # Example
//!
//! ```
//! use ntrack_math::{Point3, Vec3};
//! use ntrack_track::{Direction, SolidId, Track};
//!
//! let mut track = Track::new(Point3::origin(), Vec3::x(), None);
//! track.add_point(SolidId(5), Direction::Leaving, Point3::new(4.0, 0.0, 0.0));
//! track.add_point(SolidId(5), Direction::Entering, Point3::new(2.0, 0.0, 0.0));
//! track.build_link();
//!
//! assert_eq!(track.count(), 1);
//! assert!((track.distance_in(SolidId(5)) - 2.0).abs() < 1e-12);
//! ```

mod crossing;
pub mod error;
mod segment;
mod track;

pub use crossing::{sort_crossings, Crossing, Direction};
pub use error::{Result, TrackError};
pub use segment::{Segment, SolidId};
pub use track::Track;
