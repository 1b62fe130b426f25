//! Traversal segments: the ordered pieces of a built track.

use std::fmt;

use ntrack_math::Point3;

/// Identifier of a solid a track passes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SolidId(pub u32);

impl fmt::Display for SolidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "solid#{}", self.0)
    }
}

/// A chunk of the track lying inside one solid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Solid this segment lies inside.
    pub solid: SolidId,
    /// Point where the track enters the segment.
    pub entry: Point3,
    /// Point where the track leaves the segment.
    pub exit: Point3,
    /// Distance along the track used as the ordering key.
    ///
    /// Segments built from crossings carry the distance of their exit point.
    pub distance: f64,
    /// Length from `entry` to `exit`.
    pub length: f64,
}

impl Segment {
    /// Create a segment; its length is derived from the end points.
    pub fn new(solid: SolidId, entry: Point3, exit: Point3, distance: f64) -> Self {
        Self {
            solid,
            entry,
            exit,
            distance,
            length: (exit - entry).norm(),
        }
    }

    /// Extend this segment to cover `later`, which must follow it.
    pub(crate) fn absorb(&mut self, later: &Segment) {
        self.exit = later.exit;
        self.distance = later.distance;
        self.length = (self.exit - self.entry).norm();
    }
}
