//! Raw surface crossings recorded against a track.

use ntrack_math::{Point3, Tolerance};

use crate::SolidId;

/// Which way the ray passes through a solid boundary.
///
/// Ordered by sign: `Leaving` (-1) sorts before `Entering` (+1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// The ray leaves the solid.
    Leaving,
    /// The ray enters the solid.
    Entering,
}

impl Direction {
    /// Signed value of the direction: `-1` leaving, `+1` entering.
    pub fn sign(self) -> i32 {
        match self {
            Direction::Leaving => -1,
            Direction::Entering => 1,
        }
    }
}

/// An unordered observation of the ray touching a solid boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    /// Solid whose boundary is crossed.
    pub solid: SolidId,
    /// Entering or leaving the solid.
    pub direction: Direction,
    /// Crossing point.
    pub point: Point3,
    /// Distance from the track origin to `point`.
    pub distance: f64,
}

impl Crossing {
    /// Create a crossing.
    pub fn new(solid: SolidId, direction: Direction, point: Point3, distance: f64) -> Self {
        Self {
            solid,
            direction,
            point,
            distance,
        }
    }

    /// Ordering predicate used to sort crossings along the track.
    ///
    /// Distances farther apart than the surface tolerance decide the order.
    /// Closer than that the crossings are treated as the same place and the
    /// direction decides, so a ray leaves one touching solid before it
    /// enters the next.
    ///
    /// This is not transitive near the tolerance band: `a ~ b` and `b ~ c`
    /// does not imply `a ~ c`. Use [`sort_crossings`] rather than the
    /// standard library sorts, which may panic on an inconsistent order.
    pub fn precedes(&self, other: &Crossing, tol: &Tolerance) -> bool {
        if tol.distances_touch(self.distance, other.distance) {
            self.direction < other.direction
        } else {
            self.distance < other.distance
        }
    }
}

/// Stable insertion sort of crossings by [`Crossing::precedes`].
///
/// Tracks carry tens of crossings, and insertion sort gives a deterministic
/// result for the non-transitive comparator.
pub fn sort_crossings(crossings: &mut [Crossing], tol: &Tolerance) {
    for i in 1..crossings.len() {
        let mut j = i;
        while j > 0 && crossings[j].precedes(&crossings[j - 1], tol) {
            crossings.swap(j, j - 1);
            j -= 1;
        }
    }
}
