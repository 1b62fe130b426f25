//! Track builder: turns unordered crossings into ordered segments.

use log::debug;
use ntrack_math::{Dir3, Point3, Tolerance, Vec3};

use crate::crossing::{sort_crossings, Crossing, Direction};
use crate::error::{Result, TrackError};
use crate::segment::{Segment, SolidId};

/// A ray through a set of solids and the segments it traverses.
///
/// Crossings are collected with [`Track::add_point`] in any order and
/// reconciled by [`Track::build_link`]. Segments are only meaningful after
/// a build.
#[derive(Debug, Clone)]
pub struct Track {
    origin: Point3,
    direction: Dir3,
    initial_solid: Option<SolidId>,
    tolerance: Tolerance,
    segments: Vec<Segment>,
    crossings: Vec<Crossing>,
}

impl Track {
    /// Create a track with the default tolerances.
    ///
    /// The direction will be normalized. `initial_solid` is the solid the
    /// origin lies in, `None` for void.
    pub fn new(origin: Point3, direction: Vec3, initial_solid: Option<SolidId>) -> Self {
        Self::with_tolerance(origin, direction, initial_solid, Tolerance::DEFAULT)
    }

    /// Create a track with explicit tolerances.
    pub fn with_tolerance(
        origin: Point3,
        direction: Vec3,
        initial_solid: Option<SolidId>,
        tolerance: Tolerance,
    ) -> Self {
        Self {
            origin,
            direction: Dir3::new_normalize(direction),
            initial_solid,
            tolerance,
            segments: Vec::new(),
            crossings: Vec::new(),
        }
    }

    /// Move the track to a new origin and direction.
    ///
    /// Existing segments and crossings are kept.
    pub fn set_first(&mut self, origin: Point3, direction: Vec3) {
        self.origin = origin;
        self.direction = Dir3::new_normalize(direction);
    }

    /// Move the track and drop all segments and crossings.
    pub fn reset(&mut self, origin: Point3, direction: Vec3) {
        self.set_first(origin, direction);
        self.clear_intersection_results();
    }

    /// Drop all segments and crossings, keeping the ray.
    pub fn clear_intersection_results(&mut self) {
        self.segments.clear();
        self.crossings.clear();
    }

    /// Origin of the track.
    pub fn start_point(&self) -> Point3 {
        self.origin
    }

    /// Unit direction of the track.
    pub fn direction(&self) -> Dir3 {
        self.direction
    }

    /// Solid containing the origin, if any.
    pub fn initial_solid(&self) -> Option<SolidId> {
        self.initial_solid
    }

    /// Tolerances used by this track.
    pub fn tolerance(&self) -> &Tolerance {
        &self.tolerance
    }

    /// Built segments, ordered by distance.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Iterate over the built segments.
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Number of built segments.
    pub fn count(&self) -> usize {
        self.segments.len()
    }

    /// True if no segments have been built.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// First segment along the track.
    pub fn front(&self) -> Option<&Segment> {
        self.segments.first()
    }

    /// Last segment along the track.
    pub fn back(&self) -> Option<&Segment> {
        self.segments.last()
    }

    /// Crossings waiting for the next [`Track::build_link`].
    pub fn crossings(&self) -> &[Crossing] {
        &self.crossings
    }

    /// Number of crossings waiting for the next build.
    pub fn crossing_count(&self) -> usize {
        self.crossings.len()
    }

    /// Record a crossing of a solid boundary at `point`.
    pub fn add_point(&mut self, solid: SolidId, direction: Direction, point: Point3) {
        let distance = (point - self.origin).norm();
        self.crossings
            .push(Crossing::new(solid, direction, point, distance));
    }

    /// Insert a complete segment, keeping the list ordered by `distance`.
    ///
    /// Returns the index the segment was inserted at. Equal keys insert
    /// before the existing ones. Adjacency is not checked here; see
    /// [`Track::non_complete`].
    pub fn add_segment(
        &mut self,
        solid: SolidId,
        entry: Point3,
        exit: Point3,
        distance: f64,
    ) -> usize {
        let index = self.segments.partition_point(|s| s.distance < distance);
        self.segments
            .insert(index, Segment::new(solid, entry, exit, distance));
        index
    }

    /// Reconcile the recorded crossings into segments.
    ///
    /// The crossing buffer is always empty afterwards.
    pub fn build_link(&mut self) {
        let mut crossings = std::mem::take(&mut self.crossings);
        if crossings.is_empty() {
            return;
        }
        sort_crossings(&mut crossings, &self.tolerance);
        self.link_sorted(&crossings);
    }

    /// Walk sorted crossings and emit segments.
    fn link_sorted(&mut self, crossings: &[Crossing]) {
        let n = crossings.len();
        let mut i = 0;

        // Leading leaves come from solids containing the origin.
        while i < n && crossings[i].direction == Direction::Leaving {
            let c = &crossings[i];
            self.add_segment(c.solid, self.origin, c.point, c.distance);
            i += 1;
        }

        if i == n {
            debug!(
                "track from {:?}: no entering crossing in {} points",
                self.origin, n
            );
            return;
        }

        // Where a touching pair bridges from.
        let mut work_pt = crossings[i].point;

        while i + 1 < n {
            let current = &crossings[i];
            let next = &crossings[i + 1];
            if current.direction == Direction::Entering && next.direction == Direction::Leaving {
                if self.tolerance.distances_touch(current.distance, next.distance) {
                    // Touching pair: bridge from the last exit.
                    self.add_segment(current.solid, work_pt, current.point, current.distance);
                } else {
                    self.add_segment(current.solid, current.point, next.point, next.distance);
                }
                work_pt = next.point;
                i += 2;
            } else {
                // Not an enter/leave pair.
                debug!(
                    "skipping crossing of {} at distance {}",
                    current.solid, current.distance
                );
                i += 1;
            }
        }
    }

    /// Merge adjacent segments that lie in the same solid.
    pub fn remove_co_joins(&mut self) {
        let mut i = 0;
        while i + 1 < self.segments.len() {
            if self.segments[i].solid == self.segments[i + 1].solid {
                let later = self.segments.remove(i + 1);
                self.segments[i].absorb(&later);
            } else {
                i += 1;
            }
        }
    }

    /// Check that the track is connected from its origin to its last segment.
    ///
    /// Returns 0 when complete (or when there are fewer than two segments),
    /// otherwise the index of the first disconnected segment plus one.
    pub fn non_complete(&self) -> usize {
        if self.segments.len() < 2 {
            return 0;
        }
        if !self
            .tolerance
            .points_coincide(&self.origin, &self.segments[0].entry)
        {
            return 1;
        }
        self.segments
            .windows(2)
            .position(|w| !self.tolerance.points_coincide(&w[0].exit, &w[1].entry))
            .map_or(0, |k| k + 2)
    }

    /// [`Track::non_complete`] as a `Result`.
    pub fn check_complete(&self) -> Result<()> {
        match self.non_complete() {
            0 => Ok(()),
            n => Err(TrackError::Gap { segment: n - 1 }),
        }
    }

    /// Total length of track lying inside any solid.
    pub fn total_distance_inside(&self) -> f64 {
        self.segments.iter().map(|s| s.length).sum()
    }

    /// Length of track lying inside `solid`.
    pub fn distance_in(&self, solid: SolidId) -> f64 {
        self.segments
            .iter()
            .filter(|s| s.solid == solid)
            .map(|s| s.length)
            .sum()
    }

    /// Beer-Lambert transmission along the track.
    ///
    /// `mu` gives the linear attenuation coefficient of each solid, in
    /// inverse track length units.
    pub fn attenuation<F>(&self, mu: F) -> f64
    where
        F: Fn(SolidId) -> f64,
    {
        let exponent: f64 = self.segments.iter().map(|s| mu(s.solid) * s.length).sum();
        (-exponent).exp()
    }
}

impl<'a> IntoIterator for &'a Track {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
