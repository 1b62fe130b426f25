//! Tracing rays through a set of solids.

use log::{debug, warn};
use ntrack_math::Tolerance;
use ntrack_track::{Direction, Track, TrackError};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TraceError};
use crate::intersect::Solid;
use crate::Ray;

/// Tracing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceSettings {
    /// Tolerances handed to every track.
    pub tolerance: Tolerance,
    /// Reject tracks that are not connected from the ray origin onwards.
    pub require_complete: bool,
}

impl Default for TraceSettings {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::DEFAULT,
            require_complete: true,
        }
    }
}

impl TraceSettings {
    /// Load settings from TOML.
    ///
    /// ```toml
    /// require_complete = false
    ///
    /// [tolerance]
    /// surface = 1e-5
    /// track = 1e-6
    /// ```
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let settings: TraceSettings = toml::from_str(src)?;
        settings.tolerance.validate()?;
        Ok(settings)
    }
}

/// Trace a single ray through `solids` and build its track.
///
/// The origin is placed in the first solid that contains it. A leaving
/// crossing within the surface tolerance of the origin, from a solid that
/// does not contain the origin, is dropped. Adjacent segments in the same
/// solid are merged.
pub fn trace(ray: &Ray, solids: &[Box<dyn Solid>], tolerance: Tolerance) -> Track {
    let initial = solids
        .iter()
        .find(|s| s.contains(&ray.origin))
        .map(|s| s.id());

    let mut track =
        Track::with_tolerance(ray.origin, ray.direction.into_inner(), initial, tolerance);
    for solid in solids {
        let inside = solid.contains(&ray.origin);
        for hit in solid.intersect(ray) {
            let at_origin = hit.distance <= tolerance.surface;
            if !inside && at_origin && hit.direction == Direction::Leaving {
                debug!("dropping leave of {} at the ray origin", solid.id());
                continue;
            }
            track.add_point(solid.id(), hit.direction, hit.point);
        }
    }
    track.build_link();
    track.remove_co_joins();
    track
}

/// Outcome of tracing a batch of rays.
#[derive(Debug, Default)]
pub struct TraceBatch {
    /// Accepted tracks with the index of the ray that produced them.
    pub tracks: Vec<(usize, Track)>,
    /// Rays whose tracks failed the completeness check.
    pub rejected: Vec<TraceError>,
}

/// Trace many rays in parallel.
///
/// A ray whose track has a gap is logged and reported in
/// [`TraceBatch::rejected`] when `require_complete` is set; the rest of the
/// batch is unaffected.
pub fn trace_batch(
    rays: &[Ray],
    solids: &[Box<dyn Solid>],
    settings: &TraceSettings,
) -> TraceBatch {
    let results: Vec<std::result::Result<(usize, Track), TraceError>> = rays
        .par_iter()
        .enumerate()
        .map(|(index, ray)| {
            let track = trace(ray, solids, settings.tolerance);
            if settings.require_complete {
                check(index, &track)?;
            }
            Ok((index, track))
        })
        .collect();

    let mut batch = TraceBatch::default();
    for result in results {
        match result {
            Ok(entry) => batch.tracks.push(entry),
            Err(err) => {
                warn!("skipping ray: {err}");
                batch.rejected.push(err);
            }
        }
    }
    debug!(
        "traced {} rays: {} accepted, {} rejected",
        rays.len(),
        batch.tracks.len(),
        batch.rejected.len()
    );
    batch
}

fn check(ray: usize, track: &Track) -> std::result::Result<(), TraceError> {
    track
        .check_complete()
        .map_err(|source: TrackError| TraceError::Incomplete { ray, source })
}
