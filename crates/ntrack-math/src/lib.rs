#![warn(missing_docs)]

//! Math types for the ntrack segment engine.
//!
//! Thin aliases around nalgebra for points and directions along a track,
//! plus the tolerance configuration every comparison in the engine reads.

use nalgebra::{Unit, Vector3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// Errors raised while loading or validating a [`Tolerance`].
#[derive(Error, Debug)]
pub enum ToleranceError {
    /// The TOML source could not be parsed.
    #[error("failed to parse tolerance config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A tolerance value is not usable.
    #[error("invalid tolerance: {0}")]
    Invalid(String),
}

/// Tolerance values used when comparing crossings and segments.
///
/// `surface` decides whether two crossings happen at the same place along
/// the ray. `track` is the tighter bound used when checking that adjacent
/// segments join up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerance {
    /// Below this two crossing distances touch.
    pub surface: f64,
    /// Maximum separation of segment end points in a connected track.
    pub track: f64,
}

impl Tolerance {
    /// Default tolerances (1e-5 surface, 1e-6 track).
    pub const DEFAULT: Self = Self {
        surface: 1e-5,
        track: 1e-6,
    };

    /// Create a tolerance pair, validating both values.
    pub fn new(surface: f64, track: f64) -> Result<Self, ToleranceError> {
        let tol = Self { surface, track };
        tol.validate()?;
        Ok(tol)
    }

    /// Load tolerances from a TOML table such as `surface = 1e-5`.
    ///
    /// Missing keys fall back to [`Tolerance::DEFAULT`].
    pub fn from_toml_str(src: &str) -> Result<Self, ToleranceError> {
        let tol: Tolerance = toml::from_str(src)?;
        tol.validate()?;
        Ok(tol)
    }

    /// Check that both values are finite and strictly positive.
    pub fn validate(&self) -> Result<(), ToleranceError> {
        for (name, value) in [("surface", self.surface), ("track", self.track)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ToleranceError::Invalid(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Check if two distances along a ray are the same surface crossing.
    #[inline]
    pub fn distances_touch(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.surface
    }

    /// Check if two segment end points coincide for completeness purposes.
    #[inline]
    pub fn points_coincide(&self, a: &Point3, b: &Point3) -> bool {
        (a - b).norm() <= self.track
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
