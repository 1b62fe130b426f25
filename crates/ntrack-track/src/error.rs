//! Error types for track validation.

use thiserror::Error;

/// Problems detected in a built track.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackError {
    /// The track does not join up before the given segment index.
    ///
    /// Index 0 means the first segment does not start at the track origin.
    #[error("track has a gap before segment {segment}")]
    Gap {
        /// Index of the first segment that does not join its predecessor.
        segment: usize,
    },
}

/// Result type for track operations.
pub type Result<T> = std::result::Result<T, TrackError>;
