//! Error types for the tracing driver.

use ntrack_math::ToleranceError;
use ntrack_track::TrackError;
use thiserror::Error;

/// Errors that can occur while configuring or running a trace.
#[derive(Error, Debug)]
pub enum TraceError {
    /// The traced track was not connected end to end.
    #[error("ray {ray} produced an incomplete track")]
    Incomplete {
        /// Index of the ray in the batch.
        ray: usize,
        /// Where the gap was found.
        #[source]
        source: TrackError,
    },

    /// Settings could not be parsed.
    #[error("failed to parse trace settings: {0}")]
    Parse(#[from] toml::de::Error),

    /// Tolerance values are not usable.
    #[error(transparent)]
    Tolerance(#[from] ToleranceError),
}

/// Result type for tracing operations.
pub type Result<T> = std::result::Result<T, TraceError>;
