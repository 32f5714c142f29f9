//! Error handling for Bowlkit
//!
//! Geometry errors raised at the engine boundary: invalid control points,
//! ring or segment configuration. File-facing layers wrap these with
//! `anyhow` context or their own error types.

use thiserror::Error;

/// Geometry error type
///
/// Raised when inputs handed to the geometry engine would otherwise
/// propagate `NaN` or `Infinity` through the arithmetic. Inputs are checked
/// once at the boundary; the numerical pipeline itself does not fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Control point count is not `1 + 3k` with `k >= 1`
    #[error("Invalid control point count {count}: expected 1 + 3k points with k >= 1")]
    InvalidControlPointCount {
        /// The number of control points supplied.
        count: usize,
    },

    /// Zero-length step in a polyline handed to the curve offsetter
    #[error("Degenerate curve segment at index {index}: consecutive points coincide")]
    DegenerateSegment {
        /// Index of the first point of the zero-length step.
        index: usize,
    },

    /// Ring segment configuration is unusable
    #[error("Invalid segment configuration for ring {ring}: {reason}")]
    InvalidSegmentConfig {
        /// Index of the offending ring.
        ring: usize,
        /// What is wrong with the configuration.
        reason: String,
    },

    /// Ring height is zero, negative or not finite
    #[error("Invalid height {height} for ring {ring}: must be positive and finite")]
    InvalidRingHeight {
        /// Index of the offending ring.
        ring: usize,
        /// The rejected height.
        height: f64,
    },

    /// A scalar parameter is out of range
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// The parameter name.
        name: String,
        /// The reason the parameter is invalid.
        reason: String,
    },

    /// A polyline operation received too few points
    #[error("Polyline needs at least 2 points, got {count}")]
    TooFewPoints {
        /// The number of points supplied.
        count: usize,
    },
}

impl GeometryError {
    /// Shorthand for [`GeometryError::InvalidParameter`].
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for [`GeometryError::InvalidSegmentConfig`].
    pub fn invalid_segments(ring: usize, reason: impl Into<String>) -> Self {
        Self::InvalidSegmentConfig {
            ring,
            reason: reason.into(),
        }
    }
}
