//! Measurement error types

use thiserror::Error;

/// Errors detected when a contour is measured
///
/// All preconditions are validated once, when a `MeasuredPath` is
/// constructed; per-frame operations never fail.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MeasureError {
    /// The contour carries a NaN or infinite coordinate
    #[error("non-finite coordinate in path command {command}")]
    NonFinite {
        /// Index of the offending command in the contour
        command: usize,
    },

    /// The flattening tolerance is not a positive finite number
    #[error("invalid flattening tolerance {tolerance}")]
    InvalidTolerance { tolerance: f32 },
}
