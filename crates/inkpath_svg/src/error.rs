//! SVG error types

use std::io;

use inkpath_measure::MeasureError;
use thiserror::Error;

/// Errors that can occur when loading or fitting SVG documents
#[derive(Error, Debug)]
pub enum SvgError {
    /// IO error when reading the file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// SVG parsing error
    #[error("SVG parsing error: {0}")]
    Parse(String),

    /// The target viewport has no area
    #[error("viewport has no area: {width}x{height}")]
    EmptyViewport { width: f32, height: f32 },

    /// The document declares a zero-sized intrinsic viewBox
    #[error("document has a zero-sized viewBox")]
    EmptyDocument,

    /// A fitted contour could not be measured
    #[error("contour measuring error: {0}")]
    Geometry(#[from] MeasureError),
}
