//! Inkpath path measurement
//!
//! The measuring core of the inkpath draw-on animation library:
//!
//! - **MeasuredPath**: wraps one contour, computes its total arc length
//!   once, and supports truncating the contour to an arbitrary arc-length
//!   prefix in place — the primitive behind progressive "draw-on"
//!   animation
//! - **PixelBounds**: the contour's axis-aligned integer bounding box,
//!   recomputed after every truncation and saturated into `i32` range
//! - **MeasureOptions**: the flattening tolerance used when curves are
//!   reduced to line segments for measurement
//!
//! An animation driver typically fits an SVG once, then per frame calls
//! [`MeasuredPath::set_drawn_length`] on each path with a growing length
//! between `0` and [`MeasuredPath::length`], and strokes
//! [`MeasuredPath::path`]:
//!
//! ```
//! use inkpath_core::Path;
//! use inkpath_measure::MeasuredPath;
//!
//! let contour = Path::new().move_to(0.0, 0.0).line_to(10.0, 0.0);
//! let mut measured = MeasuredPath::new(contour)?;
//!
//! assert_eq!(measured.length(), 10.0);
//! measured.set_drawn_length(measured.length() * 0.5);
//! // measured.path() now ends at (5, 0)
//! # Ok::<(), inkpath_measure::MeasureError>(())
//! ```
//!
//! All operations are synchronous and single-threaded; callers sharing a
//! path across threads provide their own synchronization.

mod bounds;
mod error;
mod flatten;
mod measure;

pub use bounds::PixelBounds;
pub use error::MeasureError;
pub use measure::{MeasureOptions, MeasuredPath};
