//! SVG loading and viewport fitting for inkpath
//!
//! This crate turns an SVG file into measurable contours ready for
//! draw-on animation. It uses `usvg` for parsing and simplification of
//! SVG files; decoded path geometry is fitted into a target viewport with
//! a uniform scale-and-center transform and handed to `inkpath_measure`.
//!
//! # Example
//!
//! ```ignore
//! use inkpath_svg::SvgSource;
//!
//! let mut source = SvgSource::new();
//! source.load_file("logo.svg");
//!
//! // One measurable path per contour, fitted into a 400x300 viewport
//! for path in source.paths_for_viewport(400.0, 300.0)? {
//!     path.set_drawn_length(path.length() * 0.5);
//! }
//! ```

mod document;
mod error;
mod fit;
mod path;
mod source;

pub use document::SvgDocument;
pub use error::SvgError;
pub use fit::FitTransform;
pub use source::SvgSource;
