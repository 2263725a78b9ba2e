//! Inkpath core geometry
//!
//! Foundational types shared by the inkpath crates:
//!
//! - **Point / Size / Rect**: plain 2D geometry
//! - **Path / PathCommand**: a vector contour as an ordered command list
//! - **PathBuilder**: fluent, cursor-tracking path construction
//!
//! A `Path` here is one *contour*: a single connected run of drawing
//! commands, open or closed. Producers that decode multi-subpath sources
//! (such as the SVG layer) split their input so that every `Path` starts
//! with exactly one `MoveTo`.

mod geometry;
mod path;

pub use geometry::{Point, Rect, Size};
pub use path::{Path, PathBuilder, PathCommand};
