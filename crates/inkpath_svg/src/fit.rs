//! Uniform scale-and-center viewport fitting

use inkpath_core::{Path, PathCommand, Point};

use crate::error::SvgError;

/// Uniform transform mapping document coordinates into a target viewport
///
/// The scale preserves aspect ratio (`min` of the per-axis ratios) and the
/// scaled content is centered, so the document always fits entirely inside
/// the viewport with symmetric margins on the loose axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitTransform {
    pub scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl FitTransform {
    /// Compute the fit of a document of intrinsic size
    /// `doc_width x doc_height` into a `width x height` viewport
    ///
    /// Degenerate sizes are rejected here, before any geometry reaches the
    /// measuring layer: a non-positive or non-finite viewport is
    /// [`SvgError::EmptyViewport`], a zero-sized document is
    /// [`SvgError::EmptyDocument`].
    pub fn fit(doc_width: f32, doc_height: f32, width: f32, height: f32) -> Result<Self, SvgError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(SvgError::EmptyViewport { width, height });
        }
        if !(doc_width.is_finite() && doc_height.is_finite() && doc_width > 0.0 && doc_height > 0.0)
        {
            return Err(SvgError::EmptyDocument);
        }

        let scale = (width / doc_width).min(height / doc_height);
        Ok(Self {
            scale,
            offset_x: (width - doc_width * scale) / 2.0,
            offset_y: (height - doc_height * scale) / 2.0,
        })
    }

    /// Map a document-space point into viewport space
    pub fn apply_point(&self, p: Point) -> Point {
        Point::new(p.x * self.scale + self.offset_x, p.y * self.scale + self.offset_y)
    }

    /// Map a whole contour into viewport space
    pub fn apply(&self, path: &Path) -> Path {
        let map = |p: &Point| self.apply_point(*p);

        let commands = path
            .commands()
            .iter()
            .map(|cmd| match cmd {
                PathCommand::MoveTo(p) => PathCommand::MoveTo(map(p)),
                PathCommand::LineTo(p) => PathCommand::LineTo(map(p)),
                PathCommand::QuadTo { control, end } => PathCommand::QuadTo {
                    control: map(control),
                    end: map(end),
                },
                PathCommand::CubicTo {
                    control1,
                    control2,
                    end,
                } => PathCommand::CubicTo {
                    control1: map(control1),
                    control2: map(control2),
                    end: map(end),
                },
                PathCommand::Close => PathCommand::Close,
            })
            .collect();

        Path::from_commands(commands)
    }
}
