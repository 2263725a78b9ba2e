//! Clipped integer bounds

use inkpath_core::Path;

/// Axis-aligned integer bounding rectangle of a contour
///
/// Float geometry is rounded outwards and saturated into `i32` range, so
/// huge coordinates clamp to the maximal representable rectangle instead
/// of overflowing. Each value is computed per call; there is no shared
/// scratch state between paths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PixelBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl PixelBounds {
    /// The degenerate empty rectangle
    pub const EMPTY: PixelBounds = PixelBounds {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    /// Compute the clipped bounds of a contour
    ///
    /// Curve control points are included (same convention as
    /// [`Path::bounds`]); an empty contour yields [`PixelBounds::EMPTY`].
    pub fn of(path: &Path) -> Self {
        if path.is_empty() {
            return Self::EMPTY;
        }

        let rect = path.bounds();
        // `as` saturates out-of-range floats into the integer's range
        Self {
            left: rect.x().floor() as i32,
            top: rect.y().floor() as i32,
            right: (rect.x() + rect.width()).ceil() as i32,
            bottom: (rect.y() + rect.height()).ceil() as i32,
        }
    }

    /// Width, saturated when the rect spans the full `i32` range
    pub fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    /// Height, saturated when the rect spans the full `i32` range
    pub fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    pub fn is_empty(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }
}
