//! Arc-length measurement and progressive truncation
//!
//! A [`MeasuredPath`] flattens its contour once at construction into a
//! table of straight pieces with cumulative arc lengths. Each animation
//! frame then locates the cut point with two binary searches (command
//! table, then flat pieces) and a single linear interpolation — never a
//! full re-measure of the contour.

use std::fmt;

use inkpath_core::{Path, PathCommand, Point};

use crate::bounds::PixelBounds;
use crate::error::MeasureError;
use crate::flatten::{flatten_cubic, flatten_quad};

/// Flattening configuration for path measurement
///
/// The tolerance is the maximum distance between a curve and the polyline
/// that stands in for it, in device units. It feeds arc-length
/// measurement, so it is fixed per path set: measuring two contours of
/// one document at different tolerances would skew their relative
/// animation timing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeasureOptions {
    pub tolerance: f32,
}

impl MeasureOptions {
    /// Quarter-pixel default; curve lengths land well within a pixel of
    /// their true value at on-screen scales.
    pub const DEFAULT_TOLERANCE: f32 = 0.25;

    pub fn new() -> Self {
        Self {
            tolerance: Self::DEFAULT_TOLERANCE,
        }
    }

    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }
}

impl Default for MeasureOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// One straight piece of the flattened contour
#[derive(Clone, Copy, Debug)]
struct FlatPiece {
    from: Point,
    to: Point,
    /// Cumulative arc length at the end of this piece
    end_length: f32,
    /// Index of the source command in the original contour
    command: usize,
}

/// A contour with a measured arc length and an adjustable drawn prefix
///
/// Wraps one immutable original contour. [`set_drawn_length`] replaces the
/// current contour with the prefix of the original spanning arc length
/// `[0, length]`, recomputes the clipped bounds, and synchronously
/// notifies the registered step observer, if any.
///
/// The total length is computed once from the original contour and never
/// changes afterwards, no matter how the path is truncated.
///
/// [`set_drawn_length`]: MeasuredPath::set_drawn_length
pub struct MeasuredPath {
    original: Path,
    current: Path,
    total_length: f32,
    /// Flattened pieces of every drawable command, in contour order
    pieces: Vec<FlatPiece>,
    /// Cumulative arc length at the end of each original command
    command_end: Vec<f32>,
    /// Index into `pieces` of each command's first piece
    command_piece: Vec<usize>,
    start: Point,
    end: Point,
    bounds: PixelBounds,
    tip: Point,
    observer: Option<Box<dyn FnMut()>>,
}

impl MeasuredPath {
    /// Measure a contour with the default flattening tolerance
    ///
    /// Never fails for well-formed finite geometry; a contour with no
    /// drawable segments yields a total length of `0` and empty bounds.
    pub fn new(path: Path) -> Result<Self, MeasureError> {
        Self::with_options(path, MeasureOptions::default())
    }

    /// Measure a contour with explicit options
    pub fn with_options(path: Path, options: MeasureOptions) -> Result<Self, MeasureError> {
        if !options.tolerance.is_finite() || options.tolerance <= 0.0 {
            return Err(MeasureError::InvalidTolerance {
                tolerance: options.tolerance,
            });
        }
        if let Some(command) = path.commands().iter().position(|c| !c.is_finite()) {
            return Err(MeasureError::NonFinite { command });
        }

        let command_count = path.commands().len();
        let mut pieces: Vec<FlatPiece> = Vec::new();
        let mut command_end = Vec::with_capacity(command_count);
        let mut command_piece = Vec::with_capacity(command_count);
        let mut length = 0.0f32;

        let mut pen = Point::ZERO;
        let mut subpath_start = Point::ZERO;

        for (index, command) in path.commands().iter().enumerate() {
            command_piece.push(pieces.len());
            match command {
                PathCommand::MoveTo(p) => {
                    pen = *p;
                    subpath_start = *p;
                }
                PathCommand::LineTo(p) => {
                    push_piece(&mut pieces, &mut length, index, pen, *p);
                    pen = *p;
                }
                PathCommand::QuadTo { control, end } => {
                    let mut prev = pen;
                    flatten_quad(pen, *control, *end, options.tolerance, &mut |p| {
                        push_piece(&mut pieces, &mut length, index, prev, p);
                        prev = p;
                    });
                    pen = *end;
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    end,
                } => {
                    let mut prev = pen;
                    flatten_cubic(pen, *control1, *control2, *end, options.tolerance, &mut |p| {
                        push_piece(&mut pieces, &mut length, index, prev, p);
                        prev = p;
                    });
                    pen = *end;
                }
                PathCommand::Close => {
                    push_piece(&mut pieces, &mut length, index, pen, subpath_start);
                    pen = subpath_start;
                }
            }
            command_end.push(length);
        }

        let start = match path.commands().first() {
            Some(PathCommand::MoveTo(p)) => *p,
            _ => Point::ZERO,
        };

        tracing::trace!(
            "measured contour: {} commands, {} flat pieces, length {}",
            command_count,
            pieces.len(),
            length
        );

        let bounds = PixelBounds::of(&path);
        Ok(Self {
            original: path.clone(),
            current: path,
            total_length: length,
            pieces,
            command_end,
            command_piece,
            start,
            end: pen,
            bounds,
            tip: pen,
            observer: None,
        })
    }

    /// Total arc length of the original contour
    ///
    /// Immutable after construction; truncation never changes it.
    pub fn length(&self) -> f32 {
        self.total_length
    }

    /// Clipped integer bounds of the current (possibly truncated) contour
    pub fn bounds(&self) -> PixelBounds {
        self.bounds
    }

    /// Position on the contour at the current drawn length
    ///
    /// This is where a pen sprite belongs while the path draws itself on.
    pub fn tip(&self) -> Point {
        self.tip
    }

    /// The current, possibly truncated, contour
    pub fn path(&self) -> &Path {
        &self.current
    }

    /// The original untruncated contour
    pub fn original(&self) -> &Path {
        &self.original
    }

    /// Truncate the contour to the prefix spanning arc length `[0, length]`
    ///
    /// `length <= 0` truncates to nothing; `length >= total` (or a
    /// non-finite length) restores the full original contour — out-of-range
    /// progress is never an error. When the cut lands mid-segment the
    /// prefix is terminated with a zero-length line at the cut point, so
    /// the truncated geometry always remains a valid drawable path.
    ///
    /// The registered step observer runs synchronously after the contour,
    /// bounds, and tip have all been updated.
    pub fn set_drawn_length(&mut self, length: f32) {
        if length <= 0.0 {
            self.current = Path::new();
            self.tip = self.start;
        } else if !(length < self.total_length) {
            self.current = self.original.clone();
            self.tip = self.end;
        } else {
            let (prefix, tip) = self.prefix(length);
            self.current = prefix;
            self.tip = tip;
        }
        self.bounds = PixelBounds::of(&self.current);

        if let Some(observer) = self.observer.as_mut() {
            observer();
        }
    }

    /// Register the single step observer, replacing any previous one
    ///
    /// The observer is invoked synchronously after every
    /// [`set_drawn_length`](MeasuredPath::set_drawn_length) call and at no
    /// other time.
    pub fn set_step_observer(&mut self, observer: impl FnMut() + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Remove the step observer
    pub fn clear_step_observer(&mut self) {
        self.observer = None;
    }

    /// Build the prefix contour for an in-range length, `0 < length < total`
    fn prefix(&self, length: f32) -> (Path, Point) {
        // First command whose cumulative end length exceeds the target.
        // Zero-extent commands (MoveTo) tie with their predecessor and are
        // skipped, so `cut` always has drawable extent.
        let cut = self.command_end.partition_point(|&end| end <= length);
        debug_assert!(cut < self.command_end.len());

        let mut commands = Vec::with_capacity(cut + 4);
        commands.extend_from_slice(&self.original.commands()[..cut]);

        // Piece containing the cut point, then the fully covered pieces of
        // the cut command before it.
        let target = self.pieces.partition_point(|piece| piece.end_length <= length);
        debug_assert!(target < self.pieces.len());
        let piece = self.pieces[target];
        debug_assert_eq!(piece.command, cut);

        for covered in &self.pieces[self.command_piece[cut]..target] {
            commands.push(PathCommand::LineTo(covered.to));
        }

        let piece_length = piece.from.distance_to(piece.to);
        let t = ((length - (piece.end_length - piece_length)) / piece_length).clamp(0.0, 1.0);
        let tip = piece.from.lerp(piece.to, t);

        commands.push(PathCommand::LineTo(tip));
        // Zero-length terminator keeps a mid-segment cut drawable
        commands.push(PathCommand::LineTo(tip));

        (Path::from_commands(commands), tip)
    }
}

impl fmt::Debug for MeasuredPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MeasuredPath")
            .field("total_length", &self.total_length)
            .field("bounds", &self.bounds)
            .field("tip", &self.tip)
            .field("observer", &self.observer.is_some())
            .finish_non_exhaustive()
    }
}

/// Append one straight piece, skipping zero-length pieces so the
/// cumulative table stays strictly increasing within a command.
fn push_piece(
    pieces: &mut Vec<FlatPiece>,
    length: &mut f32,
    command: usize,
    from: Point,
    to: Point,
) {
    let d = from.distance_to(to);
    if d > 0.0 {
        *length += d;
        pieces.push(FlatPiece {
            from,
            to,
            end_length: *length,
            command,
        });
    }
}
