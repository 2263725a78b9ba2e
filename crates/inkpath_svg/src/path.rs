//! SVG path conversion to inkpath contours

use inkpath_core::{Path, PathCommand, Point};

/// Convert usvg path data into one contour per subpath
///
/// A single SVG path element may carry several `M` subpaths. Each subpath
/// is measured and animated independently downstream, so they are split
/// here; every emitted contour starts with its own `MoveTo`. The node's
/// absolute transform is applied to every coordinate, control points
/// included.
pub(crate) fn append_contours(
    path_data: &usvg::tiny_skia_path::Path,
    transform: &usvg::Transform,
    out: &mut Vec<Path>,
) {
    let map = |p: usvg::tiny_skia_path::Point| -> Point {
        Point::new(
            transform.sx * p.x + transform.kx * p.y + transform.tx,
            transform.ky * p.x + transform.sy * p.y + transform.ty,
        )
    };

    let mut commands: Vec<PathCommand> = Vec::new();

    for segment in path_data.segments() {
        match segment {
            usvg::tiny_skia_path::PathSegment::MoveTo(p) => {
                if !commands.is_empty() {
                    out.push(Path::from_commands(std::mem::take(&mut commands)));
                }
                commands.push(PathCommand::MoveTo(map(p)));
            }
            usvg::tiny_skia_path::PathSegment::LineTo(p) => {
                commands.push(PathCommand::LineTo(map(p)));
            }
            usvg::tiny_skia_path::PathSegment::QuadTo(c, e) => {
                commands.push(PathCommand::QuadTo {
                    control: map(c),
                    end: map(e),
                });
            }
            usvg::tiny_skia_path::PathSegment::CubicTo(c1, c2, e) => {
                commands.push(PathCommand::CubicTo {
                    control1: map(c1),
                    control2: map(c2),
                    end: map(e),
                });
            }
            usvg::tiny_skia_path::PathSegment::Close => {
                commands.push(PathCommand::Close);
            }
        }
    }

    if !commands.is_empty() {
        out.push(Path::from_commands(commands));
    }
}
