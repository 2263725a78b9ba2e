//! Curve flattening
//!
//! Quadratic and cubic Béziers are reduced to polylines by recursive
//! midpoint subdivision. A curve piece is emitted as a straight chord once
//! its control points sit within `tolerance` of the chord, so the polyline
//! never strays further than the tolerance from the true curve. The same
//! tolerance is used for every contour of a document — it feeds arc-length
//! measurement, and mixing tolerances would skew length-based animation
//! timing between contours.

use inkpath_core::Point;

/// Subdivision cutoff. 2^16 chords per curve is far below any tolerance
/// a caller can express in f32, so this only guards degenerate input.
const MAX_DEPTH: u32 = 16;

/// Flatten a quadratic Bézier, emitting every chord endpoint except the
/// start point.
pub(crate) fn flatten_quad(
    from: Point,
    control: Point,
    end: Point,
    tolerance: f32,
    sink: &mut dyn FnMut(Point),
) {
    quad_recursive(from, control, end, tolerance * tolerance, 0, sink);
}

/// Flatten a cubic Bézier, emitting every chord endpoint except the start
/// point.
pub(crate) fn flatten_cubic(
    from: Point,
    control1: Point,
    control2: Point,
    end: Point,
    tolerance: f32,
    sink: &mut dyn FnMut(Point),
) {
    cubic_recursive(from, control1, control2, end, tolerance * tolerance, 0, sink);
}

fn quad_recursive(
    p0: Point,
    p1: Point,
    p2: Point,
    tolerance_sq: f32,
    depth: u32,
    sink: &mut dyn FnMut(Point),
) {
    if depth >= MAX_DEPTH || segment_distance_sq(p1, p0, p2) <= tolerance_sq {
        sink(p2);
        return;
    }

    // de Casteljau split at t = 1/2
    let p01 = p0.midpoint(p1);
    let p12 = p1.midpoint(p2);
    let mid = p01.midpoint(p12);

    quad_recursive(p0, p01, mid, tolerance_sq, depth + 1, sink);
    quad_recursive(mid, p12, p2, tolerance_sq, depth + 1, sink);
}

fn cubic_recursive(
    p0: Point,
    p1: Point,
    p2: Point,
    p3: Point,
    tolerance_sq: f32,
    depth: u32,
    sink: &mut dyn FnMut(Point),
) {
    let flat = segment_distance_sq(p1, p0, p3) <= tolerance_sq
        && segment_distance_sq(p2, p0, p3) <= tolerance_sq;
    if depth >= MAX_DEPTH || flat {
        sink(p3);
        return;
    }

    // de Casteljau split at t = 1/2
    let p01 = p0.midpoint(p1);
    let p12 = p1.midpoint(p2);
    let p23 = p2.midpoint(p3);
    let p012 = p01.midpoint(p12);
    let p123 = p12.midpoint(p23);
    let mid = p012.midpoint(p123);

    cubic_recursive(p0, p01, p012, mid, tolerance_sq, depth + 1, sink);
    cubic_recursive(mid, p123, p23, p3, tolerance_sq, depth + 1, sink);
}

/// Squared distance from `p` to the segment `a..b`
///
/// Falls back to the distance to `a` when the segment is degenerate, which
/// keeps the flatness test meaningful for loops whose endpoints coincide.
fn segment_distance_sq(p: Point, a: Point, b: Point) -> f32 {
    let abx = b.x - a.x;
    let aby = b.y - a.y;
    let apx = p.x - a.x;
    let apy = p.y - a.y;

    let len_sq = abx * abx + aby * aby;
    if len_sq <= f32::EPSILON {
        return apx * apx + apy * apy;
    }

    let t = ((apx * abx + apy * aby) / len_sq).clamp(0.0, 1.0);
    let dx = apx - abx * t;
    let dy = apy - aby * t;
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polyline_length(points: &[Point]) -> f32 {
        points
            .windows(2)
            .map(|pair| pair[0].distance_to(pair[1]))
            .sum()
    }

    fn collect_quad(from: Point, control: Point, end: Point, tolerance: f32) -> Vec<Point> {
        let mut points = vec![from];
        flatten_quad(from, control, end, tolerance, &mut |p| points.push(p));
        points
    }

    fn collect_cubic(
        from: Point,
        c1: Point,
        c2: Point,
        end: Point,
        tolerance: f32,
    ) -> Vec<Point> {
        let mut points = vec![from];
        flatten_cubic(from, c1, c2, end, tolerance, &mut |p| points.push(p));
        points
    }

    #[test]
    fn test_collinear_quad_is_a_single_chord() {
        let points = collect_quad(
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(10.0, 0.0),
            0.25,
        );
        assert_eq!(points.len(), 2);
        assert_eq!(points[1], Point::new(10.0, 0.0));
    }

    #[test]
    fn test_flattening_ends_at_curve_endpoint() {
        let end = Point::new(10.0, 0.0);
        let points = collect_cubic(
            Point::new(0.0, 0.0),
            Point::new(0.0, 10.0),
            Point::new(10.0, 10.0),
            end,
            0.25,
        );
        assert_eq!(*points.last().unwrap(), end);
        assert!(points.len() > 2);
    }

    #[test]
    fn test_tighter_tolerance_yields_longer_polyline() {
        // A flattened polyline is inscribed in the curve, so refining the
        // tolerance can only bring its length up towards the true length.
        let quad = |tolerance| {
            polyline_length(&collect_quad(
                Point::new(0.0, 0.0),
                Point::new(50.0, 100.0),
                Point::new(100.0, 0.0),
                tolerance,
            ))
        };
        let coarse = quad(5.0);
        let fine = quad(0.01);
        assert!(fine >= coarse);
        // Known arc length of this parabolic segment is ~147.89
        assert!((fine - 147.89).abs() < 0.1);
    }

    #[test]
    fn test_quarter_circle_cubic_length() {
        // Standard cubic approximation of a quarter circle of radius 100
        let k = 0.5522847498f32 * 100.0;
        let points = collect_cubic(
            Point::new(100.0, 0.0),
            Point::new(100.0, k),
            Point::new(k, 100.0),
            Point::new(0.0, 100.0),
            0.1,
        );
        let length = polyline_length(&points);
        let expected = std::f32::consts::FRAC_PI_2 * 100.0;
        assert!((length - expected).abs() < 0.5);
    }
}
